//! 扫描选项与统计信息（模块）
use std::path::PathBuf;

/// 未指定任何路径时使用的默认根目录
pub const DEFAULT_ROOT: &str = "//sokrates/Photos";

/// 工作目录下的模式覆盖文件名（每行一个正则）
pub const PATTERN_FILE_NAME: &str = ".rmcrap";

/// 扫描选项（一次运行内只读，显式传给各组件）
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScanOptions {
    /// 启动时打印配置（模式与路径）
    pub verbose: bool,
    /// 只打印命中路径，不删除
    pub dry_run: bool,
    /// 待扫描的根目录，按给定顺序依次遍历
    pub roots: Vec<PathBuf>,
    /// 模式文件路径；为空则使用工作目录下的 ./.rmcrap
    pub pattern_file: Option<PathBuf>,
}

impl ScanOptions {
    /// 实际使用的模式文件路径
    pub fn pattern_file_path(&self) -> PathBuf {
        self.pattern_file
            .clone()
            .unwrap_or_else(|| PathBuf::from(PATTERN_FILE_NAME))
    }
}

impl Default for ScanOptions {
    fn default() -> Self {
        Self {
            verbose: false,
            dry_run: false,
            roots: vec![PathBuf::from(DEFAULT_ROOT)],
            pattern_file: None,
        }
    }
}

/// 扫描统计信息（便于 CLI 打印）
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct ScanStats {
    pub entries_visited: usize,
    pub files_tested: usize,
    pub matched: usize,
    pub deleted: usize,
    pub failed: usize,
}
