//! 错误类型
use std::path::PathBuf;

use thiserror::Error;

/// 扫描期间的致命错误；删除失败不在此列（逐个报告后继续）
#[derive(Debug, Error)]
pub enum ScanError {
    /// 模式无法编译：整个模式集作废
    #[error("invalid pattern `{pattern}`: {source}")]
    InvalidPattern {
        pattern: String,
        #[source]
        source: regex::Error,
    },

    /// 遍历出错（权限、坏链接等），整次运行中止
    #[error("walking {}: {source}", .root.display())]
    Walk {
        root: PathBuf,
        #[source]
        source: walkdir::Error,
    },

    /// 结果输出失败
    #[error("writing result: {0}")]
    Output(#[from] std::io::Error),
}
