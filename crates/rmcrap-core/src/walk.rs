//! 目录遍历：深度优先，逐个测试非目录条目的基本名
use std::path::{Component, Path, PathBuf};

use tracing::{debug, info};
use walkdir::WalkDir;

use crate::collector::PathCollector;
use crate::error::ScanError;
use crate::options::{ScanOptions, ScanStats};
use crate::patterns::PatternSet;

/// 遍历单个根目录，把命中的路径登记到 `collector`
///
/// - 每个目录内按文件名排序，不跟随符号链接（链接本身按文件测试）
/// - 任何遍历错误都立即返回，不跳过继续
pub fn walk_root(
    root: &Path,
    patterns: &PatternSet,
    collector: &PathCollector,
    stats: &mut ScanStats,
) -> Result<(), ScanError> {
    info!(root = %root.display(), "walking");
    for entry in WalkDir::new(root).follow_links(false).sort_by_file_name() {
        let entry = entry.map_err(|source| ScanError::Walk { root: root.to_path_buf(), source })?;
        stats.entries_visited += 1;
        if entry.file_type().is_dir() {
            continue;
        }
        stats.files_tested += 1;
        if let Some(idx) = patterns.first_match(entry.file_name()) {
            debug!(path = %entry.path().display(), pattern = %patterns.sources()[idx], "matched");
            stats.matched += 1;
            collector.push(clean_path(entry.path()));
        }
    }
    Ok(())
}

/// 词法清理路径：去掉 `.`，`..` 抵消前一个普通段，空路径记为 `.`
pub(crate) fn clean_path(path: &Path) -> PathBuf {
    let mut out: Vec<Component<'_>> = Vec::new();
    for comp in path.components() {
        match comp {
            Component::CurDir => {}
            Component::ParentDir => match out.last() {
                Some(Component::Normal(_)) => {
                    out.pop();
                }
                // 根目录之上没有父目录
                Some(Component::RootDir | Component::Prefix(_)) => {}
                _ => out.push(comp),
            },
            _ => out.push(comp),
        }
    }
    if out.is_empty() {
        return PathBuf::from(".");
    }
    out.iter().collect()
}

/// 按给定顺序依次遍历所有根目录，返回累积的命中路径
pub fn walk_roots(opts: &ScanOptions, patterns: &PatternSet) -> Result<(Vec<PathBuf>, ScanStats), ScanError> {
    let collector = PathCollector::new();
    let mut stats = ScanStats::default();
    for root in &opts.roots {
        walk_root(root, patterns, &collector, &mut stats)?;
    }
    Ok((collector.into_paths(), stats))
}
