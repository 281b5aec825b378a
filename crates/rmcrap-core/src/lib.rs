//! 垃圾文件清理核心库
//!
//! 流程：加载模式 → 编译 → 依次遍历各根目录收集命中 → 全部遍历结束后统一打印或删除。
//! - 遍历出错立即中止整个运行；删除出错逐个报告后继续。
//! - 命中收集器可被多个遍历者并发写入（当前调用方按根目录串行）。

mod action;
mod collector;
mod error;
mod options;
mod patterns;
mod walk;

use std::io::Write;

pub use action::execute;
pub use collector::PathCollector;
pub use error::ScanError;
pub use options::{ScanOptions, ScanStats, DEFAULT_ROOT, PATTERN_FILE_NAME};
pub use patterns::{parse_pattern_lines, PatternSet, DEFAULT_PATTERNS};
pub use walk::{walk_root, walk_roots};

/// 遍历全部根目录后，将结果段写入 `out`（dry-run 打印路径，否则删除）
pub fn scan_and_clean(opts: &ScanOptions, patterns: &PatternSet, out: &mut dyn Write) -> Result<ScanStats, ScanError> {
    let (found, mut stats) = walk_roots(opts, patterns)?;
    execute(&found, opts.dry_run, out, &mut stats)?;
    Ok(stats)
}
