//! 结果处理：dry-run 打印，否则逐个删除
use std::io::Write;
use std::path::PathBuf;

use tracing::warn;

use crate::options::ScanStats;

/// 输出 Result 段并处理命中路径
///
/// 删除失败只打印错误并继续处理剩余路径，不影响返回值；
/// 只有写 `out` 失败才返回错误。
pub fn execute(paths: &[PathBuf], dry_run: bool, out: &mut dyn Write, stats: &mut ScanStats) -> std::io::Result<()> {
    writeln!(out, "\nResult")?;
    for path in paths {
        if dry_run {
            writeln!(out, "{}", path.display())?;
            continue;
        }
        match std::fs::remove_file(path) {
            Ok(()) => stats.deleted += 1,
            Err(err) => {
                stats.failed += 1;
                warn!(path = %path.display(), %err, "delete failed");
                writeln!(out, "error removing file {}: {}", path.display(), err)?;
            }
        }
    }
    Ok(())
}
