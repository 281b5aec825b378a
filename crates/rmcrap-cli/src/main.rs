use anyhow::{Context, Result};
use clap::error::ErrorKind;
use clap::Parser;
use rmcrap_core::{scan_and_clean, PatternSet, ScanOptions, DEFAULT_ROOT};
use std::ffi::OsString;
use std::io::{self, BufWriter, Write};
use std::path::PathBuf;
use tracing::info;

/// 命令行入口（基于 clap）
#[derive(Parser, Debug)]
// 重复给出同一开关不算错误（-v -v、--dry-run --dry-run）
#[command(name = "rmcrap", version, about = "递归扫描目录，按文件名正则删除垃圾文件", args_override_self = true)]
struct Cli {
    /// 启动时打印当前配置（模式与路径）
    #[arg(short = 'v', long)]
    verbose: bool,

    /// 只列出命中的文件，不删除
    #[arg(long)]
    dry_run: bool,

    /// 模式文件（每行一个正则），默认 ./.rmcrap；不存在时使用内置模式
    #[arg(long, value_name = "FILE")]
    patterns: Option<PathBuf>,

    /// 待扫描的根目录，未指定时使用默认目录
    #[arg(value_name = "PATH")]
    paths: Vec<PathBuf>,
}

impl Cli {
    fn into_options(self) -> ScanOptions {
        let roots = if self.paths.is_empty() { vec![PathBuf::from(DEFAULT_ROOT)] } else { self.paths };
        ScanOptions { verbose: self.verbose, dry_run: self.dry_run, roots, pattern_file: self.patterns }
    }
}

fn main() -> Result<()> {
    // 初始化日志（支持通过 RUST_LOG 控制等级，例如 info、debug）
    init_tracing();

    // clap 把 `--` 当作分隔符、把 `-` 当作路径，这里统一按未知参数拒绝
    if has_bare_dash(std::env::args_os().skip(1)) {
        eprintln!("error: unexpected argument");
        usage();
        std::process::exit(1);
    }

    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        // --help / --version 照常输出并以 0 退出
        Err(err) if matches!(err.kind(), ErrorKind::DisplayHelp | ErrorKind::DisplayVersion) => err.exit(),
        Err(err) => {
            let _ = err.print();
            usage();
            std::process::exit(1);
        }
    };
    let opts = cli.into_options();

    // 模式非法属于配置错误，在任何遍历之前终止
    let pattern_file = opts.pattern_file_path();
    let patterns = match PatternSet::load(&pattern_file) {
        Ok(patterns) => patterns,
        Err(err) => {
            usage();
            return Err(err).context("load patterns");
        }
    };

    let stdout = io::stdout();
    let mut out = BufWriter::new(stdout.lock());
    if opts.verbose {
        dump_options(&mut out, &opts, &patterns)?;
    }

    info!(roots = opts.roots.len(), patterns = patterns.len(), dry_run = opts.dry_run, "starting scan");
    let stats = scan_and_clean(&opts, &patterns, &mut out).context("scan failed")?;
    out.flush()?;

    info!(
        entries_visited = stats.entries_visited,
        files_tested = stats.files_tested,
        matched = stats.matched,
        deleted = stats.deleted,
        failed = stats.failed,
        "scan finished"
    );
    Ok(())
}

fn init_tracing() {
    use tracing_subscriber::{EnvFilter, FmtSubscriber};
    // 日志写到 stderr，stdout 只留给结果输出
    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    let subscriber = FmtSubscriber::builder()
        .with_env_filter(env_filter)
        .with_writer(io::stderr)
        .finish();
    let _ = tracing::subscriber::set_global_default(subscriber);
}

fn has_bare_dash<I: IntoIterator<Item = OsString>>(args: I) -> bool {
    args.into_iter().any(|a| a == "--" || a == "-")
}

fn usage() {
    println!("usage: {} [-v] [--dry-run] [path] [path]...", env!("CARGO_BIN_NAME"));
}

/// 打印启动配置（结尾不换行，紧接 Result 段）
fn dump_options(out: &mut dyn Write, opts: &ScanOptions, patterns: &PatternSet) -> io::Result<()> {
    writeln!(out, "verbose {}", opts.verbose)?;
    writeln!(out, "dryrun  {}", opts.dry_run)?;
    write!(out, "Patterns ")?;
    for p in patterns.sources() {
        write!(out, "{p} ")?;
    }
    write!(out, "\nPaths ")?;
    for p in &opts.roots {
        write!(out, "{} ", p.display())?;
    }
    Ok(())
}
