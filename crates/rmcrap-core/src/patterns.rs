//! 模式集：加载（模式文件或内置默认）与编译
//!
//! 每条模式是一条正则，对文件的基本名（不含目录）做非锚定搜索。
//! 任一模式编译失败即整体失败，不存在“部分可用”的模式集。
use std::ffi::OsStr;
use std::path::Path;

use regex::bytes::Regex;
use tracing::debug;

use crate::error::ScanError;

/// 内置默认模式（原样保留：未转义的 `.` 匹配任意字符）
pub const DEFAULT_PATTERNS: [&str; 4] = [".DS_Store", "Thumbs.db", r"^.*.CR2.\$.jpg$", r"^.*.tmp$"];

/// 编译后的模式集，构建后只读
#[derive(Debug, Clone)]
pub struct PatternSet {
    sources: Vec<String>,
    patterns: Vec<Regex>,
}

impl PatternSet {
    /// 读取模式文件；文件不可读（通常是不存在）时退回内置默认模式
    pub fn load(path: &Path) -> Result<Self, ScanError> {
        match std::fs::read(path) {
            Ok(raw) => {
                let text = String::from_utf8_lossy(&raw);
                let lines = parse_pattern_lines(&text);
                debug!(path = %path.display(), count = lines.len(), "patterns loaded from file");
                Self::compile(lines)
            }
            Err(err) => {
                debug!(path = %path.display(), %err, "pattern file unavailable, using defaults");
                Self::defaults()
            }
        }
    }

    /// 内置默认模式集
    pub fn defaults() -> Result<Self, ScanError> {
        Self::compile(DEFAULT_PATTERNS)
    }

    /// 逐条编译；遇到第一条非法模式立即返回错误
    pub fn compile<I, S>(sources: I) -> Result<Self, ScanError>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let mut out = Self { sources: Vec::new(), patterns: Vec::new() };
        for src in sources {
            let pattern: String = src.into();
            let rx = Regex::new(&pattern)
                .map_err(|source| ScanError::InvalidPattern { pattern: pattern.clone(), source })?;
            out.sources.push(pattern);
            out.patterns.push(rx);
        }
        Ok(out)
    }

    /// 模式原文（按加载顺序）
    pub fn sources(&self) -> &[String] {
        &self.sources
    }

    pub fn len(&self) -> usize {
        self.patterns.len()
    }

    pub fn is_empty(&self) -> bool {
        self.patterns.is_empty()
    }

    /// 返回第一条命中基本名的模式下标；命中即停止检查后续模式
    pub fn first_match(&self, name: &OsStr) -> Option<usize> {
        // 按原始字节匹配，非 UTF-8 文件名同样参与
        let bytes = name.as_encoded_bytes();
        self.patterns.iter().position(|rx| rx.is_match(bytes))
    }

    /// 基本名是否命中任一模式
    pub fn matches(&self, name: &OsStr) -> bool {
        self.first_match(name).is_some()
    }
}

/// 拆分模式文件内容：兼容 `\n` 与 `\r\n`，丢弃空行
pub fn parse_pattern_lines(text: &str) -> Vec<String> {
    text.replace("\r\n", "\n")
        .split('\n')
        .filter(|line| !line.is_empty())
        .map(str::to_owned)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    fn hit(set: &PatternSet, name: &str) -> bool {
        set.matches(OsStr::new(name))
    }

    #[test]
    fn splits_both_line_endings_and_drops_blanks() {
        let lines = parse_pattern_lines("a\r\nb\n\n\r\nc\n");
        assert_eq!(lines, vec!["a", "b", "c"]);
    }

    #[test]
    fn keeps_surrounding_whitespace() {
        let lines = parse_pattern_lines(" x \n");
        assert_eq!(lines, vec![" x "]);
    }

    #[test]
    fn defaults_cover_known_junk() {
        let set = PatternSet::defaults().unwrap();
        assert_eq!(set.len(), 4);
        assert!(hit(&set, ".DS_Store"));
        assert!(hit(&set, "Thumbs.db"));
        assert!(hit(&set, "photo.tmp"));
        assert!(hit(&set, "IMG_0001.CR2.$.jpg"));
        assert!(!hit(&set, "a.txt"));
        assert!(!hit(&set, "IMG_0001.jpg"));
    }

    #[test]
    fn default_dots_match_any_character() {
        let set = PatternSet::defaults().unwrap();
        assert!(hit(&set, "photoxtmp"));
        assert!(hit(&set, "IMG_0001xCR2y$zjpg"));
        assert!(hit(&set, "ThumbsXdb"));
    }

    #[test]
    fn search_is_unanchored() {
        let set = PatternSet::defaults().unwrap();
        assert!(hit(&set, "old.DS_Store.bak"));
    }

    #[test]
    fn first_match_reports_earliest_pattern() {
        let set = PatternSet::compile(["bar", "^foo", "foo"]).unwrap();
        assert_eq!(set.first_match(OsStr::new("foobar")), Some(0));
        assert_eq!(set.first_match(OsStr::new("food")), Some(1));
        assert_eq!(set.first_match(OsStr::new("baz")), None);
    }

    #[test]
    fn invalid_pattern_fails_whole_set() {
        let err = PatternSet::compile(["ok", "(unclosed", "fine"]).unwrap_err();
        match err {
            ScanError::InvalidPattern { pattern, .. } => assert_eq!(pattern, "(unclosed"),
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn load_reads_file_when_present() -> anyhow::Result<()> {
        let tmp = TempDir::new()?;
        let path = tmp.path().join(".rmcrap");
        fs::write(&path, "^foo.*$\r\n\r\n")?;

        let set = PatternSet::load(&path)?;
        assert_eq!(set.sources(), ["^foo.*$"]);
        assert!(hit(&set, "foobar.txt"));
        assert!(!hit(&set, "bar.txt"));
        assert!(!hit(&set, ".DS_Store"));
        Ok(())
    }

    #[test]
    fn load_falls_back_to_defaults_when_absent() -> anyhow::Result<()> {
        let tmp = TempDir::new()?;
        let set = PatternSet::load(&tmp.path().join("missing"))?;
        assert_eq!(set.sources(), DEFAULT_PATTERNS);
        Ok(())
    }

    #[test]
    fn blank_pattern_file_matches_nothing() -> anyhow::Result<()> {
        let tmp = TempDir::new()?;
        let path = tmp.path().join(".rmcrap");
        fs::write(&path, "\n\r\n")?;

        let set = PatternSet::load(&path)?;
        assert!(set.is_empty());
        assert!(!hit(&set, ".DS_Store"));
        Ok(())
    }

    #[test]
    fn load_rejects_malformed_file() -> anyhow::Result<()> {
        let tmp = TempDir::new()?;
        let path = tmp.path().join(".rmcrap");
        fs::write(&path, "good\n[bad\n")?;

        assert!(matches!(PatternSet::load(&path), Err(ScanError::InvalidPattern { .. })));
        Ok(())
    }
}
