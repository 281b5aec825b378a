//! 命中路径收集器（线程安全，只追加）
use std::path::PathBuf;
use std::sync::{Mutex, PoisonError};

/// 多个遍历者共享的命中序列；追加由单把互斥锁串行化
#[derive(Debug, Default)]
pub struct PathCollector {
    found: Mutex<Vec<PathBuf>>,
}

impl PathCollector {
    pub fn new() -> Self {
        Self::default()
    }

    /// 追加到序列末尾；最终顺序即追加完成的顺序
    pub fn push(&self, path: PathBuf) {
        // 持锁期间只做一次 push，不会在中途 panic，中毒时直接沿用内部数据
        self.found
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .push(path);
    }

    pub fn len(&self) -> usize {
        self.found.lock().unwrap_or_else(PoisonError::into_inner).len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// 遍历全部结束后取出结果
    pub fn into_paths(self) -> Vec<PathBuf> {
        self.found.into_inner().unwrap_or_else(PoisonError::into_inner)
    }
}
