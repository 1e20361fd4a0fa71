//! # 统一错误处理模块
//!
//! 定义 dfrename 的所有错误类型，使用 `thiserror` 派生。
//!
//! ## 依赖关系
//! - 被所有其他模块使用
//! - 无外部模块依赖

use thiserror::Error;

/// dfrename 统一错误类型
#[derive(Error, Debug)]
pub enum DfRenameError {
    // ─────────────────────────────────────────────────────────────
    // 路径 / I/O 错误
    // ─────────────────────────────────────────────────────────────
    #[error("'{path}' is not a valid directory.")]
    NotADirectory { path: String },

    #[error("Failed to read directory: {path}")]
    ReadDir {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to rename '{from}' to '{to}'")]
    Rename {
        from: String,
        to: String,
        #[source]
        source: std::io::Error,
    },

    // ─────────────────────────────────────────────────────────────
    // 容量错误（DFPlayer Mini 寻址上限）
    // ─────────────────────────────────────────────────────────────
    #[error("Found {found} folders but DFPlayer Mini supports at most {max}.")]
    TooManyFolders { found: usize, max: usize },

    #[error("'{folder}/' contains {found} .mp3 files but DFPlayer Mini supports at most {max}.")]
    TooManyFiles {
        folder: String,
        found: usize,
        max: usize,
    },

    // ─────────────────────────────────────────────────────────────
    // 命名冲突
    // ─────────────────────────────────────────────────────────────
    #[error(
        "'{name}' starts with the reserved prefix '{prefix}' \
         (possibly left over from an interrupted run). Rename it manually and retry."
    )]
    ReservedName { name: String, prefix: &'static str },
}

/// Result 类型别名
pub type Result<T> = std::result::Result<T, DfRenameError>;
