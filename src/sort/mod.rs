//! # 排序模块
//!
//! 提供与文件管理器一致的自然排序（natural sort）。
//!
//! ## 依赖关系
//! - 被 `commands/rename.rs` 使用
//! - 子模块: natural

pub mod natural;
