//! # 重命名模块
//!
//! 提供无冲突的批量重命名。
//!
//! ## 依赖关系
//! - 被 `commands/rename.rs` 使用
//! - 子模块: two_phase

pub mod two_phase;

pub use two_phase::{plan, rename_two_phase, RenameOp, TEMP_PREFIX};
