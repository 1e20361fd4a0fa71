//! # 命令执行模块
//!
//! ## 依赖关系
//! - 被 `main.rs` 使用
//! - 子模块: rename

pub mod rename;

use crate::cli::Cli;
use crate::error::Result;

/// 执行命令入口
pub fn run(cli: Cli) -> Result<()> {
    rename::execute(&cli)
}
