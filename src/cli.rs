//! # CLI 模块
//!
//! 使用 `clap` 定义命令行参数。
//!
//! ## 依赖关系
//! - 被 `main.rs` 使用
//! - 参数传递给 `commands/rename.rs`

use clap::Parser;
use std::path::PathBuf;

/// dfrename - DFPlayer Mini 文件重命名工具
#[derive(Parser, Debug)]
#[command(name = "dfrename")]
#[command(version)]
#[command(about = "Rename folders and MP3 files for the DFPlayer Mini", long_about = None)]
pub struct Cli {
    /// Root directory of the SD card (e.g. /media/sdcard or E:)
    pub path: PathBuf,

    /// Preview every rename without touching the filesystem
    #[arg(long, default_value_t = false)]
    pub dry_run: bool,
}
