//! # dfrename - DFPlayer Mini 文件重命名工具
//!
//! 将 SD 卡上的文件夹与 MP3 文件重命名为 DFPlayer Mini 模块要求的
//! 数字命名：文件夹 `01`..`99`，文件 `001.mp3`..`255.mp3`。
//! 排序采用自然排序（与文件管理器显示一致），重命名前的顺序在
//! 重命名后得以保留。
//!
//! ## 依赖关系
//! ```text
//! main.rs
//!   ├── cli.rs      (命令行参数定义)
//!   ├── commands/   (命令执行逻辑)
//!   ├── sort/       (自然排序比较器)
//!   ├── rename/     (两阶段批量重命名)
//!   ├── utils/      (终端输出工具)
//!   └── error.rs    (错误处理)
//! ```

mod cli;
mod commands;
mod error;
mod rename;
mod sort;
mod utils;

use clap::Parser;
use cli::Cli;

fn main() {
    // Initialize colored output for Windows compatibility
    #[cfg(windows)]
    colored::control::set_virtual_terminal(true).ok();

    let cli = Cli::parse();

    if let Err(e) = commands::run(cli) {
        utils::output::print_error(&format!("{}", e));
        std::process::exit(1);
    }
}
