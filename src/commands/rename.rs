//! # rename 命令实现
//!
//! 遍历 SD 卡根目录，将文件夹与 MP3 文件重命名为 DFPlayer Mini
//! 要求的数字命名：文件夹 01..99，文件 001.mp3..255.mp3。
//!
//! ## 处理顺序
//! 1. 校验根目录、收集并自然排序子文件夹、检查文件夹上限
//! 2. 趁文件夹名还未改动，先逐个文件夹重命名其中的 .mp3 文件
//! 3. 最后重命名文件夹本身
//!
//! 上限检查在改动对应单元之前完成（fail-fast）；但某个文件夹的文件数
//! 超限时，迭代顺序在它之前的文件夹已经完成重命名。
//!
//! ## 依赖关系
//! - 使用 `cli.rs` 定义的参数
//! - 使用 `sort/natural.rs`, `rename/two_phase.rs`
//! - 使用 `utils/output.rs`

use std::path::Path;

use walkdir::WalkDir;

use crate::cli::Cli;
use crate::error::{DfRenameError, Result};
use crate::rename::{plan, rename_two_phase, RenameOp};
use crate::sort::natural;
use crate::utils::output;

/// DFPlayer Mini 可寻址的文件夹上限
pub const MAX_FOLDERS: usize = 99;

/// DFPlayer Mini 单个文件夹内可寻址的文件上限
pub const MAX_FILES_PER_FOLDER: usize = 255;

/// 执行 rename 命令
pub fn execute(args: &Cli) -> Result<()> {
    let root = args.path.as_path();

    if !root.is_dir() {
        return Err(DfRenameError::NotADirectory {
            path: root.display().to_string(),
        });
    }

    let folders = collect_folders(root)?;

    if folders.is_empty() {
        output::print_info("No subdirectories found. Nothing to do.");
        return Ok(());
    }

    if folders.len() > MAX_FOLDERS {
        return Err(DfRenameError::TooManyFolders {
            found: folders.len(),
            max: MAX_FOLDERS,
        });
    }

    output::print_header(&format!("DFPlayer Mini Rename: {}", root.display()));

    let mut total_files = 0;

    // 先重命名各文件夹内的文件（此时文件夹名尚未改动）
    for folder_name in &folders {
        let folder_path = root.join(folder_name);
        let mp3s = collect_mp3s(&folder_path)?;

        if mp3s.is_empty() {
            output::print_warning(&format!(
                "'{}/' contains no .mp3 files - skipping files.",
                folder_name
            ));
            continue;
        }

        if mp3s.len() > MAX_FILES_PER_FOLDER {
            return Err(DfRenameError::TooManyFiles {
                folder: folder_name.clone(),
                found: mp3s.len(),
                max: MAX_FILES_PER_FOLDER,
            });
        }

        let mapping = if args.dry_run {
            plan(&mp3s, track_name)
        } else {
            rename_two_phase(&folder_path, &mp3s, track_name)?
        };

        println!("  [{}/]", folder_name);
        report_mapping(&mapping, "    ", "");
        total_files += mapping.len();
    }

    // 再重命名文件夹本身
    let folder_mapping = if args.dry_run {
        plan(&folders, slot_name)
    } else {
        rename_two_phase(root, &folders, slot_name)?
    };

    println!();
    output::print_info("Folder renames:");
    report_mapping(&folder_mapping, "  ", "/");

    println!();
    output::print_done(&format!(
        "Renamed {} folder(s) and {} file(s).",
        folder_mapping.len(),
        total_files
    ));
    if args.dry_run {
        output::print_info("Dry run: no changes were made.");
    }

    Ok(())
}

/// 第 *i* 个文件的目标名（001.mp3 起始）
fn track_name(i: usize) -> String {
    format!("{:03}.mp3", i + 1)
}

/// 第 *i* 个文件夹的目标名（01 起始）
fn slot_name(i: usize) -> String {
    format!("{:02}", i + 1)
}

/// 收集 *root* 下一层的子文件夹名，按自然顺序排序
fn collect_folders(root: &Path) -> Result<Vec<String>> {
    let mut names = Vec::new();
    for entry in WalkDir::new(root).min_depth(1).max_depth(1) {
        let entry = entry.map_err(|e| DfRenameError::ReadDir {
            path: root.display().to_string(),
            source: e.into(),
        })?;
        if entry.file_type().is_dir() {
            names.push(entry.file_name().to_string_lossy().to_string());
        }
    }
    // 稳定排序：键相等的条目保持目录枚举顺序
    names.sort_by_cached_key(|n| natural::natural_key(n));
    Ok(names)
}

/// 收集 *folder* 下一层的 .mp3 文件名（扩展名大小写不敏感），按自然顺序排序
fn collect_mp3s(folder: &Path) -> Result<Vec<String>> {
    let mut names = Vec::new();
    for entry in WalkDir::new(folder).min_depth(1).max_depth(1) {
        let entry = entry.map_err(|e| DfRenameError::ReadDir {
            path: folder.display().to_string(),
            source: e.into(),
        })?;
        if entry.file_type().is_file() {
            let name = entry.file_name().to_string_lossy().to_string();
            if name.to_lowercase().ends_with(".mp3") {
                names.push(name);
            }
        }
    }
    names.sort_by_cached_key(|n| natural::natural_key(n));
    Ok(names)
}

/// 逐行报告一组重命名映射
fn report_mapping(mapping: &[RenameOp], indent: &str, suffix: &str) {
    for op in mapping {
        if op.is_unchanged() {
            output::print_unchanged(indent, &format!("{}{}", op.old, suffix));
        } else {
            output::print_rename(
                indent,
                &format!("{}{}", op.old, suffix),
                &format!("{}{}", op.new, suffix),
            );
        }
    }
}
