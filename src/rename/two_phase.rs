//! # 两阶段批量重命名
//!
//! 将目录内一组条目重命名到按序号生成的目标名。目标名集合可能与
//! 现有名集合重叠（例如 "002.mp3" 与 "001.mp3" 互换），直接逐个
//! 重命名会产生覆盖。两阶段方案避免冲突：
//!
//! 1. 阶段一：旧名 -> 临时名（`__dftemp_` + 目标名）
//! 2. 阶段二：临时名 -> 目标名
//!
//! 临时前缀为保留前缀，正常目标名（两位/三位数字）不会以它开头，
//! 因此阶段一不会覆盖任何未处理的条目。若源名本身以保留前缀开头
//! （上次运行中断的残留），在任何改动之前报错退出。
//!
//! ## 已知限制
//! 中途失败（权限、磁盘被拔出）会使目录处于临时名与目标名混杂的
//! 状态，本工具不做回滚。
//!
//! ## 依赖关系
//! - 被 `commands/rename.rs` 使用
//! - 使用 `error.rs`

use std::fs;
use std::path::Path;

use crate::error::{DfRenameError, Result};

/// 临时名保留前缀
pub const TEMP_PREFIX: &str = "__dftemp_";

/// 一次重命名的旧名与目标名
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenameOp {
    pub old: String,
    pub new: String,
}

impl RenameOp {
    /// 旧名与目标名相同，无需任何文件系统调用
    pub fn is_unchanged(&self) -> bool {
        self.old == self.new
    }
}

/// 计算重命名映射（纯函数，不触碰文件系统）
///
/// *make_final_name(i)* 返回第 *i* 个条目（0 起始）的目标名。
/// 返回的映射保持 *items* 的输入顺序。
pub fn plan<F>(items: &[String], make_final_name: F) -> Vec<RenameOp>
where
    F: Fn(usize) -> String,
{
    items
        .iter()
        .enumerate()
        .map(|(i, old)| RenameOp {
            old: old.clone(),
            new: make_final_name(i),
        })
        .collect()
}

/// 两阶段执行 *base_dir* 内的批量重命名
///
/// 已处于目标名的条目不发出文件系统调用，但仍出现在返回的映射中。
pub fn rename_two_phase<F>(
    base_dir: &Path,
    items: &[String],
    make_final_name: F,
) -> Result<Vec<RenameOp>>
where
    F: Fn(usize) -> String,
{
    for name in items {
        if name.starts_with(TEMP_PREFIX) {
            return Err(DfRenameError::ReservedName {
                name: name.clone(),
                prefix: TEMP_PREFIX,
            });
        }
    }

    let mapping = plan(items, make_final_name);

    // 阶段一：旧名 -> 临时名
    for op in &mapping {
        if op.is_unchanged() {
            continue;
        }
        let temp = format!("{}{}", TEMP_PREFIX, op.new);
        rename_entry(base_dir, &op.old, &temp)?;
    }

    // 阶段二：临时名 -> 目标名
    for op in &mapping {
        if op.is_unchanged() {
            continue;
        }
        let temp = format!("{}{}", TEMP_PREFIX, op.new);
        rename_entry(base_dir, &temp, &op.new)?;
    }

    Ok(mapping)
}

fn rename_entry(base_dir: &Path, from: &str, to: &str) -> Result<()> {
    fs::rename(base_dir.join(from), base_dir.join(to)).map_err(|e| DfRenameError::Rename {
        from: from.to_string(),
        to: to.to_string(),
        source: e,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs::File;
    use tempfile::TempDir;

    fn touch(dir: &Path, names: &[&str]) {
        for name in names {
            File::create(dir.join(name)).unwrap();
        }
    }

    fn list_names(dir: &Path) -> Vec<String> {
        let mut names: Vec<String> = std::fs::read_dir(dir)
            .unwrap()
            .map(|e| e.unwrap().file_name().to_string_lossy().to_string())
            .collect();
        names.sort();
        names
    }

    #[test]
    fn test_swapped_pair_renames_without_loss() {
        let tmp = TempDir::new().unwrap();
        touch(tmp.path(), &["001.mp3", "002.mp3"]);

        // 自然顺序恰好把两个文件反过来：002 要变成 001，001 要变成 002
        let items = vec!["002.mp3".to_string(), "001.mp3".to_string()];
        let mapping =
            rename_two_phase(tmp.path(), &items, |i| format!("{:03}.mp3", i + 1)).unwrap();

        assert_eq!(list_names(tmp.path()), vec!["001.mp3", "002.mp3"]);
        assert_eq!(
            mapping,
            vec![
                RenameOp {
                    old: "002.mp3".to_string(),
                    new: "001.mp3".to_string()
                },
                RenameOp {
                    old: "001.mp3".to_string(),
                    new: "002.mp3".to_string()
                },
            ]
        );
    }

    #[test]
    fn test_overlapping_shift() {
        let tmp = TempDir::new().unwrap();
        touch(tmp.path(), &["002.mp3", "003.mp3", "004.mp3"]);

        let items = vec![
            "002.mp3".to_string(),
            "003.mp3".to_string(),
            "004.mp3".to_string(),
        ];
        rename_two_phase(tmp.path(), &items, |i| format!("{:03}.mp3", i + 1)).unwrap();

        assert_eq!(list_names(tmp.path()), vec!["001.mp3", "002.mp3", "003.mp3"]);
    }

    #[test]
    fn test_unchanged_entries_skip_filesystem_calls() {
        let tmp = TempDir::new().unwrap();
        touch(tmp.path(), &["001.mp3", "002.mp3"]);

        let items = vec!["001.mp3".to_string(), "002.mp3".to_string()];
        let mapping =
            rename_two_phase(tmp.path(), &items, |i| format!("{:03}.mp3", i + 1)).unwrap();

        assert!(mapping.iter().all(|op| op.is_unchanged()));
        assert_eq!(list_names(tmp.path()), vec!["001.mp3", "002.mp3"]);
    }

    #[test]
    fn test_no_temp_names_left_behind() {
        let tmp = TempDir::new().unwrap();
        touch(tmp.path(), &["b.mp3", "a.mp3", "c.mp3"]);

        let items = vec![
            "a.mp3".to_string(),
            "b.mp3".to_string(),
            "c.mp3".to_string(),
        ];
        rename_two_phase(tmp.path(), &items, |i| format!("{:03}.mp3", i + 1)).unwrap();

        assert!(list_names(tmp.path())
            .iter()
            .all(|n| !n.starts_with(TEMP_PREFIX)));
    }

    #[test]
    fn test_reserved_prefix_aborts_before_any_rename() {
        let tmp = TempDir::new().unwrap();
        touch(tmp.path(), &["a.mp3", "__dftemp_001.mp3"]);

        let items = vec!["a.mp3".to_string(), "__dftemp_001.mp3".to_string()];
        let err = rename_two_phase(tmp.path(), &items, |i| format!("{:03}.mp3", i + 1))
            .unwrap_err();

        assert!(matches!(err, DfRenameError::ReservedName { .. }));
        assert_eq!(list_names(tmp.path()), vec!["__dftemp_001.mp3", "a.mp3"]);
    }

    #[test]
    fn test_renames_directories_too() {
        let tmp = TempDir::new().unwrap();
        std::fs::create_dir(tmp.path().join("Album B")).unwrap();
        std::fs::create_dir(tmp.path().join("Album A")).unwrap();

        let items = vec!["Album A".to_string(), "Album B".to_string()];
        rename_two_phase(tmp.path(), &items, |i| format!("{:02}", i + 1)).unwrap();

        assert_eq!(list_names(tmp.path()), vec!["01", "02"]);
        assert!(tmp.path().join("01").is_dir());
    }

    #[test]
    fn test_plan_preserves_input_order() {
        let items = vec!["z".to_string(), "a".to_string()];
        let mapping = plan(&items, |i| format!("{:02}", i + 1));
        assert_eq!(mapping[0].old, "z");
        assert_eq!(mapping[0].new, "01");
        assert_eq!(mapping[1].old, "a");
        assert_eq!(mapping[1].new, "02");
    }
}
