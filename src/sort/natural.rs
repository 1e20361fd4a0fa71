//! # 自然排序比较器
//!
//! 将文件名拆分为文本段和数字段交替的 Token 序列，数字段按数值比较，
//! 文本段按小写后的字典序比较，使 "Track 2" 排在 "Track 10" 之前，
//! 与文件管理器显示的顺序一致。
//!
//! ## Token 序列规则
//! - 文本段统一转为小写
//! - 数字段去除前导零后按「位数优先、再逐位比较」比较，等价于任意精度
//!   整数比较，不受数字长度限制
//! - 同一位置上文本段与数字段相遇时（结构不一致的名字，如 "A1" 与 "1A"），
//!   约定文本段排在数字段之前，该规则由 `Token` 的 `Ord` 派生顺序固定
//!
//! ## 依赖关系
//! - 被 `commands/rename.rs` 使用
//! - 无外部模块依赖

use std::cmp::Ordering;

/// 自然排序的最小比较单元
///
/// 枚举变体的声明顺序决定了跨类型比较规则：`Text` 在 `Number` 之前。
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Token {
    /// 非数字字符段（已转为小写）
    Text(String),
    /// ASCII 数字段（已去除前导零，全零时保留单个 "0"）
    Number(String),
}

impl Ord for Token {
    fn cmp(&self, other: &Self) -> Ordering {
        match (self, other) {
            (Token::Text(a), Token::Text(b)) => a.cmp(b),
            // 位数相同则逐位比较，等价于数值比较
            (Token::Number(a), Token::Number(b)) => a.len().cmp(&b.len()).then_with(|| a.cmp(b)),
            (Token::Text(_), Token::Number(_)) => Ordering::Less,
            (Token::Number(_), Token::Text(_)) => Ordering::Greater,
        }
    }
}

impl PartialOrd for Token {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

/// 提取自然排序键
///
/// 纯函数：将 *name* 拆分为交替的文本/数字 Token 序列。
/// "Track 02" -> [Text("track "), Number("2")]
pub fn natural_key(name: &str) -> Vec<Token> {
    let mut tokens = Vec::new();
    let mut run = String::new();
    let mut run_is_digit = false;

    for c in name.chars() {
        let is_digit = c.is_ascii_digit();
        if !run.is_empty() && is_digit != run_is_digit {
            tokens.push(make_token(&run, run_is_digit));
            run.clear();
        }
        run_is_digit = is_digit;
        run.push(c);
    }
    if !run.is_empty() {
        tokens.push(make_token(&run, run_is_digit));
    }

    tokens
}

fn make_token(run: &str, is_digit: bool) -> Token {
    if is_digit {
        let stripped = run.trim_start_matches('0');
        if stripped.is_empty() {
            Token::Number("0".to_string())
        } else {
            Token::Number(stripped.to_string())
        }
    } else {
        Token::Text(run.to_lowercase())
    }
}

/// 按自然顺序比较两个名字
pub fn natural_cmp(a: &str, b: &str) -> Ordering {
    natural_key(a).cmp(&natural_key(b))
}
