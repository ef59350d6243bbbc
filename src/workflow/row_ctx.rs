//! 数据行处理上下文
//!
//! 封装"我正在处理第几行、哪道题"这一信息

use std::fmt::Display;

/// 数据行处理上下文
#[derive(Debug, Clone)]
pub struct RowCtx {
    /// 数据行序号（从1开始，不含表头）
    pub row_index: usize,

    /// 题目ID，缺失时为 None
    pub question_id: Option<String>,
}

impl RowCtx {
    pub fn new(row_index: usize, question_id: Option<&str>) -> Self {
        Self {
            row_index,
            question_id: question_id.map(str::to_string),
        }
    }
}

impl Display for RowCtx {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "[第 {} 行 题目 ID#{}]",
            self.row_index,
            self.question_id.as_deref().unwrap_or("?")
        )
    }
}
