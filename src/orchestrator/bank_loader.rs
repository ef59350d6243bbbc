//! 题库加载器 - 编排层
//!
//! ## 职责
//!
//! 遍历全部数据行，逐行委托给 `RowFlow`，再把题目和选项写入数据库。
//!
//! ## 核心功能
//!
//! 1. **事务**：整批加载在一个事务里，任何致命错误都不会留下部分数据
//! 2. **选项 ID**：持有单调递增的选项 ID 序列，跨行共享
//! 3. **进度**：每 N 行输出一次进度
//! 4. **统计**：返回 `LoadSummary`

use crate::config::Config;
use crate::error::{AppResult, DatabaseError};
use crate::infrastructure::BankWriter;
use crate::models::{RawRow, ResponseOptionRecord};
use crate::utils::logging;
use crate::workflow::{DateStatus, RowCtx, RowFlow};
use rusqlite::Connection;
use serde::Serialize;
use tracing::debug;

/// 选项 ID 序列
///
/// 从配置的起始值开始，严格递增；越过 `i64::MAX` 后不再分配
#[derive(Debug, Clone)]
pub struct OptionIdSequence {
    floor: i64,
    next: Option<i64>,
}

impl OptionIdSequence {
    pub fn new(floor: i64) -> Self {
        Self {
            floor,
            next: Some(floor),
        }
    }

    /// 取出下一个 ID
    pub fn next_id(&mut self) -> Result<i64, DatabaseError> {
        let id = self
            .next
            .ok_or(DatabaseError::OptionIdExhausted { floor: self.floor })?;
        self.next = id.checked_add(1);
        Ok(id)
    }

    /// 下一个将要分配的 ID，已用尽时为 None
    pub fn peek(&self) -> Option<i64> {
        self.next
    }
}

/// 加载统计
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct LoadSummary {
    pub questions_loaded: usize,
    pub options_loaded: usize,
    /// 调研日期缺失或无法解析的题目数
    pub dates_missing: usize,
    pub first_option_id: Option<i64>,
    pub last_option_id: Option<i64>,
}

/// 题库加载器
pub struct BankLoader {
    row_flow: RowFlow,
    option_ids: OptionIdSequence,
    progress_interval: usize,
}

impl BankLoader {
    pub fn new(config: &Config) -> Self {
        Self {
            row_flow: RowFlow::new(config),
            option_ids: OptionIdSequence::new(config.option_id_floor),
            progress_interval: config.progress_interval,
        }
    }

    /// 下一个将要分配的选项 ID
    pub fn next_option_id(&self) -> Option<i64> {
        self.option_ids.peek()
    }

    /// 在一个事务中加载全部数据行
    ///
    /// 出错时事务被丢弃（回滚），数据库保持加载前的状态
    pub fn load(&mut self, conn: &mut Connection, rows: &[RawRow]) -> AppResult<LoadSummary> {
        let tx = conn.transaction()?;
        let writer = BankWriter::new(&tx);
        let total = rows.len();
        let mut summary = LoadSummary::default();

        for (index, row) in rows.iter().enumerate() {
            let ctx = RowCtx::new(index + 1, row.question_id.as_deref());
            let prepared = self.row_flow.run(row, &ctx)?;

            writer.insert_question(&prepared.question)?;
            if prepared.date_status != DateStatus::Parsed {
                summary.dates_missing += 1;
            }

            for (position, option_text) in prepared.options.iter().enumerate() {
                let option_id = self.option_ids.next_id()?;
                let option = ResponseOptionRecord::new(
                    option_id,
                    &prepared.question.question_id,
                    option_text,
                    position + 1,
                );
                writer.insert_option(&option)?;

                summary.first_option_id.get_or_insert(option_id);
                summary.last_option_id = Some(option_id);
                summary.options_loaded += 1;
            }

            summary.questions_loaded += 1;
            debug!("{} ✓ 写入完成，选项 {} 个", ctx, prepared.options.len());

            if self.progress_interval > 0 && (index + 1) % self.progress_interval == 0 {
                logging::log_progress(index + 1, total);
            }
        }

        tx.commit()?;
        Ok(summary)
    }
}
