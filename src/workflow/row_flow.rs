//! 数据行处理流程 - 流程层
//!
//! 核心职责：定义"一行"的完整处理流程
//!
//! 流程顺序：
//! 1. 校验必填字段（缺失即致命，空值照常处理）
//! 2. 题型分类 → 话题分类
//! 3. 解析调研日期（失败置空，不中止）
//! 4. 解析选项
//!
//! 不持有数据库连接，也不分配选项 ID

use crate::config::Config;
use crate::error::{AppError, AppResult};
use crate::models::{QuestionRecord, RawRow};
use crate::services::{classify_topic, parse_field_date, parse_options, type_classifier};
use crate::utils::logging::truncate_text;
use crate::workflow::row_ctx::RowCtx;
use tracing::{debug, info, warn};

/// 调研日期的解析结果
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DateStatus {
    Parsed,
    /// 字段缺失或为空
    Missing,
    /// 有值但格式不对，已置空
    Unparsable,
}

/// 处理完成、等待写入的一行
#[derive(Debug, Clone)]
pub struct PreparedRow {
    pub question: QuestionRecord,
    /// 按显示顺序排列的选项标签
    pub options: Vec<String>,
    pub date_status: DateStatus,
}

/// 数据行处理流程
///
/// 职责：
/// - 编排单行的分类和解析
/// - 只依赖业务能力（services）
/// - 不出现 Vec<RawRow>
pub struct RowFlow {
    verbose_logging: bool,
}

impl RowFlow {
    /// 创建新的数据行处理流程
    pub fn new(config: &Config) -> Self {
        Self {
            verbose_logging: config.verbose_logging,
        }
    }

    pub fn run(&self, row: &RawRow, ctx: &RowCtx) -> AppResult<PreparedRow> {
        let question_id = required(row.question_id.as_deref(), ctx, "question_id")?;
        let question_text = required(row.question_text.as_deref(), ctx, "question_text")?;
        let options_raw = required(row.response_options_raw.as_deref(), ctx, "response_options")?;

        self.log_text(ctx, question_text);

        let rule = type_classifier::matching_rule(question_text, options_raw);
        let question_type = rule.map(|r| r.question_type).unwrap_or_default();
        let topic = classify_topic(question_text);
        debug!(
            "{} 题型: {} (规则: {}) | 话题: {}",
            ctx,
            question_type,
            rule.map(|r| r.name).unwrap_or("default"),
            topic
        );

        let field_date = parse_field_date(row.field_date_raw.as_deref());
        let date_status = match (&row.field_date_raw, field_date) {
            (_, Some(_)) => DateStatus::Parsed,
            (Some(raw), None) if !raw.is_empty() => {
                warn!("{} ⚠️ 无法解析调研日期 '{}'，置为空", ctx, raw);
                DateStatus::Unparsable
            }
            _ => DateStatus::Missing,
        };

        let options = parse_options(options_raw);

        Ok(PreparedRow {
            question: QuestionRecord::new(
                question_id.to_string(),
                question_text.to_string(),
                question_type,
                topic,
                field_date,
            ),
            options,
            date_status,
        })
    }

    fn log_text(&self, ctx: &RowCtx, text: &str) {
        if self.verbose_logging {
            info!("{} 📝 题干: {}", ctx, truncate_text(text, 60));
        }
    }
}

/// 只有缺失（None）是致命的，空串照常处理
fn required<'a>(value: Option<&'a str>, ctx: &RowCtx, field: &'static str) -> AppResult<&'a str> {
    value.ok_or_else(|| AppError::missing_field(ctx.row_index, field))
}
