use crate::models::{QuestionType, Topic};
use chrono::NaiveDate;
use serde::Serialize;

/// CSV 源文件中的一行
///
/// 字段缺失（列不存在或短行）时为 None，由流程层判断是否致命；
/// 空单元格为 Some("")
#[derive(Debug, Clone, Default)]
pub struct RawRow {
    pub question_id: Option<String>,
    pub question_text: Option<String>,
    /// 竖线分隔的选项，或开放题/数值量表标记
    pub response_options_raw: Option<String>,
    pub field_date_raw: Option<String>,
}

impl RawRow {
    pub fn new(
        question_id: impl Into<String>,
        question_text: impl Into<String>,
        response_options_raw: impl Into<String>,
    ) -> Self {
        Self {
            question_id: Some(question_id.into()),
            question_text: Some(question_text.into()),
            response_options_raw: Some(response_options_raw.into()),
            field_date_raw: None,
        }
    }

    pub fn with_field_date(mut self, field_date: impl Into<String>) -> Self {
        self.field_date_raw = Some(field_date.into());
        self
    }
}

/// `questions` 表中的一条题目记录
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct QuestionRecord {
    pub question_id: String,
    pub question_text: String,
    pub question_type: QuestionType,
    pub topic: Topic,
    pub created_date: Option<NaiveDate>,
    pub last_used_date: Option<NaiveDate>,
    pub times_used: i64,
    pub is_active: bool,
    pub version: i64,
}

impl QuestionRecord {
    /// 新入库的题目：使用次数 0、启用、版本 1，两个日期都取调研日期
    pub fn new(
        question_id: String,
        question_text: String,
        question_type: QuestionType,
        topic: Topic,
        field_date: Option<NaiveDate>,
    ) -> Self {
        Self {
            question_id,
            question_text,
            question_type,
            topic,
            created_date: field_date,
            last_used_date: field_date,
            times_used: 0,
            is_active: true,
            version: 1,
        }
    }
}

/// `response_options` 表中的一条选项记录
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ResponseOptionRecord {
    pub option_id: i64,
    pub question_id: String,
    pub option_text: String,
    /// 编码值：从 1 开始的位置
    pub option_value: String,
    pub display_order: i64,
}

impl ResponseOptionRecord {
    /// `position` 从 1 开始
    pub fn new(option_id: i64, question_id: &str, option_text: &str, position: usize) -> Self {
        Self {
            option_id,
            question_id: question_id.to_string(),
            option_text: option_text.to_string(),
            option_value: position.to_string(),
            display_order: position as i64,
        }
    }
}
