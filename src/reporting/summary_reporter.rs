//! 汇总报告
//!
//! 加载完成后只读查询数据库，生成统计和示例预览，不做任何分类逻辑

use crate::config::Config;
use crate::error::DatabaseError;
use crate::infrastructure::bank_queries::{self, NamedCount};
use crate::models::{QuestionType, Topic};
use crate::utils::logging::truncate_text;
use rusqlite::Connection;
use serde::Serialize;
use std::fmt::Write;

/// 题目预览
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct QuestionPreview {
    pub question_id: String,
    pub preview: String,
}

/// 题库汇总报告
#[derive(Debug, Clone, Serialize)]
pub struct BankReport {
    pub db_path: String,
    pub total_questions: i64,
    pub by_type: Vec<NamedCount>,
    pub by_topic: Vec<NamedCount>,
    pub total_options: i64,
    pub housing_previews: Vec<QuestionPreview>,
    pub likert_count: i64,
    pub multiple_select_previews: Vec<QuestionPreview>,
}

impl BankReport {
    /// 查询数据库生成报告
    pub fn build(conn: &Connection, config: &Config) -> Result<Self, DatabaseError> {
        let width = config.preview_width;
        let to_previews = |rows: Vec<(String, String)>| -> Vec<QuestionPreview> {
            rows.into_iter()
                .map(|(question_id, text)| QuestionPreview {
                    question_id,
                    preview: truncate_text(&text, width),
                })
                .collect()
        };

        Ok(Self {
            db_path: config.db_path.clone(),
            total_questions: bank_queries::count_questions(conn)?,
            by_type: bank_queries::count_by_type(conn)?,
            by_topic: bank_queries::count_by_topic(conn)?,
            total_options: bank_queries::count_options(conn)?,
            housing_previews: to_previews(bank_queries::questions_by_topic(
                conn,
                Topic::Housing,
                config.topic_preview_limit,
            )?),
            likert_count: bank_queries::count_by_type_code(conn, QuestionType::LikertScale)?,
            multiple_select_previews: to_previews(bank_queries::questions_by_type(
                conn,
                QuestionType::MultipleSelect,
                config.type_preview_limit,
            )?),
        })
    }

    /// 渲染为可读文本
    pub fn render(&self) -> String {
        let mut out = String::new();
        let _ = writeln!(out, "===== 题库统计 =====");
        let _ = writeln!(out, "\n题目总数: {}", self.total_questions);

        let _ = writeln!(out, "\n按题型:");
        for row in &self.by_type {
            let _ = writeln!(out, "  {}: {}", row.name, row.count);
        }

        let _ = writeln!(out, "\n按话题:");
        for row in &self.by_topic {
            let _ = writeln!(out, "  {}: {}", row.name, row.count);
        }

        let _ = writeln!(out, "\n选项总数: {}", self.total_options);

        let _ = writeln!(out, "\n===== 示例查询 =====");
        let _ = writeln!(out, "\n1. 住房相关题目:");
        for p in &self.housing_previews {
            let _ = writeln!(out, "  {}: {}", p.question_id, p.preview);
        }

        let _ = writeln!(out, "\n2. 李克特量表题目:");
        let _ = writeln!(out, "  共 {} 道", self.likert_count);

        let _ = writeln!(out, "\n3. 多选题（check all that apply）:");
        for p in &self.multiple_select_previews {
            let _ = writeln!(out, "  {}: {}", p.question_id, p.preview);
        }

        let _ = writeln!(out, "\n===== 成功 =====");
        let _ = writeln!(out, "题库已生成: {}", self.db_path);
        let _ = writeln!(out, "可以这样查询: sqlite3 {}", self.db_path);
        out
    }
}
