//! 题库写入 - 基础设施层
//!
//! 只暴露"写一条记录"的能力，不关心行处理流程

use crate::error::DatabaseError;
use crate::models::{QuestionRecord, ResponseOptionRecord};
use rusqlite::{params, Connection};

/// 题库写入器
///
/// 借用连接（通常是一个事务），事务由调用方提交或回滚
pub struct BankWriter<'a> {
    conn: &'a Connection,
}

impl<'a> BankWriter<'a> {
    pub fn new(conn: &'a Connection) -> Self {
        Self { conn }
    }

    /// 插入一条题目
    pub fn insert_question(&self, question: &QuestionRecord) -> Result<(), DatabaseError> {
        let mut stmt = self.conn.prepare_cached(
            "INSERT INTO questions (
                question_id, question_text, question_type_id, topic_id,
                created_date, last_used_date, times_used, is_active, version
            ) VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8, ?9)",
        )?;
        stmt.execute(params![
            question.question_id,
            question.question_text,
            question.question_type.code(),
            question.topic.code(),
            question.created_date,
            question.last_used_date,
            question.times_used,
            question.is_active,
            question.version,
        ])?;
        Ok(())
    }

    /// 插入一条选项
    pub fn insert_option(&self, option: &ResponseOptionRecord) -> Result<(), DatabaseError> {
        let mut stmt = self.conn.prepare_cached(
            "INSERT INTO response_options (
                option_id, question_id, option_text, option_value, display_order
            ) VALUES (?1, ?2, ?3, ?4, ?5)",
        )?;
        stmt.execute(params![
            option.option_id,
            option.question_id,
            option.option_text,
            option.option_value,
            option.display_order,
        ])?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::infrastructure::sqlite::open_memory_database;
    use crate::models::{QuestionType, Topic};
    use chrono::NaiveDate;

    fn sample_question(date: Option<NaiveDate>) -> QuestionRecord {
        QuestionRecord::new(
            "Q1".to_string(),
            "Do you rent or own your home?".to_string(),
            QuestionType::MultipleChoice,
            Topic::Housing,
            date,
        )
    }

    #[test]
    fn test_insert_question_defaults_and_date() {
        let conn = open_memory_database().unwrap();
        let writer = BankWriter::new(&conn);
        writer
            .insert_question(&sample_question(NaiveDate::from_ymd_opt(2024, 5, 1)))
            .unwrap();

        let (created, last_used, times_used, is_active, version): (String, String, i64, i64, i64) = conn
            .query_row(
                "SELECT created_date, last_used_date, times_used, is_active, version
                 FROM questions WHERE question_id = 'Q1'",
                [],
                |row| Ok((row.get(0)?, row.get(1)?, row.get(2)?, row.get(3)?, row.get(4)?)),
            )
            .unwrap();

        assert_eq!(created, "2024-05-01");
        assert_eq!(last_used, "2024-05-01");
        assert_eq!((times_used, is_active, version), (0, 1, 1));
    }

    #[test]
    fn test_null_date_stored_as_null() {
        let conn = open_memory_database().unwrap();
        BankWriter::new(&conn).insert_question(&sample_question(None)).unwrap();

        let created: Option<String> = conn
            .query_row("SELECT created_date FROM questions", [], |row| row.get(0))
            .unwrap();
        assert!(created.is_none());
    }

    #[test]
    fn test_option_requires_existing_question() {
        let conn = open_memory_database().unwrap();
        let writer = BankWriter::new(&conn);
        let orphan = ResponseOptionRecord::new(1000, "missing", "Yes", 1);
        assert!(writer.insert_option(&orphan).is_err());
    }

    #[test]
    fn test_duplicate_question_id_rejected() {
        let conn = open_memory_database().unwrap();
        let writer = BankWriter::new(&conn);
        writer.insert_question(&sample_question(None)).unwrap();
        assert!(writer.insert_question(&sample_question(None)).is_err());
    }
}
