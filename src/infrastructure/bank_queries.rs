//! 题库查询 - 基础设施层
//!
//! 只读的统计和预览查询，供汇总报告使用

use crate::error::DatabaseError;
use crate::models::{QuestionType, Topic};
use rusqlite::{params, Connection};

/// 话题为空时在分组统计中使用的名称
pub const NONE_BUCKET: &str = "(none)";

/// 分组计数
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize)]
pub struct NamedCount {
    pub name: String,
    pub count: i64,
}

/// 题目总数
pub fn count_questions(conn: &Connection) -> Result<i64, DatabaseError> {
    Ok(conn.query_row("SELECT COUNT(*) FROM questions", [], |row| row.get(0))?)
}

/// 选项总数
pub fn count_options(conn: &Connection) -> Result<i64, DatabaseError> {
    Ok(conn.query_row("SELECT COUNT(*) FROM response_options", [], |row| row.get(0))?)
}

/// 某一题型的题目数量
pub fn count_by_type_code(conn: &Connection, question_type: QuestionType) -> Result<i64, DatabaseError> {
    Ok(conn.query_row(
        "SELECT COUNT(*) FROM questions WHERE question_type_id = ?1",
        params![question_type.code()],
        |row| row.get(0),
    )?)
}

/// 按题型名称分组计数，数量降序
pub fn count_by_type(conn: &Connection) -> Result<Vec<NamedCount>, DatabaseError> {
    let mut stmt = conn.prepare(
        "SELECT qt.type_name, COUNT(*) AS count
         FROM questions q
         JOIN question_types qt ON q.question_type_id = qt.type_id
         GROUP BY qt.type_name
         ORDER BY count DESC, qt.type_name ASC",
    )?;
    let rows = stmt.query_map([], |row| {
        Ok(NamedCount {
            name: row.get(0)?,
            count: row.get(1)?,
        })
    })?;
    Ok(rows.collect::<Result<Vec<_>, _>>()?)
}

/// 按话题名称分组计数，没有话题的题目归入 `(none)`
pub fn count_by_topic(conn: &Connection) -> Result<Vec<NamedCount>, DatabaseError> {
    let mut stmt = conn.prepare(
        "SELECT t.topic_name, COUNT(*) AS count
         FROM questions q
         LEFT JOIN topics t ON q.topic_id = t.topic_id
         GROUP BY t.topic_name
         ORDER BY count DESC, t.topic_name ASC",
    )?;
    let rows = stmt.query_map([], |row| {
        let name: Option<String> = row.get(0)?;
        Ok(NamedCount {
            name: name.unwrap_or_else(|| NONE_BUCKET.to_string()),
            count: row.get(1)?,
        })
    })?;
    Ok(rows.collect::<Result<Vec<_>, _>>()?)
}

/// 某一话题下的题目（question_id, 题干），按插入顺序
pub fn questions_by_topic(
    conn: &Connection,
    topic: Topic,
    limit: usize,
) -> Result<Vec<(String, String)>, DatabaseError> {
    query_id_text(
        conn,
        "SELECT question_id, question_text FROM questions WHERE topic_id = ?1 ORDER BY rowid LIMIT ?2",
        topic.code(),
        limit,
    )
}

/// 某一题型的题目（question_id, 题干），按插入顺序
pub fn questions_by_type(
    conn: &Connection,
    question_type: QuestionType,
    limit: usize,
) -> Result<Vec<(String, String)>, DatabaseError> {
    query_id_text(
        conn,
        "SELECT question_id, question_text FROM questions WHERE question_type_id = ?1 ORDER BY rowid LIMIT ?2",
        question_type.code(),
        limit,
    )
}

fn query_id_text(
    conn: &Connection,
    sql: &str,
    code: i64,
    limit: usize,
) -> Result<Vec<(String, String)>, DatabaseError> {
    let mut stmt = conn.prepare(sql)?;
    let rows = stmt.query_map(params![code, limit as i64], |row| Ok((row.get(0)?, row.get(1)?)))?;
    Ok(rows.collect::<Result<Vec<_>, _>>()?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::infrastructure::sqlite::open_memory_database;

    fn insert(conn: &Connection, id: &str, type_id: i64, topic_id: Option<i64>) {
        conn.execute(
            "INSERT INTO questions (question_id, question_text, question_type_id, topic_id)
             VALUES (?1, ?2, ?3, ?4)",
            params![id, format!("Text of {}", id), type_id, topic_id],
        )
        .unwrap();
    }

    #[test]
    fn test_empty_bank() {
        let conn = open_memory_database().unwrap();
        assert_eq!(count_questions(&conn).unwrap(), 0);
        assert_eq!(count_options(&conn).unwrap(), 0);
        assert!(count_by_type(&conn).unwrap().is_empty());
    }

    #[test]
    fn test_group_counts_ordered() {
        let conn = open_memory_database().unwrap();
        insert(&conn, "a", 1, Some(4));
        insert(&conn, "b", 1, Some(4));
        insert(&conn, "c", 2, Some(3));

        let by_type = count_by_type(&conn).unwrap();
        assert_eq!(
            by_type,
            vec![
                NamedCount { name: "likert_scale".into(), count: 2 },
                NamedCount { name: "multiple_choice".into(), count: 1 },
            ]
        );
        assert_eq!(count_by_type_code(&conn, QuestionType::LikertScale).unwrap(), 2);
        assert_eq!(count_by_type_code(&conn, QuestionType::Ranking).unwrap(), 0);
    }

    #[test]
    fn test_topicless_rows_in_none_bucket() {
        let conn = open_memory_database().unwrap();
        insert(&conn, "a", 2, None);
        insert(&conn, "b", 2, Some(1));

        let by_topic = count_by_topic(&conn).unwrap();
        assert!(by_topic.contains(&NamedCount { name: NONE_BUCKET.into(), count: 1 }));
        assert!(by_topic.contains(&NamedCount { name: "Demographics".into(), count: 1 }));
    }

    #[test]
    fn test_previews_respect_limit_and_order() {
        let conn = open_memory_database().unwrap();
        for id in ["h1", "h2", "h3"] {
            insert(&conn, id, 2, Some(Topic::Housing.code()));
        }
        insert(&conn, "p1", 3, Some(Topic::Policy.code()));

        let housing = questions_by_topic(&conn, Topic::Housing, 2).unwrap();
        let ids: Vec<&str> = housing.iter().map(|(id, _)| id.as_str()).collect();
        assert_eq!(ids, vec!["h1", "h2"]);

        let select = questions_by_type(&conn, QuestionType::MultipleSelect, 5).unwrap();
        assert_eq!(select, vec![("p1".to_string(), "Text of p1".to_string())]);
    }
}
