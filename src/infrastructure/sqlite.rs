//! SQLite 连接 - 基础设施层
//!
//! 持有唯一的 Connection 资源，负责打开数据库、执行 schema 脚本

use crate::error::{AppResult, DatabaseError, FileError};
use rusqlite::Connection;
use std::path::Path;

/// 内置 schema 脚本
pub const BUNDLED_SCHEMA: &str = include_str!("../../resources/create_question_bank.sql");

/// 打开数据库文件并执行 schema 脚本
///
/// `schema_path` 为 None 时使用内置脚本
pub fn open_database(path: &Path, schema_path: Option<&Path>) -> AppResult<Connection> {
    let conn = Connection::open(path).map_err(|source| DatabaseError::OpenFailed {
        path: path.display().to_string(),
        source,
    })?;
    configure_pragmas(&conn)?;
    apply_schema(&conn, schema_path)?;
    Ok(conn)
}

/// 打开内存数据库（测试用）
pub fn open_memory_database() -> AppResult<Connection> {
    let conn = Connection::open_in_memory()?;
    configure_pragmas(&conn)?;
    apply_schema(&conn, None)?;
    Ok(conn)
}

fn configure_pragmas(conn: &Connection) -> Result<(), DatabaseError> {
    conn.execute_batch("PRAGMA foreign_keys=ON;")?;
    Ok(())
}

/// 执行 schema 脚本
pub fn apply_schema(conn: &Connection, schema_path: Option<&Path>) -> AppResult<()> {
    let (script_name, sql) = match schema_path {
        Some(path) => {
            if !path.exists() {
                return Err(FileError::NotFound {
                    path: path.display().to_string(),
                }
                .into());
            }
            let sql = std::fs::read_to_string(path).map_err(|source| FileError::ReadFailed {
                path: path.display().to_string(),
                source,
            })?;
            (path.display().to_string(), sql)
        }
        None => ("<bundled>".to_string(), BUNDLED_SCHEMA.to_string()),
    };

    tracing::info!("📐 正在创建数据库表结构: {}", script_name);
    conn.execute_batch(&sql)
        .map_err(|source| DatabaseError::SchemaFailed {
            script: script_name,
            source,
        })?;

    Ok(())
}

/// 删除已存在的数据库文件
pub fn remove_database_file(path: &Path) -> AppResult<bool> {
    if !path.exists() {
        return Ok(false);
    }
    std::fs::remove_file(path).map_err(|source| FileError::DeleteFailed {
        path: path.display().to_string(),
        source,
    })?;
    Ok(true)
}

/// 统计用户表数量（用于校验）
pub fn count_tables(conn: &Connection) -> Result<i64, DatabaseError> {
    let count = conn.query_row(
        "SELECT COUNT(*) FROM sqlite_master WHERE type='table' AND name NOT LIKE 'sqlite_%'",
        [],
        |row| row.get::<_, i64>(0),
    )?;
    Ok(count)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{QuestionType, Topic};

    #[test]
    fn test_schema_creates_all_tables() {
        let conn = open_memory_database().unwrap();
        assert_eq!(count_tables(&conn).unwrap(), 4);
    }

    #[test]
    fn test_lookup_tables_match_enums() {
        let conn = open_memory_database().unwrap();

        for t in QuestionType::ALL {
            let name: String = conn
                .query_row(
                    "SELECT type_name FROM question_types WHERE type_id = ?1",
                    [t.code()],
                    |row| row.get(0),
                )
                .unwrap();
            assert_eq!(name, t.name());
        }

        for t in Topic::ALL {
            let name: String = conn
                .query_row(
                    "SELECT topic_name FROM topics WHERE topic_id = ?1",
                    [t.code()],
                    |row| row.get(0),
                )
                .unwrap();
            assert_eq!(name, t.name());
        }
    }

    #[test]
    fn test_schema_idempotent() {
        let conn = open_memory_database().unwrap();
        assert!(apply_schema(&conn, None).is_ok());
        let types: i64 = conn
            .query_row("SELECT COUNT(*) FROM question_types", [], |row| row.get(0))
            .unwrap();
        assert_eq!(types, 7);
    }

    #[test]
    fn test_foreign_keys_enabled() {
        let conn = open_memory_database().unwrap();
        let fk: i64 = conn
            .query_row("PRAGMA foreign_keys", [], |row| row.get(0))
            .unwrap();
        assert_eq!(fk, 1);
    }

    #[test]
    fn test_missing_schema_file() {
        let conn = Connection::open_in_memory().unwrap();
        let result = apply_schema(&conn, Some(Path::new("/nonexistent/schema.sql")));
        assert!(matches!(
            result,
            Err(crate::error::AppError::File(FileError::NotFound { .. }))
        ));
    }

    #[test]
    fn test_broken_schema_script() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("broken.sql");
        std::fs::write(&path, "CREATE TABLE oops (").unwrap();

        let conn = Connection::open_in_memory().unwrap();
        let result = apply_schema(&conn, Some(&path));
        assert!(matches!(
            result,
            Err(crate::error::AppError::Database(DatabaseError::SchemaFailed { .. }))
        ));
    }
}
