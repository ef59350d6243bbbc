use crate::error::{AppResult, FileError};
use crate::models::question::RawRow;
use std::io::Read;
use std::path::Path;

/// 从 CSV 文件读取全部题目行
///
/// 文件不存在或无法解析时直接返回错误，此时还未触碰数据库
pub fn load_csv_rows(csv_path: &Path) -> AppResult<Vec<RawRow>> {
    if !csv_path.exists() {
        return Err(FileError::NotFound {
            path: csv_path.display().to_string(),
        }
        .into());
    }

    let file = std::fs::File::open(csv_path).map_err(|source| FileError::ReadFailed {
        path: csv_path.display().to_string(),
        source,
    })?;

    let rows = parse_csv_rows(file).map_err(|source| FileError::CsvParseFailed {
        path: csv_path.display().to_string(),
        source,
    })?;

    tracing::info!(
        "成功读取 {} 行: {}",
        rows.len(),
        csv_path.file_name().unwrap_or_default().to_string_lossy()
    );

    Ok(rows)
}

/// 解析带表头的 CSV，按列名映射到 `RawRow`
///
/// 多余的列忽略；列不存在或行尾缺少的字段为 None，存在但为空的单元格保留为空串
pub fn parse_csv_rows<R: Read>(reader: R) -> Result<Vec<RawRow>, csv::Error> {
    let mut csv_reader = csv::ReaderBuilder::new()
        .has_headers(true)
        .flexible(true)
        .from_reader(reader);

    let headers = csv_reader.headers()?.clone();
    let column = |name: &str| headers.iter().position(|h| h.trim() == name);
    let question_id = column("question_id");
    let question_text = column("question_text");
    let response_options = column("response_options");
    let field_date = column("field_date");

    csv_reader
        .records()
        .map(|record| -> Result<RawRow, csv::Error> {
            let record = record?;
            let cell = |index: Option<usize>| index.and_then(|i| record.get(i)).map(str::to_string);
            Ok(RawRow {
                question_id: cell(question_id),
                question_text: cell(question_text),
                response_options_raw: cell(response_options),
                field_date_raw: cell(field_date),
            })
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_quoted_fields_and_extra_columns() {
        let data = "question_id,question_text,response_options,field_date,source\n\
                    Q1,\"If held today, who?\",A | B,2024-01-05,wave3\n";
        let rows = parse_csv_rows(data.as_bytes()).unwrap();

        assert_eq!(rows.len(), 1);
        assert_eq!(rows[0].question_id.as_deref(), Some("Q1"));
        assert_eq!(rows[0].question_text.as_deref(), Some("If held today, who?"));
        assert_eq!(rows[0].response_options_raw.as_deref(), Some("A | B"));
        assert_eq!(rows[0].field_date_raw.as_deref(), Some("2024-01-05"));
    }

    #[test]
    fn test_empty_cells_kept_and_short_rows_absent() {
        let data = "question_id,question_text,response_options,field_date\n\
                    Q1,Any comments?,,\n\
                    Q2,Text\n";
        let rows = parse_csv_rows(data.as_bytes()).unwrap();

        assert_eq!(rows.len(), 2);
        // 存在但为空的单元格
        assert_eq!(rows[0].response_options_raw.as_deref(), Some(""));
        assert_eq!(rows[0].field_date_raw.as_deref(), Some(""));
        // 短行：缺少的尾部字段
        assert!(rows[1].response_options_raw.is_none());
        assert!(rows[1].field_date_raw.is_none());
    }

    #[test]
    fn test_missing_required_column() {
        let data = "question_text,response_options\nText,A | B\n";
        let rows = parse_csv_rows(data.as_bytes()).unwrap();
        assert!(rows[0].question_id.is_none());
        assert_eq!(rows[0].response_options_raw.as_deref(), Some("A | B"));
    }

    #[test]
    fn test_missing_date_column() {
        let data = "question_id,question_text,response_options\nQ1,Text,[Open-ended response]\n";
        let rows = parse_csv_rows(data.as_bytes()).unwrap();
        assert!(rows[0].field_date_raw.is_none());
    }

    #[test]
    fn test_load_missing_file() {
        let result = load_csv_rows(Path::new("/nonexistent/questions.csv"));
        assert!(matches!(
            result,
            Err(crate::error::AppError::File(FileError::NotFound { .. }))
        ));
    }
}
