//! 调研日期解析
//!
//! 固定格式 `YYYY-MM-DD`，解析失败时返回 None，不中止该行

use chrono::NaiveDate;

/// 调研日期格式
pub const FIELD_DATE_FORMAT: &str = "%Y-%m-%d";

/// 解析调研日期，缺失或格式错误均返回 None
pub fn parse_field_date(raw: Option<&str>) -> Option<NaiveDate> {
    let raw = raw.filter(|s| has_date_shape(s))?;
    NaiveDate::parse_from_str(raw, FIELD_DATE_FORMAT).ok()
}

/// 严格的 `YYYY-MM-DD` 形状：10 个字节，第 5、8 位为 `-`，其余为 ASCII 数字
///
/// chrono 会接受前导空白和正负号，这里先挡掉
fn has_date_shape(raw: &str) -> bool {
    let bytes = raw.as_bytes();
    bytes.len() == 10
        && bytes.iter().enumerate().all(|(i, b)| match i {
            4 | 7 => *b == b'-',
            _ => b.is_ascii_digit(),
        })
}
