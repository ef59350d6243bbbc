//! 选项解析服务 - 业务能力层
//!
//! 把竖线分隔的选项串拆成有序的选项标签

/// 开放题标记，整串完全相等才算
pub const OPEN_ENDED_MARKER: &str = "[Open-ended response]";

/// 数值量表标记（选项解析只认这一个完整串）
pub const NUMERIC_SCALE_MARKER: &str = "[Numeric scale 0-100]";

/// 数值量表前缀（题型分类按子串匹配）
pub const NUMERIC_SCALE_PREFIX: &str = "[Numeric scale";

/// 选项分隔符
pub const OPTION_DELIMITER: char = '|';

/// 是否为"无可枚举选项"的标记串
pub fn is_sentinel(raw: &str) -> bool {
    raw == OPEN_ENDED_MARKER || raw == NUMERIC_SCALE_MARKER
}

/// 解析选项串
///
/// 标记串返回空列表；其余按 `|` 拆分并去掉首尾空白，
/// 保留原始顺序和空段，不去重
pub fn parse_options(raw: &str) -> Vec<String> {
    if is_sentinel(raw) {
        return Vec::new();
    }

    raw.split(OPTION_DELIMITER)
        .map(|segment| segment.trim().to_string())
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sentinels_yield_no_options() {
        assert!(parse_options(OPEN_ENDED_MARKER).is_empty());
        assert!(parse_options(NUMERIC_SCALE_MARKER).is_empty());
    }

    #[test]
    fn test_likert_options_in_order() {
        let options = parse_options("Strongly agree | Agree | Neutral | Disagree | Strongly disagree");
        assert_eq!(
            options,
            vec!["Strongly agree", "Agree", "Neutral", "Disagree", "Strongly disagree"]
        );
    }

    #[test]
    fn test_segment_count_matches_pipes() {
        for raw in ["A", "A|B", " A | B | C ", "Yes|No|Not sure|Refused"] {
            let expected = raw.matches(OPTION_DELIMITER).count() + 1;
            assert_eq!(parse_options(raw).len(), expected, "raw = {:?}", raw);
        }
    }

    #[test]
    fn test_rejoin_recovers_original_modulo_whitespace() {
        let raw = "Very likely |Somewhat likely|  Not likely  ";
        let rejoined = parse_options(raw).join(" | ");
        let strip = |s: &str| s.chars().filter(|c| !c.is_whitespace()).collect::<String>();
        assert_eq!(strip(&rejoined), strip(raw));
    }

    #[test]
    fn test_empty_segments_and_duplicates_kept() {
        assert_eq!(parse_options("A || A |"), vec!["A", "", "A", ""]);
        assert_eq!(parse_options(""), vec![""]);
    }

    #[test]
    fn test_other_numeric_scale_is_literal_option() {
        // 只有 0-100 这个完整标记被当作"无选项"
        assert_eq!(parse_options("[Numeric scale 1-10]"), vec!["[Numeric scale 1-10]"]);
    }
}
