use serde::{Deserialize, Serialize};

/// 题型枚举
///
/// 数值即 `question_types.type_id`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum QuestionType {
    /// 李克特量表（支持/反对、同意/不同意）
    LikertScale = 1,
    /// 单选，兜底题型
    #[default]
    MultipleChoice = 2,
    /// 多选（select all / check all）
    MultipleSelect = 3,
    /// 开放题
    OpenEnded = 4,
    /// 数值量表
    NumericScale = 5,
    /// 排序题
    Ranking = 6,
    /// A/B 信息测试
    MessageTest = 7,
}

impl QuestionType {
    pub const ALL: [QuestionType; 7] = [
        QuestionType::LikertScale,
        QuestionType::MultipleChoice,
        QuestionType::MultipleSelect,
        QuestionType::OpenEnded,
        QuestionType::NumericScale,
        QuestionType::Ranking,
        QuestionType::MessageTest,
    ];

    /// 获取题型代码
    pub fn code(self) -> i64 {
        self as i64
    }

    /// 获取标准名称（与 `question_types.type_name` 一致）
    pub fn name(self) -> &'static str {
        match self {
            QuestionType::LikertScale => "likert_scale",
            QuestionType::MultipleChoice => "multiple_choice",
            QuestionType::MultipleSelect => "multiple_select",
            QuestionType::OpenEnded => "open_ended",
            QuestionType::NumericScale => "numeric_scale",
            QuestionType::Ranking => "ranking",
            QuestionType::MessageTest => "message_test",
        }
    }

    /// 从代码解析题型
    pub fn from_code(code: i64) -> Option<Self> {
        Self::ALL.into_iter().find(|t| t.code() == code)
    }
}

impl std::fmt::Display for QuestionType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.name())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_codes_round_trip() {
        for t in QuestionType::ALL {
            assert_eq!(QuestionType::from_code(t.code()), Some(t));
        }
        assert_eq!(QuestionType::from_code(0), None);
        assert_eq!(QuestionType::from_code(8), None);
    }

    #[test]
    fn test_default_is_multiple_choice() {
        assert_eq!(QuestionType::default(), QuestionType::MultipleChoice);
        assert_eq!(QuestionType::default().code(), 2);
    }

    #[test]
    fn test_serde_uses_type_name() {
        let json = serde_json::to_string(&QuestionType::OpenEnded).unwrap();
        assert_eq!(json, "\"open_ended\"");
    }
}
