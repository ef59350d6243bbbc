//! 题型分类服务 - 业务能力层
//!
//! 根据题干和原始选项串推断题型。规则按顺序匹配，第一个命中的生效；
//! 各类别关键词有重叠，顺序本身就是语义的一部分

use crate::models::QuestionType;
use crate::services::option_parser::{NUMERIC_SCALE_PREFIX, OPEN_ENDED_MARKER};

/// 李克特量表提示短语
///
/// 纯子串匹配，"priority" 也会命中更长的词（如 "priorityless"）
pub const LIKERT_CUES: &[&str] = &[
    "support or oppose",
    "approve or disapprove",
    "favorable or unfavorable",
    "agree or disagree",
    "priority",
];

/// 一条题型规则
///
/// `matches` 的参数依次为小写题干、原始选项串
pub struct TypeRule {
    pub name: &'static str,
    pub matches: fn(&str, &str) -> bool,
    pub question_type: QuestionType,
}

fn is_open_ended(_text: &str, options: &str) -> bool {
    options == OPEN_ENDED_MARKER
}

fn is_numeric_scale(_text: &str, options: &str) -> bool {
    options.contains(NUMERIC_SCALE_PREFIX)
}

fn is_ranking(text: &str, _options: &str) -> bool {
    text.contains("rank") && text.contains("order")
}

fn is_message_test(text: &str, _options: &str) -> bool {
    text.contains("message a") && text.contains("message b")
}

fn is_multiple_select(text: &str, _options: &str) -> bool {
    text.contains("select all") || text.contains("check all")
}

fn is_likert(text: &str, _options: &str) -> bool {
    LIKERT_CUES.iter().any(|cue| text.contains(cue))
}

/// 有序规则表，未命中任何规则时为单选
pub const TYPE_RULES: &[TypeRule] = &[
    TypeRule {
        name: "open_ended_marker",
        matches: is_open_ended,
        question_type: QuestionType::OpenEnded,
    },
    TypeRule {
        name: "numeric_scale_marker",
        matches: is_numeric_scale,
        question_type: QuestionType::NumericScale,
    },
    TypeRule {
        name: "rank_and_order",
        matches: is_ranking,
        question_type: QuestionType::Ranking,
    },
    TypeRule {
        name: "message_a_and_b",
        matches: is_message_test,
        question_type: QuestionType::MessageTest,
    },
    TypeRule {
        name: "select_all",
        matches: is_multiple_select,
        question_type: QuestionType::MultipleSelect,
    },
    TypeRule {
        name: "likert_cue",
        matches: is_likert,
        question_type: QuestionType::LikertScale,
    },
];

/// 返回第一个命中的规则，未命中返回 None
pub fn matching_rule(question_text: &str, response_options_raw: &str) -> Option<&'static TypeRule> {
    let text_lower = question_text.to_lowercase();
    TYPE_RULES
        .iter()
        .find(|rule| (rule.matches)(&text_lower, response_options_raw))
}

/// 推断题型，总是返回一个值
pub fn classify_type(question_text: &str, response_options_raw: &str) -> QuestionType {
    matching_rule(question_text, response_options_raw)
        .map(|rule| rule.question_type)
        .unwrap_or_default()
}
