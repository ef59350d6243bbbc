//! 话题分类服务 - 业务能力层
//!
//! 按关键词组依次匹配题干，第一个命中的话题生效，都未命中归为一般政策

use crate::models::Topic;

/// 一组关键词及其对应话题
pub struct TopicRule {
    pub topic: Topic,
    pub keywords: &'static [&'static str],
}

/// 有序规则表
pub const TOPIC_RULES: &[TopicRule] = &[
    TopicRule {
        topic: Topic::Demographics,
        keywords: &["gender", "education", "race", "ethnicity", "employment", "relationship"],
    },
    TopicRule {
        topic: Topic::VoteChoice,
        keywords: &["vote", "voting", "election", "candidate", "democrat", "republican"],
    },
    TopicRule {
        topic: Topic::Housing,
        keywords: &["housing", "home", "rent", "zoning", "development", "neighborhood"],
    },
];

/// 推断话题，总是返回一个值
pub fn classify_topic(question_text: &str) -> Topic {
    let text_lower = question_text.to_lowercase();
    TOPIC_RULES
        .iter()
        .find(|rule| rule.keywords.iter().any(|kw| text_lower.contains(kw)))
        .map(|rule| rule.topic)
        .unwrap_or_default()
}
