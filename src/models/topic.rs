use serde::{Deserialize, Serialize};

/// 话题枚举
///
/// 数值即 `topics.topic_id`。2、5、6 为保留编号，分类器不会产出
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Topic {
    /// 人口统计
    Demographics = 1,
    /// 一般政策，兜底话题
    #[default]
    Policy = 3,
    /// 住房
    Housing = 4,
    /// 投票选择
    VoteChoice = 7,
}

impl Topic {
    pub const ALL: [Topic; 4] = [
        Topic::Demographics,
        Topic::Policy,
        Topic::Housing,
        Topic::VoteChoice,
    ];

    /// 获取话题代码
    pub fn code(self) -> i64 {
        self as i64
    }

    /// 获取标准名称（与 `topics.topic_name` 一致）
    pub fn name(self) -> &'static str {
        match self {
            Topic::Demographics => "Demographics",
            Topic::Policy => "Policy",
            Topic::Housing => "Housing",
            Topic::VoteChoice => "Vote Choice",
        }
    }

    /// 从代码解析话题，保留编号返回 None
    pub fn from_code(code: i64) -> Option<Self> {
        Self::ALL.into_iter().find(|t| t.code() == code)
    }
}

impl std::fmt::Display for Topic {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.name())
    }
}
