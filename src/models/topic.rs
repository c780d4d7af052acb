//! 主题标签模型
//!
//! 由分析服务从文档内容中提取，核心侧只读

use serde::{Deserialize, Serialize};

/// 从文档中提取的主题
///
/// 相等性只看 `topic` 标签本身；`subtopics` 等附加字段是分析服务
/// 顺带返回的展示信息，不参与选择集合的身份判断。
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Topic {
    pub topic: String,

    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub subtopics: Vec<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub importance: Option<String>,

    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub question_types: Vec<String>,
}

impl Topic {
    /// 创建只带标签的主题
    pub fn new(label: impl Into<String>) -> Self {
        Self {
            topic: label.into(),
            subtopics: Vec::new(),
            importance: None,
            question_types: Vec::new(),
        }
    }
}

impl PartialEq for Topic {
    fn eq(&self, other: &Self) -> bool {
        self.topic == other.topic
    }
}

impl Eq for Topic {}

impl std::fmt::Display for Topic {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.topic)
    }
}
