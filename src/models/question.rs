//! 试题模型
//!
//! 由生成服务返回，核心侧视为不可变数据；
//! `id` 在一批生成结果内唯一（上游用作分组与绑定键）

use serde::{Deserialize, Serialize};

/// 题型
///
/// 线上格式是字符串（"MCQ"、"Short Answer" 等）；
/// 未知字符串原样保留在 `Other` 中，这样分组键和线上值保持一致。
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum QuestionType {
    /// 选择题
    Mcq,
    /// 简答题
    ShortAnswer,
    /// 判断题
    TrueFalse,
    /// 填空题
    FillInBlank,
    /// 论述题
    Essay,
    /// 其他题型（保留原始字符串）
    Other(String),
}

impl QuestionType {
    /// 获取线上格式的标签
    pub fn label(&self) -> &str {
        match self {
            QuestionType::Mcq => "MCQ",
            QuestionType::ShortAnswer => "Short Answer",
            QuestionType::TrueFalse => "True/False",
            QuestionType::FillInBlank => "Fill in the Blank",
            QuestionType::Essay => "Essay",
            QuestionType::Other(label) => label,
        }
    }

    /// 从线上字符串解析题型
    pub fn from_label(label: &str) -> Self {
        match label {
            "MCQ" => QuestionType::Mcq,
            "Short Answer" => QuestionType::ShortAnswer,
            "True/False" => QuestionType::TrueFalse,
            "Fill in the Blank" => QuestionType::FillInBlank,
            "Essay" => QuestionType::Essay,
            other => QuestionType::Other(other.to_string()),
        }
    }
}

impl From<String> for QuestionType {
    fn from(label: String) -> Self {
        QuestionType::from_label(&label)
    }
}

impl From<QuestionType> for String {
    fn from(question_type: QuestionType) -> Self {
        question_type.label().to_string()
    }
}

impl std::fmt::Display for QuestionType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.label())
    }
}

/// 难度等级
///
/// 未知字符串按生成服务自身的兜底规则退化为 Medium。
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum Difficulty {
    Easy,
    Medium,
    Hard,
}

impl Difficulty {
    /// 获取线上格式的标签
    pub fn label(self) -> &'static str {
        match self {
            Difficulty::Easy => "Easy",
            Difficulty::Medium => "Medium",
            Difficulty::Hard => "Hard",
        }
    }

    /// 从线上字符串解析难度
    pub fn from_label(label: &str) -> Self {
        match label {
            "Easy" => Difficulty::Easy,
            "Medium" => Difficulty::Medium,
            "Hard" => Difficulty::Hard,
            _ => Difficulty::Medium,
        }
    }
}

impl Default for Difficulty {
    fn default() -> Self {
        Difficulty::Medium
    }
}

impl From<String> for Difficulty {
    fn from(label: String) -> Self {
        Difficulty::from_label(&label)
    }
}

impl From<Difficulty> for String {
    fn from(difficulty: Difficulty) -> Self {
        difficulty.label().to_string()
    }
}

impl std::fmt::Display for Difficulty {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.label())
    }
}

/// 生成的试题
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Question {
    pub id: String,

    #[serde(rename = "type", default, skip_serializing_if = "Option::is_none")]
    pub question_type: Option<QuestionType>,

    #[serde(default)]
    pub difficulty: Difficulty,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub topic: Option<String>,

    pub text: String,

    /// 选项列表（仅选择题）
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub options: Option<Vec<String>>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub correct_answer: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub explanation: Option<String>,
}

impl Question {
    /// 分组用的主题键：缺失或为空时退化为字面量 "General"
    pub fn topic_key(&self) -> &str {
        self.topic
            .as_deref()
            .filter(|t| !t.is_empty())
            .unwrap_or("General")
    }

    /// 分组用的题型键：缺失时退化为字面量 "Other"
    pub fn type_key(&self) -> &str {
        self.question_type
            .as_ref()
            .map(|t| t.label())
            .unwrap_or("Other")
    }

    /// 是否为选择题
    pub fn is_mcq(&self) -> bool {
        matches!(self.question_type, Some(QuestionType::Mcq))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_question_type_wire_labels() {
        assert_eq!(QuestionType::from_label("MCQ"), QuestionType::Mcq);
        assert_eq!(
            QuestionType::from_label("Short Answer"),
            QuestionType::ShortAnswer
        );
        // 未知题型保留原始字符串
        let other = QuestionType::from_label("Matching");
        assert_eq!(other.label(), "Matching");
    }

    #[test]
    fn test_difficulty_degrades_to_medium() {
        assert_eq!(Difficulty::from_label("Hard"), Difficulty::Hard);
        assert_eq!(Difficulty::from_label("Impossible"), Difficulty::Medium);
        assert_eq!(Difficulty::default(), Difficulty::Medium);
    }

    #[test]
    fn test_deserialize_full_mcq() {
        let json = r#"{
            "id": "q_1a2b3c4d",
            "text": "Which organelle produces ATP?",
            "options": ["Nucleus", "Mitochondria", "Ribosome", "Golgi"],
            "correct_answer": "Mitochondria",
            "explanation": "Mitochondria are the site of cellular respiration.",
            "topic": "Cells",
            "difficulty": "Easy",
            "type": "MCQ"
        }"#;
        let question: Question = serde_json::from_str(json).unwrap();
        assert!(question.is_mcq());
        assert_eq!(question.difficulty, Difficulty::Easy);
        assert_eq!(question.topic_key(), "Cells");
        assert_eq!(question.type_key(), "MCQ");
        assert_eq!(question.options.as_ref().unwrap().len(), 4);
    }

    #[test]
    fn test_optional_fields_degrade_to_fallbacks() {
        // 生成服务偶尔会漏掉 topic / type / difficulty
        let json = r#"{"id": "q_x", "text": "Define osmosis."}"#;
        let question: Question = serde_json::from_str(json).unwrap();
        assert_eq!(question.topic_key(), "General");
        assert_eq!(question.type_key(), "Other");
        assert_eq!(question.difficulty, Difficulty::Medium);
        assert!(question.options.is_none());
        assert!(!question.is_mcq());
    }

    #[test]
    fn test_empty_topic_groups_as_general() {
        let json = r#"{"id": "q_y", "text": "x", "topic": ""}"#;
        let question: Question = serde_json::from_str(json).unwrap();
        assert_eq!(question.topic_key(), "General");
    }

    #[test]
    fn test_serialize_round_trip_keeps_wire_strings() {
        let question = Question {
            id: "q_1".to_string(),
            question_type: Some(QuestionType::ShortAnswer),
            difficulty: Difficulty::Hard,
            topic: Some("Genetics".to_string()),
            text: "Explain Mendel's first law.".to_string(),
            options: None,
            correct_answer: Some("Law of segregation".to_string()),
            explanation: None,
        };
        let json = serde_json::to_value(&question).unwrap();
        assert_eq!(json["type"], "Short Answer");
        assert_eq!(json["difficulty"], "Hard");
        // 缺省字段不应出现在序列化结果里
        assert!(json.get("options").is_none());
        assert!(json.get("explanation").is_none());
    }
}
