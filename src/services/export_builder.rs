//! 导出请求构建 - 业务能力层
//!
//! 把已确认的题目集合打包成导出请求，并负责从响应头解析
//! 下载文件名（与实际下载机制无关，可独立测试）

use regex::Regex;
use serde::{Deserialize, Serialize};

use crate::error::{AppError, AppResult, ValidationError};
use crate::models::Question;

/// 导出格式
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ExportFormat {
    Pdf,
    Html,
    Md,
}

impl ExportFormat {
    /// 线上格式字符串，同时也是下载文件的扩展名
    pub fn as_str(self) -> &'static str {
        match self {
            ExportFormat::Pdf => "pdf",
            ExportFormat::Html => "html",
            ExportFormat::Md => "md",
        }
    }
}

impl std::fmt::Display for ExportFormat {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// 组装完成的导出请求
#[derive(Debug, Clone)]
pub struct ExportRequest {
    /// 序列化后的题目列表（JSON 字符串）
    pub payload: String,
    pub format: ExportFormat,
    pub title: String,
    pub include_answers: bool,
}

impl ExportRequest {
    /// 计算默认下载文件名："标题空白替换为下划线.扩展名"
    pub fn default_filename(&self) -> String {
        let safe_title = if let Ok(re) = Regex::new(r"\s+") {
            re.replace_all(&self.title, "_").into_owned()
        } else {
            self.title.clone()
        };
        format!("{}.{}", safe_title, self.format.as_str())
    }
}

/// 导出请求构建器
pub struct ExportRequestBuilder;

impl ExportRequestBuilder {
    /// 构建导出请求
    ///
    /// 题目列表为空时拒绝构建（调用方应在发起网络请求前暴露该错误）；
    /// 标题留空时退化为 "科目 Exam"。
    pub fn build(
        questions: &[Question],
        title: &str,
        format: ExportFormat,
        include_answers: bool,
        subject: &str,
    ) -> AppResult<ExportRequest> {
        if questions.is_empty() {
            return Err(AppError::Validation(ValidationError::EmptyQuestionList));
        }

        let title = title.trim();
        let title = if title.is_empty() {
            format!("{} Exam", subject)
        } else {
            title.to_string()
        };

        let payload = serde_json::to_string(questions)?;

        Ok(ExportRequest {
            payload,
            format,
            title,
            include_answers,
        })
    }
}

/// 从响应头解析下载文件名
///
/// 用固定模式 `filename="?([^"]+)"?` 提取带引号或裸露的文件名；
/// 提取失败（头缺失、格式不符）时使用计算出的默认文件名。
pub fn resolve_download_filename(header: Option<&str>, default_name: &str) -> String {
    if let Some(header) = header {
        if let Ok(re) = Regex::new(r#"filename="?([^"]+)"?"#) {
            if let Some(captures) = re.captures(header) {
                if let Some(matched) = captures.get(1) {
                    return matched.as_str().to_string();
                }
            }
        }
    }
    default_name.to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{Difficulty, QuestionType};

    fn sample_questions() -> Vec<Question> {
        vec![Question {
            id: "q_1".to_string(),
            question_type: Some(QuestionType::Mcq),
            difficulty: Difficulty::Easy,
            topic: Some("Cells".to_string()),
            text: "Which organelle produces ATP?".to_string(),
            options: Some(vec!["A".to_string(), "B".to_string()]),
            correct_answer: Some("B".to_string()),
            explanation: None,
        }]
    }

    #[test]
    fn test_build_refuses_empty_question_list() {
        let result = ExportRequestBuilder::build(&[], "Final", ExportFormat::Pdf, true, "Biology");
        assert!(matches!(
            result,
            Err(AppError::Validation(ValidationError::EmptyQuestionList))
        ));
    }

    #[test]
    fn test_blank_title_falls_back_to_subject_exam() {
        let questions = sample_questions();
        let request =
            ExportRequestBuilder::build(&questions, "", ExportFormat::Pdf, true, "Chemistry")
                .unwrap();
        assert_eq!(request.title, "Chemistry Exam");

        let request =
            ExportRequestBuilder::build(&questions, "   ", ExportFormat::Md, false, "Chemistry")
                .unwrap();
        assert_eq!(request.title, "Chemistry Exam");
    }

    #[test]
    fn test_payload_serializes_all_questions() {
        let questions = sample_questions();
        let request =
            ExportRequestBuilder::build(&questions, "Midterm", ExportFormat::Html, true, "Biology")
                .unwrap();

        let parsed: Vec<Question> = serde_json::from_str(&request.payload).unwrap();
        assert_eq!(parsed, questions);
        assert!(request.include_answers);
    }

    #[test]
    fn test_default_filename_replaces_whitespace_runs() {
        let request = ExportRequestBuilder::build(
            &sample_questions(),
            "Biology  Midterm Exam",
            ExportFormat::Pdf,
            false,
            "Biology",
        )
        .unwrap();
        assert_eq!(request.default_filename(), "Biology_Midterm_Exam.pdf");
    }

    #[test]
    fn test_resolve_filename_from_quoted_header() {
        let resolved = resolve_download_filename(
            Some(r#"attachment; filename="Midterm_Exam.pdf""#),
            "X.pdf",
        );
        assert_eq!(resolved, "Midterm_Exam.pdf");
    }

    #[test]
    fn test_resolve_filename_from_bare_header() {
        let resolved =
            resolve_download_filename(Some("attachment; filename=Quiz_1.md"), "X.md");
        assert_eq!(resolved, "Quiz_1.md");
    }

    #[test]
    fn test_resolve_filename_falls_back_to_default() {
        // 头缺失
        assert_eq!(resolve_download_filename(None, "X.pdf"), "X.pdf");
        // 头里没有 filename 字段
        assert_eq!(
            resolve_download_filename(Some("attachment"), "X.pdf"),
            "X.pdf"
        );
        // filename 为空引号
        assert_eq!(
            resolve_download_filename(Some(r#"attachment; filename="""#), "X.pdf"),
            "X.pdf"
        );
    }
}
