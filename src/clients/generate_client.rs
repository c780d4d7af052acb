//! 题目生成服务客户端 - 基础设施层
//!
//! 把生成参数（文件名、科目、主题、难度、题型、数量）提交给
//! 生成服务，取回一整批试题

use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::clients::build_http_client;
use crate::config::Config;
use crate::error::{AppError, AppResult};
use crate::models::{Difficulty, Question, QuestionType};

/// 生成服务的请求体
#[derive(Debug, Clone, Serialize)]
pub struct GenerateRequest {
    /// 分析步骤确认的服务端文件名
    pub filename: String,
    pub subject: String,
    /// 选中的主题键（按选择顺序）
    pub topics: Vec<String>,
    pub difficulty: Difficulty,
    pub question_types: Vec<QuestionType>,
    pub num_questions: u32,
    /// 既有题库（不透明数据，原样透传）
    pub question_bank: Vec<serde_json::Value>,
}

/// 生成服务的响应
#[derive(Debug, Clone, Deserialize)]
pub struct GenerateOutcome {
    #[serde(default)]
    pub success: bool,

    #[serde(default)]
    pub questions: Vec<Question>,

    #[serde(default)]
    pub error: Option<String>,
}

/// 题目生成服务
///
/// 实现方约定：服务返回 success=false 时以 `Service` 错误返回。
#[async_trait]
pub trait GenerateService: Send + Sync {
    /// 生成一批试题
    async fn generate(&self, request: &GenerateRequest) -> AppResult<GenerateOutcome>;
}

/// 生成服务 HTTP 客户端
pub struct HttpGenerateClient {
    http: reqwest::Client,
    base_url: String,
}

impl HttpGenerateClient {
    /// 创建新的生成客户端
    pub fn new(config: &Config) -> Self {
        Self {
            http: build_http_client(config),
            base_url: config.api_base_url.clone(),
        }
    }

    fn endpoint(&self) -> String {
        format!("{}/api/generate-questions", self.base_url)
    }
}

#[async_trait]
impl GenerateService for HttpGenerateClient {
    async fn generate(&self, request: &GenerateRequest) -> AppResult<GenerateOutcome> {
        let endpoint = self.endpoint();

        debug!(
            "请求生成题目: {} 道, 文件: {}, 主题数: {}",
            request.num_questions,
            request.filename,
            request.topics.len()
        );

        let response = self
            .http
            .post(&endpoint)
            .json(request)
            .send()
            .await
            .map_err(|e| AppError::request_failed(&endpoint, e))?;

        let status = response.status();
        let body = response
            .text()
            .await
            .map_err(|e| AppError::request_failed(&endpoint, e))?;

        if !status.is_success() {
            return Err(AppError::bad_status(&endpoint, status.as_u16(), body));
        }

        let outcome: GenerateOutcome = serde_json::from_str(&body)?;

        if !outcome.success {
            let message = outcome
                .error
                .unwrap_or_else(|| "Failed to generate questions".to_string());
            return Err(AppError::service_rejected(&endpoint, message));
        }

        Ok(outcome)
    }
}
