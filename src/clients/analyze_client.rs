//! 文档分析服务客户端 - 基础设施层
//!
//! 上传源文档并取回提取出的主题列表；
//! 服务本身是黑盒，这里只关心请求与响应的形状

use async_trait::async_trait;
use serde::Deserialize;
use tracing::debug;

use crate::clients::build_http_client;
use crate::config::Config;
use crate::error::{AppError, AppResult};
use crate::models::{Document, Topic};

/// 分析服务的响应
#[derive(Debug, Clone, Deserialize)]
pub struct AnalyzeOutcome {
    #[serde(default)]
    pub success: bool,

    #[serde(default)]
    pub topics: Vec<Topic>,

    /// 文档内容预览（透传给界面展示）
    #[serde(default)]
    pub content_preview: String,

    /// 服务端确认的文件名（后续生成请求要用它）
    #[serde(default)]
    pub filename: String,

    #[serde(default)]
    pub error: Option<String>,
}

/// 文档分析服务
///
/// 实现方约定：服务返回 success=false 时以 `Service` 错误返回，
/// 错误消息优先取服务端给出的 error 字段。
#[async_trait]
pub trait AnalyzeService: Send + Sync {
    /// 上传文档并提取主题
    async fn analyze(&self, document: &Document, subject: &str) -> AppResult<AnalyzeOutcome>;
}

/// 分析服务 HTTP 客户端
pub struct HttpAnalyzeClient {
    http: reqwest::Client,
    base_url: String,
}

impl HttpAnalyzeClient {
    /// 创建新的分析客户端
    pub fn new(config: &Config) -> Self {
        Self {
            http: build_http_client(config),
            base_url: config.api_base_url.clone(),
        }
    }

    fn endpoint(&self) -> String {
        format!("{}/api/upload", self.base_url)
    }
}

#[async_trait]
impl AnalyzeService for HttpAnalyzeClient {
    async fn analyze(&self, document: &Document, subject: &str) -> AppResult<AnalyzeOutcome> {
        let endpoint = self.endpoint();

        let file_part = reqwest::multipart::Part::bytes(document.raw_bytes.clone())
            .file_name(document.file_name.clone())
            .mime_str(&document.mime_type)?;
        let form = reqwest::multipart::Form::new()
            .part("file", file_part)
            .text("subject", subject.to_string());

        debug!("上传文档到 {} (文件: {})", endpoint, document.file_name);

        let response = self
            .http
            .post(&endpoint)
            .multipart(form)
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

        let outcome: AnalyzeOutcome = serde_json::from_str(&body)?;

        if !outcome.success {
            let message = outcome
                .error
                .unwrap_or_else(|| "Failed to analyze file".to_string());
            return Err(AppError::service_rejected(&endpoint, message));
        }

        Ok(outcome)
    }
}
