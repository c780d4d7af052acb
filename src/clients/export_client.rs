//! 试卷导出服务客户端 - 基础设施层
//!
//! 提交导出请求并取回二进制产物；下载文件名来自响应头，
//! 解析逻辑在 `services::export_builder` 中独立实现

use async_trait::async_trait;
use tracing::debug;

use crate::clients::build_http_client;
use crate::config::Config;
use crate::error::{AppError, AppResult};
use crate::services::ExportRequest;

/// 导出产物：二进制内容加上可选的文件名响应头
#[derive(Debug, Clone)]
pub struct ExportArtifact {
    pub bytes: Vec<u8>,
    /// Content-Disposition 响应头原文（可能缺失）
    pub content_disposition: Option<String>,
}

/// 试卷导出服务
#[async_trait]
pub trait ExportService: Send + Sync {
    /// 导出试卷，返回二进制产物
    async fn export(&self, request: &ExportRequest) -> AppResult<ExportArtifact>;
}

/// 导出服务 HTTP 客户端
pub struct HttpExportClient {
    http: reqwest::Client,
    base_url: String,
}

impl HttpExportClient {
    /// 创建新的导出客户端
    pub fn new(config: &Config) -> Self {
        Self {
            http: build_http_client(config),
            base_url: config.api_base_url.clone(),
        }
    }

    fn endpoint(&self) -> String {
        format!("{}/api/export", self.base_url)
    }
}

#[async_trait]
impl ExportService for HttpExportClient {
    async fn export(&self, request: &ExportRequest) -> AppResult<ExportArtifact> {
        let endpoint = self.endpoint();

        // 与界面一致：表单字段提交，布尔值传字符串
        let form = reqwest::multipart::Form::new()
            .text("questions", request.payload.clone())
            .text("format", request.format.as_str().to_string())
            .text("title", request.title.clone())
            .text("include_answers", request.include_answers.to_string());

        debug!("导出试卷: {} ({})", request.title, request.format);

        let response = self
            .http
            .post(&endpoint)
            .multipart(form)
            .send()
            .await
            .map_err(|e| AppError::request_failed(&endpoint, e))?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(AppError::bad_status(&endpoint, status.as_u16(), body));
        }

        let content_disposition = response
            .headers()
            .get(reqwest::header::CONTENT_DISPOSITION)
            .and_then(|value| value.to_str().ok())
            .map(str::to_string);

        let bytes = response
            .bytes()
            .await
            .map_err(|e| AppError::request_failed(&endpoint, e))?
            .to_vec();

        Ok(ExportArtifact {
            bytes,
            content_disposition,
        })
    }
}
