pub mod analyze_client;
pub mod export_client;
pub mod generate_client;

pub use analyze_client::{AnalyzeOutcome, AnalyzeService, HttpAnalyzeClient};
pub use export_client::{ExportArtifact, ExportService, HttpExportClient};
pub use generate_client::{GenerateOutcome, GenerateRequest, GenerateService, HttpGenerateClient};

use crate::config::Config;

/// 构建带超时配置的 HTTP 客户端
///
/// 超时只约束传输层；构建失败时退回默认客户端。
pub(crate) fn build_http_client(config: &Config) -> reqwest::Client {
    reqwest::Client::builder()
        .timeout(std::time::Duration::from_secs(config.request_timeout_secs))
        .build()
        .unwrap_or_default()
}
