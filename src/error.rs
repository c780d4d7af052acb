use std::fmt;

/// 应用程序错误类型
///
/// 所有错误都以值的形式返回给调用方（kind + message），
/// 任何失败都不会破坏工作流状态：引擎始终停留在某个合法阶段。
#[derive(Debug)]
pub enum AppError {
    /// 输入校验错误（不发生任何状态变更）
    Validation(ValidationError),
    /// 服务端返回失败（success=false 或非 2xx 状态码）
    Service(ServiceError),
    /// 网络或解析错误
    Transport(TransportError),
}

impl fmt::Display for AppError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AppError::Validation(e) => write!(f, "校验错误: {}", e),
            AppError::Service(e) => write!(f, "服务错误: {}", e),
            AppError::Transport(e) => write!(f, "传输错误: {}", e),
        }
    }
}

impl std::error::Error for AppError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            AppError::Validation(e) => Some(e),
            AppError::Service(e) => Some(e),
            AppError::Transport(e) => Some(e),
        }
    }
}

/// 输入校验错误
#[derive(Debug)]
pub enum ValidationError {
    /// 科目名称为空
    MissingSubject,
    /// 未上传文件
    MissingDocument,
    /// 文件类型不在白名单内
    UnsupportedFileType { mime_type: String },
    /// 请求的题目数量不合法
    InvalidQuestionCount { given: u32 },
    /// 未选择任何题型
    NoQuestionTypes,
    /// 没有已分析的文件名（需要先完成上传分析）
    MissingFileName,
    /// 导出时题目列表为空
    EmptyQuestionList,
}

impl fmt::Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ValidationError::MissingSubject => write!(f, "科目名称不能为空"),
            ValidationError::MissingDocument => write!(f, "请先上传文件"),
            ValidationError::UnsupportedFileType { mime_type } => {
                write!(
                    f,
                    "不支持的文件类型: {} (仅支持 PDF、TXT、DOCX、JSON、Markdown)",
                    mime_type
                )
            }
            ValidationError::InvalidQuestionCount { given } => {
                write!(f, "题目数量无效: {} (至少需要 1 道)", given)
            }
            ValidationError::NoQuestionTypes => write!(f, "请至少选择一种题型"),
            ValidationError::MissingFileName => {
                write!(f, "没有可用的已分析文件，请先上传并分析文档")
            }
            ValidationError::EmptyQuestionList => {
                write!(f, "没有可导出的题目，请先生成题目")
            }
        }
    }
}

impl std::error::Error for ValidationError {}

/// 服务端错误
#[derive(Debug)]
pub enum ServiceError {
    /// 服务返回 success=false
    Rejected {
        endpoint: String,
        message: String,
    },
    /// 服务返回非 2xx 状态码
    BadStatus {
        endpoint: String,
        status: u16,
        body: String,
    },
}

impl fmt::Display for ServiceError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ServiceError::Rejected { endpoint, message } => {
                write!(f, "服务返回失败 ({}): {}", endpoint, message)
            }
            ServiceError::BadStatus {
                endpoint,
                status,
                body,
            } => {
                write!(
                    f,
                    "服务响应异常 ({}): 状态码={}, 响应={}",
                    endpoint, status, body
                )
            }
        }
    }
}

impl std::error::Error for ServiceError {}

/// 网络或解析错误
#[derive(Debug)]
pub enum TransportError {
    /// 网络请求失败
    RequestFailed {
        endpoint: String,
        source: Box<dyn std::error::Error + Send + Sync>,
    },
    /// JSON 解析失败
    JsonParseFailed {
        source: Box<dyn std::error::Error + Send + Sync>,
    },
}

impl fmt::Display for TransportError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TransportError::RequestFailed { endpoint, source } => {
                write!(f, "网络请求失败 ({}): {}", endpoint, source)
            }
            TransportError::JsonParseFailed { source } => {
                write!(f, "JSON解析失败: {}", source)
            }
        }
    }
}

impl std::error::Error for TransportError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            TransportError::RequestFailed { source, .. }
            | TransportError::JsonParseFailed { source } => {
                Some(source.as_ref() as &(dyn std::error::Error + 'static))
            }
        }
    }
}

// ========== 从常见错误类型转换 ==========

impl From<reqwest::Error> for AppError {
    fn from(err: reqwest::Error) -> Self {
        let endpoint = err.url().map(|u| u.to_string()).unwrap_or_default();
        AppError::Transport(TransportError::RequestFailed {
            endpoint,
            source: Box::new(err),
        })
    }
}

impl From<serde_json::Error> for AppError {
    fn from(err: serde_json::Error) -> Self {
        AppError::Transport(TransportError::JsonParseFailed {
            source: Box::new(err),
        })
    }
}

// ========== 便捷构造函数 ==========

impl AppError {
    /// 创建文件类型不支持错误
    pub fn unsupported_file_type(mime_type: impl Into<String>) -> Self {
        AppError::Validation(ValidationError::UnsupportedFileType {
            mime_type: mime_type.into(),
        })
    }

    /// 创建题目数量不合法错误
    pub fn invalid_question_count(given: u32) -> Self {
        AppError::Validation(ValidationError::InvalidQuestionCount { given })
    }

    /// 创建服务返回失败错误
    pub fn service_rejected(endpoint: impl Into<String>, message: impl Into<String>) -> Self {
        AppError::Service(ServiceError::Rejected {
            endpoint: endpoint.into(),
            message: message.into(),
        })
    }

    /// 创建服务状态码异常错误
    pub fn bad_status(endpoint: impl Into<String>, status: u16, body: impl Into<String>) -> Self {
        AppError::Service(ServiceError::BadStatus {
            endpoint: endpoint.into(),
            status,
            body: body.into(),
        })
    }

    /// 创建网络请求失败错误
    pub fn request_failed(
        endpoint: impl Into<String>,
        source: impl std::error::Error + Send + Sync + 'static,
    ) -> Self {
        AppError::Transport(TransportError::RequestFailed {
            endpoint: endpoint.into(),
            source: Box::new(source),
        })
    }
}

// ========== Result 类型别名 ==========

/// 应用程序结果类型
pub type AppResult<T> = Result<T, AppError>;
