//! 上传文档模型
//!
//! 文件在被接受时创建，分析成功移交后即被丢弃
//! （之后以服务端确认的文件名为准）

/// 支持的文件类型白名单（固定集合）
pub const SUPPORTED_MIME_TYPES: [&str; 5] = [
    "application/pdf",
    "text/plain",
    "application/vnd.openxmlformats-officedocument.wordprocessingml.document",
    "application/json",
    "text/markdown",
];

/// 检查 MIME 类型是否在白名单内
pub fn is_supported_mime(mime_type: &str) -> bool {
    SUPPORTED_MIME_TYPES.contains(&mime_type)
}

/// 用户上传的源文档
#[derive(Debug, Clone)]
pub struct Document {
    /// 本地文件名
    pub file_name: String,
    /// MIME 类型
    pub mime_type: String,
    /// 文件原始字节
    pub raw_bytes: Vec<u8>,
}

impl Document {
    /// 创建新的文档
    pub fn new(
        file_name: impl Into<String>,
        mime_type: impl Into<String>,
        raw_bytes: Vec<u8>,
    ) -> Self {
        Self {
            file_name: file_name.into(),
            mime_type: mime_type.into(),
            raw_bytes,
        }
    }

    /// 文件类型是否在白名单内
    pub fn is_supported(&self) -> bool {
        is_supported_mime(&self.mime_type)
    }
}
