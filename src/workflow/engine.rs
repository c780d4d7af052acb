//! 出卷工作流引擎 - 流程层
//!
//! 核心职责：围绕一份 `WorkflowState` 编排三阶段流程
//!
//! 流程顺序：
//! 1. 上传阶段：attach_document → analyze（委托分析服务）
//! 2. 选题阶段：toggle/select_all/deselect_all → generate（委托生成服务）
//! 3. 审阅阶段：grouped_view → export（委托导出服务）
//!
//! 三次服务调用是仅有的挂起点；任何一次失败都不会改动状态，
//! 引擎始终停留在已经到达过的合法阶段。调用方需要串行化这三个
//! 操作——`&mut self` 签名在进程内由借用检查器强制了这一点。

use std::sync::Arc;

use tracing::{info, warn};

use crate::clients::{
    AnalyzeService, ExportService, GenerateRequest, GenerateService, HttpAnalyzeClient,
    HttpExportClient, HttpGenerateClient,
};
use crate::config::Config;
use crate::error::{AppError, AppResult, ValidationError};
use crate::models::{Difficulty, Document, QuestionType, Topic};
use crate::services::{
    resolve_download_filename, ExportFormat, ExportRequest, ExportRequestBuilder, GroupedView,
    GroupingEngine,
};
use crate::utils::logging::truncate_text;
use crate::workflow::state::{Stage, WorkflowState};

/// 题目生成参数（来自调用方界面）
#[derive(Debug, Clone)]
pub struct GenerateParams {
    /// 题目数量（至少 1 道）
    pub num_questions: u32,
    pub difficulty: Difficulty,
    /// 要生成的题型（至少一种）
    pub question_types: Vec<QuestionType>,
}

/// 导出结果：产物字节加上解析出的下载文件名
#[derive(Debug, Clone)]
pub struct ExportDownload {
    pub bytes: Vec<u8>,
    pub file_name: String,
}

/// 出卷工作流引擎
///
/// - 持有本次会话的全部状态，外部只读
/// - 校验合法的阶段转换，委托三个外部服务完成实际工作
/// - 不负责渲染和持久化
pub struct WorkflowEngine {
    state: WorkflowState,
    analyze_service: Arc<dyn AnalyzeService>,
    generate_service: Arc<dyn GenerateService>,
    export_service: Arc<dyn ExportService>,
    verbose_logging: bool,
}

impl WorkflowEngine {
    /// 创建使用 HTTP 服务客户端的引擎
    pub fn new(config: &Config) -> Self {
        Self {
            state: WorkflowState::new(),
            analyze_service: Arc::new(HttpAnalyzeClient::new(config)),
            generate_service: Arc::new(HttpGenerateClient::new(config)),
            export_service: Arc::new(HttpExportClient::new(config)),
            verbose_logging: config.verbose_logging,
        }
    }

    /// 创建使用自定义服务实现的引擎（测试时注入替身）
    pub fn with_services(
        analyze_service: Arc<dyn AnalyzeService>,
        generate_service: Arc<dyn GenerateService>,
        export_service: Arc<dyn ExportService>,
    ) -> Self {
        Self {
            state: WorkflowState::new(),
            analyze_service,
            generate_service,
            export_service,
            verbose_logging: false,
        }
    }

    /// 当前会话状态（只读）
    pub fn state(&self) -> &WorkflowState {
        &self.state
    }

    /// 当前阶段
    pub fn stage(&self) -> Stage {
        self.state.stage
    }

    // ========== 上传阶段 ==========

    /// 接收用户选择的文件
    ///
    /// 只做白名单校验，不触发网络请求
    pub fn attach_document(&mut self, document: Document) -> AppResult<()> {
        if !document.is_supported() {
            return Err(AppError::unsupported_file_type(&document.mime_type));
        }

        info!("📄 已接收文件: {} ({})", document.file_name, document.mime_type);
        self.state.document = Some(document);
        Ok(())
    }

    /// 移除已接收的文件（同时解除已绑定的服务端文件名）
    pub fn remove_document(&mut self) {
        if let Some(document) = self.state.document.take() {
            info!("🗑️ 已移除文件: {}", document.file_name);
        }
        self.state.file_name = None;
    }

    /// 分析文档并进入选题阶段（Upload → Select）
    ///
    /// 前置条件：科目非空、文件已上传且类型在白名单内。
    /// 成功后整体替换主题列表并默认全选，绑定服务端确认的文件名，
    /// 原始文件随之移交丢弃。失败时状态不变，停留在上传阶段。
    pub async fn analyze(&mut self, subject: &str) -> AppResult<()> {
        let subject = subject.trim();
        if subject.is_empty() {
            return Err(AppError::Validation(ValidationError::MissingSubject));
        }

        let outcome = {
            let document = match self.state.document.as_ref() {
                Some(document) => document,
                None => return Err(AppError::Validation(ValidationError::MissingDocument)),
            };
            if !document.is_supported() {
                return Err(AppError::unsupported_file_type(&document.mime_type));
            }

            info!("🔍 正在分析文档: {} (科目: {})", document.file_name, subject);
            self.analyze_service.analyze(document, subject).await?
        };

        // 成功：主题整体替换，默认全选
        self.state.subject = subject.to_string();
        self.state.topics = outcome.topics;
        let topics = self.state.topics.clone();
        self.state.selected.select_all(&topics);
        self.state.file_name = Some(outcome.filename);
        self.state.content_preview = outcome.content_preview;
        self.state.document = None;
        self.state.stage = Stage::Select;

        info!("✓ 分析完成，提取到 {} 个主题", self.state.topics.len());
        if self.verbose_logging {
            for topic in &self.state.topics {
                info!("  - {}", topic.topic);
            }
            info!("内容预览: {}", truncate_text(&self.state.content_preview, 80));
        }

        Ok(())
    }

    // ========== 选题阶段 ==========

    /// 切换单个主题的选中状态
    pub fn toggle_topic(&mut self, topic: &Topic) {
        self.state.selected.toggle(topic);
    }

    /// 全选主题
    pub fn select_all_topics(&mut self) {
        let topics = self.state.topics.clone();
        self.state.selected.select_all(&topics);
    }

    /// 全不选主题
    pub fn deselect_all_topics(&mut self) {
        self.state.selected.deselect_all();
    }

    /// 设置试卷标题（留空时生成阶段会补默认标题）
    pub fn set_exam_title(&mut self, title: &str) {
        self.state.exam_title = title.to_string();
    }

    /// 生成题目并进入审阅阶段（Select → Review）
    ///
    /// 前置条件：数量 ≥ 1、至少一种题型、已绑定分析过的文件名。
    /// 文件名缺失时退回上传阶段（而不是静默失败）。
    /// 成功后题目列表整体替换；重新生成走的是同一个转换。
    pub async fn generate(&mut self, params: &GenerateParams) -> AppResult<()> {
        if params.num_questions < 1 {
            return Err(AppError::invalid_question_count(params.num_questions));
        }
        if params.question_types.is_empty() {
            return Err(AppError::Validation(ValidationError::NoQuestionTypes));
        }

        let file_name = match self.state.file_name.clone() {
            Some(file_name) => file_name,
            None => {
                warn!("⚠️ 没有可用的已分析文件，退回上传阶段");
                self.state.stage = Stage::Upload;
                return Err(AppError::Validation(ValidationError::MissingFileName));
            }
        };

        let request = GenerateRequest {
            filename: file_name,
            subject: self.state.subject.clone(),
            topics: self.state.selected_topic_keys(),
            difficulty: params.difficulty,
            question_types: params.question_types.clone(),
            num_questions: params.num_questions,
            question_bank: self.state.question_bank.clone(),
        };

        info!(
            "🤖 正在生成题目: {} 道 (难度: {}, 主题: {} 个)",
            request.num_questions,
            request.difficulty,
            request.topics.len()
        );

        let outcome = self.generate_service.generate(&request).await?;

        // 成功：题目整体替换
        self.state.questions = outcome.questions;

        // 标题为空时补默认标题
        if self.state.exam_title.trim().is_empty() {
            self.state.exam_title = format!(
                "{} Exam - {}",
                self.state.subject,
                chrono::Local::now().format("%Y-%m-%d")
            );
        }

        self.state.stage = Stage::Review;
        info!("✓ 生成完成，共 {} 道题目", self.state.questions.len());

        Ok(())
    }

    // ========== 审阅阶段 ==========

    /// 从当前题目列表重算分组视图（每次进入审阅阶段都重新计算）
    pub fn grouped_view(&self) -> GroupedView {
        GroupingEngine::group(&self.state.questions)
    }

    /// 组装导出请求（不触发网络请求）
    ///
    /// 题目列表为空时拒绝；标题留空退化为 "科目 Exam"
    pub fn build_export_request(
        &self,
        format: ExportFormat,
        title: &str,
        include_answers: bool,
    ) -> AppResult<ExportRequest> {
        ExportRequestBuilder::build(
            &self.state.questions,
            title,
            format,
            include_answers,
            &self.state.subject,
        )
    }

    /// 导出试卷
    ///
    /// 构建请求 → 调用导出服务 → 从响应头解析下载文件名。
    /// 不改动任何工作流状态；失败时仍停留在当前阶段。
    pub async fn export(
        &mut self,
        format: ExportFormat,
        title: &str,
        include_answers: bool,
    ) -> AppResult<ExportDownload> {
        let request = self.build_export_request(format, title, include_answers)?;

        info!("📤 正在导出试卷: {} ({})", request.title, request.format);

        let artifact = self.export_service.export(&request).await?;

        let default_name = request.default_filename();
        let file_name =
            resolve_download_filename(artifact.content_disposition.as_deref(), &default_name);

        info!("✓ 试卷已导出: {} ({} 字节)", file_name, artifact.bytes.len());

        Ok(ExportDownload {
            bytes: artifact.bytes,
            file_name,
        })
    }

    // ========== 导航 ==========

    /// 返回选题阶段（纯导航，不改动其他状态）
    pub fn back_to_select(&mut self) {
        self.state.stage = Stage::Select;
    }

    /// 返回上传阶段（纯导航，不改动其他状态）
    pub fn back_to_upload(&mut self) {
        self.state.stage = Stage::Upload;
    }
}
