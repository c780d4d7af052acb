//! # Exam Paper Workflow
//!
//! 出卷工作流的核心引擎（上传 → 选题 → 审阅/导出）
//!
//! ## 架构设计
//!
//! 本系统采用严格的分层架构：
//!
//! ### ① 基础设施层（Clients）
//! - `clients/` - 三个外部服务的 HTTP 客户端，只暴露能力
//! - `AnalyzeService` / `GenerateService` / `ExportService` - 以 trait
//!   作为服务边界，方便测试时注入替身
//!
//! ### ② 业务能力层（Services）
//! - `services/` - 描述"我能做什么"，纯逻辑、不碰网络
//! - `SelectionSet` - 主题选择集合（全选 / 全不选 / 切换）
//! - `GroupingEngine` - 主题 → 题型 → 题目的分组视图
//! - `ExportRequestBuilder` - 导出请求组装与下载文件名解析
//!
//! ### ③ 流程层（Workflow）
//! - `workflow/` - 定义"一次出卷会话"的完整流程
//! - `Stage` / `WorkflowState` - 阶段机与会话状态
//! - `WorkflowEngine` - 流程编排（analyze → generate → export）
//!
//! ### ④ 编排层（Orchestration）
//! - 由调用方实现（界面渲染、请求节流、下载落盘），不在本 crate 范围内
//!
//! ## 模块结构

pub mod clients;
pub mod config;
pub mod error;
pub mod models;
pub mod services;
pub mod utils;
pub mod workflow;

// 重新导出常用类型
pub use clients::{
    AnalyzeOutcome, AnalyzeService, ExportArtifact, ExportService, GenerateOutcome,
    GenerateRequest, GenerateService, HttpAnalyzeClient, HttpExportClient, HttpGenerateClient,
};
pub use config::Config;
pub use error::{AppError, AppResult, ServiceError, TransportError, ValidationError};
pub use models::{Difficulty, Document, Question, QuestionType, Topic};
pub use services::{
    resolve_download_filename, ExportFormat, ExportRequest, ExportRequestBuilder, GroupedView,
    GroupingEngine, SelectionSet,
};
pub use workflow::{ExportDownload, GenerateParams, Stage, WorkflowEngine, WorkflowState};
