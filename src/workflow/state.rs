//! 工作流阶段与会话状态
//!
//! 三个阶段：上传 → 选题 → 审阅/导出；
//! 一次出卷会话对应一个 `WorkflowState` 实例，多会话互不共享

use serde::{Deserialize, Serialize};

use crate::models::{Document, Question, Topic};
use crate::services::SelectionSet;

/// 工作流阶段
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Stage {
    /// 上传文档并填写科目
    Upload,
    /// 勾选主题并设置生成参数
    Select,
    /// 审阅生成结果并导出
    Review,
}

impl Stage {
    /// 按顺序返回全部阶段
    pub fn all() -> &'static [Stage] {
        &[Stage::Upload, Stage::Select, Stage::Review]
    }

    /// 下一阶段
    pub fn next(self) -> Option<Stage> {
        match self {
            Stage::Upload => Some(Stage::Select),
            Stage::Select => Some(Stage::Review),
            Stage::Review => None,
        }
    }

    /// 上一阶段
    pub fn previous(self) -> Option<Stage> {
        match self {
            Stage::Upload => None,
            Stage::Select => Some(Stage::Upload),
            Stage::Review => Some(Stage::Select),
        }
    }

    /// 阶段序号（界面步骤条从 1 开始）
    pub fn number(self) -> usize {
        match self {
            Stage::Upload => 1,
            Stage::Select => 2,
            Stage::Review => 3,
        }
    }

    /// 阶段显示名
    pub fn display_name(self) -> &'static str {
        match self {
            Stage::Upload => "Upload",
            Stage::Select => "Select",
            Stage::Review => "Review",
        }
    }
}

impl Default for Stage {
    fn default() -> Self {
        Stage::Upload
    }
}

impl std::fmt::Display for Stage {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.display_name())
    }
}

/// 单次出卷会话的全部状态
///
/// 只允许 `WorkflowEngine` 的转换方法修改；主题列表和题目列表
/// 在每次分析/生成成功后整体替换，从不增量合并。
#[derive(Debug, Clone, Default)]
pub struct WorkflowState {
    /// 当前阶段
    pub stage: Stage,
    /// 待分析的源文档（分析成功移交后清空）
    pub document: Option<Document>,
    /// 科目名称
    pub subject: String,
    /// 服务端确认的文件名（分析成功后绑定）
    pub file_name: Option<String>,
    /// 文档内容预览（服务端透传）
    pub content_preview: String,
    /// 提取出的主题列表
    pub topics: Vec<Topic>,
    /// 勾选的主题子集
    pub selected: SelectionSet<Topic>,
    /// 生成的题目列表
    pub questions: Vec<Question>,
    /// 试卷标题
    pub exam_title: String,
    /// 既有题库（不透明数据，生成请求里原样透传）
    pub question_bank: Vec<serde_json::Value>,
}

impl WorkflowState {
    /// 创建新会话状态（初始阶段为上传）
    pub fn new() -> Self {
        Self::default()
    }

    /// 是否已有待分析的文档
    pub fn has_document(&self) -> bool {
        self.document.is_some()
    }

    /// 当前选中的主题键（按选择顺序）
    pub fn selected_topic_keys(&self) -> Vec<String> {
        self.selected.keys()
    }
}
