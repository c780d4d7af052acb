//! 题目分组引擎 - 业务能力层
//!
//! 把平铺的题目列表投影为"主题 → 题型 → 题目"的嵌套视图，
//! 供审阅页面渲染使用；纯函数，按需重算，从不落盘

use serde::Serialize;

use crate::models::Question;

/// 按主题和题型分组后的视图
///
/// 两级分组都保持首次出现顺序，组内题目保持输入顺序，
/// 这样渲染结果和测试断言都是确定的。
#[derive(Debug, Clone, Default, Serialize)]
pub struct GroupedView {
    pub topics: Vec<TopicGroup>,
}

/// 单个主题下的题目分组
#[derive(Debug, Clone, Serialize)]
pub struct TopicGroup {
    pub topic: String,
    pub types: Vec<TypeGroup>,
}

/// 单个题型下的题目序列
#[derive(Debug, Clone, Serialize)]
pub struct TypeGroup {
    pub question_type: String,
    pub questions: Vec<Question>,
}

impl GroupedView {
    /// 按主题键查找分组
    pub fn topic(&self, topic: &str) -> Option<&TopicGroup> {
        self.topics.iter().find(|group| group.topic == topic)
    }

    /// 视图中的题目总数
    pub fn question_count(&self) -> usize {
        self.topics
            .iter()
            .flat_map(|group| &group.types)
            .map(|group| group.questions.len())
            .sum()
    }

    pub fn is_empty(&self) -> bool {
        self.topics.is_empty()
    }
}

impl TopicGroup {
    /// 按题型键查找分组
    pub fn question_type(&self, question_type: &str) -> Option<&TypeGroup> {
        self.types
            .iter()
            .find(|group| group.question_type == question_type)
    }
}

/// 分组引擎
pub struct GroupingEngine;

impl GroupingEngine {
    /// 把题目列表投影为分组视图
    ///
    /// 按输入顺序遍历：主题键缺失退化为 "General"，题型键缺失退化为
    /// "Other"；不修改输入，没有错误分支。
    pub fn group(questions: &[Question]) -> GroupedView {
        let mut view = GroupedView::default();

        for question in questions {
            let topic_key = question.topic_key();
            let type_key = question.type_key();

            let topic_index = match view
                .topics
                .iter()
                .position(|group| group.topic == topic_key)
            {
                Some(index) => index,
                None => {
                    view.topics.push(TopicGroup {
                        topic: topic_key.to_string(),
                        types: Vec::new(),
                    });
                    view.topics.len() - 1
                }
            };
            let topic_group = &mut view.topics[topic_index];

            let type_index = match topic_group
                .types
                .iter()
                .position(|group| group.question_type == type_key)
            {
                Some(index) => index,
                None => {
                    topic_group.types.push(TypeGroup {
                        question_type: type_key.to_string(),
                        questions: Vec::new(),
                    });
                    topic_group.types.len() - 1
                }
            };
            let type_group = &mut topic_group.types[type_index];

            type_group.questions.push(question.clone());
        }

        view
    }
}
