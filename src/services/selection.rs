//! 主题选择集合 - 业务能力层
//!
//! 按 `topic` 键维护用户勾选的主题子集；
//! 所有操作都是全函数，没有错误分支

use crate::models::Topic;

/// 选择键
///
/// 集合内的身份判断只看这个键，与元素携带的其他字段无关。
pub trait SelectionKey {
    fn selection_key(&self) -> &str;
}

impl SelectionKey for Topic {
    fn selection_key(&self) -> &str {
        &self.topic
    }
}

/// 切换式选择集合
///
/// 语义约定（与界面行为一致）：
/// - `select_all` 后集合就是主列表的逐项拷贝（顺序一致）
/// - `toggle` 对已选中的键做移除（只删第一个匹配），未选中则追加到末尾；
///   因此"取消再选中"会让该元素落到集合末尾——顺序不保持，这是既定行为
/// - 键不会重复：toggle 的先删后加保证了这一点
#[derive(Debug, Clone)]
pub struct SelectionSet<T> {
    items: Vec<T>,
}

impl<T> Default for SelectionSet<T> {
    fn default() -> Self {
        Self { items: Vec::new() }
    }
}

impl<T: SelectionKey + Clone> SelectionSet<T> {
    /// 创建空集合
    pub fn new() -> Self {
        Self::default()
    }

    /// 全选：集合替换为主列表的逐项拷贝
    pub fn select_all(&mut self, items: &[T]) {
        self.items = items.to_vec();
    }

    /// 全不选
    pub fn deselect_all(&mut self) {
        self.items.clear();
    }

    /// 切换单个元素的选中状态
    pub fn toggle(&mut self, item: &T) {
        let key = item.selection_key();
        match self
            .items
            .iter()
            .position(|existing| existing.selection_key() == key)
        {
            Some(index) => {
                self.items.remove(index);
            }
            None => {
                self.items.push(item.clone());
            }
        }
    }

    /// 按键判断是否选中（集合规模在几十个以内，线性扫描即可）
    pub fn is_selected(&self, item: &T) -> bool {
        self.contains_key(item.selection_key())
    }

    /// 按键字符串判断是否选中
    pub fn contains_key(&self, key: &str) -> bool {
        self.items
            .iter()
            .any(|existing| existing.selection_key() == key)
    }

    /// 当前选中的元素（按选择顺序）
    pub fn items(&self) -> &[T] {
        &self.items
    }

    /// 当前选中的键列表（按选择顺序）
    pub fn keys(&self) -> Vec<String> {
        self.items
            .iter()
            .map(|item| item.selection_key().to_string())
            .collect()
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}
