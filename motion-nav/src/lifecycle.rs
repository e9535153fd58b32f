//! 返回栈条目的生命周期状态。

use serde::{Deserialize, Serialize};

/// 生命周期状态，按 Destroyed < Created < Started < Resumed 排序
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum LifecycleState {
    /// 已销毁，内容已释放
    Destroyed,
    /// 在返回栈中但不可见，或正在退出
    Created,
    /// 可见但尚未可交互（进入动画中）
    Started,
    /// 可见且可交互
    Resumed,
}

impl LifecycleState {
    /// 是否至少处于 `state`
    pub fn is_at_least(self, state: LifecycleState) -> bool {
        self >= state
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ordering() {
        assert!(LifecycleState::Resumed.is_at_least(LifecycleState::Started));
        assert!(LifecycleState::Started.is_at_least(LifecycleState::Created));
        assert!(!LifecycleState::Destroyed.is_at_least(LifecycleState::Created));
    }
}
