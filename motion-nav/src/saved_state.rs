//! # SavedState 模块
//!
//! 按返回栈条目划分的状态存储。
//!
//! 值以 `serde_json::Value` 保存，条目离开屏幕后仍然保留；
//! 条目被销毁时随之清除，除非它属于一个被保存的返回栈。

use std::collections::{BTreeMap, HashMap};

use motion_runtime::LayerStyle;
use serde::{Deserialize, Serialize};
use serde::de::DeserializeOwned;
use tracing::warn;

use crate::back_stack::{BackStackEntry, EntryId};
use crate::error::{NavError, NavResult};
use crate::route::Arguments;

/// 单个条目的保存状态
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SavedState(BTreeMap<String, serde_json::Value>);

impl SavedState {
    /// 读取并反序列化
    pub fn get<T: DeserializeOwned>(&self, key: &str) -> Option<T> {
        let value = self.0.get(key)?;
        match serde_json::from_value(value.clone()) {
            Ok(value) => Some(value),
            Err(e) => {
                warn!(key, error = %e, "保存状态类型不匹配");
                None
            }
        }
    }

    /// 序列化并写入
    pub fn set<T: Serialize>(&mut self, key: &str, value: &T) -> NavResult<()> {
        let value = serde_json::to_value(value).map_err(|e| NavError::SavedState {
            key: key.to_string(),
            message: e.to_string(),
        })?;
        self.0.insert(key.to_string(), value);
        Ok(())
    }

    pub fn contains(&self, key: &str) -> bool {
        self.0.contains_key(key)
    }

    pub fn remove(&mut self, key: &str) -> Option<serde_json::Value> {
        self.0.remove(key)
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

/// 所有条目的保存状态
#[derive(Debug, Clone, Default)]
pub struct SavedStateRegistry {
    states: HashMap<EntryId, SavedState>,
}

impl SavedStateRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get(&self, id: EntryId) -> Option<&SavedState> {
        self.states.get(&id)
    }

    /// 取得条目的状态，不存在时创建
    pub fn state_mut(&mut self, id: EntryId) -> &mut SavedState {
        self.states.entry(id).or_default()
    }

    pub fn remove(&mut self, id: EntryId) -> Option<SavedState> {
        self.states.remove(&id)
    }

    pub fn contains(&self, id: EntryId) -> bool {
        self.states.contains_key(&id)
    }
}

/// 渲染单个目的地时交给内容回调的上下文
pub struct Screen<'a> {
    entry: &'a BackStackEntry,
    state: &'a mut SavedState,
    style: LayerStyle,
}

impl<'a> Screen<'a> {
    pub(crate) fn new(entry: &'a BackStackEntry, state: &'a mut SavedState, style: LayerStyle) -> Self {
        Self {
            entry,
            state,
            style,
        }
    }

    pub fn entry(&self) -> &BackStackEntry {
        self.entry
    }

    pub fn route(&self) -> &str {
        self.entry.route()
    }

    pub fn arguments(&self) -> &Arguments {
        self.entry.arguments()
    }

    /// 当前帧的图层变换
    pub fn style(&self) -> &LayerStyle {
        &self.style
    }

    /// 读取保存的值，不存在或无法解析时用 `init` 初始化并保存
    pub fn remember_saveable<T, F>(&mut self, key: &str, init: F) -> T
    where
        T: Serialize + DeserializeOwned,
        F: FnOnce() -> T,
    {
        if let Some(value) = self.state.get(key) {
            return value;
        }
        let value = init();
        if let Err(e) = self.state.set(key, &value) {
            warn!(entry = %self.entry.id(), error = %e, "无法保存状态");
        }
        value
    }

    /// 更新保存的值
    pub fn set_saveable<T: Serialize>(&mut self, key: &str, value: &T) -> NavResult<()> {
        self.state.set(key, value)
    }
}
