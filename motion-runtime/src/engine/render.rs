//! 渲染树：一帧内需要绘制的图层，按绘制顺序（z 升序）排列。

use crate::style::{Alignment, LayerStyle};

/// 图层在过渡中的角色
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LayerRole {
    /// 没有过渡，静止显示
    Idle,
    /// 正在进入的新内容
    Entering,
    /// 正在退出的旧内容
    Exiting,
}

/// 单个图层
#[derive(Debug, Clone, PartialEq)]
pub struct RenderLayer<K, T> {
    /// 内容 key
    pub key: K,
    /// 角色
    pub role: LayerRole,
    /// 包装容器的变换
    pub style: LayerStyle,
    /// 层叠值，越大越靠上
    pub z_index: f32,
    /// 宿主渲染出的内容
    pub content: T,
}

/// 渲染树
#[derive(Debug, Clone, PartialEq)]
pub struct RenderTree<K, T> {
    /// 两层内容共用的对齐锚点
    pub alignment: Alignment,
    /// 图层列表（z 升序，即绘制顺序）
    pub layers: Vec<RenderLayer<K, T>>,
}

impl<K: PartialEq, T> RenderTree<K, T> {
    pub(crate) fn new(alignment: Alignment, mut layers: Vec<RenderLayer<K, T>>) -> Self {
        layers.sort_by(|a, b| a.z_index.total_cmp(&b.z_index));
        Self { alignment, layers }
    }

    /// 空渲染树
    pub fn empty(alignment: Alignment) -> Self {
        Self {
            alignment,
            layers: Vec::new(),
        }
    }

    /// 查找 key 对应的图层
    pub fn layer(&self, key: &K) -> Option<&RenderLayer<K, T>> {
        self.layers.iter().find(|layer| layer.key == *key)
    }

    /// 最上层（最后绘制）的图层
    pub fn top(&self) -> Option<&RenderLayer<K, T>> {
        self.layers.last()
    }

    /// 按绘制顺序列出 key
    pub fn keys(&self) -> impl Iterator<Item = &K> {
        self.layers.iter().map(|layer| &layer.key)
    }

    pub fn len(&self) -> usize {
        self.layers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.layers.is_empty()
    }
}
