//! # Style 模块
//!
//! 单层内容的可视变换：透明度、偏移、缩放、高度。
//!
//! 引擎把每一帧的求值结果写成 [`LayerStyle`]，宿主按此变换绘制对应 key 的包装容器。

use serde::{Deserialize, Serialize};

/// 图层变换
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct LayerStyle {
    /// 透明度 (0.0 - 1.0)
    pub alpha: f32,
    /// 水平偏移（逻辑像素）
    pub offset_x: f32,
    /// 垂直偏移（逻辑像素）
    pub offset_y: f32,
    /// 缩放比例
    pub scale: f32,
    /// 高度（仅数值，不负责阴影绘制）
    pub elevation: f32,
}

impl LayerStyle {
    /// 恒等变换
    pub const IDENTITY: Self = Self {
        alpha: 1.0,
        offset_x: 0.0,
        offset_y: 0.0,
        scale: 1.0,
        elevation: 0.0,
    };

    /// 是否为恒等变换
    pub fn is_identity(&self) -> bool {
        *self == Self::IDENTITY
    }
}

impl Default for LayerStyle {
    fn default() -> Self {
        Self::IDENTITY
    }
}

/// 内容在容器中的对齐锚点
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Alignment {
    #[default]
    TopStart,
    TopCenter,
    TopEnd,
    CenterStart,
    Center,
    CenterEnd,
    BottomStart,
    BottomCenter,
    BottomEnd,
}
