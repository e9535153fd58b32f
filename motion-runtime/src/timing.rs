//! # Timing 模块
//!
//! 动效时长常量与时长拆分。
//!
//! 一次过渡的总时长按 [`ProgressThreshold`] 拆成两段：
//!
//! ```text
//! 0 ─────── outgoing ───────┬──────────── incoming ────────────┐ total
//!   旧内容淡出              │ 新内容淡入（延迟 outgoing 开始）   │
//! ```
//!
//! 旧内容在新内容开始显现前完成淡出，避免两层内容同时半透明叠加。

use serde::{Deserialize, Serialize};

use crate::error::{MotionError, MotionResult};

/// 默认过渡时长（毫秒）
pub const DEFAULT_DURATION_MILLIS: u32 = 300;

/// Material 时长档位（毫秒）
pub const MOTION_DURATION_SHORT_1: u32 = 75;
pub const MOTION_DURATION_SHORT_2: u32 = 150;
pub const MOTION_DURATION_MEDIUM_1: u32 = 200;
pub const MOTION_DURATION_MEDIUM_2: u32 = 250;
pub const MOTION_DURATION_LONG_1: u32 = 300;
pub const MOTION_DURATION_LONG_2: u32 = 350;

/// 淡入默认时长（毫秒）
pub const DEFAULT_FADE_IN_DURATION_MILLIS: u32 = 150;

/// 淡出默认时长（毫秒）
pub const DEFAULT_FADE_OUT_DURATION_MILLIS: u32 = 75;

/// 默认滑动距离（逻辑像素）
pub const DEFAULT_SLIDE_DISTANCE: f32 = 30.0;

/// 默认进度阈值
pub const DEFAULT_PROGRESS_THRESHOLD: f32 = 0.35;

/// 进度阈值
///
/// 开区间 (0, 1) 内的比例，决定总时长中分给"旧内容淡出"的部分。
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "f32", into = "f32")]
pub struct ProgressThreshold(f32);

impl ProgressThreshold {
    /// 默认阈值（0.35）
    pub const DEFAULT: Self = Self(DEFAULT_PROGRESS_THRESHOLD);

    /// 创建阈值，超出 (0, 1) 返回错误
    pub fn new(value: f32) -> MotionResult<Self> {
        if value > 0.0 && value < 1.0 {
            Ok(Self(value))
        } else {
            Err(MotionError::InvalidProgressThreshold { value })
        }
    }

    /// 阈值数值
    pub fn value(self) -> f32 {
        self.0
    }
}

impl Default for ProgressThreshold {
    fn default() -> Self {
        Self::DEFAULT
    }
}

impl TryFrom<f32> for ProgressThreshold {
    type Error = MotionError;

    fn try_from(value: f32) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<ProgressThreshold> for f32 {
    fn from(threshold: ProgressThreshold) -> Self {
        threshold.0
    }
}

/// 拆分后的子时长（毫秒）
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SubDurations {
    /// 旧内容淡出时长
    pub outgoing: u32,
    /// 新内容淡入时长（在 outgoing 之后开始）
    pub incoming: u32,
}

/// 按阈值拆分总时长
///
/// `outgoing = floor(total * threshold)`，`incoming = total - outgoing`，
/// 两段之和恒等于 `total`。
pub fn split_duration(total_millis: u32, threshold: ProgressThreshold) -> SubDurations {
    let outgoing = (total_millis as f32 * threshold.value()) as u32;
    SubDurations {
        outgoing,
        incoming: total_millis - outgoing,
    }
}
