//! # Tween 模块
//!
//! 单段补间的时间描述：时长、延迟、缓动。
//!
//! Tween 不保存任何运行时状态，只回答"经过 `elapsed` 毫秒后进度是多少"，
//! 由引擎在每一帧用同一个 `elapsed` 对进入/退出两侧求值。

use serde::{Deserialize, Serialize};

use crate::easing::EasingFunction;
use crate::timing::DEFAULT_DURATION_MILLIS;

/// 补间描述
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Tween {
    /// 持续时长（毫秒）
    pub duration_millis: u32,
    /// 延迟启动（毫秒）
    #[serde(default)]
    pub delay_millis: u32,
    /// 缓动函数
    #[serde(default)]
    pub easing: EasingFunction,
}

impl Tween {
    /// 创建补间（无延迟，默认缓动）
    pub fn new(duration_millis: u32) -> Self {
        Self {
            duration_millis,
            delay_millis: 0,
            easing: EasingFunction::default(),
        }
    }

    /// 设置延迟
    pub fn with_delay(mut self, delay_millis: u32) -> Self {
        self.delay_millis = delay_millis;
        self
    }

    /// 设置缓动函数
    pub fn with_easing(mut self, easing: EasingFunction) -> Self {
        self.easing = easing;
        self
    }

    /// 补间结束时刻（延迟 + 时长）
    pub fn end_millis(&self) -> u32 {
        self.delay_millis + self.duration_millis
    }

    /// 计算经过 `elapsed_millis` 后的缓动进度
    ///
    /// - 延迟期内：0.0
    /// - 播放期内：缓动后的进度
    /// - 结束后：1.0
    pub fn fraction_at(&self, elapsed_millis: f32) -> f32 {
        let local = elapsed_millis - self.delay_millis as f32;
        if local < 0.0 {
            return 0.0;
        }
        if self.duration_millis == 0 || local >= self.duration_millis as f32 {
            return 1.0;
        }
        self.easing.apply(local / self.duration_millis as f32)
    }
}

impl Default for Tween {
    fn default() -> Self {
        Self::new(DEFAULT_DURATION_MILLIS)
    }
}

/// 线性插值
#[inline]
pub fn lerp(from: f32, to: f32, fraction: f32) -> f32 {
    from + (to - from) * fraction
}
