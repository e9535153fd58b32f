//! # Fade 动效
//!
//! 透明度与缩放的基础构件，以及由它们组成的交叉淡化和 Material 淡化。

use crate::descriptor::{BaseAnimation, TransitionDescriptor};
use crate::easing::EasingFunction;
use crate::spec::{EnterMotionSpec, ExitMotionSpec, MotionSpec};
use crate::timing::{DEFAULT_FADE_IN_DURATION_MILLIS, DEFAULT_FADE_OUT_DURATION_MILLIS};
use crate::tween::Tween;

/// Material 淡化中新内容的起始缩放
pub const DEFAULT_FADE_INITIAL_SCALE: f32 = 0.8;

/// 淡入
pub fn fade_in(initial_alpha: f32, tween: Tween) -> EnterMotionSpec {
    EnterMotionSpec::fixed(TransitionDescriptor::new(BaseAnimation::Fade {
        from: initial_alpha,
        to: 1.0,
        tween,
    }))
}

/// 淡出
pub fn fade_out(target_alpha: f32, tween: Tween) -> ExitMotionSpec {
    ExitMotionSpec::fixed(TransitionDescriptor::new(BaseAnimation::Fade {
        from: 1.0,
        to: target_alpha,
        tween,
    }))
}

/// 放大进入
pub fn scale_in(initial_scale: f32, tween: Tween) -> EnterMotionSpec {
    EnterMotionSpec::fixed(TransitionDescriptor::new(BaseAnimation::Scale {
        from: initial_scale,
        to: 1.0,
        tween,
    }))
}

/// 缩放退出
pub fn scale_out(target_scale: f32, tween: Tween) -> ExitMotionSpec {
    ExitMotionSpec::fixed(TransitionDescriptor::new(BaseAnimation::Scale {
        from: 1.0,
        to: target_scale,
        tween,
    }))
}

/// 交叉淡化：新旧内容使用同一补间同时淡入淡出
pub fn crossfade(tween: Tween) -> MotionSpec {
    fade_in(0.0, tween).with(fade_out(0.0, tween))
}

/// Material 淡化进入：淡入并从 0.8 放大
pub fn material_fade_in() -> EnterMotionSpec {
    let tween = Tween::new(DEFAULT_FADE_IN_DURATION_MILLIS)
        .with_easing(EasingFunction::LinearOutSlowIn);
    fade_in(0.0, tween).plus(scale_in(DEFAULT_FADE_INITIAL_SCALE, tween))
}

/// Material 淡化退出：线性快速淡出
pub fn material_fade_out() -> ExitMotionSpec {
    fade_out(
        0.0,
        Tween::new(DEFAULT_FADE_OUT_DURATION_MILLIS).with_easing(EasingFunction::Linear),
    )
}

/// Material 淡化
pub fn material_fade() -> MotionSpec {
    material_fade_in().with(material_fade_out())
}
