//! # FadeThrough 动效
//!
//! 穿透淡化：旧内容先淡出，新内容随后淡入并从略小的尺寸放大到原尺寸。
//! 适用于彼此没有强关联的两个界面之间的切换。

use crate::descriptor::{BaseAnimation, TransitionDescriptor};
use crate::easing::EasingFunction;
use crate::spec::{EnterMotionSpec, ExitMotionSpec, MotionSpec};
use crate::timing::{ProgressThreshold, split_duration};
use crate::tween::Tween;

/// 新内容的默认起始缩放
pub const DEFAULT_FADE_THROUGH_INITIAL_SCALE: f32 = 0.92;

/// 穿透淡化进入过渡
pub fn material_fade_through_in(initial_scale: f32, duration_millis: u32) -> EnterMotionSpec {
    let split = split_duration(duration_millis, ProgressThreshold::DEFAULT);
    let tween = Tween::new(split.incoming)
        .with_delay(split.outgoing)
        .with_easing(EasingFunction::LinearOutSlowIn);
    EnterMotionSpec::fixed(TransitionDescriptor::new(BaseAnimation::Composite(vec![
        BaseAnimation::Fade {
            from: 0.0,
            to: 1.0,
            tween,
        },
        BaseAnimation::Scale {
            from: initial_scale,
            to: 1.0,
            tween,
        },
    ])))
}

/// 穿透淡化退出过渡
pub fn material_fade_through_out(duration_millis: u32) -> ExitMotionSpec {
    let split = split_duration(duration_millis, ProgressThreshold::DEFAULT);
    ExitMotionSpec::fixed(TransitionDescriptor::new(BaseAnimation::Fade {
        from: 1.0,
        to: 0.0,
        tween: Tween::new(split.outgoing).with_easing(EasingFunction::FastOutLinearIn),
    }))
}

/// 穿透淡化过渡
pub fn material_fade_through(duration_millis: u32) -> MotionSpec {
    material_fade_through_in(DEFAULT_FADE_THROUGH_INITIAL_SCALE, duration_millis)
        .with(material_fade_through_out(duration_millis))
}
