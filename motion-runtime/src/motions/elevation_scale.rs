//! # ElevationScale 动效
//!
//! 高度缩放：内容在"抬起 / 沉下"的同时轻微缩放并改变透明度，
//! 通常作为另一侧滑动内容的背景层。
//!
//! 典型组合（见 [`material_elevation_scale_screen`]）：
//!
//! ```text
//! 前进：新内容从下方滑入  +  旧内容缩小沉下
//! 后退：新内容放大抬起    +  旧内容向下滑出
//! ```

use crate::descriptor::{AuxiliaryEffect, BaseAnimation, TransitionDescriptor};
use crate::easing::EasingFunction;
use crate::spec::{EnterMotionSpec, ExitMotionSpec, MotionSpec};
use crate::tween::Tween;

use super::translate::{translate_y_in, translate_y_out};

/// 默认透明度端点
pub const DEFAULT_ELEVATION_SCALE_ALPHA: f32 = 0.85;
/// 默认缩放端点
pub const DEFAULT_ELEVATION_SCALE_SCALE: f32 = 0.85;
/// 抬起 / 沉下的高度差
const ELEVATION_STEP: f32 = 1.0;

fn tween(duration_millis: u32) -> Tween {
    Tween::new(duration_millis).with_easing(EasingFunction::FastOutSlowIn)
}

/// 高度缩放进入：从 (alpha, scale) 恢复到原样并抬起
pub fn material_elevation_scale_in(
    initial_alpha: f32,
    initial_scale: f32,
    duration_millis: u32,
) -> EnterMotionSpec {
    let tween = tween(duration_millis);
    EnterMotionSpec::fixed(
        TransitionDescriptor::new(BaseAnimation::Composite(vec![
            BaseAnimation::Fade {
                from: initial_alpha,
                to: 1.0,
                tween,
            },
            BaseAnimation::Scale {
                from: initial_scale,
                to: 1.0,
                tween,
            },
        ]))
        .with_auxiliary(AuxiliaryEffect::Elevation {
            from: -ELEVATION_STEP,
            to: 0.0,
            tween,
        }),
    )
}

/// 高度缩放退出：缩小到 (alpha, scale) 并沉下
pub fn material_elevation_scale_out(
    target_alpha: f32,
    target_scale: f32,
    duration_millis: u32,
) -> ExitMotionSpec {
    let tween = tween(duration_millis);
    ExitMotionSpec::fixed(
        TransitionDescriptor::new(BaseAnimation::Composite(vec![
            BaseAnimation::Fade {
                from: 1.0,
                to: target_alpha,
                tween,
            },
            BaseAnimation::Scale {
                from: 1.0,
                to: target_scale,
                tween,
            },
        ]))
        .with_auxiliary(AuxiliaryEffect::Elevation {
            from: 0.0,
            to: -ELEVATION_STEP,
            tween,
        }),
    )
}

/// 高度缩放过渡（两侧都使用高度缩放）
pub fn material_elevation_scale(duration_millis: u32) -> MotionSpec {
    material_elevation_scale_in(
        DEFAULT_ELEVATION_SCALE_ALPHA,
        DEFAULT_ELEVATION_SCALE_SCALE,
        duration_millis,
    )
    .with(material_elevation_scale_out(
        DEFAULT_ELEVATION_SCALE_ALPHA,
        DEFAULT_ELEVATION_SCALE_SCALE,
        duration_millis,
    ))
}

/// 页面式高度缩放：前进时新页面从下方滑入覆盖，后退时旧页面滑出露出下层
///
/// `slide_distance` 通常取容器高度。
pub fn material_elevation_scale_screen(duration_millis: u32, slide_distance: f32) -> MotionSpec {
    let slide_in = translate_y_in(slide_distance, tween(duration_millis));
    let scale_in = material_elevation_scale_in(
        DEFAULT_ELEVATION_SCALE_ALPHA,
        DEFAULT_ELEVATION_SCALE_SCALE,
        duration_millis,
    );
    let slide_out = translate_y_out(slide_distance, tween(duration_millis));
    let scale_out = material_elevation_scale_out(
        DEFAULT_ELEVATION_SCALE_ALPHA,
        DEFAULT_ELEVATION_SCALE_SCALE,
        duration_millis,
    );

    let enter = EnterMotionSpec::new(move |direction| {
        if direction.is_forward() {
            slide_in.descriptor(direction)
        } else {
            scale_in.descriptor(direction)
        }
    });
    let exit = ExitMotionSpec::new(move |direction| {
        if direction.is_forward() {
            scale_out.descriptor(direction)
        } else {
            slide_out.descriptor(direction)
        }
    });
    enter.with(exit)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::spec::Direction;

    #[test]
    fn test_elevation_scale_endpoints() {
        let spec = material_elevation_scale(300);
        let enter = spec.enter.descriptor(Direction::Forward);
        let exit = spec.exit.descriptor(Direction::Forward);

        let start = enter.evaluate(0.0);
        assert!((start.alpha - 0.85).abs() < 1e-6);
        assert!((start.scale - 0.85).abs() < 1e-6);
        assert_eq!(start.elevation, -1.0);
        assert_eq!(enter.evaluate(300.0).elevation, 0.0);

        let end = exit.evaluate(300.0);
        assert!((end.alpha - 0.85).abs() < 1e-6);
        assert!((end.scale - 0.85).abs() < 1e-6);
        assert_eq!(end.elevation, -1.0);
    }

    #[test]
    fn test_screen_motion_switches_by_direction() {
        let spec = material_elevation_scale_screen(300, 800.0);

        let forward_enter = spec.enter.descriptor(Direction::Forward).evaluate(0.0);
        assert_eq!(forward_enter.offset_y, 800.0);
        assert_eq!(forward_enter.scale, 1.0);

        let backward_enter = spec.enter.descriptor(Direction::Backward).evaluate(0.0);
        assert_eq!(backward_enter.offset_y, 0.0);
        assert!((backward_enter.scale - 0.85).abs() < 1e-6);

        // 后退时旧页面向下（正方向）滑出
        let backward_exit = spec.exit.descriptor(Direction::Backward).evaluate(300.0);
        assert_eq!(backward_exit.offset_y, 800.0);
    }
}
