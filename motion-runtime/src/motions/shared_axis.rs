//! # SharedAxis 动效
//!
//! 共享轴过渡：旧内容与新内容沿同一条轴（X / Y 平移，或 Z 缩放）联动。
//!
//! - 透明度拆成两个不重叠的窗口：旧内容在 outgoing 时段内淡出，
//!   新内容延迟 outgoing 后在 incoming 时段内淡入
//! - 几何变化使用贯穿全程的一条 FastOutSlowIn 曲线，与透明度窗口无关

use serde::{Deserialize, Serialize};

use crate::descriptor::{BaseAnimation, SlideAxis, TransitionDescriptor};
use crate::easing::EasingFunction;
use crate::spec::{Direction, EnterMotionSpec, ExitMotionSpec, MotionSpec};
use crate::timing::{ProgressThreshold, split_duration};
use crate::tween::Tween;

/// 共享轴
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Axis {
    X,
    Y,
    Z,
}

/// Z 轴前进时新内容的起始缩放
const ENTER_SCALE_FORWARD: f32 = 0.8;
/// Z 轴后退时新内容的起始缩放
const ENTER_SCALE_BACKWARD: f32 = 1.1;

fn geometry_tween(duration_millis: u32) -> Tween {
    Tween::new(duration_millis).with_easing(EasingFunction::FastOutSlowIn)
}

fn geometry(axis: Axis, from: f32, to: f32, tween: Tween) -> BaseAnimation {
    match axis {
        Axis::X => BaseAnimation::Slide {
            axis: SlideAxis::X,
            from,
            to,
            tween,
        },
        Axis::Y => BaseAnimation::Slide {
            axis: SlideAxis::Y,
            from,
            to,
            tween,
        },
        Axis::Z => BaseAnimation::Scale { from, to, tween },
    }
}

/// 共享轴进入过渡
pub fn material_shared_axis_in(
    axis: Axis,
    duration_millis: u32,
    slide_distance: f32,
) -> EnterMotionSpec {
    let split = split_duration(duration_millis, ProgressThreshold::DEFAULT);
    EnterMotionSpec::new(move |direction| {
        let alpha = BaseAnimation::Fade {
            from: 0.0,
            to: 1.0,
            tween: Tween::new(split.incoming)
                .with_delay(split.outgoing)
                .with_easing(EasingFunction::LinearOutSlowIn),
        };
        let start = match axis {
            Axis::X | Axis::Y => direction.signed(slide_distance),
            Axis::Z if direction.is_forward() => ENTER_SCALE_FORWARD,
            Axis::Z => ENTER_SCALE_BACKWARD,
        };
        let end = if axis == Axis::Z { 1.0 } else { 0.0 };
        TransitionDescriptor::new(BaseAnimation::Composite(vec![
            alpha,
            geometry(axis, start, end, geometry_tween(duration_millis)),
        ]))
    })
}

/// 共享轴退出过渡
pub fn material_shared_axis_out(
    axis: Axis,
    duration_millis: u32,
    slide_distance: f32,
) -> ExitMotionSpec {
    let split = split_duration(duration_millis, ProgressThreshold::DEFAULT);
    ExitMotionSpec::new(move |direction| {
        let alpha = BaseAnimation::Fade {
            from: 1.0,
            to: 0.0,
            tween: Tween::new(split.outgoing).with_easing(EasingFunction::FastOutLinearIn),
        };
        let (start, end) = match axis {
            Axis::X | Axis::Y => (0.0, -direction.signed(slide_distance)),
            // 前进时旧内容放大离开，后退时缩小离开
            Axis::Z if direction.is_forward() => (1.0, ENTER_SCALE_BACKWARD),
            Axis::Z => (1.0, ENTER_SCALE_FORWARD),
        };
        TransitionDescriptor::new(BaseAnimation::Composite(vec![
            alpha,
            geometry(axis, start, end, geometry_tween(duration_millis)),
        ]))
    })
}

/// 共享轴过渡
pub fn material_shared_axis(axis: Axis, duration_millis: u32, slide_distance: f32) -> MotionSpec {
    material_shared_axis_in(axis, duration_millis, slide_distance).with(material_shared_axis_out(
        axis,
        duration_millis,
        slide_distance,
    ))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_axis_x_forward_offsets() {
        let spec = material_shared_axis(Axis::X, 300, 30.0);
        let enter = spec.enter.descriptor(Direction::Forward);
        let exit = spec.exit.descriptor(Direction::Forward);

        assert_eq!(enter.evaluate(0.0).offset_x, 30.0);
        assert_eq!(enter.evaluate(300.0).offset_x, 0.0);
        assert_eq!(exit.evaluate(0.0).offset_x, 0.0);
        assert_eq!(exit.evaluate(300.0).offset_x, -30.0);
        assert_eq!(enter.evaluate(150.0).offset_y, 0.0);
        assert_eq!(enter.evaluate(150.0).scale, 1.0);
    }

    #[test]
    fn test_axis_y_backward_reverses_polarity() {
        let spec = material_shared_axis(Axis::Y, 300, 30.0);
        let enter = spec.enter.descriptor(Direction::Backward);
        let exit = spec.exit.descriptor(Direction::Backward);

        assert_eq!(enter.evaluate(0.0).offset_y, -30.0);
        assert_eq!(exit.evaluate(300.0).offset_y, 30.0);
        assert_eq!(enter.evaluate(0.0).offset_x, 0.0);
    }

    #[test]
    fn test_axis_z_scales() {
        let spec = material_shared_axis(Axis::Z, 300, 30.0);

        let enter = spec.enter.descriptor(Direction::Forward);
        let exit = spec.exit.descriptor(Direction::Forward);
        assert_eq!(enter.evaluate(0.0).scale, 0.8);
        assert_eq!(enter.evaluate(300.0).scale, 1.0);
        assert_eq!(exit.evaluate(300.0).scale, 1.1);
        assert_eq!(enter.evaluate(0.0).offset_x, 0.0);

        let enter = spec.enter.descriptor(Direction::Backward);
        let exit = spec.exit.descriptor(Direction::Backward);
        assert_eq!(enter.evaluate(0.0).scale, 1.1);
        assert_eq!(exit.evaluate(300.0).scale, 0.8);
    }

    #[test]
    fn test_alpha_windows_do_not_overlap() {
        let spec = material_shared_axis(Axis::X, 300, 30.0);
        let enter = spec.enter.descriptor(Direction::Forward);
        let exit = spec.exit.descriptor(Direction::Forward);
        let split = split_duration(300, ProgressThreshold::DEFAULT);

        // 旧内容完全透明之前，新内容保持不可见
        for ms in 0..=split.outgoing {
            assert_eq!(enter.evaluate(ms as f32).alpha, 0.0);
        }
        assert_eq!(exit.evaluate(split.outgoing as f32).alpha, 0.0);
        assert_eq!(exit.evaluate(0.0).alpha, 1.0);
        assert_eq!(enter.evaluate(300.0).alpha, 1.0);
    }
}
