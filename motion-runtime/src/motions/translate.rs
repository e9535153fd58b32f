//! # Translate 动效
//!
//! 平移构件。距离按方向取符号：前进时新内容从正方向滑入、旧内容向负方向滑出，
//! 后退时相反。

use crate::descriptor::{BaseAnimation, SlideAxis, TransitionDescriptor};
use crate::spec::{Direction, EnterMotionSpec, ExitMotionSpec};
use crate::tween::Tween;

fn slide(axis: SlideAxis, from: f32, to: f32, tween: Tween) -> TransitionDescriptor {
    TransitionDescriptor::new(BaseAnimation::Slide {
        axis,
        from,
        to,
        tween,
    })
}

fn translate_in(axis: SlideAxis, distance: f32, tween: Tween) -> EnterMotionSpec {
    EnterMotionSpec::new(move |direction: Direction| {
        slide(axis, direction.signed(distance), 0.0, tween)
    })
}

fn translate_out(axis: SlideAxis, distance: f32, tween: Tween) -> ExitMotionSpec {
    ExitMotionSpec::new(move |direction: Direction| {
        slide(axis, 0.0, -direction.signed(distance), tween)
    })
}

/// 水平滑入
pub fn translate_x_in(distance: f32, tween: Tween) -> EnterMotionSpec {
    translate_in(SlideAxis::X, distance, tween)
}

/// 水平滑出
pub fn translate_x_out(distance: f32, tween: Tween) -> ExitMotionSpec {
    translate_out(SlideAxis::X, distance, tween)
}

/// 垂直滑入
pub fn translate_y_in(distance: f32, tween: Tween) -> EnterMotionSpec {
    translate_in(SlideAxis::Y, distance, tween)
}

/// 垂直滑出
pub fn translate_y_out(distance: f32, tween: Tween) -> ExitMotionSpec {
    translate_out(SlideAxis::Y, distance, tween)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_translate_polarity() {
        let tween = Tween::new(200);
        let enter = translate_y_in(100.0, tween);
        let exit = translate_y_out(100.0, tween);

        assert_eq!(enter.descriptor(Direction::Forward).evaluate(0.0).offset_y, 100.0);
        assert_eq!(enter.descriptor(Direction::Backward).evaluate(0.0).offset_y, -100.0);
        assert_eq!(exit.descriptor(Direction::Forward).evaluate(200.0).offset_y, -100.0);
        assert_eq!(exit.descriptor(Direction::Backward).evaluate(200.0).offset_y, 100.0);
        assert_eq!(translate_x_in(10.0, tween).descriptor(Direction::Forward).evaluate(200.0).offset_x, 0.0);
    }
}
