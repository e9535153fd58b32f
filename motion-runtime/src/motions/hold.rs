//! # Hold 动效
//!
//! 保持：两侧内容在整个时长内都不发生可见变化。
//! 常与另一侧的滑动组合使用，让旧内容在被覆盖期间保持挂载。

use crate::descriptor::{BaseAnimation, TransitionDescriptor};
use crate::spec::{EnterMotionSpec, ExitMotionSpec, MotionSpec};
use crate::tween::Tween;

fn hold_descriptor(duration_millis: u32) -> TransitionDescriptor {
    TransitionDescriptor::new(BaseAnimation::Hold {
        tween: Tween::new(duration_millis),
    })
}

/// 保持进入
pub fn hold_in(duration_millis: u32) -> EnterMotionSpec {
    EnterMotionSpec::fixed(hold_descriptor(duration_millis))
}

/// 保持退出：旧内容保持完全可见直到时长结束
pub fn hold_out(duration_millis: u32) -> ExitMotionSpec {
    ExitMotionSpec::fixed(hold_descriptor(duration_millis))
}

/// 保持过渡
pub fn hold(duration_millis: u32) -> MotionSpec {
    hold_in(duration_millis).with(hold_out(duration_millis))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::spec::Direction;
    use crate::style::LayerStyle;

    #[test]
    fn test_hold_keeps_identity() {
        let spec = hold(300);
        let exit = spec.exit.descriptor(Direction::Forward);
        for ms in [0.0, 150.0, 299.0, 300.0] {
            assert_eq!(exit.evaluate(ms), LayerStyle::IDENTITY);
        }
        assert_eq!(spec.duration_millis(Direction::Backward), 300);
    }
}
