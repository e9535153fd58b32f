//! # Spec 模块
//!
//! [`MotionSpec`]：进入过渡与退出过渡的不可变组合。
//!
//! 每一侧都是一个 `Direction -> TransitionDescriptor` 的函数，
//! 同一个 MotionSpec 在前进、后退两个方向上可以给出不同的几何极性。
//!
//! ```rust,ignore
//! let spec = material_fade_through_in(0.92, 300).with(material_fade_through_out(300));
//! let enter = spec.enter.descriptor(Direction::Forward);
//! ```

use std::fmt;
use std::rc::Rc;

use serde::{Deserialize, Serialize};

use crate::descriptor::TransitionDescriptor;

/// 过渡方向
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Direction {
    /// 前进：新内容在逻辑上"更深"
    #[default]
    Forward,
    /// 后退：返回之前的内容
    Backward,
}

impl Direction {
    /// 由 forward 标志创建
    pub fn from_forward(forward: bool) -> Self {
        if forward {
            Self::Forward
        } else {
            Self::Backward
        }
    }

    /// 由 pop 标志创建（pop 即后退）
    pub fn from_pop(pop: bool) -> Self {
        Self::from_forward(!pop)
    }

    /// 是否为前进方向
    pub fn is_forward(self) -> bool {
        self == Self::Forward
    }

    /// 按方向选择符号：前进取 `value`，后退取 `-value`
    pub fn signed(self, value: f32) -> f32 {
        if self.is_forward() { value } else { -value }
    }
}

type DescriptorFn = Rc<dyn Fn(Direction) -> TransitionDescriptor>;

/// 进入过渡
#[derive(Clone)]
pub struct EnterMotionSpec {
    transition: DescriptorFn,
}

impl EnterMotionSpec {
    /// 由方向函数创建
    pub fn new(transition: impl Fn(Direction) -> TransitionDescriptor + 'static) -> Self {
        Self {
            transition: Rc::new(transition),
        }
    }

    /// 与方向无关的固定描述
    pub fn fixed(descriptor: TransitionDescriptor) -> Self {
        Self::new(move |_| descriptor.clone())
    }

    /// 无动画，立即显示
    pub fn none() -> Self {
        Self::fixed(TransitionDescriptor::none())
    }

    /// 求给定方向上的描述
    pub fn descriptor(&self, direction: Direction) -> TransitionDescriptor {
        (self.transition)(direction)
    }

    /// 叠加另一个进入过渡
    pub fn plus(self, other: EnterMotionSpec) -> Self {
        Self::new(move |direction| {
            self.descriptor(direction).plus(other.descriptor(direction))
        })
    }

    /// 与退出过渡组合为 [`MotionSpec`]
    pub fn with(self, exit: ExitMotionSpec) -> MotionSpec {
        MotionSpec { enter: self, exit }
    }
}

impl fmt::Debug for EnterMotionSpec {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("EnterMotionSpec")
            .field("forward", &self.descriptor(Direction::Forward))
            .field("backward", &self.descriptor(Direction::Backward))
            .finish()
    }
}

/// 退出过渡
#[derive(Clone)]
pub struct ExitMotionSpec {
    transition: DescriptorFn,
}

impl ExitMotionSpec {
    /// 由方向函数创建
    pub fn new(transition: impl Fn(Direction) -> TransitionDescriptor + 'static) -> Self {
        Self {
            transition: Rc::new(transition),
        }
    }

    /// 与方向无关的固定描述
    pub fn fixed(descriptor: TransitionDescriptor) -> Self {
        Self::new(move |_| descriptor.clone())
    }

    /// 无动画，立即移除
    pub fn none() -> Self {
        Self::fixed(TransitionDescriptor::none())
    }

    /// 求给定方向上的描述
    pub fn descriptor(&self, direction: Direction) -> TransitionDescriptor {
        (self.transition)(direction)
    }

    /// 叠加另一个退出过渡
    pub fn plus(self, other: ExitMotionSpec) -> Self {
        Self::new(move |direction| {
            self.descriptor(direction).plus(other.descriptor(direction))
        })
    }
}

impl fmt::Debug for ExitMotionSpec {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ExitMotionSpec")
            .field("forward", &self.descriptor(Direction::Forward))
            .field("backward", &self.descriptor(Direction::Backward))
            .finish()
    }
}

/// 进入 / 退出过渡组合
#[derive(Debug, Clone)]
pub struct MotionSpec {
    /// 新内容的进入过渡
    pub enter: EnterMotionSpec,
    /// 旧内容的退出过渡
    pub exit: ExitMotionSpec,
}

impl MotionSpec {
    /// 组合进入与退出过渡
    pub fn new(enter: EnterMotionSpec, exit: ExitMotionSpec) -> Self {
        Self { enter, exit }
    }

    /// 无动画：立即切换
    pub fn none() -> Self {
        Self::new(EnterMotionSpec::none(), ExitMotionSpec::none())
    }

    /// 给定方向上整个过渡的时长（毫秒）
    pub fn duration_millis(&self, direction: Direction) -> u32 {
        self.enter
            .descriptor(direction)
            .end_millis()
            .max(self.exit.descriptor(direction).end_millis())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::descriptor::BaseAnimation;
    use crate::tween::Tween;

    #[test]
    fn test_direction_helpers() {
        assert_eq!(Direction::from_forward(true), Direction::Forward);
        assert_eq!(Direction::from_pop(true), Direction::Backward);
        assert_eq!(Direction::Forward.signed(30.0), 30.0);
        assert_eq!(Direction::Backward.signed(30.0), -30.0);
    }

    #[test]
    fn test_direction_dependent_spec() {
        let enter = EnterMotionSpec::new(|direction| {
            TransitionDescriptor::new(BaseAnimation::Hold {
                tween: Tween::new(if direction.is_forward() { 100 } else { 250 }),
            })
        });
        let spec = enter.with(ExitMotionSpec::none());
        assert_eq!(spec.duration_millis(Direction::Forward), 100);
        assert_eq!(spec.duration_millis(Direction::Backward), 250);
        assert_eq!(MotionSpec::none().duration_millis(Direction::Forward), 0);
    }
}
