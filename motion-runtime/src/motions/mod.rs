//! # Motions 模块
//!
//! 由时间原语组合出的具体 MotionSpec。
//!
//! | 动效 | 进入 | 退出 |
//! |------|------|------|
//! | SharedAxis | 沿轴滑入/缩放 + 延迟淡入 | 沿轴滑出/缩放 + 快速淡出 |
//! | FadeThrough | 延迟淡入 + 0.92 放大 | 快速淡出 |
//! | ElevationScale | 0.85 放大并抬起 | 缩小到 0.85 并沉下 |
//! | Hold | 保持 | 保持 |
//! | Crossfade | 淡入 | 淡出（同一补间） |
//!
//! [`MotionKind`] 为配置文件和命令行提供按名称选择动效的入口。

mod elevation_scale;
mod fade;
mod fade_through;
mod hold;
mod shared_axis;
mod translate;

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::MotionError;
use crate::spec::MotionSpec;
use crate::timing::DEFAULT_SLIDE_DISTANCE;
use crate::tween::Tween;

pub use elevation_scale::{
    DEFAULT_ELEVATION_SCALE_ALPHA, DEFAULT_ELEVATION_SCALE_SCALE, material_elevation_scale,
    material_elevation_scale_in, material_elevation_scale_out, material_elevation_scale_screen,
};
pub use fade::{
    DEFAULT_FADE_INITIAL_SCALE, crossfade, fade_in, fade_out, material_fade, material_fade_in,
    material_fade_out, scale_in, scale_out,
};
pub use fade_through::{
    DEFAULT_FADE_THROUGH_INITIAL_SCALE, material_fade_through, material_fade_through_in,
    material_fade_through_out,
};
pub use hold::{hold, hold_in, hold_out};
pub use shared_axis::{
    Axis, material_shared_axis, material_shared_axis_in, material_shared_axis_out,
};
pub use translate::{translate_x_in, translate_x_out, translate_y_in, translate_y_out};

/// 可按名称选择的动效
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MotionKind {
    /// 交叉淡化
    #[default]
    Crossfade,
    /// 穿透淡化
    FadeThrough,
    /// X 轴共享轴
    SharedAxisX,
    /// Y 轴共享轴
    SharedAxisY,
    /// Z 轴共享轴
    SharedAxisZ,
    /// 高度缩放
    ElevationScale,
    /// 保持
    Hold,
    /// Material 淡化（固定时长）
    Fade,
    /// 无动画
    None,
}

impl MotionKind {
    /// 所有可选动效
    pub const ALL: [MotionKind; 9] = [
        MotionKind::Crossfade,
        MotionKind::FadeThrough,
        MotionKind::SharedAxisX,
        MotionKind::SharedAxisY,
        MotionKind::SharedAxisZ,
        MotionKind::ElevationScale,
        MotionKind::Hold,
        MotionKind::Fade,
        MotionKind::None,
    ];

    /// 配置/命令行中使用的名称
    pub fn name(self) -> &'static str {
        match self {
            MotionKind::Crossfade => "crossfade",
            MotionKind::FadeThrough => "fade_through",
            MotionKind::SharedAxisX => "shared_axis_x",
            MotionKind::SharedAxisY => "shared_axis_y",
            MotionKind::SharedAxisZ => "shared_axis_z",
            MotionKind::ElevationScale => "elevation_scale",
            MotionKind::Hold => "hold",
            MotionKind::Fade => "fade",
            MotionKind::None => "none",
        }
    }

    /// 以给定总时长构造 MotionSpec
    ///
    /// `Fade` 使用固定的 150ms / 75ms，忽略 `duration_millis`。
    pub fn spec(self, duration_millis: u32) -> MotionSpec {
        match self {
            MotionKind::Crossfade => crossfade(Tween::new(duration_millis)),
            MotionKind::FadeThrough => material_fade_through(duration_millis),
            MotionKind::SharedAxisX => {
                material_shared_axis(Axis::X, duration_millis, DEFAULT_SLIDE_DISTANCE)
            }
            MotionKind::SharedAxisY => {
                material_shared_axis(Axis::Y, duration_millis, DEFAULT_SLIDE_DISTANCE)
            }
            MotionKind::SharedAxisZ => {
                material_shared_axis(Axis::Z, duration_millis, DEFAULT_SLIDE_DISTANCE)
            }
            MotionKind::ElevationScale => material_elevation_scale(duration_millis),
            MotionKind::Hold => hold(duration_millis),
            MotionKind::Fade => material_fade(),
            MotionKind::None => MotionSpec::none(),
        }
    }
}

impl fmt::Display for MotionKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for MotionKind {
    type Err = MotionError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let normalized = s.trim().to_ascii_lowercase().replace('-', "_");
        MotionKind::ALL
            .into_iter()
            .find(|kind| kind.name() == normalized)
            .ok_or_else(|| MotionError::UnknownMotion {
                name: s.to_string(),
            })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::spec::Direction;

    #[test]
    fn test_motion_kind_from_str() {
        assert_eq!("fade_through".parse::<MotionKind>(), Ok(MotionKind::FadeThrough));
        assert_eq!("Shared-Axis-X".parse::<MotionKind>(), Ok(MotionKind::SharedAxisX));
        assert_eq!(
            "zoom".parse::<MotionKind>(),
            Err(MotionError::UnknownMotion {
                name: "zoom".to_string()
            })
        );
    }

    #[test]
    fn test_motion_kind_names_round_trip() {
        for kind in MotionKind::ALL {
            assert_eq!(kind.to_string().parse::<MotionKind>(), Ok(kind));
        }
    }

    #[test]
    fn test_motion_kind_durations() {
        assert_eq!(MotionKind::SharedAxisZ.spec(250).duration_millis(Direction::Forward), 250);
        assert_eq!(MotionKind::Fade.spec(1000).duration_millis(Direction::Forward), 150);
        assert_eq!(MotionKind::None.spec(300).duration_millis(Direction::Backward), 0);
    }
}
