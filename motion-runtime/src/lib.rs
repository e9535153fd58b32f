//! # Motion Runtime
//!
//! Material motion 过渡的核心运行时库。
//!
//! ## 架构概述
//!
//! `motion-runtime` 是纯逻辑核心，不依赖任何渲染框架，也不读取系统时钟。
//! 宿主通过 **帧驱动模式** 与引擎交互：
//!
//! ```text
//! Host                                   Engine
//!   │                                       │
//!   │──── run(target, spec, direction) ───►│  打开 / 打断会话
//!   │──── on_frame(frame_time) ───────────►│  推进进度，完成时释放旧内容
//!   │◄─── RenderTree ──────────────────────│  每层的 LayerStyle 与 z 值
//!   │                                       │
//! ```
//!
//! ## 核心类型
//!
//! - [`MotionSpec`]：进入 / 退出过渡组合，按 [`Direction`] 求值为 [`TransitionDescriptor`]
//! - [`TransitionEngine`]：过渡状态机
//! - [`MaterialMotion`] / [`SharedAxis`]：面向调用方的过渡容器
//! - [`MotionContent`]：宿主提供的内容回调
//!
//! ## 使用示例
//!
//! ```ignore
//! use motion_runtime::{MaterialMotion, content_fn, material_fade_through};
//!
//! let mut motion = MaterialMotion::new();
//! let mut content = content_fn(|key: &u32, style: &LayerStyle| draw(*key, style));
//! let spec = material_fade_through(300);
//!
//! motion.render(1, &spec, false, &mut content)?;
//! motion.render(2, &spec, false, &mut content)?;
//! loop {
//!     motion.on_frame(clock.advance_frame(), &mut content);
//!     let tree = motion.render(2, &spec, false, &mut content)?;
//!     present(tree);
//! }
//! ```
//!
//! ## 模块结构
//!
//! - [`timing`]：时长常量与阈值拆分
//! - [`easing`] / [`tween`]：缓动曲线与补间
//! - [`descriptor`] / [`style`]：过渡描述与图层变换
//! - [`spec`]：MotionSpec 与方向
//! - [`motions`]：具体动效
//! - [`engine`]：过渡引擎
//! - [`container`]：MaterialMotion / SharedAxis
//! - [`clock`]：手动帧时钟
//! - [`error`]：错误类型

pub mod clock;
pub mod container;
pub mod descriptor;
pub mod easing;
pub mod engine;
pub mod error;
pub mod motions;
pub mod spec;
pub mod style;
pub mod timing;
pub mod tween;

// 重导出核心类型
pub use clock::FrameClock;
pub use container::{MaterialMotion, SharedAxis};
pub use descriptor::{AuxiliaryEffect, BaseAnimation, SlideAxis, TransitionDescriptor};
pub use easing::EasingFunction;
pub use engine::{
    ContentFn, FrameResult, LayerRole, MotionContent, RenderLayer, RenderTree, SessionStatus,
    TransitionEngine, TransitionSession, content_fn,
};
pub use error::{MotionError, MotionResult};
pub use motions::{
    Axis, MotionKind, crossfade, fade_in, fade_out, hold, material_elevation_scale,
    material_elevation_scale_screen, material_fade, material_fade_through, material_shared_axis,
    scale_in, scale_out, translate_x_in, translate_x_out, translate_y_in, translate_y_out,
};
pub use spec::{Direction, EnterMotionSpec, ExitMotionSpec, MotionSpec};
pub use style::{Alignment, LayerStyle};
pub use timing::{DEFAULT_DURATION_MILLIS, ProgressThreshold, SubDurations, split_duration};
pub use tween::Tween;
