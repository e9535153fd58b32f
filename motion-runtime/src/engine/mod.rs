//! # Engine 模块
//!
//! 过渡编排：把 key 的变化转换为一段进入 / 退出动画，并在动画结束后释放旧内容。
//!
//! - [`TransitionEngine`]：状态机本体
//! - [`TransitionSession`]：一次进行中的切换
//! - [`MotionContent`]：宿主提供内容、接收挂载 / 释放通知
//! - [`RenderTree`]：一帧的图层输出

mod content;
mod render;
mod session;
mod transition_engine;

pub use content::{ContentFn, MotionContent, content_fn};
pub use render::{LayerRole, RenderLayer, RenderTree};
pub use session::{SessionStatus, TransitionSession};
pub use transition_engine::{FrameResult, TransitionEngine};
