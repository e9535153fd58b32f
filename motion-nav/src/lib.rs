//! # Motion Nav
//!
//! 把 Material motion 过渡应用到返回栈导航上的宿主适配层。
//!
//! ## 架构概述
//!
//! ```text
//! NavGraphBuilder ──build──► NavGraph
//!                                │
//!        navigate / pop ──► NavController ──（同步）── 返回栈 + 生命周期
//!                                │
//!                      MaterialMotionNavHost ──► TransitionEngine<EntryId>
//!                                │                    │
//!                        render / on_frame ◄──────────┘ 过渡结束 → Resumed / Destroyed
//! ```
//!
//! ## 模块结构
//!
//! - [`route`]：路由模式、命名参数、深层链接
//! - [`graph`]：导航图与过渡解析
//! - [`back_stack`] / [`lifecycle`]：返回栈条目与生命周期
//! - [`saved_state`]：按条目保存的状态与 [`Screen`] 上下文
//! - [`controller`]：导航控制器
//! - [`host`]：导航宿主
//! - [`config`]：宿主配置
//! - [`error`]：错误类型

pub mod back_stack;
pub mod config;
pub mod controller;
pub mod error;
pub mod graph;
pub mod host;
pub mod lifecycle;
pub mod route;
pub mod saved_state;

// 重导出核心类型
pub use back_stack::{BackStackEntry, EntryId};
pub use config::NavHostConfig;
pub use controller::{NavController, NavOptions, PopUpTo};
pub use error::{NavError, NavResult};
pub use graph::{
    ComposableOptions, DestinationId, NavGraph, NavGraphBuilder, NavigationOptions,
    TransitionOverride,
};
pub use host::MaterialMotionNavHost;
pub use lifecycle::LifecycleState;
pub use route::{Arguments, DeepLink, NamedArgument, RoutePattern};
pub use saved_state::{SavedState, SavedStateRegistry, Screen};
