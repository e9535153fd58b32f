//! # Error 模块
//!
//! 定义 motion-runtime 中使用的错误类型。
//!
//! 过渡本身没有可观察的失败路径，这里只覆盖构造参数的校验。
//! 内容渲染产生的错误由调用方自己的错误类型承载，引擎原样透传。

use thiserror::Error;

/// 动效配置错误
#[derive(Error, Debug, Clone, PartialEq)]
pub enum MotionError {
    /// 进度阈值不在开区间 (0, 1) 内
    #[error("进度阈值 {value} 无效，必须位于开区间 (0, 1)")]
    InvalidProgressThreshold { value: f32 },

    /// 未知的动效名称
    #[error("未知动效 '{name}'")]
    UnknownMotion { name: String },
}

/// Result 类型别名
pub type MotionResult<T> = Result<T, MotionError>;
