//! # Error 模块
//!
//! 定义 motion-nav 中使用的错误类型。
//!
//! 配置类错误（路由格式、重复注册、未知目的地）在注册或导航调用时立即返回，
//! 不会延迟到渲染阶段。

use thiserror::Error;

/// 导航错误
#[derive(Error, Debug, Clone, PartialEq)]
pub enum NavError {
    /// 路由模式格式错误
    #[error("路由 '{route}' 格式错误：{message}")]
    MalformedRoute { route: String, message: String },

    /// 重复注册同一路由
    #[error("路由 '{route}' 已注册")]
    DuplicateRoute { route: String },

    /// 导航到未注册的路由
    #[error("未找到路由 '{route}'")]
    UnknownRoute { route: String },

    /// 导航图的起始目的地不存在或不属于该图
    #[error("导航图 '{graph}' 的起始目的地 '{start}' 未注册")]
    MissingStartDestination { graph: String, start: String },

    /// 缺少必需参数
    #[error("路由 '{route}' 缺少必需参数 '{name}'")]
    MissingArgument { route: String, name: String },

    /// 返回栈中不存在该条目
    #[error("返回栈条目 #{id} 不存在")]
    UnknownEntry { id: u64 },

    /// 没有目的地匹配该深层链接
    #[error("没有目的地匹配深层链接 '{uri}'")]
    NoMatchingDeepLink { uri: String },

    /// 保存状态的序列化失败
    #[error("保存状态 '{key}' 失败：{message}")]
    SavedState { key: String, message: String },

    /// 配置错误
    #[error("配置错误：{message}")]
    Config { message: String },
}

/// Result 类型别名
pub type NavResult<T> = Result<T, NavError>;
