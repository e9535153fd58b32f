//! 内容回调：引擎向宿主请求某个 key 的内容，并通知挂载 / 释放。

use std::convert::Infallible;

use crate::style::LayerStyle;

/// 由宿主实现的内容提供者
///
/// 引擎保证：
/// - 同一个 key 在被释放之前只收到一次 `on_mount`
/// - 每个挂载过的 key 至多收到一次 `on_dispose`
pub trait MotionContent<K> {
    /// 渲染产物
    type Output;
    /// 渲染错误，由引擎原样透传
    type Error;

    /// 以给定图层变换渲染 `key` 对应的内容
    fn render(&mut self, key: &K, style: &LayerStyle) -> Result<Self::Output, Self::Error>;

    /// `key` 首次进入渲染树
    fn on_mount(&mut self, _key: &K) {}

    /// `key` 的退出动画结束，内容被移出渲染树
    fn on_dispose(&mut self, _key: &K) {}
}

/// 闭包形式的内容提供者，见 [`content_fn`]
pub struct ContentFn<F> {
    render: F,
}

/// 用闭包构造不会失败、也不关心挂载事件的内容提供者
pub fn content_fn<K, O, F>(render: F) -> ContentFn<F>
where
    F: FnMut(&K, &LayerStyle) -> O,
{
    ContentFn { render }
}

impl<K, O, F> MotionContent<K> for ContentFn<F>
where
    F: FnMut(&K, &LayerStyle) -> O,
{
    type Output = O;
    type Error = Infallible;

    fn render(&mut self, key: &K, style: &LayerStyle) -> Result<O, Infallible> {
        Ok((self.render)(key, style))
    }
}
