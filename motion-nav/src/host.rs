//! # Host 模块
//!
//! [`MaterialMotionNavHost`]：把返回栈变化交给过渡引擎播放。
//!
//! 返回栈簿记是同步的（[`NavController`]），视觉释放延迟到过渡结束：
//!
//! - 栈顶变化后的第一次 `render` 打开过渡会话
//! - 会话结束时新栈顶进入 `Resumed`；旧条目若已出栈则销毁，否则保持 `Created`
//! - 出栈后从未被渲染的条目在下一次 `render` 时直接销毁

use motion_runtime::{
    Direction, EnterMotionSpec, ExitMotionSpec, FrameResult, LayerStyle, MotionContent,
    MotionSpec, RenderTree, TransitionEngine,
};
use tracing::debug;

use crate::back_stack::EntryId;
use crate::config::NavHostConfig;
use crate::controller::{NavController, NavOptions};
use crate::error::{NavError, NavResult};
use crate::graph::NavGraph;
use crate::saved_state::SavedState;

/// 导航宿主
pub struct MaterialMotionNavHost<R> {
    controller: NavController<R>,
    engine: TransitionEngine<EntryId>,
    default_spec: MotionSpec,
    config: NavHostConfig,
    /// 上一次渲染时的返回栈（自底向上）
    rendered_stack: Vec<EntryId>,
}

impl<R> MaterialMotionNavHost<R> {
    pub fn new(graph: NavGraph<R>, config: NavHostConfig) -> NavResult<Self> {
        config.validate()?;
        Ok(Self::with_controller(NavController::new(graph)?, config))
    }

    /// 使用已有的控制器（例如已处理过深层链接的）
    pub fn with_controller(controller: NavController<R>, config: NavHostConfig) -> Self {
        Self {
            controller,
            engine: TransitionEngine::new().with_alignment(config.content_alignment),
            default_spec: config.default_motion_spec(),
            config,
            rendered_stack: Vec::new(),
        }
    }

    pub fn controller(&self) -> &NavController<R> {
        &self.controller
    }

    pub fn controller_mut(&mut self) -> &mut NavController<R> {
        &mut self.controller
    }

    pub fn config(&self) -> &NavHostConfig {
        &self.config
    }

    pub fn engine(&self) -> &TransitionEngine<EntryId> {
        &self.engine
    }

    /// 见 [`NavController::navigate`]
    pub fn navigate(&mut self, route: &str, options: NavOptions) -> NavResult<()> {
        self.controller.navigate(route, options)
    }

    /// 见 [`NavController::pop_back_stack`]
    pub fn pop_back_stack(&mut self) -> bool {
        self.controller.pop_back_stack()
    }

    /// 是否有过渡在播放
    pub fn is_transitioning(&self) -> bool {
        self.engine.is_running()
    }

    /// 条目的保存状态
    pub fn saved_state_mut(&mut self, id: EntryId) -> &mut SavedState {
        self.controller.saved_states_mut().state_mut(id)
    }

    /// 渲染当前帧
    ///
    /// 栈顶与引擎的目标不同时先按方向与解析出的过渡打开会话。
    pub fn render(&mut self) -> NavResult<RenderTree<EntryId, R>> {
        let top = self
            .controller
            .current_entry()
            .map(|entry| entry.id())
            .ok_or(NavError::Config {
                message: "返回栈为空".to_string(),
            })?;

        let tree = match self.engine.target_key().copied() {
            Some(shown) if shown == top => {
                let mut content = EntryContent {
                    controller: &mut self.controller,
                };
                self.engine.render(&mut content)?
            }
            shown => {
                let direction = self.direction_to(top);
                let spec = match shown {
                    Some(shown) => self.resolve_spec(shown, top),
                    None => MotionSpec::none(),
                };
                debug!(from = ?shown, to = %top, ?direction, "开始导航过渡");
                let mut content = EntryContent {
                    controller: &mut self.controller,
                };
                self.engine.run(top, &spec, direction, &mut content)?
            }
        };

        self.controller.destroy_unmounted(self.engine.mounted_keys());
        if !self.engine.is_running() {
            self.controller.resume(top);
        }
        self.rendered_stack = self
            .controller
            .back_stack()
            .iter()
            .map(|entry| entry.id())
            .collect();
        Ok(tree)
    }

    /// 注入帧时间
    pub fn on_frame(&mut self, frame_time_millis: u64) -> FrameResult<EntryId> {
        let mut content = EntryContent {
            controller: &mut self.controller,
        };
        let result = self.engine.on_frame(frame_time_millis, &mut content);
        if let FrameResult::Completed { current, .. } = &result {
            self.controller.resume(*current);
        }
        result
    }

    /// 推进到 `frame_time_millis` 并渲染
    pub fn frame(&mut self, frame_time_millis: u64) -> NavResult<RenderTree<EntryId, R>> {
        self.on_frame(frame_time_millis);
        self.render()
    }

    /// 新栈顶在上一次渲染时已位于栈中较低位置即为后退
    fn direction_to(&self, top: EntryId) -> Direction {
        let was_below = self
            .rendered_stack
            .iter()
            .position(|id| *id == top)
            .is_some_and(|index| index + 1 < self.rendered_stack.len());
        Direction::from_pop(was_below)
    }

    fn resolve_spec(&self, from: EntryId, to: EntryId) -> MotionSpec {
        let graph = self.controller.graph();
        let enter = self
            .controller
            .entry_by_id(to)
            .and_then(|entry| graph.resolve_enter(entry.destination()))
            .unwrap_or_else(|| self.default_enter());
        let exit = self
            .controller
            .entry_by_id(from)
            .and_then(|entry| graph.resolve_exit(entry.destination()))
            .unwrap_or_else(|| self.default_exit());
        MotionSpec::new(enter, exit)
    }

    fn default_enter(&self) -> EnterMotionSpec {
        self.default_spec.enter.clone()
    }

    fn default_exit(&self) -> ExitMotionSpec {
        self.default_spec.exit.clone()
    }
}

/// 渲染期间借出控制器的内容适配器
struct EntryContent<'a, R> {
    controller: &'a mut NavController<R>,
}

impl<R> MotionContent<EntryId> for EntryContent<'_, R> {
    type Output = R;
    type Error = NavError;

    fn render(&mut self, key: &EntryId, style: &LayerStyle) -> NavResult<R> {
        self.controller.render_entry(*key, style)
    }

    fn on_dispose(&mut self, key: &EntryId) {
        self.controller.on_entry_disposed(*key);
    }
}
