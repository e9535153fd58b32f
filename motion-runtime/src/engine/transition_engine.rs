//! # TransitionEngine
//!
//! 显式状态机：记录"当前已呈现的 key"和至多一个进行中的 [`TransitionSession`]。
//!
//! ## 驱动方式
//!
//! 宿主在状态变化时调用 [`TransitionEngine::run`]，在每一帧调用
//! [`TransitionEngine::on_frame`] 注入帧时间，然后用 [`TransitionEngine::render`]
//! 取得当前帧的渲染树。引擎从不主动读取时钟。
//!
//! ```text
//! Idle(current) ──run(target≠current)──► Running(old, new) ──on_frame(t=1)──► Idle(new)
//!                                            │
//!                                            └─run(other)──► Running(new, other)   // 释放 old
//! ```

use tracing::{debug, trace};

use super::content::MotionContent;
use super::render::{LayerRole, RenderLayer, RenderTree};
use super::session::{SessionStatus, TransitionSession};
use crate::spec::{Direction, MotionSpec};
use crate::style::{Alignment, LayerStyle};

/// 一帧推进的结果
#[derive(Debug, Clone, PartialEq)]
pub enum FrameResult<K> {
    /// 没有进行中的会话
    Idle,
    /// 会话仍在播放
    Running { progress: f32 },
    /// 会话在本帧结束，`disposed` 已被释放
    Completed { disposed: K, current: K },
}

/// 过渡引擎
#[derive(Debug, Clone)]
pub struct TransitionEngine<K> {
    /// 已稳定呈现的 key；会话期间为旧 key
    current: Option<K>,
    session: Option<TransitionSession<K>>,
    /// 已挂载、尚未释放的 key
    mounted: Vec<K>,
    /// 最近一次注入的帧时间
    frame_time: u64,
    alignment: Alignment,
}

impl<K: Clone + PartialEq + std::fmt::Debug> TransitionEngine<K> {
    /// 创建空引擎
    pub fn new() -> Self {
        Self {
            current: None,
            session: None,
            mounted: Vec::new(),
            frame_time: 0,
            alignment: Alignment::default(),
        }
    }

    /// 设置两层内容共用的对齐锚点
    pub fn with_alignment(mut self, alignment: Alignment) -> Self {
        self.alignment = alignment;
        self
    }

    pub fn set_alignment(&mut self, alignment: Alignment) {
        self.alignment = alignment;
    }

    pub fn alignment(&self) -> Alignment {
        self.alignment
    }

    /// 请求呈现 `target`
    ///
    /// - 首次调用：立即显示，无动画
    /// - `target` 与已呈现（或正在进入）的 key 相同：无操作
    /// - 其他情况：打开新会话，必要时打断进行中的会话
    ///
    /// 渲染失败时错误原样返回，进行中的会话被放弃（见 [`TransitionEngine::render`]）。
    pub fn run<C>(
        &mut self,
        target: K,
        motion_spec: &MotionSpec,
        direction: Direction,
        content: &mut C,
    ) -> Result<RenderTree<K, C::Output>, C::Error>
    where
        C: MotionContent<K>,
    {
        if self.target_key() != Some(&target) {
            self.transition_to(target, motion_spec, direction, content);
        }
        self.render(content)
    }

    /// 注入帧时间
    ///
    /// 帧时间单调不减，早于上一帧的时间会被忽略。
    pub fn on_frame<C>(&mut self, frame_time_millis: u64, content: &mut C) -> FrameResult<K>
    where
        C: MotionContent<K>,
    {
        if frame_time_millis < self.frame_time {
            trace!(
                frame_time_millis,
                last = self.frame_time,
                "忽略倒退的帧时间"
            );
        } else {
            self.frame_time = frame_time_millis;
        }

        let Some(session) = self.session.as_mut() else {
            return FrameResult::Idle;
        };
        match session.advance(self.frame_time) {
            SessionStatus::Running => {
                trace!(progress = session.progress(), "过渡推进");
                FrameResult::Running {
                    progress: session.progress(),
                }
            }
            SessionStatus::Completed => match self.complete(content) {
                Some((disposed, current)) => FrameResult::Completed { disposed, current },
                None => FrameResult::Idle,
            },
        }
    }

    /// 以当前进度渲染所有已挂载的图层
    ///
    /// 内容回调失败时放弃进行中的会话：旧 key 不会被释放，仍留在
    /// [`TransitionEngine::mounted_keys`] 中由宿主清理，引擎直接把新 key 视为已呈现。
    pub fn render<C>(&mut self, content: &mut C) -> Result<RenderTree<K, C::Output>, C::Error>
    where
        C: MotionContent<K>,
    {
        let result = self.build_tree(content);
        if result.is_err()
            && let Some(session) = self.session.take()
        {
            let (old_key, new_key) = session.into_keys();
            debug!(?old_key, ?new_key, "内容渲染失败，放弃过渡会话");
            self.current = Some(new_key);
        }
        result
    }

    /// 已稳定呈现的 key（会话期间为旧 key）
    pub fn current_key(&self) -> Option<&K> {
        self.current.as_ref()
    }

    /// 最终将呈现的 key：会话期间为新 key，否则为当前 key
    pub fn target_key(&self) -> Option<&K> {
        match &self.session {
            Some(session) => Some(session.new_key()),
            None => self.current.as_ref(),
        }
    }

    pub fn session(&self) -> Option<&TransitionSession<K>> {
        self.session.as_ref()
    }

    /// 是否有进行中的会话
    pub fn is_running(&self) -> bool {
        self.session.as_ref().is_some_and(TransitionSession::is_running)
    }

    /// 当前进度；空闲时为 1.0
    pub fn progress(&self) -> f32 {
        self.session.as_ref().map_or(1.0, TransitionSession::progress)
    }

    /// 已挂载的 key（按挂载顺序）
    pub fn mounted_keys(&self) -> &[K] {
        &self.mounted
    }

    /// 最近一次注入的帧时间
    pub fn frame_time(&self) -> u64 {
        self.frame_time
    }

    fn transition_to<C>(
        &mut self,
        target: K,
        motion_spec: &MotionSpec,
        direction: Direction,
        content: &mut C,
    ) where
        C: MotionContent<K>,
    {
        let old_key = match (self.session.take(), self.current.take()) {
            (Some(interrupted), _) => {
                let (interrupted_old, interrupted_new) = interrupted.into_keys();
                if interrupted_old == target {
                    debug!(?target, "过渡反向，复用仍在挂载的旧内容");
                } else {
                    debug!(
                        superseded = ?interrupted_old,
                        ?target,
                        "打断进行中的过渡"
                    );
                    self.dispose(&interrupted_old, content);
                }
                interrupted_new
            }
            (None, Some(current)) => current,
            (None, None) => {
                debug!(?target, "首次呈现");
                self.mount(&target, content);
                self.current = Some(target);
                return;
            }
        };

        self.mount(&target, content);
        let session =
            TransitionSession::new(old_key.clone(), target, direction, self.frame_time, motion_spec);
        debug!(
            ?old_key,
            new_key = ?session.new_key(),
            ?direction,
            duration = session.total_duration_millis(),
            "打开过渡会话"
        );
        let completed = session.status() == SessionStatus::Completed;
        self.current = Some(old_key);
        self.session = Some(session);
        if completed {
            self.complete(content);
        }
    }

    fn complete<C>(&mut self, content: &mut C) -> Option<(K, K)>
    where
        C: MotionContent<K>,
    {
        let session = self.session.take()?;
        let (old_key, new_key) = session.into_keys();
        debug!(?old_key, ?new_key, "过渡完成");
        self.dispose(&old_key, content);
        self.current = Some(new_key.clone());
        Some((old_key, new_key))
    }

    fn mount<C: MotionContent<K>>(&mut self, key: &K, content: &mut C) {
        if !self.mounted.contains(key) {
            self.mounted.push(key.clone());
            content.on_mount(key);
        }
    }

    fn dispose<C: MotionContent<K>>(&mut self, key: &K, content: &mut C) {
        if let Some(index) = self.mounted.iter().position(|k| k == key) {
            self.mounted.remove(index);
            content.on_dispose(key);
        }
    }

    fn build_tree<C>(&self, content: &mut C) -> Result<RenderTree<K, C::Output>, C::Error>
    where
        C: MotionContent<K>,
    {
        let mut layers = Vec::with_capacity(2);
        match (&self.session, &self.current) {
            (Some(session), _) => {
                let exit_style = session.exit_style();
                layers.push(RenderLayer {
                    key: session.old_key().clone(),
                    role: LayerRole::Exiting,
                    content: content.render(session.old_key(), &exit_style)?,
                    style: exit_style,
                    z_index: session.old_z_index(),
                });
                let enter_style = session.enter_style();
                layers.push(RenderLayer {
                    key: session.new_key().clone(),
                    role: LayerRole::Entering,
                    content: content.render(session.new_key(), &enter_style)?,
                    style: enter_style,
                    z_index: session.new_z_index(),
                });
            }
            (None, Some(current)) => {
                layers.push(RenderLayer {
                    key: current.clone(),
                    role: LayerRole::Idle,
                    content: content.render(current, &LayerStyle::IDENTITY)?,
                    style: LayerStyle::IDENTITY,
                    z_index: 0.0,
                });
            }
            (None, None) => {}
        }
        Ok(RenderTree::new(self.alignment, layers))
    }
}

impl<K: Clone + PartialEq + std::fmt::Debug> Default for TransitionEngine<K> {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::easing::EasingFunction;
    use crate::engine::content::content_fn;
    use crate::motions::crossfade;
    use crate::tween::Tween;

    /// 记录挂载 / 释放事件
    #[derive(Default)]
    struct Recorder {
        mounted: Vec<u32>,
        disposed: Vec<u32>,
        fail_on: Option<u32>,
    }

    impl MotionContent<u32> for Recorder {
        type Output = u32;
        type Error = String;

        fn render(&mut self, key: &u32, _style: &LayerStyle) -> Result<u32, String> {
            if self.fail_on == Some(*key) {
                return Err(format!("render {key} failed"));
            }
            Ok(*key)
        }

        fn on_mount(&mut self, key: &u32) {
            self.mounted.push(*key);
        }

        fn on_dispose(&mut self, key: &u32) {
            self.disposed.push(*key);
        }
    }

    fn linear_crossfade() -> MotionSpec {
        crossfade(Tween::new(100).with_easing(EasingFunction::Linear))
    }

    #[test]
    fn test_first_run_shows_immediately() {
        let mut engine = TransitionEngine::new();
        let mut content = Recorder::default();
        let tree = engine
            .run(1, &linear_crossfade(), Direction::Forward, &mut content)
            .unwrap();

        assert_eq!(tree.len(), 1);
        assert_eq!(tree.layers[0].role, LayerRole::Idle);
        assert!(tree.layers[0].style.is_identity());
        assert!(!engine.is_running());
        assert_eq!(content.mounted, vec![1]);
    }

    #[test]
    fn test_same_key_is_noop() {
        let mut engine = TransitionEngine::new();
        let mut content = Recorder::default();
        let spec = linear_crossfade();
        for _ in 0..3 {
            engine.run(7, &spec, Direction::Forward, &mut content).unwrap();
        }
        assert!(engine.session().is_none());
        assert_eq!(content.mounted, vec![7]);
        assert!(content.disposed.is_empty());
    }

    #[test]
    fn test_session_completes_and_disposes_old() {
        let mut engine = TransitionEngine::new();
        let mut content = Recorder::default();
        let spec = linear_crossfade();
        engine.run(1, &spec, Direction::Forward, &mut content).unwrap();
        engine.run(2, &spec, Direction::Forward, &mut content).unwrap();
        assert_eq!(engine.current_key(), Some(&1));
        assert_eq!(engine.target_key(), Some(&2));

        assert_eq!(
            engine.on_frame(50, &mut content),
            FrameResult::Running { progress: 0.5 }
        );
        assert_eq!(
            engine.on_frame(100, &mut content),
            FrameResult::Completed {
                disposed: 1,
                current: 2
            }
        );
        assert_eq!(engine.on_frame(116, &mut content), FrameResult::Idle);
        assert_eq!(content.disposed, vec![1]);
        assert_eq!(engine.mounted_keys(), &[2]);
    }

    #[test]
    fn test_frame_time_never_goes_back() {
        let mut engine = TransitionEngine::new();
        let mut content = Recorder::default();
        let spec = linear_crossfade();
        engine.run(1, &spec, Direction::Forward, &mut content).unwrap();
        engine.on_frame(500, &mut content);
        engine.run(2, &spec, Direction::Forward, &mut content).unwrap();

        engine.on_frame(450, &mut content);
        assert_eq!(engine.frame_time(), 500);
        assert_eq!(engine.progress(), 0.0);
        assert_eq!(
            engine.on_frame(560, &mut content),
            FrameResult::Running { progress: 0.6 }
        );
    }

    #[test]
    fn test_reversal_disposes_nothing() {
        let mut engine = TransitionEngine::new();
        let mut content = Recorder::default();
        let spec = linear_crossfade();
        engine.run(1, &spec, Direction::Forward, &mut content).unwrap();
        engine.run(2, &spec, Direction::Forward, &mut content).unwrap();
        engine.on_frame(40, &mut content);

        let tree = engine.run(1, &spec, Direction::Backward, &mut content).unwrap();
        assert!(content.disposed.is_empty());
        assert_eq!(content.mounted, vec![1, 2]);
        assert_eq!(tree.layer(&1).map(|l| l.role), Some(LayerRole::Entering));

        engine.on_frame(140, &mut content);
        assert_eq!(content.disposed, vec![2]);
        assert_eq!(engine.current_key(), Some(&1));
    }

    #[test]
    fn test_render_error_abandons_session() {
        let mut engine = TransitionEngine::new();
        let mut content = Recorder::default();
        let spec = linear_crossfade();
        engine.run(1, &spec, Direction::Forward, &mut content).unwrap();

        content.fail_on = Some(2);
        let result = engine.run(2, &spec, Direction::Forward, &mut content);
        assert_eq!(result, Err("render 2 failed".to_string()));
        assert!(engine.session().is_none());
        assert_eq!(engine.current_key(), Some(&2));
        assert_eq!(engine.mounted_keys(), &[1, 2]);
        assert!(content.disposed.is_empty());
    }

    #[test]
    fn test_content_fn_adapter() {
        let mut engine = TransitionEngine::new();
        let mut content = content_fn(|key: &&str, style: &LayerStyle| (key.len(), style.alpha));
        let tree = engine
            .run("home", &MotionSpec::none(), Direction::Forward, &mut content)
            .unwrap();
        assert_eq!(tree.layers[0].content, (4, 1.0));
    }
}
