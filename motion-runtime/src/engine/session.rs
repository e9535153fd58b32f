//! 过渡会话：一次进行中的 key 切换。

use crate::descriptor::TransitionDescriptor;
use crate::spec::{Direction, MotionSpec};
use crate::style::LayerStyle;

/// 会话状态
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionStatus {
    /// 正在播放
    Running,
    /// 已到达 t = 1
    Completed,
}

/// 过渡会话
///
/// 打开时对 MotionSpec 在当前方向上求值并保存两侧描述，
/// 之后 MotionSpec 的变化不会影响已经开始的会话。
#[derive(Debug, Clone)]
pub struct TransitionSession<K> {
    old_key: K,
    new_key: K,
    direction: Direction,
    start_millis: u64,
    total_duration_millis: u32,
    elapsed_millis: u64,
    progress: f32,
    status: SessionStatus,
    enter: TransitionDescriptor,
    exit: TransitionDescriptor,
}

impl<K> TransitionSession<K> {
    pub(crate) fn new(
        old_key: K,
        new_key: K,
        direction: Direction,
        start_millis: u64,
        motion_spec: &MotionSpec,
    ) -> Self {
        let enter = motion_spec.enter.descriptor(direction);
        let exit = motion_spec.exit.descriptor(direction);
        let total_duration_millis = enter.end_millis().max(exit.end_millis());
        let mut session = Self {
            old_key,
            new_key,
            direction,
            start_millis,
            total_duration_millis,
            elapsed_millis: 0,
            progress: 0.0,
            status: SessionStatus::Running,
            enter,
            exit,
        };
        session.advance(start_millis);
        session
    }

    /// 推进到 `frame_time_millis`，返回新的状态
    pub(crate) fn advance(&mut self, frame_time_millis: u64) -> SessionStatus {
        let total = u64::from(self.total_duration_millis);
        self.elapsed_millis = frame_time_millis.saturating_sub(self.start_millis).min(total);
        if self.elapsed_millis >= total {
            self.progress = 1.0;
            self.status = SessionStatus::Completed;
        } else {
            self.progress = self.elapsed_millis as f32 / total as f32;
        }
        self.status
    }

    pub(crate) fn into_keys(self) -> (K, K) {
        (self.old_key, self.new_key)
    }

    pub fn old_key(&self) -> &K {
        &self.old_key
    }

    pub fn new_key(&self) -> &K {
        &self.new_key
    }

    pub fn direction(&self) -> Direction {
        self.direction
    }

    /// 会话开始时刻（帧时间）
    pub fn start_millis(&self) -> u64 {
        self.start_millis
    }

    /// 总时长：两侧描述中较晚结束者
    pub fn total_duration_millis(&self) -> u32 {
        self.total_duration_millis
    }

    /// 全局进度 t ∈ [0, 1]
    pub fn progress(&self) -> f32 {
        self.progress
    }

    pub fn status(&self) -> SessionStatus {
        self.status
    }

    pub fn is_running(&self) -> bool {
        self.status == SessionStatus::Running
    }

    /// 新内容当前的变换
    pub fn enter_style(&self) -> LayerStyle {
        self.enter.evaluate(self.elapsed_millis as f32)
    }

    /// 旧内容当前的变换
    pub fn exit_style(&self) -> LayerStyle {
        self.exit.evaluate(self.elapsed_millis as f32)
    }

    /// 新内容的层叠值：前进时在上，后退时在下
    pub fn new_z_index(&self) -> f32 {
        if self.direction.is_forward() { 1.0 } else { 0.0 }
    }

    /// 旧内容的层叠值
    pub fn old_z_index(&self) -> f32 {
        if self.direction.is_forward() { 0.0 } else { 1.0 }
    }
}
