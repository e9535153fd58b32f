//! # Container 模块
//!
//! 面向调用方的两个过渡容器：
//!
//! - [`MaterialMotion`]：任意 MotionSpec，`pop` 决定方向与层叠顺序
//! - [`SharedAxis`]：共享轴过渡的便捷封装
//!
//! 容器每次调用都接收最新的目标 key，由内部引擎判断是否需要开始过渡。

use crate::engine::{FrameResult, MotionContent, RenderTree, TransitionEngine};
use crate::motions::{Axis, material_shared_axis};
use crate::spec::{Direction, MotionSpec};
use crate::style::Alignment;
use crate::timing::{DEFAULT_DURATION_MILLIS, DEFAULT_SLIDE_DISTANCE};

/// Material 过渡容器
#[derive(Debug, Clone)]
pub struct MaterialMotion<K> {
    engine: TransitionEngine<K>,
}

impl<K: Clone + PartialEq + std::fmt::Debug> MaterialMotion<K> {
    pub fn new() -> Self {
        Self {
            engine: TransitionEngine::new(),
        }
    }

    /// 设置内容对齐锚点
    pub fn content_alignment(mut self, alignment: Alignment) -> Self {
        self.engine.set_alignment(alignment);
        self
    }

    /// 呈现 `target`
    ///
    /// # 参数
    ///
    /// - `motion_spec`: 切换到 `target` 时使用的过渡
    /// - `pop`: 为 true 时按后退方向播放（旧内容在上）
    pub fn render<C>(
        &mut self,
        target: K,
        motion_spec: &MotionSpec,
        pop: bool,
        content: &mut C,
    ) -> Result<RenderTree<K, C::Output>, C::Error>
    where
        C: MotionContent<K>,
    {
        self.engine
            .run(target, motion_spec, Direction::from_pop(pop), content)
    }

    /// 注入帧时间
    pub fn on_frame<C>(&mut self, frame_time_millis: u64, content: &mut C) -> FrameResult<K>
    where
        C: MotionContent<K>,
    {
        self.engine.on_frame(frame_time_millis, content)
    }

    pub fn engine(&self) -> &TransitionEngine<K> {
        &self.engine
    }
}

impl<K: Clone + PartialEq + std::fmt::Debug> Default for MaterialMotion<K> {
    fn default() -> Self {
        Self::new()
    }
}

/// 共享轴过渡容器
#[derive(Debug, Clone)]
pub struct SharedAxis<K> {
    motion: MaterialMotion<K>,
    axis: Axis,
    duration_millis: u32,
    slide_distance: f32,
}

impl<K: Clone + PartialEq + std::fmt::Debug> SharedAxis<K> {
    /// 默认时长 300ms、滑动距离 30
    pub fn new(axis: Axis) -> Self {
        Self {
            motion: MaterialMotion::new(),
            axis,
            duration_millis: DEFAULT_DURATION_MILLIS,
            slide_distance: DEFAULT_SLIDE_DISTANCE,
        }
    }

    pub fn duration_millis(mut self, duration_millis: u32) -> Self {
        self.duration_millis = duration_millis;
        self
    }

    pub fn slide_distance(mut self, slide_distance: f32) -> Self {
        self.slide_distance = slide_distance;
        self
    }

    pub fn content_alignment(mut self, alignment: Alignment) -> Self {
        self.motion = self.motion.content_alignment(alignment);
        self
    }

    /// 呈现 `target`，`forward` 决定滑动极性与层叠顺序
    pub fn render<C>(
        &mut self,
        target: K,
        forward: bool,
        content: &mut C,
    ) -> Result<RenderTree<K, C::Output>, C::Error>
    where
        C: MotionContent<K>,
    {
        let spec = material_shared_axis(self.axis, self.duration_millis, self.slide_distance);
        self.motion.render(target, &spec, !forward, content)
    }

    pub fn on_frame<C>(&mut self, frame_time_millis: u64, content: &mut C) -> FrameResult<K>
    where
        C: MotionContent<K>,
    {
        self.motion.on_frame(frame_time_millis, content)
    }

    pub fn engine(&self) -> &TransitionEngine<K> {
        self.motion.engine()
    }
}
