//! # Clock 模块
//!
//! 手动推进的帧时钟。宿主（或测试）用它生成单调的帧时间，再注入引擎。

/// 默认帧间隔（毫秒，约 60fps）
pub const DEFAULT_FRAME_INTERVAL_MILLIS: u64 = 16;

/// 帧时钟
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FrameClock {
    now: u64,
    frame_interval_millis: u64,
}

impl FrameClock {
    /// 从 0 开始的时钟
    pub fn new() -> Self {
        Self {
            now: 0,
            frame_interval_millis: DEFAULT_FRAME_INTERVAL_MILLIS,
        }
    }

    /// 设置帧间隔
    pub fn with_frame_interval(mut self, frame_interval_millis: u64) -> Self {
        self.frame_interval_millis = frame_interval_millis;
        self
    }

    /// 当前时间
    pub fn now(&self) -> u64 {
        self.now
    }

    pub fn frame_interval_millis(&self) -> u64 {
        self.frame_interval_millis
    }

    /// 前进 `delta_millis`，返回新的时间
    pub fn advance_by(&mut self, delta_millis: u64) -> u64 {
        self.now = self.now.saturating_add(delta_millis);
        self.now
    }

    /// 前进一帧
    pub fn advance_frame(&mut self) -> u64 {
        self.advance_by(self.frame_interval_millis)
    }
}

impl Default for FrameClock {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_clock_advances() {
        let mut clock = FrameClock::new().with_frame_interval(10);
        assert_eq!(clock.advance_frame(), 10);
        assert_eq!(clock.advance_by(25), 35);
        assert_eq!(clock.now(), 35);
        assert_eq!(FrameClock::default().advance_frame(), DEFAULT_FRAME_INTERVAL_MILLIS);
    }
}
