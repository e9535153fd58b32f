//! # Easing 模块
//!
//! 缓动曲线，用于动画的时间插值。
//!
//! Material 动效使用三条标准三次贝塞尔曲线：
//! - `FastOutSlowIn`：cubic-bezier(0.4, 0.0, 0.2, 1.0)，几何变化的默认曲线
//! - `LinearOutSlowIn`：cubic-bezier(0.0, 0.0, 0.2, 1.0)，进入内容
//! - `FastOutLinearIn`：cubic-bezier(0.4, 0.0, 1.0, 1.0)，退出内容

use serde::{Deserialize, Serialize};

/// 缓动函数类型
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum EasingFunction {
    /// 线性（匀速）
    Linear,
    /// 快出慢入（标准曲线）
    #[default]
    FastOutSlowIn,
    /// 线性出慢入（减速）
    LinearOutSlowIn,
    /// 快出线性入（加速）
    FastOutLinearIn,
    /// 自定义三次贝塞尔
    CubicBezier { x1: f32, y1: f32, x2: f32, y2: f32 },
}

impl EasingFunction {
    /// 计算缓动值
    ///
    /// # 参数
    /// - `t`: 时间进度 (0.0 - 1.0)，超出范围会被限制
    ///
    /// # 返回
    /// - 缓动后的进度值，端点精确为 0.0 / 1.0
    pub fn apply(&self, t: f32) -> f32 {
        let t = t.clamp(0.0, 1.0);

        match *self {
            EasingFunction::Linear => t,
            EasingFunction::FastOutSlowIn => cubic_bezier(0.4, 0.0, 0.2, 1.0, t),
            EasingFunction::LinearOutSlowIn => cubic_bezier(0.0, 0.0, 0.2, 1.0, t),
            EasingFunction::FastOutLinearIn => cubic_bezier(0.4, 0.0, 1.0, 1.0, t),
            EasingFunction::CubicBezier { x1, y1, x2, y2 } => cubic_bezier(x1, y1, x2, y2, t),
        }
    }

    /// 创建自定义贝塞尔曲线，控制点 x 坐标限制在 [0, 1]
    pub fn cubic_bezier(x1: f32, y1: f32, x2: f32, y2: f32) -> Self {
        Self::CubicBezier {
            x1: x1.clamp(0.0, 1.0),
            y1,
            x2: x2.clamp(0.0, 1.0),
            y2,
        }
    }
}

fn cubic_bezier(x1: f32, y1: f32, x2: f32, y2: f32, progress: f32) -> f32 {
    if progress <= 0.0 {
        return 0.0;
    }
    if progress >= 1.0 {
        return 1.0;
    }

    let t = solve_bezier_x(x1, x2, progress);
    bezier_component(y1, y2, t)
}

/// 牛顿迭代求解 x(t) = target_x，导数过小时退化为二分
fn solve_bezier_x(x1: f32, x2: f32, target_x: f32) -> f32 {
    let mut t = target_x;
    for _ in 0..8 {
        let x = bezier_component(x1, x2, t) - target_x;
        if x.abs() < 1e-6 {
            return t;
        }
        let dx = bezier_derivative(x1, x2, t);
        if dx.abs() < 1e-6 {
            break;
        }
        t = (t - x / dx).clamp(0.0, 1.0);
    }

    let (mut lo, mut hi) = (0.0f32, 1.0f32);
    t = target_x;
    for _ in 0..32 {
        let x = bezier_component(x1, x2, t);
        if (x - target_x).abs() < 1e-6 {
            break;
        }
        if x < target_x {
            lo = t;
        } else {
            hi = t;
        }
        t = (lo + hi) * 0.5;
    }
    t
}

/// B(t) = 3(1-t)²t·p1 + 3(1-t)t²·p2 + t³
#[inline]
fn bezier_component(p1: f32, p2: f32, t: f32) -> f32 {
    let mt = 1.0 - t;
    3.0 * mt * mt * t * p1 + 3.0 * mt * t * t * p2 + t * t * t
}

#[inline]
fn bezier_derivative(p1: f32, p2: f32, t: f32) -> f32 {
    let mt = 1.0 - t;
    3.0 * mt * mt * p1 + 6.0 * mt * t * (p2 - p1) + 3.0 * t * t * (1.0 - p2)
}

#[cfg(test)]
mod tests {
    use super::*;

    const CURVES: [EasingFunction; 4] = [
        EasingFunction::Linear,
        EasingFunction::FastOutSlowIn,
        EasingFunction::LinearOutSlowIn,
        EasingFunction::FastOutLinearIn,
    ];

    #[test]
    fn test_endpoints_exact() {
        for curve in CURVES {
            assert_eq!(curve.apply(0.0), 0.0);
            assert_eq!(curve.apply(1.0), 1.0);
        }
    }

    #[test]
    fn test_clamp() {
        let easing = EasingFunction::Linear;
        assert_eq!(easing.apply(-0.5), 0.0);
        assert_eq!(easing.apply(1.5), 1.0);
    }

    #[test]
    fn test_monotonic() {
        for curve in CURVES {
            let mut last = 0.0;
            for i in 0..=100 {
                let v = curve.apply(i as f32 / 100.0);
                assert!(v + 1e-4 >= last, "{curve:?} 在 {i} 处回退");
                last = v;
            }
        }
    }

    #[test]
    fn test_curve_shapes() {
        // 减速曲线前半段跑得比线性快，加速曲线相反
        assert!(EasingFunction::LinearOutSlowIn.apply(0.3) > 0.3);
        assert!(EasingFunction::FastOutLinearIn.apply(0.3) < 0.3);
        let mid = EasingFunction::FastOutSlowIn.apply(0.5);
        assert!(mid > 0.5 && mid < 0.9);
    }

    #[test]
    fn test_custom_bezier_matches_linear() {
        let linear_like = EasingFunction::cubic_bezier(0.0, 0.0, 1.0, 1.0);
        for i in 0..=10 {
            let t = i as f32 / 10.0;
            assert!((linear_like.apply(t) - t).abs() < 1e-3);
        }
    }
}
