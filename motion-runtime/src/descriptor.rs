//! # Descriptor 模块
//!
//! 过渡描述：一侧内容（进入或退出）在整个过渡期间如何变化。
//!
//! 描述是纯数据（带标签的枚举），不持有回调。引擎在每一帧用同一个
//! `elapsed` 对进入、退出两侧的描述求值，得到各自的 [`LayerStyle`]。
//!
//! ## 组合规则
//!
//! - `Composite` 中的多个基础动画依次叠加：透明度、缩放相乘，偏移相加
//! - 辅助效果（`auxiliary`）在基础动画之后应用，拥有独立的补间

use serde::{Deserialize, Serialize};

use crate::style::LayerStyle;
use crate::tween::{Tween, lerp};

/// 平移方向
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SlideAxis {
    X,
    Y,
}

/// 基础动画
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", content = "params", rename_all = "snake_case")]
pub enum BaseAnimation {
    /// 无动画（立即呈现终态）
    None,
    /// 透明度插值
    Fade { from: f32, to: f32, tween: Tween },
    /// 平移插值
    Slide {
        axis: SlideAxis,
        from: f32,
        to: f32,
        tween: Tween,
    },
    /// 缩放插值
    Scale { from: f32, to: f32, tween: Tween },
    /// 保持不变，仅占用时长
    Hold { tween: Tween },
    /// 多个基础动画组合
    Composite(Vec<BaseAnimation>),
}

impl BaseAnimation {
    /// 动画结束时刻（毫秒）
    pub fn end_millis(&self) -> u32 {
        match self {
            BaseAnimation::None => 0,
            BaseAnimation::Fade { tween, .. }
            | BaseAnimation::Slide { tween, .. }
            | BaseAnimation::Scale { tween, .. }
            | BaseAnimation::Hold { tween } => tween.end_millis(),
            BaseAnimation::Composite(parts) => {
                parts.iter().map(BaseAnimation::end_millis).max().unwrap_or(0)
            }
        }
    }

    /// 将本动画在 `elapsed_millis` 处的值叠加到 `style`
    fn apply(&self, elapsed_millis: f32, style: &mut LayerStyle) {
        match self {
            BaseAnimation::None | BaseAnimation::Hold { .. } => {}
            BaseAnimation::Fade { from, to, tween } => {
                style.alpha *= lerp(*from, *to, tween.fraction_at(elapsed_millis));
            }
            BaseAnimation::Slide {
                axis,
                from,
                to,
                tween,
            } => {
                let offset = lerp(*from, *to, tween.fraction_at(elapsed_millis));
                match axis {
                    SlideAxis::X => style.offset_x += offset,
                    SlideAxis::Y => style.offset_y += offset,
                }
            }
            BaseAnimation::Scale { from, to, tween } => {
                style.scale *= lerp(*from, *to, tween.fraction_at(elapsed_millis));
            }
            BaseAnimation::Composite(parts) => {
                for part in parts {
                    part.apply(elapsed_millis, style);
                }
            }
        }
    }
}

/// 辅助效果
///
/// 与基础动画并行、拥有独立曲线的次要变换。
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum AuxiliaryEffect {
    /// 高度变化
    Elevation { from: f32, to: f32, tween: Tween },
    /// 额外平移
    Offset {
        axis: SlideAxis,
        from: f32,
        to: f32,
        tween: Tween,
    },
}

impl AuxiliaryEffect {
    /// 效果结束时刻（毫秒）
    pub fn end_millis(&self) -> u32 {
        match self {
            AuxiliaryEffect::Elevation { tween, .. } | AuxiliaryEffect::Offset { tween, .. } => {
                tween.end_millis()
            }
        }
    }

    fn apply(&self, elapsed_millis: f32, style: &mut LayerStyle) {
        match self {
            AuxiliaryEffect::Elevation { from, to, tween } => {
                style.elevation += lerp(*from, *to, tween.fraction_at(elapsed_millis));
            }
            AuxiliaryEffect::Offset {
                axis,
                from,
                to,
                tween,
            } => {
                let offset = lerp(*from, *to, tween.fraction_at(elapsed_millis));
                match axis {
                    SlideAxis::X => style.offset_x += offset,
                    SlideAxis::Y => style.offset_y += offset,
                }
            }
        }
    }
}

/// 过渡描述
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TransitionDescriptor {
    /// 基础动画
    pub base: BaseAnimation,
    /// 辅助效果（可选）
    #[serde(default)]
    pub auxiliary: Option<AuxiliaryEffect>,
}

impl TransitionDescriptor {
    /// 无动画描述
    pub fn none() -> Self {
        Self::new(BaseAnimation::None)
    }

    /// 由基础动画创建
    pub fn new(base: BaseAnimation) -> Self {
        Self {
            base,
            auxiliary: None,
        }
    }

    /// 附加辅助效果
    pub fn with_auxiliary(mut self, auxiliary: AuxiliaryEffect) -> Self {
        self.auxiliary = Some(auxiliary);
        self
    }

    /// 与另一个描述组合（`+` 语义）
    ///
    /// 基础动画合并为 `Composite`；辅助效果保留 `self` 的，缺失时取 `other` 的。
    pub fn plus(self, other: TransitionDescriptor) -> Self {
        let base = match (self.base, other.base) {
            (BaseAnimation::None, b) | (b, BaseAnimation::None) => b,
            (BaseAnimation::Composite(mut parts), BaseAnimation::Composite(rest)) => {
                parts.extend(rest);
                BaseAnimation::Composite(parts)
            }
            (BaseAnimation::Composite(mut parts), b) => {
                parts.push(b);
                BaseAnimation::Composite(parts)
            }
            (a, b) => BaseAnimation::Composite(vec![a, b]),
        };
        Self {
            base,
            auxiliary: self.auxiliary.or(other.auxiliary),
        }
    }

    /// 描述的总时长（毫秒），取基础动画与辅助效果中较晚结束者
    pub fn end_millis(&self) -> u32 {
        let aux = self.auxiliary.as_ref().map_or(0, AuxiliaryEffect::end_millis);
        self.base.end_millis().max(aux)
    }

    /// 计算 `elapsed_millis` 处的图层变换
    pub fn evaluate(&self, elapsed_millis: f32) -> LayerStyle {
        let mut style = LayerStyle::IDENTITY;
        self.base.apply(elapsed_millis, &mut style);
        if let Some(aux) = &self.auxiliary {
            aux.apply(elapsed_millis, &mut style);
        }
        style
    }
}

impl Default for TransitionDescriptor {
    fn default() -> Self {
        Self::none()
    }
}
