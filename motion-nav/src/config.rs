//! # Config 模块
//!
//! 导航宿主配置。
//!
//! ## 配置优先级
//!
//! 1. 代码中直接构造的值（最高）
//! 2. 配置文件 (JSON)
//! 3. 默认值（最低）

use std::fs;
use std::path::Path;

use motion_runtime::{Alignment, MotionKind, MotionSpec};
use serde::{Deserialize, Serialize};
use tracing::{info, warn};

use crate::error::{NavError, NavResult};

/// 导航宿主配置
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NavHostConfig {
    /// 默认过渡时长（毫秒）
    #[serde(default = "default_duration_millis")]
    pub duration_millis: u32,

    /// 目的地未指定过渡时使用的动效
    #[serde(default)]
    pub default_transition: MotionKind,

    /// 内容对齐锚点
    #[serde(default)]
    pub content_alignment: Alignment,

    /// 帧间隔（毫秒），仅供驱动帧时钟的宿主使用
    #[serde(default = "default_frame_interval_millis")]
    pub frame_interval_millis: u64,
}

fn default_duration_millis() -> u32 {
    motion_runtime::DEFAULT_DURATION_MILLIS
}

fn default_frame_interval_millis() -> u64 {
    motion_runtime::clock::DEFAULT_FRAME_INTERVAL_MILLIS
}

impl Default for NavHostConfig {
    fn default() -> Self {
        Self {
            duration_millis: default_duration_millis(),
            default_transition: MotionKind::default(),
            content_alignment: Alignment::default(),
            frame_interval_millis: default_frame_interval_millis(),
        }
    }
}

impl NavHostConfig {
    /// 加载配置文件
    ///
    /// 文件不存在时返回默认配置并打印警告；解析失败返回错误。
    pub fn load(path: impl AsRef<Path>) -> NavResult<Self> {
        let path = path.as_ref();
        if !path.exists() {
            warn!(path = %path.display(), "配置文件不存在，使用默认配置");
            return Ok(Self::default());
        }

        let content = fs::read_to_string(path).map_err(|e| NavError::Config {
            message: format!("读取 {} 失败: {e}", path.display()),
        })?;
        let config = Self::from_json_str(&content)?;
        info!(path = %path.display(), "配置文件加载成功");
        Ok(config)
    }

    /// 从 JSON 字符串解析并校验
    pub fn from_json_str(content: &str) -> NavResult<Self> {
        let config: Self = serde_json::from_str(content).map_err(|e| NavError::Config {
            message: format!("解析失败: {e}"),
        })?;
        config.validate()?;
        Ok(config)
    }

    /// 保存配置到文件
    pub fn save(&self, path: impl AsRef<Path>) -> NavResult<()> {
        let json = serde_json::to_string_pretty(self).map_err(|e| NavError::Config {
            message: format!("序列化失败: {e}"),
        })?;
        fs::write(path.as_ref(), json).map_err(|e| NavError::Config {
            message: format!("写入 {} 失败: {e}", path.as_ref().display()),
        })
    }

    /// 验证配置有效性
    pub fn validate(&self) -> NavResult<()> {
        if self.frame_interval_millis == 0 {
            return Err(NavError::Config {
                message: "frame_interval_millis 必须大于 0".to_string(),
            });
        }
        Ok(())
    }

    /// 默认过渡
    pub fn default_motion_spec(&self) -> MotionSpec {
        self.default_transition.spec(self.duration_millis)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_fill_missing_fields() {
        let config = NavHostConfig::from_json_str(r#"{ "default_transition": "shared_axis_x" }"#)
            .unwrap();
        insta::assert_debug_snapshot!(config, @r"
        NavHostConfig {
            duration_millis: 300,
            default_transition: SharedAxisX,
            content_alignment: TopStart,
            frame_interval_millis: 16,
        }
        ");
    }

    #[test]
    fn test_invalid_config() {
        assert!(matches!(
            NavHostConfig::from_json_str(r#"{ "default_transition": "spin" }"#),
            Err(NavError::Config { .. })
        ));
        assert!(matches!(
            NavHostConfig::from_json_str(r#"{ "frame_interval_millis": 0 }"#),
            Err(NavError::Config { .. })
        ));
    }

    #[test]
    fn test_missing_file_uses_defaults() {
        let config = NavHostConfig::load("/nonexistent/motion-nav.json").unwrap();
        assert_eq!(config, NavHostConfig::default());
        assert_eq!(config.default_motion_spec().duration_millis(motion_runtime::Direction::Forward), 300);
    }
}
