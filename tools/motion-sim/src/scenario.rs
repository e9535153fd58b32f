//! 导航场景文件与动作解析
//!
//! 场景文件示例：
//!
//! ```json
//! {
//!   "start": "home",
//!   "routes": [
//!     { "route": "home" },
//!     { "route": "profile/{id}", "transition": "shared_axis_x",
//!       "deep_links": ["demo://app/profile/{id}"] }
//!   ],
//!   "host": { "default_transition": "fade_through" }
//! }
//! ```

use std::fmt;
use std::path::Path;
use std::str::FromStr;

use anyhow::{Context, Result, bail};
use motion_nav::{
    ComposableOptions, DeepLink, EntryId, MaterialMotionNavHost, NavController, NavGraphBuilder,
    NavHostConfig,
};
use motion_runtime::{MotionKind, RenderTree};
use serde::Deserialize;

/// 场景描述
#[derive(Debug, Deserialize)]
pub struct Scenario {
    /// 起始路由
    pub start: String,
    /// 目的地列表
    pub routes: Vec<RouteConfig>,
    /// 宿主配置
    #[serde(default)]
    pub host: NavHostConfig,
}

/// 单个目的地
#[derive(Debug, Deserialize)]
pub struct RouteConfig {
    pub route: String,
    /// 覆盖宿主默认过渡
    #[serde(default)]
    pub transition: Option<MotionKind>,
    #[serde(default)]
    pub deep_links: Vec<String>,
}

impl Scenario {
    pub fn load(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("读取场景文件失败: {}", path.display()))?;
        Self::from_json_str(&content).with_context(|| format!("场景文件无效: {}", path.display()))
    }

    pub fn from_json_str(content: &str) -> Result<Self> {
        let scenario: Self = serde_json::from_str(content)?;
        scenario.host.validate()?;
        Ok(scenario)
    }

    /// 每个目的地渲染为 `路由#条目` 文本
    pub fn build_host(&self) -> Result<MaterialMotionNavHost<String>> {
        let mut builder = NavGraphBuilder::new(self.start.as_str());
        for config in &self.routes {
            let mut options = ComposableOptions::default();
            if let Some(kind) = config.transition {
                let spec = kind.spec(self.host.duration_millis);
                options = options.enter(spec.enter).exit(spec.exit);
            }
            for link in &config.deep_links {
                options = options.deep_link(DeepLink::uri(link)?);
            }
            builder.composable(&config.route, options, |screen| {
                format!("{}{}", screen.route(), screen.entry().id())
            })?;
        }
        Ok(MaterialMotionNavHost::new(builder.build()?, self.host.clone())?)
    }
}

/// 命令行动作
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Action {
    Push(String),
    Pop,
    DeepLink(String),
    Wait(u64),
}

impl FromStr for Action {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self> {
        let (name, arg) = match s.split_once(':') {
            Some((name, arg)) => (name, Some(arg)),
            None => (s, None),
        };
        match (name, arg) {
            ("pop", None) => Ok(Self::Pop),
            ("push", Some(route)) if !route.is_empty() => Ok(Self::Push(route.to_string())),
            ("deep_link", Some(uri)) if !uri.is_empty() => Ok(Self::DeepLink(uri.to_string())),
            ("wait", Some(millis)) => Ok(Self::Wait(
                millis.parse().with_context(|| format!("无效的等待时长: {millis}"))?,
            )),
            _ => bail!("无法识别的动作: {s}"),
        }
    }
}

impl fmt::Display for Action {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Push(route) => write!(f, "push:{route}"),
            Self::Pop => write!(f, "pop"),
            Self::DeepLink(uri) => write!(f, "deep_link:{uri}"),
            Self::Wait(millis) => write!(f, "wait:{millis}"),
        }
    }
}

pub fn describe_tree(tree: &RenderTree<EntryId, String>) -> String {
    tree.layers
        .iter()
        .map(|layer| {
            format!(
                "{}[{:?} a={:.2} x={:.1} s={:.3}]",
                layer.content, layer.role, layer.style.alpha, layer.style.offset_x, layer.style.scale
            )
        })
        .collect::<Vec<_>>()
        .join(" ")
}

pub fn describe_stack(controller: &NavController<String>) -> String {
    controller
        .back_stack()
        .iter()
        .map(|entry| format!("{}{}({:?})", entry.route(), entry.id(), entry.lifecycle()))
        .collect::<Vec<_>>()
        .join(" → ")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_actions() {
        assert_eq!("pop".parse::<Action>().unwrap(), Action::Pop);
        assert_eq!(
            "push:profile/7".parse::<Action>().unwrap(),
            Action::Push("profile/7".to_string())
        );
        assert_eq!(
            "deep_link:demo://app/profile/7".parse::<Action>().unwrap(),
            Action::DeepLink("demo://app/profile/7".to_string())
        );
        assert_eq!("wait:120".parse::<Action>().unwrap(), Action::Wait(120));
        assert!("push:".parse::<Action>().is_err());
        assert!("jump".parse::<Action>().is_err());
    }

    #[test]
    fn test_scenario_builds_host() {
        let scenario = Scenario::from_json_str(
            r#"{
                "start": "home",
                "routes": [
                    { "route": "home" },
                    { "route": "profile/{id}", "transition": "shared_axis_x",
                      "deep_links": ["demo://app/profile/{id}"] }
                ]
            }"#,
        )
        .unwrap();
        let mut host = scenario.build_host().unwrap();
        assert_eq!(describe_tree(&host.render().unwrap()), "home#0[Idle a=1.00 x=0.0 s=1.000]");

        host.navigate("profile/7", Default::default()).unwrap();
        host.render().unwrap();
        let tree = host.frame(300).unwrap();
        assert_eq!(tree.len(), 1);
        assert_eq!(tree.layers[0].content, "profile/{id}#1");
        assert_eq!(
            describe_stack(host.controller()),
            "home#0(Created) → profile/{id}#1(Resumed)"
        );
    }
}
