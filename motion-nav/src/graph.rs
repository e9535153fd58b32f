//! # Graph 模块
//!
//! 导航图：目的地注册与过渡解析。
//!
//! ```ignore
//! let mut builder = NavGraphBuilder::new("home");
//! builder.composable("home", ComposableOptions::default(), |screen| home(screen))?;
//! builder.navigation("settings", "settings/main", NavigationOptions::default(), |b| {
//!     b.composable("settings/main", ComposableOptions::default(), |screen| settings(screen))
//! })?;
//! let graph = builder.build()?;
//! ```
//!
//! ## 过渡解析
//!
//! 进入过渡取自目标目的地，退出过渡取自离开的目的地。
//! `Inherit` 逐级向上查找所属导航图，全部未指定时由宿主使用默认过渡；
//! `Disabled` 表示该侧立即切换。

use std::collections::HashMap;
use std::fmt;
use std::rc::Rc;

use motion_runtime::{EnterMotionSpec, ExitMotionSpec};

use crate::error::{NavError, NavResult};
use crate::route::{Arguments, DeepLink, NamedArgument, RoutePattern, resolve_arguments};
use crate::saved_state::Screen;

/// 目的地标识（导航图内的索引）
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct DestinationId(usize);

/// 单侧过渡的覆盖方式
#[derive(Clone)]
pub enum TransitionOverride<T> {
    /// 沿导航图向上继承
    Inherit,
    /// 不播放动画
    Disabled,
    /// 指定过渡
    Custom(T),
}

impl<T> Default for TransitionOverride<T> {
    fn default() -> Self {
        TransitionOverride::Inherit
    }
}

impl<T> fmt::Debug for TransitionOverride<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TransitionOverride::Inherit => f.write_str("Inherit"),
            TransitionOverride::Disabled => f.write_str("Disabled"),
            TransitionOverride::Custom(_) => f.write_str("Custom(..)"),
        }
    }
}

/// 可组合目的地的注册选项
#[derive(Debug, Clone, Default)]
pub struct ComposableOptions {
    pub enter: TransitionOverride<EnterMotionSpec>,
    pub exit: TransitionOverride<ExitMotionSpec>,
    pub deep_links: Vec<DeepLink>,
    pub arguments: Vec<NamedArgument>,
}

impl ComposableOptions {
    pub fn enter(mut self, enter: EnterMotionSpec) -> Self {
        self.enter = TransitionOverride::Custom(enter);
        self
    }

    pub fn exit(mut self, exit: ExitMotionSpec) -> Self {
        self.exit = TransitionOverride::Custom(exit);
        self
    }

    pub fn deep_link(mut self, deep_link: DeepLink) -> Self {
        self.deep_links.push(deep_link);
        self
    }

    pub fn argument(mut self, argument: NamedArgument) -> Self {
        self.arguments.push(argument);
        self
    }
}

/// 嵌套导航图的注册选项
#[derive(Debug, Clone, Default)]
pub struct NavigationOptions {
    pub enter: TransitionOverride<EnterMotionSpec>,
    pub exit: TransitionOverride<ExitMotionSpec>,
}

/// 目的地内容
pub type ContentFn<R> = Rc<dyn Fn(&mut Screen<'_>) -> R>;

enum DestinationKind<R> {
    Composable {
        content: ContentFn<R>,
        deep_links: Vec<DeepLink>,
        arguments: Vec<NamedArgument>,
    },
    Graph {
        start: String,
    },
}

struct Destination<R> {
    pattern: RoutePattern,
    parent: Option<DestinationId>,
    kind: DestinationKind<R>,
    enter: TransitionOverride<EnterMotionSpec>,
    exit: TransitionOverride<ExitMotionSpec>,
}

/// 导航图构建器
pub struct NavGraphBuilder<R> {
    start: String,
    destinations: Vec<Destination<R>>,
    by_route: HashMap<String, DestinationId>,
    parent: Option<DestinationId>,
}

impl<R> NavGraphBuilder<R> {
    /// 以根起始目的地创建
    pub fn new(start_destination: impl Into<String>) -> Self {
        Self {
            start: start_destination.into(),
            destinations: Vec::new(),
            by_route: HashMap::new(),
            parent: None,
        }
    }

    /// 注册可组合目的地
    pub fn composable(
        &mut self,
        route: &str,
        options: ComposableOptions,
        content: impl Fn(&mut Screen<'_>) -> R + 'static,
    ) -> NavResult<()> {
        let pattern = self.claim(route)?;
        self.push(Destination {
            pattern,
            parent: self.parent,
            kind: DestinationKind::Composable {
                content: Rc::new(content),
                deep_links: options.deep_links,
                arguments: options.arguments,
            },
            enter: options.enter,
            exit: options.exit,
        });
        Ok(())
    }

    /// 注册嵌套导航图，`build` 中注册的目的地都属于该图
    pub fn navigation(
        &mut self,
        route: &str,
        start_destination: &str,
        options: NavigationOptions,
        build: impl FnOnce(&mut Self) -> NavResult<()>,
    ) -> NavResult<()> {
        let pattern = self.claim(route)?;
        let id = self.push(Destination {
            pattern,
            parent: self.parent,
            kind: DestinationKind::Graph {
                start: start_destination.to_string(),
            },
            enter: options.enter,
            exit: options.exit,
        });

        let outer = self.parent.replace(id);
        let result = build(self);
        self.parent = outer;
        result
    }

    /// 校验并生成导航图
    pub fn build(self) -> NavResult<NavGraph<R>> {
        let graph = NavGraph {
            start: self.start,
            destinations: self.destinations,
            by_route: self.by_route,
        };

        graph.check_start(None, &graph.start)?;
        for (index, destination) in graph.destinations.iter().enumerate() {
            if let DestinationKind::Graph { start } = &destination.kind {
                graph.check_start(Some(DestinationId(index)), start)?;
            }
        }
        Ok(graph)
    }

    fn claim(&self, route: &str) -> NavResult<RoutePattern> {
        let pattern = RoutePattern::parse(route)?;
        if self.by_route.contains_key(route) {
            return Err(NavError::DuplicateRoute {
                route: route.to_string(),
            });
        }
        Ok(pattern)
    }

    fn push(&mut self, destination: Destination<R>) -> DestinationId {
        let id = DestinationId(self.destinations.len());
        self.by_route
            .insert(destination.pattern.as_str().to_string(), id);
        self.destinations.push(destination);
        id
    }
}

/// 导航图
pub struct NavGraph<R> {
    start: String,
    destinations: Vec<Destination<R>>,
    by_route: HashMap<String, DestinationId>,
}

impl<R> NavGraph<R> {
    /// 根起始目的地的路由模式
    pub fn start_route(&self) -> &str {
        &self.start
    }

    /// 根起始目的地（逐级展开嵌套图后的可组合目的地）
    pub fn find_start_destination(&self) -> Option<DestinationId> {
        self.resolve_leaf(*self.by_route.get(&self.start)?)
    }

    /// 按路由模式查找目的地
    pub fn destination(&self, route: &str) -> Option<DestinationId> {
        self.by_route.get(route).copied()
    }

    /// 目的地的路由模式
    pub fn route(&self, id: DestinationId) -> &str {
        self.destinations[id.0].pattern.as_str()
    }

    /// 是否为嵌套导航图
    pub fn is_graph(&self, id: DestinationId) -> bool {
        matches!(self.destinations[id.0].kind, DestinationKind::Graph { .. })
    }

    /// 所属的导航图（根图下的目的地返回 `None`）
    pub fn parent(&self, id: DestinationId) -> Option<DestinationId> {
        self.destinations[id.0].parent
    }

    /// 将实际路由解析为可组合目的地与参数
    ///
    /// 指向嵌套图时导航到其起始目的地。
    pub fn match_route(&self, route: &str) -> NavResult<(DestinationId, Arguments)> {
        let unknown = || NavError::UnknownRoute {
            route: route.to_string(),
        };
        let (index, captured) = self
            .destinations
            .iter()
            .enumerate()
            .find_map(|(index, d)| d.pattern.matches(route).map(|captured| (index, captured)))
            .ok_or_else(unknown)?;

        let id = self.resolve_leaf(DestinationId(index)).ok_or_else(unknown)?;
        if id.0 == index {
            let arguments = self.resolve_arguments(id, captured)?;
            Ok((id, arguments))
        } else {
            Ok((id, self.resolve_arguments(id, Default::default())?))
        }
    }

    /// 查找匹配深层链接的目的地
    pub fn match_deep_link(&self, uri: &str) -> NavResult<(DestinationId, Arguments)> {
        for (index, destination) in self.destinations.iter().enumerate() {
            let DestinationKind::Composable { deep_links, .. } = &destination.kind else {
                continue;
            };
            if let Some(captured) = deep_links.iter().find_map(|link| link.matches(uri)) {
                let id = DestinationId(index);
                return Ok((id, self.resolve_arguments(id, captured)?));
            }
        }
        Err(NavError::NoMatchingDeepLink {
            uri: uri.to_string(),
        })
    }

    /// 解析进入过渡；`None` 表示使用宿主默认值
    pub fn resolve_enter(&self, id: DestinationId) -> Option<EnterMotionSpec> {
        self.resolve(id, |d| &d.enter, EnterMotionSpec::none)
    }

    /// 解析退出过渡；`None` 表示使用宿主默认值
    pub fn resolve_exit(&self, id: DestinationId) -> Option<ExitMotionSpec> {
        self.resolve(id, |d| &d.exit, ExitMotionSpec::none)
    }

    pub(crate) fn content(&self, id: DestinationId) -> Option<ContentFn<R>> {
        match &self.destinations[id.0].kind {
            DestinationKind::Composable { content, .. } => Some(Rc::clone(content)),
            DestinationKind::Graph { .. } => None,
        }
    }

    fn resolve<T: Clone>(
        &self,
        id: DestinationId,
        field: impl Fn(&Destination<R>) -> &TransitionOverride<T>,
        disabled: impl Fn() -> T,
    ) -> Option<T> {
        let mut cursor = Some(id);
        while let Some(current) = cursor {
            let destination = &self.destinations[current.0];
            match field(destination) {
                TransitionOverride::Inherit => cursor = destination.parent,
                TransitionOverride::Disabled => return Some(disabled()),
                TransitionOverride::Custom(spec) => return Some(spec.clone()),
            }
        }
        None
    }

    fn resolve_arguments(
        &self,
        id: DestinationId,
        captured: std::collections::BTreeMap<String, String>,
    ) -> NavResult<Arguments> {
        let destination = &self.destinations[id.0];
        let declared = match &destination.kind {
            DestinationKind::Composable { arguments, .. } => arguments.as_slice(),
            DestinationKind::Graph { .. } => &[],
        };
        resolve_arguments(&destination.pattern, captured, declared)
    }

    /// 逐级展开嵌套图的起始目的地
    fn resolve_leaf(&self, mut id: DestinationId) -> Option<DestinationId> {
        // 层数不超过目的地总数，超出说明存在环
        for _ in 0..=self.destinations.len() {
            match &self.destinations[id.0].kind {
                DestinationKind::Composable { .. } => return Some(id),
                DestinationKind::Graph { start } => id = *self.by_route.get(start)?,
            }
        }
        None
    }

    fn check_start(&self, graph: Option<DestinationId>, start: &str) -> NavResult<()> {
        let missing = || NavError::MissingStartDestination {
            graph: graph.map_or_else(|| "root".to_string(), |id| self.route(id).to_string()),
            start: start.to_string(),
        };
        let id = self.destination(start).ok_or_else(missing)?;
        if self.parent(id) != graph || self.resolve_leaf(id).is_none() {
            return Err(missing());
        }
        Ok(())
    }
}

impl<R> fmt::Debug for NavGraph<R> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("NavGraph")
            .field("start", &self.start)
            .field(
                "routes",
                &self
                    .destinations
                    .iter()
                    .map(|d| d.pattern.as_str())
                    .collect::<Vec<_>>(),
            )
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use motion_runtime::{Direction, material_fade_through};

    fn leaf(_: &mut Screen<'_>) {}

    fn sample_graph() -> NavGraph<()> {
        let mut builder = NavGraphBuilder::new("home");
        builder
            .composable("home", ComposableOptions::default(), leaf)
            .unwrap();
        builder
            .navigation(
                "settings",
                "settings/main",
                NavigationOptions {
                    enter: TransitionOverride::Custom(material_fade_through(300).enter),
                    exit: TransitionOverride::Disabled,
                },
                |b| {
                    b.composable("settings/main", ComposableOptions::default(), leaf)?;
                    b.composable(
                        "settings/item/{id}",
                        ComposableOptions::default()
                            .deep_link(DeepLink::uri("app://demo/settings/{id}")?),
                        leaf,
                    )
                },
            )
            .unwrap();
        builder.build().unwrap()
    }

    #[test]
    fn test_graph_route_resolves_to_start() {
        let graph = sample_graph();
        let (id, args) = graph.match_route("settings").unwrap();
        assert_eq!(graph.route(id), "settings/main");
        assert!(args.is_empty());

        let (id, args) = graph.match_route("settings/item/5").unwrap();
        assert_eq!(graph.route(id), "settings/item/{id}");
        assert_eq!(args.get("id"), Some("5"));
        assert_eq!(graph.route(graph.find_start_destination().unwrap()), "home");

        assert_eq!(
            graph.match_route("missing").unwrap_err(),
            NavError::UnknownRoute {
                route: "missing".to_string()
            }
        );
    }

    #[test]
    fn test_transitions_inherit_from_parent_graph() {
        let graph = sample_graph();
        let item = graph.destination("settings/item/{id}").unwrap();
        let home = graph.destination("home").unwrap();

        let enter = graph.resolve_enter(item).unwrap();
        assert_eq!(enter.descriptor(Direction::Forward).end_millis(), 300);
        assert_eq!(
            graph.resolve_exit(item).unwrap().descriptor(Direction::Forward).end_millis(),
            0
        );
        assert!(graph.resolve_enter(home).is_none());
    }

    #[test]
    fn test_deep_link_lookup() {
        let graph = sample_graph();
        let (id, args) = graph.match_deep_link("app://demo/settings/3").unwrap();
        assert_eq!(graph.route(id), "settings/item/{id}");
        assert_eq!(args.get("id"), Some("3"));
        assert!(matches!(
            graph.match_deep_link("app://demo/unknown"),
            Err(NavError::NoMatchingDeepLink { .. })
        ));
    }

    #[test]
    fn test_registration_errors() {
        let mut builder: NavGraphBuilder<()> = NavGraphBuilder::new("a");
        builder.composable("a", ComposableOptions::default(), leaf).unwrap();
        assert_eq!(
            builder.composable("a", ComposableOptions::default(), leaf),
            Err(NavError::DuplicateRoute {
                route: "a".to_string()
            })
        );
        assert!(matches!(
            builder.composable("b/{", ComposableOptions::default(), leaf),
            Err(NavError::MalformedRoute { .. })
        ));

        let mut builder: NavGraphBuilder<()> = NavGraphBuilder::new("nowhere");
        builder.composable("a", ComposableOptions::default(), leaf).unwrap();
        assert!(matches!(
            builder.build(),
            Err(NavError::MissingStartDestination { .. })
        ));

        let mut builder: NavGraphBuilder<()> = NavGraphBuilder::new("a");
        builder.composable("a", ComposableOptions::default(), leaf).unwrap();
        builder
            .navigation("nested", "a", NavigationOptions::default(), |_| Ok(()))
            .unwrap();
        assert!(matches!(
            builder.build(),
            Err(NavError::MissingStartDestination { .. })
        ));
    }
}
