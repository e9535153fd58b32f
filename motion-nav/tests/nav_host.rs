//! 导航宿主的端到端场景

use motion_nav::{
    ComposableOptions, DeepLink, LifecycleState, MaterialMotionNavHost, NavController, NavError,
    NavGraph, NavGraphBuilder, NavHostConfig, NavOptions, NavigationOptions, PopUpTo,
    TransitionOverride,
};
use motion_runtime::{FrameResult, LayerRole};

const FIRST: &str = "first";
const SECOND: &str = "second";

/// 每个目的地渲染为自己的路由名
fn text_graph() -> NavGraph<String> {
    let mut builder = NavGraphBuilder::new(FIRST);
    builder
        .composable(FIRST, ComposableOptions::default(), |screen| {
            screen.route().to_string()
        })
        .unwrap();
    builder
        .composable(SECOND, ComposableOptions::default(), |screen| {
            screen.route().to_string()
        })
        .unwrap();
    builder.build().unwrap()
}

fn contents(tree: &motion_runtime::RenderTree<motion_nav::EntryId, String>) -> Vec<&str> {
    tree.layers.iter().map(|layer| layer.content.as_str()).collect()
}

#[test]
fn test_lifecycle_follows_transition() {
    let mut host = MaterialMotionNavHost::new(text_graph(), NavHostConfig::default()).unwrap();
    host.render().unwrap();
    let first = host.controller().current_entry().unwrap().id();
    assert_eq!(host.controller().lifecycle(first), LifecycleState::Resumed);

    host.navigate(SECOND, NavOptions::default()).unwrap();
    let second = host.controller().current_entry().unwrap().id();
    assert_eq!(host.controller().lifecycle(first), LifecycleState::Created);
    assert_eq!(host.controller().lifecycle(second), LifecycleState::Started);

    // 交叉淡化进行到一半：两者都在渲染树中
    host.render().unwrap();
    let tree = host.frame(100).unwrap();
    assert_eq!(contents(&tree), vec![FIRST, SECOND]);
    assert_eq!(host.controller().lifecycle(first), LifecycleState::Created);
    assert_eq!(host.controller().lifecycle(second), LifecycleState::Started);

    let tree = host.frame(300).unwrap();
    assert_eq!(contents(&tree), vec![SECOND]);
    assert_eq!(host.controller().lifecycle(first), LifecycleState::Created);
    assert_eq!(host.controller().lifecycle(second), LifecycleState::Resumed);

    assert!(host.pop_back_stack());
    assert_eq!(host.controller().lifecycle(first), LifecycleState::Started);
    assert_eq!(host.controller().lifecycle(second), LifecycleState::Created);

    let tree = host.render().unwrap();
    // 后退时旧内容在上
    assert_eq!(tree.top().unwrap().content, SECOND);
    assert_eq!(tree.top().unwrap().role, LayerRole::Exiting);

    host.frame(400).unwrap();
    assert_eq!(host.controller().lifecycle(first), LifecycleState::Started);
    assert_eq!(host.controller().lifecycle(second), LifecycleState::Created);

    let tree = host.frame(600).unwrap();
    assert_eq!(contents(&tree), vec![FIRST]);
    assert_eq!(host.controller().lifecycle(first), LifecycleState::Resumed);
    assert_eq!(host.controller().lifecycle(second), LifecycleState::Destroyed);
}

#[test]
fn test_nested_graph_with_disabled_enter() {
    let mut builder = NavGraphBuilder::new(FIRST);
    builder
        .composable(FIRST, ComposableOptions::default(), |screen| {
            screen.route().to_string()
        })
        .unwrap();
    builder
        .navigation(
            "sub_graph",
            SECOND,
            NavigationOptions {
                enter: TransitionOverride::Disabled,
                ..Default::default()
            },
            |b| {
                b.composable(SECOND, ComposableOptions::default(), |screen| {
                    screen.route().to_string()
                })
            },
        )
        .unwrap();
    let mut host = MaterialMotionNavHost::new(builder.build().unwrap(), NavHostConfig::default())
        .unwrap();
    host.render().unwrap();

    host.navigate("sub_graph", NavOptions::default()).unwrap();
    assert_eq!(host.controller().current_entry().unwrap().route(), SECOND);

    let tree = host.render().unwrap();
    let entering = tree.layers.iter().find(|l| l.role == LayerRole::Entering).unwrap();
    assert!(entering.style.is_identity());
    let exiting = tree.layers.iter().find(|l| l.role == LayerRole::Exiting).unwrap();
    assert_eq!(exiting.style.alpha, 1.0);
    assert!(host.is_transitioning());

    assert!(matches!(host.on_frame(300), FrameResult::Completed { .. }));
}

#[test]
fn test_deep_link_builds_synthetic_back_stack() {
    let mut builder = NavGraphBuilder::new(FIRST);
    builder
        .composable(FIRST, ComposableOptions::default(), |screen| {
            screen.route().to_string()
        })
        .unwrap();
    builder
        .composable(
            SECOND,
            ComposableOptions::default().deep_link(DeepLink::uri("demo://app/second").unwrap()),
            |screen| screen.route().to_string(),
        )
        .unwrap();

    let mut controller = NavController::new(builder.build().unwrap()).unwrap();
    controller.handle_deep_link("demo://app/second").unwrap();
    let mut host = MaterialMotionNavHost::with_controller(controller, NavHostConfig::default());
    let tree = host.render().unwrap();
    assert_eq!(contents(&tree), vec![SECOND]);

    let first = host.controller().entry(FIRST).unwrap().id();
    let second = host.controller().entry(SECOND).unwrap().id();
    assert_eq!(host.controller().lifecycle(first), LifecycleState::Created);
    assert_eq!(host.controller().lifecycle(second), LifecycleState::Resumed);
    assert!(host.controller().popped_entries().is_empty());
}

#[test]
fn test_state_saved_across_navigation() {
    let mut builder = NavGraphBuilder::new("start");
    builder
        .composable("start", ComposableOptions::default(), |screen| {
            screen.remember_saveable("text", String::new)
        })
        .unwrap();
    builder
        .composable("second", ComposableOptions::default(), |_| String::new())
        .unwrap();
    let mut host = MaterialMotionNavHost::new(builder.build().unwrap(), NavHostConfig::default())
        .unwrap();

    let tree = host.render().unwrap();
    assert_eq!(tree.layers[0].content, "");
    let start = host.controller().current_entry().unwrap().id();
    host.saved_state_mut(start).set("text", &"test").unwrap();
    assert_eq!(host.render().unwrap().layers[0].content, "test");

    let tab = || {
        NavOptions::default()
            .pop_up_to(PopUpTo::new("start").save_state(true))
            .launch_single_top(true)
            .restore_state(true)
    };
    host.navigate("second", tab()).unwrap();
    host.render().unwrap();
    host.frame(1000).unwrap();

    host.navigate("start", tab()).unwrap();
    host.render().unwrap();
    let tree = host.frame(2000).unwrap();
    assert_eq!(tree.len(), 1);
    assert_eq!(tree.layers[0].content, "test");
}

#[test]
fn test_saved_tab_state_is_restored() {
    let mut builder = NavGraphBuilder::new("home");
    builder
        .composable("home", ComposableOptions::default(), |_| 0_u32)
        .unwrap();
    builder
        .composable("profile", ComposableOptions::default(), |screen| {
            screen.remember_saveable("visits", || 0_u32) + 1
        })
        .unwrap();
    let mut host = MaterialMotionNavHost::new(builder.build().unwrap(), NavHostConfig::default())
        .unwrap();
    host.render().unwrap();

    let tab = || {
        NavOptions::default()
            .pop_up_to(PopUpTo::new("home").save_state(true))
            .launch_single_top(true)
            .restore_state(true)
    };
    host.navigate("profile", tab()).unwrap();
    host.render().unwrap();
    host.frame(300).unwrap();
    let profile = host.controller().current_entry().unwrap().id();
    host.saved_state_mut(profile).set("visits", &5_u32).unwrap();

    host.navigate("home", tab()).unwrap();
    host.render().unwrap();
    host.frame(600).unwrap();
    assert_eq!(host.controller().lifecycle(profile), LifecycleState::Destroyed);

    host.navigate("profile", tab()).unwrap();
    let tree = host.render().unwrap();
    assert_eq!(host.controller().current_entry().unwrap().id(), profile);
    assert_eq!(tree.layers.iter().map(|l| l.content).max(), Some(6));
}

#[test]
fn test_pop_during_push_reverses() {
    let mut host = MaterialMotionNavHost::new(text_graph(), NavHostConfig::default()).unwrap();
    host.render().unwrap();
    host.navigate(SECOND, NavOptions::default()).unwrap();
    host.render().unwrap();
    let second = host.controller().current_entry().unwrap().id();
    host.frame(120).unwrap();

    assert!(host.pop_back_stack());
    let tree = host.render().unwrap();
    // 反向时仍在退出的 second 位于上层
    assert_eq!(contents(&tree), vec![FIRST, SECOND]);
    assert_eq!(tree.top().unwrap().role, LayerRole::Exiting);
    assert_eq!(host.controller().lifecycle(second), LifecycleState::Created);

    let tree = host.frame(420).unwrap();
    assert_eq!(contents(&tree), vec![FIRST]);
    assert_eq!(host.controller().lifecycle(second), LifecycleState::Destroyed);
}

#[test]
fn test_configuration_errors() {
    let mut builder: NavGraphBuilder<String> = NavGraphBuilder::new(FIRST);
    assert!(matches!(
        builder.composable("first/{id", ComposableOptions::default(), |_| String::new()),
        Err(NavError::MalformedRoute { .. })
    ));

    let mut host = MaterialMotionNavHost::new(text_graph(), NavHostConfig::default()).unwrap();
    assert_eq!(
        host.navigate("third", NavOptions::default()),
        Err(NavError::UnknownRoute {
            route: "third".to_string()
        })
    );
    assert_eq!(contents(&host.render().unwrap()), vec![FIRST]);
}
