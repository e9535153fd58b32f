//! # Controller 模块
//!
//! 返回栈与生命周期的同步簿记。
//!
//! 导航调用立即更新逻辑返回栈：新的栈顶进入 `Started`，原栈顶退回 `Created`，
//! 出栈的条目保持 `Created` 等待视觉释放。`Resumed` 与 `Destroyed`
//! 由宿主在过渡结束时通知（见 [`crate::MaterialMotionNavHost`]）。
//!
//! ```text
//! navigate(B)      A: Resumed → Created      B: Started
//! 过渡完成                                   B: Resumed
//! pop()            A: Created → Started      B: Created（待释放）
//! 过渡完成         A: Resumed                B: Destroyed
//! ```

use std::collections::HashMap;

use motion_runtime::LayerStyle;
use tracing::{debug, warn};

use crate::back_stack::{BackStackEntry, EntryId};
use crate::error::{NavError, NavResult};
use crate::graph::{DestinationId, NavGraph};
use crate::lifecycle::LifecycleState;
use crate::route::Arguments;
use crate::saved_state::{SavedStateRegistry, Screen};

/// 导航前先出栈到指定目的地
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PopUpTo {
    /// 目标路由模式（嵌套图路由会展开为其起始目的地）
    pub route: String,
    /// 是否连同目标一起出栈
    pub inclusive: bool,
    /// 是否保存出栈部分，供之后 `restore_state` 恢复
    pub save_state: bool,
}

impl PopUpTo {
    pub fn new(route: impl Into<String>) -> Self {
        Self {
            route: route.into(),
            inclusive: false,
            save_state: false,
        }
    }

    pub fn inclusive(mut self, inclusive: bool) -> Self {
        self.inclusive = inclusive;
        self
    }

    pub fn save_state(mut self, save_state: bool) -> Self {
        self.save_state = save_state;
        self
    }
}

/// 导航选项
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct NavOptions {
    pub pop_up_to: Option<PopUpTo>,
    /// 目标已在栈顶时复用该条目
    pub launch_single_top: bool,
    /// 目标有被保存的返回栈时恢复它
    pub restore_state: bool,
}

impl NavOptions {
    pub fn pop_up_to(mut self, pop_up_to: PopUpTo) -> Self {
        self.pop_up_to = Some(pop_up_to);
        self
    }

    pub fn launch_single_top(mut self, launch_single_top: bool) -> Self {
        self.launch_single_top = launch_single_top;
        self
    }

    pub fn restore_state(mut self, restore_state: bool) -> Self {
        self.restore_state = restore_state;
        self
    }
}

/// 导航控制器
pub struct NavController<R> {
    graph: NavGraph<R>,
    back_stack: Vec<BackStackEntry>,
    /// 已出栈、等待视觉释放的条目
    popped: Vec<BackStackEntry>,
    saved_states: SavedStateRegistry,
    /// 被保存的返回栈（自底向上）
    saved_back_stacks: HashMap<u64, Vec<BackStackEntry>>,
    /// 路由模式 → 被保存的返回栈
    saved_back_stack_ids: HashMap<String, u64>,
    next_entry_id: u64,
    next_stack_id: u64,
}

impl<R> NavController<R> {
    /// 以导航图的起始目的地创建
    pub fn new(graph: NavGraph<R>) -> NavResult<Self> {
        let start = graph
            .find_start_destination()
            .ok_or_else(|| NavError::MissingStartDestination {
                graph: "root".to_string(),
                start: graph.start_route().to_string(),
            })?;
        let mut controller = Self {
            graph,
            back_stack: Vec::new(),
            popped: Vec::new(),
            saved_states: SavedStateRegistry::new(),
            saved_back_stacks: HashMap::new(),
            saved_back_stack_ids: HashMap::new(),
            next_entry_id: 0,
            next_stack_id: 0,
        };
        let arguments = controller.graph.match_route(controller.graph.route(start))?.1;
        controller.push_entry(start, arguments);
        controller.update_lifecycles(None);
        Ok(controller)
    }

    pub fn graph(&self) -> &NavGraph<R> {
        &self.graph
    }

    /// 导航到实际路由
    ///
    /// 路由无法解析时返回错误，返回栈不变。
    pub fn navigate(&mut self, route: &str, options: NavOptions) -> NavResult<()> {
        let (destination, arguments) = self.graph.match_route(route)?;
        let previous_top = self.current_entry().map(BackStackEntry::id);
        debug!(route, ?options, "navigate");

        if let Some(pop_up_to) = &options.pop_up_to {
            self.pop_up_to(
                &pop_up_to.route,
                pop_up_to.inclusive,
                pop_up_to.save_state,
                true,
            );
        }

        let target_route = self.graph.route(destination).to_string();
        let single_top = options.launch_single_top
            && self
                .back_stack
                .last()
                .is_some_and(|top| top.destination == destination);

        if single_top {
            if let Some(top) = self.back_stack.last_mut() {
                top.arguments = arguments;
            }
        } else if options.restore_state && self.saved_back_stack_ids.contains_key(&target_route) {
            self.restore_back_stack(&target_route);
        } else {
            self.push_entry(destination, arguments);
        }

        self.update_lifecycles(previous_top);
        Ok(())
    }

    /// 返回上一个条目；栈中只剩一个条目时返回 false
    pub fn pop_back_stack(&mut self) -> bool {
        if self.back_stack.len() <= 1 {
            return false;
        }
        let previous_top = self.current_entry().map(BackStackEntry::id);
        if let Some(entry) = self.back_stack.pop() {
            debug!(route = %entry.route, id = %entry.id, "pop");
            self.popped.push(entry);
        }
        self.update_lifecycles(previous_top);
        true
    }

    /// 出栈到 `route`；目标不在栈中或会清空返回栈时返回 false
    pub fn pop_back_stack_to(&mut self, route: &str, inclusive: bool, save_state: bool) -> bool {
        let previous_top = self.current_entry().map(BackStackEntry::id);
        let popped = self.pop_up_to(route, inclusive, save_state, false);
        if popped {
            self.update_lifecycles(previous_top);
        }
        popped
    }

    /// 处理深层链接：以 [起始目的地, 目标] 重建返回栈
    pub fn handle_deep_link(&mut self, uri: &str) -> NavResult<()> {
        let (destination, arguments) = self.graph.match_deep_link(uri)?;
        let start = self
            .graph
            .find_start_destination()
            .ok_or_else(|| NavError::MissingStartDestination {
                graph: "root".to_string(),
                start: self.graph.start_route().to_string(),
            })?;
        let start_arguments = self.graph.match_route(self.graph.route(start))?.1;
        debug!(uri, route = self.graph.route(destination), "handle deep link");

        let previous_top = self.current_entry().map(BackStackEntry::id);
        self.popped.extend(self.back_stack.drain(..).rev());
        if start != destination {
            self.push_entry(start, start_arguments);
        }
        self.push_entry(destination, arguments);
        self.update_lifecycles(previous_top);
        Ok(())
    }

    /// 当前栈顶
    pub fn current_entry(&self) -> Option<&BackStackEntry> {
        self.back_stack.last()
    }

    /// 栈中最上面的、路由模式为 `route` 的条目
    pub fn entry(&self, route: &str) -> Option<&BackStackEntry> {
        self.back_stack.iter().rev().find(|entry| entry.route == route)
    }

    /// 按标识查找条目（包括已出栈、尚未销毁的）
    pub fn entry_by_id(&self, id: EntryId) -> Option<&BackStackEntry> {
        self.back_stack
            .iter()
            .chain(self.popped.iter())
            .find(|entry| entry.id == id)
    }

    /// 条目的生命周期；找不到的条目视为已销毁
    pub fn lifecycle(&self, id: EntryId) -> LifecycleState {
        self.entry_by_id(id)
            .map_or(LifecycleState::Destroyed, BackStackEntry::lifecycle)
    }

    /// 返回栈（自底向上）
    pub fn back_stack(&self) -> &[BackStackEntry] {
        &self.back_stack
    }

    /// 已出栈、等待过渡结束的条目
    pub fn popped_entries(&self) -> &[BackStackEntry] {
        &self.popped
    }

    /// 根起始目的地的路由模式
    pub fn find_start_destination(&self) -> Option<&str> {
        self.graph
            .find_start_destination()
            .map(|id| self.graph.route(id))
    }

    pub fn saved_states(&self) -> &SavedStateRegistry {
        &self.saved_states
    }

    pub fn saved_states_mut(&mut self) -> &mut SavedStateRegistry {
        &mut self.saved_states
    }

    /// 以给定图层变换渲染条目
    pub(crate) fn render_entry(&mut self, id: EntryId, style: &LayerStyle) -> NavResult<R> {
        let unknown = NavError::UnknownEntry { id: id.value() };
        let entry = self
            .back_stack
            .iter()
            .chain(self.popped.iter())
            .find(|entry| entry.id == id)
            .ok_or(unknown.clone())?;
        let content = self.graph.content(entry.destination).ok_or(unknown)?;
        let state = self.saved_states.state_mut(id);
        let mut screen = Screen::new(entry, state, *style);
        Ok(content(&mut screen))
    }

    /// 过渡结束后栈顶进入 Resumed
    pub(crate) fn resume(&mut self, id: EntryId) {
        if let Some(top) = self.back_stack.last_mut()
            && top.id == id
            && top.lifecycle != LifecycleState::Resumed
        {
            debug!(route = %top.route, id = %top.id, "lifecycle → RESUMED");
            top.lifecycle = LifecycleState::Resumed;
        }
    }

    /// 条目的内容被移出渲染树；已出栈的条目随之销毁
    pub(crate) fn on_entry_disposed(&mut self, id: EntryId) {
        let Some(index) = self.popped.iter().position(|entry| entry.id == id) else {
            return;
        };
        let entry = self.popped.remove(index);
        debug!(route = %entry.route, id = %entry.id, "lifecycle → DESTROYED");
        if !self.is_saved(id) {
            self.saved_states.remove(id);
        }
    }

    /// 销毁不在 `mounted` 中的已出栈条目（从未被渲染过的）
    pub(crate) fn destroy_unmounted(&mut self, mounted: &[EntryId]) {
        let stale: Vec<EntryId> = self
            .popped
            .iter()
            .map(BackStackEntry::id)
            .filter(|id| !mounted.contains(id))
            .collect();
        for id in stale {
            self.on_entry_disposed(id);
        }
    }

    fn push_entry(&mut self, destination: DestinationId, arguments: Arguments) {
        let id = EntryId(self.next_entry_id);
        self.next_entry_id += 1;
        self.back_stack.push(BackStackEntry {
            id,
            destination,
            route: self.graph.route(destination).to_string(),
            arguments,
            lifecycle: LifecycleState::Created,
        });
    }

    /// 出栈到 `route`，`allow_empty` 为 false 时拒绝清空返回栈
    fn pop_up_to(&mut self, route: &str, inclusive: bool, save_state: bool, allow_empty: bool) -> bool {
        let target = self
            .graph
            .destination(route)
            .and_then(|id| {
                if self.graph.is_graph(id) {
                    self.graph.match_route(route).ok().map(|(leaf, _)| leaf)
                } else {
                    Some(id)
                }
            });
        let Some(index) = target.and_then(|target| {
            self.back_stack
                .iter()
                .rposition(|entry| entry.destination == target)
        }) else {
            warn!(route, "pop up to 的目标不在返回栈中，忽略");
            return false;
        };

        let keep = if inclusive { index } else { index + 1 };
        if keep == 0 && !allow_empty {
            return false;
        }
        if keep >= self.back_stack.len() {
            return false;
        }

        let removed: Vec<BackStackEntry> = self.back_stack.drain(keep..).collect();
        if save_state {
            let stack_id = self.next_stack_id;
            self.next_stack_id += 1;
            for entry in &removed {
                if let Some(old) = self.saved_back_stack_ids.insert(entry.route.clone(), stack_id) {
                    self.drop_saved_stack_if_orphaned(old);
                }
            }
            debug!(stack_id, count = removed.len(), "保存返回栈");
            self.saved_back_stacks.insert(stack_id, removed.clone());
        }
        self.popped.extend(removed.into_iter().rev());
        true
    }

    fn restore_back_stack(&mut self, route: &str) {
        let Some(stack_id) = self.saved_back_stack_ids.get(route).copied() else {
            return;
        };
        self.saved_back_stack_ids.retain(|_, id| *id != stack_id);
        let Some(entries) = self.saved_back_stacks.remove(&stack_id) else {
            return;
        };
        debug!(stack_id, route, count = entries.len(), "恢复返回栈");
        for entry in entries {
            // 尚未完成退出动画的条目直接回到栈中
            self.popped.retain(|popped| popped.id != entry.id);
            self.back_stack.push(entry);
        }
    }

    fn drop_saved_stack_if_orphaned(&mut self, stack_id: u64) {
        if self.saved_back_stack_ids.values().any(|id| *id == stack_id) {
            return;
        }
        if let Some(entries) = self.saved_back_stacks.remove(&stack_id) {
            for entry in entries {
                let alive = self.entry_by_id(entry.id).is_some();
                if !alive {
                    self.saved_states.remove(entry.id);
                }
            }
        }
    }

    fn is_saved(&self, id: EntryId) -> bool {
        self.saved_back_stacks
            .values()
            .any(|stack| stack.iter().any(|entry| entry.id == id))
    }

    /// 同步刷新生命周期：栈顶 Started（已 Resumed 的保持），其余 Created
    fn update_lifecycles(&mut self, previous_top: Option<EntryId>) {
        let top_index = self.back_stack.len().saturating_sub(1);
        for (index, entry) in self.back_stack.iter_mut().enumerate() {
            let target = if index == top_index {
                if Some(entry.id) == previous_top {
                    entry.lifecycle.max(LifecycleState::Started)
                } else {
                    LifecycleState::Started
                }
            } else {
                LifecycleState::Created
            };
            if entry.lifecycle != target {
                debug!(route = %entry.route, id = %entry.id, state = ?target, "lifecycle");
                entry.lifecycle = target;
            }
        }
        for entry in &mut self.popped {
            entry.lifecycle = LifecycleState::Created;
        }
    }
}
