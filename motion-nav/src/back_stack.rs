//! 返回栈条目。

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::graph::DestinationId;
use crate::lifecycle::LifecycleState;
use crate::route::Arguments;

/// 返回栈条目标识，在一个控制器内唯一且不复用
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct EntryId(pub(crate) u64);

impl EntryId {
    pub fn value(self) -> u64 {
        self.0
    }
}

impl fmt::Display for EntryId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// 返回栈条目
#[derive(Debug, Clone, PartialEq)]
pub struct BackStackEntry {
    pub(crate) id: EntryId,
    pub(crate) destination: DestinationId,
    pub(crate) route: String,
    pub(crate) arguments: Arguments,
    pub(crate) lifecycle: LifecycleState,
}

impl BackStackEntry {
    pub fn id(&self) -> EntryId {
        self.id
    }

    pub fn destination(&self) -> DestinationId {
        self.destination
    }

    /// 目的地的路由模式
    pub fn route(&self) -> &str {
        &self.route
    }

    pub fn arguments(&self) -> &Arguments {
        &self.arguments
    }

    pub fn lifecycle(&self) -> LifecycleState {
        self.lifecycle
    }
}
