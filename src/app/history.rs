use crate::app::routing::Route;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Mutex, MutexGuard};

/// Browser-location style navigation used by the views.
pub trait Navigator: Send + Sync {
    fn navigate_to(&self, route: Route);
    fn back(&self);
    fn current(&self) -> Option<Route>;
}

/// In-memory navigation stack. `back` never pops the last entry.
#[derive(Debug, Default)]
pub struct History {
    stack: Mutex<Vec<Route>>,
    back_calls: AtomicUsize,
}

impl History {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn back_calls(&self) -> usize {
        self.back_calls.load(Ordering::SeqCst)
    }

    pub fn entries(&self) -> Vec<Route> {
        self.stack().clone()
    }

    fn stack(&self) -> MutexGuard<'_, Vec<Route>> {
        self.stack.lock().unwrap_or_else(|poisoned| poisoned.into_inner())
    }
}

impl Navigator for History {
    fn navigate_to(&self, route: Route) {
        tracing::debug!("Navigating to {}", route);
        self.stack().push(route);
    }

    fn back(&self) {
        self.back_calls.fetch_add(1, Ordering::SeqCst);
        let mut stack = self.stack();
        if stack.len() > 1 {
            stack.pop();
        }
        tracing::debug!("Navigated back to {:?}", stack.last());
    }

    fn current(&self) -> Option<Route> {
        self.stack().last().copied()
    }
}
