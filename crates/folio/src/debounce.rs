//! Cancel-and-reschedule timer.

use std::cell::RefCell;
use std::rc::Rc;

use zoon::{Task, TaskHandle, Timer};

/// Runs `action` once, `delay_ms` after the last `trigger` in a burst.
///
/// Each trigger replaces the pending task; dropping the old `TaskHandle`
/// aborts its sleep so the earlier schedule never fires.
pub struct Debouncer {
    delay_ms: u32,
    action: Rc<dyn Fn()>,
    pending: RefCell<Option<TaskHandle>>,
}

impl Debouncer {
    pub fn new(delay_ms: u32, action: impl Fn() + 'static) -> Self {
        Self {
            delay_ms,
            action: Rc::new(action),
            pending: RefCell::new(None),
        }
    }

    pub fn trigger(&self) {
        let action = self.action.clone();
        let delay_ms = self.delay_ms;
        let task = Task::start_droppable(async move {
            Timer::sleep(delay_ms).await;
            action();
        });
        self.pending.replace(Some(task));
    }
}
