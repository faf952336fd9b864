use crate::event_bus::EventBus;
use crate::frame::Frame;

/// A unit of per-frame work executed by the [`Scheduler`](crate::Scheduler).
///
/// Jobs run in a stable order based on their `(priority, id)`. Each animated
/// subsystem (reveals, ticker, counters, map) registers one job, so update
/// order within a frame is total.
pub struct Job {
    pub id: &'static str,
    /// Smaller values run earlier.
    pub priority: i32,
    pub run: Box<dyn FnMut(Frame, &mut EventBus)>,
}

impl Job {
    pub fn new(id: &'static str, run: impl FnMut(Frame, &mut EventBus) + 'static) -> Self {
        Self {
            id,
            priority: 0,
            run: Box::new(run),
        }
    }

    pub fn with_priority(
        id: &'static str,
        priority: i32,
        run: impl FnMut(Frame, &mut EventBus) + 'static,
    ) -> Self {
        Self {
            id,
            priority,
            run: Box::new(run),
        }
    }
}
