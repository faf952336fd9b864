/// Registry of deregistration actions for component teardown.
///
/// Everything the composer wires up against the browser (event listeners,
/// interval handles, the rAF loop) registers an undo action here, so a
/// single `run()` releases all of it and nothing fires against unmounted
/// elements. Actions run at most once, in reverse registration order;
/// dropping the registry runs whatever is still pending.
#[derive(Default)]
pub struct Teardown {
    actions: Vec<Box<dyn FnOnce()>>,
}

impl Teardown {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn defer(&mut self, action: impl FnOnce() + 'static) {
        self.actions.push(Box::new(action));
    }

    pub fn pending(&self) -> usize {
        self.actions.len()
    }

    pub fn run(&mut self) {
        while let Some(action) = self.actions.pop() {
            action();
        }
    }
}

impl Drop for Teardown {
    fn drop(&mut self) {
        self.run();
    }
}

#[cfg(test)]
mod tests {
    use super::Teardown;
    use std::cell::RefCell;
    use std::rc::Rc;

    #[test]
    fn runs_in_reverse_order_exactly_once() {
        let log = Rc::new(RefCell::new(Vec::new()));

        let mut t = Teardown::new();
        for name in ["scroll", "pointer", "ticker"] {
            let log = Rc::clone(&log);
            t.defer(move || log.borrow_mut().push(name));
        }
        assert_eq!(t.pending(), 3);

        t.run();
        t.run();
        assert_eq!(*log.borrow(), vec!["ticker", "pointer", "scroll"]);
    }

    #[test]
    fn drop_runs_pending_actions() {
        let log = Rc::new(RefCell::new(Vec::new()));
        {
            let mut t = Teardown::new();
            let captured = Rc::clone(&log);
            t.defer(move || captured.borrow_mut().push("raf"));
            let _ = t.pending();
        }
        assert_eq!(*log.borrow(), vec!["raf"]);
    }
}
