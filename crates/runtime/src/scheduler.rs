use crate::event_bus::EventBus;
use crate::frame::Frame;
use crate::job::Job;

#[derive(Default)]
pub struct Scheduler {
    next_order: u64,
    jobs: Vec<(u64, Job)>,
}

impl Scheduler {
    pub fn new() -> Self {
        Self {
            next_order: 0,
            jobs: Vec::new(),
        }
    }

    pub fn add_job(&mut self, job: Job) {
        let order = self.next_order;
        self.next_order = self.next_order.wrapping_add(1);
        self.jobs.push((order, job));
    }

    pub fn job_count(&self) -> usize {
        self.jobs.len()
    }

    pub fn clear(&mut self) {
        self.jobs.clear();
    }

    /// Run all jobs in a deterministic order for the given frame.
    pub fn run_frame(&mut self, frame: Frame, bus: &mut EventBus) {
        // Total ordering: (priority, id, insertion_order). This stays deterministic even if
        // callers accidentally register duplicate job ids.
        self.jobs.sort_by(|(oa, a), (ob, b)| {
            a.priority
                .cmp(&b.priority)
                .then_with(|| a.id.cmp(b.id))
                .then_with(|| oa.cmp(ob))
        });

        for (_order, job) in &mut self.jobs {
            (job.run)(frame, bus);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::Scheduler;
    use crate::event_bus::EventBus;
    use crate::frame::Frame;
    use crate::job::Job;

    #[test]
    fn runs_jobs_in_stable_id_order() {
        let mut sched = Scheduler::new();
        sched.add_job(Job::new("b", |frame, bus| bus.emit(frame, "job", "b")));
        sched.add_job(Job::new("a", |frame, bus| bus.emit(frame, "job", "a")));

        let mut bus = EventBus::new();
        sched.run_frame(Frame::first(), &mut bus);
        let msgs: Vec<_> = bus.events().iter().map(|e| e.message.as_str()).collect();
        assert_eq!(msgs, vec!["a", "b"]);
    }

    #[test]
    fn runs_duplicate_ids_in_insertion_order() {
        let mut sched = Scheduler::new();
        sched.add_job(Job::new("a", |frame, bus| bus.emit(frame, "job", "first")));
        sched.add_job(Job::new("a", |frame, bus| bus.emit(frame, "job", "second")));

        let mut bus = EventBus::new();
        sched.run_frame(Frame::first(), &mut bus);
        let msgs: Vec<_> = bus.events().iter().map(|e| e.message.as_str()).collect();
        assert_eq!(msgs, vec!["first", "second"]);
    }

    #[test]
    fn runs_lower_priority_value_first() {
        let mut sched = Scheduler::new();
        sched.add_job(Job::with_priority("a", 10, |frame, bus| {
            bus.emit(frame, "job", "a")
        }));
        sched.add_job(Job::with_priority("b", -1, |frame, bus| {
            bus.emit(frame, "job", "b")
        }));

        let mut bus = EventBus::new();
        sched.run_frame(Frame::first(), &mut bus);
        let msgs: Vec<_> = bus.events().iter().map(|e| e.message.as_str()).collect();
        assert_eq!(msgs, vec!["b", "a"]);
    }

    #[test]
    fn jobs_can_capture_state() {
        use std::cell::Cell;
        use std::rc::Rc;

        let count = Rc::new(Cell::new(0u32));
        let captured = Rc::clone(&count);

        let mut sched = Scheduler::new();
        sched.add_job(Job::new("count", move |_frame, _bus| {
            captured.set(captured.get() + 1);
        }));

        let mut bus = EventBus::new();
        let mut frame = Frame::first();
        for _ in 0..3 {
            sched.run_frame(frame, &mut bus);
            frame = frame.advance(1.0 / 60.0);
        }
        assert_eq!(count.get(), 3);
    }
}
