use std::cell::RefCell;

thread_local! {
    pub static PERF_EDGE_PROBES: RefCell<u64> = RefCell::new(0);
    pub static PERF_EDGE_HITS: RefCell<u64> = RefCell::new(0);
}

pub fn reset_probe_counters() {
    PERF_EDGE_PROBES.with(|c| *c.borrow_mut() = 0);
    PERF_EDGE_HITS.with(|c| *c.borrow_mut() = 0);
}

pub fn take_probe_counters() -> (u64, u64) {
    let probes = PERF_EDGE_PROBES.with(|c| {
        let v = *c.borrow();
        *c.borrow_mut() = 0;
        v
    });
    let hits = PERF_EDGE_HITS.with(|c| {
        let v = *c.borrow();
        *c.borrow_mut() = 0;
        v
    });
    (probes, hits)
}
