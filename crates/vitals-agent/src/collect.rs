//! OS metric sampling.
//!
//! Memory and CPU stats come from `sysinfo`; each sample also carries a
//! `RandomValue` gauge and a `PollCount` counter delta of 1, so the server's
//! running total equals the number of samples ever taken.

use rand::Rng;
use sysinfo::System;

use vitals_core::Metric;

pub struct Collector {
    sys: System,
}

impl Default for Collector {
    fn default() -> Self {
        Self::new()
    }
}

impl Collector {
    pub fn new() -> Self {
        Self { sys: System::new() }
    }

    /// Sample one batch of metrics.
    pub fn sample(&mut self) -> Vec<Metric> {
        self.sys.refresh_memory();
        self.sys.refresh_cpu();

        let mut rng = rand::thread_rng();
        vec![
            Metric::gauge("TotalMemory", self.sys.total_memory() as f64),
            Metric::gauge("UsedMemory", self.sys.used_memory() as f64),
            Metric::gauge("FreeMemory", self.sys.free_memory() as f64),
            Metric::gauge("AvailableMemory", self.sys.available_memory() as f64),
            Metric::gauge("TotalSwap", self.sys.total_swap() as f64),
            Metric::gauge("UsedSwap", self.sys.used_swap() as f64),
            Metric::gauge("CpuUsage", f64::from(self.sys.global_cpu_info().cpu_usage())),
            Metric::gauge("RandomValue", rng.gen::<f64>()),
            Metric::counter("PollCount", 1),
        ]
    }
}
