//! Periodic reporting to the server.
//!
//! The collect loop and the report loop tick independently and hand batches
//! over a bounded mpsc channel, so a report cycle can never drain a buffer
//! the collect cycle is still writing. A full queue drops the newest sample
//! instead of stalling the sampler; a network failure is logged and the
//! next tick simply tries again.

use std::collections::hash_map::Entry;
use std::collections::HashMap;
use std::time::Duration;

use tokio::sync::mpsc;
use tokio::time;

use vitals_core::{Metric, MetricPayload, MetricValue, Result, VitalsError};

use crate::collect::Collector;
use crate::config::AgentConfig;

/// Sampled-batch queue depth between the two loops.
const BATCH_QUEUE_DEPTH: usize = 16;

pub struct Reporter {
    cfg: AgentConfig,
    client: reqwest::Client,
}

impl Reporter {
    pub fn new(cfg: AgentConfig) -> Self {
        Self {
            cfg,
            client: reqwest::Client::new(),
        }
    }

    /// Run both periodic loops until the process exits.
    pub async fn run(self) {
        let (tx, rx) = mpsc::channel::<Vec<Metric>>(BATCH_QUEUE_DEPTH);

        let poll = Duration::from_secs(self.cfg.poll_interval);
        tokio::spawn(async move {
            let mut collector = Collector::new();
            let mut tick = time::interval(poll);
            loop {
                tick.tick().await;
                if let Err(err) = tx.try_send(collector.sample()) {
                    tracing::warn!(%err, "report queue full, dropping sample");
                }
            }
        });

        self.report_loop(rx).await;
    }

    async fn report_loop(&self, mut rx: mpsc::Receiver<Vec<Metric>>) {
        let mut tick = time::interval(Duration::from_secs(self.cfg.report_interval));
        loop {
            tick.tick().await;

            let mut pending = Vec::new();
            while let Ok(batch) = rx.try_recv() {
                pending.push(batch);
            }
            if pending.is_empty() {
                continue;
            }

            for metric in merge_batches(pending) {
                if let Err(err) = self.send(&metric).await {
                    tracing::warn!(id = %metric.id, %err, "report failed, retrying next tick");
                }
            }
        }
    }

    /// POST one metric as a structured body to the server's `/update/`.
    pub async fn send(&self, metric: &Metric) -> Result<()> {
        let url = format!("http://{}/update/", self.cfg.address);
        let resp = self
            .client
            .post(&url)
            .json(&MetricPayload::from(metric))
            .send()
            .await
            .map_err(|e| VitalsError::Transport(e.to_string()))?;

        if !resp.status().is_success() {
            return Err(VitalsError::Transport(format!(
                "server answered {}",
                resp.status()
            )));
        }
        Ok(())
    }
}

/// Merge queued batches into one report: gauges keep the latest sample,
/// counter deltas sum so no increment is lost across ticks.
pub fn merge_batches(batches: Vec<Vec<Metric>>) -> Vec<Metric> {
    let mut merged: HashMap<String, MetricValue> = HashMap::new();
    for batch in batches {
        for m in batch {
            match merged.entry(m.id) {
                Entry::Occupied(mut e) => match (e.get_mut(), m.value) {
                    (MetricValue::Counter(total), MetricValue::Counter(d)) => {
                        *total = total.wrapping_add(d);
                    }
                    (slot, value) => *slot = value,
                },
                Entry::Vacant(slot) => {
                    slot.insert(m.value);
                }
            }
        }
    }
    merged
        .into_iter()
        .map(|(id, value)| Metric { id, value })
        .collect()
}
