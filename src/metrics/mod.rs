// Private module declaration
mod server;

use prometheus::{HistogramOpts, HistogramVec, IntCounter, IntCounterVec, Opts, Registry};

// Re-export for public API
pub use server::start_metrics_server;

// ============================================================================
// Metrics Module - Prometheus metrics for the order workflow
// ============================================================================
//
// Provides metrics for:
// - Orders created
// - Rejected requests, by failure reason
// - Status changes, by source and target status
// - Operation latency
//
// All metrics are registered with Prometheus and can be scraped via /metrics
// ============================================================================

pub struct Metrics {
    registry: Registry,

    pub orders_created: IntCounter,
    pub order_requests_rejected: IntCounterVec,
    pub order_status_changes: IntCounterVec,
    pub operation_duration: HistogramVec,
}

impl Metrics {
    pub fn new() -> anyhow::Result<Self> {
        let registry = Registry::new();

        let orders_created = IntCounter::new("orders_created_total", "Total orders created")?;
        registry.register(Box::new(orders_created.clone()))?;

        let order_requests_rejected = IntCounterVec::new(
            Opts::new("order_requests_rejected_total", "Total order requests rejected"),
            &["operation", "reason"],
        )?;
        registry.register(Box::new(order_requests_rejected.clone()))?;

        let order_status_changes = IntCounterVec::new(
            Opts::new("order_status_changes_total", "Total order status changes"),
            &["from", "to"],
        )?;
        registry.register(Box::new(order_status_changes.clone()))?;

        let operation_duration = HistogramVec::new(
            HistogramOpts::new("order_operation_duration_seconds", "Order operation duration")
                .buckets(vec![0.0005, 0.001, 0.005, 0.01, 0.05, 0.1, 0.5, 1.0]),
            &["operation"],
        )?;
        registry.register(Box::new(operation_duration.clone()))?;

        Ok(Self {
            registry,
            orders_created,
            order_requests_rejected,
            order_status_changes,
            operation_duration,
        })
    }

    /// Get the Prometheus registry for exposing metrics via HTTP
    pub fn registry(&self) -> &Registry {
        &self.registry
    }

    pub fn record_order_created(&self) {
        self.orders_created.inc();
    }

    pub fn record_rejection(&self, operation: &str, reason: &str) {
        self.order_requests_rejected.with_label_values(&[operation, reason]).inc();
    }

    pub fn record_status_change(&self, from: &str, to: &str) {
        self.order_status_changes.with_label_values(&[from, to]).inc();
    }

    pub fn observe_duration(&self, operation: &str, duration_secs: f64) {
        self.operation_duration.with_label_values(&[operation]).observe(duration_secs);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_metrics_creation() {
        let metrics = Metrics::new().unwrap();
        // Unlabelled counters are gathered right away; vectors only after first use
        assert!(!metrics.registry.gather().is_empty());
    }

    #[test]
    fn test_record_order_created() {
        let metrics = Metrics::new().unwrap();
        metrics.record_order_created();
        metrics.record_order_created();

        assert_eq!(metrics.orders_created.get(), 2);
    }

    #[test]
    fn test_record_rejection() {
        let metrics = Metrics::new().unwrap();
        metrics.record_rejection("create", "empty_order_table");
        metrics.record_rejection("create", "missing_menus");
        metrics.record_rejection("create", "missing_menus");

        let gathered = metrics.registry.gather();
        let rejected = gathered
            .iter()
            .find(|m| m.name() == "order_requests_rejected_total")
            .unwrap();
        assert_eq!(rejected.metric.len(), 2);
        assert_eq!(
            metrics
                .order_requests_rejected
                .with_label_values(&["create", "missing_menus"])
                .get(),
            2
        );
    }

    #[test]
    fn test_record_status_change() {
        let metrics = Metrics::new().unwrap();
        metrics.record_status_change("COOKING", "MEAL");

        assert_eq!(
            metrics.order_status_changes.with_label_values(&["COOKING", "MEAL"]).get(),
            1
        );
    }

    #[test]
    fn test_observe_duration() {
        let metrics = Metrics::new().unwrap();
        metrics.observe_duration("create", 0.002);

        let histogram = metrics.operation_duration.with_label_values(&["create"]);
        assert_eq!(histogram.get_sample_count(), 1);
    }
}
