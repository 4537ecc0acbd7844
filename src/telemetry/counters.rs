//! Sizing counters
//!
//! Emitted through the `metrics` facade; without an installed recorder these
//! calls do nothing.

/// Counter metric types
#[derive(Debug, Clone, Copy)]
pub enum CounterMetric {
    /// Resize plans produced
    ResizePlans,
    /// Plans pinned to the broker minimum volume
    MinVolumeFloors,
    /// Pending orders cancelled for lack of a stop loss
    OrdersCancelled,
}

impl CounterMetric {
    pub fn name(self) -> &'static str {
        match self {
            CounterMetric::ResizePlans => "chart_risk_resize_plans_total",
            CounterMetric::MinVolumeFloors => "chart_risk_min_volume_floors_total",
            CounterMetric::OrdersCancelled => "chart_risk_orders_cancelled_total",
        }
    }
}

/// Increment a counter
pub fn increment(metric: CounterMetric, value: u64) {
    metrics::counter!(metric.name()).increment(value);
}

pub(crate) fn record_plan() {
    increment(CounterMetric::ResizePlans, 1);
}

pub(crate) fn record_min_volume_floor() {
    increment(CounterMetric::MinVolumeFloors, 1);
}

pub(crate) fn record_cancelled(count: usize) {
    increment(CounterMetric::OrdersCancelled, count as u64);
}
