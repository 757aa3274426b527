use metrics::{counter, gauge};
use metrics_exporter_prometheus::{PrometheusBuilder, PrometheusHandle};

/// Install the Prometheus exporter and register all application metrics.
/// Returns a `PrometheusHandle` whose `render()` method produces the
/// text/plain Prometheus scrape payload.
///
/// Only one global recorder can exist per process; when one is already
/// installed (tests building several apps in-process) this falls back to a
/// detached recorder whose handle still renders.
pub fn init_metrics() -> PrometheusHandle {
    let handle = match PrometheusBuilder::new().install_recorder() {
        Ok(handle) => handle,
        Err(_) => PrometheusBuilder::new().build_recorder().handle(),
    };

    // Pre-register counters so they appear even before the first increment.
    counter!("watchlist_items_added").absolute(0);
    counter!("watchlist_items_removed").absolute(0);
    counter!("alerts_triggered_total").absolute(0);
    counter!("dashboard_requests_total").absolute(0);

    // Pre-register gauges at zero.
    gauge!("seeded_stocks").set(0.0);

    handle
}
