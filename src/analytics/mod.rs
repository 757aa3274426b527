pub mod alerts;
pub mod holdings;
pub mod performance;
pub mod risk;

pub use alerts::{
    evaluate_alert, summarize, AlertKind, TopPerformer, TriggeredAlert, WatchlistSummary,
};
pub use holdings::{
    allocation, daily_change, net_positions, portfolio_value, Allocation, NetPosition,
};
pub use performance::{classify_performance, success_rate, PerformanceStatus};
pub use risk::{risk_metrics, RiskMetrics};
