use shared::metrics_defs::{MetricDef, MetricType};

pub const REQUEST_DURATION: MetricDef = MetricDef {
    name: "request.duration",
    metric_type: MetricType::Histogram,
    description: "Request duration in seconds. Tagged with status.",
};

pub const DSN_RESOLVED: MetricDef = MetricDef {
    name: "dsn.resolved",
    metric_type: MetricType::Counter,
    description: "Number of DSN resolutions. Tagged with outcome: ok, legacy, missing_credential, missing_project_id.",
};

pub const ALL_METRICS: &[MetricDef] = &[REQUEST_DURATION, DSN_RESOLVED];
