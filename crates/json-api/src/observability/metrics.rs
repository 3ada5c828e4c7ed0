//! Prometheus metrics collection and exposition endpoint.

use std::sync::OnceLock;

use prometheus::{
    Encoder, HistogramOpts, HistogramVec, IntCounterVec, IntGauge, Opts, Registry, TextEncoder,
};
use salvo::{
    Request, Response, handler,
    http::{
        StatusCode,
        header::{CONTENT_TYPE, HeaderValue},
    },
};
use tracing::error;

const DURATION_BUCKETS: [f64; 13] = [
    0.001, 0.0025, 0.005, 0.01, 0.025, 0.05, 0.1, 0.25, 0.5, 1.0, 2.5, 5.0, 10.0,
];

#[derive(Debug)]
struct HttpMetrics {
    registry: Registry,
    requests_total: IntCounterVec,
    request_duration_seconds: HistogramVec,
    requests_in_flight: IntGauge,
    checkouts_total: IntCounterVec,
}

static HTTP_METRICS: OnceLock<Option<HttpMetrics>> = OnceLock::new();

/// Result of a checkout attempt, as exported in `bazaar_json_checkouts_total`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum CheckoutOutcome {
    Completed,
    Rejected,
    PaymentFailed,
    Failed,
}

impl CheckoutOutcome {
    fn as_label(self) -> &'static str {
        match self {
            Self::Completed => "completed",
            Self::Rejected => "rejected",
            Self::PaymentFailed => "payment_failed",
            Self::Failed => "failed",
        }
    }
}

#[derive(Debug)]
pub(super) struct InFlightRequestGuard {
    tracked: bool,
}

impl InFlightRequestGuard {
    pub(super) fn track() -> Self {
        let Some(metrics) = metrics() else {
            return Self { tracked: false };
        };

        metrics.requests_in_flight.inc();

        Self { tracked: true }
    }
}

impl Drop for InFlightRequestGuard {
    fn drop(&mut self) {
        if self.tracked
            && let Some(metrics) = metrics()
        {
            metrics.requests_in_flight.dec();
        }
    }
}

pub(super) fn observe_request(method: &str, route: &str, status_code: u16, duration_seconds: f64) {
    let Some(metrics) = metrics() else {
        return;
    };

    let status_code_label = status_code.to_string();

    metrics
        .requests_total
        .with_label_values(&[method, route, status_class(status_code), &status_code_label])
        .inc();

    metrics
        .request_duration_seconds
        .with_label_values(&[method, route])
        .observe(duration_seconds);
}

/// Count a finished checkout attempt.
pub(crate) fn record_checkout(outcome: CheckoutOutcome) {
    if let Some(metrics) = metrics() {
        metrics
            .checkouts_total
            .with_label_values(&[outcome.as_label()])
            .inc();
    }
}

#[handler]
pub(crate) async fn metrics_handler(_req: &mut Request, res: &mut Response) {
    let Some(metrics) = metrics() else {
        res.status_code(StatusCode::INTERNAL_SERVER_ERROR);
        return;
    };

    let encoder = TextEncoder::new();

    let mut encoded = Vec::new();

    if let Err(source) = encoder.encode(&metrics.registry.gather(), &mut encoded) {
        error!("failed to encode metrics response: {source}");
        res.status_code(StatusCode::INTERNAL_SERVER_ERROR);

        return;
    }

    match HeaderValue::from_str(encoder.format_type()) {
        Ok(content_type) => {
            res.headers_mut().insert(CONTENT_TYPE, content_type);
        }
        Err(source) => {
            error!("failed to encode metrics content type header: {source}");
            res.status_code(StatusCode::INTERNAL_SERVER_ERROR);

            return;
        }
    }

    res.render(String::from_utf8_lossy(&encoded).into_owned());
}

fn metrics() -> Option<&'static HttpMetrics> {
    HTTP_METRICS
        .get_or_init(|| match build_metrics() {
            Ok(metrics) => Some(metrics),
            Err(source) => {
                error!("failed to build metrics registry: {source}");
                None
            }
        })
        .as_ref()
}

fn build_metrics() -> Result<HttpMetrics, prometheus::Error> {
    let registry = Registry::new();

    let requests_total = IntCounterVec::new(
        Opts::new(
            "bazaar_json_http_requests_total",
            "Total HTTP requests partitioned by method, route, status class, and status code.",
        ),
        &["method", "route", "status_class", "status_code"],
    )?;

    let request_duration_seconds = HistogramVec::new(
        HistogramOpts::new(
            "bazaar_json_http_request_duration_seconds",
            "HTTP request duration in seconds partitioned by method and route.",
        )
        .buckets(DURATION_BUCKETS.to_vec()),
        &["method", "route"],
    )?;

    let requests_in_flight = IntGauge::with_opts(Opts::new(
        "bazaar_json_http_requests_in_flight",
        "Current number of in-flight HTTP requests.",
    ))?;

    let checkouts_total = IntCounterVec::new(
        Opts::new(
            "bazaar_json_checkouts_total",
            "Checkout attempts partitioned by outcome.",
        ),
        &["outcome"],
    )?;

    registry.register(Box::new(requests_total.clone()))?;
    registry.register(Box::new(request_duration_seconds.clone()))?;
    registry.register(Box::new(requests_in_flight.clone()))?;
    registry.register(Box::new(checkouts_total.clone()))?;

    Ok(HttpMetrics {
        registry,
        requests_total,
        request_duration_seconds,
        requests_in_flight,
        checkouts_total,
    })
}

fn status_class(status_code: u16) -> &'static str {
    match status_code {
        100..=199 => "1xx",
        200..=299 => "2xx",
        300..=399 => "3xx",
        400..=499 => "4xx",
        500..=599 => "5xx",
        _ => "other",
    }
}

#[cfg(test)]
mod tests {
    use salvo::{
        Router, Service,
        test::{ResponseExt, TestClient},
    };
    use testresult::TestResult;

    use super::*;

    #[tokio::test]
    async fn metrics_endpoint_exposes_http_and_checkout_metrics() -> TestResult {
        observe_request("GET", "/products/{id}", 200, 0.042);
        observe_request("POST", "/carts/{id}/checkout", 502, 2.1);
        record_checkout(CheckoutOutcome::Completed);
        record_checkout(CheckoutOutcome::PaymentFailed);

        let service =
            Service::new(Router::new().push(Router::with_path("metrics").get(metrics_handler)));

        let response = TestClient::get("http://example.com/metrics")
            .send(&service)
            .await
            .take_string()
            .await?;

        for name in [
            "bazaar_json_http_requests_total",
            "bazaar_json_http_request_duration_seconds",
            "bazaar_json_http_requests_in_flight",
            "bazaar_json_checkouts_total",
        ] {
            assert!(response.contains(name), "expected {name} in response");
        }

        assert!(
            response.contains(r#"outcome="payment_failed""#),
            "expected payment_failed checkout outcome label"
        );

        Ok(())
    }

    #[test]
    fn status_codes_group_into_classes() {
        assert_eq!(status_class(201), "2xx");
        assert_eq!(status_class(409), "4xx");
        assert_eq!(status_class(502), "5xx");
        assert_eq!(status_class(42), "other");
    }
}
