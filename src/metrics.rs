//! Prometheus request metrics: a middleware that records status and duration
//! of every API request and the `/metrics` endpoint exposing them.

use std::time::{Duration, Instant};

use actix_web::body::MessageBody;
use actix_web::dev::{ServiceRequest, ServiceResponse};
use actix_web::http::StatusCode;
use actix_web::middleware::Next;
use actix_web::{Error, HttpResponse, Responder, get, web};
use prometheus::{HistogramOpts, HistogramVec, Registry, TextEncoder};

/// Request duration histogram labelled by response status.
#[derive(Clone)]
pub struct RequestMetrics {
    registry: Registry,
    requests: HistogramVec,
}

impl RequestMetrics {
    pub fn new() -> prometheus::Result<Self> {
        let requests = HistogramVec::new(
            HistogramOpts::new("request_duration_seconds", "Request status and duration")
                .namespace("app")
                .subsystem("http"),
            &["status"],
        )?;

        let registry = Registry::new();
        registry.register(Box::new(requests.clone()))?;

        Ok(Self { registry, requests })
    }

    pub fn observe(&self, status: StatusCode, elapsed: Duration) {
        self.requests
            .with_label_values(&[status.as_str()])
            .observe(elapsed.as_secs_f64());
    }

    /// Render every registered metric in the Prometheus text format.
    pub fn render(&self) -> prometheus::Result<String> {
        TextEncoder::new().encode_to_string(&self.registry.gather())
    }
}

/// Middleware recording each request into the `RequestMetrics` app data.
pub async fn track_requests(
    req: ServiceRequest,
    next: Next<impl MessageBody>,
) -> Result<ServiceResponse<impl MessageBody>, Error> {
    let metrics = req.app_data::<web::Data<RequestMetrics>>().cloned();
    let started = Instant::now();

    let result = next.call(req).await;

    if let Some(metrics) = metrics {
        let status = match &result {
            Ok(response) => response.status(),
            Err(err) => err.as_response_error().status_code(),
        };
        metrics.observe(status, started.elapsed());
    }

    result
}

#[get("/metrics")]
pub async fn show_metrics(metrics: web::Data<RequestMetrics>) -> impl Responder {
    match metrics.render() {
        Ok(body) => HttpResponse::Ok()
            .content_type(prometheus::TEXT_FORMAT)
            .body(body),
        Err(err) => {
            log::error!("Failed to encode metrics: {err}");
            HttpResponse::InternalServerError().finish()
        }
    }
}
