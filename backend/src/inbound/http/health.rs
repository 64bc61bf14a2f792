//! Readiness and liveness probes.
//!
//! The server moves through three phases: starting until the listener is
//! bound, serving, then draining on shutdown. Readiness holds only while
//! serving; liveness fails once draining begins.

use actix_web::{HttpResponse, get, http::header, web};
use std::sync::atomic::{AtomicU8, Ordering};

const STARTING: u8 = 0;
const SERVING: u8 = 1;
const DRAINING: u8 = 2;

/// Lifecycle phase shared between the bootstrap code and the probes.
pub struct HealthState {
    phase: AtomicU8,
}

impl Default for HealthState {
    fn default() -> Self {
        Self {
            phase: AtomicU8::new(STARTING),
        }
    }
}

impl HealthState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Enter the serving phase. Has no effect once draining.
    pub fn mark_ready(&self) {
        let _ = self
            .phase
            .compare_exchange(STARTING, SERVING, Ordering::AcqRel, Ordering::Acquire);
    }

    /// Enter the draining phase.
    pub fn mark_draining(&self) {
        self.phase.store(DRAINING, Ordering::Release);
    }

    pub fn is_ready(&self) -> bool {
        self.phase.load(Ordering::Acquire) == SERVING
    }

    pub fn is_alive(&self) -> bool {
        self.phase.load(Ordering::Acquire) != DRAINING
    }
}

fn probe_response(healthy: bool) -> HttpResponse {
    let mut response = if healthy {
        HttpResponse::Ok()
    } else {
        HttpResponse::ServiceUnavailable()
    };
    response
        .insert_header((header::CACHE_CONTROL, "no-store"))
        .finish()
}

/// 200 while serving, 503 before the listener is bound or once draining.
#[utoipa::path(
    get,
    path = "/health/ready",
    tags = ["health"],
    responses(
        (status = 200, description = "Serving directory lookups"),
        (status = 503, description = "Starting or draining")
    )
)]
#[get("/health/ready")]
pub async fn ready(state: web::Data<HealthState>) -> HttpResponse {
    probe_response(state.is_ready())
}

/// 200 until draining begins.
#[utoipa::path(
    get,
    path = "/health/live",
    tags = ["health"],
    responses(
        (status = 200, description = "Process is alive"),
        (status = 503, description = "Draining")
    )
)]
#[get("/health/live")]
pub async fn live(state: web::Data<HealthState>) -> HttpResponse {
    probe_response(state.is_alive())
}
