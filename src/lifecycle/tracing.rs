//! # Observability & Tracing
//!
//! [`setup_tracing`] initializes structured logging with the `tracing` crate for the whole
//! fleet.
//!
//! ## Configuration
//!
//! `RUST_LOG` wins when set; otherwise the filter from
//! [`SystemConfig::log_filter`](crate::config::SystemConfig) (`FLOTA_LOG`, default `info`)
//! is used. Output is compact and hides module paths (`with_target(false)`): actors log
//! an `entity_type` field instead.
//!
//! ```bash
//! # Commits and rejections
//! RUST_LOG=info cargo run
//!
//! # Full payloads at every client entry point
//! RUST_LOG=debug cargo run
//!
//! # Only the framework's actor loops
//! RUST_LOG=actor_framework=debug cargo run
//! ```
//!
//! ## What Gets Traced
//!
//! - **Actor lifecycle**: `Actor started` / `Shutdown` with the final table size
//! - **Entity operations**: `Created`, `Updated`, `Deleted`, `Action ok`, and a `warn` with
//!   the error for every rejected request
//! - **Assignments**: `Linked` / `Unlinked` on the vehicle, `Assigned` on the pedido
//! - **Audit**: one `Audit record appended` per successful mutation, inside the span of the
//!   client or service call that caused it
//!
//! ```text
//! INFO assign_driver_and_vehicle: Action ok entity_type="Conductor" id=1
//! INFO assign_driver_and_vehicle:record: Audit record appended entidad=Pedido subject_id=1 record_id=2
//! INFO assign_driver_and_vehicle: Assigned pedido_id=1 conductor_id=1 vehiculo_id=1 estado=ASIGNADO
//! ```
use tracing_subscriber::EnvFilter;

pub fn setup_tracing(default_filter: &str) {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_filter));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false) // entity_type carries the context instead
        .compact()
        .init();
}
