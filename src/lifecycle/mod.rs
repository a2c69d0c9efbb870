//! Actor lifecycle: starting, wiring and stopping the fleet, plus tracing setup.

pub mod fleet_system;
pub mod tracing;

pub use fleet_system::FleetSystem;
pub use self::tracing::setup_tracing;
