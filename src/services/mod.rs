//! Caller-facing operations. Each takes the acting username, resolves it through the
//! injected [`EditorResolver`], and hands the work to the owning actor.

pub mod assignment_service;
pub mod editor;
pub mod order_service;
pub mod registry;

pub use assignment_service::AssignmentService;
pub use editor::{EditorResolver, SharedResolver, StaticResolver};
pub use order_service::OrderLifecycleService;
pub use registry::{ClienteService, ConductorService, VehiculoService};
