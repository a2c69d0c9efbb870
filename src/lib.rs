//! # Flota Pedidos
//!
//! > **Delivery orders, drivers and vehicles as resource-oriented actors.**
//!
//! Every table of the fleet (clientes, conductores, vehiculos, pedidos, usuarios and one
//! audit log per audited entity) is owned by a single [`ResourceActor`](actor_framework::ResourceActor).
//! Actors process their requests one at a time, so every rule that reads and writes the
//! same table is checked and committed without locks.
//!
//! ## 🏗️ Core Rules
//!
//! - A vehicle is linked to at most one conductor, and a conductor holds at most
//!   [`MAX_VEHICULOS_POR_CONDUCTOR`](model::MAX_VEHICULOS_POR_CONDUCTOR) vehicles. Both are
//!   enforced inside the Vehiculo actor, where the count and the link happen in one step.
//! - A pedido only moves out of `COMPLETADO` to `CANCELADO`.
//! - Every successful mutation appends exactly one audit record, written before the
//!   change is committed. A failed append fails the operation.
//! - Clientes, conductores and vehiculos referenced by a pedido cannot be deleted.
//!
//! ## 🗺️ Module Tour
//!
//! ### 1. The Data ([`model`])
//! Entities, create and patch payloads, typed ids and audit records.
//!
//! ### 2. The Actors ([`cliente_actor`], [`conductor_actor`], [`vehiculo_actor`], [`pedido_actor`], [`usuario_actor`], [`audit_actor`])
//! [`ActorEntity`](actor_framework::ActorEntity) implementations. Validation, audit and
//! cross-actor calls all happen in the entity hooks.
//!
//! ### 3. The Interface ([`clients`], [`services`])
//! Clients wrap the generic `ResourceClient` per entity. Services resolve the acting user
//! through an [`EditorResolver`](services::EditorResolver) and call the clients.
//!
//! ### 4. The Orchestrator ([`lifecycle`])
//! [`FleetSystem`](lifecycle::FleetSystem) starts every actor, wires their contexts and
//! shuts them down in dependency order.
//!
//! ## 🚀 Quick Start
//!
//! ```bash
//! # Run the demo with info logs
//! RUST_LOG=info cargo run
//!
//! # Run the tests
//! cargo test
//! ```

pub mod assignment;
pub mod audit_actor;
pub mod cliente_actor;
pub mod clients;
pub mod conductor_actor;
pub mod config;
pub mod error;
pub mod lifecycle;
pub mod model;
pub mod pedido_actor;
pub mod services;
pub mod usuario_actor;
pub mod vehiculo_actor;

pub use config::SystemConfig;
pub use error::FleetError;
pub use lifecycle::FleetSystem;
