//! # Actor Framework
//!
//! Building blocks for type-safe, concurrent actor systems: one actor per resource table,
//! a uniform CRUD + Action message surface, and typed clients to talk to it. It follows a
//! **Resource-Oriented Architecture (ROA)** on top of the **Actor Model**.
//!
//! ### Resource-Oriented Architecture (ROA)
//!
//! - Standard CRUD operations on well-defined resources
//! - Predictable lifecycle hooks (`on_create`, `on_update`, `on_delete`, `handle_action`)
//! - A uniform API surface across all resource types
//!
//! ### Actor Model
//!
//! - Isolated state (no shared memory, no locks)
//! - Message-passing concurrency
//! - Sequential processing within each actor eliminates race conditions
//!
//! When resources need to interact (a delivery order pinning a vehicle, a driver linking a
//! vehicle) they communicate via **Action messages** to each other's actors instead of
//! reaching into each other's state.
//!
//! **Further Reading**:
//! - [Actor Model (Wikipedia)](https://en.wikipedia.org/wiki/Actor_model)
//! - [Actors in Rust](https://ryhl.io/blog/actors-with-tokio/) - Practical guide to implementing actors with Tokio
//!
//! ## Architecture Overview
//!
//! 1. **Entity Layer** ([`ActorEntity`]) - Your business logic and domain models
//! 2. **Runtime Layer** ([`ResourceActor`]) - Message processing and concurrency
//! 3. **Interface Layer** ([`ResourceClient`], [`ActorClient`]) - Type-safe communication
//!
//! ## Core Abstractions
//!
//! ```rust
//! use actor_framework::{ActorEntity, Filter, FrameworkError, Peers, ResourceActor};
//! use async_trait::async_trait;
//!
//! #[derive(Clone, Debug)]
//! struct Driver {
//!     id: u64,
//!     license: String,
//! }
//!
//! #[derive(Debug, thiserror::Error)]
//! enum DriverError {
//!     #[error("license already registered: {0}")]
//!     Duplicate(String),
//!     #[error(transparent)]
//!     Framework(#[from] FrameworkError),
//! }
//!
//! #[async_trait]
//! impl ActorEntity for Driver {
//!     type Id = u64;
//!     type Create = String;
//!     type Update = String;
//!     type Delete = ();
//!     type Action = ();
//!     type ActionResult = ();
//!     type Context = ();
//!     type Error = DriverError;
//!
//!     async fn on_create(id: u64, license: String, peers: &Peers<'_, Self>, _: &()) -> Result<Self, DriverError> {
//!         if peers.find(|d| d.license == license).is_some() {
//!             return Err(DriverError::Duplicate(license));
//!         }
//!         Ok(Self { id, license })
//!     }
//!
//!     async fn on_update(&mut self, license: String, _: &Peers<'_, Self>, _: &()) -> Result<(), DriverError> {
//!         self.license = license;
//!         Ok(())
//!     }
//!
//!     async fn handle_action(&mut self, _: (), _: &Peers<'_, Self>, _: &()) -> Result<(), DriverError> {
//!         Ok(())
//!     }
//! }
//!
//! #[tokio::main]
//! async fn main() {
//!     let (actor, client) = ResourceActor::<Driver>::new(10);
//!     tokio::spawn(actor.run(()));
//!
//!     let driver = client.create("B-1001".into()).await.unwrap();
//!     assert!(client.create("B-1001".into()).await.is_err());
//!
//!     let found = client.list(Filter::new(|d: &Driver| d.license.starts_with("B-"))).await.unwrap();
//!     assert_eq!(found.len(), 1);
//!     assert_eq!(found[0].id, driver.id);
//! }
//! ```
//!
//! ## Context Injection Pattern
//!
//! Dependencies are injected at **runtime** via `run(context)`, not at construction time, so
//! every actor can be created first and wired afterwards. A context is usually a struct of
//! the other actors' clients. Keep the resulting dependency graph acyclic: an actor that
//! awaits a reply from an actor that is itself waiting on it will stall both.
//!
//! ## Concurrency Model
//!
//! - Each actor runs in its own Tokio task
//! - Messages are processed **sequentially** within an actor
//! - Multiple actors run in **parallel**
//! - Dropping every client closes the channel and ends the actor's loop
//!
//! ## Testing
//!
//! [`mock::MockClient`] hands out a real [`ResourceClient`] answered from scripted
//! expectations, so an actor can be tested against mocked dependencies. See the [`mock`]
//! module.

pub mod actor;
pub mod client;
pub mod client_trait;
pub mod entity;
pub mod error;
pub mod message;
pub mod mock;
pub mod peers;

// Re-export core types for convenience
pub use actor::ResourceActor;
pub use client::ResourceClient;
pub use client_trait::ActorClient;
pub use entity::ActorEntity;
pub use error::FrameworkError;
pub use message::{Filter, ResourceRequest, Response};
pub use peers::Peers;
