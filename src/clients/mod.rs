//! Type-safe wrappers around [`ResourceClient`](actor_framework::ResourceClient).
//!
//! Each client implements [`ActorClient`](actor_framework::ActorClient) for `get` and
//! `find_all`, and adds the entity's finders and actions on top.

pub mod audit_client;
pub mod cliente_client;
pub mod conductor_client;
pub mod pedido_client;
pub mod usuario_client;
pub mod vehiculo_client;

pub use audit_client::*;
pub use cliente_client::*;
pub use conductor_client::*;
pub use pedido_client::*;
pub use usuario_client::*;
pub use vehiculo_client::*;
