//! # Mock Framework & Testing Guide
//!
//! `MockClient<T>` hands out a real `ResourceClient<T>` whose requests are answered from a
//! queue of scripted expectations instead of a running actor. Use it to test an actor in
//! isolation from the actors it depends on.
//!
//! ## When to use Mocks vs Real Actors
//!
//! | Feature | MockClient | Real Actor |
//! |---------|------------|------------|
//! | **Speed** | Instant (in-memory) | Fast (but involves tokio spawn) |
//! | **Determinism** | 100% Deterministic | Subject to scheduler |
//! | **State** | No real state (expectations) | Real state management |
//! | **Use Case** | Isolating the actor under test | Testing the actor itself or full system |
//! | **Error Injection** | Easy (`return_err`) | Hard (requires specific state) |
//!
//! ## Testing Strategies
//!
//! 1. **Single actor**: spawn one `ResourceActor` with a `()` context and drive it through
//!    its client.
//! 2. **Actor with mocked dependencies**: spawn the real actor, inject clients obtained from
//!    `MockClient::client()` into its context, script what the dependencies answer, and
//!    call [`MockClient::verify`] at the end.
//! 3. **Full system**: start every actor and drive end-to-end scenarios.
//!
//! ## Failure injection
//!
//! ```rust
//! use actor_framework::mock::MockClient;
//! use actor_framework::{ActorEntity, FrameworkError, Peers};
//! use async_trait::async_trait;
//!
//! #[derive(Clone, Debug)] struct Tag { id: u64 }
//! #[derive(Debug, PartialEq, thiserror::Error)]
//! enum TagError { #[error(transparent)] Framework(#[from] FrameworkError) }
//!
//! #[async_trait]
//! impl ActorEntity for Tag {
//!     type Id = u64; type Create = (); type Update = (); type Delete = ();
//!     type Action = (); type ActionResult = (); type Context = (); type Error = TagError;
//!     async fn on_create(id: u64, _: (), _: &Peers<'_, Self>, _: &()) -> Result<Self, TagError> { Ok(Self { id }) }
//!     async fn on_update(&mut self, _: (), _: &Peers<'_, Self>, _: &()) -> Result<(), TagError> { Ok(()) }
//!     async fn handle_action(&mut self, _: (), _: &Peers<'_, Self>, _: &()) -> Result<(), TagError> { Ok(()) }
//! }
//!
//! #[tokio::main]
//! async fn main() {
//!     let mut mock = MockClient::<Tag>::new();
//!     let client = mock.client();
//!
//!     // Simulate a downstream failure
//!     mock.expect_get(1).return_err(FrameworkError::ActorClosed.into());
//!
//!     let result = client.get(1).await;
//!     assert_eq!(result.unwrap_err(), TagError::Framework(FrameworkError::ActorClosed));
//!     mock.verify();
//! }
//! ```

use crate::client::ResourceClient;
use crate::entity::ActorEntity;
use crate::message::ResourceRequest;
use std::collections::VecDeque;
use std::sync::{Arc, Mutex};
use tokio::sync::mpsc;

// =============================================================================
// EXPECTATION BUILDER API
// =============================================================================

/// A scripted answer for the next request of a given kind.
enum Expectation<T: ActorEntity> {
    Get {
        id: T::Id,
        response: Result<Option<T>, T::Error>,
    },
    List {
        response: Result<Vec<T>, T::Error>,
    },
    Count {
        response: Result<usize, T::Error>,
    },
    Create {
        response: Result<T, T::Error>,
    },
    Update {
        id: T::Id,
        response: Result<T, T::Error>,
    },
    Delete {
        id: T::Id,
        response: Result<(), T::Error>,
    },
    Action {
        id: T::Id,
        response: Result<T::ActionResult, T::Error>,
    },
}

type Queue<T> = Arc<Mutex<VecDeque<Expectation<T>>>>;

/// A mock client with expectation tracking.
///
/// Expectations are consumed in the order they were registered; a request that does not
/// match the next expectation (kind or id) panics the mock task, which surfaces in the test
/// as a dropped response channel.
///
/// ```ignore
/// let mut mock = MockClient::<Cliente>::new();
/// mock.expect_action(ClienteId(1)).return_ok(cliente);
///
/// let client = mock.client();
/// // Use client in tests...
/// mock.verify(); // Ensures all expectations were met
/// ```
pub struct MockClient<T: ActorEntity> {
    client: ResourceClient<T>,
    expectations: Queue<T>,
    _handle: tokio::task::JoinHandle<()>,
}

impl<T: ActorEntity> Default for MockClient<T> {
    fn default() -> Self {
        Self::new()
    }
}

fn next<T: ActorEntity>(queue: &Queue<T>) -> Option<Expectation<T>> {
    queue
        .lock()
        .unwrap_or_else(|poisoned| poisoned.into_inner())
        .pop_front()
}

fn push<T: ActorEntity>(queue: &Queue<T>, expectation: Expectation<T>) {
    queue
        .lock()
        .unwrap_or_else(|poisoned| poisoned.into_inner())
        .push_back(expectation);
}

impl<T: ActorEntity> MockClient<T> {
    /// Creates a new mock client with no expectations.
    pub fn new() -> Self {
        let (sender, mut receiver) = mpsc::channel::<ResourceRequest<T>>(100);
        let expectations: Queue<T> = Arc::new(Mutex::new(VecDeque::new()));
        let queue = expectations.clone();

        let handle = tokio::spawn(async move {
            while let Some(request) = receiver.recv().await {
                match (request, next(&queue)) {
                    (
                        ResourceRequest::Get { id, respond_to },
                        Some(Expectation::Get { id: expected, response }),
                    ) => {
                        assert_eq!(id, expected, "get called with unexpected id");
                        let _ = respond_to.send(response);
                    }
                    (
                        ResourceRequest::List { respond_to, .. },
                        Some(Expectation::List { response }),
                    ) => {
                        let _ = respond_to.send(response);
                    }
                    (
                        ResourceRequest::Count { respond_to, .. },
                        Some(Expectation::Count { response }),
                    ) => {
                        let _ = respond_to.send(response);
                    }
                    (
                        ResourceRequest::Create { respond_to, .. },
                        Some(Expectation::Create { response }),
                    ) => {
                        let _ = respond_to.send(response);
                    }
                    (
                        ResourceRequest::Update { id, respond_to, .. },
                        Some(Expectation::Update { id: expected, response }),
                    ) => {
                        assert_eq!(id, expected, "update called with unexpected id");
                        let _ = respond_to.send(response);
                    }
                    (
                        ResourceRequest::Delete { id, respond_to, .. },
                        Some(Expectation::Delete { id: expected, response }),
                    ) => {
                        assert_eq!(id, expected, "delete called with unexpected id");
                        let _ = respond_to.send(response);
                    }
                    (
                        ResourceRequest::Action { id, respond_to, .. },
                        Some(Expectation::Action { id: expected, response }),
                    ) => {
                        assert_eq!(id, expected, "action called with unexpected id");
                        let _ = respond_to.send(response);
                    }
                    _ => {
                        panic!("Unexpected request or expectation mismatch");
                    }
                }
            }
        });

        Self {
            client: ResourceClient::new(sender),
            expectations,
            _handle: handle,
        }
    }

    /// Returns the client for use in tests.
    pub fn client(&self) -> ResourceClient<T> {
        self.client.clone()
    }

    pub fn expect_get(&mut self, id: T::Id) -> ExpectationBuilder<T, Option<T>> {
        ExpectationBuilder::new(self, move |response| Expectation::Get { id, response })
    }

    pub fn expect_list(&mut self) -> ExpectationBuilder<T, Vec<T>> {
        ExpectationBuilder::new(self, |response| Expectation::List { response })
    }

    pub fn expect_count(&mut self) -> ExpectationBuilder<T, usize> {
        ExpectationBuilder::new(self, |response| Expectation::Count { response })
    }

    pub fn expect_create(&mut self) -> ExpectationBuilder<T, T> {
        ExpectationBuilder::new(self, |response| Expectation::Create { response })
    }

    pub fn expect_update(&mut self, id: T::Id) -> ExpectationBuilder<T, T> {
        ExpectationBuilder::new(self, move |response| Expectation::Update { id, response })
    }

    pub fn expect_delete(&mut self, id: T::Id) -> ExpectationBuilder<T, ()> {
        ExpectationBuilder::new(self, move |response| Expectation::Delete { id, response })
    }

    pub fn expect_action(&mut self, id: T::Id) -> ExpectationBuilder<T, T::ActionResult> {
        ExpectationBuilder::new(self, move |response| Expectation::Action { id, response })
    }

    /// Verifies that all expectations were met.
    pub fn verify(&self) {
        let remaining = self
            .expectations
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
            .len();
        if remaining != 0 {
            panic!("Not all expectations were met. {} remaining", remaining);
        }
    }
}

/// Completes an expectation with the value (or error) the mock should answer with.
pub struct ExpectationBuilder<T: ActorEntity, V> {
    expectations: Queue<T>,
    build: Box<dyn FnOnce(Result<V, T::Error>) -> Expectation<T> + Send>,
}

impl<T: ActorEntity, V> ExpectationBuilder<T, V> {
    fn new(
        mock: &MockClient<T>,
        build: impl FnOnce(Result<V, T::Error>) -> Expectation<T> + Send + 'static,
    ) -> Self {
        Self {
            expectations: mock.expectations.clone(),
            build: Box::new(build),
        }
    }

    /// Sets the expectation to return a successful result.
    pub fn return_ok(self, value: V) {
        push(&self.expectations, (self.build)(Ok(value)));
    }

    /// Sets the expectation to return an error.
    pub fn return_err(self, error: T::Error) {
        push(&self.expectations, (self.build)(Err(error)));
    }
}

// =============================================================================
// CHANNEL HELPERS
// =============================================================================

/// Creates a client and the raw receiver behind it, for tests that want to inspect the
/// request payloads themselves rather than script answers.
pub fn create_mock_client<T: ActorEntity>(
    buffer_size: usize,
) -> (ResourceClient<T>, mpsc::Receiver<ResourceRequest<T>>) {
    let (sender, receiver) = mpsc::channel(buffer_size);
    (ResourceClient::new(sender), receiver)
}

/// Waits for the next request and returns it if it is an Action.
pub async fn expect_action<T: ActorEntity>(
    receiver: &mut mpsc::Receiver<ResourceRequest<T>>,
) -> Option<(
    T::Id,
    T::Action,
    tokio::sync::oneshot::Sender<Result<T::ActionResult, T::Error>>,
)> {
    match receiver.recv().await {
        Some(ResourceRequest::Action {
            id,
            action,
            respond_to,
        }) => Some((id, action, respond_to)),
        _ => None,
    }
}
