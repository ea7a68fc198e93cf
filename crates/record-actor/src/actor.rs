//! # Record Actor
//!
//! This module defines the [`RecordActor`], the task that exclusively owns the live state of
//! one record, and the [`RecordHandle`] used to reach it.
//!
//! **Concurrency Model**:
//! Every record gets its own actor. Mutations of one record are serialized by that actor's
//! mailbox, so a check-then-modify inside a hook is atomic with respect to every other
//! caller. Mutations of different records run on different tasks and never wait for each
//! other. After each committed change the actor publishes a clone of the new state on a
//! `watch` channel, so readers see the latest committed snapshot without entering the mailbox.

use crate::entity::ActorEntity;
use crate::error::FrameworkError;
use crate::message::{RecordRequest, Response};
use tokio::sync::{mpsc, oneshot, watch};
use tracing::{debug, info, warn};

/// Short type name used as the `entity_type` tracing field (e.g. "Book").
pub(crate) fn entity_type<T>() -> &'static str {
    std::any::type_name::<T>()
        .split("::")
        .last()
        .unwrap_or("Unknown")
}

/// The actor that owns one record.
///
/// Created by [`RecordActor::new`] together with its [`RecordHandle`]; the caller spawns
/// [`RecordActor::run`] on the runtime. The actor stops after a `Delete` request, or when
/// every handle has been dropped.
pub struct RecordActor<T: ActorEntity> {
    id: T::Id,
    state: T,
    receiver: mpsc::Receiver<RecordRequest<T>>,
    publisher: watch::Sender<T>,
}

/// Cloneable reference to a running [`RecordActor`].
///
/// Holds the mailbox sender for mutations and a `watch` receiver for snapshots.
#[derive(Clone)]
pub struct RecordHandle<T: ActorEntity> {
    id: T::Id,
    sender: mpsc::Sender<RecordRequest<T>>,
    snapshot: watch::Receiver<T>,
}

impl<T: ActorEntity> RecordActor<T> {
    /// Creates the actor for an already constructed record.
    ///
    /// # Arguments
    ///
    /// * `id` - The record's ID, used for logging and not-found errors.
    /// * `state` - The initial committed state.
    /// * `buffer_size` - Capacity of the mailbox. When it is full, senders wait.
    pub fn new(id: T::Id, state: T, buffer_size: usize) -> (Self, RecordHandle<T>) {
        let (sender, receiver) = mpsc::channel(buffer_size);
        let (publisher, snapshot) = watch::channel(state.clone());
        let actor = Self {
            id: id.clone(),
            state,
            receiver,
            publisher,
        };
        let handle = RecordHandle {
            id,
            sender,
            snapshot,
        };
        (actor, handle)
    }

    /// Runs the actor's loop, processing one request at a time until the record is deleted
    /// or the mailbox closes.
    pub async fn run(mut self) {
        let entity_type = entity_type::<T>();
        let id = self.id.clone();
        debug!(entity_type, %id, "Record actor started");

        let mut deleted = false;
        while let Some(msg) = self.receiver.recv().await {
            if deleted {
                // Requests that were already queued behind the Delete.
                debug!(entity_type, %id, "Rejecting request for deleted record");
                reject(msg, || FrameworkError::NotFound(id.to_string()));
                continue;
            }

            match msg {
                RecordRequest::Update { update, respond_to } => {
                    debug!(entity_type, %id, ?update, "Update");
                    let mut draft = self.state.clone();
                    let result = match draft.on_update(update) {
                        Ok(()) => {
                            self.commit(draft);
                            info!(entity_type, %id, "Updated");
                            Ok(self.state.clone())
                        }
                        Err(e) => {
                            warn!(entity_type, %id, error = %e, "Update failed");
                            Err(FrameworkError::EntityError(Box::new(e)))
                        }
                    };
                    let _ = respond_to.send(result);
                }
                RecordRequest::Action { action, respond_to } => {
                    debug!(entity_type, %id, ?action, "Action");
                    let mut draft = self.state.clone();
                    let result = match draft.handle_action(action) {
                        Ok(outcome) => {
                            self.commit(draft);
                            info!(entity_type, %id, "Action ok");
                            Ok(outcome)
                        }
                        Err(e) => {
                            warn!(entity_type, %id, error = %e, "Action failed");
                            Err(FrameworkError::EntityError(Box::new(e)))
                        }
                    };
                    let _ = respond_to.send(result);
                }
                RecordRequest::Delete { respond_to } => {
                    self.state.on_delete();
                    deleted = true;
                    self.receiver.close();
                    info!(entity_type, %id, "Deleted");
                    let _ = respond_to.send(Ok(self.state.clone()));
                }
            }
        }

        debug!(entity_type, %id, "Record actor stopped");
    }

    fn commit(&mut self, next: T) {
        self.state = next;
        self.publisher.send_replace(self.state.clone());
    }
}

fn reject<T: ActorEntity>(msg: RecordRequest<T>, err: impl Fn() -> FrameworkError) {
    match msg {
        RecordRequest::Update { respond_to, .. } => {
            let _ = respond_to.send(Err(err()));
        }
        RecordRequest::Action { respond_to, .. } => {
            let _ = respond_to.send(Err(err()));
        }
        RecordRequest::Delete { respond_to } => {
            let _ = respond_to.send(Err(err()));
        }
    }
}

impl<T: ActorEntity> RecordHandle<T> {
    /// The ID of the record this handle points at.
    pub fn id(&self) -> &T::Id {
        &self.id
    }

    /// Latest committed state. Never waits on the actor.
    pub fn snapshot(&self) -> T {
        self.snapshot.borrow().clone()
    }

    pub async fn update(&self, update: T::Update) -> Result<T, FrameworkError> {
        self.request(|respond_to| RecordRequest::Update { update, respond_to })
            .await
    }

    pub async fn perform_action(
        &self,
        action: T::Action,
    ) -> Result<T::ActionResult, FrameworkError> {
        self.request(|respond_to| RecordRequest::Action { action, respond_to })
            .await
    }

    /// Asks the actor to stop. Replies with the record's final state.
    pub async fn delete(&self) -> Result<T, FrameworkError> {
        self.request(|respond_to| RecordRequest::Delete { respond_to })
            .await
    }

    async fn request<R>(
        &self,
        build: impl FnOnce(Response<R>) -> RecordRequest<T>,
    ) -> Result<R, FrameworkError> {
        let (respond_to, response) = oneshot::channel();
        // A closed mailbox means the record has been deleted.
        self.sender
            .send(build(respond_to))
            .await
            .map_err(|_| FrameworkError::NotFound(self.id.to_string()))?;
        response.await.map_err(|_| FrameworkError::ActorDropped)?
    }
}
