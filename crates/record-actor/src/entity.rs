//! # ActorEntity Trait
//!
//! The `ActorEntity` trait is the contract every record type implements to be owned by a
//! [`RecordActor`](crate::RecordActor). It names the ID, the create/update DTOs, the custom
//! actions and the error type, and provides the hooks the actor calls while it holds
//! exclusive access to one record.
//!
//! # Hooks run against a working copy
//! `on_update` and `handle_action` are called on a clone of the committed state. The actor
//! only commits (and publishes) the clone when the hook returns `Ok`, so a hook that fails
//! halfway through never leaves a partially mutated record behind.

use std::fmt::{Debug, Display};
use std::hash::Hash;

/// Trait that any record type must implement to be managed by the record store.
///
/// Associated types keep every operation typed: a `Book` only accepts a `BookCreate`, a
/// `BookUpdate` and a `BookAction`, and the compiler rejects anything else.
pub trait ActorEntity: Clone + Send + Sync + 'static {
    /// The unique identifier for this entity.
    /// Must be convertible from u32 for automatic ID generation.
    type Id: Eq + Hash + Clone + Send + Sync + Display + Debug + From<u32>;

    /// The data required to create a new instance.
    type Create: Send + Sync + Debug;

    /// The data required to update an existing instance. Fields the caller did not send
    /// should be absent (`None`), not defaulted.
    type Update: Send + Sync + Debug;

    /// Enum representing record-specific operations (e.g. `Decrement`).
    type Action: Send + Sync + Debug;

    /// The result type returned by custom actions.
    type ActionResult: Send + Sync + Debug;

    /// The error type for this entity.
    ///
    /// One error enum per entity rather than one per action: clients match on a single
    /// type, at the cost of every action's signature admitting every variant.
    type Error: std::error::Error + Send + Sync + 'static;

    /// Construct the full entity from the assigned ID and the payload.
    fn from_create_params(id: Self::Id, params: Self::Create) -> Result<Self, Self::Error>;

    /// Key that must be unique across all live records of this type (e.g. a title).
    ///
    /// Checked once, at creation time. The default is no constraint.
    fn unique_key(&self) -> Option<String> {
        None
    }

    /// Apply a partial update to the working copy.
    fn on_update(&mut self, update: Self::Update) -> Result<(), Self::Error>;

    /// Handle a custom record-specific action against the working copy.
    fn handle_action(&mut self, action: Self::Action) -> Result<Self::ActionResult, Self::Error>;

    /// Called once, after the record has been removed from the index and before its actor
    /// stops.
    fn on_delete(&self) {}
}
