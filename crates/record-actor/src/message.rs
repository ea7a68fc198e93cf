//! # Record Messages
//!
//! Message types sent from a [`ResourceClient`](crate::ResourceClient) to the
//! [`RecordActor`](crate::RecordActor) that owns one record.
//!
//! Only mutations travel through the mailbox. Reads never do: they use the snapshot the
//! actor publishes after every committed change (see [`RecordHandle`](crate::RecordHandle)).

use crate::entity::ActorEntity;
use crate::error::FrameworkError;
use tokio::sync::oneshot;

/// Type alias for the one-shot response channel used by record actors.
pub type Response<T> = oneshot::Sender<Result<T, FrameworkError>>;

/// Mutation requests handled sequentially by a single record's actor.
///
/// - **Update**: partial update through [`ActorEntity::on_update`]; replies with the
///   committed record.
/// - **Action**: custom operation through [`ActorEntity::handle_action`].
/// - **Delete**: drains nothing further; replies with the final state and stops the actor.
#[derive(Debug)]
pub enum RecordRequest<T: ActorEntity> {
    Update {
        update: T::Update,
        respond_to: Response<T>,
    },
    Action {
        action: T::Action,
        respond_to: Response<T::ActionResult>,
    },
    Delete {
        respond_to: Response<T>,
    },
}
