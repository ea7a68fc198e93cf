//! # ActorClient Trait
//!
//! Common interface for entity-specific clients: default `get`, `list` and `delete` built on
//! top of a generic [`ResourceClient`], with framework errors mapped to the entity's own
//! error type.
use crate::{ActorEntity, FrameworkError, ResourceClient};
use async_trait::async_trait;

/// Trait for entity-specific clients to inherit standard read and delete operations.
///
/// # Example
///
/// ```rust
/// use record_actor::{ActorClient, ActorEntity, FrameworkError, ResourceClient};
///
/// #[derive(Clone, Debug)]
/// struct Shelf { id: u32 }
/// #[derive(Debug)] struct ShelfCreate;
/// #[derive(Debug)] struct ShelfUpdate;
/// #[derive(Debug)] enum ShelfAction {}
/// #[derive(Debug, thiserror::Error)]
/// #[error("{0}")]
/// struct ShelfError(String);
///
/// impl ActorEntity for Shelf {
///     type Id = u32;
///     type Create = ShelfCreate;
///     type Update = ShelfUpdate;
///     type Action = ShelfAction;
///     type ActionResult = ();
///     type Error = ShelfError;
///
///     fn from_create_params(id: u32, _: ShelfCreate) -> Result<Self, Self::Error> {
///         Ok(Self { id })
///     }
///     fn on_update(&mut self, _: ShelfUpdate) -> Result<(), Self::Error> { Ok(()) }
///     fn handle_action(&mut self, _: ShelfAction) -> Result<(), Self::Error> { Ok(()) }
/// }
///
/// struct ShelfClient {
///     inner: ResourceClient<Shelf>,
/// }
///
/// impl ActorClient<Shelf> for ShelfClient {
///     type Error = ShelfError;
///
///     fn inner(&self) -> &ResourceClient<Shelf> {
///         &self.inner
///     }
///
///     fn map_error(e: FrameworkError) -> Self::Error {
///         ShelfError(e.to_string())
///     }
/// }
///
/// #[tokio::main]
/// async fn main() {
///     let client = ShelfClient { inner: ResourceClient::new(8) };
///     let id = client.inner().create(ShelfCreate).await.unwrap();
///     // get() and delete() are provided automatically
///     assert!(client.get(id).await.unwrap().is_some());
///     client.delete(id).await.unwrap();
///     assert!(client.get(id).await.unwrap().is_none());
/// }
/// ```
#[async_trait]
pub trait ActorClient<T: ActorEntity>: Send + Sync {
    /// The entity-specific error type.
    type Error: Send + Sync;

    /// Access the inner generic ResourceClient.
    fn inner(&self) -> &ResourceClient<T>;

    /// Map framework errors to the entity-specific error type.
    fn map_error(e: FrameworkError) -> Self::Error;

    /// Fetch an entity by ID.
    #[tracing::instrument(skip(self))]
    async fn get(&self, id: T::Id) -> Result<Option<T>, Self::Error> {
        tracing::debug!("Sending request");
        self.inner().get(id).await.map_err(Self::map_error)
    }

    /// Fetch every entity.
    #[tracing::instrument(skip(self))]
    async fn list(&self) -> Result<Vec<T>, Self::Error> {
        tracing::debug!("Sending request");
        self.inner().list().await.map_err(Self::map_error)
    }

    /// Delete an entity by ID.
    #[tracing::instrument(skip(self))]
    async fn delete(&self, id: T::Id) -> Result<(), Self::Error> {
        tracing::debug!("Sending request");
        self.inner().delete(id).await.map_err(Self::map_error)
    }
}
