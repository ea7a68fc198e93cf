//! # Resource Client
//!
//! [`ResourceClient`] is the entry point to a collection of records. It owns the index from
//! IDs to [`RecordHandle`]s, assigns IDs, enforces unique keys and spawns one
//! [`RecordActor`] per created record.
//!
//! The index sits behind a `tokio::sync::RwLock`. Only `create` and `delete` take the write
//! lock, and only for the map edit itself. Everything else takes the read lock long enough
//! to clone a handle or copy snapshots, then talks to the record actor with no lock held.

use crate::actor::{entity_type, RecordActor, RecordHandle};
use crate::entity::ActorEntity;
use crate::error::FrameworkError;
use std::collections::HashMap;
use std::sync::Arc;
use tokio::sync::RwLock;
use tracing::{debug, info, warn};

struct Index<T: ActorEntity> {
    records: HashMap<T::Id, RecordHandle<T>>,
    unique_keys: HashMap<String, T::Id>,
    next_id: u32,
}

/// A type-safe, cloneable client for a collection of records.
///
/// * **Cloneable** – clones share the same index.
/// * **Async API** – every method resolves to `Result<…, FrameworkError>`.
/// * **Generic** – works with any entity that implements [`ActorEntity`].
pub struct ResourceClient<T: ActorEntity> {
    index: Arc<RwLock<Index<T>>>,
    buffer_size: usize,
}

impl<T: ActorEntity> Clone for ResourceClient<T> {
    fn clone(&self) -> Self {
        Self {
            index: Arc::clone(&self.index),
            buffer_size: self.buffer_size,
        }
    }
}

impl<T: ActorEntity> ResourceClient<T> {
    /// Creates an empty collection.
    ///
    /// # Arguments
    ///
    /// * `buffer_size` - Mailbox capacity of every record actor spawned by this client.
    ///   Zero is raised to 1, the smallest capacity a Tokio channel accepts.
    pub fn new(buffer_size: usize) -> Self {
        Self {
            index: Arc::new(RwLock::new(Index {
                records: HashMap::new(),
                unique_keys: HashMap::new(),
                next_id: 1,
            })),
            buffer_size: buffer_size.max(1),
        }
    }

    /// Creates a record and spawns its actor. Must be called from within a Tokio runtime.
    ///
    /// IDs come from a counter starting at 1 and are never reused, even when creation fails
    /// or the record is later deleted.
    pub async fn create(&self, params: T::Create) -> Result<T::Id, FrameworkError> {
        let entity_type = entity_type::<T>();
        debug!(entity_type, ?params, "Create");

        let mut index = self.index.write().await;
        let id = T::Id::from(index.next_id);
        index.next_id += 1;

        let item = T::from_create_params(id.clone(), params).map_err(|e| {
            warn!(entity_type, error = %e, "Create failed");
            FrameworkError::EntityError(Box::new(e))
        })?;

        let key = item.unique_key();
        if let Some(key) = &key {
            if index.unique_keys.contains_key(key) {
                warn!(entity_type, %key, "Unique key conflict");
                return Err(FrameworkError::Conflict(key.clone()));
            }
        }

        let (actor, handle) = RecordActor::new(id.clone(), item, self.buffer_size);
        tokio::spawn(actor.run());

        if let Some(key) = key {
            index.unique_keys.insert(key, id.clone());
        }
        index.records.insert(id.clone(), handle);
        info!(entity_type, %id, size = index.records.len(), "Created");
        Ok(id)
    }

    /// Latest committed snapshot of a record, or `None` if it does not exist.
    pub async fn get(&self, id: T::Id) -> Result<Option<T>, FrameworkError> {
        let index = self.index.read().await;
        let item = index.records.get(&id).map(RecordHandle::snapshot);
        debug!(entity_type = entity_type::<T>(), %id, found = item.is_some(), "Get");
        Ok(item)
    }

    /// Snapshots of every record, in no particular order.
    pub async fn list(&self) -> Result<Vec<T>, FrameworkError> {
        self.find(|_| true).await
    }

    /// Snapshots of the records matching `predicate`. An empty result is not an error.
    pub async fn find<F>(&self, predicate: F) -> Result<Vec<T>, FrameworkError>
    where
        F: Fn(&T) -> bool,
    {
        let index = self.index.read().await;
        let items: Vec<T> = index
            .records
            .values()
            .map(RecordHandle::snapshot)
            .filter(|item| predicate(item))
            .collect();
        debug!(entity_type = entity_type::<T>(), matched = items.len(), "Find");
        Ok(items)
    }

    pub async fn update(&self, id: T::Id, update: T::Update) -> Result<T, FrameworkError> {
        self.handle(&id).await?.update(update).await
    }

    pub async fn perform_action(
        &self,
        id: T::Id,
        action: T::Action,
    ) -> Result<T::ActionResult, FrameworkError> {
        self.handle(&id).await?.perform_action(action).await
    }

    /// Removes a record from the index, then stops its actor.
    ///
    /// Requests already queued in the record's mailbox are processed first; anything
    /// arriving later resolves to [`FrameworkError::NotFound`].
    pub async fn delete(&self, id: T::Id) -> Result<(), FrameworkError> {
        let entity_type = entity_type::<T>();
        let handle = {
            let mut index = self.index.write().await;
            let Some(handle) = index.records.remove(&id) else {
                warn!(entity_type, %id, "Not found");
                return Err(FrameworkError::NotFound(id.to_string()));
            };
            index.unique_keys.retain(|_, owner| *owner != id);
            debug!(entity_type, %id, size = index.records.len(), "Removed from index");
            handle
        };
        handle.delete().await.map(|_| ())
    }

    /// Number of live records.
    pub async fn len(&self) -> usize {
        self.index.read().await.records.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.len().await == 0
    }

    async fn handle(&self, id: &T::Id) -> Result<RecordHandle<T>, FrameworkError> {
        let index = self.index.read().await;
        index.records.get(id).cloned().ok_or_else(|| {
            warn!(entity_type = entity_type::<T>(), %id, "Not found");
            FrameworkError::NotFound(id.to_string())
        })
    }
}
