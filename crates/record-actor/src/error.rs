//! # Framework Errors
//!
//! Common error type returned by [`ResourceClient`](crate::ResourceClient). Entity errors are
//! boxed into [`FrameworkError::EntityError`]; typed clients recover them with
//! [`FrameworkError::downcast_entity`].

/// Errors that can occur within the record store itself.
#[derive(Debug, thiserror::Error)]
pub enum FrameworkError {
    #[error("Actor dropped response channel")]
    ActorDropped,
    #[error("Item not found: {0}")]
    NotFound(String),
    #[error("Unique key already taken: {0}")]
    Conflict(String),
    #[error("Entity error: {0}")]
    EntityError(Box<dyn std::error::Error + Send + Sync>),
}

impl FrameworkError {
    /// Recovers the entity's own error type from an [`FrameworkError::EntityError`].
    ///
    /// Returns the original error unchanged when it is another variant or a different type.
    pub fn downcast_entity<E>(self) -> Result<E, FrameworkError>
    where
        E: std::error::Error + 'static,
    {
        match self {
            FrameworkError::EntityError(inner) => match inner.downcast::<E>() {
                Ok(e) => Ok(*e),
                Err(other) => Err(FrameworkError::EntityError(other)),
            },
            other => Err(other),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Debug, thiserror::Error, PartialEq)]
    #[error("sold out")]
    struct SoldOut;

    #[test]
    fn downcast_recovers_entity_error() {
        let err = FrameworkError::EntityError(Box::new(SoldOut));
        assert_eq!(err.downcast_entity::<SoldOut>().unwrap(), SoldOut);
    }

    #[test]
    fn downcast_leaves_other_variants_alone() {
        let err = FrameworkError::NotFound("7".into());
        match err.downcast_entity::<SoldOut>() {
            Err(FrameworkError::NotFound(id)) => assert_eq!(id, "7"),
            other => panic!("unexpected: {other:?}"),
        }

        let err = FrameworkError::EntityError(Box::new(std::io::Error::other("disk")));
        assert!(matches!(
            err.downcast_entity::<SoldOut>(),
            Err(FrameworkError::EntityError(_))
        ));
    }
}
