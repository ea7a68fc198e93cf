use serde::{Deserialize, Serialize};
use std::fmt::Display;
use std::str::FromStr;

/// Type-safe identifier for Books.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct BookId(pub u32);

impl From<u32> for BookId {
    fn from(id: u32) -> Self {
        Self(id)
    }
}

impl Display for BookId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl FromStr for BookId {
    type Err = std::num::ParseIntError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        s.parse().map(Self)
    }
}

/// Represents a book in the catalog.
///
/// # Record Actor
/// This struct implements the [`ActorEntity`](record_actor::ActorEntity) trait, so every
/// `Book` is owned by its own [`RecordActor`](record_actor::RecordActor).
///
/// See [`impl ActorEntity for Book`](#impl-ActorEntity-for-Book) for details on:
/// - Creation parameters ([`BookCreate`])
/// - Update parameters ([`BookUpdate`])
/// - Custom actions ([`BookAction`](crate::catalog_actor::BookAction))
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Book {
    pub id: BookId,
    pub title: String,
    pub author: String,
    pub quantity: u32,
    pub price: f64,
    pub topic: String,
}

impl Book {
    /// Creates a new Book instance.
    ///
    /// # Arguments
    /// * `id` - Unique identifier (assigned by the record store)
    /// * `title` - Book title, unique across the catalog
    /// * `author` - Author name
    /// * `quantity` - Copies in stock
    /// * `price` - Unit price
    /// * `topic` - Classification used by topic search, may be empty
    pub fn new(
        id: BookId,
        title: impl Into<String>,
        author: impl Into<String>,
        quantity: u32,
        price: f64,
        topic: impl Into<String>,
    ) -> Self {
        Self {
            id,
            title: title.into(),
            author: author.into(),
            quantity,
            price,
            topic: topic.into(),
        }
    }

    pub fn summary(&self) -> BookSummary {
        BookSummary {
            id: self.id,
            title: self.title.clone(),
        }
    }
}

/// Payload for creating a new book.
#[derive(Debug, Clone)]
pub struct BookCreate {
    pub title: String,
    pub author: String,
    pub quantity: u32,
    pub price: f64,
    pub topic: String,
}

/// Partial update for a book. `None` means "leave as is".
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct BookUpdate {
    pub price: Option<f64>,
    pub quantity: Option<u32>,
}

/// The `{id, title}` pair returned by topic search.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BookSummary {
    pub id: BookId,
    pub title: String,
}
