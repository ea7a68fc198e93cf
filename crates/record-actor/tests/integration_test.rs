use record_actor::{ActorEntity, FrameworkError, ResourceClient};
use std::sync::{Arc, Barrier};
use std::time::Duration;

// --- Test Entity ---

#[derive(Clone, Debug, PartialEq)]
struct Ticket {
    id: u32,
    event: String,
    venue: String,
    seats: u32,
}

#[derive(Debug)]
struct TicketCreate {
    event: String,
    venue: String,
    seats: u32,
}

#[derive(Debug)]
struct TicketUpdate {
    venue: Option<String>,
}

#[derive(Debug)]
enum TicketAction {
    Sell,
    /// Blocks the record's actor: waits on `entered`, then on `release`.
    Hold {
        entered: Arc<Barrier>,
        release: Arc<Barrier>,
    },
}

#[derive(Debug, thiserror::Error, PartialEq)]
enum TicketError {
    #[error("event name required")]
    MissingEvent,
    #[error("sold out")]
    SoldOut,
}

impl ActorEntity for Ticket {
    type Id = u32;
    type Create = TicketCreate;
    type Update = TicketUpdate;
    type Action = TicketAction;
    type ActionResult = u32;
    type Error = TicketError;

    fn from_create_params(id: u32, params: TicketCreate) -> Result<Self, Self::Error> {
        if params.event.is_empty() {
            return Err(TicketError::MissingEvent);
        }
        Ok(Self {
            id,
            event: params.event,
            venue: params.venue,
            seats: params.seats,
        })
    }

    fn unique_key(&self) -> Option<String> {
        Some(self.event.clone())
    }

    fn on_update(&mut self, update: TicketUpdate) -> Result<(), Self::Error> {
        if let Some(venue) = update.venue {
            self.venue = venue;
        }
        Ok(())
    }

    fn handle_action(&mut self, action: TicketAction) -> Result<u32, Self::Error> {
        match action {
            TicketAction::Sell => {
                if self.seats == 0 {
                    return Err(TicketError::SoldOut);
                }
                self.seats -= 1;
                Ok(self.seats)
            }
            TicketAction::Hold { entered, release } => {
                entered.wait();
                release.wait();
                Ok(self.seats)
            }
        }
    }
}

fn ticket(event: &str, seats: u32) -> TicketCreate {
    TicketCreate {
        event: event.into(),
        venue: "Main Hall".into(),
        seats,
    }
}

// --- Tests ---

#[tokio::test]
async fn test_framework_full_lifecycle() {
    let client = ResourceClient::<Ticket>::new(10);

    // 1. Create
    let id = client.create(ticket("Opera", 2)).await.unwrap();
    assert_eq!(id, 1); // First ID should be 1

    // 2. Perform Action
    let left = client.perform_action(id, TicketAction::Sell).await.unwrap();
    assert_eq!(left, 1);

    // 3. Update leaves untouched fields alone
    let updated = client
        .update(
            id,
            TicketUpdate {
                venue: Some("Annex".into()),
            },
        )
        .await
        .unwrap();
    assert_eq!(updated.venue, "Annex");
    assert_eq!(updated.event, "Opera");
    assert_eq!(updated.seats, 1);

    // 4. Reads are stable without intervening writes
    let first = client.get(id).await.unwrap().unwrap();
    let second = client.get(id).await.unwrap().unwrap();
    assert_eq!(first, second);

    // 5. Delete
    client.delete(id).await.unwrap();
    assert!(client.get(id).await.unwrap().is_none());
    assert!(matches!(
        client.delete(id).await,
        Err(FrameworkError::NotFound(_))
    ));
    assert!(matches!(
        client.perform_action(id, TicketAction::Sell).await,
        Err(FrameworkError::NotFound(_))
    ));
}

#[tokio::test]
async fn test_unique_key_is_enforced_until_delete() {
    let client = ResourceClient::<Ticket>::new(10);

    let id = client.create(ticket("Ballet", 5)).await.unwrap();
    let err = client.create(ticket("Ballet", 1)).await.unwrap_err();
    assert!(matches!(err, FrameworkError::Conflict(key) if key == "Ballet"));
    assert_eq!(client.len().await, 1);

    client.delete(id).await.unwrap();
    let again = client.create(ticket("Ballet", 1)).await.unwrap();
    assert_ne!(again, id, "ids are never reused");
}

#[tokio::test]
async fn test_entity_errors_are_recoverable() {
    let client = ResourceClient::<Ticket>::new(10);

    let err = client.create(ticket("", 1)).await.unwrap_err();
    assert_eq!(
        err.downcast_entity::<TicketError>().unwrap(),
        TicketError::MissingEvent
    );

    let id = client.create(ticket("Jazz", 0)).await.unwrap();
    let err = client
        .perform_action(id, TicketAction::Sell)
        .await
        .unwrap_err();
    assert_eq!(
        err.downcast_entity::<TicketError>().unwrap(),
        TicketError::SoldOut
    );
}

#[tokio::test]
async fn test_find_filters_snapshots() {
    let client = ResourceClient::<Ticket>::new(10);
    client.create(ticket("Opera", 0)).await.unwrap();
    client.create(ticket("Ballet", 3)).await.unwrap();
    client.create(ticket("Jazz", 7)).await.unwrap();

    let available = client.find(|t| t.seats > 0).await.unwrap();
    let mut names: Vec<_> = available.into_iter().map(|t| t.event).collect();
    names.sort();
    assert_eq!(names, vec!["Ballet", "Jazz"]);

    assert!(client.find(|t| t.seats > 100).await.unwrap().is_empty());
    assert_eq!(client.list().await.unwrap().len(), 3);
}

#[tokio::test(flavor = "multi_thread", worker_threads = 4)]
async fn test_concurrent_sales_across_records() {
    let client = ResourceClient::<Ticket>::new(4);
    let a = client.create(ticket("A", 25)).await.unwrap();
    let b = client.create(ticket("B", 5)).await.unwrap();

    let mut tasks = Vec::new();
    for i in 0..60 {
        let client = client.clone();
        let id = if i % 2 == 0 { a } else { b };
        tasks.push(tokio::spawn(async move {
            client.perform_action(id, TicketAction::Sell).await
        }));
    }

    let mut sold = 0;
    for task in tasks {
        if task.await.unwrap().is_ok() {
            sold += 1;
        }
    }

    assert_eq!(sold, 30);
    assert_eq!(client.get(a).await.unwrap().unwrap().seats, 0);
    assert_eq!(client.get(b).await.unwrap().unwrap().seats, 0);
}

#[tokio::test(flavor = "multi_thread", worker_threads = 4)]
async fn test_busy_record_does_not_block_others() {
    let client = ResourceClient::<Ticket>::new(4);
    let a = client.create(ticket("A", 1)).await.unwrap();
    let b = client.create(ticket("B", 1)).await.unwrap();

    let entered = Arc::new(Barrier::new(2));
    let release = Arc::new(Barrier::new(2));
    let held = {
        let client = client.clone();
        let action = TicketAction::Hold {
            entered: entered.clone(),
            release: release.clone(),
        };
        tokio::spawn(async move { client.perform_action(a, action).await })
    };

    // A's actor is now inside its handler and stays there until released.
    tokio::task::spawn_blocking(move || entered.wait()).await.unwrap();

    let left = tokio::time::timeout(
        Duration::from_secs(2),
        client.perform_action(b, TicketAction::Sell),
    )
    .await
    .expect("B was delayed by A")
    .unwrap();
    assert_eq!(left, 0);
    assert_eq!(client.get(b).await.unwrap().unwrap().seats, 0);
    assert!(!held.is_finished());

    tokio::task::spawn_blocking(move || release.wait()).await.unwrap();
    assert_eq!(held.await.unwrap().unwrap(), 1);
}

#[tokio::test]
async fn test_zero_buffer_size_still_accepts_records() {
    let client = ResourceClient::<Ticket>::new(0);
    let id = client.create(ticket("Opera", 1)).await.unwrap();
    assert_eq!(client.perform_action(id, TicketAction::Sell).await.unwrap(), 0);
}
