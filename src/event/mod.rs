// Event-driven recompute: imports publish a MatchEvent, subscribers react
// in the background so the import path never waits on aggregation.

pub use bus::EventBus;
pub use events::MatchEvent;
pub use h2h_subscriber::H2HSyncSubscriber;
pub use handler::{EventError, EventHandler};
pub use subscription::Subscription;

mod bus;
mod events;
mod h2h_subscriber;
mod handler;
mod subscription;
