//! Game sessions: the turn state machine and what a host talks to.

mod layout;
mod message;
mod observer;
mod turn;

pub use layout::Layout;
pub use message::StatusMessage;
pub use observer::ObserverId;
pub use turn::{ActionOutcome, ActionStatus, ActorChoice, GameSession};
