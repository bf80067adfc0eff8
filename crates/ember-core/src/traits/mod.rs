//! Seams between the analytical core and its collaborators.

mod clock;
mod event_store;
mod progress_store;
mod text_generator;

pub use clock::{Clock, FixedClock, SystemClock};
pub use event_store::IEventStore;
pub use progress_store::IProgressStore;
pub use text_generator::ITextGenerator;
