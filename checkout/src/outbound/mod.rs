//! Driven adapters implementing the domain ports.

pub mod memory;

pub use self::memory::{FailingEventSink, InMemoryCheckoutRepository, RecordingEventSink};
