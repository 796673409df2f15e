//! Pipelines.
//!
//! Dictionaries are consumed as a stream of events ([handler::EventHandler]),
//! and the module provides a light [pipeline::Pipeline] trait that enables easy and flexible pipeline creation.
pub mod convert;
pub mod fanout;
pub mod handler;
#[allow(clippy::module_inception)]
pub mod pipeline;

pub use convert::Convert;
pub use fanout::{ChannelSummary, Counters, FanOut, Summary};
pub use handler::{drive, EventHandler};
pub use pipeline::Pipeline;
