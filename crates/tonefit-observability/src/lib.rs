//! # tonefit-observability
//!
//! Subscriber setup and the structured events emitted at degradation points
//! and on feedback writes.

pub mod tracing_setup;

pub use tracing_setup::{events, init_from_config, init_tracing, try_init_with_filter};
