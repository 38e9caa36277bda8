//! A headless infinite-scroll pagination engine.
//!
//! For adapter-level utilities (view lifecycle, query tracking, fetch strategies,
//! per-collection configuration), see the `scrollpager-adapter` crate.
//!
//! This crate focuses on the state machine behind scroll-to-load lists: proximity
//! detection against a scrollable boundary, single-flight page loads, append-only
//! record accumulation, exhaustion tracking, and idempotent reset semantics.
//!
//! It is UI-agnostic. A TUI/GUI layer is expected to provide:
//! - scroll geometry (offset, viewport size, content size)
//! - a way to fetch one page of records
//! - notifications when the effective query (filters/sort/search) changes
#![cfg_attr(not(feature = "std"), no_std)]
#![forbid(unsafe_code)]

extern crate alloc;

#[cfg(test)]
extern crate std;

#[macro_use]
mod macros;

mod options;
mod pager;
mod state;
mod types;

#[cfg(test)]
mod tests;

pub use options::{DEFAULT_PER_PAGE, DEFAULT_THRESHOLD, OnChangeCallback, PagerOptions};
pub use pager::Pager;
pub use state::LoadState;
pub use types::{CompleteOutcome, LoadTicket, PageBatch, ScrollMetrics};
