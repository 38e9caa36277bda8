//! Adapter utilities for the `scrollpager` crate.
//!
//! The `scrollpager` crate is UI-agnostic and focuses on the core load state
//! machine. This crate provides small, framework-neutral helpers commonly
//! needed by adapters:
//!
//! - A view-lifecycle controller (attach on display, tear down on removal)
//! - Query tracking that resets the pager on filter/sort/search changes while
//!   ignoring pagination-only changes
//! - The page-fetch strategy trait a host view delegates to, with its error type
//! - A package-level configuration surface with per-collection overrides
//!
//! This crate is intentionally framework-agnostic (no DOM/ratatui/egui bindings).
#![cfg_attr(not(feature = "std"), no_std)]
#![forbid(unsafe_code)]

extern crate alloc;

#[cfg(test)]
extern crate std;

#[macro_use]
mod macros;

mod config;
mod controller;
mod fetch;
mod query;


pub use config::{ScrollConfig, ScrollSettings};
pub use controller::Controller;
pub use fetch::{FetchError, PageFetcher, PageRequest};
pub use query::{QueryParams, QuerySignature};
