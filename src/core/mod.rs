//! Core components of the `edgar-insiders` client.
//!
//! This module contains the foundational building blocks of the library, including:
//! - The main [`EdgarClient`] and its builder.
//! - The primary [`EdgarError`] type.
//! - The [`FilingSource`] seam the scan pipeline is written against.
//! - Internal networking (throttle, retry).

/// The main client (`EdgarClient`), builder, retry policy and throttles.
pub mod client;
/// The primary error type (`EdgarError`) for the crate.
pub mod error;
/// Service traits abstracting where filings come from.
pub mod services;

pub(crate) mod net;

// convenient re-exports so most code can just `use crate::core::EdgarClient`
pub use client::{EdgarClient, EdgarClientBuilder};
pub use error::EdgarError;
pub use services::{FilingSource, SourceFuture};
