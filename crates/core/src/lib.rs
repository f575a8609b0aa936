//! Core library for tweetfmt
//!
//! This crate implements the **Functional Core** of the tweetfmt application,
//! following the Functional Core - Imperative Shell architectural pattern.
//!
//! - **`tweetfmt_core`** (this crate): pure transformation functions with
//!   zero I/O
//! - **`tweetfmt`**: file reads/writes and orchestration (the Imperative
//!   Shell)
//!
//! # Module Organization
//!
//! - [`tweet`]: wire-format and validated tweet records
//! - [`render`]: timestamp normalization and text block rendering
//!
//! Every function here is deterministic and side-effect free, so the whole
//! rendering pipeline can be tested with fixture data and no mocking.

pub mod render;
pub mod tweet;
