//! Core library for drills
//!
//! This crate implements the **Functional Core** of the drills application,
//! following the Functional Core - Imperative Shell architectural pattern.
//!
//! # Architecture Overview
//!
//! - **`drills_core`** (this crate): Pure functions and domain types with zero I/O
//! - **`drills`**: Prompts, console output and the HTTP server (the Imperative Shell)
//!
//! Nothing in here reads stdin, prints, or touches the network. The one
//! piece of mutable state, [`users::UserStore`], is a plain value; sharing it
//! between tasks is left to the shell.
//!
//! # Module Organization
//!
//! - [`auth`]: Login validation, the demo account and bio sanitizing
//! - [`search`]: Linear and binary search over integer sequences
//! - [`users`]: User records, seed data and the in-memory store
//! - [`paradigms`]: Squaring even numbers in imperative, declarative and functional style
//! - [`parity`]: Even/odd classification
//! - [`stats`]: Variance, covariance and Pearson correlation for paired series
//!
//! # Example Usage
//!
//! ```rust
//! use drills_core::search::{format_index, run_search};
//!
//! let report = run_search(vec![7, 3, 9], 9);
//!
//! assert_eq!(report.linear, Some(2));
//! assert_eq!(report.binary, Some(2));
//! assert_eq!(format_index(run_search(vec![1], 5).binary), "-1");
//! ```

pub mod auth;
pub mod paradigms;
pub mod parity;
pub mod search;
pub mod stats;
pub mod users;
