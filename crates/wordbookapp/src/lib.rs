//! # Wordbook Architecture
//!
//! Wordbook keeps a personal dictionary of English Bible words and their Bengali
//! renderings, with the verses each rendering was chosen for. It is a library that
//! happens to have a CLI client, not the other way around.
//!
//! ## Layers
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │  CLI (wordbook crate)                                       │
//! │  - Parses arguments, renders output, owns stdout/stderr     │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  API Layer (api.rs)                                         │
//! │  - Thin facade over commands                                │
//! │  - Normalizes inputs (strings → selectors, sort modes)      │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Command Layer (commands/*.rs)                              │
//! │  - Capture validation, selector resolution, messages        │
//! │  - Returns CmdResult, never prints                          │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Storage Layer (store/)                                     │
//! │  - WordStore: the collection, persisted whole on mutation   │
//! │  - BlobBackend: FsBackend (production), MemBackend (tests)  │
//! └─────────────────────────────────────────────────────────────┘
//! ```
//!
//! Searching and sorting ([`query`]) are pure functions over a slice of words and
//! are shared by the store's search and the list view, so both agree on what a
//! query matches.
//!
//! ## No I/O Assumptions in Core
//!
//! From `api.rs` inward, code takes Rust values and returns `Result<CmdResult>`.
//! It never writes to stdout/stderr and never exits the process. Diagnostics go
//! through `tracing`; the CLI decides where they end up.
//!
//! ## Module Overview
//!
//! - [`api`] - facade consumed by the CLI
//! - [`capture`] - validation of raw word input
//! - [`commands`] - business logic
//! - [`config`] - layered configuration
//! - [`error`] - error type
//! - [`index`] - display indexes and selectors
//! - [`init`] - path resolution and context setup
//! - [`model`] - record types
//! - [`query`] - search filter and sort modes
//! - [`store`] - persistence

pub mod api;
pub mod capture;
pub mod commands;
pub mod config;
pub mod error;
pub mod index;
pub mod init;
pub mod model;
pub mod query;
pub mod store;
