//! # CLI Layer
//!
//! One possible client for `wordbookapp`. This is the only place that:
//! - parses arguments (`setup.rs`, clap derive),
//! - installs the log subscriber and builds the context (`commands.rs`),
//! - turns `CmdResult`s into terminal text (`render.rs`, `styles.rs`).
//!
//! Business rules do not live here. Tests in this layer check argument parsing and
//! rendering of canned values; behavior is covered in the library and end to end
//! in `tests/`.

mod commands;
mod render;
mod setup;
mod styles;

pub use commands::run;
