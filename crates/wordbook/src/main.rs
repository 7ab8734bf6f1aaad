//! # Wordbook CLI
//!
//! `wordbook` keeps a personal dictionary of English Bible words with their Bengali
//! meanings and the verses each meaning was chosen for.
//!
//! The binary is thin: the CLI lives in `src/cli/`, and this file only invokes
//! `cli::run()` and handles process termination. All dictionary logic is in the
//! `wordbookapp` crate.
//!
//! ```text
//! wordbook add Grace -m অনুগ্রহ --verse "Ephesians 2:8" --chosen অনুগ্রহ
//! wordbook list --sort recent
//! wordbook search অনুগ্রহ
//! wordbook show grace
//! wordbook verse add grace "Romans 3:24" --text "Being justified freely by his grace"
//! wordbook delete grace
//! ```
//!
//! Words are addressed by their list index, their English word, or an id prefix.
//!
//! Logging goes to stderr; set `WORDBOOK_LOG` (e.g. `WORDBOOK_LOG=debug`) or pass
//! `-v` to see it.

mod cli;

fn main() {
    if let Err(e) = cli::run() {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}
