use clap::{Parser, Subcommand};
use std::path::PathBuf;
use wordbookapp::query::SortMode;

#[derive(Parser, Debug)]
#[command(
    name = "wordbook",
    bin_name = "wordbook",
    version,
    disable_help_subcommand = true
)]
#[command(
    about = "A personal dictionary of Bible words and their Bengali meanings",
    long_about = None
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,

    /// Verbose output
    #[arg(short, long, global = true, help_heading = "Options")]
    pub verbose: bool,

    /// Directory holding the word list (overrides config and environment)
    #[arg(long, global = true, value_name = "DIR", help_heading = "Options")]
    pub data: Option<PathBuf>,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Save a new word
    #[command(alias = "a", display_order = 1)]
    Add {
        /// The English word
        english: String,

        /// A Bengali meaning (repeatable)
        #[arg(short = 'm', long = "meaning", value_name = "MEANING")]
        meanings: Vec<String>,

        /// Free-form notes
        #[arg(short, long)]
        notes: Option<String>,

        /// Reference of a verse using this word (e.g. "John 3:16")
        #[arg(long, value_name = "REF")]
        verse: Option<String>,

        /// Text of that verse
        #[arg(long, requires = "verse")]
        text: Option<String>,

        /// Meaning chosen for that verse
        #[arg(long, requires = "verse", value_name = "MEANING")]
        chosen: Option<String>,
    },

    /// List words
    #[command(alias = "ls", display_order = 2)]
    List {
        /// Search term
        #[arg(short, long)]
        search: Option<String>,

        /// Sort order: alphabetical, recent or oldest
        #[arg(long)]
        sort: Option<SortMode>,

        /// Print JSON instead of a table
        #[arg(long)]
        json: bool,
    },

    /// Search words by English word, meaning or notes
    #[command(display_order = 3)]
    Search {
        query: String,

        /// Sort order: alphabetical, recent or oldest
        #[arg(long)]
        sort: Option<SortMode>,

        /// Print JSON instead of a table
        #[arg(long)]
        json: bool,
    },

    /// Show one or more words in full
    #[command(alias = "v", display_order = 4)]
    Show {
        /// Index, English word or id of each word
        #[arg(required = true, num_args = 1..)]
        words: Vec<String>,

        /// Print JSON instead of text
        #[arg(long)]
        json: bool,
    },

    /// Change the English word, meanings or notes of a word
    #[command(alias = "e", display_order = 5)]
    Edit {
        /// Index, English word or id
        word: String,

        /// New English word
        #[arg(long)]
        english: Option<String>,

        /// Replace all meanings with these
        #[arg(long, num_args = 1..)]
        meanings: Option<Vec<String>>,

        /// New notes (an empty string clears them)
        #[arg(long)]
        notes: Option<String>,
    },

    /// Delete words permanently
    #[command(alias = "rm", display_order = 6)]
    Delete {
        /// Index, English word or id of each word
        #[arg(required = true, num_args = 1..)]
        words: Vec<String>,
    },

    /// Manage the verses of a word
    #[command(display_order = 10)]
    Verse {
        #[command(subcommand)]
        action: VerseAction,
    },

    /// Manage the Bengali meanings of a word
    #[command(display_order = 11)]
    Meaning {
        #[command(subcommand)]
        action: MeaningAction,
    },

    /// Show how many words, meanings and verses are saved
    #[command(display_order = 20)]
    Stats,

    /// Show the effective configuration and where it comes from
    #[command(display_order = 21)]
    Config {
        /// Print a commented config file template instead
        #[arg(long)]
        template: bool,
    },
}

#[derive(Subcommand, Debug)]
pub enum VerseAction {
    /// Attach a verse to a word
    Add {
        /// Index, English word or id
        word: String,

        /// Verse reference (e.g. "Ephesians 2:8")
        #[arg(default_value = "")]
        reference: String,

        /// Verse text
        #[arg(long, default_value = "")]
        text: String,

        /// Meaning chosen for this verse
        #[arg(long, default_value = "", value_name = "MEANING")]
        chosen: String,
    },

    /// Remove a verse by position, reference or id prefix
    #[command(alias = "remove")]
    Rm {
        /// Index, English word or id
        word: String,

        /// 1-based position, reference or id prefix of the verse
        verse: String,
    },
}

#[derive(Subcommand, Debug)]
pub enum MeaningAction {
    /// Add a Bengali meaning to a word
    Add {
        /// Index, English word or id
        word: String,

        meaning: String,
    },

    /// Remove a meaning by text or 1-based position
    #[command(alias = "remove")]
    Rm {
        /// Index, English word or id
        word: String,

        meaning: String,
    },
}
