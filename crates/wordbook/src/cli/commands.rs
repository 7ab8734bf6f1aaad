//! Argument dispatch: parse, set up logging and context, call the API, print.

use super::render::{
    render_config, render_full_words, render_json, render_messages, render_word_list,
};
use super::setup::{Cli, Commands, MeaningAction, VerseAction};
use anyhow::Result;
use chrono::Utc;
use clap::Parser;
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;
use wordbookapp::api::{CmdResult, WordEdit, WordFilter};
use wordbookapp::capture::{VerseDraft, WordDraft};
use wordbookapp::config::WordbookConfig;
use wordbookapp::init::{initialize, WordbookContext};
use wordbookapp::query::SortMode;

/// Environment variable holding the log filter (e.g. `WORDBOOK_LOG=debug`).
pub const LOG_ENV: &str = "WORDBOOK_LOG";

pub fn run() -> Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);
    tracing::debug!(command = ?cli.command, "parsed arguments");

    if let Some(Commands::Config { template: true }) = &cli.command {
        print!("{}", WordbookConfig::template());
        return Ok(());
    }

    let mut ctx = init_context(cli.data)?;

    match cli.command {
        None => handle_list(&ctx, None, None, false),
        Some(Commands::Add {
            english,
            meanings,
            notes,
            verse,
            text,
            chosen,
        }) => {
            let mut draft = WordDraft::new(english)
                .meanings(meanings)
                .notes(notes.unwrap_or_default());
            if let Some(reference) = verse {
                draft = draft.verse(VerseDraft::new(
                    reference,
                    text.unwrap_or_default(),
                    chosen.unwrap_or_default(),
                ));
            }
            handle_add(&mut ctx, draft)
        }
        Some(Commands::List { search, sort, json }) => handle_list(&ctx, search, sort, json),
        Some(Commands::Search { query, sort, json }) => {
            handle_list(&ctx, Some(query), sort, json)
        }
        Some(Commands::Show { words, json }) => handle_show(&ctx, &words, json),
        Some(Commands::Edit {
            word,
            english,
            meanings,
            notes,
        }) => handle_edit(
            &mut ctx,
            &word,
            WordEdit {
                english_word: english,
                bengali_meanings: meanings,
                notes,
            },
        ),
        Some(Commands::Delete { words }) => {
            let result = ctx.api.delete_words(&words)?;
            print_result(&result);
            Ok(())
        }
        Some(Commands::Verse { action }) => handle_verse(&mut ctx, action),
        Some(Commands::Meaning { action }) => handle_meaning(&mut ctx, action),
        Some(Commands::Stats) => {
            let result = ctx.api.stats()?;
            print_result(&result);
            Ok(())
        }
        Some(Commands::Config { .. }) => {
            print!("{}", render_config(&ctx.config, &ctx.paths));
            Ok(())
        }
    }
}

/// Installs the stderr log subscriber. `WORDBOOK_LOG` wins over `--verbose`.
fn init_tracing(verbose: bool) {
    let default_level = if verbose { "debug" } else { "warn" };
    let filter = EnvFilter::try_from_env(LOG_ENV).unwrap_or_else(|_| EnvFilter::new(default_level));

    // A subscriber may already be set when running under a test harness.
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .try_init();
}

fn init_context(data_override: Option<PathBuf>) -> Result<WordbookContext> {
    Ok(initialize(data_override)?)
}

fn print_result(result: &CmdResult) {
    print!("{}", render_messages(&result.messages));
}

fn handle_add(ctx: &mut WordbookContext, draft: WordDraft) -> Result<()> {
    let result = ctx.api.create_word(draft)?;
    print_result(&result);
    Ok(())
}

fn handle_list(
    ctx: &WordbookContext,
    search: Option<String>,
    sort: Option<SortMode>,
    json: bool,
) -> Result<()> {
    let sort = match sort {
        Some(sort) => sort,
        None => ctx.config.sort_mode()?,
    };
    let filter = WordFilter {
        search_term: search,
        sort,
    };
    let searching = filter.is_searching();
    let result = ctx.api.get_words(filter)?;

    if json {
        println!("{}", render_json(&result.listed_words)?);
        return Ok(());
    }

    print!(
        "{}",
        render_word_list(&result.listed_words, result.total, searching, Utc::now())
    );
    print_result(&result);
    Ok(())
}

fn handle_show(ctx: &WordbookContext, words: &[String], json: bool) -> Result<()> {
    let result = ctx.api.view_words(words)?;
    if json {
        println!("{}", render_json(&result.listed_words)?);
    } else {
        print!("{}", render_full_words(&result.listed_words));
    }
    Ok(())
}

fn handle_edit(ctx: &mut WordbookContext, word: &str, edit: WordEdit) -> Result<()> {
    let result = ctx.api.update_word(word, edit)?;
    print_result(&result);
    Ok(())
}

fn handle_verse(ctx: &mut WordbookContext, action: VerseAction) -> Result<()> {
    let result = match action {
        VerseAction::Add {
            word,
            reference,
            text,
            chosen,
        } => ctx
            .api
            .add_verse(&word, VerseDraft::new(reference, text, chosen))?,
        VerseAction::Rm { word, verse } => ctx.api.remove_verse(&word, &verse)?,
    };
    print_result(&result);
    Ok(())
}

fn handle_meaning(ctx: &mut WordbookContext, action: MeaningAction) -> Result<()> {
    let result = match action {
        MeaningAction::Add { word, meaning } => ctx.api.add_meaning(&word, &meaning)?,
        MeaningAction::Rm { word, meaning } => ctx.api.remove_meaning(&word, &meaning)?,
    };
    print_result(&result);
    Ok(())
}
