//! Terminal rendering.
//!
//! Every function here turns library values into a `String`; printing happens in
//! `commands.rs`. Colors come from [`super::styles`] and are dropped automatically
//! by `console` when stdout is not a terminal.

use super::styles;
use chrono::{DateTime, Utc};
use serde::Serialize;
use timeago::Formatter;
use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};
use wordbookapp::api::{CmdMessage, MessageLevel};
use wordbookapp::config::WordbookConfig;
use wordbookapp::index::DisplayWord;
use wordbookapp::init::WordbookPaths;

const LINE_WIDTH: usize = 100;
const INDEX_WIDTH: usize = 6;
const VERSES_WIDTH: usize = 10;
const TIME_WIDTH: usize = 16;
const SEPARATOR: &str = "================================";

pub const EMPTY_HINT: &str = "No words saved yet. Add your first one with:\n  wordbook add <english> -m <bengali meaning>";
pub const NO_RESULTS: &str = "No results found";

pub fn render_messages(messages: &[CmdMessage]) -> String {
    let mut out = String::new();
    for message in messages {
        let style = match message.level {
            MessageLevel::Info => &*styles::INFO,
            MessageLevel::Success => &*styles::SUCCESS,
            MessageLevel::Warning => &*styles::WARNING,
            MessageLevel::Error => &*styles::ERROR,
        };
        out.push_str(&style.apply_to(&message.content).to_string());
        out.push('\n');
    }
    out
}

/// "3 of 5 words", with " found" appended while searching.
pub fn summary_line(shown: usize, total: usize, searching: bool) -> String {
    let mut line = format!(
        "{} of {} {}",
        shown,
        total,
        if total == 1 { "word" } else { "words" }
    );
    if searching {
        line.push_str(" found");
    }
    line
}

pub fn verse_count(n: usize) -> String {
    format!("{} {}", n, if n == 1 { "verse" } else { "verses" })
}

pub fn render_word_list(
    words: &[DisplayWord],
    total: usize,
    searching: bool,
    now: DateTime<Utc>,
) -> String {
    if total == 0 {
        return format!("{}\n", EMPTY_HINT);
    }

    let mut out = String::new();
    out.push_str(&styles::DIM.apply_to(summary_line(words.len(), total, searching)).to_string());
    out.push_str("\n\n");

    if words.is_empty() {
        out.push_str(NO_RESULTS);
        out.push('\n');
        return out;
    }

    for dw in words {
        out.push_str(&render_row(dw, now));
        out.push('\n');
    }
    out
}

fn render_row(dw: &DisplayWord, now: DateTime<Utc>) -> String {
    let word = &dw.word;
    let idx = format!("{:>width$}. ", dw.index, width = INDEX_WIDTH - 2);
    let available = LINE_WIDTH.saturating_sub(INDEX_WIDTH + VERSES_WIDTH + TIME_WIDTH);

    let meanings = word.bengali_meanings.join(", ");
    let english = truncate_to_width(&word.english_word, available);
    let meanings_room = available.saturating_sub(english.width() + 2);
    let meanings = truncate_to_width(&meanings, meanings_room);
    let used = english.width() + if meanings.is_empty() { 0 } else { 2 + meanings.width() };
    let padding = available.saturating_sub(used);

    let verses = format!("{:>width$}", verse_count(word.verses.len()), width = VERSES_WIDTH);
    let time = format!(
        "{:>width$}",
        format_time_ago(word.updated_at, now),
        width = TIME_WIDTH
    );

    let mut line = format!(
        "{}{}",
        styles::INDEX.apply_to(idx),
        styles::WORD.apply_to(english)
    );
    if !meanings.is_empty() {
        line.push_str(&format!("  {}", styles::MEANING.apply_to(meanings)));
    }
    line.push_str(&" ".repeat(padding));
    line.push_str(&format!("{}{}", verses, styles::DIM.apply_to(time)));

    if !word.notes.is_empty() {
        let notes = first_line(&word.notes);
        let notes = truncate_to_width(&notes, LINE_WIDTH.saturating_sub(INDEX_WIDTH));
        line.push('\n');
        line.push_str(&" ".repeat(INDEX_WIDTH));
        line.push_str(&styles::DIM.apply_to(notes).to_string());
    }
    line
}

/// Detail view of one or more words.
pub fn render_full_words(words: &[DisplayWord]) -> String {
    let mut out = String::new();
    for (i, dw) in words.iter().enumerate() {
        if i > 0 {
            out.push_str(&format!("\n{}\n\n", SEPARATOR));
        }
        out.push_str(&render_full_word(dw));
    }
    out
}

fn render_full_word(dw: &DisplayWord) -> String {
    let word = &dw.word;
    let mut out = format!(
        "{} {}\n",
        styles::INDEX.apply_to(format!("{}.", dw.index)),
        styles::WORD.apply_to(&word.english_word)
    );

    for meaning in &word.bengali_meanings {
        out.push_str(&format!("  • {}\n", styles::MEANING.apply_to(meaning)));
    }
    out.push_str(&format!(
        "{}\n",
        styles::DIM.apply_to(format!("Added {}", format_added_date(word.created_at)))
    ));

    if !word.notes.is_empty() {
        out.push_str("\nNotes\n");
        for line in word.notes.lines() {
            out.push_str(&format!("  {}\n", line));
        }
    }

    if !word.verses.is_empty() {
        out.push_str(&format!("\nVerses ({})\n", word.verses.len()));
        for (i, verse) in word.verses.iter().enumerate() {
            let mut heading = format!("  {}. {}", i + 1, styles::REFERENCE.apply_to(&verse.reference));
            if !verse.chosen_meaning.is_empty() {
                heading.push_str(&format!(" → {}", styles::MEANING.apply_to(&verse.chosen_meaning)));
            }
            out.push_str(&heading);
            out.push('\n');
            if !verse.text.is_empty() {
                out.push_str(&format!("     \"{}\"\n", verse.text));
            }
        }
    }
    out
}

pub fn render_json<T: Serialize + ?Sized>(value: &T) -> serde_json::Result<String> {
    serde_json::to_string_pretty(value)
}

pub fn render_config(config: &WordbookConfig, paths: &WordbookPaths) -> String {
    let file_state = if paths.config_file.exists() {
        ""
    } else {
        " (not found, using defaults)"
    };
    format!(
        "config file:  {}{}\ndata dir:     {}\ndefault sort: {}\n",
        paths.config_file.display(),
        file_state,
        paths.data_dir.display(),
        config.default_sort,
    )
}

/// "October 19, 2026"
pub fn format_added_date(timestamp: DateTime<Utc>) -> String {
    timestamp.format("%B %-d, %Y").to_string()
}

pub fn format_time_ago(timestamp: DateTime<Utc>, now: DateTime<Utc>) -> String {
    let duration = now.signed_duration_since(timestamp);
    Formatter::new().convert(duration.to_std().unwrap_or_default())
}

fn first_line(s: &str) -> String {
    s.lines().next().unwrap_or_default().to_string()
}

fn truncate_to_width(s: &str, max_width: usize) -> String {
    if s.width() <= max_width {
        return s.to_string();
    }

    let mut result = String::new();
    let mut current_width = 0;
    for c in s.chars() {
        let char_width = c.width().unwrap_or(0);
        if current_width + char_width > max_width.saturating_sub(1) {
            break;
        }
        result.push(c);
        current_width += char_width;
    }
    result.push('…');
    result
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{Duration, TimeZone};
    use console::strip_ansi_codes;
    use wordbookapp::model::{BibleWord, NewWord, VerseReference};

    fn at(y: i32, m: u32, d: u32) -> DateTime<Utc> {
        Utc.with_ymd_and_hms(y, m, d, 12, 0, 0).unwrap()
    }

    fn display(index: usize, english: &str, meanings: &[&str]) -> DisplayWord {
        let new = NewWord::new(english, meanings.iter().map(|m| m.to_string()).collect());
        DisplayWord {
            index,
            word: BibleWord::from_new(new, at(2024, 3, 5)),
        }
    }

    fn plain(s: String) -> String {
        strip_ansi_codes(&s).to_string()
    }

    #[test]
    fn summary_pluralizes_on_total() {
        assert_eq!(summary_line(1, 1, false), "1 of 1 word");
        assert_eq!(summary_line(0, 3, true), "0 of 3 words found");
        assert_eq!(summary_line(2, 2, false), "2 of 2 words");
    }

    #[test]
    fn verse_count_pluralizes() {
        assert_eq!(verse_count(0), "0 verses");
        assert_eq!(verse_count(1), "1 verse");
        assert_eq!(verse_count(2), "2 verses");
    }

    #[test]
    fn empty_store_shows_hint() {
        let out = render_word_list(&[], 0, false, at(2024, 3, 5));
        assert!(out.contains("No words saved yet"));
        assert!(!out.contains(NO_RESULTS));
    }

    #[test]
    fn empty_search_shows_no_results() {
        let out = plain(render_word_list(&[], 2, true, at(2024, 3, 5)));
        assert!(out.contains("0 of 2 words found"));
        assert!(out.contains(NO_RESULTS));
    }

    #[test]
    fn rows_carry_index_word_meanings_and_verse_count() {
        let mut dw = display(3, "Grace", &["অনুগ্রহ", "কৃপা"]);
        dw.word
            .verses
            .push(VerseReference::new("Ephesians 2:8", "", "অনুগ্রহ"));

        let out = plain(render_word_list(&[dw], 3, false, at(2024, 3, 5)));
        assert!(out.starts_with("1 of 3 words"));
        let row = out.lines().nth(2).unwrap();
        assert!(row.trim_start().starts_with("3. Grace  অনুগ্রহ, কৃপা"));
        assert!(row.contains("1 verse"));
    }

    #[test]
    fn notes_get_their_own_line() {
        let mut dw = display(1, "Grace", &["অনুগ্রহ"]);
        dw.word.notes = "unmerited favour\nsecond line".into();
        let out = plain(render_word_list(&[dw], 1, false, at(2024, 3, 5)));
        assert!(out.contains("unmerited favour"));
        assert!(!out.contains("second line"));
    }

    #[test]
    fn detail_view_shows_added_date_and_verses() {
        let mut dw = display(1, "Grace", &["অনুগ্রহ"]);
        dw.word.verses.push(VerseReference::new(
            "Ephesians 2:8",
            "For by grace are ye saved",
            "অনুগ্রহ",
        ));

        let out = plain(render_full_words(&[dw]));
        assert!(out.contains("1. Grace"));
        assert!(out.contains("Added March 5, 2024"));
        assert!(out.contains("Verses (1)"));
        assert!(out.contains("Ephesians 2:8 → অনুগ্রহ"));
        assert!(out.contains("\"For by grace are ye saved\""));
    }

    #[test]
    fn multiple_details_are_separated() {
        let out = plain(render_full_words(&[
            display(1, "Grace", &["অনুগ্রহ"]),
            display(2, "Faith", &["বিশ্বাস"]),
        ]));
        assert_eq!(out.matches(SEPARATOR).count(), 1);
    }

    #[test]
    fn time_ago_is_relative_to_now() {
        let now = at(2024, 3, 5);
        assert!(format_time_ago(now - Duration::hours(2), now).contains("hours ago"));
    }

    #[test]
    fn future_timestamps_do_not_panic() {
        let now = at(2024, 3, 5);
        format_time_ago(now + Duration::hours(1), now);
    }

    #[test]
    fn truncation_respects_display_width() {
        let long = "অনুগ্রহ ".repeat(40);
        let cut = truncate_to_width(&long, 20);
        assert!(cut.width() <= 20);
        assert!(cut.ends_with('…'));
        assert_eq!(truncate_to_width("Grace", 20), "Grace");
    }

    #[test]
    fn messages_render_one_per_line() {
        let out = plain(render_messages(&[
            CmdMessage::success("Word saved: Grace"),
            CmdMessage::warning("careful"),
        ]));
        assert_eq!(out, "Word saved: Grace\ncareful\n");
    }

    #[test]
    fn json_lists_words_in_camel_case() {
        let json = render_json(&[display(1, "Grace", &["অনুগ্রহ"])]).unwrap();
        assert!(json.contains("\"englishWord\": \"Grace\""));
        assert!(json.contains("\"index\": 1"));
    }
}
