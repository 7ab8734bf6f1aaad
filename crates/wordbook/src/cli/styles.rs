use console::Style;
use once_cell::sync::Lazy;

pub static INDEX: Lazy<Style> = Lazy::new(|| Style::new().yellow());
pub static WORD: Lazy<Style> = Lazy::new(|| Style::new().bold());
pub static MEANING: Lazy<Style> = Lazy::new(|| Style::new().cyan());
pub static DIM: Lazy<Style> = Lazy::new(|| Style::new().color256(246).italic());
pub static REFERENCE: Lazy<Style> = Lazy::new(|| Style::new().green());

pub static INFO: Lazy<Style> = Lazy::new(|| Style::new().dim());
pub static SUCCESS: Lazy<Style> = Lazy::new(|| Style::new().green());
pub static WARNING: Lazy<Style> = Lazy::new(|| Style::new().yellow());
pub static ERROR: Lazy<Style> = Lazy::new(|| Style::new().red());
