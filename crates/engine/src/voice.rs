//! Turns a voice transcript into a draft entry.
//!
//! Client hints always win over inference. Without hints the amount is the
//! first number in the transcript and the category comes from a fixed,
//! ordered keyword table.
use std::sync::LazyLock;

use regex::Regex;
use unicode_normalization::UnicodeNormalization;

use crate::{EngineError, EntryMethod, NewEntry, ResultEngine};

/// Category used when no keyword matches.
pub const FALLBACK_CATEGORY: &str = "others";

/// Number of characters of the transcript kept as note.
pub const NOTE_PREVIEW_CHARS: usize = 120;

// Order matters: the first keyword found wins.
const KEYWORDS: &[(&str, &str)] = &[
    ("coffee", "coffee"),
    ("drink", "beverage"),
    ("taxi", "transport"),
    ("bus", "transport"),
    ("metro", "transport"),
    ("uber", "transport"),
    ("train", "transport"),
    ("food", "food"),
    ("lunch", "food"),
    ("dinner", "food"),
    ("grocery", "groceries"),
    ("market", "groceries"),
    ("rent", "housing"),
];

// `\d` is any Unicode decimal digit, not only ASCII.
static AMOUNT_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\d+(?:\.\d+)?").expect("amount pattern is valid"));

static DECIMAL_DIGIT: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^\d$").expect("digit pattern is valid"));

/// Values extracted by the client before sending the transcript.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct VoiceHints {
    pub amount: Option<f64>,
    pub category: Option<String>,
    pub note: Option<String>,
}

/// Returns the hinted amount, or the first number found in the transcript.
///
/// A hint of `0` counts as missing.
pub fn infer_amount(transcript: &str, amount_hint: Option<f64>) -> ResultEngine<f64> {
    if let Some(hint) = amount_hint
        && hint != 0.0
    {
        return Ok(hint);
    }

    let found = AMOUNT_PATTERN
        .find(transcript)
        .ok_or(EngineError::AmountNotDetected)?;
    ascii_number(found.as_str())
        .ok_or(EngineError::AmountNotDetected)?
        .parse::<f64>()
        .map_err(|_| EngineError::AmountNotDetected)
}

/// Rewrite a matched number with ASCII digits.
///
/// NFKC folds compatibility forms such as fullwidth `１２`. Digits of other
/// scripts are mapped by their position in their block of ten.
fn ascii_number(matched: &str) -> Option<String> {
    matched
        .nfkc()
        .map(|c| match c {
            '.' => Some('.'),
            c => char::from_digit(digit_value(c)?, 10),
        })
        .collect()
}

fn is_decimal_digit(c: char) -> bool {
    let mut buf = [0u8; 4];
    DECIMAL_DIGIT.is_match(c.encode_utf8(&mut buf))
}

// Unicode decimal digits are laid out as contiguous runs from zero to nine.
fn digit_value(c: char) -> Option<u32> {
    if let Some(value) = c.to_digit(10) {
        return Some(value);
    }
    if !is_decimal_digit(c) {
        return None;
    }

    let code = u32::from(c);
    let mut value = 0;
    while value < 9 {
        match char::from_u32(code - value - 1) {
            Some(prev) if is_decimal_digit(prev) => value += 1,
            _ => break,
        }
    }
    Some(value)
}

/// Returns the hinted category, or the category of the first keyword
/// contained in the transcript, or [`FALLBACK_CATEGORY`].
pub fn infer_category(transcript: &str, category_hint: Option<&str>) -> String {
    if let Some(hint) = category_hint.filter(|hint| !hint.is_empty()) {
        return hint.to_string();
    }

    let lowered = transcript.to_lowercase();
    KEYWORDS
        .iter()
        .find(|&&(keyword, _)| lowered.contains(keyword))
        .map_or(FALLBACK_CATEGORY, |&(_, category)| category)
        .to_string()
}

/// Returns the hinted note, or the beginning of the transcript.
pub fn infer_note(transcript: &str, note_hint: Option<&str>) -> String {
    match note_hint.filter(|hint| !hint.is_empty()) {
        Some(hint) => hint.to_string(),
        None => transcript.chars().take(NOTE_PREVIEW_CHARS).collect(),
    }
}

/// Build a voice [`NewEntry`] from a transcript and the client hints.
///
/// The timestamp is left to the ledger clock.
pub fn draft_entry(transcript: &str, hints: VoiceHints) -> ResultEngine<NewEntry> {
    if transcript.is_empty() {
        return Err(EngineError::EmptyTranscript);
    }

    let amount = infer_amount(transcript, hints.amount)?;
    let category = infer_category(transcript, hints.category.as_deref());
    let note = infer_note(transcript, hints.note.as_deref());
    tracing::debug!(amount, category = %category, "inferred voice entry");

    Ok(NewEntry::new(amount, category)?
        .with_note(Some(note))
        .with_method(EntryMethod::Voice))
}
