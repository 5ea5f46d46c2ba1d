use once_cell::sync::Lazy;
use regex::Regex;

/// Multiplier suffixes understood by the shorthand form ("2.5k", "10l", "1.5 lakhs").
///
/// The captured unit token is scanned against these keys and the first
/// substring match wins. Longest keys come first so that "lakhs" resolves
/// to 100,000 instead of matching the bare "k".
const MULTIPLIERS: &[(&str, u64)] = &[
    ("lakhs", 100_000),
    ("lakh", 100_000),
    ("l", 100_000),
    ("k", 1_000),
    ("cr", 10_000_000),
    ("m", 1_000_000),
];

/// Unit words 0-19, indexed by value
const UNITS: &[&str] = &[
    "zero", "one", "two", "three", "four", "five", "six", "seven", "eight",
    "nine", "ten", "eleven", "twelve", "thirteen", "fourteen", "fifteen",
    "sixteen", "seventeen", "eighteen", "nineteen",
];

const TENS: &[(&str, u64)] = &[
    ("twenty", 20),
    ("thirty", 30),
    ("forty", 40),
    ("fifty", 50),
    ("sixty", 60),
    ("seventy", 70),
    ("eighty", 80),
    ("ninety", 90),
];

/// Scale words for the Indian-English numbering system
const SCALES: &[(&str, u64)] = &[
    ("hundred", 100),
    ("thousand", 1_000),
    ("lakh", 100_000),
    ("lakhs", 100_000),
    ("crore", 10_000_000),
    ("crores", 10_000_000),
    ("million", 1_000_000),
];

// Number literal followed by a candidate unit token, e.g. "2.5k" or
// "1.5 lakhs". The unit capture is a run of multiplier-key letters ending
// at a word boundary, so ordinary words after a number do not match.
static SUFFIX_AMOUNT: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"([0-9]+(?:\.[0-9]+)?)\s*([klahscrm]+)\b").unwrap());

static DIGIT_RUN: Lazy<Regex> = Lazy::new(|| Regex::new(r"[0-9]+").unwrap());

/// Resolve the amount encoded in a free-text fragment.
///
/// Tries, in priority order:
/// 1. Shorthand suffix notation ("2k", "2.5k", "1.5 lakhs", "3cr")
/// 2. Plain digit runs, keeping the numerically largest one
/// 3. Spelled-out number words ("two lakh fifty thousand")
///
/// Returns 0 when no amount can be found. Case-insensitive; commas in
/// numerals are stripped before parsing.
pub fn resolve_amount(text: &str) -> u64 {
    let text = text.to_lowercase().replace(',', "");

    for caps in SUFFIX_AMOUNT.captures_iter(&text) {
        if let Some(multiplier) = fuzzy_multiplier(&caps[2]) {
            if let Ok(num) = caps[1].parse::<f64>() {
                return (num * multiplier as f64) as u64;
            }
        }
    }

    // Heuristic: the amount is assumed to be the largest number mentioned,
    // distinguishing the amount from a small incidental count.
    if let Some(largest) = DIGIT_RUN
        .find_iter(&text)
        .filter_map(|m| m.as_str().parse::<u64>().ok())
        .max()
    {
        return largest;
    }

    parse_number_words(&text)
}

fn fuzzy_multiplier(unit: &str) -> Option<u64> {
    MULTIPLIERS
        .iter()
        .find(|(key, _)| unit.contains(key))
        .map(|(_, value)| *value)
}

fn small_word_value(word: &str) -> Option<u64> {
    if let Some(position) = UNITS.iter().position(|u| *u == word) {
        return Some(position as u64);
    }
    TENS.iter().find(|(t, _)| *t == word).map(|(_, v)| *v)
}

fn scale_value(word: &str) -> Option<u64> {
    SCALES.iter().find(|(s, _)| *s == word).map(|(_, v)| *v)
}

/// Parse spelled-out number words by accumulating a chunk of unit/tens
/// words and flushing it on scale words. "hundred" multiplies the chunk in
/// place so "two hundred thirty thousand" becomes 230,000; larger scales
/// flush chunk * scale into the running total. A scale word with no
/// preceding chunk counts as one, so bare "thousand" is 1,000.
fn parse_number_words(text: &str) -> u64 {
    let mut total: u64 = 0;
    let mut chunk: u64 = 0;

    for raw in text.split_whitespace() {
        let word = raw.trim_matches(|c: char| !c.is_alphanumeric());
        if let Some(value) = small_word_value(word) {
            chunk += value;
        } else if let Some(scale) = scale_value(word) {
            if chunk == 0 {
                chunk = 1;
            }
            if scale == 100 {
                chunk *= 100;
            } else {
                total += chunk * scale;
                chunk = 0;
            }
        }
    }

    total + chunk
}
