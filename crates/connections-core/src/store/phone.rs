//! Phone number normalization to E.164, with the US as the default region.
//!
//! Invalid input never fails: it yields `None`, which callers treat as "no
//! phone" or "no match".

use std::sync::LazyLock;

use regex::Regex;

// ---------------------------------------------------------------------------
// Regex patterns (compiled once via LazyLock)
// ---------------------------------------------------------------------------

/// Digits, common separators, and at most one leading `+`.
static DIALABLE_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^\+?[0-9().\-\s]+$").unwrap());

static SEPARATOR_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"[().\-\s]").unwrap());

/// North American number: area code NXX (not N11) then exchange NXX.
static NANP_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^([2-9][0-9]{2})[2-9][0-9]{6}$").unwrap());

const NANP_COUNTRY_CODE: &str = "1";
const E164_MIN_DIGITS: usize = 8;
const E164_MAX_DIGITS: usize = 15;

fn valid_nanp(national: &str) -> bool {
    match NANP_RE.captures(national) {
        Some(caps) => !caps[1].ends_with("11"),
        None => false,
    }
}

/// Normalize a raw phone number to E.164 (`+<digits>`).
///
/// Returns `None` for missing, empty, or unparseable input. Only `+1` numbers
/// are checked against a numbering plan. Any other country code is kept as
/// given when the digit count fits E.164 and the code does not start with 0,
/// so unassigned codes such as `+999` still normalize.
pub fn normalize_phone_number(raw: Option<&str>) -> Option<String> {
    let trimmed = raw?.trim();
    if trimmed.is_empty() || !DIALABLE_RE.is_match(trimmed) {
        return None;
    }

    let international = trimmed.starts_with('+');
    let digits = SEPARATOR_RE
        .replace_all(trimmed.trim_start_matches('+'), "")
        .into_owned();

    if international {
        if let Some(national) = digits.strip_prefix(NANP_COUNTRY_CODE) {
            return valid_nanp(national).then(|| format!("+1{national}"));
        }
        let fits = (E164_MIN_DIGITS..=E164_MAX_DIGITS).contains(&digits.len());
        if fits && !digits.starts_with('0') {
            return Some(format!("+{digits}"));
        }
        return None;
    }

    let national = match digits.len() {
        10 => &digits[..],
        11 => digits.strip_prefix(NANP_COUNTRY_CODE)?,
        _ => return None,
    };
    valid_nanp(national).then(|| format!("+1{national}"))
}
