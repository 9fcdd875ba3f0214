//! Filename to item-name normalization
//!
//! Icon files are named however the game's asset pipeline named them
//! (`Wooden_Sword`, `Lv5Sword`, `TotemOfFire`). [`normalize`] turns such a
//! stem into the label users type: words separated by single spaces, plus a
//! few canonical prefixes.
//!
//! # Rules
//!
//! 1. Underscores: a single trailing underscore is dropped, otherwise every
//!    underscore becomes a space. Names containing underscores are not
//!    camel-split.
//! 2. Without underscores a space is inserted at lower->upper, letter->digit
//!    and digit->letter boundaries.
//! 3. Whitespace is collapsed and trimmed.
//! 4. Prefixes, first match wins: `Lv`/`Lv.` + digits becomes `Lv.<digits>`,
//!    a leading `Totem`, `Blueprint` or `Recipe` becomes `"<Prefix>: "` even
//!    when glued to the next word (`Totemfire` -> `Totem: fire`).

/// Word prefixes rewritten to `"<Prefix>: <rest>"`.
const LITERAL_PREFIXES: [&str; 3] = ["Totem", "Blueprint", "Recipe"];

const LEVEL_PREFIX: &str = "Lv";

/// Converts a raw filename stem into a human-readable item label.
///
/// Never fails; blank input gives an empty string.
///
/// # Examples
///
/// ```
/// use itemtrack::core::normalize::normalize;
///
/// assert_eq!(normalize("Wooden_Sword"), "Wooden Sword");
/// assert_eq!(normalize("Lv5Sword"), "Lv.5 Sword");
/// assert_eq!(normalize("TotemOfFire"), "Totem: Of Fire");
/// ```
pub fn normalize(raw: &str) -> String {
    let tokenized = tokenize(raw);
    rewrite_level_prefix(&tokenized)
        .or_else(|| rewrite_literal_prefix(&tokenized))
        .unwrap_or(tokenized)
}

fn tokenize(raw: &str) -> String {
    let spaced = if raw.contains('_') {
        split_underscores(raw)
    } else {
        split_boundaries(raw)
    };
    spaced.split_whitespace().collect::<Vec<_>>().join(" ")
}

fn split_underscores(raw: &str) -> String {
    if raw.matches('_').count() == 1
        && let Some(stripped) = raw.strip_suffix('_')
    {
        return stripped.to_string();
    }
    raw.replace('_', " ")
}

fn is_word_boundary(prev: char, cur: char) -> bool {
    (prev.is_lowercase() && cur.is_uppercase())
        || (prev.is_alphabetic() && cur.is_ascii_digit())
        || (prev.is_ascii_digit() && cur.is_alphabetic())
}

fn split_boundaries(raw: &str) -> String {
    let mut out = String::with_capacity(raw.len() + 8);
    let mut prev = None;
    for c in raw.chars() {
        if let Some(p) = prev
            && is_word_boundary(p, c)
        {
            out.push(' ');
        }
        out.push(c);
        prev = Some(c);
    }
    out
}

fn strip_prefix_ignore_case<'a>(s: &'a str, prefix: &str) -> Option<&'a str> {
    s.get(..prefix.len())
        .filter(|head| head.eq_ignore_ascii_case(prefix))
        .map(|_| &s[prefix.len()..])
}

fn rewrite_level_prefix(s: &str) -> Option<String> {
    let rest = strip_prefix_ignore_case(s, LEVEL_PREFIX)?;
    let rest = rest.strip_prefix('.').unwrap_or(rest).trim_start();

    let digits_end = rest
        .find(|c: char| !c.is_ascii_digit())
        .unwrap_or(rest.len());
    if digits_end == 0 {
        return None;
    }

    let (digits, tail) = rest.split_at(digits_end);
    let tail = tail.trim();
    Some(if tail.is_empty() {
        format!("{LEVEL_PREFIX}.{digits}")
    } else {
        format!("{LEVEL_PREFIX}.{digits} {tail}")
    })
}

fn rewrite_literal_prefix(s: &str) -> Option<String> {
    LITERAL_PREFIXES.iter().find_map(|prefix| {
        let rest = strip_prefix_ignore_case(s, prefix)?
            .trim_start_matches(|c: char| c == ':' || c.is_whitespace())
            .trim_end();
        Some(if rest.is_empty() {
            format!("{prefix}:")
        } else {
            format!("{prefix}: {rest}")
        })
    })
}
