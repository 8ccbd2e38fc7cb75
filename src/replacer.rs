//! Placeholder substitution for creature templates
//!
//! Creature art contains placeholder tokens (`$thoughts`, `$eyes`,
//! `$tongue`, `${eyes}`, `${tongue}`, and up to two `$eye`) that get
//! stamped with the face values for a render. In the replacement
//! position `$` acts as an escape introducer: `$$` emits a single
//! literal `$`. Eye and tongue values are user controlled and may
//! themselves contain `$` (the greedy face is `$$`), so they are
//! dollar-escaped before injection.

/// Face values stamped into a creature template.
#[derive(Debug, Clone)]
pub struct FaceValues {
    /// Connector between balloon and creature, `\` or `o`.
    pub thoughts: String,
    /// Two-character eye string.
    pub eyes: String,
    /// Two-character tongue string.
    pub tongue: String,
}

/// Replace placeholder tokens in creature art with face values.
///
/// Passes run in a fixed order over each other's output, so `$eyes` is
/// consumed before the bare `$eye` passes see the text. Only the first
/// two `$eye` tokens are replaced (left eye, then right eye); later ones
/// are left untouched.
///
/// # Example
///
/// ```rust
/// use cattlelog::replacer::{replace_placeholders, FaceValues};
///
/// let art = "$thoughts ($eyes) $tongue";
/// let face = FaceValues {
///     thoughts: "\\".to_string(),
///     eyes: "oo".to_string(),
///     tongue: "U ".to_string(),
/// };
/// assert_eq!(replace_placeholders(art, &face), "\\ (oo) U ");
/// ```
pub fn replace_placeholders(art: &str, values: &FaceValues) -> String {
    let eyes = escape_dollars(&values.eyes);
    let tongue = escape_dollars(&values.tongue);
    // Single eye characters come from the unescaped value; one char
    // cannot smuggle an escape sequence.
    let eye_left = values.eyes.chars().next().map(String::from).unwrap_or_default();
    let eye_right = values.eyes.chars().nth(1).map(String::from).unwrap_or_default();

    let art = replace_token(art, "$thoughts", &values.thoughts, None);
    let art = replace_token(&art, "$eyes", &eyes, None);
    let art = replace_token(&art, "$tongue", &tongue, None);
    let art = replace_token(&art, "${eyes}", &eyes, None);
    let art = replace_token(&art, "$eye", &eye_left, Some(1));
    let art = replace_token(&art, "$eye", &eye_right, Some(1));
    replace_token(&art, "${tongue}", &tongue, None)
}

/// Double every `$` so the value survives replacement-position decoding.
fn escape_dollars(value: &str) -> String {
    value.replace('$', "$$")
}

/// Replace up to `limit` occurrences of a literal token, decoding `$$`
/// in the replacement to a literal `$` as it is emitted.
///
/// This implements the replacement-escape contract explicitly instead of
/// leaning on a regex engine, so the behavior is pinned: `$$` becomes
/// `$`, any other character (including a lone `$`) passes through.
fn replace_token(text: &str, token: &str, replacement: &str, limit: Option<usize>) -> String {
    let emitted = decode_replacement(replacement);

    let mut out = String::with_capacity(text.len());
    let mut rest = text;
    let mut replaced = 0;
    while limit.map_or(true, |n| replaced < n) {
        match rest.find(token) {
            Some(idx) => {
                out.push_str(&rest[..idx]);
                out.push_str(&emitted);
                rest = &rest[idx + token.len()..];
                replaced += 1;
            }
            None => break,
        }
    }
    out.push_str(rest);
    out
}

fn decode_replacement(replacement: &str) -> String {
    let mut decoded = String::with_capacity(replacement.len());
    let mut chars = replacement.chars().peekable();
    while let Some(c) = chars.next() {
        if c == '$' && chars.peek() == Some(&'$') {
            chars.next();
        }
        decoded.push(c);
    }
    decoded
}
