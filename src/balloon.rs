//! Speech and thought balloon formatting
//!
//! This module turns raw text plus an optional wrap width into a framed
//! balloon. Line measurement is display-width aware (CJK and emoji count
//! as two columns), while wrapping counts raw characters, a quirk kept
//! for compatibility with classic cowsay output.

/// Delimiter pairs framing balloon lines, selected by line position.
#[derive(Debug, Clone, Copy)]
struct Delimiters {
    first: (&'static str, &'static str),
    middle: (&'static str, &'static str),
    last: (&'static str, &'static str),
    only: (&'static str, &'static str),
}

/// Balloon style: speech (angled delimiters) or thought (parentheses).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum BalloonStyle {
    #[default]
    Speech,
    Thought,
}

impl BalloonStyle {
    fn delimiters(self) -> Delimiters {
        match self {
            BalloonStyle::Speech => Delimiters {
                first: ("/", "\\"),
                middle: ("|", "|"),
                last: ("\\", "/"),
                only: ("<", ">"),
            },
            BalloonStyle::Thought => Delimiters {
                first: ("(", ")"),
                middle: ("(", ")"),
                last: ("(", ")"),
                only: ("(", ")"),
            },
        }
    }

    /// The glyph connecting balloon to creature in template art.
    pub fn connector(self) -> &'static str {
        match self {
            BalloonStyle::Speech => "\\",
            BalloonStyle::Thought => "o",
        }
    }
}

/// Wrap text in a speech balloon.
///
/// # Example
///
/// ```rust
/// use cattlelog::balloon::say;
///
/// assert_eq!(say("Hi!", None), " _____\n< Hi! >\n -----");
/// ```
pub fn say(text: &str, wrap: Option<usize>) -> String {
    format(text, wrap, BalloonStyle::Speech.delimiters())
}

/// Wrap text in a thought balloon.
///
/// # Example
///
/// ```rust
/// use cattlelog::balloon::think;
///
/// assert_eq!(think("Hi!", None), " _____\n( Hi! )\n -----");
/// ```
pub fn think(text: &str, wrap: Option<usize>) -> String {
    format(text, wrap, BalloonStyle::Thought.delimiters())
}

/// Wrap text in a balloon of the given style.
pub fn balloon(text: &str, wrap: Option<usize>, style: BalloonStyle) -> String {
    format(text, wrap, style.delimiters())
}

fn format(text: &str, wrap: Option<usize>, delimiters: Delimiters) -> String {
    let lines = split(text, wrap);
    let max_width = lines.iter().map(|line| string_width(line)).max().unwrap_or(0);

    let mut balloon = Vec::with_capacity(lines.len() + 2);
    balloon.push(format!(" {}", top(max_width)));

    if lines.len() == 1 {
        // A single line is framed as-is, no padding.
        balloon.push(format!(
            "{} {} {}",
            delimiters.only.0, lines[0], delimiters.only.1
        ));
    } else {
        for (i, line) in lines.iter().enumerate() {
            let delimiter = if i == 0 {
                delimiters.first
            } else if i == lines.len() - 1 {
                delimiters.last
            } else {
                delimiters.middle
            };

            balloon.push(format!(
                "{} {} {}",
                delimiter.0,
                pad(line, max_width),
                delimiter.1
            ));
        }
    }

    balloon.push(format!(" {}", bottom(max_width)));
    balloon.join("\n")
}

/// Normalize line breaks and split text into logical lines.
///
/// CRLF, lone CR and the Unicode line/paragraph separators collapse to a
/// single line feed, a leading BOM is stripped, and tabs expand to 8
/// spaces. Without a wrap width this splits on line feeds only; with one,
/// lines break at the earlier of the next line feed or `wrap` characters.
fn split(text: &str, wrap: Option<usize>) -> Vec<String> {
    let text = text
        .replace("\r\n", "\n")
        .replace(['\r', '\u{2028}', '\u{2029}'], "\n")
        .replace('\t', "        ");
    let text = text.strip_prefix('\u{FEFF}').unwrap_or(&text);

    let mut lines = match wrap {
        // A zero wrap width is ignored, same as no wrap at all.
        None | Some(0) => text.split('\n').map(str::to_string).collect(),
        Some(wrap) => {
            // Wrap counts chars, not columns; the line feed right after a
            // forced break is consumed.
            let chars: Vec<char> = text.chars().collect();
            let mut lines = Vec::new();
            let mut start = 0;
            while start < chars.len() {
                let next_newline = chars[start..]
                    .iter()
                    .position(|&c| c == '\n')
                    .map(|offset| start + offset)
                    .unwrap_or(chars.len());
                let wrap_at = (start + wrap).min(next_newline);

                lines.push(chars[start..wrap_at].iter().collect());
                start = wrap_at;

                if chars.get(start) == Some(&'\n') {
                    start += 1;
                }
            }
            lines
        }
    };

    if lines.is_empty() {
        lines.push(String::new());
    }
    lines
}

fn pad(text: &str, width: usize) -> String {
    let mut padded = text.to_string();
    padded.push_str(&" ".repeat(width.saturating_sub(string_width(text))));
    padded
}

fn top(width: usize) -> String {
    "_".repeat(width + 2)
}

fn bottom(width: usize) -> String {
    "-".repeat(width + 2)
}

/// Visual width of a string in terminal columns.
///
/// CJK blocks, Hangul, fullwidth forms and the common emoji range count
/// as two columns; everything else counts as one.
pub fn string_width(text: &str) -> usize {
    text.chars().map(char_width).sum()
}

fn char_width(c: char) -> usize {
    match c as u32 {
        0x1100..=0x115f // Hangul Jamo
        | 0x2e80..=0xa4cf // CJK
        | 0xac00..=0xd7a3 // Hangul Syllables
        | 0xf900..=0xfaff // CJK Compatibility
        | 0xfe10..=0xfe1f // Vertical forms
        | 0xfe30..=0xfe6f // CJK Compatibility Forms
        | 0xff00..=0xff60 // Fullwidth Forms
        | 0xffe0..=0xffe6 // Fullwidth Signs
        | 0x1f300..=0x1f9ff // Emoji
        | 0x20000..=0x2fffd // CJK Extension B+
        | 0x30000..=0x3fffd => 2, // CJK Extension G+
        _ => 1,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn width_counts_ascii_as_one_column() {
        assert_eq!(string_width(""), 0);
        assert_eq!(string_width("Hi!"), 3);
        assert_eq!(string_width("hello world"), 11);
    }

    #[test]
    fn width_counts_cjk_as_two_columns() {
        assert_eq!(string_width("你好"), 4);
        assert_eq!(string_width("こんにちは"), 10);
        assert_eq!(string_width("한글"), 4);
    }

    #[test]
    fn width_counts_emoji_as_two_columns() {
        assert_eq!(string_width("🐄"), 2);
        assert_eq!(string_width("moo 🐄"), 6);
    }

    #[test]
    fn width_counts_fullwidth_forms_as_two_columns() {
        assert_eq!(string_width("ＡＢ"), 4);
    }

    #[test]
    fn width_handles_mixed_text() {
        assert_eq!(string_width("ab你c"), 5);
    }

    #[test]
    fn say_wraps_single_line() {
        assert_eq!(say("Hi!", None), " _____\n< Hi! >\n -----");
    }

    #[test]
    fn say_pads_shorter_lines_to_max_width() {
        assert_eq!(say("AB\nCDE", None), " _____\n/ AB  \\\n\\ CDE /\n -----");
    }

    #[test]
    fn say_uses_positional_delimiters_for_three_lines() {
        let result = say("A\nB\nC", None);
        assert!(result.contains("/ A \\"));
        assert!(result.contains("| B |"));
        assert!(result.contains("\\ C /"));
    }

    #[test]
    fn say_wraps_at_requested_width() {
        let result = say("ABCDEF", Some(3));
        assert!(result.contains("ABC"));
        assert!(result.contains("DEF"));
        assert_eq!(result, " _____\n/ ABC \\\n\\ DEF /\n -----");
    }

    #[test]
    fn say_consumes_newline_after_forced_break() {
        // "ABC" breaks at width 3, and the line feed right after the
        // break must not produce an empty extra line.
        assert_eq!(say("ABC\nDE", Some(3)), " _____\n/ ABC \\\n\\ DE  /\n -----");
    }

    #[test]
    fn say_prefers_earlier_newline_over_wrap_boundary() {
        assert_eq!(
            say("A\nBCDE", Some(3)),
            " _____\n/ A   \\\n| BCD |\n\\ E   /\n -----"
        );
    }

    #[test]
    fn zero_wrap_is_ignored() {
        assert_eq!(say("AB", Some(0)), say("AB", None));
        assert_eq!(say("AB\nCDE", Some(0)), say("AB\nCDE", None));
        assert_eq!(say("Hi!", Some(0)), " _____\n< Hi! >\n -----");
    }

    #[test]
    fn think_wraps_single_line() {
        assert_eq!(think("Hi!", None), " _____\n( Hi! )\n -----");
    }

    #[test]
    fn think_uses_parentheses_for_all_lines() {
        let result = think("A\nB\nC", None);
        assert!(result.contains("( A )"));
        assert!(result.contains("( B )"));
        assert!(result.contains("( C )"));
    }

    #[test]
    fn empty_text_produces_zero_width_balloon() {
        assert_eq!(say("", None), " __\n<  >\n --");
    }

    #[test]
    fn crlf_and_cr_normalize_to_line_feeds() {
        assert_eq!(say("A\r\nB", None), say("A\nB", None));
        assert_eq!(say("A\rB", None), say("A\nB", None));
    }

    #[test]
    fn unicode_line_separators_normalize_to_line_feeds() {
        assert_eq!(say("A\u{2028}B", None), say("A\nB", None));
        assert_eq!(say("A\u{2029}B", None), say("A\nB", None));
    }

    #[test]
    fn leading_bom_is_stripped() {
        assert_eq!(say("\u{FEFF}Hi!", None), say("Hi!", None));
    }

    #[test]
    fn tabs_expand_to_eight_spaces() {
        assert_eq!(say("\tA", None), say("        A", None));
    }

    #[test]
    fn wide_characters_pad_against_visual_width() {
        // "你好" is 4 columns, "ab" is 2, so "ab" gets 2 trailing spaces.
        assert_eq!(say("你好\nab", None), " ______\n/ 你好 \\\n\\ ab   /\n ------");
    }

    #[test]
    fn multi_line_content_is_padded_to_uniform_width() {
        let result = say("one\ntwo words\nx", None);
        let lines: Vec<&str> = result.lines().collect();
        assert_eq!(lines.len(), 5);
        // Strip "X " prefix and " X" suffix, leaving the padded content.
        for framed in &lines[1..4] {
            let inner = &framed[2..framed.len() - 2];
            assert_eq!(string_width(inner), string_width("two words"));
        }
    }

    #[test]
    fn single_line_borders_match_content_width() {
        let result = say("hello", None);
        let lines: Vec<&str> = result.lines().collect();
        assert_eq!(lines.len(), 3);
        // Borders are max width + 2 underscores/dashes plus a leading space.
        assert_eq!(lines[0], " _______");
        assert_eq!(lines[2], " -------");
        assert_eq!(lines[1], "< hello >");
    }

    #[test]
    fn whitespace_only_input_is_accepted() {
        assert_eq!(say("  ", None), " ____\n<    >\n ----");
    }
}
