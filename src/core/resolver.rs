use chrono::{Datelike, NaiveDateTime, Timelike};
use regex::{Captures, Regex};
use std::sync::LazyLock;

/// Maximum number of tokens in a single `${...}` group.
pub const MAX_TOKENS_PER_GROUP: usize = 5;

static PLACEHOLDER_GROUP: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"\$\{([^${}\s]*)\}").expect("placeholder pattern is a valid regex")
});

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Token {
    Day,
    Month,
    Year,
    Hour,
    Minute,
}

impl Token {
    // Longer spellings first; no token is a prefix of another.
    const VOCABULARY: [(&'static str, Token); 6] = [
        ("YYYY", Token::Year),
        ("YEAR", Token::Year),
        ("DD", Token::Day),
        ("MM", Token::Month),
        ("hh", Token::Hour),
        ("mm", Token::Minute),
    ];

    pub fn render(self, now: &NaiveDateTime) -> String {
        match self {
            Token::Day => format!("{:02}", now.day()),
            Token::Month => format!("{:02}", now.month()),
            Token::Year => format!("{:04}", now.year()),
            Token::Hour => format!("{:02}h", now.hour()),
            Token::Minute => format!("{:02}m", now.minute()),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Part<'a> {
    Known(Token),
    Literal(&'a str),
}

/// Split one hyphen-separated segment into vocabulary tokens.
///
/// `DDMM` is accepted as `DD` followed by `MM` since the hyphen is optional.
/// Returns `None` if any part of the segment is outside the vocabulary.
fn tokenize_segment(segment: &str) -> Option<Vec<Token>> {
    let mut tokens = Vec::new();
    let mut rest = segment;
    while !rest.is_empty() {
        let (spelling, token) = Token::VOCABULARY
            .iter()
            .find(|(spelling, _)| rest.starts_with(spelling))?;
        tokens.push(*token);
        rest = &rest[spelling.len()..];
    }
    Some(tokens)
}

fn parse_group(inner: &str) -> Option<Vec<Part<'_>>> {
    let mut parts = Vec::new();
    for segment in inner.split('-').filter(|s| !s.is_empty()) {
        match tokenize_segment(segment) {
            Some(tokens) => parts.extend(tokens.into_iter().map(Part::Known)),
            None => parts.push(Part::Literal(segment)),
        }
    }

    let has_known = parts.iter().any(|p| matches!(p, Part::Known(_)));
    if !has_known || parts.len() > MAX_TOKENS_PER_GROUP {
        return None;
    }
    Some(parts)
}

/// Replace every `${TOKEN-TOKEN...}` group in `template` with values taken from `now`.
///
/// Text outside a group is copied verbatim. Unknown tokens inside a group are
/// kept as-is, and a group with no recognised token (or more than
/// [`MAX_TOKENS_PER_GROUP`] tokens) is left untouched.
pub fn resolve(template: &str, now: &NaiveDateTime) -> String {
    PLACEHOLDER_GROUP
        .replace_all(template, |caps: &Captures| {
            let whole = &caps[0];
            match parse_group(&caps[1]) {
                Some(parts) => parts
                    .iter()
                    .map(|part| match part {
                        Part::Known(token) => token.render(now),
                        Part::Literal(text) => (*text).to_string(),
                    })
                    .collect::<Vec<_>>()
                    .join("-"),
                None => whole.to_string(),
            }
        })
        .into_owned()
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn instant() -> NaiveDateTime {
        NaiveDate::from_ymd_opt(2024, 3, 7)
            .unwrap()
            .and_hms_opt(9, 5, 0)
            .unwrap()
    }

    #[test]
    fn test_plain_text_is_unchanged() {
        let template = "Author: Jane\nNo placeholders here { $ }";
        assert_eq!(resolve(template, &instant()), template);
    }

    #[test]
    fn test_date_group_in_order() {
        assert_eq!(resolve("${DD-MM-YYYY}", &instant()), "07-03-2024");
        assert_eq!(resolve("${YYYY-MM-DD}", &instant()), "2024-03-07");
    }

    #[test]
    fn test_time_tokens_carry_suffix() {
        assert_eq!(resolve("${hh-mm}", &instant()), "09h-05m");
    }

    #[test]
    fn test_year_alias() {
        assert_eq!(resolve("(c) ${YEAR}", &instant()), "(c) 2024");
    }

    #[test]
    fn test_unknown_token_passthrough() {
        assert_eq!(resolve("${DD-XX}", &instant()), "07-XX");
    }

    #[test]
    fn test_group_without_known_token_is_literal() {
        assert_eq!(resolve("${HOME}", &instant()), "${HOME}");
        assert_eq!(resolve("${}", &instant()), "${}");
    }

    #[test]
    fn test_hyphen_is_optional() {
        assert_eq!(resolve("${DDMM}", &instant()), "07-03");
        assert_eq!(resolve("${DD-}", &instant()), "07");
    }

    #[test]
    fn test_more_than_five_tokens_is_literal() {
        let five = "${DD-MM-YYYY-hh-mm}";
        assert_eq!(resolve(five, &instant()), "07-03-2024-09h-05m");
        let six = "${DD-MM-YYYY-hh-mm-DD}";
        assert_eq!(resolve(six, &instant()), six);
    }

    #[test]
    fn test_surrounding_text_and_newlines_preserved() {
        let template = "\nCreated: ${DD-MM-YYYY}\nAt: ${hh-mm}\n";
        assert_eq!(
            resolve(template, &instant()),
            "\nCreated: 07-03-2024\nAt: 09h-05m\n"
        );
    }

    #[test]
    fn test_tokens_are_case_sensitive() {
        assert_eq!(resolve("${dd}", &instant()), "${dd}");
        assert_eq!(resolve("${MM-mm}", &instant()), "03-05m");
    }
}
