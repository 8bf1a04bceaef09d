//! Token reference parsing.
//!
//! Symbolic style values reference theme scales with a `$` sigil or a bare
//! dotted path:
//!
//! ```text
//! $colors.primary      sigil form
//! colors.primary       bare dotted form
//! sizing.4             keys may be numeric-looking
//! shadow.md.inset      key is everything after the first dot
//! ```
//!
//! The category is a single identifier; the key is the remainder after the
//! first dot and may itself contain dots. Literal CSS values such as
//! `1.5em` or `.5rem` never parse as references because the category must
//! start with a letter.

use nom::{
    IResult,
    branch::alt,
    bytes::complete::tag,
    character::complete::{alpha1, alphanumeric1, char},
    combinator::{all_consuming, opt, recognize, rest, verify},
    multi::many0,
    sequence::pair,
};

use crate::error::PcssError;

/// A parsed token reference, borrowed from the input string.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TokenRef<'a> {
    /// Scale category, e.g. `colors`.
    pub category: &'a str,
    /// Scale key, e.g. `primary` or `md.inset`.
    pub key: &'a str,
    /// Whether the reference carried the `$` sigil.
    pub sigil: bool,
}

/// Parse an identifier: a letter followed by letters, digits, `-`, or `_`.
fn ident(input: &str) -> IResult<&str, &str> {
    recognize(pair(
        alpha1,
        many0(alt((alphanumeric1, tag("-"), tag("_")))),
    ))(input)
}

fn token_ref_inner(input: &str) -> IResult<&str, TokenRef<'_>> {
    let (input, sigil) = opt(char('$'))(input)?;
    let (input, category) = ident(input)?;
    let (input, _) = char('.')(input)?;
    let (input, key) = verify(rest, |s: &str| {
        !s.is_empty() && !s.contains(char::is_whitespace)
    })(input)?;
    Ok((
        input,
        TokenRef {
            category,
            key,
            sigil: sigil.is_some(),
        },
    ))
}

/// Parses a complete token reference, rejecting trailing input.
pub fn parse_token_ref(value: &str) -> Result<TokenRef<'_>, PcssError> {
    all_consuming(token_ref_inner)(value)
        .map(|(_, parsed)| parsed)
        .map_err(|_| PcssError::InvalidTokenRef(value.to_string()))
}

/// Returns true if a string value should be treated as a token reference.
///
/// A leading `$` sigil always marks a reference, even when the rest of the
/// string fails to parse; resolution then falls through the chain and the
/// value passes out as a literal. Bare strings count only when they match
/// the full `category.key` grammar.
pub fn is_token_ref(value: &str) -> bool {
    if value.starts_with('$') {
        return true;
    }
    parse_token_ref(value).is_ok()
}
