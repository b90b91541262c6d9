//! Path expression parser.
//!
//! Grammar:
//!
//! ```text
//! expr    := segment ("." segment)*
//! segment := name index*
//! name    := [^.\[\]]*
//! index   := "[" digit+ "]"
//! ```
//!
//! There is no escaping: a key name can never contain `.`, `[` or `]`.

use crate::error::{InvalidPathError, Result};
use crate::segment::{JsonPath, Segment};

/// Parse a path expression into its segments.
///
/// The empty expression yields the root path. Each dot-part contributes a
/// [`Segment::Key`] for its leading name (when non-empty) followed by one
/// [`Segment::Index`] per bracket group. A non-empty expression that yields
/// no segments at all (`.`, `..`) is rejected.
///
/// # Examples
///
/// ```
/// use jsondb_path::{parse, Segment};
///
/// let path = parse("a.b.c_array[0]").unwrap();
/// assert_eq!(
///     path.segments(),
///     &[Segment::key("a"), Segment::key("b"), Segment::key("c_array"), Segment::index(0)]
/// );
/// assert!(parse("").unwrap().is_empty());
/// assert!(parse("a[x]").is_err());
/// ```
pub fn parse(expression: &str) -> Result<JsonPath> {
    if expression.is_empty() {
        return Ok(JsonPath::root());
    }

    let mut segments = Vec::new();
    for part in expression.split('.') {
        parse_part(part, &mut segments)?;
    }
    // Only the empty expression addresses the root.
    if segments.is_empty() {
        return Err(InvalidPathError);
    }
    Ok(JsonPath::from_segments(segments))
}

/// Decompose one dot-part into `name` followed by `[N]` groups.
fn parse_part(part: &str, out: &mut Vec<Segment>) -> Result<()> {
    let (name, mut rest) = match part.find('[') {
        Some(pos) => part.split_at(pos),
        None => (part, ""),
    };

    if name.contains(']') {
        return Err(InvalidPathError);
    }
    if !name.is_empty() {
        out.push(Segment::Key(name.to_owned()));
    }

    // Bracket groups must follow each other back to back until the part ends.
    while !rest.is_empty() {
        let inner = rest.strip_prefix('[').ok_or(InvalidPathError)?;
        let close = inner.find(']').ok_or(InvalidPathError)?;
        out.push(Segment::Index(parse_index(&inner[..close])?));
        rest = &inner[close + 1..];
    }

    Ok(())
}

fn parse_index(digits: &str) -> Result<usize> {
    if digits.is_empty() || !digits.bytes().all(|b| b.is_ascii_digit()) {
        return Err(InvalidPathError);
    }
    // Only overflow can fail here.
    digits.parse().map_err(|_| InvalidPathError)
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn segs(expr: &str) -> Vec<Segment> {
        parse(expr).unwrap().into_segments()
    }

    // -----------------------------------------------------------------------
    // Accepted expressions
    // -----------------------------------------------------------------------

    #[test]
    fn empty_expression_is_root() {
        assert!(segs("").is_empty());
    }

    #[test]
    fn single_key() {
        assert_eq!(segs("a"), vec![Segment::key("a")]);
    }

    #[test]
    fn dotted_keys() {
        assert_eq!(
            segs("a.b.c"),
            vec![Segment::key("a"), Segment::key("b"), Segment::key("c")]
        );
    }

    #[test]
    fn key_with_index() {
        assert_eq!(
            segs("a.b.c_array[0]"),
            vec![
                Segment::key("a"),
                Segment::key("b"),
                Segment::key("c_array"),
                Segment::index(0),
            ]
        );
    }

    #[test]
    fn multiple_indices_in_one_part() {
        assert_eq!(
            segs("grid[1][22].cell"),
            vec![
                Segment::key("grid"),
                Segment::index(1),
                Segment::index(22),
                Segment::key("cell"),
            ]
        );
    }

    #[test]
    fn leading_bracket_part_has_no_key() {
        assert_eq!(segs("[0]"), vec![Segment::index(0)]);
        assert_eq!(segs("[3].a"), vec![Segment::index(3), Segment::key("a")]);
    }

    #[test]
    fn empty_dot_parts_contribute_nothing() {
        assert_eq!(segs("a..b"), vec![Segment::key("a"), Segment::key("b")]);
        assert_eq!(segs("a."), vec![Segment::key("a")]);
        assert_eq!(segs(".[1]"), vec![Segment::index(1)]);
    }

    #[test]
    fn names_may_hold_other_characters() {
        assert_eq!(segs("my key-1"), vec![Segment::key("my key-1")]);
        assert_eq!(segs("$ref"), vec![Segment::key("$ref")]);
    }

    #[test]
    fn leading_zeros_are_decimal() {
        assert_eq!(segs("a[007]"), vec![Segment::key("a"), Segment::index(7)]);
    }

    // -----------------------------------------------------------------------
    // Rejected expressions
    // -----------------------------------------------------------------------

    #[test]
    fn reject_unmatched_open_bracket() {
        assert_eq!(parse("a[0"), Err(InvalidPathError));
        assert_eq!(parse("a["), Err(InvalidPathError));
    }

    #[test]
    fn reject_stray_close_bracket() {
        assert_eq!(parse("a]"), Err(InvalidPathError));
        assert_eq!(parse("a[0]]"), Err(InvalidPathError));
    }

    #[test]
    fn reject_non_digit_index() {
        assert_eq!(parse("a[x]"), Err(InvalidPathError));
        assert_eq!(parse("a[-1]"), Err(InvalidPathError));
        assert_eq!(parse("a[ 1]"), Err(InvalidPathError));
        assert_eq!(parse("a[]"), Err(InvalidPathError));
    }

    #[test]
    fn reject_text_after_brackets() {
        assert_eq!(parse("a[0]b"), Err(InvalidPathError));
        assert_eq!(parse("a[0]x[1]"), Err(InvalidPathError));
    }

    #[test]
    fn reject_expressions_without_segments() {
        assert_eq!(parse("."), Err(InvalidPathError));
        assert_eq!(parse(".."), Err(InvalidPathError));
        assert_eq!(parse("..."), Err(InvalidPathError));
    }

    #[test]
    fn reject_nested_brackets() {
        assert_eq!(parse("a[1[2]]"), Err(InvalidPathError));
    }

    #[test]
    fn reject_index_overflow() {
        assert_eq!(parse("a[99999999999999999999999999]"), Err(InvalidPathError));
    }

    #[test]
    fn error_message() {
        assert_eq!(parse("a[").unwrap_err().to_string(), "Invalid JSON Path");
    }

    // -----------------------------------------------------------------------
    // Properties
    // -----------------------------------------------------------------------

    fn part_strategy() -> impl Strategy<Value = (String, Vec<usize>)> {
        ("[a-zA-Z_][a-zA-Z0-9_]{0,8}", prop::collection::vec(0usize..10_000, 0..4))
    }

    proptest! {
        #[test]
        fn well_formed_expressions_parse(parts in prop::collection::vec(part_strategy(), 1..6)) {
            let expr = parts
                .iter()
                .map(|(name, indices)| {
                    let brackets: String = indices.iter().map(|i| format!("[{i}]")).collect();
                    format!("{name}{brackets}")
                })
                .collect::<Vec<_>>()
                .join(".");

            let path = parse(&expr).unwrap();
            let expected = parts.iter().map(|(_, indices)| 1 + indices.len()).sum::<usize>();
            prop_assert_eq!(path.len(), expected);
            prop_assert_eq!(path.to_string(), expr);
        }
    }
}
