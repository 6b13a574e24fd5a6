use crate::ArgValue;
use crate::query_path::PathNode;
use crate::traversal::ParseError;
use regex::Regex;
use std::collections::BTreeMap;
use std::sync::OnceLock;

type Result<T> = std::result::Result<T, ParseError>;

fn name_pattern() -> &'static Regex {
    static PATTERN: OnceLock<Regex> = OnceLock::new();
    PATTERN.get_or_init(|| {
        Regex::new(r"^[_A-Za-z][_0-9A-Za-z]*$").expect("valid regex")
    })
}

fn args_segment_pattern() -> &'static Regex {
    static PATTERN: OnceLock<Regex> = OnceLock::new();
    PATTERN.get_or_init(|| {
        Regex::new(r"^([_A-Za-z][_0-9A-Za-z]*)\((.+)\)$").expect("valid regex")
    })
}

fn ascend_pattern() -> &'static Regex {
    static PATTERN: OnceLock<Regex> = OnceLock::new();
    PATTERN.get_or_init(|| {
        Regex::new(r"^\.\.(?:/\.\.)*$").expect("valid regex")
    })
}

/// Whether `name` is a valid GraphQL name (`[_A-Za-z][_0-9A-Za-z]*`).
pub fn is_valid_name(name: &str) -> bool {
    name_pattern().is_match(name)
}

/// Parse one traversal segment: either a bare field name (`owner`) or a field
/// name with a parenthesized argument list
/// (`repository(owner: "jclem", name: "graphsh")`).
///
/// Arguments are split on every comma and each pair on its first colon, so a
/// comma inside a list or object literal is not supported. Each value is
/// parsed with [`ArgValue::from_literal()`].
pub fn parse_segment(segment: &str) -> Result<PathNode> {
    if segment.is_empty() {
        return Err(ParseError::EmptySegment);
    }

    if is_valid_name(segment) {
        return Ok(PathNode::new(segment));
    }

    let captures = args_segment_pattern()
        .captures(segment)
        .ok_or_else(|| ParseError::InvalidSegment {
            segment: segment.to_string(),
        })?;
    let name = &captures[1];
    let raw_args = &captures[2];

    let mut args = BTreeMap::new();
    for pair in raw_args.split(',') {
        let (key, value) = pair.split_once(':').ok_or_else(|| {
            ParseError::MissingArgumentValue {
                segment: segment.to_string(),
                pair: pair.trim().to_string(),
            }
        })?;

        let key = key.trim();
        if !is_valid_name(key) {
            return Err(ParseError::InvalidArgumentName {
                segment: segment.to_string(),
                name: key.to_string(),
            });
        }

        let value = ArgValue::from_literal(value).map_err(|err| {
            ParseError::InvalidArgumentValue {
                name: key.to_string(),
                value: value.trim().to_string(),
                message: err.to_string(),
            }
        })?;
        args.insert(key.to_string(), value);
    }

    Ok(PathNode::with_args(name, args))
}

/// Parse a full traversal expression such as `.repository(owner: "jclem").owner`
/// into its ordered chain of [`PathNode`]s. The first error wins.
///
/// The expression is split on `.` before any segment is parsed, so a
/// floating-point argument like `.foo(x: 1.5)` is split in two and rejected.
/// Float arguments are not expressible in traversal syntax.
pub fn parse_path(input: &str) -> Result<Vec<PathNode>> {
    let mut segments = input.split('.');
    if segments.next() != Some("") {
        return Err(ParseError::MissingLeadingDot {
            input: input.to_string(),
        });
    }

    segments.map(parse_segment).collect()
}

/// Whether `input` is an up-traversal (`..`, `../..`, ...).
pub fn is_ascend(input: &str) -> bool {
    ascend_pattern().is_match(input)
}

/// Parse an up-traversal into the number of levels beyond the first: `..`
/// yields `0`, `../..` yields `1`, and so on.
pub fn parse_ascend(input: &str) -> Result<usize> {
    if !is_ascend(input) {
        return Err(ParseError::InvalidAscend {
            input: input.to_string(),
        });
    }

    Ok(input.matches("..").count() - 1)
}
