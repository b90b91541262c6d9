//! Writing a value into a document tree.
//!
//! A write runs in two phases:
//!
//! 1. [`descend_creating`] walks every segment but the last, inserting an
//!    empty object for each missing key, and yields the final container.
//! 2. [`assign`] stores the value into that container under the last segment.
//!
//! Only absent keys are filled in. A scalar or array sitting where an object
//! is needed is left alone and the write fails, as does any index that does
//! not name an existing array element.

use serde_json::{Map, Value};
use tracing::debug;

use jsondb_path::{InvalidPathError, Result, Segment};

/// Store `value` at `segments` inside `root` and return the updated root.
///
/// The empty path replaces the whole document with `value`.
///
/// # Examples
///
/// ```
/// use jsondb_tree::{write, Segment};
/// use serde_json::json;
///
/// let doc = json!({"a": {"b": {}}});
/// let path = [Segment::key("a"), Segment::key("b"), Segment::key("c"), Segment::key("d")];
/// let doc = write(doc, &path, json!("nested stuff")).unwrap();
/// assert_eq!(doc, json!({"a": {"b": {"c": {"d": "nested stuff"}}}}));
/// ```
pub fn write(mut root: Value, segments: &[Segment], value: Value) -> Result<Value> {
    let Some((last, parents)) = segments.split_last() else {
        return Ok(value);
    };
    let container = descend_creating(&mut root, parents)?;
    assign(container, last, value)?;
    Ok(root)
}

/// Walk `segments` from `root`, creating empty objects for absent keys, and
/// return the node reached.
pub fn descend_creating<'a>(root: &'a mut Value, segments: &[Segment]) -> Result<&'a mut Value> {
    let mut current = root;
    for (depth, segment) in segments.iter().enumerate() {
        current = match (segment, current) {
            (Segment::Key(name), Value::Object(map)) => map
                .entry(name.as_str())
                .or_insert_with(|| Value::Object(Map::new())),
            (Segment::Index(i), Value::Array(items)) => {
                items.get_mut(*i).ok_or_else(|| rejected(depth, segment))?
            }
            _ => return Err(rejected(depth, segment)),
        };
    }
    Ok(current)
}

/// Set `container[segment] = value`.
///
/// Keys are inserted or overwritten; indices must already exist.
pub fn assign(container: &mut Value, segment: &Segment, value: Value) -> Result<()> {
    match (segment, container) {
        (Segment::Key(name), Value::Object(map)) => {
            map.insert(name.clone(), value);
            Ok(())
        }
        (Segment::Index(i), Value::Array(items)) => match items.get_mut(*i) {
            Some(slot) => {
                *slot = value;
                Ok(())
            }
            None => Err(unassignable(segment)),
        },
        _ => Err(unassignable(segment)),
    }
}

fn rejected(depth: usize, segment: &Segment) -> InvalidPathError {
    debug!(depth, %segment, "cannot descend while writing");
    InvalidPathError
}

fn unassignable(segment: &Segment) -> InvalidPathError {
    debug!(%segment, "cannot assign at final segment");
    InvalidPathError
}
