use serde_json::Value;
use tracing::debug;

use jsondb_path::{InvalidPathError, Result, Segment};

/// Follow `segments` from `root` and borrow the value found there.
///
/// # Examples
///
/// ```
/// use jsondb_tree::{read, Segment};
/// use serde_json::json;
///
/// let doc = json!({"a": {"list": ["x", "y"]}});
/// let found = read(&doc, &[Segment::key("a"), Segment::key("list"), Segment::index(1)]).unwrap();
/// assert_eq!(found, "y");
/// assert!(read(&doc, &[Segment::key("a"), Segment::index(0)]).is_err());
/// ```
pub fn read<'a>(root: &'a Value, segments: &[Segment]) -> Result<&'a Value> {
    let mut current = root;
    for (depth, segment) in segments.iter().enumerate() {
        current = step(current, segment).ok_or_else(|| miss(depth, segment))?;
    }
    Ok(current)
}

/// Like [`read`], but hands out a mutable borrow. Nothing is created.
pub fn read_mut<'a>(root: &'a mut Value, segments: &[Segment]) -> Result<&'a mut Value> {
    let mut current = root;
    for (depth, segment) in segments.iter().enumerate() {
        current = match (segment, current) {
            (Segment::Key(name), Value::Object(map)) => map.get_mut(name),
            (Segment::Index(i), Value::Array(items)) => items.get_mut(*i),
            _ => None,
        }
        .ok_or_else(|| miss(depth, segment))?;
    }
    Ok(current)
}

fn step<'a>(current: &'a Value, segment: &Segment) -> Option<&'a Value> {
    match (segment, current) {
        (Segment::Key(name), Value::Object(map)) => map.get(name),
        (Segment::Index(i), Value::Array(items)) => items.get(*i),
        _ => None,
    }
}

fn miss(depth: usize, segment: &Segment) -> InvalidPathError {
    debug!(depth, %segment, "path does not resolve");
    InvalidPathError
}
