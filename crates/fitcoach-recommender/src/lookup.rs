//! Optional-field lookup over JSON documents

use serde_json::Value;

/// One step of a lookup path
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PathSegment<'a> {
    /// Object member
    Key(&'a str),
    /// Array element
    Index(usize),
}

impl<'a> From<&'a str> for PathSegment<'a> {
    fn from(key: &'a str) -> Self {
        PathSegment::Key(key)
    }
}

impl From<usize> for PathSegment<'_> {
    fn from(index: usize) -> Self {
        PathSegment::Index(index)
    }
}

/// Follow `path` from `doc`
///
/// Returns `None` as soon as a step is missing or hits the wrong kind of
/// node (a key on an array, an index on an object, anything on a scalar).
pub fn field<'v>(doc: &'v Value, path: &[PathSegment<'_>]) -> Option<&'v Value> {
    path.iter().try_fold(doc, |node, segment| match segment {
        PathSegment::Key(key) => node.as_object().and_then(|obj| obj.get(*key)),
        PathSegment::Index(index) => node.as_array().and_then(|arr| arr.get(*index)),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_empty_path_returns_root() {
        let doc = json!({"a": 1});
        assert_eq!(field(&doc, &[]), Some(&doc));
    }

    #[test]
    fn test_nested_lookup() {
        let doc = json!({"a": [{"b": "c"}]});
        let found = field(&doc, &["a".into(), 0usize.into(), "b".into()]);
        assert_eq!(found, Some(&json!("c")));
    }

    #[test]
    fn test_missing_key_is_absent() {
        let doc = json!({"a": {}});
        assert_eq!(field(&doc, &["a".into(), "b".into()]), None);
    }

    #[test]
    fn test_out_of_range_index_is_absent() {
        let doc = json!({"a": []});
        assert_eq!(field(&doc, &["a".into(), 0usize.into()]), None);
    }

    #[test]
    fn test_wrong_node_kind_is_absent() {
        let doc = json!({"a": "scalar", "b": {"0": 1}});
        assert_eq!(field(&doc, &["a".into(), "x".into()]), None);
        assert_eq!(field(&doc, &["b".into(), 0usize.into()]), None);
    }
}
