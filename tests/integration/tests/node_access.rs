//! Integration tests for the node surface: typed reads and write-back.

use jaywalk_core::{JsonNode, JsonObject, JsonValue, ValueKind, Walk, WalkError};
use serde_json::json;

fn object_root(tree: serde_json::Value) -> JsonObject {
    JsonValue::from_serde(tree)
        .as_object()
        .expect("object root")
        .clone()
}

fn node_at(root: &JsonObject, path: &str) -> JsonNode {
    root.walk()
        .find(|node| node.path() == path)
        .unwrap_or_else(|| panic!("no node at {path}"))
}

mod typed_accessors {
    use pretty_assertions::assert_eq;

    use super::*;

    fn sample() -> JsonObject {
        object_root(json!({
            "name": "john doe",
            "age": 30,
            "ratio": 2.9,
            "active": true,
            "nothing": null,
            "nested": {"deep": 1}
        }))
    }

    #[test]
    fn reads_succeed_on_matching_kinds() {
        let root = sample();

        assert_eq!(node_at(&root, "name").string_value(), Ok("john doe"));
        assert_eq!(node_at(&root, "age").int_value(), Ok(30));
        assert_eq!(node_at(&root, "active").bool_value(), Ok(true));
        assert_eq!(node_at(&root, "ratio").float_value(), Ok(2.9));
    }

    #[test]
    fn numeric_reads_coerce_between_variants() {
        let root = sample();

        // Integer widened, float truncated toward zero.
        assert_eq!(node_at(&root, "age").float_value(), Ok(30.0));
        assert_eq!(node_at(&root, "ratio").int_value(), Ok(2));
    }

    #[test]
    fn mismatch_errors_identify_expected_and_actual_kinds() {
        let root = sample();

        assert_eq!(
            node_at(&root, "age").string_value(),
            Err(WalkError::TypeMismatch {
                expected: ValueKind::String,
                actual: ValueKind::Number,
            })
        );
        assert_eq!(
            node_at(&root, "nothing").int_value(),
            Err(WalkError::TypeMismatch {
                expected: ValueKind::Number,
                actual: ValueKind::Null,
            })
        );
        assert_eq!(
            node_at(&root, "nested").bool_value(),
            Err(WalkError::TypeMismatch {
                expected: ValueKind::Bool,
                actual: ValueKind::Object,
            })
        );
    }

    #[test]
    fn mismatch_errors_render_readable_messages() {
        let root = sample();

        let error = node_at(&root, "name").int_value().unwrap_err();
        assert_eq!(error.to_string(), "expected number value but found string");
    }

    #[test]
    fn classification_is_derived_from_the_value() {
        let root = sample();

        assert!(node_at(&root, "name").is_leaf());
        assert!(node_at(&root, "nothing").is_leaf());
        assert!(node_at(&root, "nested").is_object());
        assert!(!node_at(&root, "nested").is_leaf());
        assert_eq!(node_at(&root, "age").kind(), ValueKind::Number);
    }
}

mod write_back {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn update_through_parent_is_visible_from_the_root() {
        let root = object_root(json!({"settings": {"theme": "light"}}));

        let node = node_at(&root, "settings/theme");
        assert!(node.update_value("dark"));

        let settings = root.get("settings").unwrap().as_object().unwrap().clone();
        assert_eq!(settings.get("theme"), Some(JsonValue::from("dark")));
    }

    #[test]
    fn update_is_seen_by_the_next_walk() {
        let root = object_root(json!({"count": 1}));

        assert!(node_at(&root, "count").update_value(2));

        assert_eq!(node_at(&root, "count").int_value(), Ok(2));
    }

    #[test]
    fn array_elements_decline_updates_and_leave_the_tree_unchanged() {
        let root = object_root(json!({"items": ["keep"]}));

        let element = node_at(&root, "items[0]");
        assert!(element.parent().is_none());
        assert!(!element.update_value("changed"));

        assert_eq!(node_at(&root, "items[0]").string_value(), Ok("keep"));
    }

    #[test]
    fn updates_may_change_the_value_kind() {
        let root = object_root(json!({"field": 1}));

        let node = node_at(&root, "field");
        assert!(node.update_value(()));
        assert!(root.get("field").unwrap().is_null());

        assert!(node.update_value(json!({"now": "object"})));
        assert!(node_at(&root, "field").is_object());
    }

    #[test]
    fn object_members_nested_in_arrays_are_still_writable() {
        let root = object_root(json!({"books": [{"title": "old"}]}));

        // The element node itself has no parent, but members of the
        // element object do.
        let title = node_at(&root, "books[0]/title");
        assert!(title.parent().is_some());
        assert!(title.update_value("new"));

        assert_eq!(node_at(&root, "books[0]/title").string_value(), Ok("new"));
    }
}
