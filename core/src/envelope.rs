//! Response envelope normalization.
//!
//! # Design
//! The backend returns either a pagination envelope (`{"results": [...]}`)
//! or a bare array, depending on its pagination settings. Both unwrap to the
//! same sequence. Anything else that decodes as JSON yields an empty
//! sequence rather than an error: shape drift shows up as "no data".

use serde::de::DeserializeOwned;
use serde_json::{Map, Value};

/// Extract the item sequence from a decoded body.
pub fn normalize(body: Value) -> Vec<Value> {
    let candidate = match body {
        Value::Object(mut map) if map.contains_key("results") => {
            map.remove("results").unwrap_or(Value::Null)
        }
        other => other,
    };
    match candidate {
        Value::Array(items) => items,
        other => {
            tracing::debug!(shape = shape_name(&other), "body is not a sequence, using empty list");
            Vec::new()
        }
    }
}

/// Decode each element into `T`.
///
/// An element that `T` rejects (typically a non-object where `T` is a
/// struct) is kept as `T` decoded from an empty object, so it still occupies
/// its row. It is dropped only if `T` rejects `{}` as well.
pub fn decode_items<T: DeserializeOwned>(items: Vec<Value>) -> Vec<T> {
    items
        .into_iter()
        .enumerate()
        .filter_map(|(index, item)| match serde_json::from_value(item) {
            Ok(decoded) => Some(decoded),
            Err(e) => {
                tracing::warn!(index, error = %e, "item has unexpected shape, keeping it blank");
                serde_json::from_value(Value::Object(Map::new()))
                    .map_err(|e| tracing::warn!(index, error = %e, "dropping item"))
                    .ok()
            }
        })
        .collect()
}

fn shape_name(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "bool",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;

    #[test]
    fn envelope_and_bare_array_are_equivalent() {
        let items = json!([{"id": 1}, {"id": 2}]);
        let enveloped = json!({"count": 2, "next": null, "previous": null, "results": items.clone()});
        assert_eq!(normalize(enveloped), normalize(items.clone()));
        assert_eq!(normalize(items).len(), 2);
    }

    #[test]
    fn non_sequence_bodies_become_empty() {
        for body in [
            json!({}),
            json!(null),
            json!("x"),
            json!(42),
            json!(true),
            json!({"detail": "not paginated"}),
            json!({"results": null}),
            json!({"results": {"id": 1}}),
        ] {
            assert!(normalize(body.clone()).is_empty(), "{body}");
        }
    }

    #[test]
    fn nested_envelope_is_not_unwrapped_twice() {
        let body = json!({"results": {"results": [1, 2]}});
        assert!(normalize(body).is_empty());
    }

    #[test]
    fn decode_items_keeps_non_object_elements_blank() {
        #[derive(serde::Deserialize, Debug, PartialEq)]
        struct Named {
            #[serde(default)]
            name: Option<String>,
        }
        let items = vec![json!({"name": "a"}), json!(7), json!({"name": "b"})];
        let decoded: Vec<Named> = decode_items(items);
        assert_eq!(
            decoded,
            vec![
                Named { name: Some("a".to_string()) },
                Named { name: None },
                Named { name: Some("b".to_string()) }
            ]
        );
    }

    #[test]
    fn decode_items_drops_only_when_blank_is_rejected() {
        #[derive(serde::Deserialize, Debug, PartialEq)]
        struct Strict {
            name: String,
        }
        let decoded: Vec<Strict> = decode_items(vec![json!({"name": "a"}), json!({"title": "b"})]);
        assert_eq!(decoded, vec![Strict { name: "a".to_string() }]);
    }

    #[test]
    fn raw_values_are_never_dropped() {
        let items = vec![json!(1), json!(null), json!({"id": 1.5})];
        let decoded: Vec<Value> = decode_items(items.clone());
        assert_eq!(decoded, items);
    }
}
