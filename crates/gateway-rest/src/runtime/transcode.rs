//! Typed backend message → generic JSON value.

use serde::Serialize;
use serde_json::Value;

/// A typed message could not be converted into JSON.
#[derive(Debug, thiserror::Error)]
#[error("failed to transcode {type_name}: {source}")]
pub struct TranscodeError {
    type_name: &'static str,
    #[source]
    source: serde_json::Error,
}

impl TranscodeError {
    /// Rust type name of the message that failed.
    #[must_use]
    pub const fn type_name(&self) -> &'static str {
        self.type_name
    }
}

/// Convert a typed response message into the JSON value sent as `data`.
///
/// The message's [`Serialize`] impl defines the shape. Backend messages
/// derive it without `skip_serializing_if`, so field names stay as declared
/// and default values (`""`, `0`, `[]`) are emitted rather than dropped.
/// The conversion is deterministic: the same message always yields an equal
/// value.
///
/// # Errors
///
/// Returns [`TranscodeError`] if the message's serializer fails, e.g. a map
/// keyed by a non-string type.
///
/// # Examples
///
/// ```
/// #[derive(serde::Serialize)]
/// struct Company { id: String, name: String }
///
/// let value = gateway_rest::transcode(&Company { id: "1".into(), name: String::new() }).unwrap();
/// assert_eq!(value, serde_json::json!({ "id": "1", "name": "" }));
/// ```
pub fn transcode<M: Serialize>(message: &M) -> Result<Value, TranscodeError> {
    serde_json::to_value(message).map_err(|source| TranscodeError {
        type_name: std::any::type_name::<M>(),
        source,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use serde::ser::Error as _;
    use serde_json::json;

    #[derive(Serialize, Default)]
    struct Page {
        items: Vec<Item>,
        count: u32,
    }

    #[derive(Serialize, Default)]
    struct Item {
        id: String,
        name: String,
        active: bool,
    }

    struct Broken;

    impl Serialize for Broken {
        fn serialize<S: serde::Serializer>(&self, _: S) -> Result<S::Ok, S::Error> {
            Err(S::Error::custom("unsupported field"))
        }
    }

    #[test]
    fn defaults_are_emitted() {
        let value = transcode(&Item::default()).unwrap();
        assert_eq!(value, json!({ "id": "", "name": "", "active": false }));
    }

    #[test]
    fn nested_messages_keep_field_names() {
        let page = Page {
            items: vec![Item {
                id: "1".into(),
                name: "Acme".into(),
                active: true,
            }],
            count: 1,
        };
        let value = transcode(&page).unwrap();
        assert_eq!(value["items"][0]["name"], "Acme");
        assert_eq!(value["count"], 1);
        assert_eq!(transcode(&Page::default()).unwrap(), json!({ "items": [], "count": 0 }));
    }

    #[test]
    fn repeated_transcoding_is_identical() {
        let item = Item {
            id: "9".into(),
            name: "Globex".into(),
            active: false,
        };
        let first = serde_json::to_vec(&transcode(&item).unwrap()).unwrap();
        let second = serde_json::to_vec(&transcode(&item).unwrap()).unwrap();
        assert_eq!(first, second);
    }

    #[test]
    fn serializer_failure_is_reported() {
        let err = transcode(&Broken).unwrap_err();
        assert!(err.type_name().ends_with("Broken"), "{}", err.type_name());
        assert!(err.to_string().contains("unsupported field"), "{err}");
    }
}
