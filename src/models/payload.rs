use serde_json::{Map, Value};

/// Read-only view over a raw JSON request body.
///
/// Entities validate inbound payloads in two phases, presence first and
/// then type, so handlers pass the body through untyped.
#[derive(Debug, Clone, Copy)]
pub struct Payload<'a> {
    fields: Option<&'a Map<String, Value>>,
}

impl<'a> Payload<'a> {
    pub fn new(value: &'a Value) -> Self {
        Self {
            fields: value.as_object(),
        }
    }

    fn get(&self, key: &str) -> Option<&'a Value> {
        self.fields.and_then(|fields| fields.get(key))
    }

    /// A field is present when it holds a truthy value: `null`, `false`,
    /// zero and the empty string count as missing.
    pub fn has(&self, key: &str) -> bool {
        match self.get(key) {
            None | Some(Value::Null) | Some(Value::Bool(false)) => false,
            Some(Value::String(s)) => !s.is_empty(),
            Some(Value::Number(n)) => n.as_f64().is_some_and(|n| n != 0.0),
            Some(_) => true,
        }
    }

    pub fn has_all(&self, keys: &[&str]) -> bool {
        keys.iter().all(|key| self.has(key))
    }

    /// The field as a string, `None` when absent or of another JSON type.
    pub fn str(&self, key: &str) -> Option<&'a str> {
        self.get(key).and_then(Value::as_str)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn presence_ignores_null_and_empty_strings() {
        let body = json!({ "title": "Pawapuan", "body": "", "owner": null });
        let payload = Payload::new(&body);

        assert!(payload.has("title"));
        assert!(!payload.has("body"));
        assert!(!payload.has("owner"));
        assert!(!payload.has("missing"));
    }

    #[test]
    fn false_and_zero_count_as_missing() {
        let body = json!({
            "done": false,
            "count": 0,
            "ratio": 0.0,
            "flag": true,
            "page": 2,
            "tags": [],
        });
        let payload = Payload::new(&body);

        assert!(!payload.has("done"));
        assert!(!payload.has("count"));
        assert!(!payload.has("ratio"));
        assert!(payload.has("flag"));
        assert!(payload.has("page"));
        assert!(payload.has("tags"));
    }

    #[test]
    fn non_object_bodies_have_no_fields() {
        let body = json!(["title"]);
        let payload = Payload::new(&body);

        assert!(!payload.has_all(&["title"]));
        assert_eq!(payload.str("title"), None);
    }

    #[test]
    fn str_only_matches_json_strings() {
        let body = json!({ "title": {}, "body": "Deskripsi" });
        let payload = Payload::new(&body);

        assert_eq!(payload.str("title"), None);
        assert_eq!(payload.str("body"), Some("Deskripsi"));
    }
}
