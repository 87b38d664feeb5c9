//! Inbound request message

use beacon_core::RailwayId;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::error::PayloadError;

/// Inbound request
///
/// Built by the transport from wire bytes and consumed by exactly one handler
/// invocation. Handlers only ever see it by shared reference.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Message {
    /// Caller-assigned correlation token, echoed back unchanged
    pub request_id: String,
    /// Requested action, e.g. `mtr:get_railway_snapshot`
    pub action: String,
    /// Action-specific arguments
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub payload: Option<Value>,
}

impl Message {
    /// Create a request with a payload document
    pub fn new(request_id: impl Into<String>, action: impl Into<String>, payload: Value) -> Self {
        Self {
            request_id: request_id.into(),
            action: action.into(),
            payload: Some(payload),
        }
    }

    /// Create a request without a payload
    pub fn without_payload(request_id: impl Into<String>, action: impl Into<String>) -> Self {
        Self {
            request_id: request_id.into(),
            action: action.into(),
            payload: None,
        }
    }

    /// Payload as a JSON object. Absent and `null` payloads yield `None`.
    pub fn payload_object(&self) -> Result<Option<&Map<String, Value>>, PayloadError> {
        match &self.payload {
            None | Some(Value::Null) => Ok(None),
            Some(Value::Object(map)) => Ok(Some(map)),
            Some(_) => Err(PayloadError::NotAnObject),
        }
    }

    /// Optional string field of the payload. `null` counts as absent.
    pub fn optional_str(&self, key: &'static str) -> Result<Option<&str>, PayloadError> {
        let Some(map) = self.payload_object()? else {
            return Ok(None);
        };
        match map.get(key) {
            None | Some(Value::Null) => Ok(None),
            Some(Value::String(s)) => Ok(Some(s.as_str())),
            Some(_) => Err(PayloadError::NotAString(key)),
        }
    }

    /// Required railway id field of the payload
    ///
    /// Ids are 64-bit, so clients that cannot hold them as numbers may send
    /// them as decimal strings.
    pub fn required_id(&self, key: &'static str) -> Result<RailwayId, PayloadError> {
        let map = self.payload_object()?.ok_or(PayloadError::Missing(key))?;
        match map.get(key) {
            None | Some(Value::Null) => Err(PayloadError::Missing(key)),
            Some(Value::Number(n)) => n.as_i64().ok_or(PayloadError::NotAnInteger(key)),
            Some(Value::String(s)) => s
                .trim()
                .parse()
                .map_err(|_| PayloadError::NotAnInteger(key)),
            Some(_) => Err(PayloadError::NotAnInteger(key)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_wire_shape() {
        let msg: Message = serde_json::from_value(json!({
            "requestId": "r-1",
            "action": "mtr:list_stations",
            "payload": {"dimension": "minecraft:overworld"}
        }))
        .unwrap();

        assert_eq!(msg.request_id, "r-1");
        assert_eq!(msg.optional_str("dimension").unwrap(), Some("minecraft:overworld"));
    }

    #[test]
    fn test_missing_payload() {
        let msg: Message =
            serde_json::from_value(json!({"requestId": "r-2", "action": "beacon:ping"})).unwrap();
        assert!(msg.payload.is_none());
        assert_eq!(msg.optional_str("dimension").unwrap(), None);

        let encoded = serde_json::to_value(&msg).unwrap();
        assert!(encoded.get("payload").is_none());
    }

    #[test]
    fn test_null_payload_and_null_field_are_absent() {
        let msg = Message::new("r-3", "x", Value::Null);
        assert_eq!(msg.payload_object().unwrap(), None);

        let msg = Message::new("r-4", "x", json!({"dimension": null}));
        assert_eq!(msg.optional_str("dimension").unwrap(), None);
    }

    #[test]
    fn test_invalid_shapes() {
        let msg = Message::new("r-5", "x", json!(["minecraft:overworld"]));
        assert_eq!(msg.optional_str("dimension"), Err(PayloadError::NotAnObject));

        let msg = Message::new("r-6", "x", json!({"dimension": 3}));
        assert_eq!(
            msg.optional_str("dimension"),
            Err(PayloadError::NotAString("dimension"))
        );
    }

    #[test]
    fn test_required_id() {
        let msg = Message::new("r-7", "x", json!({"routeId": 42}));
        assert_eq!(msg.required_id("routeId"), Ok(42));

        let msg = Message::new("r-8", "x", json!({"routeId": "-9007199254740993"}));
        assert_eq!(msg.required_id("routeId"), Ok(-9_007_199_254_740_993));

        let msg = Message::new("r-9", "x", json!({"routeId": null}));
        assert_eq!(msg.required_id("routeId"), Err(PayloadError::Missing("routeId")));

        let msg = Message::without_payload("r-10", "x");
        assert_eq!(msg.required_id("routeId"), Err(PayloadError::Missing("routeId")));

        for bad in [json!(1.5), json!("route-1"), json!(true), json!([1])] {
            let msg = Message::new("r-11", "x", json!({ "routeId": bad }));
            assert_eq!(
                msg.required_id("routeId"),
                Err(PayloadError::NotAnInteger("routeId"))
            );
        }
    }
}
