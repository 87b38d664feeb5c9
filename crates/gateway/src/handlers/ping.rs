use serde_json::Value;

use super::{ActionHandler, HandlerContext, HandlerResult};
use crate::actions::Actions;
use crate::messages::{Message, PingPayload, Response};

/// `beacon:ping`
///
/// Echoes the `echo` argument back with the provider's receive time. Works
/// before the railway data is ready.
#[derive(Debug, Default, Clone, Copy)]
pub struct PingHandler;

impl ActionHandler for PingHandler {
    fn action(&self) -> &str {
        Actions::PING
    }

    fn handle(&self, message: &Message, ctx: &HandlerContext) -> HandlerResult {
        let echo = match message.payload_object() {
            Ok(payload) => payload
                .and_then(|map| map.get("echo"))
                .cloned()
                .unwrap_or(Value::Null),
            Err(e) => return Ok(Response::invalid_payload(&message.request_id, e.to_string())),
        };

        let payload = PingPayload {
            echo,
            received_at: ctx.clock().now_millis(),
        };
        Ok(Response::ok(&message.request_id, serde_json::to_value(payload)?))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::handlers::test_support::{FakeGateway, NOW_MILLIS, SizedSerializer, context};
    use crate::messages::ResponseStatus;
    use serde_json::json;

    #[test]
    fn test_ping_echoes_without_touching_gateway() {
        let gateway = FakeGateway::not_ready(&[]);
        let ctx = context(gateway.clone(), SizedSerializer::new(&[]));

        let msg = Message::new("p-1", Actions::PING, json!({"echo": "tests"}));
        let response = PingHandler.handle(&msg, &ctx).unwrap();

        assert_eq!(response.status, ResponseStatus::Ok);
        assert_eq!(response.payload["echo"], "tests");
        assert_eq!(response.payload["receivedAt"], NOW_MILLIS);
        assert_eq!(gateway.fetch_count(), 0);
    }

    #[test]
    fn test_ping_without_payload() {
        let ctx = context(FakeGateway::ready(&[]), SizedSerializer::new(&[]));

        let response = PingHandler
            .handle(&Message::without_payload("p-2", Actions::PING), &ctx)
            .unwrap();

        assert!(response.is_ok());
        assert!(response.payload["echo"].is_null());
    }

    #[test]
    fn test_ping_rejects_non_object_payload() {
        let ctx = context(FakeGateway::ready(&[]), SizedSerializer::new(&[]));

        let response = PingHandler
            .handle(&Message::new("p-3", Actions::PING, json!("hello")), &ctx)
            .unwrap();

        assert_eq!(response.status, ResponseStatus::InvalidPayload);
        assert_eq!(response.reason(), Some("payload must be an object"));
    }
}
