//! Pure derivations over entity snapshots.
//!
//! Everything here is referentially transparent: same input, same
//! output, no side effects. Callers may invoke these on every render
//! without memoization concerns.

use serde_json::Value;

use crate::events::{Message, MessageRole, Part, PartKind, ToolPart, ToolState};

/// Whether a message is still being generated. User messages never
/// stream; an assistant message streams until it either completes or
/// errors.
pub fn is_streaming(message: &Message) -> bool {
    match message.role {
        MessageRole::User => false,
        MessageRole::Assistant => message.time.completed.is_none() && message.error.is_none(),
    }
}

/// Human-readable status line for a tool invocation. The match is
/// exhaustive over the closed state machine; there is no fallback arm.
pub fn tool_status_text(state: &ToolState) -> String {
    match state {
        ToolState::Pending => "Pending...".to_string(),
        ToolState::Running { title } => title.clone().unwrap_or_else(|| "Running...".to_string()),
        ToolState::Completed { title } => title.clone(),
        ToolState::Error { message } => format!("Error: {}", message),
    }
}

/// Whether an assistant message carries an error. Always false for
/// user messages.
pub fn has_error(message: &Message) -> bool {
    matches!(message.role, MessageRole::Assistant) && message.error.is_some()
}

/// Extracted error summary for display.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ErrorDetail {
    pub name: String,
    pub message: Option<String>,
}

/// Extract the error name and best-effort message from an assistant
/// message. The nested `data.message` field may be absent or
/// non-string; a non-string value is coerced through its JSON
/// rendering.
pub fn error_detail(message: &Message) -> Option<ErrorDetail> {
    if !has_error(message) {
        return None;
    }
    let error = message.error.as_ref()?;
    let detail = error
        .data
        .as_ref()
        .and_then(|data| data.get("message"))
        .and_then(|value| match value {
            Value::Null => None,
            Value::String(s) => Some(s.clone()),
            other => Some(other.to_string()),
        });
    Some(ErrorDetail {
        name: error.name.clone(),
        message: detail,
    })
}

/// Concatenate the content of all non-ignored text parts, in order.
pub fn extract_text(parts: &[Part]) -> String {
    let mut out = String::new();
    for part in parts {
        if let PartKind::Text { text, ignored } = &part.kind {
            if ignored.unwrap_or(false) {
                continue;
            }
            out.push_str(text);
        }
    }
    out
}

/// Tool invocations among a message's parts, in order.
pub fn extract_tool_calls(parts: &[Part]) -> Vec<&ToolPart> {
    parts
        .iter()
        .filter_map(|part| match &part.kind {
            PartKind::Tool(tool) => Some(tool),
            _ => None,
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::events::{MessageError, MessageTime};
    use chrono::Utc;

    fn streaming_assistant() -> Message {
        Message::assistant("msg_1")
    }

    // =========================================================================
    // Streaming predicate tests
    // =========================================================================

    #[test]
    fn test_is_streaming_incomplete_assistant() {
        assert!(is_streaming(&streaming_assistant()));
    }

    #[test]
    fn test_is_streaming_false_once_completed() {
        let mut msg = streaming_assistant();
        msg.time = MessageTime {
            completed: Some(Utc::now()),
        };
        assert!(!is_streaming(&msg));
    }

    #[test]
    fn test_is_streaming_false_once_errored() {
        let mut msg = streaming_assistant();
        msg.error = Some(MessageError {
            name: "ProviderError".to_string(),
            data: None,
        });
        assert!(!is_streaming(&msg));
    }

    #[test]
    fn test_is_streaming_always_false_for_user() {
        let mut msg = Message::user("msg_1");
        assert!(!is_streaming(&msg));

        // Even with fields a user message never legitimately has
        msg.error = Some(MessageError {
            name: "Weird".to_string(),
            data: None,
        });
        assert!(!is_streaming(&msg));
    }

    // =========================================================================
    // Tool status text tests
    // =========================================================================

    #[test]
    fn test_tool_status_pending() {
        assert_eq!(tool_status_text(&ToolState::Pending), "Pending...");
    }

    #[test]
    fn test_tool_status_running_with_title() {
        let state = ToolState::Running {
            title: Some("Reading src/lib.rs".to_string()),
        };
        assert_eq!(tool_status_text(&state), "Reading src/lib.rs");
    }

    #[test]
    fn test_tool_status_running_without_title() {
        let state = ToolState::Running { title: None };
        assert_eq!(tool_status_text(&state), "Running...");
    }

    #[test]
    fn test_tool_status_completed_uses_title() {
        let state = ToolState::Completed {
            title: "Read 120 lines".to_string(),
        };
        assert_eq!(tool_status_text(&state), "Read 120 lines");
    }

    #[test]
    fn test_tool_status_error_prefixes_message() {
        let state = ToolState::Error {
            message: "permission denied".to_string(),
        };
        assert_eq!(tool_status_text(&state), "Error: permission denied");
    }

    #[test]
    fn test_tool_status_nonempty_for_every_state() {
        let states = [
            ToolState::Pending,
            ToolState::Running { title: None },
            ToolState::Completed {
                title: "done".to_string(),
            },
            ToolState::Error {
                message: "boom".to_string(),
            },
        ];
        for state in &states {
            assert!(!tool_status_text(state).is_empty());
        }
    }

    // =========================================================================
    // Error extraction tests
    // =========================================================================

    #[test]
    fn test_has_error() {
        let mut msg = streaming_assistant();
        assert!(!has_error(&msg));

        msg.error = Some(MessageError {
            name: "ProviderError".to_string(),
            data: None,
        });
        assert!(has_error(&msg));
    }

    #[test]
    fn test_has_error_ignores_user_messages() {
        let mut msg = Message::user("msg_1");
        msg.error = Some(MessageError {
            name: "ProviderError".to_string(),
            data: None,
        });
        assert!(!has_error(&msg));
    }

    #[test]
    fn test_error_detail_with_string_message() {
        let mut msg = streaming_assistant();
        msg.error = Some(MessageError {
            name: "ProviderError".to_string(),
            data: Some(serde_json::json!({ "message": "rate limited" })),
        });

        let detail = error_detail(&msg).unwrap();
        assert_eq!(detail.name, "ProviderError");
        assert_eq!(detail.message.as_deref(), Some("rate limited"));
    }

    #[test]
    fn test_error_detail_without_nested_message() {
        let mut msg = streaming_assistant();
        msg.error = Some(MessageError {
            name: "AbortedError".to_string(),
            data: Some(serde_json::json!({ "code": 499 })),
        });

        let detail = error_detail(&msg).unwrap();
        assert_eq!(detail.name, "AbortedError");
        assert!(detail.message.is_none());
    }

    #[test]
    fn test_error_detail_coerces_non_string_message() {
        let mut msg = streaming_assistant();
        msg.error = Some(MessageError {
            name: "ProviderError".to_string(),
            data: Some(serde_json::json!({ "message": { "code": 500 } })),
        });

        let detail = error_detail(&msg).unwrap();
        assert_eq!(detail.message.as_deref(), Some(r#"{"code":500}"#));
    }

    #[test]
    fn test_error_detail_none_without_error() {
        assert!(error_detail(&streaming_assistant()).is_none());
    }

    #[test]
    fn test_error_detail_null_message_treated_as_absent() {
        let mut msg = streaming_assistant();
        msg.error = Some(MessageError {
            name: "ProviderError".to_string(),
            data: Some(serde_json::json!({ "message": null })),
        });

        let detail = error_detail(&msg).unwrap();
        assert!(detail.message.is_none());
    }

    // =========================================================================
    // Projection tests
    // =========================================================================

    #[test]
    fn test_extract_text_concatenates_in_order() {
        let parts = vec![
            Part::text("prt_1", "Hello "),
            Part::tool("prt_2", "call_1", "read_file"),
            Part::text("prt_3", "world"),
        ];
        assert_eq!(extract_text(&parts), "Hello world");
    }

    #[test]
    fn test_extract_text_skips_ignored() {
        let parts = vec![
            Part::text("prt_1", "visible"),
            Part {
                id: "prt_2".to_string(),
                kind: PartKind::Text {
                    text: "hidden".to_string(),
                    ignored: Some(true),
                },
            },
        ];
        assert_eq!(extract_text(&parts), "visible");
    }

    #[test]
    fn test_extract_text_idempotent() {
        let parts = vec![Part::text("prt_1", "same")];
        assert_eq!(extract_text(&parts), extract_text(&parts));
    }

    #[test]
    fn test_extract_text_empty_parts() {
        assert_eq!(extract_text(&[]), "");
    }

    #[test]
    fn test_extract_tool_calls_preserves_order() {
        let parts = vec![
            Part::tool("prt_1", "call_1", "read_file"),
            Part::text("prt_2", "between"),
            Part::tool("prt_3", "call_2", "run_shell"),
        ];

        let tools = extract_tool_calls(&parts);
        assert_eq!(tools.len(), 2);
        assert_eq!(tools[0].name, "read_file");
        assert_eq!(tools[1].name, "run_shell");
    }

    #[test]
    fn test_extract_tool_calls_empty_without_tools() {
        let parts = vec![Part::text("prt_1", "just text")];
        assert!(extract_tool_calls(&parts).is_empty());
    }
}
