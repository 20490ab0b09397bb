//! Interpretation of the game's replies
//!
//! The game answers with a JSON envelope on recent versions and with plain
//! text on older ones. Both are folded into a short detail suffix that is
//! appended to the per-file log line.

use serde_json::Value;

use crate::error::RemoteError;

/// Body returned by game versions that predate the file API
const OUTDATED_SERVER_BODY: &str = "not a script file";

/// Plain-text acknowledgement of old game versions, carries no information
const LEGACY_ACK_BODY: &str = "written";

/// Successful reply to an upload or delete
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RemoteReply {
    /// Suffix such as `, overwritten, RAM usage: 1.6GB`, possibly empty
    pub detail: String,
}

/// What a response body says beyond its status code
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub(crate) struct BodySummary {
    /// `success` field of a JSON body, if there was one
    pub success: Option<bool>,
    pub detail: String,
}

impl BodySummary {
    pub(crate) fn parse(body: &str) -> Self {
        let Ok(json) = serde_json::from_str::<Value>(body) else {
            let detail = if body.is_empty() || body == LEGACY_ACK_BODY {
                String::new()
            } else {
                format!(" - {body}")
            };
            return Self {
                success: None,
                detail,
            };
        };

        let mut detail = String::new();

        if let Some(msg) = json.get("msg").filter(|m| !m.is_null()) {
            match msg.as_str() {
                Some(text) => detail.push_str(&format!(" - {text}")),
                None => detail.push_str(&format!(" - {msg}")),
            }
        }

        if let Some(data) = json.get("data") {
            if data.get("overwritten").is_some_and(is_truthy) {
                detail.push_str(", overwritten");
            }
            if let Some(ram) = data.get("ramUsage").filter(|r| !r.is_null()) {
                match ram.as_str() {
                    Some(text) => detail.push_str(&format!(", RAM usage: {text}GB")),
                    None => detail.push_str(&format!(", RAM usage: {ram}GB")),
                }
            }
        }

        Self {
            success: json.get("success").and_then(Value::as_bool),
            detail,
        }
    }
}

fn is_truthy(value: &Value) -> bool {
    match value {
        Value::Null => false,
        Value::Bool(b) => *b,
        Value::Number(n) => n.as_f64().is_some_and(|n| n != 0.0),
        Value::String(s) => !s.is_empty(),
        Value::Array(_) | Value::Object(_) => true,
    }
}

/// Classify the reply to an upload or delete
///
/// A JSON `success` field decides the outcome over the status code, except
/// that a 401 is always reported as unauthorized.
pub(crate) fn interpret(status: u16, body: &str) -> Result<RemoteReply, RemoteError> {
    if body == OUTDATED_SERVER_BODY {
        return Err(RemoteError::OutdatedServer);
    }

    let summary = BodySummary::parse(body);

    if status == 401 {
        return Err(RemoteError::Unauthorized {
            detail: summary.detail,
        });
    }

    match summary.success {
        Some(true) => Ok(RemoteReply {
            detail: summary.detail,
        }),
        Some(false) => Err(RemoteError::Failed {
            detail: summary.detail,
        }),
        None if status == 200 => Ok(RemoteReply {
            detail: summary.detail,
        }),
        None => Err(RemoteError::Rejected {
            status,
            detail: summary.detail,
        }),
    }
}
