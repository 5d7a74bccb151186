use serde::Deserialize;
use serde_json::Value;

/// One in-progress operation, as reported by the server.
///
/// The document shape is loose: every field is optional and may carry an
/// unexpected type. Each accessor reads its field with a declared default,
/// so a malformed record renders as a row of defaults instead of failing.
#[derive(Debug, Clone, Deserialize)]
#[serde(transparent)]
pub struct OperationRecord(pub Value);

/// Field names checked for the elapsed-seconds value, in priority order.
/// The shell reports `secsRunning`; the server command reports `secs_running`.
const SECS_FIELDS: [&str; 2] = ["secsRunning", "secs_running"];

/// Command fields naming the target collection, in priority order.
const COMMAND_TARGETS: [&str; 2] = ["find", "aggregate"];

impl OperationRecord {
    /// Operation identifier, or empty if absent.
    pub fn opid(&self) -> String {
        self.0.get("opid").map(display_string).unwrap_or_default()
    }

    /// Seconds the operation has been running; absent or malformed reads as 0.
    pub fn secs_running(&self) -> u64 {
        SECS_FIELDS
            .iter()
            .find_map(|f| self.0.get(f).and_then(as_secs))
            .unwrap_or(0)
    }

    /// Operation kind label, defaulting to "none".
    pub fn op_type(&self) -> String {
        match self.0.get("op") {
            Some(Value::String(s)) => s.clone(),
            _ => "none".to_string(),
        }
    }

    /// Fully qualified namespace the operation targets, or empty.
    pub fn namespace(&self) -> String {
        string_or_empty(self.0.get("ns"))
    }

    /// Target collection from the nested command document: the first of the
    /// candidate command fields that is present wins.
    pub fn command_target(&self) -> String {
        let Some(command) = self.0.get("command") else {
            return String::new();
        };
        for key in COMMAND_TARGETS {
            if let Some(target) = command.get(key) {
                return display_string(target);
            }
        }
        String::new()
    }

    /// Short description of the chosen execution plan, or empty.
    pub fn plan_summary(&self) -> String {
        string_or_empty(self.0.get("planSummary"))
    }

    /// Originating client (host:port), or empty.
    pub fn client(&self) -> String {
        string_or_empty(self.0.get("client"))
    }
}

fn string_or_empty(v: Option<&Value>) -> String {
    match v {
        Some(Value::String(s)) => s.clone(),
        _ => String::new(),
    }
}

/// Canonical decimal text for a field value. Strings pass through, numbers
/// use their plain decimal form, anything else (including null) is empty.
fn display_string(v: &Value) -> String {
    match unwrap_number(v) {
        Value::String(s) => s.clone(),
        Value::Number(n) => n.to_string(),
        _ => String::new(),
    }
}

/// Read a non-negative integer, tolerating Extended JSON wrappers and
/// numeric strings.
fn as_secs(v: &Value) -> Option<u64> {
    match unwrap_number(v) {
        Value::Number(n) => n.as_u64(),
        Value::String(s) => s.parse().ok(),
        _ => None,
    }
}

/// Canonical Extended JSON wraps numbers as e.g. {"$numberLong": "5"};
/// unwrap to the inner value so callers see the plain form.
fn unwrap_number(v: &Value) -> &Value {
    if let Value::Object(map) = v {
        if map.len() == 1 {
            for key in ["$numberLong", "$numberInt", "$numberDouble"] {
                if let Some(inner) = map.get(key) {
                    return inner;
                }
            }
        }
    }
    v
}
