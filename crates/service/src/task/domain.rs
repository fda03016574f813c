use chrono::NaiveDateTime;
use models::task::{TaskFields, DEFAULT_STATUS};
use serde::{Deserialize, Serialize};

/// Request body for create and update.
///
/// Every field is optional on the wire. An `id` in the body is not part of the
/// payload and is dropped during deserialization.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TaskInput {
    #[serde(default)]
    pub title: Option<String>,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default, deserialize_with = "models::datetime::deserialize_optional")]
    pub due_date: Option<NaiveDateTime>,
    #[serde(default)]
    pub priority: Option<String>,
    #[serde(default)]
    pub status: Option<String>,
}

impl TaskInput {
    /// Column values for this payload; a missing status becomes `Pending`.
    pub fn into_fields(self) -> TaskFields {
        TaskFields {
            title: self.title,
            description: self.description,
            due_date: self.due_date,
            priority: self.priority,
            status: self.status.unwrap_or_else(|| DEFAULT_STATUS.to_string()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn missing_status_defaults_to_pending() {
        let input: TaskInput = serde_json::from_value(json!({"title": "Write report"})).unwrap();
        let fields = input.into_fields();
        assert_eq!(fields.title.as_deref(), Some("Write report"));
        assert_eq!(fields.status, "Pending");
    }

    #[test]
    fn explicit_null_status_defaults_to_pending() {
        let input: TaskInput = serde_json::from_value(json!({"status": null})).unwrap();
        assert_eq!(input.into_fields().status, "Pending");
    }

    #[test]
    fn body_id_is_ignored() {
        let input: TaskInput =
            serde_json::from_value(json!({"id": 42, "title": "x", "status": "Done"})).unwrap();
        assert_eq!(input.title.as_deref(), Some("x"));
        assert_eq!(input.into_fields().status, "Done");
    }

    #[test]
    fn parses_browser_due_date() {
        let input: TaskInput =
            serde_json::from_value(json!({"dueDate": "2024-12-01T17:00"})).unwrap();
        assert_eq!(input.due_date.unwrap().to_string(), "2024-12-01 17:00:00");
    }
}
