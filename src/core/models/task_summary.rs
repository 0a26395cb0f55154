use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

pub const PLACEHOLDER_ID: &str = "placeholder";
pub const PLACEHOLDER_TITLE: &str = "Task 1";
pub const PLACEHOLDER_DESCRIPTION: &str =
    "Use my Google search command to evaluate market trends and determine business strategies.";

fn new_id() -> String {
    Uuid::new_v4().to_string()
}

/// The data a card displays. Hosting views pass it in as a JS object,
/// so keys are camelCase and `dueDate` is an ISO date.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct TaskSummary {
    #[serde(default = "new_id")]
    pub id: String,
    pub title: String,
    pub due_date: NaiveDate,
    pub description: String,
}

impl TaskSummary {
    pub fn new(title: String, due_date: NaiveDate, description: String) -> Self {
        Self {
            id: new_id(),
            title,
            due_date,
            description,
        }
    }

    /// Fixed content shown when the caller supplies no summary.
    pub fn placeholder() -> Self {
        // 6 April; the year is never displayed
        let due_date = NaiveDate::from_ymd_opt(2024, 4, 6).unwrap_or_default();
        Self {
            id: PLACEHOLDER_ID.to_string(),
            title: PLACEHOLDER_TITLE.to_string(),
            due_date,
            description: PLACEHOLDER_DESCRIPTION.to_string(),
        }
    }

    /// Day without padding followed by the abbreviated month, e.g. "6 Apr".
    pub fn due_label(&self) -> String {
        self.due_date.format("%-d %b").to_string()
    }

    pub fn from_json(json: &str) -> Result<Self, String> {
        serde_json::from_str(json).map_err(|e| format!("Failed to parse task summary: {}", e))
    }
}
