use serde::{Deserialize, Serialize};

/// A scheduled care reminder, as stored by the platform.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Reminder {
    #[serde(rename = "_id")]
    pub id: String,
    #[serde(rename = "userId", default)]
    pub user_id: String,
    pub title: String,
    #[serde(default)]
    pub description: String,
    /// Due date, YYYY-MM-DD.
    pub date: String,
    /// Due time, HH:MM.
    pub time: String,
    #[serde(rename = "createdAt", default, skip_serializing_if = "Option::is_none")]
    pub created_at: Option<String>,
}

/// GET /reminders response. The API pre-splits by due time so the board
/// never re-derives "expired" locally.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ReminderSchedule {
    #[serde(default)]
    pub future: Vec<Reminder>,
    #[serde(default)]
    pub expired: Vec<Reminder>,
}
