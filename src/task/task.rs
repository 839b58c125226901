use chrono::{Local, NaiveDate, NaiveDateTime, Timelike};
use serde::{Deserialize, Serialize};

/// Get the current date in local timezone
pub fn local_date_today() -> NaiveDate {
    Local::now().date_naive()
}

/// Get the current date and time in local timezone, at second precision
/// (the stored timestamp format carries no sub-second part).
pub fn local_datetime_now() -> NaiveDateTime {
    let now = Local::now().naive_local();
    now.with_nanosecond(0).unwrap_or(now)
}

/// A single to-do item
///
/// Tasks are append-ordered in the store. `completed` only ever transitions
/// false to true; `created_at` is fixed at creation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Task {
    /// Unique identifier, assigned from the store's persisted counter
    pub id: u32,
    /// Description of the task (non-empty)
    pub description: String,
    /// Optional due date (format: YYYY-MM-DD, `null` when absent)
    #[serde(with = "due_date", default)]
    pub due_date: Option<NaiveDate>,
    /// Whether the task has been completed
    #[serde(default)]
    pub completed: bool,
    /// Timestamp when the task was created (format: YYYY-MM-DD HH:MM:SS)
    #[serde(with = "timestamp")]
    pub created_at: NaiveDateTime,
}

impl Task {
    /// Create a new incomplete task stamped with the current local time.
    pub fn new(id: u32, description: impl Into<String>, due_date: Option<NaiveDate>) -> Self {
        Self {
            id,
            description: description.into(),
            due_date,
            completed: false,
            created_at: local_datetime_now(),
        }
    }

    /// True if the task is still active and due exactly on `date`.
    pub fn is_due_on(&self, date: NaiveDate) -> bool {
        !self.completed && self.due_date == Some(date)
    }
}

/// Serde adapter for the optional `YYYY-MM-DD` due date encoding.
///
/// Deserialization is forgiving: a stored date that does not parse reads as
/// `None`, so one corrupt record never takes the rest of the file with it.
pub(crate) mod due_date {
    use crate::dates::DATE_FORMAT;
    use chrono::NaiveDate;
    use serde::{Deserialize, Deserializer, Serialize, Serializer};

    pub fn serialize<S>(value: &Option<NaiveDate>, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        value.serialize(serializer)
    }

    pub fn deserialize<'de, D>(deserializer: D) -> Result<Option<NaiveDate>, D::Error>
    where
        D: Deserializer<'de>,
    {
        let raw = Option::<String>::deserialize(deserializer)?;
        Ok(raw.and_then(|s| NaiveDate::parse_from_str(&s, DATE_FORMAT).ok()))
    }
}

/// Serde adapter for the `YYYY-MM-DD HH:MM:SS` timestamp encoding.
pub(crate) mod timestamp {
    use chrono::NaiveDateTime;
    use serde::{Deserialize, Deserializer, Serializer, de};

    pub const FORMAT: &str = "%Y-%m-%d %H:%M:%S";

    pub fn serialize<S>(value: &NaiveDateTime, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(&value.format(FORMAT).to_string())
    }

    pub fn deserialize<'de, D>(deserializer: D) -> Result<NaiveDateTime, D::Error>
    where
        D: Deserializer<'de>,
    {
        let raw = String::deserialize(deserializer)?;
        NaiveDateTime::parse_from_str(&raw, FORMAT).map_err(de::Error::custom)
    }
}
