use chrono::{DateTime, NaiveDate, NaiveTime, Utc};
use serde::{Deserialize, Serialize};

/// Calendar date as Classroom reports it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct DueDate {
    pub year: i32,
    pub month: u32,
    pub day: u32,
}

/// Time of day in UTC. Either component may be omitted upstream.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DueTime {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub hours: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub minutes: Option<u32>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Coursework {
    pub id: String,
    pub course_id: String,
    pub title: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub due_date: Option<DueDate>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub due_time: Option<DueTime>,
    pub creation_time: String,
    pub update_time: String,
}

/// The instant an assignment is due. Without a time of day it is the end of
/// the due day; inside a time of day an omitted field is zero, as Classroom
/// drops zero values. Impossible dates yield `None`.
pub fn due_instant(date: Option<DueDate>, time: Option<DueTime>) -> Option<DateTime<Utc>> {
    let date = date?;
    let day = NaiveDate::from_ymd_opt(date.year, date.month, date.day)?;

    let time = match time {
        Some(t) => NaiveTime::from_hms_opt(t.hours.unwrap_or(0), t.minutes.unwrap_or(0), 0)?,
        None => NaiveTime::from_hms_opt(23, 59, 59)?,
    };

    Some(day.and_time(time).and_utc())
}
