//! Google Calendar REST calls.

use anyhow::{Context, Result};
use chrono::NaiveDate;
use reqwest::Client;
use serde::{Deserialize, Serialize};

#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct EventDate {
    pub date: NaiveDate,
}

/// An all-day event as the Calendar API expects it.
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct GoogleEvent {
    pub summary: String,
    pub location: String,
    pub start: EventDate,
    pub end: EventDate,
}

#[derive(Debug, Deserialize)]
pub struct InsertedEvent {
    pub id: String,
    #[serde(rename = "htmlLink")]
    pub html_link: Option<String>,
}

pub async fn insert_event(
    api_url: &str,
    access_token: &str,
    calendar_id: &str,
    event: &GoogleEvent,
) -> Result<InsertedEvent> {
    let url = format!(
        "{}/calendar/v3/calendars/{}/events",
        api_url,
        urlencoding::encode(calendar_id)
    );
    let resp = Client::new()
        .post(url)
        .bearer_auth(access_token)
        .json(event)
        .send()
        .await?
        .error_for_status()
        .with_context(|| format!("Failed to create event: {}", event.summary))?;

    Ok(resp.json().await?)
}
