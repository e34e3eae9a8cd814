//! Put a presentation on the calendar, re-authenticating and retrying
//! when the first attempt fails. Giving up is logged but never fatal.

pub mod google;

pub use google::GoogleCalendar;

use std::time::Duration;

use anyhow::Result;
use async_trait::async_trait;
use chrono::NaiveDate;

pub const MAX_ATTEMPTS: u32 = 60;
pub const RETRY_DELAY: Duration = Duration::from_secs(1);

#[derive(Debug, Clone, PartialEq)]
pub struct CalendarEvent {
    pub summary: String,
    pub location: String,
    pub start_date: NaiveDate,
    pub end_date: NaiveDate,
}

#[async_trait]
pub trait CalendarClient: Send + Sync {
    /// Returns false on any failure.
    async fn create_event(&self, event: &CalendarEvent) -> bool;

    /// Interactive, blocks until the user finishes consent.
    async fn reauthenticate(&self) -> Result<()>;
}

#[derive(Debug, Clone)]
pub struct RetryPolicy {
    pub max_attempts: u32,
    pub delay: Duration,
}

impl Default for RetryPolicy {
    fn default() -> Self {
        Self {
            max_attempts: MAX_ATTEMPTS,
            delay: RETRY_DELAY,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NotifyOutcome {
    Created,
    /// `attempts` counts retries after re-authentication.
    CreatedAfterRetry { attempts: u32 },
    GaveUp { attempts: u32 },
}

pub async fn notify(
    client: &dyn CalendarClient,
    event: &CalendarEvent,
    policy: &RetryPolicy,
) -> NotifyOutcome {
    if client.create_event(event).await {
        tracing::debug!("Added {} to the calendar", event.summary);
        return NotifyOutcome::Created;
    }

    tracing::info!("Calendar rejected the event, re-authenticating");
    if let Err(err) = client.reauthenticate().await {
        tracing::warn!("Calendar re-authentication failed: {}", err);
    }

    for attempt in 1..=policy.max_attempts {
        tokio::time::sleep(policy.delay).await;
        if client.create_event(event).await {
            tracing::debug!(
                "Added {} to the calendar after {} retries",
                event.summary,
                attempt
            );
            return NotifyOutcome::CreatedAfterRetry { attempts: attempt };
        }
    }

    tracing::warn!(
        "Gave up adding {} to the calendar after {} retries",
        event.summary,
        policy.max_attempts
    );
    NotifyOutcome::GaveUp {
        attempts: policy.max_attempts,
    }
}
