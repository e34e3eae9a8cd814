use anyhow::{Result, anyhow};
use async_trait::async_trait;
use tokio_rusqlite::Connection;

use super::{CalendarClient, CalendarEvent};
use crate::core::AppConfig;
use crate::google::gcal::{EventDate, GoogleEvent, insert_event};
use crate::google::oauth::{interactive_auth_flow, refresh_access_token, stored_refresh_token};

/// Google Calendar backed by the refresh token saved in the `auth` table.
pub struct GoogleCalendar {
    config: AppConfig,
    db: Connection,
}

impl GoogleCalendar {
    pub fn new(config: AppConfig, db: Connection) -> Self {
        Self { config, db }
    }

    async fn try_create_event(&self, event: &CalendarEvent) -> Result<()> {
        let refresh_token = stored_refresh_token(&self.db)
            .await?
            .ok_or(anyhow!("No calendar account authorized. Run `labbook auth`"))?;
        let token = refresh_access_token(
            &self.config.google_oauth_url,
            &self.config.gcal_client_id,
            &self.config.gcal_client_secret,
            &refresh_token,
        )
        .await?;

        let google_event = GoogleEvent {
            summary: event.summary.clone(),
            location: event.location.clone(),
            start: EventDate {
                date: event.start_date,
            },
            end: EventDate {
                date: event.end_date,
            },
        };
        let inserted = insert_event(
            &self.config.google_api_url,
            &token.access_token,
            &self.config.gcal_calendar_id,
            &google_event,
        )
        .await?;
        tracing::debug!("Created calendar event {}", inserted.id);

        Ok(())
    }
}

#[async_trait]
impl CalendarClient for GoogleCalendar {
    async fn create_event(&self, event: &CalendarEvent) -> bool {
        match self.try_create_event(event).await {
            Ok(()) => true,
            Err(err) => {
                tracing::warn!("Failed to add {} to calendar: {:#}", event.summary, err);
                false
            }
        }
    }

    async fn reauthenticate(&self) -> Result<()> {
        interactive_auth_flow(&self.config, &self.db).await
    }
}
