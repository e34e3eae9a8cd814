//! OAuth for the Google Calendar API using the copy/paste (out of band)
//! code flow.

use std::io::{self, Write};

use anyhow::{Context, Result, anyhow};
use reqwest::Client;
use serde::Deserialize;
use tokio_rusqlite::Connection;

use crate::core::AppConfig;

pub const SERVICE: &str = "gcal";
pub const SCOPE: &str = "https://www.googleapis.com/auth/calendar.events";

#[derive(Debug, Deserialize)]
pub struct OAuthToken {
    pub access_token: String,
    pub refresh_token: Option<String>,
    pub expires_in: Option<i64>,
    pub token_type: Option<String>,
}

pub fn authorization_url(config: &AppConfig) -> String {
    format!(
        "https://accounts.google.com/o/oauth2/v2/auth?client_id={}&redirect_uri={}&response_type=code&scope={}&access_type=offline&prompt=consent",
        urlencoding::encode(&config.gcal_client_id),
        urlencoding::encode(&config.gcal_redirect_uri),
        urlencoding::encode(SCOPE)
    )
}

async fn token_request(oauth_url: &str, params: &[(&str, &str)]) -> Result<OAuthToken> {
    let resp = Client::new()
        .post(format!("{}/token", oauth_url))
        .form(params)
        .send()
        .await?
        .error_for_status()
        .context("Token request rejected")?;
    Ok(resp.json().await?)
}

pub async fn exchange_code_for_token(
    oauth_url: &str,
    client_id: &str,
    client_secret: &str,
    code: &str,
    redirect_uri: &str,
) -> Result<OAuthToken> {
    token_request(
        oauth_url,
        &[
            ("client_id", client_id),
            ("client_secret", client_secret),
            ("code", code),
            ("redirect_uri", redirect_uri),
            ("grant_type", "authorization_code"),
        ],
    )
    .await
}

pub async fn refresh_access_token(
    oauth_url: &str,
    client_id: &str,
    client_secret: &str,
    refresh_token: &str,
) -> Result<OAuthToken> {
    token_request(
        oauth_url,
        &[
            ("client_id", client_id),
            ("client_secret", client_secret),
            ("refresh_token", refresh_token),
            ("grant_type", "refresh_token"),
        ],
    )
    .await
}

/// Most recently stored refresh token for the calendar service.
pub async fn stored_refresh_token(db: &Connection) -> Result<Option<String>> {
    let token = db
        .call(|conn| {
            let mut stmt =
                conn.prepare("SELECT refresh_token FROM auth WHERE service = ?1 ORDER BY rowid DESC LIMIT 1")?;
            let mut rows = stmt.query_map([SERVICE], |row| row.get::<_, String>(0))?;
            Ok(rows.next().transpose()?)
        })
        .await?;
    Ok(token)
}

pub async fn store_refresh_token(db: &Connection, email: &str, refresh_token: &str) -> Result<()> {
    let email = email.to_owned();
    let refresh_token = refresh_token.to_owned();
    db.call(move |conn| {
        conn.execute(
            "INSERT INTO auth (id, service, refresh_token) VALUES (?1, ?2, ?3)
             ON CONFLICT(id) DO UPDATE SET service = excluded.service, refresh_token = excluded.refresh_token",
            (&email, SERVICE, &refresh_token),
        )?;
        Ok(())
    })
    .await?;
    Ok(())
}

fn prompt(message: &str) -> Result<String> {
    print!("{}", message);
    io::stdout().flush()?;
    let mut line = String::new();
    io::stdin()
        .read_line(&mut line)
        .context("Failed to read from stdin")?;
    Ok(line.trim().to_owned())
}

/// Walk the user through consent in their browser and save the
/// resulting refresh token. Blocks on stdin.
pub async fn interactive_auth_flow(config: &AppConfig, db: &Connection) -> Result<()> {
    let user_email = prompt("Enter the email address of the calendar account: ")?;

    println!(
        "\nPlease open the following URL in your browser and authorize access:\n\n{}\n",
        authorization_url(config)
    );
    let code = prompt("Paste the authorization code shown by Google here: ")?;

    let token = exchange_code_for_token(
        &config.google_oauth_url,
        &config.gcal_client_id,
        &config.gcal_client_secret,
        &code,
        &config.gcal_redirect_uri,
    )
    .await?;

    let refresh_token = token
        .refresh_token
        .ok_or(anyhow!("No refresh token in response"))?;
    store_refresh_token(db, &user_email, &refresh_token).await?;
    println!("Refresh token for {} saved to DB.", user_email);

    Ok(())
}
