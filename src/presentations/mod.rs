//! Add a presentation to the presentations collection, along with a
//! template expense and a calendar entry.

pub mod models;

pub use models::*;

use anyhow::{Result, anyhow, bail};
use chrono::NaiveDate;
use serde_json::Value;

use crate::calendar::{CalendarClient, CalendarEvent, RetryPolicy, notify};
use crate::core::AppConfig;
use crate::core::dates::parse_date;
use crate::expenses::{ExpenseContext, build_expense};
use crate::schema::{EXPENSES_COLL, ExpenseStatus, PRESENTATIONS_COLL};
use crate::store::{DocumentStore, record_id};

/// Two lowercase letters identifying the presenter: first and last
/// initials, or the first two letters of a single name.
pub fn name_key(person: &str) -> Result<String> {
    let parts: Vec<&str> = person.split_whitespace().collect();
    let key: String = match parts.as_slice() {
        [] => bail!("Presenter name is empty"),
        [only] => only.chars().take(2).collect(),
        [first, .., last] => first.chars().take(1).chain(last.chars().take(1)).collect(),
    };
    Ok(key.to_lowercase())
}

/// `YYMM` + presenter initials + `_` + the place, lowercased with all
/// whitespace removed. e.g. `2305jd_mitboston`
pub fn derive_key(begin_date: NaiveDate, person: &str, place: &str) -> Result<String> {
    let place_key: String = place
        .split_whitespace()
        .collect::<String>()
        .to_lowercase();
    if place_key.is_empty() {
        bail!("Place is empty, can't build an id from it. Pass --id instead");
    }

    Ok(format!(
        "{}{}_{}",
        begin_date.format("%y%m"),
        name_key(person)?,
        place_key
    ))
}

pub fn ensure_unique(key: &str, existing: &[Value]) -> Result<()> {
    if existing.iter().any(|doc| record_id(doc) == Some(key)) {
        bail!(
            "{} appears to already exist in the {} collection",
            key,
            PRESENTATIONS_COLL
        );
    }
    Ok(())
}

/// Presenter from the command line, else the configured default user.
pub fn resolve_person(input: &NewPresentation, config: &AppConfig) -> Result<String> {
    input
        .person
        .clone()
        .or_else(|| config.default_user_id.clone())
        .map(|person| person.trim().to_string())
        .ok_or(anyhow!(
            "No person has been set. Rerun with --person, or add your id (e.g. sbillinge) as default_user_id in your user config"
        ))
}

/// Webinars never get an expense.
pub fn suppresses_expense(input: &NewPresentation) -> bool {
    input.no_expense || input.webinar
}

pub fn build_presentation(
    key: &str,
    input: &NewPresentation,
    person: &str,
    begin_date: NaiveDate,
    end_date: NaiveDate,
) -> Presentation {
    let authors = input
        .authors
        .clone()
        .filter(|authors| !authors.is_empty())
        .unwrap_or_else(|| vec![person.to_string()]);

    let venue = if input.kind.is_departmental() {
        Venue::Department {
            institution: input.place.clone(),
            department: input.name.clone(),
        }
    } else {
        Venue::Meeting {
            location: input.place.clone(),
            meeting_name: input.name.clone(),
        }
    };

    Presentation {
        id: key.to_string(),
        abstract_text: input.abstract_text.clone(),
        authors,
        begin_date,
        end_date,
        notes: input.notes.clone(),
        webinar: input.webinar.then_some(true),
        venue,
        project: vec![String::from("all")],
        status: input.status,
        title: input.title.clone(),
        kind: input.kind,
    }
}

pub fn expense_context(presentation: &Presentation, input: &NewPresentation) -> ExpenseContext {
    ExpenseContext {
        payee: presentation.authors[0].clone(),
        purpose: format!(
            "give {} presentation at {}, {}",
            input.kind.to_str(),
            input.name,
            input.place
        ),
        where_: String::from("tbd"),
        status: ExpenseStatus::Unsubmitted,
        business: false,
        grants: input.grants.clone(),
        notes: input.notes.clone().unwrap_or_default(),
    }
}

/// Validate, put it on the calendar, then write the presentation and
/// (unless suppressed) its expense. The two writes are independent: a
/// failed expense insert leaves the presentation in place.
pub async fn add_presentation(
    store: &dyn DocumentStore,
    calendar: &dyn CalendarClient,
    retry: &RetryPolicy,
    config: &AppConfig,
    input: NewPresentation,
) -> Result<AddedPresentation> {
    let database = config.resolve_database(input.database.as_deref())?;
    let existing = store.list_all(&database, PRESENTATIONS_COLL).await?;

    let begin_date = parse_date(&input.begin_date)?;
    let end_date = parse_date(&input.end_date)?;

    let person = resolve_person(&input, config)?;
    let key = match &input.id {
        Some(id) => id.clone(),
        None => derive_key(begin_date, &person, &input.place)?,
    };
    ensure_unique(&key, &existing)?;

    if !input.no_cal {
        let event = CalendarEvent {
            summary: input.name.clone(),
            location: input.place.clone(),
            start_date: begin_date,
            end_date,
        };
        let outcome = notify(calendar, &event, retry).await;
        tracing::debug!("Calendar outcome for {}: {:?}", key, outcome);
    }

    let presentation = build_presentation(&key, &input, &person, begin_date, end_date);
    store
        .insert_one(
            &database,
            PRESENTATIONS_COLL,
            serde_json::to_value(&presentation)?,
        )
        .await?;
    println!("{} has been added in {}", key, PRESENTATIONS_COLL);

    let expense_added = !suppresses_expense(&input);
    if expense_added {
        let ctx = expense_context(&presentation, &input);
        let expense = build_expense(&key, begin_date, end_date, &ctx);
        store
            .insert_one(&database, EXPENSES_COLL, serde_json::to_value(&expense)?)
            .await?;
        println!("{} has been added in {}", key, EXPENSES_COLL);
    }

    Ok(AddedPresentation {
        key,
        database,
        expense_added,
    })
}
