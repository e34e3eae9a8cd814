use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::schema::{PresentationStatus, PresentationType};

/// Seminars and colloquia are hosted by a department, everything else
/// happens at a named meeting.
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
#[serde(untagged)]
pub enum Venue {
    Department {
        institution: String,
        department: String,
    },
    Meeting {
        location: String,
        meeting_name: String,
    },
}

#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct Presentation {
    #[serde(rename = "_id")]
    pub id: String,
    #[serde(rename = "abstract")]
    pub abstract_text: String,
    pub authors: Vec<String>,
    pub begin_date: NaiveDate,
    pub end_date: NaiveDate,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub notes: Option<Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub webinar: Option<bool>,
    #[serde(flatten)]
    pub venue: Venue,
    pub project: Vec<String>,
    pub status: PresentationStatus,
    pub title: String,
    #[serde(rename = "type")]
    pub kind: PresentationType,
}

/// A presentation as entered, before anything is derived from it.
#[derive(Debug, Clone)]
pub struct NewPresentation {
    /// Meeting name, or the department for seminars
    pub name: String,
    /// Meeting location, or the institution for seminars
    pub place: String,
    pub begin_date: String,
    pub end_date: String,
    pub title: String,
    pub abstract_text: String,
    pub person: Option<String>,
    pub authors: Option<Vec<String>>,
    pub grants: Vec<String>,
    pub notes: Option<Vec<String>>,
    pub status: PresentationStatus,
    pub kind: PresentationType,
    pub webinar: bool,
    pub no_expense: bool,
    pub database: Option<String>,
    pub id: Option<String>,
    pub no_cal: bool,
}

impl NewPresentation {
    /// Only the positional fields set, everything else at its default.
    pub fn new(name: &str, place: &str, begin_date: &str, end_date: &str) -> Self {
        Self {
            name: name.to_string(),
            place: place.to_string(),
            begin_date: begin_date.to_string(),
            end_date: end_date.to_string(),
            title: String::from("tbd"),
            abstract_text: String::from("tbd"),
            person: None,
            authors: None,
            grants: vec![String::from("tbd")],
            notes: None,
            status: PresentationStatus::Accepted,
            kind: PresentationType::Invited,
            webinar: false,
            no_expense: false,
            database: None,
            id: None,
            no_cal: false,
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct AddedPresentation {
    pub key: String,
    pub database: String,
    pub expense_added: bool,
}
