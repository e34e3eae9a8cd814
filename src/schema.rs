//! Collection names and the closed value sets records are checked against.

use serde::{Deserialize, Serialize};

pub const PRESENTATIONS_COLL: &str = "presentations";
pub const EXPENSES_COLL: &str = "expenses";

#[derive(clap::ValueEnum, Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
#[value(rename_all = "snake_case")]
pub enum PresentationStatus {
    Accepted,
    Cancelled,
    Declined,
    Inprep,
    Invited,
    Merged,
}

#[derive(clap::ValueEnum, Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
#[value(rename_all = "snake_case")]
pub enum PresentationType {
    Award,
    Colloquium,
    ContributedOral,
    Invited,
    Keynote,
    Plenary,
    Poster,
    Seminar,
    Tutorial,
}

impl PresentationType {
    pub fn to_str(&self) -> &'static str {
        match self {
            PresentationType::Award => "award",
            PresentationType::Colloquium => "colloquium",
            PresentationType::ContributedOral => "contributed_oral",
            PresentationType::Invited => "invited",
            PresentationType::Keynote => "keynote",
            PresentationType::Plenary => "plenary",
            PresentationType::Poster => "poster",
            PresentationType::Seminar => "seminar",
            PresentationType::Tutorial => "tutorial",
        }
    }

    /// Talks hosted by a department rather than given at a meeting.
    pub fn is_departmental(&self) -> bool {
        matches!(
            self,
            PresentationType::Seminar | PresentationType::Colloquium
        )
    }
}

#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum ExpenseStatus {
    Unsubmitted,
    Submitted,
    Reimbursed,
    Cancelled,
}
