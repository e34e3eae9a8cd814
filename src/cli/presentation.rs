use anyhow::Result;
use clap::Args;

use crate::calendar::{GoogleCalendar, RetryPolicy};
use crate::core::AppConfig;
use crate::core::db::async_db;
use crate::presentations::{NewPresentation, add_presentation};
use crate::schema::{PresentationStatus, PresentationType};
use crate::store::SqliteStore;

#[derive(Args, Debug)]
pub struct PresentationArgs {
    /// Name of the event. Meeting name if a meeting, department if a seminar
    pub name: String,
    /// Where it happens. Location if a conference, institution for seminars
    pub place: String,
    /// Begin date of the presentation
    pub begin_date: String,
    /// End date of the presentation
    pub end_date: String,
    /// Title of the presentation
    #[arg(short, long, default_value = "tbd")]
    pub title: String,
    /// Abstract of the presentation
    #[arg(short, long = "abstract", default_value = "tbd")]
    pub abstract_text: String,
    /// The person presenting, used to build the id. Defaults to
    /// default_user_id in your user config
    #[arg(short, long)]
    pub person: Option<String>,
    /// Authors of the presentation, defaults to the presenter
    #[arg(short = 'u', long, num_args = 1..)]
    pub authors: Option<Vec<String>>,
    /// Grants that support this presentation
    #[arg(short, long, num_args = 1.., default_value = "tbd")]
    pub grants: Vec<String>,
    /// Notes to add, quote any note containing spaces
    #[arg(short, long, num_args = 1..)]
    pub notes: Option<Vec<String>>,
    #[arg(short, long, value_enum, default_value = "accepted")]
    pub status: PresentationStatus,
    #[arg(short = 'y', long = "type", value_enum, default_value = "invited")]
    pub kind: PresentationType,
    /// Is the presentation a webinar? Webinars never get an expense
    #[arg(short, long, action)]
    pub webinar: bool,
    /// Do not add a template expense to the expenses collection
    #[arg(long = "no-expense", action)]
    pub no_expense: bool,
    /// Database to update, defaults to the first configured database
    #[arg(long)]
    pub database: Option<String>,
    /// Use this id instead of one built from date, presenter and place
    #[arg(long)]
    pub id: Option<String>,
    /// Do not add the presentation to Google Calendar
    #[arg(long = "no_cal", action)]
    pub no_cal: bool,
}

impl From<PresentationArgs> for NewPresentation {
    fn from(args: PresentationArgs) -> Self {
        Self {
            name: args.name,
            place: args.place,
            begin_date: args.begin_date,
            end_date: args.end_date,
            title: args.title,
            abstract_text: args.abstract_text,
            person: args.person,
            authors: args.authors,
            grants: args.grants,
            notes: args.notes,
            status: args.status,
            kind: args.kind,
            webinar: args.webinar,
            no_expense: args.no_expense,
            database: args.database,
            id: args.id,
            no_cal: args.no_cal,
        }
    }
}

pub async fn run(args: PresentationArgs, config: AppConfig) -> Result<()> {
    let db = async_db(&config.db_path).await?;
    let store = SqliteStore::new(db.clone());
    let calendar = GoogleCalendar::new(config.clone(), db);

    let added = add_presentation(
        &store,
        &calendar,
        &RetryPolicy::default(),
        &config,
        args.into(),
    )
    .await?;
    tracing::info!("Finished adding {} to {}", added.key, added.database);

    Ok(())
}
