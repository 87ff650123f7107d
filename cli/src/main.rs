//! Operator CLI for the caseboard backend.
//!
//! Drives the same headless dashboard layer the UI uses — cached queries,
//! invalidating mutations, page-state filtering — from the terminal, against
//! a running backend.

use std::time::Instant;

use clap::{Args, Parser, Subcommand};
use client::cache::{Cache, Policy};
use client::net::api::{Api, ApiError};
use client::ops;
use client::state::cases::CasesState;
use client::state::schedule::ScheduleState;
use client::state::tasks::TasksState;
use records::RecordId;
use records::case::CaseStatus;
use records::court::{Cnr, CnrError};
use records::note::NoteDraft;
use records::task::DueBucket;
use time::OffsetDateTime;
use time::format_description::well_known::Rfc3339;

#[derive(Debug, thiserror::Error)]
enum CliError {
    #[error("api request failed: {0}")]
    Api(#[from] ApiError),
    #[error("invalid record id: {0}")]
    InvalidId(#[from] uuid::Error),
    #[error("invalid registry number: {0}")]
    InvalidCnr(#[from] CnrError),
    #[error("unknown status filter {0:?} (expected open, on_hold, or closed)")]
    UnknownStatus(String),
    #[error("could not read attachment file: {0}")]
    Attachment(#[from] std::io::Error),
}

#[derive(Parser, Debug)]
#[command(name = "caseboard", about = "Caseboard case-management CLI")]
struct Cli {
    #[arg(long, env = "CASEBOARD_BASE_URL", default_value = "http://127.0.0.1:3000")]
    base_url: String,

    #[arg(long, env = "CASEBOARD_TOKEN")]
    token: Option<String>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// List cases, with the dashboard's search and status filter.
    Cases(CasesArgs),
    /// Show one case: details, notes, and the next hearing.
    Show {
        /// Case record id.
        id: String,
    },
    /// Add a note to a case.
    Note(NoteArgs),
    /// Open tasks grouped by due bucket.
    Tasks,
    /// Upcoming hearings and appointments.
    Agenda {
        /// Window size in days.
        #[arg(long, default_value_t = 7)]
        days: i64,
    },
    /// Look up third-party court data for a registry number.
    Court {
        /// 16-character registry number.
        cnr: String,
    },
}

#[derive(Args, Debug)]
struct NoteArgs {
    /// Case record id.
    case_id: String,

    /// Note text.
    #[arg(long)]
    body: String,

    /// File holding an encoded-image attachment (stored verbatim).
    #[arg(long)]
    attachment: Option<std::path::PathBuf>,
}

#[derive(Args, Debug)]
struct CasesArgs {
    /// Substring match over number, title, and registry number.
    #[arg(long)]
    search: Option<String>,

    /// Filter by status: open, on_hold, or closed.
    #[arg(long)]
    status: Option<String>,
}

fn parse_status(raw: &str) -> Result<CaseStatus, CliError> {
    match raw {
        "open" => Ok(CaseStatus::Open),
        "on_hold" => Ok(CaseStatus::OnHold),
        "closed" => Ok(CaseStatus::Closed),
        other => Err(CliError::UnknownStatus(other.to_owned())),
    }
}

fn fmt_moment(moment: OffsetDateTime) -> String {
    moment
        .format(&Rfc3339)
        .unwrap_or_else(|_| moment.unix_timestamp().to_string())
}

#[tokio::main]
async fn main() {
    tracing_subscriber::fmt::init();

    let cli = Cli::parse();
    if let Err(err) = run(cli).await {
        eprintln!("error: {err}");
        std::process::exit(1);
    }
}

async fn run(cli: Cli) -> Result<(), CliError> {
    let api = Api::new(cli.base_url, cli.token);
    let mut cache = Cache::new(Policy::default());
    let now = Instant::now();
    let wall_now = OffsetDateTime::now_utc();

    match cli.command {
        Command::Cases(args) => {
            let items = ops::fetch_cases(&api, &mut cache, now).await?;
            let state = CasesState {
                items,
                search: args.search.unwrap_or_default(),
                status_filter: args.status.as_deref().map(parse_status).transpose()?,
                loading: false,
            };
            for case in state.visible() {
                println!("{}  [{:?}] {}", case.id, case.status, case.heading());
            }
        }
        Command::Show { id } => {
            let id: RecordId = id.parse()?;
            let case = ops::fetch_case(&api, &mut cache, id, now).await?;
            println!("{}", case.heading());
            if !case.court.is_empty() {
                println!("court:   {}", case.court);
            }
            if !case.stage.is_empty() {
                println!("stage:   {}", case.stage);
            }
            let details = case.details();
            if !details.judge().is_empty() {
                println!("judge:   {}", details.judge());
            }
            if let Some(cnr) = &case.cnr {
                println!("cnr:     {cnr}");
            }

            let schedule = ScheduleState {
                hearings: ops::fetch_hearings(&api, &mut cache, now).await?,
                ..ScheduleState::default()
            };
            match schedule.next_hearing(id, wall_now) {
                Some(hearing) => println!(
                    "next hearing: {} ({})",
                    fmt_moment(hearing.starts_at),
                    hearing.purpose
                ),
                None => println!("next hearing: none listed"),
            }

            let notes = ops::fetch_notes(&api, &mut cache, id, now).await?;
            println!("notes ({}):", notes.len());
            for note in &notes {
                let marker = if note.attachment.is_some() { " [sketch]" } else { "" };
                println!("  - {}{marker}", note.body);
            }
        }
        Command::Note(args) => {
            let case_id: RecordId = args.case_id.parse()?;
            let attachment = match args.attachment {
                Some(path) => Some(std::fs::read_to_string(path)?.trim().to_owned()),
                None => None,
            };
            let draft = NoteDraft { case_id, body: args.body, attachment, transcript: None };
            let note = ops::create_note(&api, &mut cache, &draft).await?;
            println!("created note {} on case {}", note.id, note.case_id);
        }
        Command::Tasks => {
            let state = TasksState {
                items: ops::fetch_tasks(&api, &mut cache, now).await?,
                loading: false,
            };
            let today = wall_now.date();
            for (label, bucket) in [
                ("overdue", DueBucket::Overdue),
                ("today", DueBucket::DueToday),
                ("upcoming", DueBucket::Upcoming),
                ("unscheduled", DueBucket::Unscheduled),
            ] {
                let rows = state.in_bucket(bucket, today);
                if rows.is_empty() {
                    continue;
                }
                println!("{label}:");
                for task in rows {
                    match task.due_on {
                        Some(due) => println!("  - {} (due {due})", task.title),
                        None => println!("  - {}", task.title),
                    }
                }
            }
        }
        Command::Agenda { days } => {
            let state = ScheduleState {
                appointments: ops::fetch_appointments(&api, &mut cache, now).await?,
                hearings: ops::fetch_hearings(&api, &mut cache, now).await?,
                loading: false,
            };
            for item in state.upcoming(wall_now, days) {
                println!("{}  {}", fmt_moment(item.starts_at()), item.label());
            }
        }
        Command::Court { cnr } => {
            let cnr = Cnr::parse(&cnr)?;
            let record = ops::fetch_court_record(&api, &mut cache, &cnr, now).await?;
            let fields = record.fields();
            println!("cnr:        {}", record.cnr);
            println!("status:     {}", fields.status());
            println!("court:      {}", fields.court_name());
            println!("petitioner: {}", fields.petitioner());
            println!("respondent: {}", fields.respondent());
            match fields.next_listing_on() {
                Some(date) => println!("next listing: {date}"),
                None => println!("next listing: unknown"),
            }
        }
    }
    Ok(())
}
