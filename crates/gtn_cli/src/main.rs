//! `gtn` command-line shell.
//!
//! # Responsibility
//! - Parse flags and subcommands, load the data file and print results.
//! - Keep every decision about ordering, ranking and search in `gtn_core`.

use std::path::PathBuf;

use anyhow::{anyhow, Result};
use clap::{Parser, Subcommand, ValueEnum};
use gtn_core::{
    default_log_level, init_logging, CatalogService, IngestReport, Item, ItemBody, NoteKind,
    Render, TaskSortKey, VariantTag,
};
use log::{info, warn};

#[derive(Debug, Parser)]
#[command(
    name = "gtn",
    about = "Goals, tasks and notes catalog",
    version
)]
struct Cli {
    /// Data file loaded at startup.
    #[arg(long, global = true, default_value = "data.txt")]
    data: PathBuf,
    /// Log level (trace, debug, info, warn, error).
    #[arg(long, global = true)]
    log_level: Option<String>,
    /// Absolute directory for rolling log files. Logging is off when omitted.
    #[arg(long, global = true)]
    log_dir: Option<String>,
    #[command(subcommand)]
    command: Commands,
}

#[derive(Debug, Subcommand)]
enum Commands {
    /// Print a summary of every item in load order.
    List,

    /// Show tasks, optionally of one variant and sorted.
    Tasks {
        #[arg(long, value_enum)]
        kind: Option<TaskKindArg>,
        #[arg(long, value_enum)]
        sort: Option<SortArg>,
        /// Print full details instead of summaries.
        #[arg(long)]
        detail: bool,
    },

    /// Show goals, optionally of one variant and ranked by progress.
    Goals {
        #[arg(long, value_enum)]
        kind: Option<GoalKindArg>,
        /// Highest progress first; non-quantifiable goals last.
        #[arg(long)]
        rank: bool,
        #[arg(long)]
        detail: bool,
    },

    /// Show notes, optionally of one variant.
    Notes {
        #[arg(long, value_enum)]
        kind: Option<NoteKindArg>,
        /// Protected notes still print only their summary.
        #[arg(long)]
        detail: bool,
    },

    /// Case-insensitive text search over notes.
    Search { text: String },

    /// Exact tag search over notes.
    Tag { tag: String },

    /// Try one password per protected note, in load order.
    Unlock {
        #[arg(required = true)]
        passwords: Vec<String>,
    },
}

#[derive(Copy, Clone, Debug, ValueEnum)]
enum TaskKindArg {
    Generic,
    Recurring,
    OneTime,
}

impl From<TaskKindArg> for VariantTag {
    fn from(value: TaskKindArg) -> Self {
        match value {
            TaskKindArg::Generic => VariantTag::Task,
            TaskKindArg::Recurring => VariantTag::RecurringTask,
            TaskKindArg::OneTime => VariantTag::OneTimeTask,
        }
    }
}

#[derive(Copy, Clone, Debug, ValueEnum)]
enum GoalKindArg {
    Generic,
    Quantifiable,
    NonQuantifiable,
}

impl From<GoalKindArg> for VariantTag {
    fn from(value: GoalKindArg) -> Self {
        match value {
            GoalKindArg::Generic => VariantTag::Goal,
            GoalKindArg::Quantifiable => VariantTag::QuantifiableGoal,
            GoalKindArg::NonQuantifiable => VariantTag::NonQuantifiableGoal,
        }
    }
}

#[derive(Copy, Clone, Debug, ValueEnum)]
enum NoteKindArg {
    Generic,
    Protected,
    Public,
}

impl From<NoteKindArg> for VariantTag {
    fn from(value: NoteKindArg) -> Self {
        match value {
            NoteKindArg::Generic => VariantTag::Note,
            NoteKindArg::Protected => VariantTag::ProtectedNote,
            NoteKindArg::Public => VariantTag::PublicNote,
        }
    }
}

#[derive(Copy, Clone, Debug, ValueEnum)]
enum SortArg {
    Priority,
    Deadline,
}

impl From<SortArg> for TaskSortKey {
    fn from(value: SortArg) -> Self {
        match value {
            SortArg::Priority => TaskSortKey::Priority,
            SortArg::Deadline => TaskSortKey::Deadline,
        }
    }
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    if let Some(log_dir) = cli.log_dir.as_deref() {
        let level = cli.log_level.as_deref().unwrap_or(default_log_level());
        init_logging(level, log_dir).map_err(|err| anyhow!("logging init failed: {err}"))?;
    }

    let mut service = CatalogService::default();
    match service.load_file(&cli.data) {
        Ok(report) => {
            info!(
                "event=cli_load module=cli status=ok loaded={} rejected={}",
                report.loaded(),
                report.rejected.len()
            );
            print_ingest_report(&report);
        }
        Err(err) => {
            warn!("event=cli_load module=cli status=error");
            eprintln!("{err}; continuing with an empty catalog.");
        }
    }

    match cli.command {
        Commands::List => print_lines(service.summaries()),
        Commands::Tasks { kind, sort, detail } => handle_tasks(&service, kind, sort, detail),
        Commands::Goals { kind, rank, detail } => handle_goals(&service, kind, rank, detail),
        Commands::Notes { kind, detail } => handle_notes(&service, kind, detail),
        Commands::Search { text } => handle_search(&service, &text),
        Commands::Tag { tag } => handle_tag(&service, &tag),
        Commands::Unlock { passwords } => handle_unlock(&service, &passwords),
    }
    Ok(())
}

fn handle_tasks(
    service: &CatalogService,
    kind: Option<TaskKindArg>,
    sort: Option<SortArg>,
    detail: bool,
) {
    let tasks = match sort {
        Some(sort) => service.tasks_ordered(sort.into()),
        None => service.catalog().tasks(),
    };
    let tag = kind.map(VariantTag::from);
    print_lines(
        tasks
            .iter()
            .filter(|task| tag.map_or(true, |tag| task.item.variant_tag() == tag))
            .map(|task| render(task.item, detail))
            .collect(),
    );
}

fn handle_goals(service: &CatalogService, kind: Option<GoalKindArg>, rank: bool, detail: bool) {
    let goals = if rank {
        service.goals_ranked()
    } else {
        service.catalog().goals()
    };
    let tag = kind.map(VariantTag::from);
    print_lines(
        goals
            .iter()
            .filter(|goal| tag.map_or(true, |tag| goal.item.variant_tag() == tag))
            .map(|goal| render(goal.item, detail))
            .collect(),
    );
}

fn handle_notes(service: &CatalogService, kind: Option<NoteKindArg>, detail: bool) {
    let lines = match kind {
        Some(kind) if detail => service.variant_details(kind.into()),
        Some(kind) => service
            .catalog()
            .by_variant(kind.into())
            .into_iter()
            .map(|item| item.render_summary())
            .collect(),
        None => service
            .catalog()
            .notes()
            .iter()
            .map(|note| render(note.item, detail))
            .collect(),
    };
    print_lines(lines);
}

fn handle_search(service: &CatalogService, text: &str) {
    let hits = service.search_notes(text);
    if hits.is_empty() {
        println!("No matching notes found.");
        return;
    }
    print_lines(hits.into_iter().map(|item| item.render_summary()).collect());
}

fn handle_tag(service: &CatalogService, tag: &str) {
    let hits = service.notes_with_tag(tag);
    if hits.is_empty() {
        println!("No notes found with that tag.");
        return;
    }
    print_lines(hits.iter().map(|note| note.render_summary()).collect());
}

fn handle_unlock(service: &CatalogService, passwords: &[String]) {
    let report = service.unlock_protected(passwords.iter().map(String::as_str));
    for attempt in report.attempts.iter().filter(|attempt| !attempt.granted) {
        let title = service
            .catalog()
            .get(attempt.note_id)
            .map_or("?", |item| item.title.as_str());
        println!("Incorrect password for {title}.");
    }
    match report.granted {
        Some(note) => {
            println!("Access granted to: {}", note.item.title);
            println!("{}", note.render_detail());
        }
        None => println!("No access granted to any protected notes with given passwords."),
    }
}

/// Detail text, except protected notes which only ever show their summary.
fn render(item: &Item, detail: bool) -> String {
    let protected = matches!(
        &item.body,
        ItemBody::Note(note) if matches!(note.kind, NoteKind::Protected { .. })
    );
    if detail && !protected {
        item.render_detail()
    } else {
        item.render_summary()
    }
}

fn print_lines(lines: Vec<String>) {
    if lines.is_empty() {
        eprintln!("No items to show.");
        return;
    }
    for line in lines {
        println!("{line}");
    }
}

fn print_ingest_report(report: &IngestReport) {
    for partial in &report.partial {
        let fields = partial
            .defaulted
            .iter()
            .map(|field| field.as_str())
            .collect::<Vec<_>>()
            .join(", ");
        eprintln!(
            "line {}: stored with defaults for {fields}",
            partial.line_no
        );
    }
    for rejected in &report.rejected {
        eprintln!("line {}: skipped: {}", rejected.line_no, rejected.reason);
    }
}
