// SPDX-License-Identifier: GPL-3.0-or-later

//!
//! *Part of the wider year wheel project*
//!
//! The year wheel command line tool
//!

use clap::{CommandFactory, Parser, ValueEnum, builder::PossibleValue};
use simplelog::{
    ColorChoice, CombinedLogger, ConfigBuilder, LevelFilter, TermLogger, TerminalMode,
};
use std::path::{Path, PathBuf};
use yearwheel_core::{
    CalendarEvent, Campus, FilterState, UserProfile, available_faculties, available_institutes,
    parse_date, today,
};
use yearwheel_renderer::{
    Navigator, WheelLayoutParams, YearWheelRendererSvg, YearWheelRendererText, ZoomLevel,
    date_range_text,
};
use yearwheel_store::{
    Config, Repository, SqliteStore, events_to_ics, events_to_json, import_file,
};

#[macro_use]
extern crate log;
extern crate simplelog;

/// Year wheel entry point
///
/// One of:
/// - Create the database
/// - Print the events, the agenda, or the timeline
/// - Draw the year wheel as SVG
/// - Export the events (ICS or JSON)
/// - Import events (JSON or CSV)
/// - Log in or out as one of the demo users
/// - Print the faculties and institutes
#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args = Cli::parse();

    // Setup logging (stdout is kept for the output)
    let config_log = ConfigBuilder::new()
        .add_filter_allow_str("yearwheel")
        .build();
    CombinedLogger::init(vec![TermLogger::new(
        LevelFilter::Warn,
        config_log,
        TerminalMode::Stderr,
        ColorChoice::Auto,
    )])?;

    // Check the options
    if !options_are_valid(&args) {
        eprintln!("CLI Error: invalid options");
        Cli::command().print_long_help()?;
        std::process::exit(1);
    }

    // Load the config, letting the flags override it
    let mut config = Config::ensure_setup()?;
    if let Some(database) = &args.database {
        config.set_database_path(database);
    }
    let mut wheel = config.wheel_layout_params();
    if let Some(year) = args.year {
        wheel.year = year;
    }

    if let Err(error) = run(&args, &config, wheel).await {
        eprintln!("Error: {error}");
        std::process::exit(1);
    }

    Ok(())
}

/// Carry out the command
async fn run(
    args: &Cli,
    config: &Config,
    wheel: WheelLayoutParams,
) -> Result<(), Box<dyn std::error::Error>> {
    let store = SqliteStore::open(config.database_path()).await?;
    let repository = Repository::new(store);

    match args.cli_command {
        Command::Create => {
            println!("Database ready at {}", config.database_path().display());
        }
        Command::List => {
            let events = filtered_events(&repository, args).await?;
            for event in &events {
                println!("{}", list_line(event));
            }
            info!("Listed {} events", events.len());
        }
        Command::Agenda => {
            let mut renderer = YearWheelRendererText::new();
            renderer.set_events(filtered_events(&repository, args).await?);
            println!("{}", renderer.agenda());
        }
        Command::Timeline => {
            let mut renderer = YearWheelRendererText::new();
            renderer.set_events(filtered_events(&repository, args).await?);
            let navigator = navigator(args)?;
            println!("{}", renderer.timeline(&navigator));
        }
        Command::Wheel => {
            let mut renderer = YearWheelRendererSvg::new();
            renderer.set_wheel_layout_params(wheel);
            renderer.set_events(filtered_events(&repository, args).await?);
            output(&renderer.draw(), args.out.as_deref())?;
        }
        Command::ExportIcs => {
            let events = filtered_events(&repository, args).await?;
            output(&events_to_ics(&events), args.out.as_deref())?;
        }
        Command::ExportJson => {
            let events = filtered_events(&repository, args).await?;
            output(&events_to_json(&events)?, args.out.as_deref())?;
        }
        Command::Import => {
            let Some(file) = &args.file else {
                return Err("No file to import".into());
            };
            let events = import_file(file)?;
            repository.save_events(&events).await?;
            println!("Imported {} events from {}", events.len(), file.display());
        }
        Command::Login => {
            let profile = demo_user(args)?;
            repository.save_profile(&profile).await?;
            println!("Logged in as {} ({})", profile.name, profile.role);
        }
        Command::Logout => {
            if repository.clear_profile().await? {
                println!("Logged out");
            } else {
                println!("Nobody is logged in");
            }
        }
        Command::Whoami => match repository.load_profile().await? {
            Some(profile) => println!("{}", profile_line(&profile)),
            None => println!("Nobody is logged in"),
        },
        Command::Faculties => {
            let campuses = campuses(args)?;
            for line in organisation_lines(&campuses) {
                println!("{line}");
            }
        }
    }

    Ok(())
}

/// Whether the flags make sense for the command
fn options_are_valid(args: &Cli) -> bool {
    let timeline_only = args.date.is_some() || args.zoom.is_some();
    let no_event_options = args.file.is_none()
        && args.out.is_none()
        && args.year.is_none()
        && !timeline_only
        && args.search.is_none();
    let no_profile_options = args.user.is_none() && args.campus.is_none();
    match args.cli_command {
        Command::Create | Command::Logout | Command::Whoami => {
            no_event_options && no_profile_options
        }
        Command::List | Command::Agenda => {
            args.file.is_none()
                && args.out.is_none()
                && args.year.is_none()
                && !timeline_only
                && no_profile_options
        }
        Command::Timeline => {
            args.file.is_none() && args.out.is_none() && args.year.is_none() && no_profile_options
        }
        Command::Wheel => args.file.is_none() && !timeline_only && no_profile_options,
        Command::ExportIcs | Command::ExportJson => {
            args.file.is_none() && args.year.is_none() && !timeline_only && no_profile_options
        }
        Command::Import => {
            args.file.is_some()
                && args.out.is_none()
                && args.year.is_none()
                && !timeline_only
                && args.search.is_none()
                && no_profile_options
        }
        Command::Login => no_event_options && args.user.is_some() && args.campus.is_none(),
        Command::Faculties => no_event_options && args.user.is_none(),
    }
}

/// The stored events that match `--search`
async fn filtered_events(
    repository: &Repository,
    args: &Cli,
) -> Result<Vec<CalendarEvent>, Box<dyn std::error::Error>> {
    let filters = FilterState {
        search: args.search.clone().unwrap_or_default(),
        ..Default::default()
    };
    Ok(repository.load_state().await?.events_matching(&filters))
}

/// The timeline position from `--date` and `--zoom`
fn navigator(args: &Cli) -> Result<Navigator, Box<dyn std::error::Error>> {
    let date = match &args.date {
        Some(date) => parse_date(date)?,
        None => today(),
    };
    let zoom = match &args.zoom {
        Some(zoom) => {
            ZoomLevel::from_name(zoom).ok_or(format!("Unknown zoom '{zoom}' (month or week)"))?
        }
        None => ZoomLevel::default(),
    };
    Ok(Navigator::new(date, zoom))
}

/// The demo user picked by `--user` (id or name)
fn demo_user(args: &Cli) -> Result<UserProfile, Box<dyn std::error::Error>> {
    let Some(user) = &args.user else {
        return Err("No user to log in as".into());
    };
    let users = UserProfile::demo_users();
    let known = users
        .iter()
        .map(|profile| profile.id.as_str())
        .collect::<Vec<_>>()
        .join(", ");
    let profile = users
        .into_iter()
        .find(|profile| profile.id == *user || profile.name.eq_ignore_ascii_case(user))
        .ok_or(format!("Unknown user '{user}' (one of {known})"))?;
    Ok(profile)
}

/// The campuses from `--campus` (comma separated, none means all)
fn campuses(args: &Cli) -> Result<Vec<Campus>, Box<dyn std::error::Error>> {
    let Some(text) = &args.campus else {
        return Ok(Vec::new());
    };
    let mut campuses = Vec::new();
    for name in text.split(',').map(str::trim).filter(|name| !name.is_empty()) {
        let campus = Campus::from_name(name).ok_or(format!("Unknown campus '{name}'"))?;
        campuses.push(campus);
    }
    Ok(campuses)
}

fn profile_line(profile: &UserProfile) -> String {
    let mut rights = Vec::new();
    if profile.permissions.can_edit {
        rights.push("edit");
    }
    if profile.permissions.can_administer {
        rights.push("administer");
    }
    let rights = if rights.is_empty() {
        "read only".to_string()
    } else {
        rights.join(", ")
    };
    format!("{} {} ({}) [{rights}]", profile.id, profile.name, profile.role)
}

/// Each faculty, followed by its institutes (indented)
fn organisation_lines(campuses: &[Campus]) -> Vec<String> {
    let mut lines = Vec::new();
    for faculty in available_faculties(campuses) {
        lines.push(faculty.name.to_string());
        let institutes = available_institutes(campuses, &[faculty.name.to_string()]);
        lines.extend(institutes.iter().map(|institute| format!("  {}", institute.name)));
    }
    lines
}

/// One event per line
fn list_line(event: &CalendarEvent) -> String {
    format!(
        "{:<24} {:<36} {} [{}]",
        event.id.as_str(),
        date_range_text(event),
        event.title,
        event.area
    )
}

/// Write to the file, or to stdout if there isn't one
fn output(content: &str, path: Option<&Path>) -> Result<(), std::io::Error> {
    match path {
        Some(path) => {
            std::fs::write(path, content)?;
            println!("Written to {}", path.display());
        }
        None => println!("{content}"),
    }
    Ok(())
}

/// Year wheel CLI args using [clap]
#[derive(Parser, Debug)]
#[command(
    version,
    about = "Year wheel tool for the NTNU academic calendar",
    after_help = "The database path defaults to the one in the config file"
)]
pub struct Cli {
    // Command
    #[arg(value_enum)]
    pub cli_command: Command,

    /// Path to the database
    #[arg(long)]
    pub database: Option<PathBuf>,

    /// Path to the file to import (JSON or CSV)
    #[arg(long)]
    pub file: Option<PathBuf>,

    /// Path to write the wheel or export to (stdout if not given)
    #[arg(long)]
    pub out: Option<PathBuf>,

    /// The year drawn on the wheel
    #[arg(long)]
    pub year: Option<i32>,

    /// A date in the month or week shown by the timeline (YYYY-MM-DD)
    #[arg(long)]
    pub date: Option<String>,

    /// The timeline zoom (month or week)
    #[arg(long)]
    pub zoom: Option<String>,

    /// Only include events whose text contains this
    #[arg(long)]
    pub search: Option<String>,

    /// The demo user to log in as (id or name)
    #[arg(long)]
    pub user: Option<String>,

    /// Only show the faculties at these campuses (comma separated)
    #[arg(long)]
    pub campus: Option<String>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    Create,
    List,
    Agenda,
    Timeline,
    Wheel,
    ExportIcs,
    ExportJson,
    Import,
    Login,
    Logout,
    Whoami,
    Faculties,
}

impl ValueEnum for Command {
    fn value_variants<'a>() -> &'a [Self] {
        &[
            Self::Create,
            Self::List,
            Self::Agenda,
            Self::Timeline,
            Self::Wheel,
            Self::ExportIcs,
            Self::ExportJson,
            Self::Import,
            Self::Login,
            Self::Logout,
            Self::Whoami,
            Self::Faculties,
        ]
    }

    fn to_possible_value(&self) -> Option<PossibleValue> {
        match self {
            Command::Create => {
                Some(PossibleValue::new("create").help("Create the database (if needed)"))
            }
            Command::List => Some(PossibleValue::new("list").help("Print the events")),
            Command::Agenda => {
                Some(PossibleValue::new("agenda").help("Print the events grouped by month"))
            }
            Command::Timeline => Some(
                PossibleValue::new("timeline").help("Print the timeline for a month or week"),
            ),
            Command::Wheel => {
                Some(PossibleValue::new("wheel").help("Draw the year wheel as SVG"))
            }
            Command::ExportIcs => Some(
                PossibleValue::new("export-ics").help("Export the events as an ICS calendar"),
            ),
            Command::ExportJson => {
                Some(PossibleValue::new("export-json").help("Export the events as JSON"))
            }
            Command::Import => Some(
                PossibleValue::new("import")
                    .help("Replace the events with those in the file (JSON or CSV)"),
            ),
            Command::Login => {
                Some(PossibleValue::new("login").help("Log in as one of the demo users"))
            }
            Command::Logout => Some(PossibleValue::new("logout").help("Log out")),
            Command::Whoami => {
                Some(PossibleValue::new("whoami").help("Print the logged in user"))
            }
            Command::Faculties => Some(
                PossibleValue::new("faculties").help("Print the faculties and their institutes"),
            ),
        }
    }
}

#[cfg(test)]
mod test {
    use super::*;

    fn parse(args: &[&str]) -> Cli {
        Cli::try_parse_from(std::iter::once("yearwheel").chain(args.iter().copied())).unwrap()
    }

    #[test]
    fn valid_options() {
        assert!(options_are_valid(&parse(&["create"])));
        assert!(options_are_valid(&parse(&["list", "--search", "frist"])));
        assert!(options_are_valid(&parse(&[
            "timeline", "--date", "2025-01-15", "--zoom", "week"
        ])));
        assert!(options_are_valid(&parse(&["wheel", "--year", "2025", "--out", "a.svg"])));
        assert!(options_are_valid(&parse(&["export-ics", "--out", "a.ics"])));
        assert!(options_are_valid(&parse(&["import", "--file", "events.csv"])));
        assert!(options_are_valid(&parse(&["login", "--user", "u2"])));
        assert!(options_are_valid(&parse(&["whoami"])));
        assert!(options_are_valid(&parse(&["faculties", "--campus", "Gjøvik"])));
    }

    #[test]
    fn invalid_options() {
        assert!(!options_are_valid(&parse(&["import"])));
        assert!(!options_are_valid(&parse(&["list", "--file", "events.json"])));
        assert!(!options_are_valid(&parse(&["wheel", "--zoom", "week"])));
        assert!(!options_are_valid(&parse(&["agenda", "--year", "2025"])));
        assert!(!options_are_valid(&parse(&["create", "--search", "frist"])));
        assert!(!options_are_valid(&parse(&["login"])));
        assert!(!options_are_valid(&parse(&["logout", "--user", "u1"])));
        assert!(!options_are_valid(&parse(&["list", "--campus", "Trondheim"])));
    }

    #[test]
    fn demo_user_login() {
        let profile = demo_user(&parse(&["login", "--user", "u3"])).unwrap();
        assert_eq!(profile.name, "Student Studentesen");
        assert_eq!(profile_line(&profile), "u3 Student Studentesen (Student) [read only]");

        let profile = demo_user(&parse(&["login", "--user", "admin adminsen"])).unwrap();
        assert_eq!(profile.id, "u1");
        assert_eq!(profile_line(&profile), "u1 Admin Adminsen (Admin) [edit, administer]");

        let error = demo_user(&parse(&["login", "--user", "u9"])).unwrap_err();
        assert_eq!(error.to_string(), "Unknown user 'u9' (one of u1, u2, u3)");
    }

    #[test]
    fn faculties_by_campus() {
        let all = organisation_lines(&campuses(&parse(&["faculties"])).unwrap());
        assert_eq!(all.iter().filter(|line| !line.starts_with("  ")).count(), 4);

        let gjovik = campuses(&parse(&["faculties", "--campus", "Gjøvik"])).unwrap();
        assert_eq!(
            organisation_lines(&gjovik),
            vec![
                "Fakultet for arkitektur og design".to_string(),
                "  Institutt for design (Gjøvik)".to_string(),
            ]
        );

        assert!(campuses(&parse(&["faculties", "--campus", "Bergen"])).is_err());
    }

    #[test]
    fn unknown_command() {
        let result = Cli::try_parse_from(["yearwheel", "stats"]);
        assert!(result.is_err());
    }

    #[test]
    fn timeline_position() {
        let args = parse(&["timeline", "--date", "2025-01-15", "--zoom", "uke"]);
        let position = navigator(&args).unwrap();
        assert_eq!(position.zoom(), ZoomLevel::Week);
        assert_eq!(position.current().to_string(), "2025-01-15");

        let args = parse(&["timeline", "--zoom", "year"]);
        assert!(navigator(&args).is_err());
    }
}
