#![warn(missing_docs)]
#![warn(clippy::missing_docs_in_private_items)]

//! # coursework
//!
//! Prints students, lecturers and reviewers from a roster file after
//! replaying the ratings it lists.

use std::path::PathBuf;

use anyhow::{Context, Result};
use bpaf::*;
use colored::Colorize;
use coursework::{config, roster::Roster};
use dotenvy::dotenv;
use tracing::metadata::LevelFilter;
use tracing_subscriber::{fmt, prelude::*, util::SubscriberInitExt};

/// Top-level CLI commands.
#[derive(Debug, Clone)]
enum Cmd {
    /// Print everyone and compare the first two lecturers and students
    Show(Option<PathBuf>),
    /// Print ranking tables
    Rank(Option<PathBuf>),
    /// Print course-wide averages for one course
    Course(String, Option<PathBuf>),
}

/// Parse the command line arguments and return a `Cmd` enum
fn options() -> Cmd {
    /// parses roster path
    fn r() -> impl Parser<Option<PathBuf>> {
        positional::<PathBuf>("ROSTER")
            .help("Path to a roster JSON file (defaults to $COURSEWORK_ROSTER or roster.json)")
            .optional()
    }

    /// parses course name
    fn c() -> impl Parser<String> {
        positional("COURSE").help("Name of the course")
    }

    let show = construct!(Cmd::Show(r()))
        .to_options()
        .command("show")
        .help("Print every person and compare the first two lecturers and students");

    let rank = construct!(Cmd::Rank(r()))
        .to_options()
        .command("rank")
        .help("Rank students and lecturers by average grade");

    let course = construct!(Cmd::Course(c(), r()))
        .to_options()
        .command("course")
        .help("Print course-wide homework and lecture averages");

    let cmd = construct!([show, rank, course]);

    cmd.to_options()
        .descr("Grade book for students, lecturers and reviewers")
        .run()
}

/// Loads the roster at `path` (or the configured default) and replays its
/// ratings.
fn load(path: Option<PathBuf>) -> Result<Roster> {
    let path = path.unwrap_or_else(config::roster_path);
    let mut roster =
        Roster::load(&path).with_context(|| format!("Failed to load roster {}", path.display()))?;
    let report = roster.apply();

    if report.rejected > 0 || !report.errors.is_empty() {
        eprintln!(
            "{}",
            format!(
                "{} rating(s) rejected, {} rating(s) invalid",
                report.rejected,
                report.errors.len()
            )
            .yellow()
        );
    }

    Ok(roster)
}

fn main() -> Result<()> {
    dotenv().ok();

    let fmt = fmt::layer()
        .without_time()
        .with_file(false)
        .with_line_number(false)
        .with_writer(std::io::stderr);
    let filter_layer = LevelFilter::from_level(config::log_level());
    tracing_subscriber::registry()
        .with(fmt)
        .with(filter_layer)
        .init();

    let cmd = options();

    match cmd {
        Cmd::Show(path) => println!("{}", load(path)?.render_show()),
        Cmd::Rank(path) => {
            let (students, lecturers) = load(path)?.render_rankings();
            println!("{}", "Students".bold());
            println!("{students}");
            println!("{}", "Lecturers".bold());
            println!("{lecturers}");
        }
        Cmd::Course(course, path) => println!("{}", load(path)?.render_course(&course)),
    };

    Ok(())
}
