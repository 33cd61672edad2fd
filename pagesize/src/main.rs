//! # pagesize
//!
//! A CLI for page-size statistics over PDF documents.
//!
//! ## Overview
//!
//! pagesize is built on top of pagesizelib and answers the question "which
//! pages of this document are which physical size?". It groups pages by
//! rotation-invariant dimension, labels groups with configured paper-size
//! names, compresses page lists into readable ranges, and can classify
//! groups with named size filters and report their aggregate surface.
//!
//! ## Usage
//!
//! ```bash
//! # Group the pages of a document by physical size
//! pagesize report.pdf
//!
//! # Use a specific settings file (paper sizes, filters, display options)
//! pagesize report.pdf --settings print-shop.json
//!
//! # Output as JSON
//! pagesize report.pdf --output json
//!
//! # Show only the groups matched by a named settings filter,
//! # with their aggregate surface in dm²
//! pagesize report.pdf --filter "Large formats"
//!
//! # Print every page number instead of compressed ranges
//! pagesize report.pdf --no-ranges
//! ```

use std::process::ExitCode;

use anyhow::{anyhow, Context};
use clap::{Arg, ArgAction, ArgMatches, Command};
use console::Style;
use pagesizelib::{
    format_surface_dm2, read_page_descriptors, total_surface, DocumentStats, SelectionSet,
    Settings, SizeTable,
};

mod render;

/// Build the clap Command structure
fn build_command() -> Command {
    Command::new("pagesize")
        .version(env!("CARGO_PKG_VERSION"))
        .about("Group PDF pages by physical size, label and measure the groups")
        .arg(
            Arg::new("path")
                .help("PDF file to analyze")
                .required(true),
        )
        .arg(
            Arg::new("settings")
                .short('s')
                .long("settings")
                .default_value("settings.json")
                .help("Settings file (paper sizes, filters, display options)"),
        )
        .arg(
            Arg::new("output")
                .short('o')
                .long("output")
                .value_parser(["table", "json"])
                .default_value("table")
                .help("Output format"),
        )
        .arg(
            Arg::new("filter")
                .short('F')
                .long("filter")
                .help("Show only groups matched by this named settings filter"),
        )
        .arg(
            Arg::new("surface")
                .long("surface")
                .action(ArgAction::SetTrue)
                .help("Print the aggregate surface of the displayed groups in dm²"),
        )
        .arg(
            Arg::new("no-ranges")
                .long("no-ranges")
                .action(ArgAction::SetTrue)
                .help("List page numbers individually instead of compressing ranges"),
        )
}

/// Load settings, falling back to defaults on configuration errors.
///
/// A broken settings file must not take the whole run down; the error is
/// reported once and labeling degrades to "unknown" for every dimension.
fn load_settings(matches: &ArgMatches) -> Settings {
    let path = matches.get_one::<String>("settings").unwrap();
    match Settings::load(path) {
        Ok(settings) => settings,
        Err(err) => {
            eprintln!(
                "{} {err}",
                Style::new().yellow().bold().apply_to("warning:")
            );
            eprintln!("continuing with default settings");
            Settings::default()
        }
    }
}

fn run(matches: &ArgMatches) -> anyhow::Result<()> {
    let path = matches.get_one::<String>("path").unwrap();
    let mut settings = load_settings(matches);
    if matches.get_flag("no-ranges") {
        settings.group_pages = false;
    }

    let descriptors = read_page_descriptors(path)
        .with_context(|| format!("cannot analyze '{path}'"))?;
    let stats = DocumentStats::aggregate(descriptors);

    let (table, surface_mm2) = match matches.get_one::<String>("filter") {
        Some(name) => {
            let filter = settings.filter(name).cloned().ok_or_else(|| {
                let available: Vec<&str> =
                    settings.filters.iter().map(|f| f.label.as_str()).collect();
                if available.is_empty() {
                    anyhow!("no filter named '{name}' (settings define no filters)")
                } else {
                    anyhow!(
                        "no filter named '{name}' (available: {})",
                        available.join(", ")
                    )
                }
            })?;
            let mut selection = SelectionSet::new();
            selection.select_matching(&filter, &stats);
            let table = SizeTable::from_groups(&selection.groups(&stats), &settings);
            let surface = selection.surface_mm2(&stats);
            (table, surface)
        }
        None => (
            SizeTable::from_stats(&stats, &settings),
            total_surface(stats.groups()),
        ),
    };

    let show_surface = matches.get_flag("surface") || matches.contains_id("filter");

    match matches.get_one::<String>("output").map(String::as_str) {
        Some("json") => {
            let report = serde_json::json!({
                "headers": &table.headers,
                "rows": &table.rows,
                "footer": &table.footer,
                "surface_mm2": surface_mm2,
                "surface_dm2": format_surface_dm2(surface_mm2),
            });
            println!("{}", serde_json::to_string_pretty(&report)?);
        }
        _ => {
            render::print_table(&table);
            if show_surface {
                let label = settings.dictionary.word_or("surface", "Surface");
                println!("{}: {} dm²", label, format_surface_dm2(surface_mm2));
            }
        }
    }

    Ok(())
}

fn main() -> ExitCode {
    env_logger::init();

    let matches = build_command().get_matches();
    match run(&matches) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("{} {err:#}", Style::new().red().bold().apply_to("error:"));
            ExitCode::FAILURE
        }
    }
}
