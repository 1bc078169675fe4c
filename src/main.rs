//!
//! Command line front end for the phonoscope library.
//!
//! phonoscope [--config PATH] <command>
//!
//!   languages                          list catalogued languages
//!   validate                           load the catalog and report counts
//!   key <lang> <grapheme>              grapheme key
//!   anchor <lang> <grapheme>           grapheme anchor id
//!   realize <lang> <ipa> <environment> surface realization of a phoneme
//!   chart <lang>                       consonant and vowel charts as plain text
//!

use std::env;
use std::path::PathBuf;
use std::process::ExitCode;

use tracing::{error, info};
use tracing_subscriber::EnvFilter;

use phonoscope::catalog::Catalog;
use phonoscope::chart::{ConsonantChart, VowelChart};
use phonoscope::error::{PhonoscopeError, Result};
use phonoscope::grapheme::{grapheme_anchor_id, grapheme_key};
use phonoscope::inventory::Language;
use phonoscope::reference::ReferenceTable;
use phonoscope::settings::Settings;

const USAGE: &str = "usage: phonoscope [--config PATH] <languages|validate|key|anchor|realize|chart> [args...]";

enum Command {
    Languages,
    Validate,
    Key { language: String, grapheme: String },
    Anchor { language: String, grapheme: String },
    Realize { language: String, ipa: String, environment: String },
    Chart { language: String },
}

impl Command {
    fn parse(args: &[String]) -> Option<Command> {
        let arg = |i: usize| args.get(i).cloned();
        match args.first()?.as_str() {
            "languages" => Some(Command::Languages),
            "validate" => Some(Command::Validate),
            "key" => Some(Command::Key { language: arg(1)?, grapheme: arg(2)? }),
            "anchor" => Some(Command::Anchor { language: arg(1)?, grapheme: arg(2)? }),
            "realize" => Some(Command::Realize { language: arg(1)?, ipa: arg(2)?, environment: arg(3)? }),
            "chart" => Some(Command::Chart { language: arg(1)? }),
            _ => None,
        }
    }
}

/// Removes `--config PATH` from `args`. A flag without a path is an error.
fn take_config_flag(args: &mut Vec<String>) -> Result<Option<PathBuf>> {
    let Some(position) = args.iter().position(|a| a == "--config") else {
        return Ok(None);
    };
    args.remove(position);
    if position < args.len() {
        Ok(Some(PathBuf::from(args.remove(position))))
    } else {
        Err(PhonoscopeError::Config("--config requires a path".to_string()))
    }
}

fn find_language<'a>(catalog: &'a Catalog, id: &str) -> Result<&'a Language> {
    catalog
        .language(id)
        .ok_or_else(|| PhonoscopeError::UnknownName { kind: "language", name: id.to_string() })
}

fn cell_text(ipa: &[&str]) -> String {
    if ipa.is_empty() { "·".to_string() } else { ipa.join(" ") }
}

fn print_charts(language: &Language) {
    let table = ReferenceTable::standard();
    let consonants = ConsonantChart::build(language, table).compact();
    println!("{} ({}, {}) consonants", language.name(), language.variety(), language.script());
    for row in &consonants.rows {
        let cells: Vec<String> = row
            .cells
            .iter()
            .map(|cell| {
                let attested: Vec<&str> = cell.phonemes.iter().map(|c| c.base.ipa.as_str()).collect();
                match cell.reference {
                    None => format!("{}: ×", cell.place.label()),
                    Some(_) => format!("{}: {}", cell.place.label(), cell_text(&attested)),
                }
            })
            .collect();
        println!("  {:<20} {}", row.manner.label(), cells.join(" | "));
    }
    let vowels = VowelChart::build(language, table).compact();
    println!("{} vowels", language.name());
    for row in &vowels.rows {
        let cells: Vec<String> = row
            .cells
            .iter()
            .filter(|cell| !cell.is_empty())
            .map(|cell| {
                let unrounded: Vec<&str> = cell.unrounded.phonemes.iter().map(|v| v.base.ipa.as_str()).collect();
                let rounded: Vec<&str> = cell.rounded.phonemes.iter().map(|v| v.base.ipa.as_str()).collect();
                format!("{}: {} / {}", cell.backness.label(), cell_text(&unrounded), cell_text(&rounded))
            })
            .collect();
        println!("  {:<20} {}", row.height.label(), cells.join(" | "));
    }
}

fn run(settings: &Settings, command: Command) -> Result<()> {
    match command {
        // keys are defined for any language id, catalogued or not
        Command::Key { language, grapheme } => println!("{}", grapheme_key(&language, &grapheme)),
        Command::Anchor { language, grapheme } => println!("{}", grapheme_anchor_id(&language, &grapheme)),
        Command::Languages => {
            for language in settings.catalog()?.languages() {
                println!("{}\t{}\t{}\t{}", language.id(), language.name(), language.variety(), language.script());
            }
        }
        Command::Validate => {
            let catalog = settings.catalog()?;
            let off_chart = catalog.nonconformances(ReferenceTable::standard());
            for language in catalog.languages() {
                println!(
                    "{}: {} consonants, {} vowels, {} rules",
                    language.id(),
                    language.consonants().count(),
                    language.vowels().count(),
                    language.rules().len()
                );
            }
            println!("{} languages valid, {} phonemes off the reference chart", catalog.len(), off_chart.len());
        }
        Command::Realize { language: id, ipa, environment } => {
            let catalog = settings.catalog()?;
            let language = find_language(&catalog, &id)?;
            let realized = language
                .realize_in(&ipa, &environment)
                .ok_or_else(|| PhonoscopeError::UnknownName { kind: "phoneme", name: ipa.clone() })?;
            println!("/{ipa}/ → [{realized}] / {environment}");
        }
        Command::Chart { language: id } => {
            let catalog = settings.catalog()?;
            print_charts(find_language(&catalog, &id)?);
        }
    }
    Ok(())
}

fn main() -> ExitCode {
    let mut args: Vec<String> = env::args().skip(1).collect();
    let config = match take_config_flag(&mut args) {
        Ok(config) => config,
        Err(e) => {
            eprintln!("{e}\n{USAGE}");
            return ExitCode::FAILURE;
        }
    };
    let settings = match Settings::load(config.as_deref()) {
        Ok(settings) => settings,
        Err(e) => {
            eprintln!("{e}");
            return ExitCode::FAILURE;
        }
    };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&settings.log_level));
    tracing_subscriber::fmt().with_env_filter(filter).with_writer(std::io::stderr).init();

    let Some(command) = Command::parse(&args) else {
        eprintln!("{USAGE}");
        return ExitCode::FAILURE;
    };
    info!(catalog = ?settings.catalog, "starting");
    match run(&settings, command) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            error!(error = %e, "command failed");
            eprintln!("{e}");
            ExitCode::FAILURE
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn args(list: &[&str]) -> Vec<String> {
        list.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn config_flag_is_taken_with_its_path() {
        let mut list = args(&["--config", "alt.toml", "chart", "kor"]);
        assert_eq!(take_config_flag(&mut list).unwrap(), Some(PathBuf::from("alt.toml")));
        assert_eq!(list, args(&["chart", "kor"]));

        let mut list = args(&["languages"]);
        assert_eq!(take_config_flag(&mut list).unwrap(), None);
        assert_eq!(list, args(&["languages"]));
    }

    #[test]
    fn trailing_config_flag_is_an_error() {
        let mut list = args(&["languages", "--config"]);
        assert!(matches!(take_config_flag(&mut list), Err(PhonoscopeError::Config(_))));
    }

    #[test]
    fn commands_need_their_arguments() {
        assert!(matches!(Command::parse(&args(&["key", "ind", "Ng"])), Some(Command::Key { .. })));
        assert!(Command::parse(&args(&["key", "ind"])).is_none());
        assert!(Command::parse(&args(&[])).is_none());
    }
}
