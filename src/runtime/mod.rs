use std::env;
use std::io::{self, Write};

use tracing::warn;

use crate::config::Settings;
use crate::cover::{Cover, fetch_cover_with};
use crate::folders::remove_useless_folders_with;
use crate::library::{display_from_fields, scan, search, years};
use crate::logging;
use crate::metadata::{TrackMetadata, get_metadata_with, parse_duration};
use crate::uri::parse_uri;

mod command;
mod settings;

pub use command::{Command, USAGE};

pub fn run() -> Result<(), Box<dyn std::error::Error>> {
    let (settings, config_warning) = settings::load_settings();
    logging::init(&settings.log.filter);
    if let Some(msg) = config_warning {
        warn!("{msg}");
    }

    let command = match Command::parse(env::args().skip(1)) {
        Ok(command) => command,
        Err(msg) => {
            eprintln!("tagshelf: {msg}\n\n{USAGE}");
            std::process::exit(2);
        }
    };

    let stdout = io::stdout();
    let mut out = stdout.lock();
    execute(command, &settings, &mut out)
}

/// Roots from the command line, then from config, then the working directory.
fn resolve_roots(roots: Vec<String>, settings: &Settings) -> Vec<String> {
    if !roots.is_empty() {
        return roots;
    }
    if !settings.library.folders.is_empty() {
        return settings.library.folders.clone();
    }
    env::current_dir()
        .ok()
        .and_then(|p| p.to_str().map(|s| s.to_string()))
        .map(|dir| vec![dir])
        .unwrap_or_else(|| vec![".".to_string()])
}

fn write_track(out: &mut impl Write, track: &TrackMetadata, settings: &Settings) -> io::Result<()> {
    let line = display_from_fields(
        track,
        &settings.library.display_fields,
        &settings.library.display_separator,
    );
    writeln!(out, "{}\t{}", parse_duration(Some(track.duration)), line)
}

pub fn execute(
    command: Command,
    settings: &Settings,
    out: &mut impl Write,
) -> Result<(), Box<dyn std::error::Error>> {
    match command {
        Command::Folders(folders) => {
            for folder in remove_useless_folders_with(&folders, settings.library.folder_match) {
                writeln!(out, "{folder}")?;
            }
        }
        Command::Scan(roots) => {
            let tracks = scan(&resolve_roots(roots, settings), settings);
            for track in &tracks {
                write_track(out, track, settings)?;
            }
            let years: Vec<String> = years(&tracks).iter().map(u32::to_string).collect();
            writeln!(out, "{} tracks", tracks.len())?;
            if !years.is_empty() {
                writeln!(out, "years: {}", years.join(", "))?;
            }
        }
        Command::Search { query, roots } => {
            let tracks = scan(&resolve_roots(roots, settings), settings);
            for i in search(&tracks, &query) {
                write_track(out, &tracks[i], settings)?;
            }
        }
        Command::Info(path) => {
            let metadata = get_metadata_with(&path, &settings.metadata);
            write!(out, "{}", toml::to_string_pretty(&metadata)?)?;
        }
        Command::Cover(path) => match fetch_cover_with(&path, &settings.cover)? {
            Some(Cover::Embedded(data_uri)) => writeln!(out, "{data_uri}")?,
            Some(Cover::File(file)) => writeln!(out, "{}", parse_uri(&file))?,
            None => writeln!(out, "no cover")?,
        },
    }
    Ok(())
}
