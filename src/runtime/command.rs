use std::path::PathBuf;

use crate::uri::track_path_from_uri;

pub const USAGE: &str = "\
usage: tagshelf <command> [args]

commands:
  folders <path>...          print library roots with nested and repeated ones removed
  scan [path...]             list tracks under the given roots (default: library.folders, then cwd)
  search <query> [path...]   list tracks whose artist/album/title/genre fuzzy-match the query
  info <path|file-uri>       print the metadata record of one file
  cover <path|file-uri>      print the cover of one file";

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    Folders(Vec<String>),
    Scan(Vec<String>),
    Search { query: String, roots: Vec<String> },
    Info(PathBuf),
    Cover(PathBuf),
}

impl Command {
    /// Parse arguments (without the program name).
    pub fn parse<I>(args: I) -> Result<Self, String>
    where
        I: IntoIterator<Item = String>,
    {
        let mut args = args.into_iter();
        let name = args.next().ok_or_else(|| "missing command".to_string())?;
        let rest: Vec<String> = args.collect();

        match name.as_str() {
            "folders" if !rest.is_empty() => Ok(Command::Folders(rest)),
            "folders" => Err("folders: expected at least one path".to_string()),
            "scan" => Ok(Command::Scan(rest)),
            "search" => {
                let mut rest = rest.into_iter();
                let query = rest
                    .next()
                    .ok_or_else(|| "search: expected a query".to_string())?;
                Ok(Command::Search {
                    query,
                    roots: rest.collect(),
                })
            }
            "info" | "cover" => {
                let [target] = <[String; 1]>::try_from(rest)
                    .map_err(|_| format!("{name}: expected exactly one path"))?;
                let path = track_path_from_uri(&target);
                Ok(if name == "info" {
                    Command::Info(path)
                } else {
                    Command::Cover(path)
                })
            }
            other => Err(format!("unknown command: {other}")),
        }
    }
}
