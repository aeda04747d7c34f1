use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(multicall = true)]
struct Repl {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug, Clone, PartialEq, Eq)]
pub enum Command {
    #[command(about = "Choose the files to upload, replacing the selection")]
    Select { paths: Vec<PathBuf> },
    #[command(about = "Upload the selected files")]
    Upload,
    #[command(about = "Ask the service to process uploaded files")]
    Process,
    #[command(about = "Set the query input without sending it")]
    Type {
        #[arg(trailing_var_arg = true, allow_hyphen_values = true)]
        text: Vec<String>,
    },
    #[command(about = "Send the query input, replacing it first when text is given")]
    Ask {
        #[arg(trailing_var_arg = true, allow_hyphen_values = true)]
        text: Vec<String>,
    },
    #[command(about = "Show the current state")]
    Status,
    #[command(about = "Exit", alias = "exit")]
    Quit,
}

pub fn parse_line(line: &str) -> Result<Command, clap::Error> {
    let words: Vec<&str> = line.split_whitespace().collect();
    if words.is_empty() {
        return Ok(Command::Status);
    }

    let mut command = Repl::try_parse_from(words)?.command;

    // Query text stays exactly as typed, not as clap split it
    if let Command::Type { text } | Command::Ask { text } = &mut command {
        if !text.is_empty() {
            *text = vec![raw_remainder(line).to_string()];
        }
    }

    Ok(command)
}

fn raw_remainder(line: &str) -> &str {
    line.trim_start()
        .split_once(char::is_whitespace)
        .map(|(_, rest)| rest)
        .unwrap_or("")
}
