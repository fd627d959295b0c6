//! `boom`: command-line companion to the boom library.
//!
//! - **`reason`**: print the reason phrase for a status code.
//! - **`table`**: print every registered status code.
//! - **`render`**: build an error and print its text and JSON views.
//! - **`demo`**: render the two canonical examples (validation failure and
//!   wrapped internal error).

use std::collections::BTreeMap;
use std::process;

use boom::{Boom, Data};
use clap::{Parser, Subcommand};
use serde::Serialize;

/// boom: HTTP-status-aware error values
#[derive(Parser)]
#[command(name = "boom", version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Print the canonical reason phrase for a status code.
    ///
    /// Codes missing from the table print `Unknown` and exit with status 1.
    Reason {
        /// HTTP status code, e.g. 404.
        code: u16,
    },

    /// Print every registered status code and its reason phrase.
    Table,

    /// Build an error and print its text view, then its JSON view.
    ///
    /// Examples:
    ///   boom render --status 404 --message "user not found"
    ///   boom render --status 400 -m "invalid payload" \
    ///     --data '{"validation":{"source":"payload","keys":["email"]}}'
    ///   boom render --status 500 --cause "sql: no rows found in result set"
    Render {
        /// HTTP status code. Any value is accepted.
        #[arg(short = 's', long, value_name = "CODE")]
        status: u16,

        /// Caller-facing message.
        #[arg(short = 'm', long, value_name = "TEXT", default_value = "")]
        message: String,

        /// Data payload as a JSON object.
        #[arg(short = 'd', long, value_name = "JSON")]
        data: Option<String>,

        /// Internal cause. Shown in the text view only.
        #[arg(short = 'c', long, value_name = "TEXT")]
        cause: Option<String>,

        /// Pretty-print the JSON view.
        #[arg(long, env = "BOOM_PRETTY")]
        pretty: bool,
    },

    /// Render a validation bad request and a wrapped internal error.
    Demo {
        /// Pretty-print the JSON views.
        #[arg(long, env = "BOOM_PRETTY")]
        pretty: bool,
    },
}

#[derive(Serialize)]
struct ValidationError {
    source: String,
    keys: Vec<String>,
}

fn main() {
    let cli = Cli::parse();

    match cli.command {
        Command::Reason { code } => match lookup(code) {
            Ok(phrase) => println!("{phrase}"),
            Err(phrase) => {
                println!("{phrase}");
                process::exit(1);
            }
        },

        Command::Table => {
            for (code, phrase) in boom::status::codes() {
                println!("{code}  {phrase}");
            }
        }

        Command::Render {
            status,
            message,
            data,
            cause,
            pretty,
        } => {
            let data = data
                .as_deref()
                .map(parse_data)
                .transpose()
                .unwrap_or_else(|e| fatal(&e));
            let err = Boom::new(status, message, data, cause.map(Into::into));
            print_views(&err, pretty);
        }

        Command::Demo { pretty } => {
            let mut payload = BTreeMap::new();
            payload.insert(
                "validation",
                ValidationError {
                    source: "payload".into(),
                    keys: vec!["email".into()],
                },
            );
            let data = boom::to_data(&payload).unwrap_or_else(|e| fatal(&e.to_string()));
            print_views(&boom::bad_request("invalid payload", Some(data)), pretty);

            print_views(
                &boom::bad_implementation("sql: no rows found in result set"),
                pretty,
            );
        }
    }
}

/// Reason phrase for `code`; `Err` carries the fallback for unregistered codes.
fn lookup(code: u16) -> Result<&'static str, &'static str> {
    let phrase = boom::reason_phrase(code);
    if boom::status::is_known(code) {
        Ok(phrase)
    } else {
        Err(phrase)
    }
}

/// Parse a `--data` argument, which must be a JSON object.
fn parse_data(raw: &str) -> Result<Data, String> {
    let value: serde_json::Value =
        serde_json::from_str(raw).map_err(|e| format!("invalid --data JSON: {e}"))?;
    boom::to_data(&value).map_err(|e| format!("invalid --data: {e}"))
}

/// Print the text view, then the JSON view, each on its own line.
fn print_views(err: &Boom, pretty: bool) {
    println!("{err}");
    let json = if pretty {
        serde_json::to_string_pretty(err)
    } else {
        serde_json::to_string(err)
    };
    match json {
        Ok(json) => println!("{json}"),
        Err(e) => fatal(&format!("failed to serialise error: {e}")),
    }
}

/// Print an error message to stderr and exit with code 2.
fn fatal(msg: &str) -> ! {
    eprintln!("boom: {}", msg);
    process::exit(2);
}
