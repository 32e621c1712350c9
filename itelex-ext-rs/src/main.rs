//! `itelex-ext`: inspect directory extension codes, timestamps and entries
//! from the command line.

use anyhow::{Context, Result};
use chrono::{Local, Utc};
use clap::{Parser, Subcommand};
use flexi_logger::{Logger, LoggerHandle};
use itelex_directory_core::prelude::*;
use log::debug;
use std::fs;
use std::io::{self, Read, Write};
use std::path::PathBuf;
use std::process::ExitCode;

const DEFAULT_LOG_LEVEL: &str = "warn";
const EXIT_INVALID_INPUT: u8 = 2;

#[derive(Parser, Debug)]
#[command(name = "itelex-ext")]
#[command(version, about = "Decode ITELEX directory values", long_about = None)]
struct Cli {
    /// Log level (trace|debug|info|warn|error); falls back to RUST_LOG
    #[arg(long, global = true)]
    log_level: Option<String>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Render an internal extension code for display
    Decode {
        #[arg(allow_negative_numbers = true)]
        code: i64,
    },

    /// Turn a typed extension into its internal code
    Encode {
        #[arg(allow_hyphen_values = true)]
        input: String,

        /// Reject codes outside 0..=110
        #[arg(long)]
        strict: bool,
    },

    /// Convert a raw directory timestamp to a date
    Timestamp {
        #[arg(allow_negative_numbers = true)]
        raw: i64,

        /// Render in UTC instead of the local time zone
        #[arg(long)]
        utc: bool,

        /// Print RFC 3339 instead of the table layout
        #[arg(long)]
        rfc3339: bool,
    },

    /// Print decorated rows for a JSON array of directory entries
    Entries {
        /// Input file; reads stdin when omitted
        file: Option<PathBuf>,

        /// Directory holding `<locale>.json` localization tables
        #[arg(long, env = "ITELEX_LOCALIZATIONS")]
        localizations: PathBuf,

        #[arg(long, env = "ITELEX_LOCALE", default_value = DEFAULT_LOCALE)]
        locale: String,

        /// Render timestamps in UTC instead of the local time zone
        #[arg(long)]
        utc: bool,
    },
}

fn init_logger(level: Option<&str>) -> Result<LoggerHandle> {
    let logger = match level {
        Some(level) => Logger::try_with_str(level),
        None => Logger::try_with_env_or_str(DEFAULT_LOG_LEVEL),
    }
    .context("invalid log level")?;
    logger.start().context("failed to start logger")
}

fn run_command(command: Commands, input: &mut dyn Read, out: &mut dyn Write) -> Result<u8> {
    match command {
        Commands::Decode { code } => {
            writeln!(out, "{}", decode_extension(code))?;
        }
        Commands::Encode { input: typed, strict } => {
            let encoded = if strict {
                typed.parse::<ExtensionCode>().map(i64::from)
            } else {
                encode_extension(Some(typed.as_str())).map_err(|err| CoreError::invalid_extension(&typed, err))
            };
            match encoded {
                Ok(code) => writeln!(out, "{code}")?,
                Err(err) => {
                    eprintln!("itelex-ext: {err}");
                    return Ok(EXIT_INVALID_INPUT);
                }
            }
        }
        Commands::Timestamp { raw, utc, rfc3339 } => {
            let time = decode_timestamp(raw)?;
            let rendered = match (rfc3339, utc) {
                (true, true) => time.to_rfc3339(),
                (true, false) => time.with_timezone(&Local).to_rfc3339(),
                (false, true) => format_timestamp(&time, &Utc),
                (false, false) => format_timestamp(&time, &Local),
            };
            writeln!(out, "{rendered}")?;
        }
        Commands::Entries {
            file,
            localizations,
            locale,
            utc,
        } => {
            let raw = match &file {
                Some(path) => fs::read_to_string(path)
                    .with_context(|| format!("failed to read {}", path.display()))?,
                None => {
                    let mut buffer = String::new();
                    input.read_to_string(&mut buffer).context("failed to read stdin")?;
                    buffer
                }
            };
            let entries: Vec<DirectoryEntry> =
                serde_json::from_str(&raw).context("input is not a JSON array of entries")?;

            let source = FileLocalizationSource::new(localizations);
            let context = DisplayContext::builder()
                .logged_in(false)
                .load_localizations(&source, Some(locale.as_str()))?
                .build()?;
            debug!(
                "event=entries_render module=cli status=start count={} locale={}",
                entries.len(),
                context.locale
            );

            for entry in &entries {
                let row = if utc {
                    context.decorator().with_zone(Utc).decorate(entry)
                } else {
                    context.decorator().decorate(entry)
                };
                writeln!(out, "{row}")?;
            }
        }
    }
    Ok(0)
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    let _logger = match init_logger(cli.log_level.as_deref()) {
        Ok(handle) => handle,
        Err(err) => {
            eprintln!("itelex-ext: {err:#}");
            return ExitCode::from(EXIT_INVALID_INPUT);
        }
    };

    let stdin = io::stdin();
    let stdout = io::stdout();
    match run_command(cli.command, &mut stdin.lock(), &mut stdout.lock()) {
        Ok(code) => ExitCode::from(code),
        Err(err) => {
            eprintln!("itelex-ext: {err:#}");
            ExitCode::FAILURE
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn run(command: Commands, stdin: &str) -> (u8, String) {
        let mut out = Vec::new();
        let code = run_command(command, &mut stdin.as_bytes(), &mut out).unwrap();
        (code, String::from_utf8(out).unwrap())
    }

    #[test]
    fn cli_definition_is_consistent() {
        use clap::CommandFactory;
        Cli::command().debug_assert();
    }

    #[test]
    fn parses_negative_and_dash_arguments() {
        let cli = Cli::try_parse_from(["itelex-ext", "decode", "-1"]).unwrap();
        assert!(matches!(cli.command, Commands::Decode { code: -1 }));

        let cli = Cli::try_parse_from(["itelex-ext", "encode", "-"]).unwrap();
        assert!(matches!(cli.command, Commands::Encode { ref input, strict: false } if input == "-"));
    }

    #[test]
    fn decode_and_encode_print_codes() {
        assert_eq!(run(Commands::Decode { code: 100 }, ""), (0, "00\n".to_string()));
        assert_eq!(
            run(
                Commands::Encode {
                    input: "0".to_string(),
                    strict: false
                },
                ""
            ),
            (0, "110\n".to_string())
        );
    }

    #[test]
    fn encode_reports_invalid_input_with_exit_code() {
        let (code, out) = run(
            Commands::Encode {
                input: "abc".to_string(),
                strict: false,
            },
            "",
        );
        assert_eq!(code, EXIT_INVALID_INPUT);
        assert!(out.is_empty());

        let (code, _) = run(
            Commands::Encode {
                input: "500".to_string(),
                strict: true,
            },
            "",
        );
        assert_eq!(code, EXIT_INVALID_INPUT);
    }

    #[test]
    fn timestamp_prints_utc_rfc3339() {
        let (_, out) = run(
            Commands::Timestamp {
                raw: ITELEX_EPOCH_OFFSET_SECS,
                utc: true,
                rfc3339: true,
            },
            "",
        );
        assert_eq!(out, "1970-01-01T00:00:00+00:00\n");
    }

    #[test]
    fn entries_reads_stdin_and_decorates() {
        let dir = tempfile::tempdir().unwrap();
        fs::write(
            dir.path().join("de.json"),
            r#"{"yes":"ja","no":"nein","client_types":{"5":"ASCII"}}"#,
        )
        .unwrap();

        let stdin = format!(
            r#"[{{"number":11150,"name":"Amt","extension":0,"flags":0,"timestamp":{},"client_type":5}}]"#,
            ITELEX_EPOCH_OFFSET_SECS
        );
        let (code, out) = run(
            Commands::Entries {
                file: None,
                localizations: dir.path().to_path_buf(),
                locale: "de".to_string(),
                utc: true,
            },
            &stdin,
        );
        assert_eq!(code, 0);
        assert_eq!(out, "11150  - Amt | ASCII | nein | 01.01.70, 00:00\n");
    }
}
