//! trustsms - SMS conversations and trusted-sender gated sending
//!
//! Reads conversation threads straight from the SMS database, sends through
//! an external SMS command, and keeps the trusted list in a preference file.
//!
//! CHANGELOG:
//! - 10/16/2026 - spam and status commands
//! - 10/14/2026 - threads, send, trust, trusted commands

use clap::{Parser, Subcommand};
use std::process::ExitCode;
use trustsms::aggregate::ThreadSelection;
use trustsms::commands;
use trustsms::compose::TrustGate;
use trustsms::config::Config;
use trustsms::output::OutputControls;

/// SMS conversations and trusted-sender gated sending.
#[derive(Parser, Debug)]
#[command(name = "trustsms")]
#[command(version, about, long_about = None)]
struct Cli {
    /// Output as JSON
    #[arg(long, global = true)]
    json: bool,

    /// Compact JSON output (no whitespace)
    #[arg(long, global = true)]
    compact: bool,

    /// Comma-separated field allowlist for JSON output
    #[arg(long, global = true)]
    fields: Option<String>,

    /// SMS database path (overrides TRUSTSMS_DB_PATH)
    #[arg(long, global = true)]
    db: Option<String>,

    /// Contacts JSON path (overrides TRUSTSMS_CONTACTS_PATH)
    #[arg(long, global = true)]
    contacts: Option<String>,

    /// Preferences file path (overrides TRUSTSMS_PREFS_PATH)
    #[arg(long, global = true)]
    prefs: Option<String>,

    /// Which message represents a thread
    #[arg(long, global = true, value_enum, default_value_t = ThreadSelection::FirstSeen)]
    thread_selection: ThreadSelection,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// List conversation threads
    Threads,

    /// Send an SMS to a 10-digit number or a contact name
    Send {
        /// Phone number or contact name (fuzzy matched)
        recipient: String,

        /// Message text
        #[arg(required = true)]
        message: Vec<String>,

        /// Trusted-list check applied before sending
        #[arg(long, value_enum, default_value_t = TrustGate::RequireKnown)]
        trust_gate: TrustGate,

        /// Send command template with {address} and {body} placeholders
        /// (overrides TRUSTSMS_SEND_COMMAND)
        #[arg(long)]
        send_command: Option<String>,
    },

    /// Add a number to the trusted list
    Trust {
        /// 10-digit phone number
        number: String,
    },

    /// Show the trusted list
    Trusted,

    /// Mark a number as spam (a trusted number stays trusted)
    Spam {
        /// 10-digit phone number
        number: String,
    },

    /// Show whether a number is TRUSTED, SPAM or UNKNOWN
    Status {
        /// 10-digit phone number
        number: String,
    },
}

fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("warn")),
        )
        .init();

    let cli = Cli::parse();

    let output_controls = OutputControls {
        json: cli.json,
        compact: cli.compact,
        fields: cli.fields.clone(),
    };

    let send_command = match &cli.command {
        Command::Send { send_command, .. } => send_command.as_deref(),
        _ => None,
    };
    let config = Config::from_env().with_overrides(
        cli.db.as_deref(),
        cli.contacts.as_deref(),
        cli.prefs.as_deref(),
        send_command,
    );
    tracing::debug!(?config, "resolved configuration");

    let result = match &cli.command {
        Command::Threads => {
            commands::threads::list(&config, cli.thread_selection, &output_controls)
        }
        Command::Send {
            recipient,
            message,
            trust_gate,
            ..
        } => commands::messaging::send(
            &config,
            recipient,
            &message.join(" "),
            *trust_gate,
            cli.thread_selection,
            &output_controls,
        ),
        Command::Trust { number } => commands::trust::add(&config, number, &output_controls),
        Command::Trusted => commands::trust::list(&config, &output_controls),
        Command::Spam { number } => commands::trust::spam(&config, number, &output_controls),
        Command::Status { number } => commands::trust::status(&config, number, &output_controls),
    };

    match result {
        Ok(()) => ExitCode::from(0),
        Err(e) => {
            output_controls.report_error(&e);
            ExitCode::from(1)
        }
    }
}
