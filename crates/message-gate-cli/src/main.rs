// crates/message-gate-cli/src/main.rs
// ============================================================================
// Module: Message Gate CLI Entry Point
// Description: Command dispatcher for token minting and batch dispatch.
// Purpose: Provide a localized CLI for gateway workflows without a server.
// Dependencies: clap, message-gate-auth, message-gate-config, message-gate-core, message-gate-providers
// ============================================================================

//! ## Overview
//! The Message Gate CLI mints shared-secret bearer tokens, validates
//! configuration files, and runs notification batches through the dispatch
//! engine with the log-only transport. Inputs are untrusted and size-limited
//! before parsing.

// ============================================================================
// SECTION: Modules
// ============================================================================


// ============================================================================
// SECTION: Imports
// ============================================================================

use std::fs;
use std::io::Write;
use std::path::Path;
use std::path::PathBuf;
use std::process::ExitCode;
use std::sync::Arc;

use clap::Parser;
use clap::Subcommand;
use message_gate_auth::TokenRequest;
use message_gate_auth::issue_token;
use message_gate_config::DEFAULT_ISSUER;
use message_gate_config::DEFAULT_SECRET_VARIABLE;
use message_gate_config::GatewayConfig;
use message_gate_config::TrustModeConfig;
use message_gate_core::BatchEntry;
use message_gate_core::DispatchEngine;
use message_gate_core::EmailSender;
use message_gate_core::SecretProvider;
use message_gate_core::SmsSender;
use message_gate_core::TemplateStore;
use message_gate_providers::EnvSecretProvider;
use message_gate_providers::InMemoryTemplateStore;
use message_gate_providers::JsonTemplateStore;
use message_gate_providers::LogTransport;
use thiserror::Error;

// ============================================================================
// SECTION: Limits
// ============================================================================

/// Maximum size of a batch JSON input.
const MAX_BATCH_BYTES: usize = 1024 * 1024;
/// Default token validity in hours.
const DEFAULT_EXPIRES_HOURS: u64 = 24;

// ============================================================================
// SECTION: CLI Types
// ============================================================================

/// Top-level CLI definition.
#[derive(Parser, Debug)]
#[command(name = "message-gate", version, disable_help_subcommand = true)]
struct Cli {
    /// Selected subcommand to execute.
    #[command(subcommand)]
    command: Commands,
}

/// Available subcommands.
#[derive(Subcommand, Debug)]
enum Commands {
    /// Mint a shared-secret bearer token.
    Token(TokenCommand),
    /// Validate a configuration file.
    CheckConfig(CheckConfigCommand),
    /// Run a notification batch with the log-only transport.
    Dispatch(DispatchCommand),
}

/// Arguments for the `token` subcommand.
#[derive(clap::Args, Debug)]
struct TokenCommand {
    /// Token subject.
    #[arg(long, default_value = "user")]
    subject: String,
    /// Email claim forwarded to handlers.
    #[arg(long)]
    email: Option<String>,
    /// Customer identifier claim forwarded to handlers.
    #[arg(long)]
    customer_id: Option<String>,
    /// Token validity in hours.
    #[arg(long, default_value_t = DEFAULT_EXPIRES_HOURS)]
    expires_hours: u64,
    /// Token issuer.
    #[arg(long, default_value = DEFAULT_ISSUER)]
    issuer: String,
    /// Signing secret; read from `MESSAGE_GATE_SECRET` when omitted.
    #[arg(long)]
    secret: Option<String>,
}

/// Arguments for the `check-config` subcommand.
#[derive(clap::Args, Debug)]
struct CheckConfigCommand {
    /// Configuration file path; resolution rules apply when omitted.
    #[arg(long)]
    config: Option<PathBuf>,
}

/// Arguments for the `dispatch` subcommand.
#[derive(clap::Args, Debug)]
struct DispatchCommand {
    /// Batch file holding a JSON array of entries.
    #[arg(long)]
    batch: PathBuf,
    /// Configuration file path; resolution rules apply when omitted.
    #[arg(long)]
    config: Option<PathBuf>,
}

// ============================================================================
// SECTION: Errors
// ============================================================================

/// CLI error wrapper for user-facing messages.
#[derive(Debug, Error)]
#[error("{message}")]
struct CliError {
    /// Human-readable error message.
    message: String,
}

impl CliError {
    /// Constructs a new [`CliError`] from a message.
    const fn new(message: String) -> Self {
        Self {
            message,
        }
    }
}

/// CLI result alias for fallible operations.
type CliResult<T> = Result<T, CliError>;

// ============================================================================
// SECTION: Entry Point
// ============================================================================

fn main() -> ExitCode {
    match run() {
        Ok(code) => code,
        Err(err) => emit_error(&err.to_string()),
    }
}

/// Parses arguments and dispatches the selected command.
fn run() -> CliResult<ExitCode> {
    let cli = Cli::parse();
    match cli.command {
        Commands::Token(command) => command_token(&command),
        Commands::CheckConfig(command) => command_check_config(&command),
        Commands::Dispatch(command) => command_dispatch(&command),
    }
}

// ============================================================================
// SECTION: Token Command
// ============================================================================

/// Mints a token and prints it with a ready-to-paste header line.
fn command_token(command: &TokenCommand) -> CliResult<ExitCode> {
    let secret = resolve_secret(command.secret.as_deref())?;
    let mut request = TokenRequest::new(command.subject.clone())
        .with_validity_secs(command.expires_hours.saturating_mul(3_600));
    if let Some(email) = &command.email {
        request = request.with_email(email.clone());
    }
    if let Some(customer_id) = &command.customer_id {
        request = request.with_customer_id(customer_id.clone());
    }
    let token = issue_token(&request, &secret, &command.issuer)
        .map_err(|err| CliError::new(format!("token minting failed: {err}")))?;
    write_stdout_line(&token)
        .map_err(|err| CliError::new(format!("unable to write output: {err}")))?;
    write_stdout_line(&format!("Authorization: Bearer {token}"))
        .map_err(|err| CliError::new(format!("unable to write output: {err}")))?;
    Ok(ExitCode::SUCCESS)
}

/// Resolves the signing secret from the flag or the environment.
fn resolve_secret(flag: Option<&str>) -> CliResult<String> {
    if let Some(secret) = flag {
        if secret.is_empty() {
            return Err(CliError::new("secret must be non-empty".to_string()));
        }
        return Ok(secret.to_string());
    }
    EnvSecretProvider::for_variable(DEFAULT_SECRET_VARIABLE)
        .shared_secret()
        .map_err(|err| CliError::new(format!("secret resolution failed: {err}")))
}

// ============================================================================
// SECTION: Check Config Command
// ============================================================================

/// Loads and validates configuration, then reports the trust mode.
fn command_check_config(command: &CheckConfigCommand) -> CliResult<ExitCode> {
    let config = GatewayConfig::load(command.config.as_deref())
        .map_err(|err| CliError::new(err.to_string()))?;
    let mode = match config.auth.trust {
        TrustModeConfig::SharedSecret {
            ..
        } => "shared_secret",
        TrustModeConfig::KeySet {
            ..
        } => "key_set",
    };
    write_stdout_line(&format!("config ok: issuer={} trust={mode}", config.auth.issuer))
        .map_err(|err| CliError::new(format!("unable to write output: {err}")))?;
    Ok(ExitCode::SUCCESS)
}

// ============================================================================
// SECTION: Dispatch Command
// ============================================================================

/// Runs a batch file through the dispatch engine with the log transport.
fn command_dispatch(command: &DispatchCommand) -> CliResult<ExitCode> {
    let config = GatewayConfig::load(command.config.as_deref())
        .map_err(|err| CliError::new(err.to_string()))?;
    let batch = load_batch(&command.batch)?;
    let store = build_template_store(config.templates.catalog_path.as_deref())?;

    let transport = Arc::new(LogTransport::new(std::io::stderr()));
    let mut email = EmailSender::new(transport.clone());
    if let Some(name) = &config.email.configuration_set {
        email = email.with_configuration_set(name.clone());
    }
    let mut sms = SmsSender::new(transport);
    if let Some(name) = &config.sms.configuration_set {
        sms = sms.with_configuration_set(name.clone());
    }

    let engine = DispatchEngine::new(store, email, sms);
    let result = engine.process(&batch);
    let rendered = serde_json::to_string(&result)
        .map_err(|err| CliError::new(format!("unable to render result: {err}")))?;
    write_stdout_line(&rendered)
        .map_err(|err| CliError::new(format!("unable to write output: {err}")))?;
    if result.is_clean() {
        Ok(ExitCode::SUCCESS)
    } else {
        Ok(ExitCode::FAILURE)
    }
}

/// Loads and parses a size-limited batch file.
fn load_batch(path: &Path) -> CliResult<Vec<BatchEntry>> {
    let bytes =
        fs::read(path).map_err(|err| CliError::new(format!("unable to read batch: {err}")))?;
    if bytes.len() > MAX_BATCH_BYTES {
        return Err(CliError::new("batch file exceeds size limit".to_string()));
    }
    serde_json::from_slice(&bytes)
        .map_err(|err| CliError::new(format!("invalid batch file: {err}")))
}

/// Builds the template store from the configured catalog, if any.
fn build_template_store(catalog: Option<&Path>) -> CliResult<Arc<dyn TemplateStore>> {
    match catalog {
        Some(path) => {
            let store =
                JsonTemplateStore::load(path).map_err(|err| CliError::new(err.to_string()))?;
            Ok(Arc::new(store))
        }
        None => Ok(Arc::new(InMemoryTemplateStore::new())),
    }
}

// ============================================================================
// SECTION: Output Helpers
// ============================================================================

/// Writes one line to stdout.
fn write_stdout_line(message: &str) -> std::io::Result<()> {
    let mut stdout = std::io::stdout();
    writeln!(&mut stdout, "{message}")
}

/// Writes one line to stderr.
fn write_stderr_line(message: &str) -> std::io::Result<()> {
    let mut stderr = std::io::stderr();
    writeln!(&mut stderr, "{message}")
}

/// Reports an error on stderr and returns the failure exit code.
fn emit_error(message: &str) -> ExitCode {
    let _ = write_stderr_line(message);
    ExitCode::FAILURE
}
