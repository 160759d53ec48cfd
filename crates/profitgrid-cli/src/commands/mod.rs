mod analyze;
mod auth;
mod lookup;
mod watchlist;

use std::time::Instant;

use profitgrid_core::{ApiClient, ClientConfig, CoreError, Dashboard, SessionStore, View};
use serde_json::Value;
use tracing::debug;

use crate::cli::{Cli, Command, WatchlistCommand};
use crate::envelope::{Envelope, EnvelopeError, EnvelopeMeta};
use crate::error::CliError;

pub struct CommandResult {
    pub data: Value,
    pub warnings: Vec<String>,
    pub errors: Vec<EnvelopeError>,
    pub view: Option<View>,
    /// Human rendering used by `--format table`.
    pub text: String,
}

impl CommandResult {
    pub fn ok(data: Value, text: impl Into<String>) -> Self {
        Self {
            data,
            warnings: Vec::new(),
            errors: Vec::new(),
            view: None,
            text: text.into(),
        }
    }

    /// Command that reached the backend and got an error back.
    pub fn failed(error: EnvelopeError) -> Self {
        let text = format!("Error: {}", error.message);
        Self::ok(Value::Null, text).with_error(error)
    }

    pub fn with_warning(mut self, warning: impl Into<String>) -> Self {
        self.warnings.push(warning.into());
        self
    }

    pub fn with_error(mut self, error: EnvelopeError) -> Self {
        self.errors.push(error);
        self
    }

    pub fn with_view(mut self, view: View) -> Self {
        self.view = Some(view);
        self
    }
}

/// Envelope plus its human rendering.
pub struct Outcome {
    pub envelope: Envelope,
    pub text: String,
}

pub fn client_config(cli: &Cli) -> ClientConfig {
    let mut config = ClientConfig::from_env();
    if let Some(url) = &cli.api_base_url {
        config = config.with_api_base_url(url);
    }
    if let Some(timeout_ms) = cli.timeout_ms {
        config = config.with_timeout_ms(timeout_ms);
    }
    if let Some(path) = &cli.session_file {
        config = config.with_session_path(path);
    }
    config
}

pub async fn run(cli: &Cli) -> Result<Outcome, CliError> {
    let config = client_config(cli);
    let api = ApiClient::from_config(&config);
    let store = SessionStore::new(&config.session_path);
    run_with(&cli.command, api, store).await
}

/// Dispatch against an explicit client and session store.
pub async fn run_with(
    command: &Command,
    api: ApiClient,
    store: SessionStore,
) -> Result<Outcome, CliError> {
    let started = Instant::now();

    let name = command_name(command);
    let result = match command {
        Command::Quote(args) => lookup::quote(args, &api).await?,
        Command::History(args) => lookup::history(args, &api).await?,
        Command::Profile(args) => lookup::profile(args, &api).await?,
        Command::Metrics(args) => lookup::metrics(args, &api).await?,
        Command::Login(args) => auth::login(args, &mut open(api, store)?).await?,
        Command::Register(args) => auth::register(args, &mut open(api, store)?).await?,
        Command::Logout => auth::logout(&mut open(api, store)?)?,
        Command::Whoami => auth::whoami(&open(api, store)?)?,
        Command::Analyze(args) => analyze::stock(args, &mut open(api, store)?).await?,
        Command::Crypto(args) => analyze::crypto(args, &mut open(api, store)?).await?,
        Command::Watchlist(args) => {
            let mut board = open(api, store)?;
            match &args.command {
                WatchlistCommand::List => watchlist::list(&mut board).await?,
                WatchlistCommand::Add(args) => watchlist::add(args, &mut board).await?,
                WatchlistCommand::Remove(args) => watchlist::remove(args, &mut board).await?,
                WatchlistCommand::Open(args) => watchlist::open(args, &mut board).await?,
            }
        }
    };

    let latency_ms = u64::try_from(started.elapsed().as_millis()).unwrap_or(u64::MAX);
    debug!(command = name, latency_ms, errors = result.errors.len(), "command finished");

    let CommandResult {
        data,
        warnings,
        errors,
        view,
        text,
    } = result;

    let mut meta = EnvelopeMeta::new(name, latency_ms);
    meta.view = view;
    for warning in warnings {
        meta.push_warning(warning);
    }

    Ok(Outcome {
        envelope: Envelope { meta, data, errors },
        text,
    })
}

fn open(api: ApiClient, store: SessionStore) -> Result<Dashboard, CliError> {
    Dashboard::open(api, store).map_err(CliError::from)
}

/// Backend failures become envelope errors; local failures abort the command.
fn surface(error: CoreError) -> Result<EnvelopeError, CliError> {
    match error {
        CoreError::Api(error) => Ok(EnvelopeError::from(&error)),
        CoreError::Validation(error) => Err(error.into()),
        CoreError::Session(error) => Err(error.into()),
    }
}

fn command_name(command: &Command) -> &'static str {
    match command {
        Command::Login(_) => "login",
        Command::Register(_) => "register",
        Command::Logout => "logout",
        Command::Whoami => "whoami",
        Command::Analyze(_) => "analyze",
        Command::Crypto(_) => "crypto",
        Command::Quote(_) => "quote",
        Command::History(_) => "history",
        Command::Profile(_) => "profile",
        Command::Metrics(_) => "metrics",
        Command::Watchlist(args) => match args.command {
            WatchlistCommand::List => "watchlist list",
            WatchlistCommand::Add(_) => "watchlist add",
            WatchlistCommand::Remove(_) => "watchlist remove",
            WatchlistCommand::Open(_) => "watchlist open",
        },
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use profitgrid_core::{ScriptedHttpClient, Session};
    use tempfile::tempdir;

    use super::*;
    use crate::cli::{AnalyzeArgs, LoginArgs, SymbolArgs, WatchlistArgs};

    fn api(http: &ScriptedHttpClient) -> ApiClient {
        let config = ClientConfig::default().with_api_base_url("http://api.test");
        ApiClient::new(Arc::new(http.clone()), &config)
    }

    #[tokio::test]
    async fn quote_failure_is_an_envelope_error() {
        let dir = tempdir().expect("tempdir");
        let http = ScriptedHttpClient::new();
        http.push_json(404, r#"{"detail":"Stock symbol not found"}"#);
        let command = Command::Quote(SymbolArgs {
            symbol: String::from("ZZZZ"),
        });

        let outcome = run_with(&command, api(&http), SessionStore::new(dir.path().join("s.json")))
            .await
            .expect("command completes");

        assert_eq!(outcome.envelope.meta.command, "quote");
        assert_eq!(outcome.envelope.errors.len(), 1);
        assert_eq!(outcome.envelope.errors[0].message, "Stock symbol not found");
        assert_eq!(outcome.envelope.errors[0].status, Some(404));
        assert_eq!(outcome.envelope.data, Value::Null);
    }

    #[tokio::test]
    async fn invalid_period_is_a_validation_error() {
        let dir = tempdir().expect("tempdir");
        let http = ScriptedHttpClient::new();
        let command = Command::Analyze(AnalyzeArgs {
            symbol: String::from("AAPL"),
            period: String::from("2w"),
        });

        let error = run_with(&command, api(&http), SessionStore::new(dir.path().join("s.json")))
            .await
            .err()
            .expect("period must be rejected");

        assert_eq!(error.exit_code(), 2);
        assert!(http.requests().is_empty());
    }

    #[tokio::test]
    async fn login_reports_view_in_meta() {
        let dir = tempdir().expect("tempdir");
        let http = ScriptedHttpClient::new();
        http.push_json(
            200,
            r#"{"access_token":"tok-1","token_type":"bearer","user_id":7,"username":"ada"}"#,
        );
        let command = Command::Login(LoginArgs {
            username: String::from("ada"),
            password: String::from("secret1"),
        });

        let outcome = run_with(&command, api(&http), SessionStore::new(dir.path().join("s.json")))
            .await
            .expect("login completes");

        assert_eq!(outcome.envelope.meta.view, Some(View::Analyzer));
        assert!(outcome.envelope.errors.is_empty());
        assert_eq!(outcome.envelope.data["username"], "ada");
        assert!(outcome.envelope.data.get("access_token").is_none());
    }

    #[test]
    fn watchlist_subcommands_have_distinct_names() {
        let command = Command::Watchlist(WatchlistArgs {
            command: WatchlistCommand::Remove(SymbolArgs {
                symbol: String::from("MSFT"),
            }),
        });
        assert_eq!(command_name(&command), "watchlist remove");
    }

    #[tokio::test]
    async fn watchlist_remove_deletes_the_stored_spelling() {
        let dir = tempdir().expect("tempdir");
        let store = SessionStore::new(dir.path().join("s.json"));
        store
            .save(&Session {
                token: String::from("tok"),
                user_id: 7,
                username: String::from("ada"),
            })
            .expect("session saved");
        let http = ScriptedHttpClient::new();
        http.push_json(200, r#"[{"id":1,"symbol":"aapl","user_id":7}]"#)
            .push_json(204, "");
        let command = Command::Watchlist(WatchlistArgs {
            command: WatchlistCommand::Remove(SymbolArgs {
                symbol: String::from("AAPL"),
            }),
        });

        let outcome = run_with(&command, api(&http), store).await.expect("completes");

        assert!(outcome.envelope.errors.is_empty());
        assert_eq!(outcome.envelope.data["removed"], "aapl");
        assert_eq!(
            http.requests()[1].url,
            "http://api.test/api/v1/watchlists/aapl"
        );
    }
}
