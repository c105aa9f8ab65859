//! Command handlers. Each prints its result on stdout; failures come back
//! as `anyhow` errors carrying the user-facing message.

use std::time::Duration;

use anyhow::{Context, Result, anyhow, bail};
use beepy_client::{AppState, AuthError, ClientConfig, GuardState, NavigationMode, Navigator};
use beepy_validation::{Cpf, FormData, Phone, validate_email};
use serde_json::{Value, json};

use crate::cli::{CheckCommands, Cli, Commands};

/// Navigation in a terminal: there is no screen to change, so the user is
/// told where they were sent.
pub struct TerminalNavigator;

impl Navigator for TerminalNavigator {
    fn navigate(&self, route: &str, mode: NavigationMode) {
        tracing::debug!(route, ?mode, "navigate");
        if route == beepy_client::LOGIN_ROUTE {
            eprintln!("Please sign in again: beepy login --email <EMAIL> --password <PASSWORD>");
        }
    }
}

/// Environment first, then command-line overrides.
pub fn config(cli: &Cli) -> Result<ClientConfig> {
    let mut config = ClientConfig::from_env().context("invalid environment configuration")?;

    if let Some(url) = &cli.base_url {
        config = config.with_base_url(url.as_str()).context("invalid --base-url")?;
    }
    if let Some(ms) = cli.timeout_ms {
        config = config
            .with_timeout(Duration::from_millis(ms))
            .context("invalid --timeout-ms")?;
    }
    if let Some(path) = &cli.session_file {
        config = config.with_session_file(path);
    }
    Ok(config)
}

pub async fn run(app: &AppState, command: Commands) -> Result<()> {
    match command {
        Commands::Login { email, password } => {
            let data = form(json!({"email": email, "password": password}));
            let user = app.auth.login(&data).await.map_err(auth_failure)?;
            println!("Signed in as {} ({})", user.name, user.role.label());
        }

        Commands::Register {
            email,
            name,
            role,
            password,
        } => {
            let data = form(json!({
                "email": email,
                "name": name,
                "role": role,
                "password": password,
            }));
            let user = app.auth.register(&data).await.map_err(auth_failure)?;
            println!("Account created; signed in as {} ({})", user.name, user.role.label());
        }

        Commands::Logout => {
            app.auth.logout().map_err(auth_failure)?;
            println!("Signed out");
        }

        Commands::Whoami => match app.store.current_user() {
            Some(user) => {
                let rendered = serde_json::to_string_pretty(&user)
                    .context("failed to render user profile")?;
                println!("{rendered}");
            }
            None => println!("Not signed in"),
        },

        Commands::Verify => {
            let state = app.route_guard().mount().settled().await;
            match state {
                GuardState::Authenticated => println!("Session is valid"),
                _ => bail!("Session is not valid"),
            }
        }

        Commands::Menu => {
            let Some(user) = app.store.current_user() else {
                bail!("Not signed in");
            };
            println!("{} ({})", user.name, user.role.label());
            for entry in app.menu() {
                println!("  {:<26} {}", entry.path, entry.label);
            }
            let capabilities = app.capabilities();
            let names: Vec<_> = capabilities.iter().map(|c| c.as_str()).collect();
            println!("Actions: {}", names.join(", "));
        }

        Commands::Check(check) => run_check(check)?,
    }
    Ok(())
}

fn run_check(check: CheckCommands) -> Result<()> {
    match check {
        CheckCommands::Cpf { value } => {
            let cpf = Cpf::parse(&value).map_err(|_| anyhow!("Invalid CPF"))?;
            println!("Valid CPF: {cpf}");
        }
        CheckCommands::Email { value } => {
            if !validate_email(&value) {
                bail!("Invalid email");
            }
            println!("Valid email: {value}");
        }
        CheckCommands::Phone { value } => {
            let phone = Phone::parse(&value).map_err(|_| anyhow!("Invalid phone"))?;
            let kind = if phone.is_mobile() { "mobile" } else { "landline" };
            println!("Valid {kind} phone: {phone}");
        }
    }
    Ok(())
}

fn auth_failure(err: AuthError) -> anyhow::Error {
    tracing::debug!("auth command failed: {err}");
    match &err {
        AuthError::Invalid(result) => {
            let lines: Vec<_> = result
                .errors()
                .iter()
                .map(|(field, msg)| format!("  {field}: {msg}"))
                .collect();
            anyhow!("{}\n{}", err.user_message(), lines.join("\n"))
        }
        _ => anyhow!(err.user_message()),
    }
}

fn form(value: Value) -> FormData {
    match value {
        Value::Object(map) => map,
        _ => FormData::new(),
    }
}
