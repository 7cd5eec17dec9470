mod api_client;
mod cli;
mod config;
mod errors;
mod models;
mod results;
mod state;
mod submission;
mod ui;

use std::io::Write;
use std::process::ExitCode;
use std::sync::Arc;

use anyhow::Result;
use clap::Parser;
use owo_colors::OwoColorize;
use serde_json::json;
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use crate::api_client::HttpTransport;
use crate::cli::{Cli, Commands};
use crate::config::Config;
use crate::state::ClientSession;
use crate::submission::{FeedbackAck, MatchForm};

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<ExitCode> {
    let cli = Cli::parse();

    let mut config = Config::from_env()?;
    if let Some(api_url) = &cli.api_url {
        config = config.with_api_url(api_url);
    }

    // Logs go to stderr; stdout carries the rendered results
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| {
            EnvFilter::new(format!("{}={}", env!("CARGO_CRATE_NAME"), &config.rust_log))
        }))
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    info!("Starting match-client v{}", env!("CARGO_PKG_VERSION"));
    info!("Matching service: {}", config.api_url);

    let transport = Arc::new(HttpTransport::new(&config)?);
    let mut session = ClientSession::new(&config, transport);

    match cli.command {
        Commands::Match {
            resumes,
            jd_file,
            jd_text,
            select,
            interactive,
            json,
        } => {
            let form = MatchForm {
                resumes,
                jd_file,
                jd_text,
            };
            run_match(&mut session, &form, select, interactive, json).await
        }
        Commands::Feedback { text } => run_feedback(&mut session, &text).await,
    }
}

async fn run_match(
    session: &mut ClientSession,
    form: &MatchForm,
    select: Option<u64>,
    interactive: bool,
    as_json: bool,
) -> Result<ExitCode> {
    let loading = format!("Matching {} résumé(s)...", form.resumes.len());
    let watcher = session.watch_match_form();
    let mut stderr = std::io::stderr();
    let (submitted, indicator) = tokio::join!(
        session.submit_match(form),
        ui::show_while_loading(watcher, &loading, &mut stderr),
    );
    indicator?;

    if !submitted {
        let message = session.surface().error_banner.clone().unwrap_or_default();
        eprintln!("{}", message.red());
        return Ok(ExitCode::FAILURE);
    }

    if let Some(n) = select {
        session.pick(usize::try_from(n - 1).unwrap_or(usize::MAX));
    }

    if as_json {
        let controller = session.controller();
        let body = json!({
            "selected_index": controller.selected_index(),
            "labels": controller.labels(),
            "summary": controller.summary(),
            "outcomes": controller.result_set().outcomes(),
        });
        println!("{}", serde_json::to_string_pretty(&body)?);
        return Ok(ExitCode::SUCCESS);
    }

    let surface = session.surface();
    let mut stdout = std::io::stdout().lock();
    writeln!(stdout, "{}", surface.render_summary())?;
    write!(stdout, "{}", surface.render_picker())?;
    writeln!(stdout)?;
    write!(stdout, "{}", surface.render_detail())?;
    stdout.flush()?;
    drop(stdout);

    if interactive {
        let stdin = tokio::io::BufReader::new(tokio::io::stdin());
        let mut stdout = std::io::stdout();
        ui::run_picker(session, stdin, &mut stdout).await?;
    }

    Ok(ExitCode::SUCCESS)
}

async fn run_feedback(session: &mut ClientSession, text: &str) -> Result<ExitCode> {
    let watcher = session.watch_feedback_form();
    let mut stderr = std::io::stderr();
    let (ack, indicator) = tokio::join!(
        session.submit_feedback(text),
        ui::show_while_loading(watcher, "Sending feedback...", &mut stderr),
    );
    indicator?;

    Ok(match ack {
        FeedbackAck::Success(message) => {
            println!("{}", message.green());
            ExitCode::SUCCESS
        }
        FeedbackAck::Error(message) => {
            eprintln!("{}", message.red());
            ExitCode::FAILURE
        }
    })
}
