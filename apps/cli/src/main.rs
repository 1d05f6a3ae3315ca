use std::{sync::Arc, time::Duration};

use anyhow::{Context, Result};
use clap::Parser;
use client_core::{FactController, FactEvent, HttpFactSource};
use shared::domain::FetchState;
use tokio::io::{AsyncBufReadExt, BufReader};
use tracing::info;
use url::Url;

mod config;

#[derive(Parser, Debug)]
struct Args {
    /// Fact endpoint URL; overrides the settings file and environment.
    #[arg(long)]
    fact_url: Option<String>,
    /// Fetch a single fact and exit (exit code 1 if the fetch fails).
    #[arg(long)]
    once: bool,
    /// Print each state transition as a JSON line instead of prose.
    #[arg(long)]
    json: bool,
}

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt().init();
    let args = Args::parse();

    let mut settings = config::load_settings();
    if let Some(fact_url) = args.fact_url {
        settings.fact_url = fact_url;
    }
    let fact_url = config::normalize_fact_url(&settings.fact_url);
    Url::parse(&fact_url).with_context(|| format!("invalid fact endpoint url '{fact_url}'"))?;

    let source = Arc::new(HttpFactSource::new(fact_url));
    let controller = if settings.simulated_latency_ms > 0 {
        FactController::with_simulated_latency(
            source,
            Duration::from_millis(settings.simulated_latency_ms),
        )
    } else {
        FactController::new(source)
    };

    let mut events = controller.subscribe_events();
    info!("fetching initial fact");
    controller.trigger().await;

    if args.once {
        loop {
            let FactEvent::StateChanged(state) = events.recv().await?;
            print_state(&state, args.json)?;
            match state {
                FetchState::Success { .. } => return Ok(()),
                FetchState::Failed { .. } => std::process::exit(1),
                _ => {}
            }
        }
    }

    println!("Press Enter for a new fact, q to quit.");
    let mut lines = BufReader::new(tokio::io::stdin()).lines();
    loop {
        tokio::select! {
            event = events.recv() => {
                let FactEvent::StateChanged(state) = event?;
                print_state(&state, args.json)?;
            }
            line = lines.next_line() => {
                match line? {
                    Some(input) if input.trim() == "q" => break,
                    Some(_) => controller.trigger().await,
                    None => break,
                }
            }
        }
    }

    Ok(())
}

fn print_state(state: &FetchState, json: bool) -> Result<()> {
    if json {
        println!("{}", serde_json::to_string(state)?);
        return Ok(());
    }
    match state {
        FetchState::Idle => {}
        FetchState::Loading => println!("Loading..."),
        FetchState::Success { value } => println!("{value}"),
        FetchState::Failed { message } => println!("{message}"),
    }
    Ok(())
}
