use std::{path::PathBuf, process::ExitCode, sync::Arc};

use anyhow::{Context, Result};
use clap::{Parser, ValueEnum};
use client_core::{ShowListController, SortMode, TmdbClient, TmdbShowRepository, ViewState};
use tokio::io::{AsyncBufReadExt, BufReader};
use tracing::info;
use tracing_subscriber::EnvFilter;

mod commands;
mod config;
mod render;

use commands::{Command, HELP_TEXT};
use config::{load_settings, Settings, DEFAULT_CONFIG_FILE};

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum SortArg {
    Unsorted,
    Name,
}

impl From<SortArg> for SortMode {
    fn from(value: SortArg) -> Self {
        match value {
            SortArg::Unsorted => SortMode::Unsorted,
            SortArg::Name => SortMode::ByName,
        }
    }
}

/// Browse TMDB's top rated TV shows.
#[derive(Parser, Debug)]
#[command(name = "tvshows", version)]
struct Args {
    /// Config file; missing files are ignored.
    #[arg(long, default_value = DEFAULT_CONFIG_FILE)]
    config: PathBuf,
    #[arg(long)]
    api_url: Option<String>,
    #[arg(long)]
    api_key: Option<String>,
    #[arg(long)]
    language: Option<String>,
    #[arg(long, value_enum, default_value_t = SortArg::Unsorted)]
    sort: SortArg,
    /// Print the result as JSON instead of a grid.
    #[arg(long, conflicts_with = "interactive")]
    json: bool,
    /// Keep the list open and accept sort/retry commands on stdin.
    #[arg(short, long)]
    interactive: bool,
}

impl Args {
    fn apply_overrides(&self, settings: &mut Settings) {
        if let Some(v) = &self.api_url {
            settings.api_url = v.clone();
        }
        if let Some(v) = &self.api_key {
            settings.api_key = Some(v.clone());
        }
        if let Some(v) = &self.language {
            settings.language = v.clone();
        }
    }
}

#[tokio::main]
async fn main() -> Result<ExitCode> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_writer(std::io::stderr)
        .init();
    let args = Args::parse();

    let mut settings = load_settings(&args.config)?;
    args.apply_overrides(&mut settings);
    info!(
        api_url = %settings.api_url,
        language = %settings.language,
        sort = ?args.sort,
        "tvshows: starting"
    );

    let client =
        TmdbClient::new(settings.client_options()?).context("failed to set up TMDB client")?;
    let repository = TmdbShowRepository::new(Arc::new(client));
    let controller = ShowListController::new(Arc::new(repository));
    controller.set_sorting(args.sort.into()).await;

    if args.interactive {
        run_interactive(controller, &settings).await?;
        return Ok(ExitCode::SUCCESS);
    }
    run_once(&controller, &settings, args.json).await
}

async fn run_once(
    controller: &ShowListController,
    settings: &Settings,
    json: bool,
) -> Result<ExitCode> {
    if !json {
        eprintln!("{}", render::LOADING_TEXT);
    }
    controller.fetch().await;

    let state = controller.view_state();
    if json {
        println!("{}", render::render_json(&state, &settings.image_base_url)?);
    } else {
        println!("{}", render::render_header(controller.sort_mode()));
        println!("{}", render::render_view(&state, &settings.image_base_url));
    }

    Ok(match state {
        ViewState::Error(_) => ExitCode::FAILURE,
        _ => ExitCode::SUCCESS,
    })
}

async fn run_interactive(controller: Arc<ShowListController>, settings: &Settings) -> Result<()> {
    let mut view_rx = controller.subscribe_view_state();
    let mut sort_rx = controller.subscribe_sort_mode();
    let image_base_url = settings.image_base_url.clone();
    let renderer = tokio::spawn(async move {
        loop {
            {
                let sort = *sort_rx.borrow_and_update();
                let state = view_rx.borrow_and_update();
                println!("\n{}", render::render_header(sort));
                println!("{}", render::render_view(&state, &image_base_url));
                if matches!(*state, ViewState::Error(_)) {
                    println!("Type 'r' to retry.");
                }
            }
            tokio::select! {
                changed = view_rx.changed() => if changed.is_err() { break },
                changed = sort_rx.changed() => if changed.is_err() { break },
            }
        }
    });

    println!("{HELP_TEXT}");
    controller.spawn_fetch();

    let mut lines = BufReader::new(tokio::io::stdin()).lines();
    while let Some(line) = lines.next_line().await.context("failed to read stdin")? {
        match Command::parse(&line) {
            None => {}
            Some(Err(message)) => println!("{message}"),
            Some(Ok(Command::ToggleSort)) => {
                controller.toggle_sorting().await;
            }
            Some(Ok(Command::Retry)) => {
                controller.spawn_retry();
            }
            Some(Ok(Command::Help)) => println!("{HELP_TEXT}"),
            Some(Ok(Command::Quit)) => break,
        }
    }

    renderer.abort();
    Ok(())
}
