use super::render::{print_messages, render_view};
use super::setup::{Cli, Commands, ContentArgs};
use clap::Parser;
use colored::Colorize;
use std::io::Read;
use std::path::Path;
use std::process::ExitCode;
use tracing_subscriber::EnvFilter;
use wikiapp::config::WikiConfig;
use wikiapp::error::Result;
use wikiapp::init::{initialize, WikiContext};
use wikiapp::{CmdResult, FormData, Method, View};

struct AppContext {
    ctx: WikiContext,
    json: bool,
}

pub fn run() -> Result<ExitCode> {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    let ctx = initialize(cli.data.clone())?;
    tracing::debug!(data_dir = %ctx.data_dir.display(), "starting");
    let mut app = AppContext {
        ctx,
        json: cli.json,
    };

    match cli.command {
        None | Some(Commands::Index) => {
            let view = app.ctx.api.index()?;
            emit(&app, &view)
        }
        Some(Commands::View { title }) => {
            let view = app.ctx.api.view(&title.join(" "))?;
            emit(&app, &view)
        }
        Some(Commands::Create { title, content }) => handle_create(&mut app, title, content),
        Some(Commands::Edit {
            path_title,
            title,
            content,
        }) => handle_edit(&mut app, &path_title.join(" "), title, content),
        Some(Commands::Random) => {
            let view = app.ctx.api.random()?;
            emit(&app, &view)
        }
        Some(Commands::Search { query }) => {
            let data = FormData::new().with("q", query.join(" "));
            let view = app.ctx.api.search(&Method::Post, &data)?;
            emit(&app, &view)
        }
        Some(Commands::Import { paths }) => {
            let result = app.ctx.api.import_entries(paths)?;
            emit_result(&app, &result)
        }
        Some(Commands::Export { output }) => {
            let result = app.ctx.api.export_entries(&output)?;
            emit_result(&app, &result)
        }
        Some(Commands::Config { key, value }) => handle_config(&app, key, value),
    }
}

fn init_logging(verbose: bool) {
    let filter = if verbose {
        EnvFilter::new("wiki=debug,wikiapp=debug")
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| "wiki=warn,wikiapp=warn".into())
    };
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .try_init();
}

fn handle_create(
    app: &mut AppContext,
    title: Option<String>,
    content: ContentArgs,
) -> Result<ExitCode> {
    if title.is_none() && content.is_empty() {
        let view = app.ctx.api.create(&Method::Get, &FormData::new())?;
        return emit(app, &view);
    }

    let mut data = FormData::new();
    if let Some(title) = title {
        data.insert("title", title);
    }
    if let Some(content) = read_content(&content)? {
        data.insert("content", content);
    }
    let view = app.ctx.api.create(&Method::Post, &data)?;
    emit(app, &view)
}

fn handle_edit(
    app: &mut AppContext,
    path_title: &str,
    title: Option<String>,
    content: ContentArgs,
) -> Result<ExitCode> {
    let current = app.ctx.api.edit(path_title, &Method::Get, &FormData::new())?;
    if title.is_none() && content.is_empty() {
        return emit(app, &current);
    }

    let new_content = read_content(&content)?;
    let (current_title, current_content) = match current {
        View::EditForm { title, content } => (title, content),
        // Unknown entry: editing with explicit content creates it
        _ if new_content.is_some() => (path_title.to_string(), String::new()),
        other => return emit(app, &other),
    };

    let data = FormData::new()
        .with("title", title.unwrap_or(current_title))
        .with("content", new_content.unwrap_or(current_content));
    let view = app.ctx.api.edit(path_title, &Method::Post, &data)?;
    emit(app, &view)
}

fn handle_config(app: &AppContext, key: Option<String>, value: Option<String>) -> Result<ExitCode> {
    let data_dir = &app.ctx.data_dir;
    let mut config = app.ctx.api.config().clone();

    match (key, value) {
        (None, _) => {
            if app.json {
                println!("{}", to_json(&config)?);
            } else {
                for key in WikiConfig::KEYS {
                    println!("{} = {}", key, config.get(key).unwrap_or_default());
                }
            }
            Ok(ExitCode::SUCCESS)
        }
        (Some(key), None) => match config.get(&key) {
            Some(value) => {
                println!("{}", value);
                Ok(ExitCode::SUCCESS)
            }
            None => fail(&format!("Unknown config key: {}", key)),
        },
        (Some(key), Some(value)) => match config.set(&key, &value) {
            Ok(()) => {
                config.save(data_dir)?;
                tracing::info!(%key, %value, "config updated");
                println!(
                    "{}",
                    format!("{} = {}", key, config.get(&key).unwrap_or_default()).green()
                );
                Ok(ExitCode::SUCCESS)
            }
            Err(message) => fail(&message),
        },
    }
}

/// `None` when no content source was given.
fn read_content(args: &ContentArgs) -> Result<Option<String>> {
    if let Some(content) = &args.content {
        return Ok(Some(content.clone()));
    }
    match args.content_file.as_deref() {
        None => Ok(None),
        Some(path) if path == Path::new("-") => {
            let mut buffer = String::new();
            std::io::stdin().read_to_string(&mut buffer)?;
            Ok(Some(buffer))
        }
        Some(path) => Ok(Some(std::fs::read_to_string(path)?)),
    }
}

fn emit(app: &AppContext, view: &View) -> Result<ExitCode> {
    if app.json {
        println!("{}", to_json(view)?);
    } else if view.is_error() {
        eprintln!("{}", render_view(view));
    } else {
        println!("{}", render_view(view));
    }

    if view.is_error() {
        Ok(ExitCode::FAILURE)
    } else {
        Ok(ExitCode::SUCCESS)
    }
}

fn emit_result(app: &AppContext, result: &CmdResult) -> Result<ExitCode> {
    if app.json {
        println!("{}", to_json(result)?);
    } else {
        print_messages(&result.messages);
    }
    Ok(ExitCode::SUCCESS)
}

fn fail(message: &str) -> Result<ExitCode> {
    eprintln!("{}", message.red());
    Ok(ExitCode::FAILURE)
}

fn to_json<T: serde::Serialize>(value: &T) -> Result<String> {
    Ok(serde_json::to_string_pretty(value)?)
}
