// src/lib.rs
pub mod application;
pub mod cli;
pub mod constants;
pub mod domain;
pub mod infrastructure;
pub mod ports;
pub mod util;

use anyhow::{bail, Context, Result};
use application::{NotesController, Outcome};
use cli::args::{Args, Command};
use domain::{NoteId, NotesPage};
use infrastructure::{BrowserRenderer, Config, HttpNotesApi};
use ports::{HtmlPresenter, TablePresenter};
use tracing::{debug, info};

pub fn load_config(args: &Args) -> Result<Config> {
    let mut config = match &args.config {
        Some(path) => {
            debug!(?path, "Using provided config file");
            Config::load(path)?
        }
        None => match Config::default_path() {
            Ok(path) => Config::load_or_default(path)?,
            Err(e) => {
                debug!(error = %e, "No config location, using defaults");
                Config::default()
            }
        },
    };

    if let Some(base_url) = &args.base_url {
        config.api.base_url = base_url.clone();
    }
    Ok(config)
}

pub async fn run(args: Args) -> Result<()> {
    debug!(?args, "Starting notesview with arguments");

    let config = load_config(&args)?;
    let api = HttpNotesApi::new(&config.api)?;
    let page_size = config.view.page_size;
    info!(base_url = %api.base_url(), "Using notes endpoint");

    match args.command {
        Command::List {
            page,
            limit,
            json,
            html,
        } => list_notes(api, page, limit.unwrap_or(page_size), json, html).await,
        Command::Add { title, content } => add_note(api, title, content, page_size).await,
        Command::Edit {
            id,
            title,
            content,
            page,
            limit,
        } => {
            edit_note(
                api,
                NoteId::new(id),
                title,
                content,
                page,
                limit.unwrap_or(page_size),
            )
            .await
        }
        Command::Delete { id } => delete_note(api, NoteId::new(id), page_size).await,
        Command::Browse { limit } => browse(api, limit.unwrap_or(page_size)).await,
    }
}

fn print_page(controller: &NotesController<HttpNotesApi>) {
    let presenter = TablePresenter::new();
    print!("{}", presenter.render_rows(controller.view()));
    println!("{}", TablePresenter::render_pagination(controller.view()));
}

async fn list_notes(api: HttpNotesApi, page: u32, limit: u32, json: bool, html: bool) -> Result<()> {
    let mut controller = NotesController::starting_at(api, page, limit);
    if controller.mount().await == Outcome::Failed {
        bail!("Failed to fetch notes from {}", controller.api().base_url());
    }
    let view = controller.view();

    if json {
        let page = NotesPage {
            notes: view.notes().to_vec(),
            total_pages: view.total_pages(),
        };
        println!(
            "{}",
            serde_json::to_string_pretty(&page).context("Failed to serialize notes to JSON")?
        );
    } else if html {
        let html = HtmlPresenter::new().render(view);
        let mut renderer = BrowserRenderer::new();
        let path = renderer.write_page(&html)?;
        renderer.open_in_browser(&path).await?;
    } else {
        print_page(&controller);
    }
    Ok(())
}

async fn add_note(api: HttpNotesApi, title: String, content: String, page_size: u32) -> Result<()> {
    let mut controller = NotesController::new(api, page_size);
    controller.set_new_title(title);
    controller.set_new_content(content);

    if controller.add_note().await? == Outcome::Failed {
        bail!("Failed to add note");
    }
    print_page(&controller);
    Ok(())
}

async fn edit_note(
    api: HttpNotesApi,
    id: NoteId,
    title: Option<String>,
    content: Option<String>,
    page: u32,
    limit: u32,
) -> Result<()> {
    if title.is_none() && content.is_none() {
        bail!("Nothing to change: pass --title and/or --content");
    }

    let mut controller = NotesController::starting_at(api, page, limit);
    if controller.mount().await == Outcome::Failed {
        bail!("Failed to fetch notes from {}", controller.api().base_url());
    }
    controller.begin_edit(&id)?;
    if let Some(title) = title {
        controller.set_edit_title(title)?;
    }
    if let Some(content) = content {
        controller.set_edit_content(content)?;
    }

    if controller.save_edit().await? == Outcome::Failed {
        bail!("Failed to update note {id}");
    }
    print_page(&controller);
    Ok(())
}

async fn delete_note(api: HttpNotesApi, id: NoteId, page_size: u32) -> Result<()> {
    let mut controller = NotesController::new(api, page_size);
    if controller.delete_note(&id).await == Outcome::Failed {
        bail!("Failed to delete note {id}");
    }
    println!("Deleted note {id}");
    Ok(())
}

async fn browse(api: HttpNotesApi, limit: u32) -> Result<()> {
    let mut controller = NotesController::new(api, limit);
    let input = tokio::io::BufReader::new(tokio::io::stdin());
    let mut stdout = std::io::stdout();
    cli::repl::run_session(&mut controller, &TablePresenter::new(), input, &mut stdout).await
}
