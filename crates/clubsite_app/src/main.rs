mod cli;
mod config;
mod logging;
mod render;

use std::sync::Arc;

use anyhow::bail;
use clap::Parser;

use clubsite_core::{loop_track, panel_page_view, PanelRoute};
use clubsite_engine::{
    ensure_dir, CacheGate, FileKeyValueStore, FirestoreStore, KeyValueStore, SiteLoader,
    SystemClock,
};
use site_logging::{site_info, site_warn};

use cli::{Args, Command, OutputFormat};
use config::AppConfig;

fn main() -> anyhow::Result<()> {
    let args = Args::parse();

    let (mut config, config_problem) = match AppConfig::load(&args.config) {
        Ok(config) => (config, None),
        Err(err) => (AppConfig::default(), Some(err)),
    };
    logging::initialize(
        config.log_destination,
        site_logging::level_for_verbosity(args.verbose),
    );
    if let Some(err) = config_problem {
        site_warn!("Ignoring config file, using defaults: {err:#}");
    }

    if let Some(project_id) = &args.project_id {
        config.project_id = project_id.clone();
    }
    if let Some(cache_dir) = &args.cache_dir {
        config.cache_dir = cache_dir.clone();
    }
    if config.project_id.trim().is_empty() {
        bail!(
            "no store project id configured; set project_id in {} or pass --project-id",
            args.config.display()
        );
    }

    let loader = build_loader(&config)?;
    site_info!("Loading {:?} from project {}", args.command, config.project_id);

    let runtime = tokio::runtime::Runtime::new()?;
    let output = runtime.block_on(run(&loader, &args.command, args.format))?;
    println!("{output}");
    Ok(())
}

fn build_loader(config: &AppConfig) -> anyhow::Result<SiteLoader> {
    let store = FirestoreStore::new(config.store_settings())?;

    if let Err(err) = ensure_dir(&config.cache_dir) {
        site_warn!("Presentation cache disabled for this run: {err}");
    }
    let kv: Arc<dyn KeyValueStore> = Arc::new(FileKeyValueStore::new(config.cache_dir.clone()));
    let cache = CacheGate::new(kv, Arc::new(SystemClock));

    Ok(SiteLoader::new(
        Arc::new(store),
        cache,
        config.loader_settings(),
    ))
}

async fn run(loader: &SiteLoader, command: &Command, format: OutputFormat) -> anyhow::Result<String> {
    match command {
        Command::Events { featured: true } => render::items(&loader.featured_events().await, format),
        Command::Events { featured: false } => render::items(&loader.events().await, format),
        Command::Panel { slug } => {
            let route = PanelRoute::from_slug(slug);
            let members = loader.panel(&route).await;
            render::panel(&panel_page_view(&route, members), format)
        }
        Command::HallOfFame => {
            let members = loader.hall_of_fame().await;
            render::panel(&panel_page_view(&PanelRoute::HallOfFame, members), format)
        }
        Command::Contacts => render::contact(&loader.contact_page().await, format),
        Command::Sponsors => render::items(&loader.sponsors().await, format),
        Command::Collaborations => render::items(&loader.collaborations().await, format),
        Command::Partners { track } => {
            let logos = loader.partner_logos().await;
            if *track {
                render::items(&loop_track(&logos), format)
            } else {
                render::items(&logos, format)
            }
        }
    }
}
