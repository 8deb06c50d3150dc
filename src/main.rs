mod config;
mod drawer;
mod error;
mod i18n;
mod nav;
mod ui;

use std::path::PathBuf;

use anyhow::Context;
use clap::Parser;
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

use crate::config::AppConfig;

const QUIET_TARGETS: &[&str] = &[
    "wgpu_core=error",
    "naga=error",
    "cosmic_text=error",
    "sctk=error",
    "wgpu_hal=error",
    "iced_wgpu=error",
];

#[derive(Parser, Debug)]
#[command(name = "cosmic_drawer", version, about = "Responsive navigation drawer")]
struct Args {
    /// Config file (defaults to the user data directory)
    #[arg(long)]
    config: Option<PathBuf>,

    /// Start in this language instead of the desktop locale
    #[arg(long)]
    lang: Option<String>,

    /// Initial window width in logical pixels
    #[arg(long, default_value_t = 1024.0)]
    width: f32,

    /// Print the navigation list as JSON and exit
    #[arg(long)]
    print_nav: bool,

    /// Write the effective configuration to the config path and exit
    #[arg(long)]
    init_config: bool,

    #[arg(short, long)]
    verbose: bool,
}

pub fn tracing(verbose: bool) {
    let default = if verbose { "debug" } else { "info" };
    let mut filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default));
    for target in QUIET_TARGETS {
        if let Ok(directive) = target.parse() {
            filter = filter.add_directive(directive);
        }
    }

    tracing_subscriber::fmt().with_env_filter(filter).init();
}

fn print_nav(config: &AppConfig, language: &str) -> anyhow::Result<()> {
    let localizer = config.localizer();
    let entries = nav::build_entries(&config.pages, language, &config.links, &localizer);
    let footer = nav::build_footer(language, &config.links);

    let out = serde_json::json!({
        "language": language,
        "entries": entries,
        "footer": footer,
    });
    println!("{}", serde_json::to_string_pretty(&out)?);
    Ok(())
}

pub fn main() -> anyhow::Result<()> {
    let args = Args::parse();
    tracing(args.verbose);

    info!("🚀 Starting cosmic_drawer...");

    let config_path = args.config.clone().unwrap_or_else(AppConfig::default_path);
    let config = AppConfig::load_from(&config_path)
        .with_context(|| format!("loading {}", config_path.display()))?;

    if args.init_config {
        config.save_to(&config_path)?;
        info!("wrote {}", config_path.display());
        return Ok(());
    }

    let desktop = i18n::requested_language(&config.site.languages);
    let language = config.pick_language(args.lang.as_deref(), desktop.as_deref())?;
    if let Err(e) = i18n::set_language(&language) {
        warn!("no bundled translation for {}: {}", language, e);
    }
    info!("language {} (translations: {})", language, i18n::current_language());

    if args.print_nav {
        return print_nav(&config, &language);
    }

    cosmic::app::run::<ui::DrawerApp>(ui::settings(args.width), ui::flags(config, language, args.width))?;
    Ok(())
}
