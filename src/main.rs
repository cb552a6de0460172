use std::path::PathBuf;
use std::time::Duration;

use anyhow::Context;
use clap::Parser;

use resqlink::config::Config;
use resqlink::domain::Role;
use resqlink::logging::{init_tracing, LogTarget};
use resqlink::store::{Seed, Store};
use resqlink::ui::app::App;

#[derive(Debug, Parser)]
#[command(name = "resqlink", version, about = "Disaster relief coordination dashboard")]
struct Cli {
    /// Config file (defaults to the user config directory). Must exist when given.
    #[arg(long, value_name = "PATH")]
    config: Option<PathBuf>,

    /// JSON seed file with the initial crises, resources and so on.
    #[arg(long, value_name = "PATH")]
    seed: Option<PathBuf>,

    /// Start as this role: ngo, volunteer, donor or government.
    #[arg(long, value_name = "ROLE")]
    role: Option<Role>,

    /// Print the seeded state as JSON and exit.
    #[arg(long)]
    dump: bool,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let config = match &cli.config {
        Some(path) => Config::read_from(path),
        None => Config::load(),
    }
    .context("loading configuration")?;

    if cli.dump {
        init_tracing(&config.logging, LogTarget::Stderr).context("initializing logging")?;
    } else {
        let log_file = config.log_file();
        init_tracing(&config.logging, LogTarget::File(&log_file))
            .with_context(|| format!("opening log file {}", log_file.display()))?;
    }

    let store = build_store(&cli, &config)?;

    if cli.dump {
        let json = serde_json::to_string_pretty(store.state()).context("serializing state")?;
        println!("{json}");
        return Ok(());
    }

    let tick_rate = Duration::from_millis(config.defaults.tick_rate_ms);
    let mut app = App::new(store, &config.defaults);
    resqlink::ui::run(&mut app, tick_rate).context("running terminal UI")?;
    Ok(())
}

/// A `--role` flag beats the seed's user, which beats the configured default.
fn build_store(cli: &Cli, config: &Config) -> anyhow::Result<Store> {
    let seed_path = cli.seed.as_ref().or(config.defaults.seed_path.as_ref());
    let seed = match seed_path {
        Some(path) => Seed::load_from(path)?,
        None => Seed::default(),
    };
    if let Some(path) = seed_path {
        tracing::info!(
            path = %path.display(),
            crises = seed.crises.len(),
            resources = seed.resources.len(),
            "Seed loaded"
        );
    }

    let seeded_user = seed.user.is_some();
    let mut store = Store::from_seed(seed);
    match cli.role {
        Some(role) => store.switch_role(role),
        None if !seeded_user => store.switch_role(config.defaults.role),
        None => {}
    }
    Ok(store)
}
