pub mod file_lock;
pub mod headless;
pub mod style;
pub mod ui;

use clap::{ArgAction, Parser};
use gtk::Application;
use gtk::prelude::*;
use ipwatch::WatchConfig;
use log::warn;

use crate::file_lock::acquire_app_lock;
use crate::style::load_css;
use crate::ui::build_ui;

#[derive(Parser, Debug)]
#[command(name = "ipwatch")]
#[command(about = "Status window listing local network interface addresses")]
#[command(disable_version_flag = true)]
#[command(version)]
struct Args {
    #[arg(short = 'V', long = "version", action = ArgAction::SetTrue)]
    version: bool,

    /// Also list IPv6 addresses
    #[arg(long)]
    ipv6: bool,

    /// Hide loopback interfaces
    #[arg(long)]
    no_loopback: bool,

    /// Refresh period in milliseconds
    #[arg(long, value_name = "MS", value_parser = clap::value_parser!(u64).range(1..=u64::from(u32::MAX)))]
    interval_ms: Option<u64>,

    /// Print to the terminal instead of opening a window
    #[arg(long)]
    headless: bool,
}

impl Args {
    fn apply(&self, config: &mut WatchConfig) {
        if self.ipv6 {
            config.include_ipv6 = true;
        }
        if self.no_loopback {
            config.include_loopback = false;
        }
        if let Some(ms) = self.interval_ms {
            config.refresh_interval_ms = ms;
        }
    }
}

fn load_config() -> WatchConfig {
    WatchConfig::load().unwrap_or_else(|e| {
        warn!("Ignoring config file: {e}");
        WatchConfig::default()
    })
}

pub fn run() -> anyhow::Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    let args = Args::parse();

    if args.version {
        println!(
            "ipwatch {} ({})",
            env!("CARGO_PKG_VERSION"),
            env!("GIT_HASH")
        );
        return Ok(());
    }

    let mut config = load_config();
    args.apply(&mut config);
    config.validate()?;

    if args.headless {
        return headless::run_headless(&config);
    }

    let app = Application::builder()
        .application_id("org.ipwatch.status")
        .build();

    let _lock = match acquire_app_lock() {
        Ok(lock) => lock,
        Err(e) => {
            eprintln!("Failed to start: {e}");
            std::process::exit(1);
        }
    };

    app.connect_activate(move |app| {
        load_css();
        build_ui(app, &config);
    });

    // Our flags are already parsed; keep GTK from seeing them.
    app.run_with_args(&["ipwatch"]);
    Ok(())
}
