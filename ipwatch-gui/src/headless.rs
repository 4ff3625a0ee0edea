//! Terminal rendition of the status window, for machines without a display.

use anyhow::Context;
use ipwatch::{Presenter, SystemInterfaces, TextSurface, WatchConfig, run_periodic};
use log::{info, warn};
use std::cell::{Cell, RefCell};
use std::io::{self, Write};

/// Writes each refreshed block to a stream, followed by a blank line.
pub struct StreamSurface<W> {
    out: RefCell<W>,
    failed: Cell<bool>,
}

impl<W: Write> StreamSurface<W> {
    pub fn new(out: W) -> Self {
        Self {
            out: RefCell::new(out),
            failed: Cell::new(false),
        }
    }

    /// Whether a write has failed (e.g. a closed pipe).
    pub fn has_failed(&self) -> bool {
        self.failed.get()
    }

    fn write_block(&self, text: &str) -> io::Result<()> {
        let mut out = self.out.borrow_mut();
        writeln!(out, "{text}")?;
        out.flush()
    }
}

impl<W: Write> TextSurface for StreamSurface<W> {
    fn set_text(&self, text: &str) {
        if let Err(e) = self.write_block(text)
            && !self.failed.replace(true)
        {
            warn!("Failed to write address list: {e}");
        }
    }
}

/// Refreshes the address list on stdout until Ctrl-C.
pub fn run_headless(config: &WatchConfig) -> anyhow::Result<()> {
    let runtime = tokio::runtime::Builder::new_current_thread()
        .enable_all()
        .build()
        .context("failed to build tokio runtime")?;

    let mut presenter = Presenter::with_source(
        SystemInterfaces,
        StreamSurface::new(io::stdout()),
        config.options(),
    );

    runtime.block_on(async {
        info!("{} ({})", config.title, config.mode_label);
        run_periodic(&mut presenter, config.refresh_interval(), shutdown_signal()).await
    })?;

    Ok(())
}

/// Resolves on Ctrl-C. If the handler cannot be installed, never resolves.
async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        warn!("Failed to listen for Ctrl-C, running until killed: {e}");
        std::future::pending::<()>().await;
    }
}
