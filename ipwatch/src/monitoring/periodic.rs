//! Async driver that ticks a [`Presenter`] on a fixed interval.

use log::debug;
use std::future::Future;
use std::time::Duration;
use tokio::time::{MissedTickBehavior, interval};

use crate::Result;
use crate::api::models::WatchError;
use crate::core::enumerate::InterfaceSource;
use crate::monitoring::presenter::{Presenter, TextSurface};

/// Starts `presenter`, then ticks it every `period` until `shutdown` resolves.
///
/// The first rendering happens before any period elapses. Each tick runs to
/// completion before the next one is awaited; late ticks are delayed rather
/// than bursted. The presenter is back in `Idle` when this returns.
///
/// # Errors
///
/// Returns [`WatchError::InvalidInterval`] for a zero `period`.
///
/// # Example
///
/// ```ignore
/// let mut presenter = Presenter::with_source(SystemInterfaces, surface, options);
/// run_periodic(&mut presenter, Duration::from_secs(1), tokio::signal::ctrl_c()).await?;
/// ```
pub async fn run_periodic<S, D, F>(
    presenter: &mut Presenter<S, D>,
    period: Duration,
    shutdown: F,
) -> Result<()>
where
    S: InterfaceSource,
    D: TextSurface,
    F: Future,
{
    if period.is_zero() {
        return Err(WatchError::InvalidInterval(0));
    }

    let mut ticker = interval(period);
    ticker.set_missed_tick_behavior(MissedTickBehavior::Delay);
    // The first tick completes immediately.
    ticker.tick().await;
    presenter.start();

    tokio::pin!(shutdown);
    loop {
        tokio::select! {
            biased;
            _ = &mut shutdown => {
                debug!("Periodic refresh shutting down");
                break;
            }
            _ = ticker.tick() => {
                presenter.tick();
            }
        }
    }

    presenter.stop();
    Ok(())
}
