//! Presenter state machine.
//!
//! A [`Presenter`] owns an [`AddressLister`] and a [`TextSurface`]. Once
//! started it replaces the surface's text with a fresh rendering on every
//! tick. It does not own a timer; the caller decides when ticks happen
//! (see [`run_periodic`](crate::run_periodic) or a GUI main-loop timeout).

use log::debug;

use crate::api::lister::AddressLister;
use crate::api::models::{EnumerateOptions, PresenterState};
use crate::core::enumerate::InterfaceSource;

/// A display that accepts a full-text replacement.
pub trait TextSurface {
    fn set_text(&self, text: &str);
}

impl<T: TextSurface + ?Sized> TextSurface for &T {
    fn set_text(&self, text: &str) {
        (**self).set_text(text)
    }
}

impl<T: TextSurface + ?Sized> TextSurface for Box<T> {
    fn set_text(&self, text: &str) {
        (**self).set_text(text)
    }
}

/// Periodically republishes the address list onto a [`TextSurface`].
///
/// States: `Idle` after construction and after [`stop`](Self::stop),
/// `Displaying` after [`start`](Self::start). Ticks in `Idle` are ignored,
/// so a late timer callback never touches the surface.
///
/// # Example
///
/// ```rust
/// use std::cell::RefCell;
/// use ipwatch::{EnumerateOptions, InterfaceEntry, InterfaceSource, Presenter, TextSurface};
///
/// struct Fixed;
/// impl InterfaceSource for Fixed {
///     fn entries(&self) -> Vec<InterfaceEntry> {
///         vec![InterfaceEntry::new("eth0", Some("192.168.1.5".parse::<std::net::IpAddr>().unwrap().into()))]
///     }
/// }
///
/// #[derive(Default)]
/// struct Label(RefCell<String>);
/// impl TextSurface for Label {
///     fn set_text(&self, text: &str) {
///         *self.0.borrow_mut() = text.to_string();
///     }
/// }
///
/// let mut presenter = Presenter::with_source(Fixed, Label::default(), EnumerateOptions::default());
/// presenter.start();
/// assert_eq!(*presenter.surface().0.borrow(), "eth0 : 192.168.1.5\n");
/// ```
#[derive(Debug)]
pub struct Presenter<S, D> {
    lister: AddressLister<S>,
    surface: D,
    state: PresenterState,
    last_text: Option<String>,
}

impl<S: InterfaceSource, D: TextSurface> Presenter<S, D> {
    /// Creates an idle presenter. Nothing is rendered until [`start`](Self::start).
    pub fn with_source(source: S, surface: D, options: EnumerateOptions) -> Self {
        Self::from_lister(AddressLister::with_source(source, options), surface)
    }

    pub fn from_lister(lister: AddressLister<S>, surface: D) -> Self {
        Self {
            lister,
            surface,
            state: PresenterState::Idle,
            last_text: None,
        }
    }

    /// Moves to `Displaying` and renders immediately.
    ///
    /// Calling this while already displaying is a plain refresh.
    pub fn start(&mut self) -> &str {
        if self.state == PresenterState::Idle {
            debug!("Presenter started displaying");
        }
        self.state = PresenterState::Displaying;
        self.refresh()
    }

    /// Re-enumerates and replaces the surface text.
    ///
    /// Returns the rendered text, or `None` when idle.
    pub fn tick(&mut self) -> Option<&str> {
        match self.state {
            PresenterState::Idle => None,
            PresenterState::Displaying => Some(self.refresh()),
        }
    }

    /// Returns to `Idle`; later ticks leave the surface untouched.
    pub fn stop(&mut self) {
        if self.state == PresenterState::Displaying {
            debug!("Presenter stopped");
        }
        self.state = PresenterState::Idle;
    }

    fn refresh(&mut self) -> &str {
        let text = self.lister.text();
        self.surface.set_text(&text);
        debug!("Rendered {} address line(s)", text.lines().count());
        self.last_text.insert(text).as_str()
    }

    pub fn state(&self) -> PresenterState {
        self.state
    }

    /// The text most recently pushed to the surface, if any.
    pub fn last_text(&self) -> Option<&str> {
        self.last_text.as_deref()
    }

    pub fn surface(&self) -> &D {
        &self.surface
    }

    pub fn lister(&self) -> &AddressLister<S> {
        &self.lister
    }
}
