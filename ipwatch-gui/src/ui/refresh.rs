//! Ties the address presenter to a label and a glib timeout.

use gtk::Label;
use ipwatch::{EnumerateOptions, Presenter, SystemInterfaces, TextSurface};
use log::debug;
use std::cell::RefCell;
use std::rc::Rc;
use std::time::Duration;

/// A [`Label`] used as the presenter's display.
#[derive(Clone)]
pub struct LabelSurface(pub Label);

impl TextSurface for LabelSurface {
    fn set_text(&self, text: &str) {
        self.0.set_text(text);
    }
}

type SharedPresenter = Rc<RefCell<Presenter<SystemInterfaces, Box<dyn TextSurface>>>>;

/// Owns the repeating timeout that refreshes the address label.
///
/// Dropping it removes the timeout from the main context and stops the
/// presenter, so no callback runs after the owner is gone.
pub struct AddressRefresh {
    presenter: SharedPresenter,
    source: Option<glib::SourceId>,
}

impl AddressRefresh {
    /// Renders into `label` immediately and then every `period`.
    pub fn start(label: &Label, options: EnumerateOptions, period: Duration) -> Self {
        Self::with_surface(LabelSurface(label.clone()), options, period)
    }

    /// Renders into any surface immediately and then every `period`.
    pub fn with_surface(
        surface: impl TextSurface + 'static,
        options: EnumerateOptions,
        period: Duration,
    ) -> Self {
        let surface: Box<dyn TextSurface> = Box::new(surface);
        let presenter: SharedPresenter = Rc::new(RefCell::new(Presenter::with_source(
            SystemInterfaces,
            surface,
            options,
        )));
        presenter.borrow_mut().start();

        let ticking = presenter.clone();
        let source = glib::timeout_add_local(period, move || {
            ticking.borrow_mut().tick();
            glib::ControlFlow::Continue
        });
        debug!("Address refresh armed every {period:?}");

        Self {
            presenter,
            source: Some(source),
        }
    }

    pub fn last_text(&self) -> Option<String> {
        self.presenter.borrow().last_text().map(str::to_string)
    }

    /// Whether the timeout is still attached to the default main context.
    pub fn is_armed(&self) -> bool {
        self.attached_source().is_some()
    }

    fn attached_source(&self) -> Option<glib::Source> {
        self.source
            .as_ref()
            .and_then(|id| glib::MainContext::default().find_source_by_id(id))
    }
}

impl Drop for AddressRefresh {
    fn drop(&mut self) {
        if let Some(id) = self.source.take()
            && let Some(source) = glib::MainContext::default().find_source_by_id(&id)
        {
            source.destroy();
        }
        self.presenter.borrow_mut().stop();
        debug!("Address refresh cancelled");
    }
}
