pub mod header;
pub mod refresh;

use gtk::prelude::*;
use gtk::{Align, Application, ApplicationWindow, Box as GtkBox, Label, Orientation};
use ipwatch::WatchConfig;
use std::cell::RefCell;

use crate::ui::refresh::AddressRefresh;

pub fn build_ui(app: &Application, config: &WatchConfig) {
    let win = ApplicationWindow::new(app);
    win.set_title(Some(config.title.as_str()));
    win.set_default_size(640, 400);

    let address_label = Label::new(None);
    address_label.set_wrap(true);
    address_label.add_css_class("address-label");

    let top_bar = header::build_top_bar(&config.mode_label, &address_label, &win);

    let banner = Label::new(Some(config.banner.as_str()));
    banner.add_css_class("banner");
    banner.set_halign(Align::Center);
    banner.set_valign(Align::Center);
    banner.set_vexpand(true);

    let vbox = GtkBox::new(Orientation::Vertical, 0);
    vbox.append(&top_bar);
    vbox.append(&banner);
    win.set_child(Some(&vbox));

    // Renders once now, then on every period until the window goes away.
    let refresh = RefCell::new(Some(AddressRefresh::start(
        &address_label,
        config.options(),
        config.refresh_interval(),
    )));
    win.connect_destroy(move |_| {
        refresh.borrow_mut().take();
    });

    win.present();
}
