use glib::clone;
use gtk::prelude::*;
use gtk::{Align, ApplicationWindow, Box as GtkBox, Button, Label, Orientation};

/// `[mode] <stretch> [addresses] <stretch> [Close]`
pub fn build_top_bar(mode_text: &str, address_label: &Label, window: &ApplicationWindow) -> GtkBox {
    let bar = GtkBox::new(Orientation::Horizontal, 6);
    bar.add_css_class("top-bar");
    bar.set_valign(Align::Start);

    let mode_label = Label::new(Some(mode_text));
    mode_label.add_css_class("mode-label");
    mode_label.set_halign(Align::Start);
    mode_label.set_hexpand(true);

    address_label.set_halign(Align::Center);
    address_label.set_hexpand(true);

    let close = Button::with_label("Close");
    close.add_css_class("close-button");
    close.set_focus_on_click(false);
    close.set_halign(Align::End);
    close.set_hexpand(true);
    close.connect_clicked(clone![
        #[weak]
        window,
        move |_| {
            window.close();
        }
    ]);

    bar.append(&mode_label);
    bar.append(address_label);
    bar.append(&close);
    bar
}
