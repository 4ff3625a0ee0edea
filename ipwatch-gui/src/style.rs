use gtk::gdk::Display;
use gtk::gio::File;
use gtk::{CssProvider, STYLE_PROVIDER_PRIORITY_APPLICATION, STYLE_PROVIDER_PRIORITY_USER};
use log::{debug, warn};

/// Applies `<config_dir>/ipwatch/style.css` on top of the bundled style, if present.
fn load_user_css_if_exists(display: &Display) {
    let Some(path) = dirs::config_dir().map(|dir| dir.join("ipwatch/style.css")) else {
        return;
    };

    if path.exists() {
        debug!("Loading user stylesheet {}", path.display());
        let provider = CssProvider::new();
        let file = File::for_path(&path);

        provider.load_from_file(&file);

        gtk::style_context_add_provider_for_display(
            display,
            &provider,
            STYLE_PROVIDER_PRIORITY_USER,
        );
    }
}

pub fn load_css() {
    let provider = CssProvider::new();

    let css = include_str!("style.css");
    provider.load_from_data(css);

    let Some(display) = Display::default() else {
        warn!("No display found, skipping stylesheet");
        return;
    };

    gtk::style_context_add_provider_for_display(
        &display,
        &provider,
        STYLE_PROVIDER_PRIORITY_APPLICATION,
    );

    load_user_css_if_exists(&display);
}
