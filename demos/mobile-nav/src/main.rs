use leptos::prelude::*;
use leptos_nav_toggle::prelude::*;
use mobile_nav::{App, STATIC_TRIGGER_CLASS};

fn bind_static_header() {
    let config = match NavToggleConfig::default().with_trigger_class(STATIC_TRIGGER_CLASS) {
        Ok(config) => config,
        Err(err) => {
            log::error!("{err}");
            return;
        }
    };
    match bind_document(&config) {
        Ok(bindings) => bindings.forget(),
        Err(err) => log::error!("{err}"),
    }
}

fn main() {
    _ = console_log::init_with_level(log::Level::Debug);
    console_error_panic_hook::set_once();

    bind_static_header();
    leptos::mount::mount_to_body(|| view! { <App /> });
}
