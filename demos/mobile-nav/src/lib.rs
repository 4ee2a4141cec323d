use leptos::prelude::*;
use leptos_nav_toggle::prelude::*;

/// Trigger class used by the server-rendered header in `index.html`.
pub const STATIC_TRIGGER_CLASS: &str = "static-menu-icon";

#[component]
pub fn App() -> impl IntoView {
    let toggle = provide_nav_toggle();
    view! {
        <header class="site-header">
            <a class="site-title" href="/">"Mobile Nav"</a>
            <MenuIcon label="Open menu" />
            <nav class="site-nav">
                <a href="#about">"About"</a>
                <a href="#posts">"Posts"</a>
                <a href="#contact">"Contact"</a>
            </nav>
        </header>
        <p class="status">"Menu is " {move || toggle.state().to_string()}</p>
    }
}
