use leptos::prelude::*;

use crate::config::NavToggleConfig;
use crate::state::ToggleState;

/// Reactive view-model for a single navigation trigger.
///
/// The signal is the source of truth; the trigger's class attribute is
/// derived from it and is the only attribute an activation changes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NavToggle {
    state: RwSignal<ToggleState>,
}

impl Default for NavToggle {
    fn default() -> Self {
        Self::new()
    }
}

impl NavToggle {
    /// Creates an inactive toggle.
    pub fn new() -> Self {
        Self::with_state(ToggleState::Inactive)
    }

    pub fn with_state(state: ToggleState) -> Self {
        Self {
            state: RwSignal::new(state),
        }
    }

    /// Handles one activation event: a single write that flips the state.
    pub fn on_activate(&self) {
        self.state.update(|state| {
            state.activate();
            log::debug!("nav toggle {state}");
        });
    }

    pub fn state(&self) -> ToggleState {
        self.state.get()
    }

    pub fn is_active(&self) -> bool {
        self.state().is_active()
    }

    /// Read-only handle for views that only observe the toggle.
    pub fn read_only(&self) -> Signal<ToggleState> {
        self.state.into()
    }

    /// Class attribute for the trigger: the trigger class, followed by the
    /// active marker while the toggle is active.
    pub fn class_list(&self, config: &NavToggleConfig) -> String {
        if self.is_active() {
            format!("{} {}", config.trigger_class(), config.active_class())
        } else {
            config.trigger_class().to_string()
        }
    }
}

/// Creates a fresh toggle and provides it to descendant views.
pub fn provide_nav_toggle() -> NavToggle {
    let toggle = NavToggle::new();
    provide_context(toggle);
    toggle
}

/// Returns the toggle provided by an ancestor, if any.
pub fn use_nav_toggle() -> Option<NavToggle> {
    use_context::<NavToggle>()
}

/// Mobile navigation icon.
///
/// Uses the `toggle` prop when given, then a toggle from context, and
/// otherwise owns a fresh inactive one. Without children it renders three
/// bars for the stylesheet to draw.
#[component]
pub fn MenuIcon(
    #[prop(optional)] toggle: Option<NavToggle>,
    #[prop(optional)] config: Option<NavToggleConfig>,
    #[prop(optional, into)] label: Option<String>,
    #[prop(optional)] children: Option<Children>,
) -> impl IntoView {
    let toggle = toggle.or_else(use_nav_toggle).unwrap_or_default();
    let config = config.unwrap_or_default();
    let label = label.unwrap_or_else(|| "Toggle navigation".to_string());

    let body = match children {
        Some(children) => children(),
        None => view! {
            <span aria-hidden="true"></span>
            <span aria-hidden="true"></span>
            <span aria-hidden="true"></span>
        }
        .into_any(),
    };

    view! {
        <button
            type="button"
            class=move || toggle.class_list(&config)
            aria-label=label
            on:click=move |_| toggle.on_activate()
        >
            {body}
        </button>
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use leptos::reactive::owner::Owner;

    fn with_owner(f: impl FnOnce()) {
        let owner = Owner::new();
        owner.set();
        f();
    }

    #[test]
    fn test_starts_inactive() {
        with_owner(|| {
            let toggle = NavToggle::new();
            assert_eq!(toggle.state(), ToggleState::Inactive);
            assert!(!toggle.is_active());
        });
    }

    #[test]
    fn test_activate_adds_marker() {
        with_owner(|| {
            let config = NavToggleConfig::default();
            let toggle = NavToggle::new();
            assert_eq!(toggle.class_list(&config), "menu-icon");

            toggle.on_activate();
            assert!(toggle.is_active());
            assert_eq!(toggle.class_list(&config), "menu-icon is-active");
        });
    }

    #[test]
    fn test_activate_removes_marker() {
        with_owner(|| {
            let config = NavToggleConfig::default();
            let toggle = NavToggle::with_state(ToggleState::Active);
            assert_eq!(toggle.class_list(&config), "menu-icon is-active");

            toggle.on_activate();
            assert!(!toggle.is_active());
            assert_eq!(toggle.class_list(&config), "menu-icon");
        });
    }

    #[test]
    fn test_activation_parity() {
        with_owner(|| {
            let toggle = NavToggle::new();
            for _ in 0..3 {
                toggle.on_activate();
            }
            assert_eq!(toggle.state(), ToggleState::Active);

            toggle.on_activate();
            assert_eq!(toggle.state(), ToggleState::Inactive);
        });
    }

    #[test]
    fn test_copies_share_state() {
        with_owner(|| {
            let toggle = NavToggle::new();
            let observer = toggle.read_only();
            let copy = toggle;

            copy.on_activate();
            assert!(toggle.is_active());
            assert_eq!(observer.get(), ToggleState::Active);
        });
    }

    #[test]
    fn test_custom_classes() {
        with_owner(|| {
            let config = NavToggleConfig::new("navbar-burger", "open").unwrap();
            let toggle = NavToggle::with_state(ToggleState::Active);
            assert_eq!(toggle.class_list(&config), "navbar-burger open");
        });
    }

    #[test]
    fn test_context_round_trip() {
        with_owner(|| {
            assert!(use_nav_toggle().is_none());
            let provided = provide_nav_toggle();
            provided.on_activate();

            let found = use_nav_toggle().unwrap();
            assert_eq!(found, provided);
            assert!(found.is_active());
        });
    }
}
