//! Activation listeners for triggers that are already present in the page,
//! e.g. markup rendered by a static site generator.

use std::cell::Cell;
use std::rc::Rc;

use wasm_bindgen::prelude::*;
use web_sys::{Document, Element, Event};

use crate::config::NavToggleConfig;
use crate::error::BindError;
use crate::state::ToggleState;

type Listener = Closure<dyn FnMut(Event)>;

/// One trigger element with its model and click listener.
struct BoundTrigger {
    element: Element,
    state: Rc<Cell<ToggleState>>,
    listener: Listener,
}

/// Listeners attached by [`bind_triggers`].
///
/// Dropping this detaches every listener. Call [`Bindings::forget`] to keep
/// them for the rest of the page lifetime.
pub struct Bindings {
    triggers: Vec<BoundTrigger>,
}

impl Bindings {
    pub fn len(&self) -> usize {
        self.triggers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.triggers.is_empty()
    }

    /// Current model state of each bound trigger, in document order.
    pub fn states(&self) -> Vec<ToggleState> {
        self.triggers.iter().map(|t| t.state.get()).collect()
    }

    /// Leaks the listeners so they stay attached after this value is gone.
    pub fn forget(mut self) {
        for trigger in self.triggers.drain(..) {
            trigger.listener.forget();
        }
    }
}

impl Drop for Bindings {
    fn drop(&mut self) {
        for trigger in &self.triggers {
            if let Err(err) = trigger.element.remove_event_listener_with_callback(
                "click",
                trigger.listener.as_ref().unchecked_ref(),
            ) {
                log::warn!("failed to detach nav listener: {:?}", err);
            }
        }
    }
}

/// Attaches a click listener to every element carrying the configured
/// trigger class.
///
/// Each trigger's model is seeded from whether it already carries the
/// active marker. On click the model flips and the marker is written from
/// it with a single class list mutation.
pub fn bind_triggers(document: &Document, config: &NavToggleConfig) -> Result<Bindings, BindError> {
    // Looked up by class name rather than selector: tokens such as `md:menu`
    // or `2col` are valid classes but not valid CSS selectors.
    let collection = document.get_elements_by_class_name(config.trigger_class());
    let elements: Vec<Element> = (0..collection.length())
        .filter_map(|index| collection.item(index))
        .collect();

    let triggers = elements
        .into_iter()
        .map(|element| bind_one(element, config.active_class()))
        .collect::<Result<Vec<_>, _>>()?;

    if triggers.is_empty() {
        log::warn!("no nav trigger has class {:?}", config.trigger_class());
    } else {
        log::info!(
            "bound {} nav trigger(s) with class {:?}",
            triggers.len(),
            config.trigger_class()
        );
    }
    Ok(Bindings { triggers })
}

/// [`bind_triggers`] against the global window's document.
pub fn bind_document(config: &NavToggleConfig) -> Result<Bindings, BindError> {
    let window = web_sys::window().ok_or(BindError::NoWindow)?;
    let document = window.document().ok_or(BindError::NoDocument)?;
    bind_triggers(&document, config)
}

fn bind_one(element: Element, active_class: &str) -> Result<BoundTrigger, BindError> {
    let state = Rc::new(Cell::new(ToggleState::from(
        element.class_list().contains(active_class),
    )));

    let listener = {
        let state = Rc::clone(&state);
        let element = element.clone();
        let active_class = active_class.to_string();
        Listener::new(move |_event: Event| {
            let mut next = state.get();
            next.activate();
            state.set(next);
            if let Err(err) = element
                .class_list()
                .toggle_with_force(&active_class, next.is_active())
            {
                log::error!("failed to write nav marker: {:?}", err);
            }
            log::debug!("nav trigger {next}");
        })
    };

    element.add_event_listener_with_callback("click", listener.as_ref().unchecked_ref())?;
    Ok(BoundTrigger {
        element,
        state,
        listener,
    })
}
