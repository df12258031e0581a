use std::cell::RefCell;
use std::rc::Rc;

use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::js_sys::Array;
use web_sys::{Element, IntersectionObserver, IntersectionObserverEntry, IntersectionObserverInit};
use yew::prelude::*;

use crate::config;

/// An entry counts as visible once at least `threshold` of its area is on
/// screen.
pub fn crosses_threshold(is_intersecting: bool, ratio: f64, threshold: f64) -> bool {
    is_intersecting && ratio >= threshold
}

#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct RevealState {
    has_been_revealed: bool,
    is_currently_visible: bool,
    trigger_once: bool,
}

impl RevealState {
    pub fn new(trigger_once: bool) -> Self {
        Self {
            trigger_once,
            ..Self::default()
        }
    }

    pub fn observe(&mut self, visible: bool) -> bool {
        self.is_currently_visible = visible;
        if visible {
            self.has_been_revealed = true;
        }
        self.in_view()
    }

    pub fn in_view(&self) -> bool {
        if self.trigger_once {
            self.has_been_revealed
        } else {
            self.is_currently_visible
        }
    }

    /// One-shot states never change again once revealed.
    pub fn is_settled(&self) -> bool {
        self.trigger_once && self.has_been_revealed
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct InViewOptions {
    pub threshold: f64,
    pub trigger_once: bool,
}

type ObserverCallback = Closure<dyn FnMut(Array, IntersectionObserver)>;

fn observe_element(
    element: &Element,
    options: InViewOptions,
    in_view: UseStateHandle<bool>,
) -> Result<(IntersectionObserver, ObserverCallback), JsValue> {
    let state = Rc::new(RefCell::new(RevealState::new(options.trigger_once)));
    let callback = Closure::wrap(Box::new(move |entries: Array, observer: IntersectionObserver| {
        for entry in entries.iter() {
            let entry: IntersectionObserverEntry = entry.unchecked_into();
            let visible = crosses_threshold(
                entry.is_intersecting(),
                entry.intersection_ratio(),
                options.threshold,
            );
            let mut state = state.borrow_mut();
            in_view.set(state.observe(visible));
            if state.is_settled() {
                observer.disconnect();
            }
        }
    }) as Box<dyn FnMut(Array, IntersectionObserver)>);

    let init = IntersectionObserverInit::new();
    init.set_threshold(&JsValue::from_f64(options.threshold));
    let observer = IntersectionObserver::new_with_options(callback.as_ref().unchecked_ref(), &init)?;
    observer.observe(element);
    Ok((observer, callback))
}

/// Tracks whether the node is on screen past `options.threshold`.
#[hook]
pub fn use_in_view(node: NodeRef, options: InViewOptions) -> bool {
    let in_view = use_state_eq(|| false);

    {
        let in_view = in_view.clone();
        use_effect_with_deps(
            move |(node, options)| {
                let observer = node.cast::<Element>().and_then(|element| {
                    match observe_element(&element, *options, in_view) {
                        Ok(observer) => Some(observer),
                        Err(e) => {
                            log::warn!("IntersectionObserver unavailable: {:?}", e);
                            None
                        }
                    }
                });
                move || {
                    if let Some((observer, _callback)) = observer {
                        observer.disconnect();
                    }
                }
            },
            (node, options),
        );
    }

    *in_view
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct RevealOptions {
    pub threshold: f64,
    pub delay_ms: u32,
    pub trigger_once: bool,
}

impl Default for RevealOptions {
    fn default() -> Self {
        Self {
            threshold: config::REVEAL_THRESHOLD,
            delay_ms: 0,
            trigger_once: true,
        }
    }
}

impl RevealOptions {
    pub fn delayed(delay_ms: u32) -> Self {
        Self {
            delay_ms,
            ..Self::default()
        }
    }
}

pub fn reveal_class(revealed: bool) -> &'static str {
    if revealed {
        "animate-scroll-in"
    } else {
        "opacity-0 translate-y-8"
    }
}

pub fn reveal_style(delay_ms: u32) -> String {
    format!("animation-delay: {}ms;", delay_ms)
}

pub struct ScrollReveal {
    pub node: NodeRef,
    pub revealed: bool,
    delay_ms: u32,
}

impl ScrollReveal {
    pub fn class(&self) -> &'static str {
        reveal_class(self.revealed)
    }

    pub fn style(&self) -> String {
        reveal_style(self.delay_ms)
    }
}

#[hook]
pub fn use_scroll_reveal(options: RevealOptions) -> ScrollReveal {
    let node = use_node_ref();
    let revealed = use_in_view(
        node.clone(),
        InViewOptions {
            threshold: options.threshold,
            trigger_once: options.trigger_once,
        },
    );
    ScrollReveal {
        node,
        revealed,
        delay_ms: options.delay_ms,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn threshold_needs_intersection_and_ratio() {
        assert!(crosses_threshold(true, 0.6, 0.6));
        assert!(crosses_threshold(true, 1.0, 0.6));
        assert!(!crosses_threshold(true, 0.59, 0.6));
        assert!(!crosses_threshold(false, 0.9, 0.6));
        assert!(crosses_threshold(true, 0.0, 0.0));
    }

    #[test]
    fn one_shot_reveal_stays_revealed() {
        let mut state = RevealState::new(true);
        assert!(!state.observe(false));
        assert!(state.observe(true));
        assert!(state.is_settled());
        assert!(state.observe(false));
        assert!(state.in_view());
    }

    #[test]
    fn continuous_reveal_follows_visibility() {
        let mut state = RevealState::new(false);
        assert!(state.observe(true));
        assert!(!state.observe(false));
        assert!(!state.is_settled());
    }

    #[test]
    fn reveal_presentation() {
        assert_eq!(reveal_class(false), "opacity-0 translate-y-8");
        assert_eq!(reveal_class(true), "animate-scroll-in");
        assert_eq!(reveal_style(300), "animation-delay: 300ms;");
    }

    #[test]
    fn default_reveal_is_one_shot_at_ten_percent() {
        let options = RevealOptions::delayed(200);
        assert_eq!(options.threshold, 0.1);
        assert!(options.trigger_once);
        assert_eq!(options.delay_ms, 200);
    }
}
