//! One-shot interaction polish wired at page load: hover/press feedback on
//! the contact cards, plus the touch-gesture guards mobile browsers need.

use std::cell::Cell;
use std::rc::Rc;

use wasm_bindgen::prelude::Closure;
use wasm_bindgen::JsCast;
use web_sys::{AddEventListenerOptions, Element, HtmlElement, TouchEvent};

/// Role a contact card declares through its `data-role` attribute.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CardRole {
    /// The main call-to-action card; it sits raised and moves further.
    Primary,
    Secondary,
}

impl CardRole {
    pub fn from_attr(value: Option<&str>) -> Self {
        match value {
            Some("primary") => CardRole::Primary,
            _ => CardRole::Secondary,
        }
    }

    pub fn from_element(element: &Element) -> Self {
        Self::from_attr(element.get_attribute("data-role").as_deref())
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            CardRole::Primary => "primary",
            CardRole::Secondary => "secondary",
        }
    }

    fn hover_transform(&self) -> &'static str {
        match self {
            CardRole::Primary => "translateY(-3px)",
            CardRole::Secondary => "translateY(-2px)",
        }
    }

    fn press_transform(&self) -> &'static str {
        match self {
            CardRole::Primary => "translateY(-1px) scale(0.98)",
            CardRole::Secondary => "translateY(0) scale(0.98)",
        }
    }
}

const REST_TRANSFORM: &str = "translateY(0)";

/// Wire hover and press feedback on every contact card.
pub fn init_cards() {
    let Some(document) = web_sys::window().and_then(|window| window.document()) else {
        return;
    };
    let Ok(cards) = document.query_selector_all(".card") else {
        return;
    };
    for i in 0..cards.length() {
        let Some(card) = cards.get(i).and_then(|node| node.dyn_into::<HtmlElement>().ok()) else {
            continue;
        };
        let role = CardRole::from_element(&card);
        set_transform_on(&card, "mouseenter", role.hover_transform());
        set_transform_on(&card, "mouseleave", REST_TRANSFORM);
        set_transform_on(&card, "mousedown", role.press_transform());
        // Releasing returns to the hover pose, not to rest.
        set_transform_on(&card, "mouseup", role.hover_transform());
    }
}

fn set_transform_on(card: &HtmlElement, event: &str, transform: &'static str) {
    let target = card.clone();
    let handler = Closure::<dyn FnMut()>::new(move || {
        let _ = target.style().set_property("transform", transform);
    });
    let _ = card.add_event_listener_with_callback(event, handler.as_ref().unchecked_ref());
    handler.forget();
}

/// Touch behaviors the page opts out of: double-tap zoom, and
/// pull-to-refresh while already at the top.
///
/// The guard owns the little bit of state these checks need, so the checks
/// themselves can be exercised directly in tests.
pub struct TouchGuard {
    last_touch_end_ms: Cell<f64>,
    touch_start_y: Cell<i32>,
}

/// Two taps closer together than this are a zoom gesture, not two clicks.
const DOUBLE_TAP_WINDOW_MS: f64 = 300.0;

impl TouchGuard {
    pub fn new() -> Self {
        Self {
            last_touch_end_ms: Cell::new(f64::NEG_INFINITY),
            touch_start_y: Cell::new(0),
        }
    }

    /// `true` when this touchend completes a double tap and the event
    /// should be swallowed.
    pub fn on_touch_end(&self, now_ms: f64) -> bool {
        let suppress = now_ms - self.last_touch_end_ms.get() <= DOUBLE_TAP_WINDOW_MS;
        self.last_touch_end_ms.set(now_ms);
        suppress
    }

    pub fn on_touch_start(&self, page_y: i32) {
        self.touch_start_y.set(page_y);
    }

    /// `true` when a downward drag at the very top of the page would
    /// trigger the browser's pull-to-refresh.
    pub fn blocks_pull(&self, scroll_y: f64, page_y: i32) -> bool {
        scroll_y == 0.0 && page_y > self.touch_start_y.get()
    }

    /// Register the document-level listeners. The guard lives for the rest
    /// of the page.
    pub fn install() {
        let Some(window) = web_sys::window() else {
            return;
        };
        let Some(document) = window.document() else {
            return;
        };
        let guard = Rc::new(TouchGuard::new());

        let end_guard = Rc::clone(&guard);
        let on_end = Closure::<dyn FnMut(TouchEvent)>::new(move |event: TouchEvent| {
            if end_guard.on_touch_end(js_sys::Date::now()) {
                event.prevent_default();
            }
        });
        let _ =
            document.add_event_listener_with_callback("touchend", on_end.as_ref().unchecked_ref());
        on_end.forget();

        let passive = AddEventListenerOptions::new();
        passive.set_passive(true);
        let start_guard = Rc::clone(&guard);
        let on_start = Closure::<dyn FnMut(TouchEvent)>::new(move |event: TouchEvent| {
            if let Some(touch) = event.touches().get(0) {
                start_guard.on_touch_start(touch.page_y());
            }
        });
        let _ = document.add_event_listener_with_callback_and_add_event_listener_options(
            "touchstart",
            on_start.as_ref().unchecked_ref(),
            &passive,
        );
        on_start.forget();

        // touchmove must stay cancelable to actually stop the refresh.
        let blocking = AddEventListenerOptions::new();
        blocking.set_passive(false);
        let move_window = window.clone();
        let on_move = Closure::<dyn FnMut(TouchEvent)>::new(move |event: TouchEvent| {
            let Some(touch) = event.touches().get(0) else {
                return;
            };
            let scroll_y = move_window.scroll_y().unwrap_or(0.0);
            if guard.blocks_pull(scroll_y, touch.page_y()) {
                event.prevent_default();
            }
        });
        let _ = document.add_event_listener_with_callback_and_add_event_listener_options(
            "touchmove",
            on_move.as_ref().unchecked_ref(),
            &blocking,
        );
        on_move.forget();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn role_defaults_to_secondary() {
        assert_eq!(CardRole::from_attr(Some("primary")), CardRole::Primary);
        assert_eq!(CardRole::from_attr(Some("whatsapp")), CardRole::Secondary);
        assert_eq!(CardRole::from_attr(None), CardRole::Secondary);
    }

    #[test]
    fn primary_cards_move_further() {
        assert_eq!(CardRole::Primary.hover_transform(), "translateY(-3px)");
        assert_eq!(CardRole::Secondary.hover_transform(), "translateY(-2px)");
        assert_eq!(
            CardRole::Primary.press_transform(),
            "translateY(-1px) scale(0.98)"
        );
        assert_eq!(
            CardRole::Secondary.press_transform(),
            "translateY(0) scale(0.98)"
        );
    }

    #[test]
    fn double_tap_window_is_inclusive() {
        let guard = TouchGuard::new();
        assert!(!guard.on_touch_end(1_000.0)); // first tap ever
        assert!(guard.on_touch_end(1_300.0)); // exactly the window
        assert!(!guard.on_touch_end(1_601.0)); // just past it
    }

    #[test]
    fn pull_blocked_only_at_top_and_downward() {
        let guard = TouchGuard::new();
        guard.on_touch_start(100);
        assert!(guard.blocks_pull(0.0, 140));
        assert!(!guard.blocks_pull(120.0, 140)); // already scrolled
        assert!(!guard.blocks_pull(0.0, 60)); // finger moved up
        assert!(!guard.blocks_pull(0.0, 100)); // no movement
    }
}
