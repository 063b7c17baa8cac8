//! Usage reporting.
//!
//! Events go to the global `gtag` function when the deployment provides
//! one; without it every call is a silent no-op. Reporting is fire-and-
//! forget and must never affect page behavior.

use std::cell::{Cell, RefCell};
use std::rc::Rc;
use std::sync::atomic::{AtomicBool, Ordering};

use gloo_timers::callback::Timeout;
use js_sys::{Function, Object, Reflect};
use wasm_bindgen::prelude::Closure;
use wasm_bindgen::{JsCast, JsValue};
use web_sys::{Document, Element, PerformanceEntry, PerformanceObserver, PerformanceObserverEntryList, PerformanceObserverInit, Window};

use crate::config::SiteConfig;
use crate::interactions::CardRole;

// Master switch, mirrored from SiteConfig at init.
static ENABLED: AtomicBool = AtomicBool::new(false);

/// Scroll marks worth reporting. A fast scroll that jumps past one lands on
/// a different percentage and reports nothing; that matches how the page
/// has always behaved.
const SCROLL_MILESTONES: [u32; 4] = [25, 50, 75, 100];

const SCROLL_DEBOUNCE_MS: u32 = 150;

/// Report a named event with a flat set of parameters, best-effort.
pub fn track_event(name: &str, params: &[(&str, JsValue)]) {
    if !ENABLED.load(Ordering::Relaxed) {
        return;
    }
    log::debug!("analytics event: {}", name);

    let Some(window) = web_sys::window() else {
        return;
    };
    let Ok(sink) = Reflect::get(&window, &JsValue::from_str("gtag")) else {
        return;
    };
    // Absent or not callable: stay silent, navigation must not care.
    let Ok(sink) = sink.dyn_into::<Function>() else {
        return;
    };

    let payload = Object::new();
    for (key, value) in params {
        let _ = Reflect::set(&payload, &JsValue::from_str(key), value);
    }
    let _ = sink.call3(
        &JsValue::NULL,
        &JsValue::from_str("event"),
        &JsValue::from_str(name),
        &payload,
    );
}

/// Wire the page-level usage listeners. Called once at app start.
pub fn init(config: &SiteConfig) {
    ENABLED.store(config.analytics_enabled, Ordering::Relaxed);
    if !config.analytics_enabled {
        return;
    }
    let Some(window) = web_sys::window() else {
        return;
    };
    let Some(document) = window.document() else {
        return;
    };

    wire_card_clicks(&document);
    wire_time_on_page(&window);
    wire_scroll_depth(&window);
    observe_paint_timing(&window);
}

fn wire_card_clicks(document: &Document) {
    let Ok(cards) = document.query_selector_all(".card") else {
        return;
    };
    for i in 0..cards.length() {
        let Some(card) = cards.get(i).and_then(|node| node.dyn_into::<Element>().ok()) else {
            continue;
        };
        let clicked = card.clone();
        let on_click = Closure::<dyn FnMut()>::new(move || {
            let name = clicked
                .query_selector("span")
                .ok()
                .flatten()
                .and_then(|span| span.text_content())
                .or_else(|| clicked.text_content())
                .unwrap_or_else(|| String::from("Unknown"));
            let url = clicked.get_attribute("href").unwrap_or_default();
            let role = CardRole::from_element(&clicked);
            track_event(
                "button_click",
                &[
                    ("button_name", name.trim().into()),
                    ("button_url", url.as_str().into()),
                    ("button_type", role.as_str().into()),
                ],
            );
        });
        let _ = card.add_event_listener_with_callback("click", on_click.as_ref().unchecked_ref());
        on_click.forget();
    }
}

fn wire_time_on_page(window: &Window) {
    let start_ms = js_sys::Date::now();
    let on_unload = Closure::<dyn FnMut()>::new(move || {
        let elapsed_s = ((js_sys::Date::now() - start_ms) / 1000.0).round();
        track_event("time_on_page", &[("duration_seconds", elapsed_s.into())]);
    });
    let _ = window
        .add_event_listener_with_callback("beforeunload", on_unload.as_ref().unchecked_ref());
    on_unload.forget();
}

/// High-water mark for how far down the page the visitor has scrolled.
///
/// Owns both the mark and the debounce slot so the scroll handler has a
/// single place for its state instead of a pair of module globals.
pub struct ScrollDepthTracker {
    max_percent: Cell<u32>,
    pending: RefCell<Option<Timeout>>,
}

impl ScrollDepthTracker {
    pub fn new() -> Self {
        Self {
            max_percent: Cell::new(0),
            pending: RefCell::new(None),
        }
    }

    /// Record a scroll sample. Returns the milestone to report when the
    /// sample raises the high-water mark and lands exactly on one.
    pub fn record(&self, percent: u32) -> Option<u32> {
        if percent <= self.max_percent.get() {
            return None;
        }
        self.max_percent.set(percent);
        SCROLL_MILESTONES.contains(&percent).then_some(percent)
    }
}

fn wire_scroll_depth(window: &Window) {
    let tracker = Rc::new(ScrollDepthTracker::new());
    let scroll_window = window.clone();
    let on_scroll = Closure::<dyn FnMut()>::new(move || {
        let window = scroll_window.clone();
        let measure_tracker = Rc::clone(&tracker);
        let measure = Timeout::new(SCROLL_DEBOUNCE_MS, move || {
            if let Some(percent) = current_scroll_percent(&window) {
                if let Some(milestone) = measure_tracker.record(percent) {
                    track_event("scroll_depth", &[("percent", milestone.into())]);
                }
            }
        });
        // Replacing the slot cancels any still-pending measurement, so only
        // the last sample of a scroll burst is measured.
        *tracker.pending.borrow_mut() = Some(measure);
    });
    let _ = window.add_event_listener_with_callback("scroll", on_scroll.as_ref().unchecked_ref());
    on_scroll.forget();
}

fn current_scroll_percent(window: &Window) -> Option<u32> {
    let document = window.document()?;
    let body = document.body()?;
    let scroll_y = window.scroll_y().ok()?;
    let viewport = window.inner_height().ok()?.as_f64()?;
    let track = body.scroll_height() as f64 - viewport;
    if track <= 0.0 {
        return None;
    }
    Some((scroll_y / track * 100.0).round() as u32)
}

/// Log largest-contentful-paint timing; useful when tuning the hero images.
fn observe_paint_timing(window: &Window) {
    if !Reflect::has(window.as_ref(), &JsValue::from_str("PerformanceObserver")).unwrap_or(false) {
        return;
    }
    let on_entries = Closure::<dyn FnMut(PerformanceObserverEntryList)>::new(
        move |entries: PerformanceObserverEntryList| {
            for entry in entries.get_entries().iter() {
                if let Ok(entry) = entry.dyn_into::<PerformanceEntry>() {
                    log::info!("largest-contentful-paint at {:.0}ms", entry.start_time());
                }
            }
        },
    );
    let Ok(observer) = PerformanceObserver::new(on_entries.as_ref().unchecked_ref()) else {
        return;
    };
    on_entries.forget();

    let entry_types = js_sys::Array::of1(&JsValue::from_str("largest-contentful-paint"));
    let options = PerformanceObserverInit::new(entry_types.as_ref());
    options.set_entry_types(entry_types.as_ref());
    observer.observe(&options);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn milestones_fire_on_exact_new_highs() {
        let tracker = ScrollDepthTracker::new();
        assert_eq!(tracker.record(10), None);
        assert_eq!(tracker.record(25), Some(25));
        assert_eq!(tracker.record(25), None); // not a new high
        assert_eq!(tracker.record(20), None); // below the mark
        assert_eq!(tracker.record(75), Some(75));
        assert_eq!(tracker.record(100), Some(100));
    }

    #[test]
    fn fast_scroll_skips_intermediate_milestones() {
        let tracker = ScrollDepthTracker::new();
        assert_eq!(tracker.record(10), None);
        // Jumping from 10% to 60% passes 25 and 50 without reporting either.
        assert_eq!(tracker.record(60), None);
        assert_eq!(tracker.record(100), Some(100));
    }

    #[test]
    fn mark_never_moves_backward() {
        let tracker = ScrollDepthTracker::new();
        assert_eq!(tracker.record(50), Some(50));
        assert_eq!(tracker.record(30), None);
        assert_eq!(tracker.record(50), None);
        assert_eq!(tracker.record(51), None);
    }
}
