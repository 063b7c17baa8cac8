//! Auto-advancing image gallery for the studio section.
//!
//! The controller collects a fixed slide sequence at mount time and moves a
//! single `active` marker class between slides. Markup absence is an
//! expected deployment variation, not a bug: a missing container, missing
//! nav buttons, or a one-image gallery leave the page inert instead of
//! erroring.

use std::cell::{Cell, RefCell};
use std::rc::{Rc, Weak};

use gloo_timers::callback::Interval;
use wasm_bindgen::prelude::Closure;
use wasm_bindgen::JsCast;
use web_sys::{AddEventListenerOptions, Document, Element, HtmlElement, KeyboardEvent, TouchEvent};

use crate::analytics;
use crate::config::SiteConfig;

/// Marker class carried by exactly one slide at a time.
const ACTIVE_CLASS: &str = "active";

/// Horizontal distance a touch must travel before it counts as a swipe.
const SWIPE_THRESHOLD_PX: i32 = 50;

pub fn next_index(current: usize, len: usize) -> usize {
    (current + 1) % len
}

pub fn previous_index(current: usize, len: usize) -> usize {
    (current + len - 1) % len
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Swipe {
    Forward,
    Backward,
}

/// Classify a completed horizontal gesture. Taps and drags at or below the
/// threshold map to `None`; a finger moving leftward advances the gallery.
pub fn swipe_direction(start_x: i32, end_x: i32) -> Option<Swipe> {
    let diff = start_x - end_x;
    if diff.abs() <= SWIPE_THRESHOLD_PX {
        return None;
    }
    if diff > 0 {
        Some(Swipe::Forward)
    } else {
        Some(Swipe::Backward)
    }
}

pub struct Gallery {
    weak: Weak<Gallery>,
    images: Vec<Element>,
    current: Cell<usize>,
    timer: RefCell<Option<Interval>>,
    touch_start_x: Cell<i32>,
    auto_play_enabled: bool,
    auto_play_interval_ms: u32,
}

impl Gallery {
    /// Bind the gallery to the container matching `selector`.
    ///
    /// Returns `None` when the markup is missing or holds at most one
    /// image; in that case the nav buttons are hidden and nothing else is
    /// wired.
    pub fn mount(selector: &str, config: &SiteConfig) -> Option<Rc<Self>> {
        let document = web_sys::window()?.document()?;
        let container = document.query_selector(selector).ok().flatten()?;

        let nodes = container.query_selector_all(".gallery-image").ok()?;
        let mut images = Vec::with_capacity(nodes.length() as usize);
        for i in 0..nodes.length() {
            if let Some(element) = nodes.get(i).and_then(|node| node.dyn_into::<Element>().ok()) {
                images.push(element);
            }
        }

        let prev_button = container.query_selector(".gallery-nav.prev").ok().flatten();
        let next_button = container.query_selector(".gallery-nav.next").ok().flatten();

        if images.len() <= 1 {
            hide(prev_button.as_ref());
            hide(next_button.as_ref());
            return None;
        }

        let gallery = Rc::new_cyclic(|weak| Gallery {
            weak: weak.clone(),
            images,
            current: Cell::new(0),
            timer: RefCell::new(None),
            touch_start_x: Cell::new(0),
            auto_play_enabled: config.auto_play_enabled,
            auto_play_interval_ms: config.auto_play_interval_ms,
        });

        Self::wire_controls(&gallery, prev_button, next_button);
        Self::wire_keyboard(&gallery, &document);
        Self::wire_pointer_pause(&gallery, &container);
        Self::wire_visibility(&gallery, &document);
        Self::wire_swipe(&gallery, &container);
        gallery.start_auto_play();

        Some(gallery)
    }

    /// Make exactly the slide at `index` visible and report the view.
    /// Out-of-range indexes are ignored; the navigation operations always
    /// pass a valid one.
    fn show_image(&self, index: usize) {
        let Some(image) = self.images.get(index) else {
            return;
        };
        for other in &self.images {
            let _ = other.class_list().remove_1(ACTIVE_CLASS);
        }
        let _ = image.class_list().add_1(ACTIVE_CLASS);
        self.current.set(index);

        analytics::track_event(
            "gallery_view",
            &[
                ("image_index", (index as u32).into()),
                ("total_images", (self.images.len() as u32).into()),
            ],
        );
    }

    pub fn next(&self) {
        self.show_image(next_index(self.current.get(), self.images.len()));
        self.reset_auto_play();
    }

    pub fn previous(&self) {
        self.show_image(previous_index(self.current.get(), self.images.len()));
        self.reset_auto_play();
    }

    /// Start the auto-advance interval. A no-op while one is already
    /// running, so repeated starts never stack a second timer.
    pub fn start_auto_play(&self) {
        if !self.auto_play_enabled {
            return;
        }
        let mut slot = self.timer.borrow_mut();
        if slot.is_some() {
            return;
        }
        let weak = self.weak.clone();
        *slot = Some(Interval::new(self.auto_play_interval_ms, move || {
            if let Some(gallery) = weak.upgrade() {
                // The running interval already keeps the cadence; ticks
                // advance without rescheduling anything.
                let len = gallery.images.len();
                gallery.show_image(next_index(gallery.current.get(), len));
            }
        }));
    }

    pub fn stop_auto_play(&self) {
        // Dropping the handle clears the underlying interval.
        self.timer.borrow_mut().take();
    }

    /// Manual navigation restarts the advance schedule from zero.
    fn reset_auto_play(&self) {
        self.stop_auto_play();
        self.start_auto_play();
    }

    fn wire_controls(gallery: &Rc<Self>, prev_button: Option<Element>, next_button: Option<Element>) {
        if let Some(button) = prev_button {
            let gallery = Rc::clone(gallery);
            let on_click = Closure::<dyn FnMut()>::new(move || gallery.previous());
            let _ = button
                .add_event_listener_with_callback("click", on_click.as_ref().unchecked_ref());
            on_click.forget();
        }
        if let Some(button) = next_button {
            let gallery = Rc::clone(gallery);
            let on_click = Closure::<dyn FnMut()>::new(move || gallery.next());
            let _ = button
                .add_event_listener_with_callback("click", on_click.as_ref().unchecked_ref());
            on_click.forget();
        }
    }

    // Page-wide arrows, for accessibility.
    fn wire_keyboard(gallery: &Rc<Self>, document: &Document) {
        let gallery = Rc::clone(gallery);
        let on_key = Closure::<dyn FnMut(KeyboardEvent)>::new(move |event: KeyboardEvent| {
            match event.key().as_str() {
                "ArrowLeft" => gallery.previous(),
                "ArrowRight" => gallery.next(),
                _ => {}
            }
        });
        let _ =
            document.add_event_listener_with_callback("keydown", on_key.as_ref().unchecked_ref());
        on_key.forget();
    }

    fn wire_pointer_pause(gallery: &Rc<Self>, container: &Element) {
        let enter_gallery = Rc::clone(gallery);
        let on_enter = Closure::<dyn FnMut()>::new(move || enter_gallery.stop_auto_play());
        let _ = container
            .add_event_listener_with_callback("mouseenter", on_enter.as_ref().unchecked_ref());
        on_enter.forget();

        let leave_gallery = Rc::clone(gallery);
        let on_leave = Closure::<dyn FnMut()>::new(move || leave_gallery.start_auto_play());
        let _ = container
            .add_event_listener_with_callback("mouseleave", on_leave.as_ref().unchecked_ref());
        on_leave.forget();
    }

    fn wire_visibility(gallery: &Rc<Self>, document: &Document) {
        let gallery = Rc::clone(gallery);
        let document_handle = document.clone();
        let on_change = Closure::<dyn FnMut()>::new(move || {
            if document_handle.hidden() {
                gallery.stop_auto_play();
            } else {
                gallery.start_auto_play();
            }
        });
        let _ = document.add_event_listener_with_callback(
            "visibilitychange",
            on_change.as_ref().unchecked_ref(),
        );
        on_change.forget();
    }

    fn wire_swipe(gallery: &Rc<Self>, container: &Element) {
        let passive = AddEventListenerOptions::new();
        passive.set_passive(true);

        let start_gallery = Rc::clone(gallery);
        let on_start = Closure::<dyn FnMut(TouchEvent)>::new(move |event: TouchEvent| {
            if let Some(touch) = event.changed_touches().get(0) {
                start_gallery.touch_start_x.set(touch.screen_x());
            }
        });
        let _ = container.add_event_listener_with_callback_and_add_event_listener_options(
            "touchstart",
            on_start.as_ref().unchecked_ref(),
            &passive,
        );
        on_start.forget();

        let end_gallery = Rc::clone(gallery);
        let on_end = Closure::<dyn FnMut(TouchEvent)>::new(move |event: TouchEvent| {
            if let Some(touch) = event.changed_touches().get(0) {
                match swipe_direction(end_gallery.touch_start_x.get(), touch.screen_x()) {
                    Some(Swipe::Forward) => end_gallery.next(),
                    Some(Swipe::Backward) => end_gallery.previous(),
                    None => {}
                }
            }
        });
        let _ = container.add_event_listener_with_callback_and_add_event_listener_options(
            "touchend",
            on_end.as_ref().unchecked_ref(),
            &passive,
        );
        on_end.forget();
    }
}

fn hide(button: Option<&Element>) {
    if let Some(element) = button.and_then(|b| b.dyn_ref::<HtmlElement>()) {
        let _ = element.style().set_property("display", "none");
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn next_wraps_to_front() {
        assert_eq!(next_index(3, 4), 0);
        assert_eq!(next_index(0, 4), 1);
    }

    #[test]
    fn previous_wraps_to_back() {
        assert_eq!(previous_index(0, 4), 3);
        assert_eq!(previous_index(2, 4), 1);
    }

    #[test]
    fn navigation_tracks_net_steps_modulo_len() {
        let len = 4usize;
        let mut index = 0usize;
        let mut net = 0i32;
        for step in [1, 1, -1, 1, -1, -1, -1, 1, 1, 1] {
            index = if step > 0 {
                next_index(index, len)
            } else {
                previous_index(index, len)
            };
            net += step;
            assert_eq!(index, net.rem_euclid(len as i32) as usize);
        }
    }

    #[test]
    fn swipe_needs_more_than_the_threshold() {
        assert_eq!(swipe_direction(151, 100), Some(Swipe::Forward));
        assert_eq!(swipe_direction(100, 151), Some(Swipe::Backward));
        assert_eq!(swipe_direction(150, 100), None);
        assert_eq!(swipe_direction(100, 150), None);
        assert_eq!(swipe_direction(100, 100), None);
    }

    #[test]
    fn leftward_finger_means_forward() {
        // screenX shrinks as the finger moves left.
        assert_eq!(swipe_direction(300, 100), Some(Swipe::Forward));
        assert_eq!(swipe_direction(100, 300), Some(Swipe::Backward));
    }
}
