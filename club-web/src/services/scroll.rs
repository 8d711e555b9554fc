//! Smooth scrolling and entrance reveals
//!
//! One service owns the window listeners, the animation-frame loop and the
//! reveal observer. `start()` installs them, `stop()` tears them down.

use leptos::leptos_dom::helpers::{
    request_animation_frame, window_event_listener, WindowListenerHandle,
};
use leptos::{ev, prelude::*};
use lib_site::reveal::IN_VIEW_CLASS;
use lib_site::{RevealTracker, ScrollStart, Section, SectionBounds, SmoothScroller};
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::{Element, HtmlElement, IntersectionObserver, IntersectionObserverEntry, IntersectionObserverInit};

use crate::state::page::PageContext;

const REVEAL_SELECTOR: &str = ".reveal";
const REVEAL_THRESHOLD: f64 = 0.1;

struct RevealObserver {
    observer: IntersectionObserver,
    _callback: Closure<dyn FnMut(js_sys::Array, IntersectionObserver)>,
}

#[derive(Clone, Copy)]
pub struct ScrollService {
    page: PageContext,
    scroller: StoredValue<SmoothScroller>,
    listeners: StoredValue<Vec<WindowListenerHandle>, LocalStorage>,
    reveal: StoredValue<Option<RevealObserver>, LocalStorage>,
}

impl ScrollService {
    pub fn new(page: PageContext) -> Self {
        Self {
            page,
            scroller: StoredValue::new(SmoothScroller::default()),
            listeners: StoredValue::new_local(Vec::new()),
            reveal: StoredValue::new_local(None),
        }
    }

    pub fn start(self) {
        if self.scroller.with_value(|s| s.is_running()) {
            return;
        }
        self.scroller.update_value(|s| s.start());

        let page = self.page;
        let scroller = self.scroller;
        let handles = vec![
            window_event_listener(ev::scroll, move |_| {
                page.track_scroll(scroll_offset(), measure_section);
            }),
            window_event_listener(ev::wheel, move |_| {
                scroller.update_value(|s| {
                    s.interrupt();
                });
            }),
            window_event_listener(ev::touchstart, move |_| {
                scroller.update_value(|s| {
                    s.interrupt();
                });
            }),
        ];
        self.listeners.set_value(handles);

        match observe_reveals() {
            Ok(observer) => self.reveal.set_value(Some(observer)),
            Err(e) => log::warn!("Entrance reveal unavailable: {e:?}"),
        }

        page.track_scroll(scroll_offset(), measure_section);
        log::debug!("Scroll service started");
    }

    pub fn stop(self) {
        self.scroller.update_value(|s| s.stop());
        self.listeners.update_value(|handles| {
            for handle in handles.drain(..) {
                handle.remove();
            }
        });
        self.reveal.update_value(|reveal| {
            if let Some(r) = reveal.take() {
                r.observer.disconnect();
            }
        });
        log::debug!("Scroll service stopped");
    }

    /// Scroll the window to a section, animated while the service runs.
    pub fn scroll_to_section(self, section: Section) {
        let Some(bounds) = measure_section(section) else {
            log::warn!("Section #{section} is not on the page");
            return;
        };

        let was_animating = self.scroller.with_value(|s| s.is_animating());
        let now = js_sys::Date::now();
        match self
            .scroller
            .try_update_value(|s| s.scroll_to(bounds.top, scroll_offset(), now))
        {
            Some(ScrollStart::Jump(y)) => set_scroll(y),
            Some(ScrollStart::Animate) if !was_animating => self.schedule_frame(),
            _ => {}
        }
    }

    fn schedule_frame(self) {
        request_animation_frame(move || {
            let now = js_sys::Date::now();
            if let Some(Some(y)) = self.scroller.try_update_value(|s| s.tick(now)) {
                set_scroll(y);
                self.schedule_frame();
            }
        });
    }
}

fn scroll_offset() -> f64 {
    web_sys::window()
        .and_then(|w| w.scroll_y().ok())
        .unwrap_or_default()
}

fn set_scroll(y: f64) {
    if let Some(window) = web_sys::window() {
        window.scroll_to_with_x_and_y(0.0, y);
    }
}

fn measure_section(section: Section) -> Option<SectionBounds> {
    let element = web_sys::window()?
        .document()?
        .get_element_by_id(section.id())?
        .dyn_into::<HtmlElement>()
        .ok()?;

    Some(SectionBounds {
        top: element.offset_top().into(),
        height: element.offset_height().into(),
    })
}

fn observe_reveals() -> Result<RevealObserver, JsValue> {
    let mut tracker = RevealTracker::new();
    let callback = Closure::<dyn FnMut(js_sys::Array, IntersectionObserver)>::new(
        move |entries: js_sys::Array, observer: IntersectionObserver| {
            for entry in entries.iter() {
                let Ok(entry) = entry.dyn_into::<IntersectionObserverEntry>() else {
                    continue;
                };
                let target = entry.target();
                if tracker.observe(&target.id(), entry.is_intersecting()) {
                    target.class_list().add_1(IN_VIEW_CLASS).ok();
                    observer.unobserve(&target);
                }
            }
        },
    );

    let options = IntersectionObserverInit::new();
    options.set_threshold(&JsValue::from_f64(REVEAL_THRESHOLD));
    let observer =
        IntersectionObserver::new_with_options(callback.as_ref().unchecked_ref(), &options)?;

    let document = web_sys::window()
        .and_then(|w| w.document())
        .ok_or_else(|| JsValue::from_str("no document"))?;
    let nodes = document.query_selector_all(REVEAL_SELECTOR)?;
    for i in 0..nodes.length() {
        if let Some(element) = nodes.item(i).and_then(|n| n.dyn_into::<Element>().ok()) {
            observer.observe(&element);
        }
    }

    Ok(RevealObserver {
        observer,
        _callback: callback,
    })
}

pub fn provide_scroll_service(page: PageContext) -> ScrollService {
    let service = ScrollService::new(page);
    provide_context(service);
    service
}

pub fn use_scroll_service() -> ScrollService {
    expect_context::<ScrollService>()
}
