#![forbid(unsafe_code)]

use std::cell::RefCell;
use std::rc::{Rc, Weak};

use certslide_core::{ElementIds, KeyScope, OptionsError, SliderOptions, SliderSnapshot, debug, warn};
use gloo::events::EventListener;
use js_sys::{Array, Function, Reflect};
use wasm_bindgen::JsCast;
use wasm_bindgen::prelude::*;
use web_sys::{
    Document, Element, Event, HtmlButtonElement, HtmlElement, HtmlImageElement, KeyboardEvent,
    TouchEvent, Window,
};

use crate::controller::SliderController;
use crate::input::SliderInput;
use crate::modal::{ModalHost, ModalOutcome, open_certificate};
use crate::view::SliderView;

/// Attribute carrying a dot's slide index, read back by the delegated click
/// listener on the indicator host.
const DOT_INDEX_ATTR: &str = "data-slide";

thread_local! {
    static AUTO_SLIDER: RefCell<Option<CertificateSlider>> = const { RefCell::new(None) };
}

fn element_by_id<T: JsCast>(document: &Document, id: &str) -> Option<T> {
    document
        .get_element_by_id(id)
        .and_then(|el| el.dyn_into::<T>().ok())
}

fn viewport_width(window: &Window) -> f64 {
    window
        .inner_width()
        .ok()
        .and_then(|width| width.as_f64())
        .unwrap_or(0.0)
}

fn js_error(err: &OptionsError) -> JsValue {
    js_sys::Error::new(&err.to_string()).into()
}

/// Accepts `undefined`/`null`, a JSON string, or a plain object.
fn parse_options(options: Option<JsValue>) -> Result<SliderOptions, JsValue> {
    let Some(value) = options.filter(|v| !v.is_undefined() && !v.is_null()) else {
        return Ok(SliderOptions::default());
    };
    let json = match value.as_string() {
        Some(json) => json,
        None => js_sys::JSON::stringify(&value)?
            .as_string()
            .unwrap_or_default(),
    };
    SliderOptions::from_json_str(&json).map_err(|err| js_error(&err))
}

// ---------------------------------------------------------------------------
// View
// ---------------------------------------------------------------------------

/// [`SliderView`] over the live page. Every element except the container is
/// optional and silently skipped when absent.
struct DomSliderView {
    document: Document,
    container: HtmlElement,
    prev: Option<HtmlButtonElement>,
    next: Option<HtmlButtonElement>,
    indicators: Option<Element>,
    progress: Option<HtmlElement>,
    dot_class: String,
    active_class: String,
}

impl DomSliderView {
    fn new(document: Document, container: HtmlElement, options: &SliderOptions) -> Self {
        let ids = &options.ids;
        Self {
            prev: element_by_id(&document, &ids.prev_button),
            next: element_by_id(&document, &ids.next_button),
            indicators: document.get_element_by_id(&ids.indicators),
            progress: element_by_id(&document, &ids.progress_bar),
            dot_class: options.dot_class.clone(),
            active_class: options.active_class.clone(),
            document,
            container,
        }
    }
}

impl SliderView for DomSliderView {
    fn rebuild_indicators(&mut self, count: usize) {
        let Some(host) = &self.indicators else {
            return;
        };
        host.set_inner_html("");
        for index in 0..count {
            let Ok(dot) = self.document.create_element("div") else {
                warn!("failed to create indicator dot");
                return;
            };
            dot.set_class_name(&self.dot_class);
            let _ = dot.set_attribute(DOT_INDEX_ATTR, &index.to_string());
            let _ = host.append_child(&dot);
        }
    }

    fn render(&mut self, snapshot: &SliderSnapshot) {
        let _ = self
            .container
            .style()
            .set_property("transform", &snapshot.transform_css());

        if let Some(prev) = &self.prev {
            prev.set_disabled(snapshot.prev_disabled);
        }
        if let Some(next) = &self.next {
            next.set_disabled(snapshot.next_disabled);
        }

        if let Some(host) = &self.indicators {
            let dots = host.get_elements_by_class_name(&self.dot_class);
            for index in 0..dots.length() {
                let Some(dot) = dots.item(index) else {
                    continue;
                };
                let classes = dot.class_list();
                let _ = if snapshot.is_active(index as usize) {
                    classes.add_1(&self.active_class)
                } else {
                    classes.remove_1(&self.active_class)
                };
            }
        }

        if let Some(progress) = &self.progress {
            let _ = progress
                .style()
                .set_property("width", &snapshot.progress_css());
        }
    }
}

// ---------------------------------------------------------------------------
// Modal
// ---------------------------------------------------------------------------

/// [`ModalHost`] backed by element ids and the page's `bootstrap.Modal`.
///
/// Elements are looked up on every call so a modal injected after the slider
/// mounted is still found.
struct DomModal<'a> {
    document: Document,
    ids: &'a ElementIds,
}

impl DomModal<'_> {
    fn present(modal: &Element) -> Result<bool, JsValue> {
        let bootstrap = Reflect::get(&js_sys::global(), &"bootstrap".into())?;
        if bootstrap.is_undefined() || bootstrap.is_null() {
            return Ok(false);
        }
        let Ok(ctor) = Reflect::get(&bootstrap, &"Modal".into())?.dyn_into::<Function>() else {
            return Ok(false);
        };
        let instance = Reflect::construct(&ctor, &Array::of1(modal))?;
        let Ok(show) = Reflect::get(&instance, &"show".into())?.dyn_into::<Function>() else {
            return Ok(false);
        };
        show.call0(&instance)?;
        Ok(true)
    }
}

impl ModalHost for DomModal<'_> {
    fn set_image_source(&mut self, src: &str) -> bool {
        let Some(slot) = self.document.get_element_by_id(&self.ids.modal_image) else {
            return false;
        };
        match slot.dyn_ref::<HtmlImageElement>() {
            Some(img) => img.set_src(src),
            None => {
                let _ = slot.set_attribute("src", src);
            }
        }
        true
    }

    fn set_title(&mut self, title: &str) -> bool {
        let Some(slot) = self.document.get_element_by_id(&self.ids.modal_title) else {
            return false;
        };
        slot.set_text_content(Some(title));
        true
    }

    fn show(&mut self) -> bool {
        let Some(modal) = self.document.get_element_by_id(&self.ids.modal) else {
            return false;
        };
        Self::present(&modal).unwrap_or_else(|err| {
            warn!(?err, "dialog facility failed");
            false
        })
    }
}

fn open_modal(ids: &ElementIds, image_source: &str, title: &str) -> ModalOutcome {
    let Some(document) = web_sys::window().and_then(|w| w.document()) else {
        return ModalOutcome::ContentOnly;
    };
    let mut host = DomModal { document, ids };
    open_certificate(&mut host, image_source, title)
}

// ---------------------------------------------------------------------------
// Mounted instance
// ---------------------------------------------------------------------------

struct Mounted {
    controller: RefCell<SliderController<DomSliderView>>,
    listeners: RefCell<Vec<EventListener>>,
}

impl Mounted {
    /// Bind to the page. `Ok(None)` when the container is not on this page.
    fn mount(options: SliderOptions) -> Result<Option<Rc<Self>>, OptionsError> {
        let Some(window) = web_sys::window() else {
            return Ok(None);
        };
        let Some(document) = window.document() else {
            return Ok(None);
        };
        let Some(container) = element_by_id::<HtmlElement>(&document, &options.ids.container)
        else {
            debug!(id = %options.ids.container, "slider container not found; skipping");
            return Ok(None);
        };

        let total_items = container.children().length() as usize;
        let key_scope = options.key_scope;
        let view = DomSliderView::new(document.clone(), container.clone(), &options);
        let controller = SliderController::mount(total_items, viewport_width(&window), options, view)?;

        let mounted = Rc::new(Self {
            controller: RefCell::new(controller),
            listeners: RefCell::new(Vec::new()),
        });
        mounted.install_listeners(&window, &document, &container, key_scope);
        Ok(Some(mounted))
    }

    fn dispatch(&self, input: &SliderInput) {
        match self.controller.try_borrow_mut() {
            Ok(mut controller) => {
                controller.dispatch(input);
            }
            Err(_) => warn!(?input, "slider busy; input dropped"),
        }
    }

    fn listen(
        self: &Rc<Self>,
        target: &web_sys::EventTarget,
        event_type: &'static str,
        to_input: impl Fn(&Event) -> Option<SliderInput> + 'static,
    ) -> EventListener {
        let weak: Weak<Self> = Rc::downgrade(self);
        EventListener::new(target, event_type, move |event| {
            let Some(mounted) = weak.upgrade() else {
                return;
            };
            if let Some(input) = to_input(event) {
                mounted.dispatch(&input);
            }
        })
    }

    fn install_listeners(
        self: &Rc<Self>,
        window: &Window,
        document: &Document,
        container: &HtmlElement,
        key_scope: KeyScope,
    ) {
        let mut listeners = Vec::new();
        let (prev, next, indicators) = {
            let controller = self.controller.borrow();
            let view = controller.view();
            (view.prev.clone(), view.next.clone(), view.indicators.clone())
        };

        if let Some(prev) = &prev {
            listeners.push(self.listen(prev, "click", |_| Some(SliderInput::Previous)));
        }
        if let Some(next) = &next {
            listeners.push(self.listen(next, "click", |_| Some(SliderInput::Next)));
        }
        if let Some(host) = &indicators {
            listeners.push(self.listen(host, "click", |event| {
                let target = event.target()?.dyn_into::<Element>().ok()?;
                let dot = target
                    .closest(&format!("[{DOT_INDEX_ATTR}]"))
                    .ok()
                    .flatten()?;
                let index = dot.get_attribute(DOT_INDEX_ATTR)?.parse().ok()?;
                Some(SliderInput::GoTo { index })
            }));
        }

        listeners.push(self.listen(container, "touchstart", |event| {
            let touch = event.dyn_ref::<TouchEvent>()?.touches().item(0)?;
            Some(SliderInput::TouchStart {
                x: f64::from(touch.client_x()),
            })
        }));
        listeners.push(self.listen(container, "touchend", |event| {
            let touch = event.dyn_ref::<TouchEvent>()?.changed_touches().item(0)?;
            Some(SliderInput::TouchEnd {
                x: f64::from(touch.client_x()),
            })
        }));
        listeners.push(self.listen(container, "touchcancel", |_| {
            Some(SliderInput::TouchCancel)
        }));

        let key_target: &web_sys::EventTarget = match key_scope {
            KeyScope::Document => document,
            KeyScope::Root => {
                // The container only receives key events when focusable.
                if !container.has_attribute("tabindex") {
                    container.set_tab_index(0);
                }
                container
            }
        };
        listeners.push(self.listen(key_target, "keydown", |event| {
            let event = event.dyn_ref::<KeyboardEvent>()?;
            Some(SliderInput::Key {
                key: event.key(),
                code: event.code(),
            })
        }));

        let window_for_resize = window.clone();
        listeners.push(self.listen(window, "resize", move |_| {
            Some(SliderInput::Resize {
                width: viewport_width(&window_for_resize),
            })
        }));

        *self.listeners.borrow_mut() = listeners;
    }
}

// ---------------------------------------------------------------------------
// JS API
// ---------------------------------------------------------------------------

/// A certificate slider bound to the page's elements.
///
/// Constructing one on a page without the container yields an inert instance:
/// navigation calls do nothing, `openCertificate` still works.
#[wasm_bindgen]
pub struct CertificateSlider {
    ids: ElementIds,
    mounted: Option<Rc<Mounted>>,
}

#[wasm_bindgen]
impl CertificateSlider {
    /// Bind to the page. `options` may be omitted, a JSON string, or an object
    /// with the same camelCase keys.
    #[wasm_bindgen(constructor)]
    pub fn new(options: Option<JsValue>) -> Result<CertificateSlider, JsValue> {
        let options = parse_options(options)?;
        let ids = options.ids.clone();
        let mounted = Mounted::mount(options).map_err(|err| js_error(&err))?;
        Ok(Self { ids, mounted })
    }

    #[wasm_bindgen(getter, js_name = isMounted)]
    pub fn is_mounted(&self) -> bool {
        self.mounted.is_some()
    }

    #[wasm_bindgen(getter, js_name = currentSlide)]
    pub fn current_slide(&self) -> Option<u32> {
        let mounted = self.mounted.as_ref()?;
        let controller = mounted.controller.try_borrow().ok()?;
        u32::try_from(controller.state().current_slide()).ok()
    }

    #[wasm_bindgen(getter, js_name = slideCount)]
    pub fn slide_count(&self) -> u32 {
        self.mounted
            .as_ref()
            .and_then(|m| m.controller.try_borrow().ok())
            .and_then(|c| u32::try_from(c.state().max_slides()).ok())
            .unwrap_or(0)
    }

    #[wasm_bindgen(js_name = previousSlide)]
    pub fn previous_slide(&self) {
        self.dispatch(&SliderInput::Previous);
    }

    #[wasm_bindgen(js_name = nextSlide)]
    pub fn next_slide(&self) {
        self.dispatch(&SliderInput::Next);
    }

    #[wasm_bindgen(js_name = goToSlide)]
    pub fn go_to_slide(&self, index: i32) {
        self.dispatch(&SliderInput::GoTo {
            index: i64::from(index),
        });
    }

    /// Show `image_source` with `title` in the modal. Returns whether the
    /// dialog was presented.
    #[wasm_bindgen(js_name = openCertificate)]
    pub fn open_certificate(&self, image_source: &str, title: &str) -> bool {
        open_modal(&self.ids, image_source, title) == ModalOutcome::Shown
    }

    /// Explicit teardown for JS callers. Detaches every listener; the instance
    /// is inert afterwards.
    pub fn destroy(&mut self) {
        if let Some(mounted) = self.mounted.take() {
            mounted.listeners.borrow_mut().clear();
        }
    }
}

impl CertificateSlider {
    fn dispatch(&self, input: &SliderInput) {
        if let Some(mounted) = &self.mounted {
            mounted.dispatch(input);
        }
    }
}

fn with_auto_slider(f: impl FnOnce(&CertificateSlider)) {
    AUTO_SLIDER.with(|slot| {
        if let Ok(slot) = slot.try_borrow()
            && let Some(slider) = slot.as_ref()
        {
            f(slider);
        }
    });
}

#[cfg(feature = "auto-mount")]
fn auto_mount() {
    match CertificateSlider::new(None) {
        Ok(slider) => AUTO_SLIDER.with(|slot| {
            *slot.borrow_mut() = Some(slider);
        }),
        Err(err) => warn!(?err, "auto-mount failed"),
    }
}

/// Mount the default slider once the document is parsed.
#[cfg(feature = "auto-mount")]
#[wasm_bindgen(start)]
pub fn start() {
    let Some(document) = web_sys::window().and_then(|w| w.document()) else {
        return;
    };
    if crate::input::document_is_loading(&document.ready_state()) {
        EventListener::once(&document, "DOMContentLoaded", |_| auto_mount()).forget();
    } else {
        auto_mount();
    }
}

#[wasm_bindgen(js_name = previousSlide)]
pub fn previous_slide() {
    with_auto_slider(CertificateSlider::previous_slide);
}

#[wasm_bindgen(js_name = nextSlide)]
pub fn next_slide() {
    with_auto_slider(CertificateSlider::next_slide);
}

#[wasm_bindgen(js_name = goToSlide)]
pub fn go_to_slide(index: i32) {
    with_auto_slider(|slider| slider.go_to_slide(index));
}

/// Works with or without a mounted slider; ids come from the auto-mounted
/// instance when there is one.
#[wasm_bindgen(js_name = openCertificate)]
pub fn open_certificate_global(image_source: &str, title: &str) -> bool {
    let ids = AUTO_SLIDER
        .with(|slot| {
            slot.try_borrow()
                .ok()
                .and_then(|slot| slot.as_ref().map(|s| s.ids.clone()))
        })
        .unwrap_or_default();
    open_modal(&ids, image_source, title) == ModalOutcome::Shown
}
