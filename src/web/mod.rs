//! Browser bindings (feature `web`).
//!
//! On module start the page is searched for the rotator's container class
//! and, if present, a [`WebRotator`] is mounted on it: words come from the
//! container's words attribute, timers from `window.setTimeout`, and clicks
//! on the container toggle pause/resume.
//!
//! The rotator lives in an `Rc<RefCell<_>>`. The click listener holds the
//! only strong reference and is leaked for the lifetime of the page; timer
//! callbacks hold weak references.

mod dom;
mod timer;

use std::cell::RefCell;
use std::rc::Rc;
use std::time::Duration;

pub use dom::DomView;
pub use timer::{TimerHandle, WindowScheduler};
use wasm_bindgen::prelude::*;
use web_sys::{Document, DocumentReadyState, Element, Window};

use crate::error::RotatorError;
use crate::options::RotatorOptions;
use crate::rotator::WordRotator;
use crate::words::WordList;

/// The rotator as mounted in a browser page.
pub type WebRotator = WordRotator<WindowScheduler, DomView>;

/// wasm module entry point: install logging and mount with default options.
#[wasm_bindgen(start)]
pub fn start() {
    console_error_panic_hook::set_once();
    // Another module on the page may already own the logger.
    let _ = console_log::init_with_level(log::Level::Info);

    if let Err(e) = boot(RotatorOptions::default()) {
        log::error!("word rotator failed to start: {e}");
    }
}

/// Mount now, or on `DOMContentLoaded` if the document is still parsing.
pub fn boot(options: RotatorOptions) -> Result<(), RotatorError> {
    let (_, document) = globals()?;
    if document.ready_state() != DocumentReadyState::Loading {
        return mount(&options).map(|_| ());
    }

    let on_ready = Closure::once_into_js(move || {
        if let Err(e) = mount(&options) {
            log::error!("word rotator failed to mount: {e}");
        }
    });
    document.add_event_listener_with_callback(
        "DOMContentLoaded",
        on_ready.unchecked_ref(),
    )?;
    Ok(())
}

/// Mount a rotator on the first element carrying the container class.
///
/// Returns `Ok(None)` when the page has no such element.
pub fn mount(
    options: &RotatorOptions,
) -> Result<Option<Rc<RefCell<WebRotator>>>, RotatorError> {
    let (window, document) = globals()?;
    let selector = options.markup.container_selector();
    let Some(host) = document.query_selector(&selector)? else {
        log::debug!("no {selector} element on the page, nothing to rotate");
        return Ok(None);
    };

    let raw = host.get_attribute(&options.markup.words_attribute);
    let words = WordList::parse(raw.as_deref());
    let view = DomView::new(
        window.clone(),
        document,
        host.clone(),
        options.markup.clone(),
    );
    let timing = options.timing.clone();
    let rotator = Rc::new_cyclic(|weak| {
        let scheduler = WindowScheduler::new(window, weak.clone());
        RefCell::new(WordRotator::new(words, timing, scheduler, view))
    });

    let state = rotator.borrow_mut().start()?;
    register_click(&host, &rotator)?;
    log::debug!("word rotator mounted on {selector}, {state:?}");
    Ok(Some(rotator))
}

/// Toggle pause/resume on clicks, suppressing the click's default action.
fn register_click(
    host: &Element,
    rotator: &Rc<RefCell<WebRotator>>,
) -> Result<(), RotatorError> {
    let rotator = Rc::clone(rotator);
    let on_click = Closure::<dyn FnMut(web_sys::Event)>::new(
        move |evt: web_sys::Event| {
            evt.prevent_default();
            let result = rotator.borrow_mut().toggle_animation();
            match result {
                Ok(state) => log::debug!("word rotator toggled to {state:?}"),
                Err(e) => log::error!("word rotator toggle failed: {e}"),
            }
        },
    );
    host.add_event_listener_with_callback(
        "click",
        on_click.as_ref().unchecked_ref(),
    )?;
    on_click.forget();
    Ok(())
}

fn globals() -> Result<(Window, Document), RotatorError> {
    let window =
        web_sys::window().ok_or(RotatorError::MissingGlobal("window"))?;
    let document = window
        .document()
        .ok_or(RotatorError::MissingGlobal("document"))?;
    Ok((window, document))
}

/// `setTimeout` takes whole milliseconds as an i32.
fn timeout_ms(delay: Duration) -> i32 {
    i32::try_from(delay.as_millis()).unwrap_or(i32::MAX)
}

#[cfg(all(test, target_arch = "wasm32"))]
mod tests {
    use wasm_bindgen_test::{wasm_bindgen_test, wasm_bindgen_test_configure};
    use web_sys::{Event, EventInit};

    use super::*;
    use crate::rotator::RotatorState;

    wasm_bindgen_test_configure!(run_in_browser);

    /// Resolve after `ms` milliseconds of browser time.
    pub(super) async fn sleep(ms: i32) {
        let promise = js_sys::Promise::new(&mut |resolve, _reject| {
            let (window, _) = globals().unwrap();
            let _ = window
                .set_timeout_with_callback_and_timeout_and_arguments_0(
                    &resolve, ms,
                )
                .unwrap();
        });
        let _ = wasm_bindgen_futures::JsFuture::from(promise).await.unwrap();
    }

    /// Default options, but mounted on a container class of our own so
    /// tests sharing the page never pick up each other's hosts.
    fn options_for(container_class: &str) -> RotatorOptions {
        let mut options = RotatorOptions::default();
        options.markup.container_class = container_class.to_owned();
        options
    }

    fn append_host(container_class: &str, words: &str) -> Element {
        let (_, document) = globals().unwrap();
        let host = document.create_element("a").unwrap();
        host.set_class_name(container_class);
        host.set_attribute("href", "#elsewhere").unwrap();
        host.set_attribute("data-words", words).unwrap();
        host.set_inner_html(r#"<span class="is-active">Alpha</span>"#);
        let _ = document.body().unwrap().append_child(&host).unwrap();
        host
    }

    fn cancelable_click() -> Event {
        let init = EventInit::new();
        init.set_cancelable(true);
        Event::new_with_event_init_dict("click", &init).unwrap()
    }

    #[wasm_bindgen_test]
    fn mount_without_a_host_does_nothing() {
        let mounted = mount(&options_for("word-rotator-absent")).unwrap();
        assert!(mounted.is_none());
    }

    #[wasm_bindgen_test]
    fn mount_marks_the_document_ready() {
        let (_, document) = globals().unwrap();
        let root = document.document_element().unwrap();
        root.class_list().remove_1("is-ready").unwrap();

        let host = append_host("word-rotator-ready", "Alpha,Beta,Gamma");
        let rotator =
            mount(&options_for("word-rotator-ready")).unwrap().unwrap();

        assert!(root.class_list().contains("is-ready"));
        assert_eq!(rotator.borrow().state(), RotatorState::Running);
        assert_eq!(rotator.borrow().words().first(), Some("Alpha"));
        assert_eq!(rotator.borrow().words().len(), 3);

        rotator.borrow_mut().pause();
        host.remove();
    }

    #[wasm_bindgen_test]
    fn click_is_cancelled_and_toggles_pause() {
        let host = append_host("word-rotator-click", "Alpha,Beta");
        let rotator =
            mount(&options_for("word-rotator-click")).unwrap().unwrap();

        let click = cancelable_click();
        let not_cancelled = host.dispatch_event(&click).unwrap();
        assert!(!not_cancelled);
        assert!(click.default_prevented());
        assert_eq!(rotator.borrow().state(), RotatorState::Paused);

        let _ = host.dispatch_event(&cancelable_click()).unwrap();
        assert_eq!(rotator.borrow().state(), RotatorState::Running);

        rotator.borrow_mut().pause();
        host.remove();
    }

    #[wasm_bindgen_test]
    async fn cancelled_timer_never_rotates() {
        let host = append_host("word-rotator-paused", "Alpha,Beta");
        let mut options = options_for("word-rotator-paused");
        options.timing.interval_ms = 20;
        let rotator = mount(&options).unwrap().unwrap();

        rotator.borrow_mut().pause();
        sleep(80).await;

        assert_eq!(rotator.borrow().current_index(), 0);
        assert_eq!(host.child_element_count(), 1);
        assert_eq!(host.text_content().as_deref(), Some("Alpha"));
        host.remove();
    }

    #[wasm_bindgen_test]
    async fn fired_timer_rotates_and_retires_the_old_word() {
        let host = append_host("word-rotator-fire", "Alpha,Beta");
        let mut options = options_for("word-rotator-fire");
        options.timing.interval_ms = 20;
        options.timing.transition_ms = 5;
        let rotator = mount(&options).unwrap().unwrap();

        // The rotation is due at 20ms; the next one no earlier than 40ms.
        sleep(30).await;
        rotator.borrow_mut().pause();
        assert_eq!(rotator.borrow().current_index(), 1);

        sleep(40).await;
        assert_eq!(host.child_element_count(), 1);
        let shown = host.first_element_child().unwrap();
        assert_eq!(shown.text_content().as_deref(), Some("Beta"));
        assert_eq!(shown.class_name(), "is-active");
        host.remove();
    }
}
