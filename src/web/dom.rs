use std::time::Duration;

use wasm_bindgen::prelude::*;
use web_sys::{Document, Element, Window};

use super::timeout_ms;
use crate::error::RotatorError;
use crate::options::MarkupOptions;
use crate::view::WordView;

/// [`WordView`] over the host element's children.
pub struct DomView {
    window: Window,
    document: Document,
    host: Element,
    markup: MarkupOptions,
}

impl DomView {
    /// Bind to `host`, creating word elements with `document`.
    #[must_use]
    pub fn new(
        window: Window,
        document: Document,
        host: Element,
        markup: MarkupOptions,
    ) -> Self {
        Self {
            window,
            document,
            host,
            markup,
        }
    }

    /// The element this view renders into.
    #[must_use]
    pub fn host(&self) -> &Element {
        &self.host
    }
}

impl WordView for DomView {
    type Item = Element;

    fn current(&mut self) -> Option<Element> {
        // Server-rendered markup may omit the active class on the first word.
        self.host
            .query_selector(&self.markup.active_selector())
            .ok()
            .flatten()
            .or_else(|| self.host.first_element_child())
    }

    fn insert_entering(&mut self, word: &str) -> Result<Element, RotatorError> {
        let element = self.document.create_element(&self.markup.word_tag)?;
        element.set_text_content(Some(word));
        element.class_list().add_1(&self.markup.entering_class)?;
        let _node = self.host.append_child(&element)?;
        Ok(element)
    }

    fn activate(&mut self, item: &Element) -> Result<(), RotatorError> {
        // Reading layout flushes the insertion, so the class swap below
        // starts a transition instead of being folded into the first paint.
        let _ = item.client_width();
        let classes = item.class_list();
        classes.remove_1(&self.markup.entering_class)?;
        classes.add_1(&self.markup.active_class)?;
        Ok(())
    }

    fn exit(
        &mut self,
        item: Element,
        remove_after: Duration,
    ) -> Result<(), RotatorError> {
        let classes = item.class_list();
        classes.remove_1(&self.markup.active_class)?;
        classes.add_1(&self.markup.exiting_class)?;

        let remove = Closure::once_into_js(move || item.remove());
        let _id = self
            .window
            .set_timeout_with_callback_and_timeout_and_arguments_0(
                remove.unchecked_ref(),
                timeout_ms(remove_after),
            )?;
        Ok(())
    }

    fn discard(&mut self, item: Element) {
        item.remove();
    }

    fn mark_ready(&mut self) -> Result<(), RotatorError> {
        let root = self
            .document
            .document_element()
            .ok_or(RotatorError::MissingGlobal("document.documentElement"))?;
        root.class_list().add_1(&self.markup.ready_class)?;
        Ok(())
    }
}
