use crate::constants::{BUTTON_STOP_CLASS, HIGHLIGHT_CLASS, SPEECH_SELECTOR};
use crate::core::{BlockId, Presentation};
use crate::dom;
use web_sys as web;

/// The speech toggle and the four text regions it highlights.
/// Missing elements are logged once and then skipped.
pub struct DomPresentation {
    button: Option<web::Element>,
    blocks: [Option<web::Element>; 4],
}

impl DomPresentation {
    pub fn new(document: &web::Document) -> Self {
        let lookup = |selector: &str| {
            let el = dom::query(document, selector);
            if el.is_none() {
                log::warn!("[narration] missing element {}", selector);
            }
            el
        };
        Self {
            button: lookup(SPEECH_SELECTOR),
            blocks: BlockId::ALL.map(|b| lookup(b.selector())),
        }
    }

    fn block(&self, block: BlockId) -> Option<&web::Element> {
        let i = BlockId::ALL.iter().position(|b| *b == block)?;
        self.blocks[i].as_ref()
    }
}

impl Presentation for DomPresentation {
    fn set_highlighted(&mut self, block: BlockId, highlighted: bool) {
        if let Some(el) = self.block(block) {
            dom::set_class(el, HIGHLIGHT_CLASS, highlighted);
        }
    }

    fn set_toggle_label(&mut self, text: &str) {
        if let Some(el) = &self.button {
            el.set_text_content(Some(text));
        }
    }

    fn set_toggle_visual_state(&mut self, active: bool) {
        if let Some(el) = &self.button {
            dom::set_class(el, BUTTON_STOP_CLASS, active);
        }
    }
}
