//! FAQ accordion with at most one open item

use tracing::debug;

use crate::ui::View;
use crate::ui::elements::{CLASS_ACTIVE, faq_answer, faq_question};

#[derive(Debug, Clone, Default)]
pub struct Accordion {
    items: Vec<String>,
    open: Option<usize>,
}

impl Accordion {
    pub fn new(items: &[String]) -> Self {
        Self {
            items: items.to_vec(),
            open: None,
        }
    }

    /// Id of the open item, if any
    pub fn open_item(&self) -> Option<&str> {
        self.open.map(|index| self.items[index].as_str())
    }

    /// Toggles the clicked item and closes every other one
    ///
    /// Answers missing from the page are skipped silently.
    pub fn question_clicked(&mut self, view: &mut dyn View, faq_id: &str) {
        let Some(index) = self.items.iter().position(|item| item == faq_id) else {
            return;
        };

        self.open = if self.open == Some(index) {
            None
        } else {
            Some(index)
        };

        for (i, item) in self.items.iter().enumerate() {
            let active = self.open == Some(i);
            view.set_class(&faq_question(item), CLASS_ACTIVE, active);
            let answer = faq_answer(item);
            if view.has_element(&answer) {
                view.set_class(&answer, CLASS_ACTIVE, active);
            }
        }

        debug!(faq_id, open = ?self.open_item(), "faq toggled");
    }
}
