//! Where the forecast cycle reports progress: loading and error indicators,
//! the card container, and the activation control.

use std::cell::{Cell, RefCell};

use crate::render::DisplayCard;

/// Display surface driven by [`crate::ForecastApp`].
///
/// Methods take `&self`; implementations keep their state behind `Cell`s so a
/// cycle can update the surface while the app itself is shared.
pub trait Surface {
    fn show_error(&self, message: &str);
    fn hide_error(&self);

    fn show_loading(&self);
    fn hide_loading(&self);

    fn clear_cards(&self);
    fn push_card(&self, card: &DisplayCard);

    fn control_enabled(&self) -> bool;
    fn set_control_enabled(&self, enabled: bool);
}

/// Surface that only records state. Handy for embedding and tests.
#[derive(Debug)]
pub struct MemorySurface {
    error: RefCell<Option<String>>,
    loading: Cell<bool>,
    cards: RefCell<Vec<DisplayCard>>,
    enabled: Cell<bool>,
}

impl Default for MemorySurface {
    fn default() -> Self {
        Self {
            error: RefCell::new(None),
            loading: Cell::new(false),
            cards: RefCell::new(Vec::new()),
            enabled: Cell::new(true),
        }
    }
}

impl MemorySurface {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn error(&self) -> Option<String> {
        self.error.borrow().clone()
    }

    pub fn is_loading(&self) -> bool {
        self.loading.get()
    }

    pub fn cards(&self) -> Vec<DisplayCard> {
        self.cards.borrow().clone()
    }
}

impl Surface for MemorySurface {
    fn show_error(&self, message: &str) {
        *self.error.borrow_mut() = Some(message.to_owned());
    }

    fn hide_error(&self) {
        self.error.borrow_mut().take();
    }

    fn show_loading(&self) {
        self.loading.set(true);
    }

    fn hide_loading(&self) {
        self.loading.set(false);
    }

    fn clear_cards(&self) {
        self.cards.borrow_mut().clear();
    }

    fn push_card(&self, card: &DisplayCard) {
        self.cards.borrow_mut().push(card.clone());
    }

    fn control_enabled(&self) -> bool {
        self.enabled.get()
    }

    fn set_control_enabled(&self, enabled: bool) {
        self.enabled.set(enabled);
    }
}
