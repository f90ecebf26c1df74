//! Transient UI state: the hovered card and the per-card dialog flags.
//!
//! [`PageState`] is a `Copy` handle over reactive signals, so components can
//! capture it in event handlers freely. Nothing here outlives the page
//! session.

use leptos::html::Article;
use leptos::prelude::*;

use crate::catalog::FEATURE_COUNT;

/// Reactive state shared by the feature grid and its dialogs.
#[derive(Clone, Copy)]
pub struct PageState {
    hovered: RwSignal<Option<usize>>,
    dialogs: [RwSignal<bool>; FEATURE_COUNT],
    // Cards that open the dialogs; focus returns here on close
    cards: [NodeRef<Article>; FEATURE_COUNT],
}

impl PageState {
    /// Fresh state: nothing hovered, every dialog closed.
    ///
    /// Signals belong to the current reactive owner, so create the state
    /// inside the owner that renders the page.
    pub fn new() -> Self {
        Self {
            hovered: RwSignal::new(None),
            dialogs: std::array::from_fn(|_| RwSignal::new(false)),
            cards: std::array::from_fn(|_| NodeRef::new()),
        }
    }

    /// Pointer entered card `index`.
    pub fn hover_enter(&self, index: usize) {
        if index >= FEATURE_COUNT {
            tracing::warn!(index, "hover on unknown feature card");
            return;
        }
        self.hovered.set(Some(index));
    }

    /// Pointer left a card. Clears the hover regardless of which card it was.
    pub fn hover_leave(&self) {
        self.hovered.set(None);
    }

    /// Index of the hovered card, if any (tracked).
    pub fn hovered(&self) -> Option<usize> {
        self.hovered.get()
    }

    /// Whether card `index` is the hovered one (tracked).
    pub fn is_hovered(&self, index: usize) -> bool {
        self.hovered.get() == Some(index)
    }

    /// Opens the detail dialog of card `index`.
    pub fn open_dialog(&self, index: usize) {
        match self.dialogs.get(index) {
            Some(open) => {
                tracing::debug!(index, "feature dialog opened");
                open.set(true);
            }
            None => tracing::warn!(index, "open on unknown feature dialog"),
        }
    }

    /// Closes the detail dialog of card `index` and moves focus back to the
    /// card, when it is mounted.
    pub fn close_dialog(&self, index: usize) {
        let Some(open) = self.dialogs.get(index) else {
            return;
        };
        if !open.get_untracked() {
            return;
        }
        open.set(false);
        tracing::debug!(index, "feature dialog closed");

        if let Some(card) = self.cards[index].get_untracked() {
            if let Err(err) = card.focus() {
                tracing::warn!(index, ?err, "cannot return focus to feature card");
            }
        }
    }

    /// Node refs of the cards, in grid order.
    pub fn card_refs(&self) -> [NodeRef<Article>; FEATURE_COUNT] {
        self.cards
    }

    /// Whether the dialog of card `index` is open (tracked).
    pub fn is_dialog_open(&self, index: usize) -> bool {
        self.dialogs.get(index).is_some_and(|open| open.get())
    }
}

impl Default for PageState {
    fn default() -> Self {
        Self::new()
    }
}
