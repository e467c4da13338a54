//! Active quote state
//!
//! Holds the quote currently selected for execution.

use serde::Serialize;

use crate::types::ApiQuote;

/// Result of clicking a quote card
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum SelectionOutcome {
    /// Missing or errored quotes cannot be selected
    Ignored,
    Activated,
    /// A non-best active quote was clicked again
    Cleared,
    /// The best quote stays selected once active
    Unchanged,
}

#[derive(Debug, Clone, Default)]
pub struct TradeQuoteSlice {
    active_quote: Option<ApiQuote>,
}

impl TradeQuoteSlice {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn active_quote(&self) -> Option<&ApiQuote> {
        self.active_quote.as_ref()
    }

    pub fn is_active(&self, quote_id: &str) -> bool {
        self.active_quote
            .as_ref()
            .is_some_and(|quote| quote.id == quote_id)
    }

    pub fn set_active_quote(&mut self, quote: Option<ApiQuote>) {
        self.active_quote = quote;
    }

    /// Toggle selection of `quote`.
    ///
    /// Selecting an inactive quote makes it active. Selecting the active quote
    /// again clears it unless it is the best quote, which always stays
    /// re-selectable.
    pub fn select_quote(&mut self, quote: &ApiQuote, is_best: bool) -> SelectionOutcome {
        if !quote.is_valid() {
            return SelectionOutcome::Ignored;
        }

        if !self.is_active(&quote.id) {
            self.active_quote = Some(quote.clone());
            SelectionOutcome::Activated
        } else if !is_best {
            self.active_quote = None;
            SelectionOutcome::Cleared
        } else {
            SelectionOutcome::Unchanged
        }
    }
}
