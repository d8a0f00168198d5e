//! Load state shared by the list screens.
//!
//! DESIGN
//! ======
//! Each screen reads its table once on mount and re-reads the whole table
//! after every mutation. There is no deduplication: a second load started
//! before the first finishes simply overwrites it when it lands.

#[cfg(test)]
#[path = "list_test.rs"]
mod list_test;

use gateway::GatewayError;

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ListState<T> {
    pub items: Vec<T>,
    pub loading: bool,
}

impl<T> Default for ListState<T> {
    /// Screens mount in the loading state until the first read lands.
    fn default() -> Self {
        Self { items: Vec::new(), loading: true }
    }
}

impl<T> ListState<T> {
    pub fn begin_load(&mut self) {
        self.loading = true;
    }

    /// Apply a finished read. Loading always clears; on failure the
    /// previous items stay and the error is handed back for the toast.
    ///
    /// # Errors
    ///
    /// Returns the read's error unchanged.
    pub fn finish_load(&mut self, result: Result<Vec<T>, GatewayError>) -> Result<(), GatewayError> {
        self.loading = false;
        self.items = result?;
        Ok(())
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}
