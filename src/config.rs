//! Progress bar configuration.
//!
//! [`BarOptions`] is a builder for the layout and output behaviour of
//! [`log_bar`](crate::progress::log_bar).
//!
//! # Example
//!
//! ```
//! use videoframes::BarOptions;
//!
//! let options = BarOptions::new().with_length(30).with_clear(false);
//! assert_eq!(options.length(), 30);
//! assert!(!options.clear());
//! ```

/// Default number of cells between the brackets.
pub const DEFAULT_BAR_LENGTH: usize = 50;

/// Settings for rendering and emitting a progress line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BarOptions {
    /// Number of bar cells.
    pub(crate) length: usize,
    /// Overwrite the previous line instead of appending a new one.
    pub(crate) clear: bool,
}

impl Default for BarOptions {
    fn default() -> Self {
        Self::new()
    }
}

impl BarOptions {
    /// Defaults: 50 cells, clearing enabled.
    pub fn new() -> Self {
        Self {
            length: DEFAULT_BAR_LENGTH,
            clear: true,
        }
    }

    /// Set the number of bar cells.
    #[must_use]
    pub fn with_length(mut self, length: usize) -> Self {
        self.length = length;
        self
    }

    /// Control whether each line overwrites the previous one.
    ///
    /// Clearing only takes effect on interactive outputs; see
    /// [`TerminalLine`](crate::TerminalLine).
    #[must_use]
    pub fn with_clear(mut self, clear: bool) -> Self {
        self.clear = clear;
        self
    }

    /// Number of bar cells.
    pub fn length(&self) -> usize {
        self.length
    }

    /// Whether clearing is requested.
    pub fn clear(&self) -> bool {
        self.clear
    }
}
