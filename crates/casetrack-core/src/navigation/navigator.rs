//! Navigator trait.

/// How a navigation replaces the current location.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NavigationMode {
    /// Adds a history entry.
    Push,
    /// Replaces the current entry (guard redirects).
    Replace,
    /// Discards all in-memory view state, like assigning `location.href`.
    FullLoad,
}

/// Access to the current location and the ability to move it.
///
/// Implementations decide what "rendering" a location means; the core only
/// reads the path and requests moves.
pub trait Navigator: Send + Sync {
    fn current_path(&self) -> String;

    fn navigate(&self, to: &str, mode: NavigationMode);
}
