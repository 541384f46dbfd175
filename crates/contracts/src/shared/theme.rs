use crate::enums::ThemeMode;

/// Theme provider capability the header consumes.
///
/// Implementors own the current mode; `set_theme` is expected to apply it
/// to the page as a side effect.
pub trait ThemeSource {
    fn current_theme(&self) -> ThemeMode;

    fn set_theme(&self, mode: ThemeMode);

    /// Switches between light and dark and returns the new mode.
    fn toggle_theme(&self) -> ThemeMode {
        let next = self.current_theme().toggled();
        self.set_theme(next);
        next
    }
}
