use crate::ui::mvi::Intent;
use crate::ui::view::mode::ViewMode;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NavigationIntent {
    /// Jump straight to a screen (nav key or call-to-action).
    Navigate(ViewMode),
    /// Tab: next screen in header order.
    Next,
    /// Shift+Tab: previous screen in header order.
    Previous,
}

impl Intent for NavigationIntent {}
