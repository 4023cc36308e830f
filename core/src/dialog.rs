// SPDX-FileCopyrightText: 2025-2026 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

/// A confirmation step in front of an action.
///
/// The dialog is either closed or open and bound to a target. The action only
/// runs through [`ConfirmDialog::confirm_with`], which closes the dialog and
/// hands the target to the action exactly once. Cancelling or dismissing never
/// runs it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConfirmDialog<T> {
    target: Option<T>,
}

impl<T> ConfirmDialog<T> {
    /// Creates a closed dialog.
    pub const fn new() -> Self {
        Self { target: None }
    }

    /// Opens the dialog bound to `target`, replacing any previous target.
    pub fn open(&mut self, target: T) {
        self.target = Some(target);
    }

    /// Whether the dialog is open.
    pub const fn is_open(&self) -> bool {
        self.target.is_some()
    }

    /// The target the dialog is bound to, if open.
    pub const fn target(&self) -> Option<&T> {
        self.target.as_ref()
    }

    /// Closes the dialog without running the action.
    pub fn cancel(&mut self) {
        self.target = None;
    }

    /// Closes the dialog from outside its buttons (Esc or a click beside it).
    pub fn dismiss(&mut self) {
        self.cancel();
    }

    /// Closes the dialog and runs `action` with the bound target.
    ///
    /// Returns `None` without running `action` if the dialog is closed.
    pub fn confirm_with<R>(&mut self, action: impl FnOnce(T) -> R) -> Option<R> {
        self.target.take().map(action)
    }
}

impl<T> Default for ConfirmDialog<T> {
    fn default() -> Self {
        Self::new()
    }
}
