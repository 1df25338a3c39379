//! Pointer-button dispatch for the desktop surface.
//!
//! Two observable input events, both delivered only while the pointer is
//! over the surface: primary press claims focus, secondary press opens the
//! action menu at the pointer position. Every other button is left
//! unhandled and propagates per platform default.

use gtk4::gdk;

/// Action resolved from a pointer-button press.
#[derive(Debug, Clone, Copy, PartialEq)]
pub(crate) enum InputAction {
    ClaimFocus,
    PopupMenu { x: f64, y: f64 },
}

/// Map a button press to an action, or `None` when the event must
/// propagate unhandled.
pub(crate) fn dispatch(button: u32, x: f64, y: f64) -> Option<InputAction> {
    match button {
        gdk::BUTTON_PRIMARY => Some(InputAction::ClaimFocus),
        gdk::BUTTON_SECONDARY => Some(InputAction::PopupMenu { x, y }),
        _ => None,
    }
}

/// Routes resolved actions to the surface controller's callbacks.
pub(crate) struct InputDispatcher {
    on_claim_focus: Box<dyn Fn()>,
    on_popup_menu: Box<dyn Fn(f64, f64)>,
}

impl InputDispatcher {
    pub(crate) fn new(
        on_claim_focus: impl Fn() + 'static,
        on_popup_menu: impl Fn(f64, f64) + 'static,
    ) -> Self {
        Self {
            on_claim_focus: Box::new(on_claim_focus),
            on_popup_menu: Box::new(on_popup_menu),
        }
    }

    /// Handle one press. Returns `true` when the event was consumed and
    /// must not propagate further.
    pub(crate) fn handle_press(&self, button: u32, x: f64, y: f64) -> bool {
        match dispatch(button, x, y) {
            Some(InputAction::ClaimFocus) => {
                (self.on_claim_focus)();
                true
            }
            Some(InputAction::PopupMenu { x, y }) => {
                (self.on_popup_menu)(x, y);
                true
            }
            None => false,
        }
    }
}
