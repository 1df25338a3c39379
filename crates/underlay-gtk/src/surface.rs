//! Layer-shell surface controller.
//!
//! Owns the invisible full-screen window on `Layer::Bottom`: anchored to
//! all four screen edges, reserving no space, accepting keyboard focus
//! on-demand. The paint contract is a fully transparent frame on every
//! damage event; presenting the window claims focus, and the compositor's
//! single-focus invariant unfocuses whichever window held it.

use crate::input::InputDispatcher;
use crate::menu_model;
use gtk4::gdk;
use gtk4::prelude::*;
use gtk4_layer_shell::{Edge, KeyboardMode, Layer, LayerShell};
use std::cell::RefCell;
use std::rc::Rc;
use tracing::debug;
use underlay_core::{CommandLauncher, MenuTree};

/// Bookkeeping for the at-most-one-open-menu rule.
///
/// `open` closes the currently open entry through the `close` callback
/// before the new entry is recorded, so at no point are two menus open.
pub(crate) struct MenuStack<T> {
    current: RefCell<Option<T>>,
}

impl<T> MenuStack<T> {
    pub(crate) fn new() -> Self {
        Self {
            current: RefCell::new(None),
        }
    }

    pub(crate) fn open(&self, next: T, close: impl FnOnce(T)) {
        let previous = self.current.borrow_mut().take();
        if let Some(previous) = previous {
            close(previous);
        }
        *self.current.borrow_mut() = Some(next);
    }

    #[cfg(test)]
    fn is_open(&self) -> bool {
        self.current.borrow().is_some()
    }
}

pub(crate) struct DesktopSurface {
    window: gtk4::Window,
}

impl DesktopSurface {
    pub(crate) fn new(app: &gtk4::Application, tree: &MenuTree) -> Self {
        let window = gtk4::Window::builder()
            .application(app)
            .title("Underlay")
            .decorated(false)
            .build();

        window.init_layer_shell();
        window.set_layer(Layer::Bottom);
        window.set_keyboard_mode(KeyboardMode::OnDemand);
        window.set_namespace(Some("underlay"));

        window.set_anchor(Edge::Top, true);
        window.set_anchor(Edge::Left, true);
        window.set_anchor(Edge::Right, true);
        window.set_anchor(Edge::Bottom, true);

        // Reserve no space; normal windows may overlap the surface
        window.set_exclusive_zone(-1);

        // DrawingArea properly fills space and receives input events.
        // The draw func runs on every damage event and must leave the
        // surface fully transparent: Source operator, alpha 0 everywhere.
        let content = gtk4::DrawingArea::builder()
            .css_classes(["desktop-surface"])
            .hexpand(true)
            .vexpand(true)
            .build();
        content.set_draw_func(|_, cr, _, _| {
            cr.set_source_rgba(0.0, 0.0, 0.0, 0.0);
            cr.set_operator(gtk4::cairo::Operator::Source);
            let _ = cr.paint();
        });
        window.set_child(Some(&content));

        let (model, actions) = menu_model::build_menu_model(tree);
        let group = menu_model::build_action_group(actions, CommandLauncher::new());
        window.insert_action_group(menu_model::ACTION_GROUP, Some(&group));

        let open_menu: Rc<MenuStack<gtk4::PopoverMenu>> = Rc::new(MenuStack::new());

        let window_for_focus = window.clone();
        let content_for_menu = content.clone();
        let dispatcher = InputDispatcher::new(
            move || {
                debug!("Claiming focus");
                window_for_focus.present();
            },
            move |x, y| {
                debug!("Opening menu at ({x}, {y})");
                popup_menu(&content_for_menu, &model, &open_menu, x, y);
            },
        );

        // Button 0 listens to every button; dispatch decides what is handled
        let gesture = gtk4::GestureClick::new();
        gesture.set_button(0);
        gesture.connect_pressed(move |gesture, _, x, y| {
            if dispatcher.handle_press(gesture.current_button(), x, y) {
                gesture.set_state(gtk4::EventSequenceState::Claimed);
            }
        });
        content.add_controller(gesture);

        Self { window }
    }

    /// Map the surface and request on-demand keyboard focus. Idempotent.
    pub(crate) fn present(&self) {
        self.window.present();
    }
}

/// Open the action menu at the pointer position. Menu stacks are exclusive:
/// an already-open popup is closed before the new one appears.
#[allow(clippy::cast_possible_truncation)] // pointer coordinates fit in i32
fn popup_menu(
    parent: &gtk4::DrawingArea,
    model: &gio::Menu,
    open_menu: &Rc<MenuStack<gtk4::PopoverMenu>>,
    x: f64,
    y: f64,
) {
    let popover = gtk4::PopoverMenu::from_model(Some(model));
    popover.set_parent(parent);
    popover.set_has_arrow(false);
    popover.set_pointing_to(Some(&gdk::Rectangle::new(x as i32, y as i32, 1, 1)));

    open_menu.open(popover.clone(), |previous| {
        previous.popdown();
        previous.unparent();
    });
    popover.popup();
}
