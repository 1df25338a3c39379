//! GTK menu model construction from a [`MenuTree`].
//!
//! Separators become `gio::Menu` sections, submenus nest, and every leaf is
//! registered as a `gio` action in the [`ACTION_GROUP`] group so the item
//! stays activatable. Activating a leaf with a command hands it to the
//! launcher; a command-less leaf activates as a no-op.

use gio::prelude::*;
use underlay_core::{CommandLauncher, MenuNode, MenuTree};

pub(crate) const ACTION_GROUP: &str = "menu";

/// A registered leaf action: stable action name plus the command line it
/// runs, if any.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct MenuAction {
    pub(crate) name: String,
    pub(crate) command: Option<String>,
}

/// Build the menu model and the ordered list of leaf actions it refers to.
pub(crate) fn build_menu_model(tree: &MenuTree) -> (gio::Menu, Vec<MenuAction>) {
    let mut actions = Vec::new();
    let menu = build_level(tree.nodes(), &mut actions);
    (menu, actions)
}

fn build_level(nodes: &[MenuNode], actions: &mut Vec<MenuAction>) -> gio::Menu {
    let root = gio::Menu::new();
    let mut section = gio::Menu::new();

    for node in nodes {
        match node {
            MenuNode::Separator => {
                root.append_section(None, &section);
                section = gio::Menu::new();
            }
            MenuNode::Leaf {
                label,
                icon,
                command,
            } => {
                let name = format!("item-{}", actions.len());
                let item =
                    gio::MenuItem::new(Some(label), Some(&format!("{ACTION_GROUP}.{name}")));
                if let Some(icon) = icon {
                    item.set_icon(&gio::ThemedIcon::new(icon));
                }
                section.append_item(&item);
                actions.push(MenuAction {
                    name,
                    command: command.clone(),
                });
            }
            MenuNode::Submenu { label, children } => {
                let submenu = build_level(children, actions);
                section.append_submenu(Some(label), &submenu);
            }
        }
    }

    root.append_section(None, &section);
    root
}

/// Wire the leaf actions to the launcher.
pub(crate) fn build_action_group(
    actions: Vec<MenuAction>,
    launcher: CommandLauncher,
) -> gio::SimpleActionGroup {
    let group = gio::SimpleActionGroup::new();

    for MenuAction { name, command } in actions {
        let action = gio::SimpleAction::new(&name, None);
        action.connect_activate(move |_, _| {
            // Inert leaf: activation without a command spawns nothing
            if let Some(command) = &command {
                launcher.launch(command);
            }
        });
        group.add_action(&action);
    }

    group
}
