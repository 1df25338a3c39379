//! Menu tree data model and builder.
//!
//! Configuration arrives as a list of loosely-shaped records (`MenuRecord`);
//! the builder converts them into a closed tagged variant (`MenuNode`) so
//! the frontend can match exhaustively instead of probing optional fields.
//! A tree is immutable after construction and rebuilt wholesale when the
//! configuration changes.

use crate::{Error, Result};
use serde::Deserialize;

/// One raw configuration record, as authored in `config.json`.
///
/// Field precedence when converting to a [`MenuNode`]: a `separator` marker
/// wins over everything, then `submenu`, then the leaf fields.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct MenuRecord {
    pub separator: bool,
    pub label: Option<String>,
    pub icon: Option<String>,
    pub command: Option<String>,
    pub submenu: Option<Vec<MenuRecord>>,
}

/// One node of the action menu.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MenuNode {
    /// Visual divider, never activatable.
    Separator,

    /// Launchable entry. A leaf without a command is inert: it can be
    /// activated but spawns nothing.
    Leaf {
        label: String,
        icon: Option<String>,
        command: Option<String>,
    },

    /// Nested menu. Reveals its children, never runs a command itself.
    Submenu {
        label: String,
        children: Vec<MenuNode>,
    },
}

/// The immutable action menu, built once from configuration records.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MenuTree {
    root: Vec<MenuNode>,
}

impl MenuTree {
    /// Build a tree from configuration records, preserving record order at
    /// every nesting level.
    ///
    /// # Errors
    ///
    /// Returns [`Error::MissingField`] when a non-separator record has no
    /// `label` (or an empty one). No partial tree is produced.
    pub fn build(records: &[MenuRecord]) -> Result<Self> {
        Ok(Self {
            root: build_nodes(records)?,
        })
    }

    /// The ordered top-level nodes.
    #[must_use]
    pub fn nodes(&self) -> &[MenuNode] {
        &self.root
    }

    /// The built-in fallback tree, used when no configuration file exists
    /// or the user's file cannot be loaded.
    ///
    /// # Panics
    ///
    /// Panics if the built-in menu records are invalid, which would be a
    /// bug in this crate.
    #[must_use]
    pub fn default_tree() -> Self {
        Self::build(&crate::config::default_menu_items())
            .expect("built-in menu records are valid")
    }
}

fn build_nodes(records: &[MenuRecord]) -> Result<Vec<MenuNode>> {
    records.iter().map(build_node).collect()
}

fn build_node(record: &MenuRecord) -> Result<MenuNode> {
    if record.separator {
        return Ok(MenuNode::Separator);
    }

    let label = record
        .label
        .as_deref()
        .filter(|label| !label.is_empty())
        .ok_or(Error::MissingField("label"))?;

    if let Some(children) = &record.submenu {
        return Ok(MenuNode::Submenu {
            label: label.to_string(),
            children: build_nodes(children)?,
        });
    }

    Ok(MenuNode::Leaf {
        label: label.to_string(),
        icon: record.icon.clone(),
        command: record.command.clone(),
    })
}
