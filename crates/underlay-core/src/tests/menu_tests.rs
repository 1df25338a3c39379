//! Tests for menu tree construction
//!
//! Tests the builder including:
//! - Order preservation at every nesting level
//! - Required-field validation
//! - Record field precedence (separator, then submenu, then leaf)
//! - The built-in default tree shape

use crate::menu::{MenuNode, MenuRecord, MenuTree};
use crate::Error;

fn leaf_record(label: &str, command: Option<&str>) -> MenuRecord {
    MenuRecord {
        label: Some(label.to_string()),
        command: command.map(ToString::to_string),
        ..MenuRecord::default()
    }
}

#[test]
fn test_build_preserves_top_level_order() {
    let records = vec![
        leaf_record("first", Some("cmd-a")),
        leaf_record("second", None),
        MenuRecord {
            separator: true,
            ..MenuRecord::default()
        },
        leaf_record("third", Some("cmd-b")),
    ];

    let tree = MenuTree::build(&records).unwrap();
    let labels: Vec<Option<&str>> = tree
        .nodes()
        .iter()
        .map(|node| match node {
            MenuNode::Separator => None,
            MenuNode::Leaf { label, .. } | MenuNode::Submenu { label, .. } => Some(label.as_str()),
        })
        .collect();

    assert_eq!(labels, vec![Some("first"), Some("second"), None, Some("third")]);
}

#[test]
fn test_build_preserves_nested_order() {
    let records = vec![MenuRecord {
        label: Some("outer".to_string()),
        submenu: Some(vec![
            leaf_record("z", None),
            leaf_record("a", None),
            MenuRecord {
                label: Some("inner".to_string()),
                submenu: Some(vec![leaf_record("m", None), leaf_record("b", None)]),
                ..MenuRecord::default()
            },
        ]),
        ..MenuRecord::default()
    }];

    let tree = MenuTree::build(&records).unwrap();

    let MenuNode::Submenu { children, .. } = &tree.nodes()[0] else {
        panic!("expected submenu");
    };
    assert!(matches!(&children[0], MenuNode::Leaf { label, .. } if label == "z"));
    assert!(matches!(&children[1], MenuNode::Leaf { label, .. } if label == "a"));

    let MenuNode::Submenu { children: inner, .. } = &children[2] else {
        panic!("expected nested submenu");
    };
    assert!(matches!(&inner[0], MenuNode::Leaf { label, .. } if label == "m"));
    assert!(matches!(&inner[1], MenuNode::Leaf { label, .. } if label == "b"));
}

#[test]
fn test_missing_label_fails() {
    let records = vec![MenuRecord {
        command: Some("kitty".to_string()),
        ..MenuRecord::default()
    }];

    let err = MenuTree::build(&records).unwrap_err();
    assert!(matches!(err, Error::MissingField("label")));
}

#[test]
fn test_empty_label_fails() {
    let records = vec![MenuRecord {
        label: Some(String::new()),
        ..MenuRecord::default()
    }];

    let err = MenuTree::build(&records).unwrap_err();
    assert!(matches!(err, Error::MissingField("label")));
}

#[test]
fn test_missing_label_in_submenu_fails() {
    let records = vec![
        leaf_record("ok", None),
        MenuRecord {
            label: Some("outer".to_string()),
            submenu: Some(vec![MenuRecord::default()]),
            ..MenuRecord::default()
        },
    ];

    // Build fails as a whole; no partial tree escapes
    assert!(MenuTree::build(&records).is_err());
}

#[test]
fn test_separator_needs_no_label() {
    let records = vec![MenuRecord {
        separator: true,
        ..MenuRecord::default()
    }];

    let tree = MenuTree::build(&records).unwrap();
    assert_eq!(tree.nodes(), &[MenuNode::Separator]);
}

#[test]
fn test_separator_wins_over_leaf_fields() {
    let records = vec![MenuRecord {
        separator: true,
        label: Some("ignored".to_string()),
        command: Some("ignored".to_string()),
        ..MenuRecord::default()
    }];

    let tree = MenuTree::build(&records).unwrap();
    assert_eq!(tree.nodes(), &[MenuNode::Separator]);
}

#[test]
fn test_submenu_wins_over_command() {
    let records = vec![MenuRecord {
        label: Some("both".to_string()),
        command: Some("ignored".to_string()),
        submenu: Some(vec![]),
        ..MenuRecord::default()
    }];

    let tree = MenuTree::build(&records).unwrap();
    assert!(matches!(
        &tree.nodes()[0],
        MenuNode::Submenu { label, children } if label == "both" && children.is_empty()
    ));
}

#[test]
fn test_leaf_without_command_is_built() {
    let tree = MenuTree::build(&[leaf_record("inert", None)]).unwrap();

    assert_eq!(
        tree.nodes(),
        &[MenuNode::Leaf {
            label: "inert".to_string(),
            icon: None,
            command: None,
        }]
    );
}

#[test]
fn test_empty_records_build_empty_tree() {
    let tree = MenuTree::build(&[]).unwrap();
    assert!(tree.nodes().is_empty());
}

#[test]
fn test_records_deserialize_from_json() {
    let json = r#"[
        {"label": "Open Terminal", "command": "kitty", "icon": "utilities-terminal"},
        {"separator": true},
        {"label": "Settings", "submenu": [{"label": "Display", "command": "wdisplays"}]}
    ]"#;

    let records: Vec<MenuRecord> = serde_json::from_str(json).unwrap();
    let tree = MenuTree::build(&records).unwrap();

    assert_eq!(tree.nodes().len(), 3);
    assert!(matches!(
        &tree.nodes()[0],
        MenuNode::Leaf { label, icon, command }
            if label == "Open Terminal"
                && icon.as_deref() == Some("utilities-terminal")
                && command.as_deref() == Some("kitty")
    ));
    assert!(matches!(&tree.nodes()[1], MenuNode::Separator));
    assert!(matches!(
        &tree.nodes()[2],
        MenuNode::Submenu { label, children } if label == "Settings" && children.len() == 1
    ));
}

#[test]
fn test_default_tree_shape() {
    let tree = MenuTree::default_tree();
    let nodes = tree.nodes();

    assert_eq!(nodes.len(), 6);
    assert!(matches!(&nodes[0], MenuNode::Leaf { label, .. } if label == "Open Terminal"));
    assert!(matches!(&nodes[1], MenuNode::Leaf { label, .. } if label == "File Manager"));
    assert!(matches!(&nodes[2], MenuNode::Separator));
    assert!(matches!(&nodes[3], MenuNode::Leaf { label, .. } if label == "App Launcher"));
    assert!(matches!(&nodes[4], MenuNode::Separator));
    assert!(matches!(
        &nodes[5],
        MenuNode::Submenu { label, children }
            if label == "Settings"
                && children.len() == 2
                && children.iter().all(|child| matches!(child, MenuNode::Leaf { .. }))
    ));
}

#[test]
fn test_tree_clone_is_equal() {
    let tree = MenuTree::default_tree();
    assert_eq!(tree, tree.clone());
}
