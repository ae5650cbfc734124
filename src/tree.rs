//! Tree rendering of generated layouts for human display.

use crate::fs::Action;
use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

#[derive(Default)]
struct Node {
    children: BTreeMap<String, Node>,
}

/// Renders the entries of `paths` that live under `top` as a tree.
///
/// Paths are relative to the project root; `top` is the heading line.
/// Siblings are sorted by name.
pub fn render(top: &Path, paths: &[PathBuf]) -> String {
    let mut tree = Node::default();
    for path in paths {
        let Ok(rel) = path.strip_prefix(top) else {
            continue;
        };
        let mut node = &mut tree;
        for component in rel.components() {
            node = node
                .children
                .entry(component.as_os_str().to_string_lossy().into_owned())
                .or_default();
        }
    }

    let mut out = format!("{}\n", top.to_string_lossy().replace('\\', "/"));
    write_children(&tree, "", &mut out);
    out
}

fn write_children(node: &Node, prefix: &str, out: &mut String) {
    let count = node.children.len();
    for (idx, (name, child)) in node.children.iter().enumerate() {
        let last = idx + 1 == count;
        out.push_str(prefix);
        out.push_str(if last { "└── " } else { "├── " });
        out.push_str(name);
        out.push('\n');

        let next = format!("{}{}", prefix, if last { "    " } else { "│   " });
        write_children(child, &next, out);
    }
}

/// Lists everything under `root/top`, relative to `root`.
///
/// Hidden entries, ignored files, and `__pycache__` directories are skipped.
pub fn collect_from_disk(root: &Path, top: &Path) -> Vec<PathBuf> {
    let walker = ignore::WalkBuilder::new(root.join(top))
        .hidden(true)
        .git_ignore(true)
        .git_exclude(true)
        .filter_entry(|e| e.file_name().to_str() != Some("__pycache__"))
        .build();

    let mut paths = Vec::new();
    for entry in walker {
        let entry = match entry {
            Ok(e) => e,
            Err(e) => {
                log::debug!("Skipping entry due to error: {}", e);
                continue;
            }
        };

        if entry.depth() == 0 {
            continue;
        }

        if let Some(rel) = pathdiff::diff_paths(entry.path(), root) {
            paths.push(rel);
        }
    }

    paths
}

/// Paths created (or, in dry-run, planned) by `actions`.
pub fn collect_from_actions(actions: &[Action]) -> Vec<PathBuf> {
    actions
        .iter()
        .filter_map(|a| match a {
            Action::CreateDir(p) | Action::CreateFile(p) => Some(p.clone()),
            _ => None,
        })
        .collect()
}
