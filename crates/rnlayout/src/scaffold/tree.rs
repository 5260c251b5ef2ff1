//! The canonical scaffold tree.
//!
//! The starter layout is a fixed, static list of entries; nothing here is
//! computed at runtime.

/// The kind of a scaffold entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EntryKind {
    /// A directory.
    Directory,
    /// An empty placeholder file.
    Placeholder,
}

/// One entry of the canonical tree.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ScaffoldEntry {
    /// Path relative to the scaffold target.
    pub path: &'static str,
    /// Whether this entry is a directory or a placeholder file.
    pub kind: EntryKind,
}

/// The canonical starter tree, parents before children.
///
/// Placeholder `index.js` files mark the public entry points of the code
/// directories; `.gitkeep` markers keep the otherwise-empty directories
/// present in version control.
pub static ENTRIES: &[ScaffoldEntry] = &[
    ScaffoldEntry {
        path: "__tests__",
        kind: EntryKind::Directory,
    },
    ScaffoldEntry {
        path: "assets",
        kind: EntryKind::Directory,
    },
    ScaffoldEntry {
        path: "assets/images",
        kind: EntryKind::Directory,
    },
    ScaffoldEntry {
        path: "src",
        kind: EntryKind::Directory,
    },
    ScaffoldEntry {
        path: "src/lib",
        kind: EntryKind::Directory,
    },
    ScaffoldEntry {
        path: "src/components",
        kind: EntryKind::Directory,
    },
    ScaffoldEntry {
        path: "src/components/common",
        kind: EntryKind::Directory,
    },
    ScaffoldEntry {
        path: "__tests__/.gitkeep",
        kind: EntryKind::Placeholder,
    },
    ScaffoldEntry {
        path: "assets/images/.gitkeep",
        kind: EntryKind::Placeholder,
    },
    ScaffoldEntry {
        path: "src/lib/index.js",
        kind: EntryKind::Placeholder,
    },
    ScaffoldEntry {
        path: "src/components/index.js",
        kind: EntryKind::Placeholder,
    },
    ScaffoldEntry {
        path: "src/components/common/index.js",
        kind: EntryKind::Placeholder,
    },
];
