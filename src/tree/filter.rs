//! Ignore rules applied to every directory listing.

/// Directory names skipped entirely (no line, no recursion).
pub const IGNORED_DIRS: &[&str] = &["node_modules", ".next", ".git", ".vscode", "__pycache__"];

/// File name suffixes that hide a file.
pub const IGNORED_FILE_EXTENSIONS: &[&str] = &[".log", ".lock"];

/// File name prefixes that hide a file.
pub const IGNORED_FILE_PREFIXES: &[&str] = &[".env"];

/// The fixed sets of names a traversal leaves out.
///
/// Matching is case-sensitive plain string comparison: directory names must
/// match exactly, file names are checked by suffix and prefix. Directory
/// rules never apply to files and vice versa.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct IgnoreRules {
    pub dirs: &'static [&'static str],
    pub file_extensions: &'static [&'static str],
    pub file_prefixes: &'static [&'static str],
}

impl Default for IgnoreRules {
    fn default() -> Self {
        Self {
            dirs: IGNORED_DIRS,
            file_extensions: IGNORED_FILE_EXTENSIONS,
            file_prefixes: IGNORED_FILE_PREFIXES,
        }
    }
}

impl IgnoreRules {
    pub fn new(
        dirs: &'static [&'static str],
        file_extensions: &'static [&'static str],
        file_prefixes: &'static [&'static str],
    ) -> Self {
        Self {
            dirs,
            file_extensions,
            file_prefixes,
        }
    }

    /// Rules that keep everything.
    pub fn none() -> Self {
        Self::new(&[], &[], &[])
    }

    /// Returns `true` if the entry must be left out of the output and not descended into.
    pub fn should_ignore(&self, name: &str, is_dir: bool) -> bool {
        if is_dir {
            return self.dirs.contains(&name);
        }

        self.file_extensions.iter().any(|ext| name.ends_with(ext))
            || self.file_prefixes.iter().any(|prefix| name.starts_with(prefix))
    }
}
