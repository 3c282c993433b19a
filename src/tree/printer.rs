use std::io::Write;
use std::path::Path;

use crate::error::Result;

use super::entry::{list_dir, Entry};
use super::filter::IgnoreRules;
use super::prefix::{Connector, Prefix};

/// Depth-first tree printer.
///
/// Lines are written as soon as each entry is visited, so when a
/// subdirectory cannot be read everything printed before it stays printed.
#[derive(Debug, Clone, Default)]
pub struct TreePrinter {
    rules: IgnoreRules,
}

impl TreePrinter {
    pub fn new(rules: IgnoreRules) -> Self {
        Self { rules }
    }

    /// Surviving children of `dir`, sorted by raw file name.
    pub fn visible_entries(&self, dir: &Path) -> Result<Vec<Entry>> {
        let listed = list_dir(dir)?;
        let total = listed.len();

        let mut entries: Vec<Entry> = listed
            .into_iter()
            .filter(|entry| {
                let ignored = self.rules.should_ignore(&entry.name, entry.is_dir);
                if ignored {
                    tracing::trace!(path = %entry.path.display(), "Ignored");
                }
                !ignored
            })
            .collect();
        entries.sort_by(|a, b| a.file_name.cmp(&b.file_name));

        tracing::debug!(
            path = %dir.display(),
            total,
            shown = entries.len(),
            "Listed directory"
        );

        Ok(entries)
    }

    /// Write the tree below `dir` to `out`, each line starting with `prefix`.
    pub fn print_tree<W: Write>(&self, dir: &Path, prefix: &Prefix, out: &mut W) -> Result<()> {
        let entries = self.visible_entries(dir)?;
        let count = entries.len();

        for (i, entry) in entries.iter().enumerate() {
            let connector = Connector::for_position(i == count - 1);
            writeln!(out, "{}{}{}", prefix, connector.as_str(), entry.name)?;

            if entry.is_dir {
                self.print_tree(&entry.path, &prefix.descend(connector), out)?;
            }
        }

        Ok(())
    }

    /// Render the whole tree below `root` into a string.
    pub fn render(&self, root: &Path) -> Result<String> {
        let mut buf = Vec::new();
        self.print_tree(root, &Prefix::root(), &mut buf)?;
        Ok(String::from_utf8_lossy(&buf).into_owned())
    }
}
