//! Print command implementation

use std::io::{self, Write};
use std::path::Path;

use crate::config::Config;
use crate::error::Result;
use crate::tree::{Prefix, TreePrinter};

/// Line written before the tree.
pub const HEADER: &str = "Project structure:";

/// Print the header and the tree rooted at `root` to `out`.
pub fn write_project_tree<W: Write>(config: &Config, root: &Path, out: &mut W) -> Result<()> {
    writeln!(out, "{}", HEADER)?;
    writeln!(out)?;

    let printer = TreePrinter::new(config.ignore);
    printer.print_tree(root, &Prefix::root(), out)?;

    out.flush()?;
    Ok(())
}

/// Run the print command against the current directory
pub fn run(config: &Config) -> Result<()> {
    let root = Path::new(".");
    tracing::info!(path = %root.display(), "Printing project tree");

    let stdout = io::stdout();
    let mut out = stdout.lock();
    write_project_tree(config, root, &mut out)
}
