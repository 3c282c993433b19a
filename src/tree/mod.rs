mod entry;
mod filter;
mod prefix;
mod printer;

pub use entry::{list_dir, Entry};
pub use filter::{IgnoreRules, IGNORED_DIRS, IGNORED_FILE_EXTENSIONS, IGNORED_FILE_PREFIXES};
pub use prefix::{Connector, Indent, Prefix};
pub use printer::TreePrinter;
