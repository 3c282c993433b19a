use crate::tree::IgnoreRules;

/// Root configuration, fixed at startup.
///
/// There is no configuration file: every value comes from `Default` and is
/// handed to the components that need it.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Config {
    /// Names left out of the tree
    pub ignore: IgnoreRules,
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tree::{IGNORED_DIRS, IGNORED_FILE_EXTENSIONS, IGNORED_FILE_PREFIXES};

    #[test]
    fn default_config_uses_builtin_rules() {
        let config = Config::default();
        assert_eq!(config.ignore.dirs, IGNORED_DIRS);
        assert_eq!(config.ignore.file_extensions, IGNORED_FILE_EXTENSIONS);
        assert_eq!(config.ignore.file_prefixes, IGNORED_FILE_PREFIXES);
    }

    #[test]
    fn default_rules_cover_common_clutter() {
        let config = Config::default();
        assert!(config.ignore.dirs.contains(&"node_modules"));
        assert!(config.ignore.dirs.contains(&".git"));
        assert!(config.ignore.file_extensions.contains(&".lock"));
    }
}
