use clap::Parser;

/// Project Tree - print the current directory as a tree, skipping build and tooling clutter
#[derive(Parser, Debug)]
#[command(name = "project-tree")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Increase log verbosity on stderr (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Only log warnings and errors
    #[arg(short, long)]
    pub quiet: bool,
}
