use clap::{Args, Parser, Subcommand};
use clap_complete::Shell;
use std::path::PathBuf;

/// Menu Builder - A terminal editor for hierarchical menus
#[derive(Parser, Debug)]
#[command(name = "menu-builder")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Path to configuration file
    #[arg(short, long, global = true, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Increase verbosity (-v, -vv, -vvv)
    #[arg(short, long, global = true, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Suppress non-essential output
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Write logs to this file instead of stderr
    #[arg(long, global = true, value_name = "PATH", env = "MENU_BUILDER_LOG")]
    pub log_file: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Launch the interactive menu editor
    Edit(EditArgs),

    /// Generate shell completions
    Completions(CompletionsArgs),

    /// Generate a man page
    Man,
}

#[derive(Args, Debug)]
pub struct CompletionsArgs {
    /// Shell to generate completions for
    #[arg(value_enum)]
    pub shell: Shell,
}

#[derive(Args, Debug)]
pub struct EditArgs {
    /// Show node keys next to titles
    #[arg(long)]
    pub show_keys: bool,

    /// Delete nodes without asking
    #[arg(long)]
    pub no_confirm: bool,

    /// Start editing with the node's current title in the input field
    #[arg(long)]
    pub prefill: bool,
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn verify_cli_structure() {
        // Validates the CLI definition is correct
        Cli::command().debug_assert();
    }

    #[test]
    fn parse_edit_command() {
        let cli = Cli::parse_from(["menu-builder", "edit", "--show-keys", "--no-confirm"]);
        match cli.command {
            Command::Edit(args) => {
                assert!(args.show_keys);
                assert!(args.no_confirm);
                assert!(!args.prefill);
            }
            _ => panic!("Expected Edit command"),
        }
    }

    #[test]
    fn parse_completions_command() {
        let cli = Cli::parse_from(["menu-builder", "completions", "bash"]);
        match cli.command {
            Command::Completions(args) => assert_eq!(args.shell, Shell::Bash),
            _ => panic!("Expected Completions command"),
        }
    }

    #[test]
    fn global_flags() {
        let cli = Cli::parse_from([
            "menu-builder",
            "-vv",
            "--log-file",
            "/tmp/menu.log",
            "edit",
        ]);
        assert_eq!(cli.verbose, 2);
        assert_eq!(cli.log_file, Some(PathBuf::from("/tmp/menu.log")));
    }
}
