//! CLI command implementations

use anyhow::Result;
use clap::Subcommand;
use corecoding_core::ArgCategory;

pub mod generate_config;
pub mod process;
pub mod validate;

/// Available CLI commands
#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Classify every clause head of CoNLL-U treebanks
    Process(process::ProcessArgs),

    /// Generate a configuration file template
    GenerateConfig(generate_config::GenerateConfigArgs),

    /// Validate a configuration file
    Validate(validate::ValidateArgs),

    /// List available components
    List {
        #[command(subcommand)]
        subcommand: ListCommands,
    },
}

/// List subcommands
#[derive(Debug, Subcommand)]
pub enum ListCommands {
    /// List report categories accepted by `--arg`
    Categories,

    /// List available output formats
    Formats,
}

impl Commands {
    /// Run the selected command
    pub fn execute(&self) -> Result<()> {
        match self {
            Commands::Process(args) => args.execute(),
            Commands::GenerateConfig(args) => args.execute(),
            Commands::Validate(args) => args.execute(),
            Commands::List { subcommand } => {
                for line in subcommand.lines() {
                    println!("{line}");
                }
                Ok(())
            }
        }
    }
}

impl ListCommands {
    /// Lines printed by the list command
    pub fn lines(&self) -> Vec<String> {
        match self {
            ListCommands::Categories => ArgCategory::ALL_VALUES
                .iter()
                .map(|category| {
                    let description = match category {
                        ArgCategory::Subj => "SUBJECT lines",
                        ArgCategory::Obj => "OBJECT lines",
                        ArgCategory::Iobj => "IOBJECT lines",
                        ArgCategory::Agreement => "AGREEMENT lines",
                        ArgCategory::All => "every line (default)",
                    };
                    format!("{:<10} {description}", category.as_str())
                })
                .collect(),
            ListCommands::Formats => vec![
                format!("{:<10} report lines, one per line (default)", "text"),
                format!("{:<10} one JSON object per report line", "json"),
            ],
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_commands_debug_format() {
        let list_cmd = Commands::List {
            subcommand: ListCommands::Categories,
        };

        let debug_str = format!("{:?}", list_cmd);
        assert!(debug_str.contains("List"));
        assert!(debug_str.contains("Categories"));
    }

    #[test]
    fn test_list_categories() {
        let lines = ListCommands::Categories.lines();
        assert_eq!(lines.len(), 5);
        assert!(lines[0].starts_with("subj "));
        assert!(lines[4].starts_with("all "));
        assert!(lines[4].contains("default"));
    }

    #[test]
    fn test_list_formats() {
        let lines = ListCommands::Formats.lines();
        assert_eq!(lines.len(), 2);
        assert!(lines[0].starts_with("text"));
        assert!(lines[1].starts_with("json"));
    }

    #[test]
    fn test_list_command_executes() {
        let cmd = Commands::List {
            subcommand: ListCommands::Formats,
        };
        assert!(cmd.execute().is_ok());
    }
}
