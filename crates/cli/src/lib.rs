use anyhow::Result;
use clap::{Parser, Subcommand};

use crate::commands::{
    CheckArgs, ConfigArgs, GenerateArgs, InitArgs, handle_check, handle_config, handle_generate,
    handle_init,
};
pub mod commands;
pub mod config;
pub mod render;

#[derive(Parser, Debug)]
#[command(
    name = "changecast",
    author,
    version,
    about = "Release announcement generator merging changelog and issue tracker data",
    help_template = "{name} {version}\n{about}\n\n{usage-heading} {usage}\n\n{all-args}"
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Version to announce, overriding the configured one
    #[arg(short, long)]
    project_version: Option<String>,

    /// Print the announcement instead of writing it
    #[arg(short, long, default_value = "false")]
    dry_run: bool,
}

#[derive(Subcommand, Debug)]
enum Commands {
    Generate(GenerateArgs),
    Check(CheckArgs),
    Init(InitArgs),
    Config(ConfigArgs),
}

/// # Errors
/// Returns error if the invoked command fails.
pub async fn main(args: &[String]) -> Result<()> {
    let cli = Cli::parse_from(args);
    if let Some(command) = cli.command {
        match command {
            Commands::Generate(args) => handle_generate(&args).await?,
            Commands::Check(args) => handle_check(&args).await?,
            Commands::Init(args) => handle_init(&args).await?,
            Commands::Config(args) => handle_config(&args).await?,
        }
    } else {
        handle_generate(&GenerateArgs {
            project_version: cli.project_version,
            dry_run: cli.dry_run,
        })
        .await?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cli_parsing_generate() {
        let cli = Cli::parse_from(["changecast", "generate"]);
        assert!(matches!(cli.command, Some(Commands::Generate(_))));
    }

    #[test]
    fn test_cli_parsing_check() {
        let cli = Cli::parse_from(["changecast", "check"]);
        assert!(matches!(cli.command, Some(Commands::Check(_))));
    }

    #[test]
    fn test_cli_parsing_init() {
        let cli = Cli::parse_from(["changecast", "init", "--dry-run"]);
        assert!(matches!(cli.command, Some(Commands::Init(_))));
    }

    #[test]
    fn test_cli_parsing_config() {
        let cli = Cli::parse_from(["changecast", "config"]);
        assert!(matches!(cli.command, Some(Commands::Config(_))));
    }

    #[test]
    fn test_cli_parsing_default_with_options() {
        let cli = Cli::parse_from([
            "changecast",
            "--project-version",
            "1.0-SNAPSHOT",
            "--dry-run",
        ]);

        assert!(cli.command.is_none());
        assert_eq!(cli.project_version, Some("1.0-SNAPSHOT".to_string()));
        assert!(cli.dry_run);
    }

    #[test]
    fn test_cli_parsing_no_arguments() {
        let cli = Cli::parse_from(["changecast"]);

        assert!(cli.command.is_none());
        assert!(cli.project_version.is_none());
        assert!(!cli.dry_run);
    }
}
