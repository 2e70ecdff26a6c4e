//! CLI argument parsing with clap

use camino::Utf8PathBuf;
use clap::{ArgAction, Parser};
use tsbc_core::{GitChoice, RawInputs};

/// Create a new TypeScript control add-in project for Business Central
///
/// Anything not given as a flag is asked interactively, unless --yes is set.
#[derive(Parser, Debug)]
#[command(name = "create-typescript-bc")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Project folder name
    pub project_name: Option<String>,

    /// Skip prompts and use defaults for everything not given
    #[arg(short, long)]
    pub yes: bool,

    /// Template to create the project from
    #[arg(short = 't', long, value_name = "TYPE")]
    pub project_type: Option<String>,

    /// Initialize a git repository
    #[arg(short, long, overrides_with = "no_git")]
    pub git: bool,

    /// Do not initialize a git repository
    #[arg(long, overrides_with = "git")]
    pub no_git: bool,

    /// Package manager: npm, yarn or pnpm
    #[arg(short, long, value_name = "MANAGER")]
    pub pm: Option<String>,

    /// Open the project in VS Code without asking
    #[arg(short, long)]
    pub open: bool,

    /// Increase verbosity (-v, -vv)
    #[arg(short, long, action = ArgAction::Count)]
    pub verbose: u8,

    /// Only print errors
    #[arg(short, long)]
    pub quiet: bool,

    /// Path to a runtime config file
    #[arg(short, long, value_name = "PATH")]
    pub config: Option<Utf8PathBuf>,
}

impl Cli {
    /// The values the resolver sees
    pub fn to_inputs(&self) -> RawInputs {
        RawInputs {
            project_name: self.project_name.clone(),
            project_type: self.project_type.clone(),
            git: GitChoice::from_flags(self.git, self.no_git),
            package_manager: self.pm.clone(),
            open: self.open,
            yes: self.yes,
        }
        .normalized()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    fn parse(args: &[&str]) -> Cli {
        let mut argv = vec!["create-typescript-bc"];
        argv.extend_from_slice(args);
        Cli::try_parse_from(argv).unwrap()
    }

    #[test]
    fn test_cli_definition_is_valid() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_no_flags_is_all_unspecified() {
        let inputs = parse(&[]).to_inputs();
        assert_eq!(inputs, RawInputs::default());
    }

    #[test]
    fn test_all_flags() {
        let cli = parse(&[
            "my-addin",
            "-y",
            "-t",
            "bc-controladdin-react-ts-template",
            "-g",
            "-p",
            "pnpm",
            "-o",
        ]);
        let inputs = cli.to_inputs();
        assert_eq!(inputs.project_name.as_deref(), Some("my-addin"));
        assert_eq!(
            inputs.project_type.as_deref(),
            Some("bc-controladdin-react-ts-template")
        );
        assert_eq!(inputs.git, GitChoice::Enabled);
        assert_eq!(inputs.package_manager.as_deref(), Some("pnpm"));
        assert!(inputs.open);
        assert!(inputs.yes);
    }

    #[test]
    fn test_last_git_flag_wins() {
        assert_eq!(
            parse(&["--git", "--no-git"]).to_inputs().git,
            GitChoice::Disabled
        );
        assert_eq!(
            parse(&["--no-git", "--git"]).to_inputs().git,
            GitChoice::Enabled
        );
        assert_eq!(parse(&["--no-git"]).to_inputs().git, GitChoice::Disabled);
    }

    #[test]
    fn test_unknown_values_reach_the_resolver() {
        // Validation and its message belong to the resolver, not clap
        let inputs = parse(&["--pm", "bun", "--project-type", "nope"]).to_inputs();
        assert_eq!(inputs.package_manager.as_deref(), Some("bun"));
        assert_eq!(inputs.project_type.as_deref(), Some("nope"));
    }

    #[test]
    fn test_empty_name_is_unspecified() {
        assert_eq!(parse(&[""]).to_inputs().project_name, None);
    }

    #[test]
    fn test_ambient_flags() {
        let cli = parse(&["-vv", "-c", "/tmp/config.yaml"]);
        assert_eq!(cli.verbose, 2);
        assert_eq!(cli.config, Some(Utf8PathBuf::from("/tmp/config.yaml")));
        assert!(!cli.quiet);
    }
}
