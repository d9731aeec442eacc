//! CLI argument definitions using the clap derive API.
//!
//! This module is the *only* place that knows about argument names, aliases,
//! help text, and value enums.  No business logic lives here.

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand, ValueEnum};

pub mod global;
pub use global::{GlobalArgs, OutputFormat};

// ── Top-level CLI ─────────────────────────────────────────────────────────────

/// Main CLI entry-point.
#[derive(Debug, Parser)]
#[command(
    name    = "bootforge",
    bin_name = "bootforge",
    version  = env!("CARGO_PKG_VERSION"),
    author   = env!("CARGO_PKG_AUTHORS"),
    about    = "\u{26a1} Spring Boot projects from API descriptions",
    long_about = "bootforge turns a list of API descriptions, or a pre-modeled \
                  reference application, into a complete Spring Boot project.",
    after_help = "EXAMPLES:\n\
        \x20 bootforge init\n\
        \x20 bootforge generate bootforge.toml --output ./out\n\
        \x20 bootforge generate --template instagram --database postgresql\n\
        \x20 bootforge templates list\n\
        \x20 bootforge completions bash > /usr/share/bash-completion/completions/bootforge",
    arg_required_else_help = true,
    subcommand_required    = true,
)]
pub struct Cli {
    /// Flags available on every subcommand.
    #[command(flatten)]
    pub global: GlobalArgs,

    /// Subcommand to execute.
    #[command(subcommand)]
    pub command: Commands,
}

// ── Subcommands ───────────────────────────────────────────────────────────────

/// All available subcommands.
#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Generate a project from a spec file or a template.
    #[command(
        visible_alias = "g",
        about = "Generate a Spring Boot project",
        after_help = "EXAMPLES:\n\
            \x20 bootforge generate shop.toml\n\
            \x20 bootforge generate shop.json --java 21 --boot 3.3.0 --output ./build\n\
            \x20 bootforge generate --template uber --database mysql --name \"Ride Share\"\n\
            \x20 bootforge generate --template zomato --dry-run"
    )]
    Generate(GenerateArgs),

    /// Browse the reference application templates.
    #[command(about = "Browse reference application templates", subcommand)]
    Templates(TemplatesCommands),

    /// Browse the database profiles.
    #[command(
        visible_alias = "db",
        about = "Browse database profiles",
        subcommand
    )]
    Databases(DatabasesCommands),

    /// Resolve and analyze a spec without rendering anything.
    #[command(
        about = "Show what a spec resolves to",
        after_help = "EXAMPLES:\n\
            \x20 bootforge analyze shop.toml\n\
            \x20 bootforge analyze shop.toml --output-format json"
    )]
    Analyze(AnalyzeArgs),

    /// Write a starter spec file.
    #[command(
        about = "Write a starter spec file",
        after_help = "EXAMPLES:\n\
            \x20 bootforge init                 # ./bootforge.toml\n\
            \x20 bootforge init shop.toml --name \"Shop API\" --namespace com.acme"
    )]
    Init(InitArgs),

    /// Manage the bootforge configuration.
    #[command(
        about = "Configuration management",
        subcommand,
        after_help = "EXAMPLES:\n\
            \x20 bootforge config path\n\
            \x20 bootforge config show\n\
            \x20 bootforge config init"
    )]
    Config(ConfigCommands),

    /// Generate shell completion scripts.
    #[command(
        about = "Generate shell completions",
        after_help = "EXAMPLES:\n\
            \x20 bootforge completions bash > ~/.local/share/bash-completion/completions/bootforge\n\
            \x20 bootforge completions zsh  > ~/.zfunc/_bootforge\n\
            \x20 bootforge completions fish > ~/.config/fish/completions/bootforge.fish"
    )]
    Completions(CompletionsArgs),
}

// ── generate ──────────────────────────────────────────────────────────────────

/// Arguments for `bootforge generate`.
#[derive(Debug, Args)]
pub struct GenerateArgs {
    /// Spec file (TOML or JSON).  Optional when `--template` is given.
    #[arg(value_name = "SPEC", help = "Project spec file (.toml or .json)")]
    pub spec: Option<PathBuf>,

    /// Clone a reference application instead of the spec's APIs.
    #[arg(
        short = 't',
        long = "template",
        value_name = "ID",
        help = "Reference application template (see `templates list`)"
    )]
    pub template: Option<String>,

    /// Database profile to wire when persistence is needed.
    #[arg(
        short = 'd',
        long = "database",
        value_name = "ID",
        help = "Database profile (see `databases list`)"
    )]
    pub database: Option<String>,

    #[arg(short = 'n', long = "name", value_name = "NAME", help = "Project name")]
    pub name: Option<String>,

    #[arg(
        long = "namespace",
        value_name = "GROUP",
        help = "Maven group id / base namespace (e.g. com.acme)"
    )]
    pub namespace: Option<String>,

    #[arg(long = "java", value_name = "VERSION", help = "Java version")]
    pub java: Option<String>,

    #[arg(long = "boot", value_name = "VERSION", help = "Spring Boot version")]
    pub boot: Option<String>,

    /// Parent directory; the project lands in `<DIR>/<artifact-id>`.
    #[arg(
        short = 'o',
        long = "output",
        value_name = "DIR",
        help = "Output directory (default: current directory)"
    )]
    pub output: Option<PathBuf>,

    /// List the files that would be written, without writing them.
    #[arg(long = "dry-run", help = "Show what would be created without creating")]
    pub dry_run: bool,

    /// Overwrite an existing project directory (destructive).
    #[arg(long = "force", help = "Overwrite existing directory")]
    pub force: bool,

    /// Skip the overwrite prompt and treat it as declined.
    #[arg(short = 'y', long = "yes", help = "Never prompt")]
    pub yes: bool,
}

// ── templates / databases ─────────────────────────────────────────────────────

/// Subcommands for `bootforge templates`.
#[derive(Debug, Subcommand)]
pub enum TemplatesCommands {
    /// List every template.
    #[command(visible_alias = "ls")]
    List,
    /// Show the entities and APIs of one template.
    Show {
        /// Template id, e.g. `instagram`.
        id: String,
    },
}

/// Subcommands for `bootforge databases`.
#[derive(Debug, Subcommand)]
pub enum DatabasesCommands {
    /// List every database profile.
    #[command(visible_alias = "ls")]
    List,
}

// ── analyze ───────────────────────────────────────────────────────────────────

/// Arguments for `bootforge analyze`.
#[derive(Debug, Args)]
pub struct AnalyzeArgs {
    #[arg(value_name = "SPEC", help = "Project spec file (.toml or .json)")]
    pub spec: PathBuf,
}

// ── init ──────────────────────────────────────────────────────────────────────

/// Arguments for `bootforge init`.
#[derive(Debug, Args)]
pub struct InitArgs {
    /// Where to write the starter spec.
    #[arg(
        value_name = "PATH",
        default_value = "bootforge.toml",
        help = "Spec file to create"
    )]
    pub path: PathBuf,

    #[arg(short = 'n', long = "name", value_name = "NAME", help = "Project name")]
    pub name: Option<String>,

    #[arg(long = "namespace", value_name = "GROUP", help = "Base namespace")]
    pub namespace: Option<String>,

    /// Overwrite an existing file.
    #[arg(short = 'f', long = "force", help = "Overwrite an existing spec file")]
    pub force: bool,
}

// ── completions ───────────────────────────────────────────────────────────────

/// Arguments for `bootforge completions`.
#[derive(Debug, Args)]
pub struct CompletionsArgs {
    /// Target shell.
    #[arg(value_enum, help = "Shell to generate completions for")]
    pub shell: Shell,
}

/// Supported shells for completion generation.
#[derive(Debug, Clone, Copy, ValueEnum)]
pub enum Shell {
    Bash,
    Zsh,
    Fish,
    PowerShell,
    Elvish,
}

// ── config subcommands ────────────────────────────────────────────────────────

/// Subcommands for `bootforge config`.
#[derive(Debug, Subcommand)]
pub enum ConfigCommands {
    /// Print the path to the default configuration file.
    Path,
    /// Print the effective configuration.
    Show,
    /// Write the default configuration file.
    Init {
        /// Overwrite an existing config file.
        #[arg(short = 'f', long = "force")]
        force: bool,
    },
}

// ── tests ─────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;
    use clap::{CommandFactory, Parser};

    #[test]
    fn verify_cli_structure() {
        Cli::command().debug_assert();
    }

    #[test]
    fn parse_generate_from_spec() {
        let cli = Cli::parse_from([
            "bootforge", "generate", "shop.toml", "--java", "21", "--output", "out",
        ]);
        let Commands::Generate(args) = cli.command else {
            panic!("expected Generate command");
        };
        assert_eq!(args.spec, Some(PathBuf::from("shop.toml")));
        assert_eq!(args.java.as_deref(), Some("21"));
        assert_eq!(args.output, Some(PathBuf::from("out")));
        assert!(args.template.is_none());
    }

    #[test]
    fn parse_generate_from_template() {
        let cli = Cli::parse_from(["bootforge", "g", "-t", "uber", "-d", "mysql", "--dry-run"]);
        let Commands::Generate(args) = cli.command else {
            panic!("expected Generate command");
        };
        assert!(args.spec.is_none());
        assert_eq!(args.template.as_deref(), Some("uber"));
        assert_eq!(args.database.as_deref(), Some("mysql"));
        assert!(args.dry_run);
    }

    #[test]
    fn templates_show_takes_an_id() {
        let cli = Cli::parse_from(["bootforge", "templates", "show", "github"]);
        assert!(matches!(
            cli.command,
            Commands::Templates(TemplatesCommands::Show { ref id }) if id == "github"
        ));
    }

    #[test]
    fn init_defaults_to_bootforge_toml() {
        let cli = Cli::parse_from(["bootforge", "init"]);
        let Commands::Init(args) = cli.command else {
            panic!("expected Init command");
        };
        assert_eq!(args.path, PathBuf::from("bootforge.toml"));
    }

    #[test]
    fn global_flags_work_after_the_subcommand() {
        let cli = Cli::parse_from(["bootforge", "databases", "list", "--output-format", "json"]);
        assert_eq!(cli.global.output_format, OutputFormat::Json);
    }

    #[test]
    fn quiet_and_verbose_conflict() {
        let result = Cli::try_parse_from(["bootforge", "--quiet", "--verbose", "templates", "list"]);
        assert!(result.is_err());
    }
}
