use clap::Parser;

#[derive(Parser)]
#[command(
    name = "driftcheck",
    about = "Flag schema changes that lack a corresponding contract change",
    version
)]
pub struct Cli {
    /// Repository root used for git status discovery
    #[arg(long, default_value = ".")]
    pub repo_root: String,

    /// Explicit changed path (repeatable); bypasses git status when given
    #[arg(long = "path", value_name = "PATH")]
    pub paths: Vec<String>,

    /// Substring marking a path as schema-related (repeatable, replaces defaults)
    #[arg(long = "schema-pattern", value_name = "SUBSTRING")]
    pub schema_patterns: Vec<String>,

    /// Substring marking a path as contract-related (repeatable, replaces defaults)
    #[arg(long = "contract-pattern", value_name = "SUBSTRING")]
    pub contract_patterns: Vec<String>,

    /// Output as JSON
    #[arg(long)]
    pub json: bool,
}
