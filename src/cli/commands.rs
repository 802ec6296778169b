// CLI command definitions

use super::ecs::{ClustersListCommand, CommandContext, RunCommand};
use crate::domain::config::EcsctlConf;
use crate::infrastructure::aws::AwsEcsClient;
use clap::Parser;
use std::path::PathBuf;
use std::sync::Arc;

#[derive(Parser, Debug)]
#[command(
    name = "ecsctl",
    version,
    about = "Command-line client for Amazon ECS",
    long_about = "List ECS clusters and run task definitions, optionally following the task's CloudWatch log stream until it stops"
)]
pub struct CliArgs {
    #[command(flatten)]
    pub global: GlobalArgs,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(clap::Args, Debug, Clone, Default)]
pub struct GlobalArgs {
    /// AWS region (overrides the config file and environment)
    #[arg(long, global = true)]
    pub region: Option<String>,

    /// AWS named profile
    #[arg(long, global = true)]
    pub profile: Option<String>,

    /// Path to ecsctl configuration file (TOML)
    /// If not specified, uses ECSCTL_CONFIG or ~/.ecsctl.toml when present
    #[arg(long, global = true, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Enable debug logging on stderr
    #[arg(long, short = 'v', global = true)]
    pub verbose: bool,
}

#[derive(clap::Subcommand, Debug)]
pub enum Commands {
    /// Cluster operations
    #[command(subcommand)]
    Clusters(ClustersCommands),

    /// Task definition operations
    #[command(subcommand)]
    TaskDefinitions(TaskDefinitionsCommands),
}

#[derive(clap::Subcommand, Debug)]
pub enum ClustersCommands {
    /// List clusters
    List(ClustersListCommand),
}

#[derive(clap::Subcommand, Debug)]
pub enum TaskDefinitionsCommands {
    /// Run a task definition
    Run(RunCommand),
}

impl CliArgs {
    pub async fn execute(self) -> anyhow::Result<()> {
        let mut conf = EcsctlConf::load(self.global.config.as_deref())?;
        conf.merge_cli(self.global.region.clone(), self.global.profile.clone());

        let client = AwsEcsClient::new(conf.region.clone(), conf.profile.clone()).await;
        let ctx = CommandContext {
            conf,
            client: Arc::new(client),
        };

        match &self.command {
            Commands::Clusters(ClustersCommands::List(cmd)) => cmd.execute(&ctx).await,
            Commands::TaskDefinitions(TaskDefinitionsCommands::Run(cmd)) => {
                cmd.execute(&ctx).await
            }
        }
    }
}

/// Exit status for a failed parse: help and version output succeed, any
/// other usage error exits 1 like a command failure.
pub fn usage_exit_code(err: &clap::Error) -> i32 {
    use clap::error::ErrorKind;
    match err.kind() {
        ErrorKind::DisplayHelp | ErrorKind::DisplayVersion => 0,
        _ => 1,
    }
}
