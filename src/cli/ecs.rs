//! ECS commands

use crate::cli::display::EventPrinter;
use crate::cli::signal::spawn_stop_on_signal;
use crate::domain::cluster::for_each_cluster_arn;
use crate::domain::config::{EcsctlConf, OutputConf};
use crate::domain::task::{TaskFollower, TaskRunner};
use crate::infrastructure::aws::EcsApi;
use clap::{Args, Parser};
use std::io::Write;
use std::sync::Arc;

/// Shared state handed to every command
pub struct CommandContext {
    pub conf: EcsctlConf,
    pub client: Arc<dyn EcsApi>,
}

#[derive(Parser, Debug, Clone)]
pub struct ClustersListCommand {}

#[derive(Parser, Debug, Clone)]
pub struct RunCommand {
    /// Task definition family
    #[arg(value_name = "TASK_DEFINITION")]
    pub task_definition: String,

    /// Cluster to run the task on
    #[arg(long, short = 'c')]
    pub cluster: String,

    /// Task definition revision (defaults to the latest)
    #[arg(long)]
    pub revision: Option<String>,

    /// Follow the task's log stream until it stops
    #[arg(long, short = 'f')]
    pub follow: bool,

    /// Stop the task when interrupted while following
    #[arg(long)]
    pub exit: bool,

    #[command(flatten)]
    pub output: OutputArgs,
}

/// Log rendering flags, OR-ed with the `[output]` table of the config file
#[derive(Args, Debug, Clone, Default)]
pub struct OutputArgs {
    /// Pretty-print JSON messages
    #[arg(long, short = 'e')]
    pub expand: bool,

    /// Print messages verbatim, without JSON formatting
    #[arg(long)]
    pub raw: bool,

    /// Do not quote string values in JSON messages
    #[arg(long)]
    pub raw_string: bool,

    /// Render JSON keys in a dim color
    #[arg(long, short = 'i')]
    pub invert: bool,

    /// Disable colored output
    #[arg(long)]
    pub no_color: bool,

    /// Omit the timestamp prefix
    #[arg(long)]
    pub hide_date: bool,

    /// Omit the log stream prefix
    #[arg(long)]
    pub hide_stream_name: bool,
}

impl OutputArgs {
    pub fn to_conf(&self) -> OutputConf {
        OutputConf {
            expand: self.expand,
            raw: self.raw,
            raw_string: self.raw_string,
            hide_stream_name: self.hide_stream_name,
            hide_date: self.hide_date,
            invert: self.invert,
            no_color: self.no_color,
        }
    }
}

impl ClustersListCommand {
    pub async fn execute(&self, ctx: &CommandContext) -> anyhow::Result<()> {
        let stdout = std::io::stdout();
        for_each_cluster_arn(ctx.client.as_ref(), |arn| {
            writeln!(stdout.lock(), "{}", arn)
        })
        .await?;
        Ok(())
    }
}

impl RunCommand {
    pub async fn execute(&self, ctx: &CommandContext) -> anyhow::Result<()> {
        let runner = TaskRunner::new(ctx.client.as_ref(), self.cluster.clone());
        let started = runner
            .run(&self.task_definition, self.revision.as_deref())
            .await?;

        if !self.follow {
            return Ok(());
        }

        if self.exit {
            if let Err(e) = spawn_stop_on_signal(
                ctx.client.clone(),
                self.cluster.clone(),
                started.run.task_arn.clone(),
            ) {
                tracing::warn!("failed to install shutdown handler: {}", e);
            }
        }

        let Some(target) = started.definition.log_target(&started.run.task_id) else {
            tracing::debug!(
                task_definition = %self.task_definition,
                "first container does not log to awslogs, nothing to follow"
            );
            return Ok(());
        };

        let output = ctx.conf.output.union(self.output.to_conf());
        let mut follower = TaskFollower::new(
            ctx.client.as_ref(),
            started.run,
            target,
            EventPrinter::stdout(output),
        );
        follower.run().await?;

        Ok(())
    }
}
