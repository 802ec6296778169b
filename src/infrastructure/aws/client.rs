// Copyright 2025 ecsctl Authors.
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
//     http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.

use crate::domain::cluster::ClusterPage;
use crate::domain::logs::{LogEvent, LogEventPage, LogQuery};
use crate::domain::task::{
    ContainerDefinition, LogConfiguration, RunTaskOutput, TaskDefinition, TaskDescription,
    TaskStatus,
};
use crate::infrastructure::constants::STARTED_BY;
use crate::shared::error::EcsctlError;
use aws_config::BehaviorVersion;
use aws_sdk_cloudwatchlogs::Client as LogsClient;
use aws_sdk_ecs::error::DisplayErrorContext;
use aws_sdk_ecs::Client;

#[async_trait::async_trait]
pub trait EcsApi: Send + Sync {
    /// Fetch one page of cluster ARNs
    async fn list_clusters(&self, next_token: Option<String>) -> Result<ClusterPage, EcsctlError>;

    async fn describe_task_definition(
        &self,
        task_definition: &str,
    ) -> Result<TaskDefinition, EcsctlError>;

    async fn run_task(
        &self,
        cluster: &str,
        task_definition: &str,
    ) -> Result<RunTaskOutput, EcsctlError>;

    async fn stop_task(&self, cluster: &str, task: &str, reason: &str) -> Result<(), EcsctlError>;

    async fn describe_tasks(
        &self,
        cluster: &str,
        tasks: &[String],
    ) -> Result<Vec<TaskDescription>, EcsctlError>;

    /// Fetch one page of log events
    async fn filter_log_events(&self, query: &LogQuery) -> Result<LogEventPage, EcsctlError>;
}

pub struct AwsEcsClient {
    client: Client,
    logs_client: LogsClient,
}

impl AwsEcsClient {
    /// Build clients from the shared AWS config chain, optionally pinned to a
    /// region and named profile.
    pub async fn new(region: Option<String>, profile: Option<String>) -> Self {
        let mut config_loader = aws_config::defaults(BehaviorVersion::latest());

        if let Some(region) = region {
            config_loader = config_loader.region(aws_config::Region::new(region));
        }

        if let Some(profile) = profile {
            config_loader = config_loader.profile_name(profile);
        }

        let config = config_loader.load().await;
        Self {
            client: Client::new(&config),
            logs_client: LogsClient::new(&config),
        }
    }
}

fn api_error<E: std::error::Error>(operation: &str, err: E) -> EcsctlError {
    EcsctlError::api(operation, DisplayErrorContext(err).to_string())
}

fn task_description(task: &aws_sdk_ecs::types::Task) -> TaskDescription {
    TaskDescription {
        task_arn: task.task_arn().unwrap_or_default().to_string(),
        last_status: task
            .last_status()
            .unwrap_or_default()
            .parse()
            .unwrap_or(TaskStatus::Other(String::new())),
    }
}

#[async_trait::async_trait]
impl EcsApi for AwsEcsClient {
    async fn list_clusters(&self, next_token: Option<String>) -> Result<ClusterPage, EcsctlError> {
        tracing::debug!(next_token = ?next_token, "listing clusters");
        let resp = self
            .client
            .list_clusters()
            .set_next_token(next_token)
            .send()
            .await
            .map_err(|e| api_error("ListClusters", e))?;

        Ok(ClusterPage {
            cluster_arns: resp.cluster_arns().to_vec(),
            next_token: resp.next_token().map(str::to_string),
        })
    }

    async fn describe_task_definition(
        &self,
        task_definition: &str,
    ) -> Result<TaskDefinition, EcsctlError> {
        tracing::debug!(task_definition, "describing task definition");
        let resp = self
            .client
            .describe_task_definition()
            .task_definition(task_definition)
            .send()
            .await
            .map_err(|e| api_error("DescribeTaskDefinition", e))?;

        let td = resp
            .task_definition()
            .ok_or_else(|| EcsctlError::not_found("Task definition", task_definition))?;

        let container_definitions = td
            .container_definitions()
            .iter()
            .map(|cd| ContainerDefinition {
                name: cd.name().unwrap_or_default().to_string(),
                log_configuration: cd.log_configuration().map(|lc| LogConfiguration {
                    log_driver: lc.log_driver().as_str().to_string(),
                    options: lc.options().cloned().unwrap_or_default(),
                }),
            })
            .collect();

        Ok(TaskDefinition {
            family: td.family().unwrap_or(task_definition).to_string(),
            revision: td.revision(),
            container_definitions,
        })
    }

    async fn run_task(
        &self,
        cluster: &str,
        task_definition: &str,
    ) -> Result<RunTaskOutput, EcsctlError> {
        tracing::info!(cluster, task_definition, "running task");
        let resp = self
            .client
            .run_task()
            .cluster(cluster)
            .task_definition(task_definition)
            .started_by(STARTED_BY)
            .send()
            .await
            .map_err(|e| api_error("RunTask", e))?;

        Ok(RunTaskOutput {
            tasks: resp.tasks().iter().map(task_description).collect(),
            failure_reasons: resp
                .failures()
                .iter()
                .filter_map(|f| f.reason().map(str::to_string))
                .collect(),
        })
    }

    async fn stop_task(&self, cluster: &str, task: &str, reason: &str) -> Result<(), EcsctlError> {
        tracing::info!(cluster, task, "stopping task");
        self.client
            .stop_task()
            .cluster(cluster)
            .task(task)
            .reason(reason)
            .send()
            .await
            .map_err(|e| api_error("StopTask", e))?;
        Ok(())
    }

    async fn describe_tasks(
        &self,
        cluster: &str,
        tasks: &[String],
    ) -> Result<Vec<TaskDescription>, EcsctlError> {
        let resp = self
            .client
            .describe_tasks()
            .cluster(cluster)
            .set_tasks(Some(tasks.to_vec()))
            .send()
            .await
            .map_err(|e| api_error("DescribeTasks", e))?;

        Ok(resp.tasks().iter().map(task_description).collect())
    }

    async fn filter_log_events(&self, query: &LogQuery) -> Result<LogEventPage, EcsctlError> {
        let resp = self
            .logs_client
            .filter_log_events()
            .log_group_name(&query.log_group)
            .set_log_stream_names(Some(query.log_stream_names.clone()))
            .set_start_time(query.start_time)
            .set_next_token(query.next_token.clone())
            .send()
            .await
            .map_err(|e| api_error("FilterLogEvents", e))?;

        let events = resp
            .events()
            .iter()
            .map(|e| LogEvent {
                event_id: e.event_id().unwrap_or_default().to_string(),
                timestamp: e.timestamp().unwrap_or_default(),
                log_stream_name: e.log_stream_name().unwrap_or_default().to_string(),
                message: e.message().unwrap_or_default().to_string(),
            })
            .collect();

        Ok(LogEventPage {
            events,
            next_token: resp.next_token().map(str::to_string),
        })
    }
}
