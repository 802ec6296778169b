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

#![allow(dead_code)]

use ecsctl::*;
use std::collections::{HashMap, VecDeque};
use std::sync::Mutex;

/// Scripted in-memory ECS/Logs backend.
///
/// Each queue is consumed one response per call. When a queue runs dry the
/// backend answers with an empty page, and with STOPPED for status checks.
#[derive(Default)]
pub struct MockEcs {
    pub cluster_pages: Mutex<VecDeque<Result<ClusterPage>>>,
    pub list_tokens: Mutex<Vec<Option<String>>>,
    pub task_definition: Mutex<Option<TaskDefinition>>,
    pub run_output: Mutex<Option<RunTaskOutput>>,
    pub run_requests: Mutex<Vec<(String, String)>>,
    pub stop_requests: Mutex<Vec<String>>,
    pub stop_fails: Mutex<bool>,
    pub statuses: Mutex<VecDeque<Result<Vec<TaskDescription>>>>,
    pub status_calls: Mutex<usize>,
    pub log_pages: Mutex<VecDeque<Result<LogEventPage>>>,
    pub log_queries: Mutex<Vec<LogQuery>>,
}

impl MockEcs {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push_cluster_page(&self, arns: &[&str], next_token: Option<&str>) {
        self.cluster_pages.lock().unwrap().push_back(Ok(ClusterPage {
            cluster_arns: arns.iter().map(|s| s.to_string()).collect(),
            next_token: next_token.map(str::to_string),
        }));
    }

    pub fn push_cluster_error(&self) {
        self.cluster_pages
            .lock()
            .unwrap()
            .push_back(Err(EcsctlError::api("ListClusters", "ThrottlingException")));
    }

    pub fn push_log_page(&self, events: Vec<LogEvent>, next_token: Option<&str>) {
        self.log_pages.lock().unwrap().push_back(Ok(LogEventPage {
            events,
            next_token: next_token.map(str::to_string),
        }));
    }

    pub fn push_log_errors(&self, count: usize) {
        let mut pages = self.log_pages.lock().unwrap();
        for _ in 0..count {
            pages.push_back(Err(EcsctlError::api(
                "FilterLogEvents",
                "ResourceNotFoundException",
            )));
        }
    }

    pub fn push_statuses(&self, status: TaskStatus, count: usize) {
        let mut statuses = self.statuses.lock().unwrap();
        for _ in 0..count {
            statuses.push_back(Ok(vec![TaskDescription {
                task_arn: TASK_ARN.to_string(),
                last_status: status.clone(),
            }]));
        }
    }

    pub fn push_status_error(&self) {
        self.statuses
            .lock()
            .unwrap()
            .push_back(Err(EcsctlError::api("DescribeTasks", "AccessDeniedException")));
    }

    pub fn set_run_output(&self, definition: TaskDefinition) {
        *self.task_definition.lock().unwrap() = Some(definition);
        *self.run_output.lock().unwrap() = Some(RunTaskOutput {
            tasks: vec![TaskDescription {
                task_arn: TASK_ARN.to_string(),
                last_status: TaskStatus::Provisioning,
            }],
            failure_reasons: Vec::new(),
        });
    }

    pub fn stop_request_arns(&self) -> Vec<String> {
        self.stop_requests.lock().unwrap().clone()
    }

    pub fn log_query_count(&self) -> usize {
        self.log_queries.lock().unwrap().len()
    }

    pub fn status_call_count(&self) -> usize {
        *self.status_calls.lock().unwrap()
    }
}

#[async_trait::async_trait]
impl EcsApi for MockEcs {
    async fn list_clusters(&self, next_token: Option<String>) -> Result<ClusterPage> {
        self.list_tokens.lock().unwrap().push(next_token);
        self.cluster_pages
            .lock()
            .unwrap()
            .pop_front()
            .unwrap_or_else(|| Ok(ClusterPage::default()))
    }

    async fn describe_task_definition(&self, task_definition: &str) -> Result<TaskDefinition> {
        self.task_definition
            .lock()
            .unwrap()
            .clone()
            .ok_or_else(|| EcsctlError::not_found("Task definition", task_definition))
    }

    async fn run_task(&self, cluster: &str, task_definition: &str) -> Result<RunTaskOutput> {
        self.run_requests
            .lock()
            .unwrap()
            .push((cluster.to_string(), task_definition.to_string()));
        Ok(self.run_output.lock().unwrap().clone().unwrap_or_default())
    }

    async fn stop_task(&self, _cluster: &str, task: &str, _reason: &str) -> Result<()> {
        self.stop_requests.lock().unwrap().push(task.to_string());
        if *self.stop_fails.lock().unwrap() {
            return Err(EcsctlError::api("StopTask", "InvalidParameterException"));
        }
        Ok(())
    }

    async fn describe_tasks(&self, _cluster: &str, _tasks: &[String]) -> Result<Vec<TaskDescription>> {
        *self.status_calls.lock().unwrap() += 1;
        self.statuses.lock().unwrap().pop_front().unwrap_or_else(|| {
            Ok(vec![TaskDescription {
                task_arn: TASK_ARN.to_string(),
                last_status: TaskStatus::Stopped,
            }])
        })
    }

    async fn filter_log_events(&self, query: &LogQuery) -> Result<LogEventPage> {
        self.log_queries.lock().unwrap().push(query.clone());
        self.log_pages
            .lock()
            .unwrap()
            .pop_front()
            .unwrap_or_else(|| Ok(LogEventPage::default()))
    }
}

pub const TASK_ARN: &str = "arn:aws:ecs:us-east-1:123456789012:task/prod/0f1e2d3c4b5a";
pub const TASK_ID: &str = "0f1e2d3c4b5a";

pub fn log_event(id: &str, timestamp: i64, message: &str) -> LogEvent {
    LogEvent {
        event_id: id.to_string(),
        timestamp,
        log_stream_name: format!("ecs/app/{}", TASK_ID),
        message: message.to_string(),
    }
}

pub fn running_task() -> TaskRun {
    TaskRun::new(
        "prod",
        TaskDescription {
            task_arn: TASK_ARN.to_string(),
            last_status: TaskStatus::Pending,
        },
    )
}

pub fn log_target() -> LogTarget {
    LogTarget {
        log_group: "/ecs/web".to_string(),
        log_stream_name: format!("ecs/app/{}", TASK_ID),
    }
}

pub fn awslogs_task_definition(revision: i32) -> TaskDefinition {
    let mut options = HashMap::new();
    options.insert("awslogs-group".to_string(), "/ecs/web".to_string());
    options.insert("awslogs-stream-prefix".to_string(), "ecs".to_string());

    TaskDefinition {
        family: "web".to_string(),
        revision,
        container_definitions: vec![ContainerDefinition {
            name: "app".to_string(),
            log_configuration: Some(LogConfiguration {
                log_driver: "awslogs".to_string(),
                options,
            }),
        }],
    }
}

pub fn json_file_task_definition(revision: i32) -> TaskDefinition {
    let mut definition = awslogs_task_definition(revision);
    if let Some(config) = definition.container_definitions[0].log_configuration.as_mut() {
        config.log_driver = "json-file".to_string();
    }
    definition
}
