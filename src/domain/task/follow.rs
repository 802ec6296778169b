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

//! Follow a running task's log stream until the task stops.
//!
//! Each iteration drains new log events, refreshes the task status and then
//! sleeps for the poll interval. Failed log queries are tolerated up to
//! `log_retry_limit` consecutive times; a failed status query ends the
//! follow immediately.

use super::definition::LogTarget;
use super::run::{TaskRun, TaskStatus};
use crate::domain::logs::{LogEventSink, LogQuery, LogWatermark};
use crate::infrastructure::aws::EcsApi;
use crate::infrastructure::constants::{FOLLOW_LOG_RETRY_LIMIT, FOLLOW_POLL_INTERVAL_MS};
use crate::shared::error::EcsctlError;
use std::time::Duration;
use tokio::time::sleep;

#[derive(Debug, Clone)]
pub struct FollowOptions {
    pub poll_interval: Duration,
    pub log_retry_limit: u32,
}

impl Default for FollowOptions {
    fn default() -> Self {
        Self {
            poll_interval: Duration::from_millis(FOLLOW_POLL_INTERVAL_MS),
            log_retry_limit: FOLLOW_LOG_RETRY_LIMIT,
        }
    }
}

/// Outcome of one log retrieval pass
#[derive(Debug)]
pub enum LogPass {
    Drained { rendered: usize },
    QueryFailed(EcsctlError),
}

pub struct TaskFollower<'a, S: LogEventSink> {
    client: &'a dyn EcsApi,
    task: TaskRun,
    target: LogTarget,
    sink: S,
    watermark: LogWatermark,
    options: FollowOptions,
    failed_log_queries: u32,
}

impl<'a, S: LogEventSink> TaskFollower<'a, S> {
    pub fn new(client: &'a dyn EcsApi, task: TaskRun, target: LogTarget, sink: S) -> Self {
        Self::with_options(client, task, target, sink, FollowOptions::default())
    }

    pub fn with_options(
        client: &'a dyn EcsApi,
        task: TaskRun,
        target: LogTarget,
        sink: S,
        options: FollowOptions,
    ) -> Self {
        Self {
            client,
            task,
            target,
            sink,
            watermark: LogWatermark::new(),
            options,
            failed_log_queries: 0,
        }
    }

    pub fn task(&self) -> &TaskRun {
        &self.task
    }

    pub fn watermark(&self) -> &LogWatermark {
        &self.watermark
    }

    pub fn sink(&self) -> &S {
        &self.sink
    }

    pub fn into_sink(self) -> S {
        self.sink
    }

    /// Poll until the task is observed STOPPED.
    pub async fn run(&mut self) -> Result<(), EcsctlError> {
        tracing::info!(
            task_id = %self.task.task_id,
            log_group = %self.target.log_group,
            log_stream = %self.target.log_stream_name,
            "following task logs"
        );

        loop {
            self.poll_logs().await?;

            let status = self.refresh_status().await?;
            if status.is_terminal() {
                tracing::info!(task_id = %self.task.task_id, "task stopped");
                return Ok(());
            }

            sleep(self.options.poll_interval).await;
        }
    }

    /// One log pass with the retry ceiling applied.
    pub async fn poll_logs(&mut self) -> Result<(), EcsctlError> {
        match self.drain_log_events().await? {
            LogPass::Drained { rendered } => {
                if rendered > 0 {
                    tracing::debug!(rendered, watermark = ?self.watermark.timestamp(), "rendered log events");
                }
                self.failed_log_queries = 0;
            }
            LogPass::QueryFailed(err) => {
                self.failed_log_queries += 1;
                tracing::debug!(
                    attempt = self.failed_log_queries,
                    limit = self.options.log_retry_limit,
                    error = %err,
                    "log query failed"
                );

                if self.failed_log_queries >= self.options.log_retry_limit {
                    return Err(EcsctlError::LogRetriesExhausted {
                        attempts: self.failed_log_queries,
                        last_error: err.to_string(),
                    });
                }
            }
        }
        Ok(())
    }

    /// Fetch every page of events newer than the watermark and render the
    /// ones not yet seen. Only sink errors are returned as `Err`; query
    /// failures are reported through [`LogPass::QueryFailed`].
    pub async fn drain_log_events(&mut self) -> Result<LogPass, EcsctlError> {
        let mut query = LogQuery {
            log_group: self.target.log_group.clone(),
            log_stream_names: vec![self.target.log_stream_name.clone()],
            start_time: self.watermark.timestamp(),
            next_token: None,
        };
        let mut rendered = 0;

        loop {
            let page = match self.client.filter_log_events(&query).await {
                Ok(page) => page,
                Err(err) => return Ok(LogPass::QueryFailed(err)),
            };

            for event in &page.events {
                if self.watermark.observe(&event.event_id, event.timestamp) {
                    self.sink.emit(event)?;
                    rendered += 1;
                }
            }

            match page.next_token {
                Some(token) => query.next_token = Some(token),
                None => break,
            }
        }

        Ok(LogPass::Drained { rendered })
    }

    /// Re-query the task's status. Any error is returned to the caller.
    pub async fn refresh_status(&mut self) -> Result<TaskStatus, EcsctlError> {
        let tasks = self
            .client
            .describe_tasks(&self.task.cluster, std::slice::from_ref(&self.task.task_id))
            .await?;

        let status = tasks
            .into_iter()
            .next()
            .map(|t| t.last_status)
            .ok_or_else(|| EcsctlError::not_found("Task", self.task.task_id.clone()))?;

        if status != self.task.last_status {
            tracing::debug!(task_id = %self.task.task_id, from = %self.task.last_status, to = %status, "task status changed");
        }
        self.task.update_status(status.clone());
        Ok(status)
    }
}
