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

use std::fmt;
use std::str::FromStr;

/// Lifecycle status reported for a task
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TaskStatus {
    Provisioning,
    Pending,
    Activating,
    Running,
    Deactivating,
    Stopping,
    Deprovisioning,
    Stopped,
    Other(String),
}

impl TaskStatus {
    pub fn as_str(&self) -> &str {
        match self {
            TaskStatus::Provisioning => "PROVISIONING",
            TaskStatus::Pending => "PENDING",
            TaskStatus::Activating => "ACTIVATING",
            TaskStatus::Running => "RUNNING",
            TaskStatus::Deactivating => "DEACTIVATING",
            TaskStatus::Stopping => "STOPPING",
            TaskStatus::Deprovisioning => "DEPROVISIONING",
            TaskStatus::Stopped => "STOPPED",
            TaskStatus::Other(s) => s,
        }
    }

    pub fn is_terminal(&self) -> bool {
        matches!(self, TaskStatus::Stopped)
    }
}

impl FromStr for TaskStatus {
    type Err = std::convert::Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(match s {
            "PROVISIONING" => TaskStatus::Provisioning,
            "PENDING" => TaskStatus::Pending,
            "ACTIVATING" => TaskStatus::Activating,
            "RUNNING" => TaskStatus::Running,
            "DEACTIVATING" => TaskStatus::Deactivating,
            "STOPPING" => TaskStatus::Stopping,
            "DEPROVISIONING" => TaskStatus::Deprovisioning,
            "STOPPED" => TaskStatus::Stopped,
            other => TaskStatus::Other(other.to_string()),
        })
    }
}

impl fmt::Display for TaskStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A task as returned by run-task or describe-tasks
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TaskDescription {
    pub task_arn: String,
    pub last_status: TaskStatus,
}

/// Result of a run-task request
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RunTaskOutput {
    pub tasks: Vec<TaskDescription>,
    pub failure_reasons: Vec<String>,
}

/// One invocation of a task definition on a cluster
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TaskRun {
    pub task_arn: String,
    pub task_id: String,
    pub cluster: String,
    pub last_status: TaskStatus,
}

impl TaskRun {
    pub fn new(cluster: impl Into<String>, description: TaskDescription) -> Self {
        let task_id = task_id_from_arn(&description.task_arn).to_string();
        Self {
            task_arn: description.task_arn,
            task_id,
            cluster: cluster.into(),
            last_status: description.last_status,
        }
    }

    pub fn update_status(&mut self, status: TaskStatus) {
        self.last_status = status;
    }

    pub fn is_stopped(&self) -> bool {
        self.last_status.is_terminal()
    }
}

/// Task ID is everything after the last `/` of the ARN
pub fn task_id_from_arn(arn: &str) -> &str {
    arn.rsplit('/').next().unwrap_or(arn)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_task_id_from_arn() {
        assert_eq!(
            task_id_from_arn("arn:aws:ecs:us-east-1:123456789012:task/default/0f1e2d3c"),
            "0f1e2d3c"
        );
        assert_eq!(
            task_id_from_arn("arn:aws:ecs:us-east-1:123456789012:task/0f1e2d3c"),
            "0f1e2d3c"
        );
        assert_eq!(task_id_from_arn("0f1e2d3c"), "0f1e2d3c");
    }

    #[test]
    fn test_status_parse() {
        assert_eq!("RUNNING".parse::<TaskStatus>().unwrap(), TaskStatus::Running);
        assert_eq!("STOPPED".parse::<TaskStatus>().unwrap(), TaskStatus::Stopped);
        assert_eq!(
            "SOMETHING_NEW".parse::<TaskStatus>().unwrap(),
            TaskStatus::Other("SOMETHING_NEW".to_string())
        );
        assert!(TaskStatus::Stopped.is_terminal());
        assert!(!TaskStatus::Stopping.is_terminal());
    }

    #[test]
    fn test_task_run_tracks_status() {
        let mut run = TaskRun::new(
            "default",
            TaskDescription {
                task_arn: "arn:aws:ecs:eu-west-1:1:task/default/abc".to_string(),
                last_status: TaskStatus::Pending,
            },
        );
        assert_eq!(run.task_id, "abc");
        assert!(!run.is_stopped());

        run.update_status(TaskStatus::Stopped);
        assert!(run.is_stopped());
    }
}
