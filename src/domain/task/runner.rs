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

use super::definition::TaskDefinition;
use super::run::TaskRun;
use crate::infrastructure::aws::EcsApi;
use crate::shared::error::EcsctlError;

/// A task that was accepted by the scheduler, with the definition it ran from
#[derive(Debug, Clone)]
pub struct StartedTask {
    pub run: TaskRun,
    pub definition: TaskDefinition,
}

pub struct TaskRunner<'a> {
    client: &'a dyn EcsApi,
    cluster: String,
}

impl<'a> TaskRunner<'a> {
    pub fn new(client: &'a dyn EcsApi, cluster: impl Into<String>) -> Self {
        Self {
            client,
            cluster: cluster.into(),
        }
    }

    pub fn cluster(&self) -> &str {
        &self.cluster
    }

    /// Describe `family` and run `family:revision`, where the revision
    /// defaults to the latest one reported by the describe call.
    pub async fn run(
        &self,
        family: &str,
        revision: Option<&str>,
    ) -> Result<StartedTask, EcsctlError> {
        let definition = self.client.describe_task_definition(family).await?;
        let qualified = definition.qualified_name(family, revision);

        let output = self.client.run_task(&self.cluster, &qualified).await?;

        let description = match output.tasks.into_iter().next() {
            Some(task) => task,
            None => {
                let reason = output
                    .failure_reasons
                    .first()
                    .cloned()
                    .unwrap_or_else(|| "no tasks were started".to_string());
                return Err(EcsctlError::TaskFailedToRun(reason));
            }
        };

        let run = TaskRun::new(self.cluster.clone(), description);
        tracing::info!(task_definition = %qualified, task_id = %run.task_id, "task started");

        Ok(StartedTask { run, definition })
    }
}
