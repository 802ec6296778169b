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

//! Task definition model

use crate::infrastructure::constants::{
    AWSLOGS_DRIVER, AWSLOGS_GROUP_OPTION, AWSLOGS_STREAM_PREFIX_OPTION,
};
use std::collections::HashMap;

/// A described task definition, reduced to what the runner needs
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TaskDefinition {
    pub family: String,
    pub revision: i32,
    pub container_definitions: Vec<ContainerDefinition>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ContainerDefinition {
    pub name: String,
    pub log_configuration: Option<LogConfiguration>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LogConfiguration {
    pub log_driver: String,
    pub options: HashMap<String, String>,
}

/// Log group and stream a task's first container writes to
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LogTarget {
    pub log_group: String,
    pub log_stream_name: String,
}

impl TaskDefinition {
    /// `family:revision`, using the described revision unless one is given
    pub fn qualified_name(&self, family: &str, revision: Option<&str>) -> String {
        match revision {
            Some(rev) if !rev.is_empty() => format!("{}:{}", family, rev),
            _ => format!("{}:{}", family, self.revision),
        }
    }

    /// Resolve the log stream of the first container for `task_id`.
    ///
    /// Returns `None` when the first container has no `awslogs` configuration
    /// or no log group, in which case there is nothing to follow.
    pub fn log_target(&self, task_id: &str) -> Option<LogTarget> {
        let container = self.container_definitions.first()?;
        let log_config = container.log_configuration.as_ref()?;

        if log_config.log_driver != AWSLOGS_DRIVER {
            return None;
        }

        let log_group = log_config.options.get(AWSLOGS_GROUP_OPTION)?.clone();
        let prefix = log_config
            .options
            .get(AWSLOGS_STREAM_PREFIX_OPTION)
            .map(String::as_str)
            .unwrap_or_default();

        Some(LogTarget {
            log_group,
            log_stream_name: format!("{}/{}/{}", prefix, container.name, task_id),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn awslogs_definition(driver: &str) -> TaskDefinition {
        let mut options = HashMap::new();
        options.insert("awslogs-group".to_string(), "/ecs/web".to_string());
        options.insert("awslogs-stream-prefix".to_string(), "ecs".to_string());

        TaskDefinition {
            family: "web".to_string(),
            revision: 7,
            container_definitions: vec![
                ContainerDefinition {
                    name: "app".to_string(),
                    log_configuration: Some(LogConfiguration {
                        log_driver: driver.to_string(),
                        options,
                    }),
                },
                ContainerDefinition {
                    name: "sidecar".to_string(),
                    log_configuration: None,
                },
            ],
        }
    }

    #[test]
    fn test_qualified_name_defaults_to_described_revision() {
        let td = awslogs_definition("awslogs");
        assert_eq!(td.qualified_name("web", None), "web:7");
        assert_eq!(td.qualified_name("web", Some("")), "web:7");
        assert_eq!(td.qualified_name("web", Some("3")), "web:3");
    }

    #[test]
    fn test_log_target_uses_first_container() {
        let td = awslogs_definition("awslogs");
        let target = td.log_target("0f1e2d").unwrap();
        assert_eq!(target.log_group, "/ecs/web");
        assert_eq!(target.log_stream_name, "ecs/app/0f1e2d");
    }

    #[test]
    fn test_log_target_other_driver() {
        let td = awslogs_definition("json-file");
        assert!(td.log_target("0f1e2d").is_none());
    }

    #[test]
    fn test_log_target_without_containers() {
        let td = TaskDefinition::default();
        assert!(td.log_target("0f1e2d").is_none());
    }
}
