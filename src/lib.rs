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

// Core modules
pub mod cli;
pub mod domain;
pub mod infrastructure;
pub mod shared;

// Re-export commonly used types
pub use domain::cluster::{for_each_cluster_arn, ClusterPage};
pub use domain::config::{EcsctlConf, OutputConf};
pub use domain::logs::{LogEvent, LogEventPage, LogEventSink, LogQuery, LogWatermark};
pub use domain::task::{
    ContainerDefinition, FollowOptions, LogConfiguration, LogPass, LogTarget, RunTaskOutput,
    StartedTask, TaskDefinition, TaskDescription, TaskFollower, TaskRun, TaskRunner, TaskStatus,
};
pub use infrastructure::aws::{AwsEcsClient, EcsApi};
pub use shared::{EcsctlError, Result};
