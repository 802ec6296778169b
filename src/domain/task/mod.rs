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

//! Task domain

pub mod definition;
pub mod follow;
pub mod run;
pub mod runner;

pub use self::definition::{ContainerDefinition, LogConfiguration, LogTarget, TaskDefinition};
pub use self::follow::{FollowOptions, LogPass, TaskFollower};
pub use self::run::{task_id_from_arn, RunTaskOutput, TaskDescription, TaskRun, TaskStatus};
pub use self::runner::{StartedTask, TaskRunner};
