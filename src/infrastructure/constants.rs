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

/// Value of `startedBy` attached to every task this tool launches
pub const STARTED_BY: &str = "ecsctl";

/// Reason recorded on tasks stopped from the signal handler
pub const STOP_REASON: &str = "Stopped by ecsctl on interrupt";

/// Log driver whose streams can be followed
pub const AWSLOGS_DRIVER: &str = "awslogs";
pub const AWSLOGS_GROUP_OPTION: &str = "awslogs-group";
pub const AWSLOGS_STREAM_PREFIX_OPTION: &str = "awslogs-stream-prefix";

/// Follow loop
pub const FOLLOW_POLL_INTERVAL_MS: u64 = 1000;
pub const FOLLOW_LOG_RETRY_LIMIT: u32 = 50;

/// Configuration file resolution
pub const CONFIG_ENV_VAR: &str = "ECSCTL_CONFIG";
pub const DEFAULT_CONFIG_FILE_NAME: &str = ".ecsctl.toml";
