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

//! Log event domain

pub mod watermark;

pub use self::watermark::LogWatermark;

/// A single event returned by a log query
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LogEvent {
    pub event_id: String,
    /// Milliseconds since the Unix epoch
    pub timestamp: i64,
    pub log_stream_name: String,
    pub message: String,
}

/// Parameters of one filter-log-events request
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LogQuery {
    pub log_group: String,
    pub log_stream_names: Vec<String>,
    pub start_time: Option<i64>,
    pub next_token: Option<String>,
}

#[derive(Debug, Clone, Default)]
pub struct LogEventPage {
    pub events: Vec<LogEvent>,
    pub next_token: Option<String>,
}

/// Destination for rendered log events
pub trait LogEventSink {
    fn emit(&mut self, event: &LogEvent) -> std::io::Result<()>;
}

impl LogEventSink for Vec<LogEvent> {
    fn emit(&mut self, event: &LogEvent) -> std::io::Result<()> {
        self.push(event.clone());
        Ok(())
    }
}
