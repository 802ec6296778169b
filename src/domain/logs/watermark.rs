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

use std::collections::HashSet;

/// Highest log timestamp seen so far, plus the event IDs seen at exactly
/// that timestamp.
///
/// Queries are re-issued with `startTime = timestamp`, so the boundary
/// events come back on every pass; the ID set filters them out.
#[derive(Debug, Clone, Default)]
pub struct LogWatermark {
    timestamp: Option<i64>,
    seen_event_ids: HashSet<String>,
}

impl LogWatermark {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn timestamp(&self) -> Option<i64> {
        self.timestamp
    }

    pub fn seen_count(&self) -> usize {
        self.seen_event_ids.len()
    }

    /// Record an event. Returns `true` if it has not been seen at the current
    /// watermark and should be rendered.
    pub fn observe(&mut self, event_id: &str, timestamp: i64) -> bool {
        if self.timestamp.map_or(true, |current| timestamp > current) {
            self.timestamp = Some(timestamp);
            self.seen_event_ids.clear();
        }

        self.seen_event_ids.insert(event_id.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_first_event_sets_watermark() {
        let mut wm = LogWatermark::new();
        assert_eq!(wm.timestamp(), None);
        assert!(wm.observe("a", 100));
        assert_eq!(wm.timestamp(), Some(100));
    }

    #[test]
    fn test_duplicate_at_watermark_is_suppressed() {
        let mut wm = LogWatermark::new();
        assert!(wm.observe("a", 100));
        assert!(!wm.observe("a", 100));
        assert!(wm.observe("b", 100));
        assert_eq!(wm.seen_count(), 2);
    }

    #[test]
    fn test_watermark_is_monotonic() {
        let mut wm = LogWatermark::new();
        wm.observe("a", 100);
        wm.observe("b", 150);
        wm.observe("c", 120);
        assert_eq!(wm.timestamp(), Some(150));
    }

    #[test]
    fn test_advance_clears_seen_ids() {
        let mut wm = LogWatermark::new();
        assert!(wm.observe("a", 100));
        assert!(wm.observe("b", 150));
        assert_eq!(wm.seen_count(), 1);
        // "a" was only remembered for timestamp 100
        assert!(wm.observe("a", 150));
    }
}
