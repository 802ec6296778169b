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

//! Cluster listing

use crate::infrastructure::aws::EcsApi;
use crate::shared::error::EcsctlError;

/// One page of a list-clusters response
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ClusterPage {
    pub cluster_arns: Vec<String>,
    pub next_token: Option<String>,
}

/// Walk every page of cluster ARNs, handing each one to `on_arn` as soon as
/// its page arrives. Stops at the first page without a continuation token.
///
/// Any request error aborts the walk; ARNs already handed out stay emitted.
pub async fn for_each_cluster_arn<F>(
    client: &dyn EcsApi,
    mut on_arn: F,
) -> Result<usize, EcsctlError>
where
    F: FnMut(&str) -> std::io::Result<()>,
{
    let mut next_token = None;
    let mut emitted = 0;

    loop {
        let page = client.list_clusters(next_token).await?;

        for arn in &page.cluster_arns {
            on_arn(arn)?;
            emitted += 1;
        }

        match page.next_token {
            Some(token) => next_token = Some(token),
            None => break,
        }
    }

    tracing::debug!(emitted, "cluster listing complete");
    Ok(emitted)
}
