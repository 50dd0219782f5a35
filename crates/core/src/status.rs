// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Observed state of a Notebook workload.
//!
//! The controller updates raw fields as it watches infrastructure, then
//! consumes the classification queries here to decide its next action.
//! Every query is total over the zero value: a freshly created status with
//! the sentinel state and no pod records answers all of them without
//! failing.

use crate::artifact::DownloadArtifactStatus;
use crate::clock::Clock;
use crate::pod::PodStatus;
use crate::state::NotebookState;
use k8s_openapi::api::batch::v1::JobStatus;
use k8s_openapi::apimachinery::pkg::apis::meta::v1::Time;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Controller-facing interface over any tracked resource status.
///
/// The reconcile loop drives several resource kinds through the same
/// observe/classify/act cycle; this is the seam it works against.
pub trait Status {
    fn last_updated_at(&self) -> Option<Time>;
    fn set_last_updated_at(&mut self, ts: Time);
    fn is_success(&self) -> bool;
    fn is_errored(&self) -> bool;
    fn needs_garbage_collection(&self) -> bool;
    /// Independent deep copy for handing off to concurrent observers.
    fn clone_status(&self) -> Box<dyn Status>;
}

/// Record of the upstream platform job backing this workload.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct PlatformJobStatus {
    /// Stable workload handle this record is keyed by
    pub handle: String,
}

impl PlatformJobStatus {
    /// Build the initial record for a workload handle.
    pub fn for_handle(handle: impl Into<String>) -> Self {
        Self { handle: handle.into() }
    }

    /// Seed defaults for a freshly created workload. No-op once a handle
    /// is present.
    pub fn set_defaults(&mut self, handle: &str) {
        if self.handle.is_empty() {
            self.handle = handle.to_string();
        }
    }
}

/// Observed state of a Notebook workload.
///
/// Created implicitly as the zero value alongside its owning resource and
/// mutated exclusively by the controller. The `*_job_status` fields are
/// legacy wire fields: never written by current controllers, still
/// accepted when reading statuses persisted by older ones.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct NotebookStatus {
    pub state: NotebookState,
    pub platform_status: PlatformJobStatus,
    #[serde(rename = "endpointURL")]
    pub endpoint_url: String,
    /// Human-readable diagnostic, set on error states
    #[serde(skip_serializing_if = "String::is_empty")]
    pub message: String,
    /// Name of the credential secret created for private-registry pulls;
    /// empty if none was required
    pub image_secret_name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub last_updated_at: Option<Time>,
    /// Set once, at the transition into `Running`; never overwritten
    #[serde(skip_serializing_if = "Option::is_none")]
    pub running_at: Option<Time>,
    /// Meaningful only once the workload has exited
    pub exit_code: i32,
    /// Primary workload pod; `None` means not yet created or already reaped
    #[serde(skip_serializing_if = "Option::is_none")]
    pub pod_status: Option<PodStatus>,
    #[serde(skip_serializing_if = "HashMap::is_empty")]
    pub download_artifact_statuses: HashMap<String, DownloadArtifactStatus>,
    /// Deprecated, retained for backwards compatibility
    #[serde(skip_serializing_if = "Option::is_none")]
    pub nbconvert_job_status: Option<JobStatus>,
    /// Deprecated, retained for backwards compatibility
    #[serde(skip_serializing_if = "Option::is_none")]
    pub workspace_upload_job_status: Option<JobStatus>,
    /// Deprecated, retained for backwards compatibility
    #[serde(skip_serializing_if = "Option::is_none")]
    pub image_cache_job_status: Option<JobStatus>,
    /// Workspace snapshot upload pod, tracked independently of the
    /// primary pod
    #[serde(skip_serializing_if = "Option::is_none")]
    pub workspace_upload_pod_status: Option<PodStatus>,
    /// Image layer cache pod, tracked independently of the primary pod
    #[serde(skip_serializing_if = "Option::is_none")]
    pub image_cache_pod_status: Option<PodStatus>,
    #[serde(skip_serializing_if = "String::is_empty")]
    pub service_name: String,
    #[serde(skip_serializing_if = "String::is_empty")]
    pub ingress_name: String,
    #[serde(skip_serializing_if = "String::is_empty")]
    pub notebook_node_name: String,
    /// Deprecated, retained for backwards compatibility; no longer set on
    /// notebooks
    #[serde(skip_serializing_if = "Option::is_none")]
    pub workspace_export_job_status: Option<JobStatus>,
    /// Deprecated, retained for backwards compatibility; no longer set on
    /// notebooks
    #[serde(skip_serializing_if = "Option::is_none")]
    pub image_export_job_status: Option<JobStatus>,
}

impl NotebookStatus {
    pub fn last_updated_at(&self) -> Option<Time> {
        self.last_updated_at.clone()
    }

    pub fn set_last_updated_at(&mut self, ts: Time) {
        self.last_updated_at = Some(ts);
    }

    /// True iff the workload reached its terminal success state.
    pub fn is_success(&self) -> bool {
        self.state.is_success()
    }

    /// True iff the workload is in a terminal infra error state.
    pub fn is_errored(&self) -> bool {
        self.state.is_errored()
    }

    /// Whether any tracked pod still awaits deletion.
    ///
    /// A pod status that was never recorded counts as already deleted, so
    /// the predicate flips to false only when every pod that was ever
    /// observed reports deleted. Independent of `state`: a workload can sit
    /// in an error state while its pods are still being torn down.
    pub fn needs_garbage_collection(&self) -> bool {
        !pod_gone(self.pod_status.as_ref())
            || !pod_gone(self.workspace_upload_pod_status.as_ref())
            || !pod_gone(self.image_cache_pod_status.as_ref())
    }

    /// Move to `next`, stamping `lastUpdatedAt` and — on the first entry
    /// into `Running` — `runningAt`. Re-entering `Running` never recomputes
    /// `runningAt`.
    pub fn transition_to(&mut self, next: NotebookState, clock: &impl Clock) {
        let now = clock.now();
        if next == NotebookState::Running && self.running_at.is_none() {
            self.running_at = Some(now.clone());
        }
        tracing::debug!(from = %self.state, to = %next, "notebook state transition");
        self.state = next;
        self.last_updated_at = Some(now);
    }

    /// Stamp `lastUpdatedAt` after a field mutation that is not a state
    /// transition (pod status refresh, endpoint assignment, ...).
    pub fn touch(&mut self, clock: &impl Clock) {
        self.last_updated_at = Some(clock.now());
    }
}

impl Status for NotebookStatus {
    fn last_updated_at(&self) -> Option<Time> {
        NotebookStatus::last_updated_at(self)
    }

    fn set_last_updated_at(&mut self, ts: Time) {
        NotebookStatus::set_last_updated_at(self, ts);
    }

    fn is_success(&self) -> bool {
        NotebookStatus::is_success(self)
    }

    fn is_errored(&self) -> bool {
        NotebookStatus::is_errored(self)
    }

    fn needs_garbage_collection(&self) -> bool {
        NotebookStatus::needs_garbage_collection(self)
    }

    fn clone_status(&self) -> Box<dyn Status> {
        Box::new(self.clone())
    }
}

/// Absent pod records count as deleted for GC purposes.
fn pod_gone(status: Option<&PodStatus>) -> bool {
    status.map_or(true, PodStatus::is_deleted)
}

#[cfg(test)]
#[path = "status_tests.rs"]
mod tests;
