// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! The Notebook custom resource: desired state and CRD wiring.
//!
//! The status half lives in [`crate::status`]; this module carries the
//! spec types and the kube derive that ties the two together. The column
//! set mirrors what operators inspect first: lifecycle state, staleness,
//! age, and the backing repo handle.

use crate::status::NotebookStatus;
use crate::upload::NotebookUpload;
use kube::CustomResource;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Desired state of a Notebook workload.
#[derive(CustomResource, Debug, Clone, PartialEq, Serialize, Deserialize)]
#[kube(
    group = "nb.dev",
    version = "v1",
    kind = "Notebook",
    namespaced,
    status = "NotebookStatus",
    shortname = "nb",
    schema = "disabled",
    printcolumn = r#"{"name":"State","type":"string","jsonPath":".status.state"}"#,
    printcolumn = r#"{"name":"LastUpdatedAt","type":"date","jsonPath":".status.lastUpdatedAt"}"#,
    printcolumn = r#"{"name":"Age","type":"date","jsonPath":".metadata.creationTimestamp"}"#,
    printcolumn = r#"{"name":"RepoHandle","type":"string","jsonPath":".spec.notebookRepoHandle"}"#
)]
#[serde(rename_all = "camelCase")]
pub struct NotebookSpec {
    /// Display name of the notebook
    pub name: String,
    /// Workspace content to materialize before start
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub workspace: Option<Workspace>,
    pub project_handle: String,
    pub team_handle: String,
    pub user_handle: String,
    /// Stable workload identifier; seeds status sub-resource defaults
    pub handle: String,
    pub job_handle: String,
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub notebook_repo_handle: String,
    /// Auth token the workload uses to call back to the platform
    pub token: String,
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub api_key: String,
    /// Seconds of allowed runtime; zero means unbounded
    #[serde(default, rename = "TTL")]
    pub ttl: i64,
    #[serde(default)]
    pub upload: NotebookUpload,
    pub instance: Instance,
    pub details: NotebookDetails,
    /// Extra environment for the workload container
    #[serde(default, skip_serializing_if = "HashMap::is_empty")]
    pub env: HashMap<String, String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub volume_mounts: Vec<VolumeMount>,
}

/// Workspace content fetched into the workload before start.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Workspace {
    pub url: String,
    /// Ref to check out; empty means the remote default branch
    #[serde(rename = "ref", skip_serializing_if = "String::is_empty")]
    pub reference: String,
}

/// Machine placement for the workload pod.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Instance {
    /// Platform instance type (e.g. "C5", "P4000")
    pub instance_type: String,
}

/// What to run inside the workload pod.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct NotebookDetails {
    pub image: ImageDetails,
    pub command: String,
    #[serde(skip_serializing_if = "String::is_empty")]
    pub work_dir: String,
}

/// Container image for the workload.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ImageDetails {
    pub name: String,
    /// Empty tag means the registry default
    #[serde(skip_serializing_if = "String::is_empty")]
    pub tag: String,
}

/// Additional volume mounted into the workload container.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct VolumeMount {
    pub name: String,
    pub mount_path: String,
    #[serde(skip_serializing_if = "String::is_empty")]
    pub sub_path: String,
    pub read_only: bool,
}

impl Notebook {
    /// Seed status sub-resource defaults from the spec's stable handle.
    ///
    /// Invoked once per owning resource when the controller first admits
    /// it; idempotent thereafter.
    pub fn set_defaults(&mut self) {
        let handle = self.spec.handle.clone();
        self.status
            .get_or_insert_with(NotebookStatus::default)
            .platform_status
            .set_defaults(&handle);
    }
}

#[cfg(test)]
#[path = "notebook_tests.rs"]
mod tests;
