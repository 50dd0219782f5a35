// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Last-observed status of pods the controller tracks per workload.
//!
//! The controller owns the primary workload pod plus auxiliary pods for
//! workspace snapshot upload and image layer caching. Each is tracked by
//! reference in the Notebook status; this type is that reference.

use serde::{Deserialize, Serialize};

/// Kubelet-reported phase at last observation.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum PodPhase {
    #[default]
    Pending,
    Running,
    Succeeded,
    Failed,
    Unknown,
}

crate::simple_display! {
    PodPhase {
        Pending => "Pending",
        Running => "Running",
        Succeeded => "Succeeded",
        Failed => "Failed",
        Unknown => "Unknown",
    }
}

/// Last-observed status of a tracked pod.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct PodStatus {
    /// Pod name in the cluster
    pub name: String,
    pub phase: PodPhase,
    /// Human-readable reason for the current phase
    #[serde(skip_serializing_if = "String::is_empty")]
    pub reason: String,
    /// Set once the pod is confirmed gone from the API server
    pub deleted: bool,
}

impl PodStatus {
    /// Whether this pod has been confirmed deleted.
    pub fn is_deleted(&self) -> bool {
        self.deleted
    }
}

#[cfg(test)]
#[path = "pod_tests.rs"]
mod tests;
