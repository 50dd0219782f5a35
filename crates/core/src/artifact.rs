// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Per-artifact download tracking.
//!
//! A workload may fetch several artifacts concurrently before it can start;
//! the status holds one of these per artifact identifier.

use serde::{Deserialize, Serialize};

/// Progress of a single artifact download.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum DownloadArtifactState {
    /// Download not yet started
    #[default]
    Pending,
    /// Transfer in progress
    Downloading,
    /// Artifact fetched and unpacked
    Done,
    /// Transfer failed; the workload cannot start with this artifact missing
    Failed,
}

impl DownloadArtifactState {
    pub fn is_done(&self) -> bool {
        matches!(self, DownloadArtifactState::Done)
    }

    pub fn is_failed(&self) -> bool {
        matches!(self, DownloadArtifactState::Failed)
    }
}

crate::simple_display! {
    DownloadArtifactState {
        Pending => "Pending",
        Downloading => "Downloading",
        Done => "Done",
        Failed => "Failed",
    }
}

/// Status of one artifact fetch feeding the workload.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct DownloadArtifactStatus {
    pub state: DownloadArtifactState,
    /// Diagnostic set when the download fails
    #[serde(skip_serializing_if = "String::is_empty")]
    pub message: String,
}

#[cfg(test)]
#[path = "artifact_tests.rs"]
mod tests;
