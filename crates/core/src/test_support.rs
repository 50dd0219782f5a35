// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Shared test helpers for use across crates.
//!
//! Gated behind `#[cfg(any(test, feature = "test-support"))]`.

use crate::pod::{PodPhase, PodStatus};
use crate::status::NotebookStatus;

// ── Proptest strategies ─────────────────────────────────────────────────

/// Proptest strategies for core state machine types.
pub mod strategies {
    use crate::state::NotebookState;
    use proptest::prelude::*;

    pub fn arb_notebook_state() -> impl Strategy<Value = NotebookState> {
        prop_oneof![
            Just(NotebookState::Unset),
            Just(NotebookState::Error),
            Just(NotebookState::WaitingForVolume),
            Just(NotebookState::WaitingForArtifact),
            Just(NotebookState::DownloadArtifactError),
            Just(NotebookState::IngressCreateError),
            Just(NotebookState::ServiceCreateError),
            Just(NotebookState::Finished),
            Just(NotebookState::PodStarting),
            Just(NotebookState::Running),
            Just(NotebookState::Teardown),
        ]
    }
}

// ── Status factory functions ────────────────────────────────────────────

/// A pod status in the given phase, not yet deleted.
pub fn live_pod(name: &str, phase: PodPhase) -> PodStatus {
    PodStatus { name: name.to_string(), phase, reason: String::new(), deleted: false }
}

/// A pod status confirmed gone from the API server.
pub fn reaped_pod(name: &str) -> PodStatus {
    PodStatus {
        name: name.to_string(),
        phase: PodPhase::Succeeded,
        reason: String::new(),
        deleted: true,
    }
}

/// A status with all three tracked pods live, as mid-run workloads have.
pub fn status_with_live_pods() -> NotebookStatus {
    NotebookStatus {
        pod_status: Some(live_pod("nb-main", PodPhase::Running)),
        workspace_upload_pod_status: Some(live_pod("nb-ws-upload", PodPhase::Pending)),
        image_cache_pod_status: Some(live_pod("nb-image-cache", PodPhase::Pending)),
        ..NotebookStatus::default()
    }
}
