// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Controller-style walks through the Notebook status lifecycle.
//!
//! These drive the status the way the reconcile loop does: mutate observed
//! fields, transition, classify, act on the classification.

use chrono::Duration;
use nb_core::{
    Clock, DownloadArtifactState, DownloadArtifactStatus, FakeClock, NotebookState,
    NotebookStatus, PodPhase, PodStatus,
};

fn live_pod(name: &str, phase: PodPhase) -> PodStatus {
    PodStatus { name: name.to_string(), phase, ..PodStatus::default() }
}

#[test]
fn success_path_from_zero_value_to_finished() {
    let clock = FakeClock::new();
    let mut status = NotebookStatus::default();
    assert!(status.state.is_unset());

    // Artifacts requested before the pod exists
    status.download_artifact_statuses.insert(
        "dataset.parquet".to_string(),
        DownloadArtifactStatus { state: DownloadArtifactState::Downloading, ..Default::default() },
    );
    status.transition_to(NotebookState::WaitingForArtifact, &clock);
    assert!(status.state.is_pending());
    assert!(!status.is_errored());

    // Artifact lands, pod gets scheduled
    clock.advance(Duration::seconds(20));
    if let Some(artifact) = status.download_artifact_statuses.get_mut("dataset.parquet") {
        artifact.state = DownloadArtifactState::Done;
    }
    status.pod_status = Some(live_pod("nb-main", PodPhase::Pending));
    status.transition_to(NotebookState::PodStarting, &clock);
    assert!(status.running_at.is_none());

    // Containers come up
    clock.advance(Duration::seconds(40));
    if let Some(pod) = status.pod_status.as_mut() {
        pod.phase = PodPhase::Running;
    }
    status.transition_to(NotebookState::Running, &clock);
    let started = status.running_at.clone();
    assert_eq!(started, Some(clock.now()));
    status.endpoint_url = "https://nb-abc123.example.com".to_string();
    status.service_name = "nb-abc123-svc".to_string();
    status.ingress_name = "nb-abc123-ing".to_string();
    status.touch(&clock);

    // Workload exits cleanly
    clock.advance(Duration::hours(2));
    if let Some(pod) = status.pod_status.as_mut() {
        pod.phase = PodPhase::Succeeded;
    }
    status.exit_code = 0;
    status.transition_to(NotebookState::Finished, &clock);

    assert!(status.is_success());
    assert!(!status.is_errored());
    // runningAt still reflects first entry into Running
    assert_eq!(status.running_at, started);
    assert_eq!(status.last_updated_at(), Some(clock.now()));
}

#[test]
fn error_path_keeps_classification_and_gc_independent() {
    let clock = FakeClock::new();
    let mut status = NotebookStatus::default();

    status.pod_status = Some(live_pod("nb-main", PodPhase::Running));
    status.transition_to(NotebookState::Running, &clock);

    // Ingress provisioning fails while the pod is still up
    clock.advance(Duration::seconds(10));
    status.message = "ingress create: quota exceeded".to_string();
    status.transition_to(NotebookState::IngressCreateError, &clock);

    assert!(status.is_errored());
    assert!(!status.is_success());
    // Cleanup has not happened: GC still required despite the error state
    assert!(status.needs_garbage_collection());

    // Controller begins teardown; error classification is left behind
    status.transition_to(NotebookState::Teardown, &clock);
    assert!(!status.is_errored());
    assert!(status.needs_garbage_collection());
}

#[test]
fn teardown_retries_until_every_pod_confirms_deletion() {
    let clock = FakeClock::new();
    let mut status = NotebookStatus::default();
    status.pod_status = Some(live_pod("nb-main", PodPhase::Succeeded));
    status.workspace_upload_pod_status = Some(live_pod("nb-ws-upload", PodPhase::Succeeded));
    status.transition_to(NotebookState::Teardown, &clock);

    // Partial failure: the primary pod is gone, the upload pod lingers
    if let Some(pod) = status.pod_status.as_mut() {
        pod.deleted = true;
    }
    status.touch(&clock);
    assert!(status.needs_garbage_collection());

    // Next reconcile confirms the last deletion
    clock.advance(Duration::seconds(5));
    if let Some(pod) = status.workspace_upload_pod_status.as_mut() {
        pod.deleted = true;
    }
    status.touch(&clock);
    assert!(!status.needs_garbage_collection());
}
