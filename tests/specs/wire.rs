// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! The persisted document contract.
//!
//! Fixtures here are shaped like what the API server hands back: a full
//! Notebook object and a status written by an older controller revision.

use nb_core::{Notebook, NotebookState, NotebookStatus};
use similar_asserts::assert_eq;

const FULL_NOTEBOOK: &str = r#"{
    "apiVersion": "nb.dev/v1",
    "kind": "Notebook",
    "metadata": {
        "name": "fraud-model-eda",
        "namespace": "team-a"
    },
    "spec": {
        "name": "fraud-model-eda",
        "workspace": {"url": "https://git.example.com/team-a/fraud-model.git", "ref": "main"},
        "projectHandle": "prj-1",
        "teamHandle": "team-a",
        "userHandle": "u-42",
        "handle": "nb-abc123",
        "jobHandle": "job-9",
        "notebookRepoHandle": "repo-5",
        "token": "t0ken",
        "TTL": 3600,
        "upload": {
            "s3Upload": {"bucket": "nb-snapshots", "prefix": "team-a"},
            "imageUpload": {
                "registry": "cmVnaXN0cnkuZXhhbXBsZS5jb20=",
                "repository": "dGVhbS9ub3RlYm9vaw==",
                "username": "dXNlcg==",
                "password": "cGFzcw=="
            }
        },
        "instance": {"instanceType": "C5"},
        "details": {
            "image": {"name": "jupyter/scipy-notebook", "tag": "lab-4"},
            "command": "start-notebook.sh",
            "workDir": "/home/jovyan"
        },
        "volumeMounts": [{"name": "scratch", "mountPath": "/scratch", "readOnly": false}]
    },
    "status": {
        "state": "Running",
        "platformStatus": {"handle": "nb-abc123"},
        "endpointURL": "https://nb-abc123.example.com",
        "imageSecretName": "nb-abc123-pull",
        "lastUpdatedAt": "2026-08-07T12:34:56Z",
        "runningAt": "2026-08-07T12:30:00Z",
        "exitCode": 0,
        "podStatus": {"name": "nb-main", "phase": "Running", "deleted": false},
        "downloadArtifactStatuses": {
            "dataset.parquet": {"state": "Done"}
        },
        "serviceName": "nb-abc123-svc",
        "ingressName": "nb-abc123-ing",
        "notebookNodeName": "node-7"
    }
}"#;

#[test]
fn full_document_round_trips() {
    let nb: Notebook = serde_json::from_str(FULL_NOTEBOOK).unwrap();

    assert_eq!(nb.spec.handle, "nb-abc123");
    assert!(nb.spec.upload.has_credentials());
    let creds = nb.spec.upload.image_credentials();
    assert_eq!(creds.registry, "registry.example.com");
    assert_eq!(creds.username, "user");

    let status = nb.status.as_ref().unwrap();
    assert_eq!(status.state, NotebookState::Running);
    assert!(!status.is_success());
    assert!(status.needs_garbage_collection());

    // Re-serialization reproduces the original document exactly
    let original: serde_json::Value = serde_json::from_str(FULL_NOTEBOOK).unwrap();
    let reserialized = serde_json::to_value(&nb).unwrap();
    assert_eq!(reserialized, original);
}

#[test]
fn legacy_status_with_deprecated_job_fields_still_parses() {
    let doc = r#"{
        "state": "Finished",
        "platformStatus": {"handle": "nb-old"},
        "endpointURL": "",
        "imageSecretName": "",
        "exitCode": 0,
        "nbconvertJobStatus": {"succeeded": 1, "startTime": "2024-01-01T00:00:00Z"},
        "workspaceUploadJobStatus": {"failed": 1},
        "imageCacheJobStatus": {"active": 1},
        "workspaceExportJobStatus": {"succeeded": 1},
        "imageExportJobStatus": {"succeeded": 1}
    }"#;
    let status: NotebookStatus = serde_json::from_str(doc).unwrap();
    assert!(status.is_success());
    assert!(!status.needs_garbage_collection());
    assert!(status.nbconvert_job_status.is_some());

    // Current controllers never write these fields, but they survive a
    // read-modify-write cycle untouched.
    let rewritten = serde_json::to_value(&status).unwrap();
    assert_eq!(rewritten["nbconvertJobStatus"]["succeeded"], 1);
    assert_eq!(rewritten["workspaceExportJobStatus"]["succeeded"], 1);
}

#[test]
fn zero_value_status_serializes_to_minimal_document() {
    let json = serde_json::to_value(NotebookStatus::default()).unwrap();
    let mut keys: Vec<_> = json.as_object().unwrap().keys().cloned().collect();
    keys.sort();
    assert_eq!(keys, vec!["endpointURL", "exitCode", "imageSecretName", "platformStatus", "state"]);
    assert_eq!(json["state"], "");
}
