// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Notebook lifecycle state and classification queries.
//!
//! The state is an open set on the wire (a plain string in persisted
//! documents) but a closed sum type here. The empty string is the zero
//! value of a status that no controller has touched yet; it is never
//! assigned as a target state.

use serde::{Deserialize, Serialize};
use std::str::FromStr;
use thiserror::Error;

/// Lifecycle state of a Notebook workload.
///
/// The success path runs `WaitingForVolume`/`WaitingForArtifact` →
/// `PodStarting` → `Running` → `Finished`. Any `*Error` variant halts
/// forward progress until externally remediated; `Teardown` follows either
/// outcome once cleanup begins. No transition graph is enforced — the
/// controller owns transition policy.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum NotebookState {
    /// Zero value: the controller has not initialized this status yet.
    #[default]
    #[serde(rename = "")]
    Unset,
    /// Unclassified failure; details in the status message
    Error,
    /// Blocked on the workspace volume becoming available
    WaitingForVolume,
    /// Blocked on one or more artifact downloads
    WaitingForArtifact,
    /// An artifact download failed
    DownloadArtifactError,
    /// Creating the ingress route failed
    IngressCreateError,
    /// Creating the service failed
    ServiceCreateError,
    /// Workload exited successfully
    Finished,
    /// Pod scheduled, containers not yet running
    PodStarting,
    /// Workload is serving
    Running,
    /// Cleanup of dependent resources in progress
    Teardown,
}

impl NotebookState {
    /// True iff the workload reached its terminal success state.
    pub fn is_success(&self) -> bool {
        matches!(self, NotebookState::Finished)
    }

    /// True iff the workload is in a terminal infra error state.
    ///
    /// The waiting and starting states block progress but are pending,
    /// not failed — they are excluded here.
    pub fn is_errored(&self) -> bool {
        matches!(
            self,
            NotebookState::Error
                | NotebookState::DownloadArtifactError
                | NotebookState::IngressCreateError
                | NotebookState::ServiceCreateError
        )
    }

    /// True iff the workload is blocked on a precondition expected to
    /// self-resolve (or be retried externally).
    pub fn is_pending(&self) -> bool {
        matches!(
            self,
            NotebookState::WaitingForVolume
                | NotebookState::WaitingForArtifact
                | NotebookState::PodStarting
        )
    }

    /// True iff this is the uninitialized zero value.
    pub fn is_unset(&self) -> bool {
        matches!(self, NotebookState::Unset)
    }
}

crate::simple_display! {
    NotebookState {
        Unset => "",
        Error => "Error",
        WaitingForVolume => "WaitingForVolume",
        WaitingForArtifact => "WaitingForArtifact",
        DownloadArtifactError => "DownloadArtifactError",
        IngressCreateError => "IngressCreateError",
        ServiceCreateError => "ServiceCreateError",
        Finished => "Finished",
        PodStarting => "PodStarting",
        Running => "Running",
        Teardown => "Teardown",
    }
}

/// A state string that is not one of the enumerated lifecycle states.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown notebook state: {0:?}")]
pub struct UnknownState(pub String);

impl FromStr for NotebookState {
    type Err = UnknownState;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "" => Ok(NotebookState::Unset),
            "Error" => Ok(NotebookState::Error),
            "WaitingForVolume" => Ok(NotebookState::WaitingForVolume),
            "WaitingForArtifact" => Ok(NotebookState::WaitingForArtifact),
            "DownloadArtifactError" => Ok(NotebookState::DownloadArtifactError),
            "IngressCreateError" => Ok(NotebookState::IngressCreateError),
            "ServiceCreateError" => Ok(NotebookState::ServiceCreateError),
            "Finished" => Ok(NotebookState::Finished),
            "PodStarting" => Ok(NotebookState::PodStarting),
            "Running" => Ok(NotebookState::Running),
            "Teardown" => Ok(NotebookState::Teardown),
            other => Err(UnknownState(other.to_string())),
        }
    }
}

#[cfg(test)]
#[path = "state_tests.rs"]
mod tests;
