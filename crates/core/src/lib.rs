// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

// Allow panic!/unwrap/expect in test code
#![cfg_attr(test, allow(clippy::panic))]
#![cfg_attr(test, allow(clippy::unwrap_used))]
#![cfg_attr(test, allow(clippy::expect_used))]

//! nb-core: status model for Notebook workloads managed by the nb controller.
//!
//! This crate is the seam between "what the controller observed" and "what
//! the controller does next": the Notebook CRD types, the lifecycle state
//! machine with its classification queries, the garbage-collection
//! readiness predicate over tracked pods, and the credential transport
//! codec. The reconcile loop itself lives outside this crate and drives
//! all mutation.

pub mod macros;

pub mod artifact;
pub mod clock;
pub mod notebook;
pub mod pod;
pub mod state;
pub mod status;
pub mod upload;

#[cfg(any(test, feature = "test-support"))]
pub mod test_support;

pub use artifact::{DownloadArtifactState, DownloadArtifactStatus};
pub use clock::{Clock, FakeClock, SystemClock};
pub use notebook::{
    ImageDetails, Instance, Notebook, NotebookDetails, NotebookSpec, VolumeMount, Workspace,
};
pub use pod::{PodPhase, PodStatus};
pub use state::{NotebookState, UnknownState};
pub use status::{NotebookStatus, PlatformJobStatus, Status};
pub use upload::{DecodedImageUpload, ImageUpload, NotebookUpload, S3Upload};
