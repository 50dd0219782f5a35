// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Artifact upload configuration and the credential transport codec.
//!
//! Registry credentials cross several serialization boundaries (API object
//! → secret → environment) and travel base64-encoded. The codec here only
//! normalizes: decode, trim, degrade to empty on malformed input. Whether
//! the result is usable is the image-push client's problem.

use base64::engine::general_purpose::STANDARD;
use base64::Engine;
use serde::{Deserialize, Serialize};

/// Artifact upload configuration for a notebook.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct NotebookUpload {
    pub s3_upload: S3Upload,
    /// Present only when the workload pushes a container image on exit
    #[serde(skip_serializing_if = "Option::is_none")]
    pub image_upload: Option<ImageUpload>,
}

impl NotebookUpload {
    /// Whether registry credentials were supplied for this workload.
    ///
    /// Presence is structural: a credentials object with empty fields still
    /// counts as "has credentials".
    pub fn has_credentials(&self) -> bool {
        self.image_upload.is_some()
    }

    /// Decoded registry credentials, or the all-empty value when none were
    /// supplied. Never fails.
    pub fn image_credentials(&self) -> DecodedImageUpload {
        self.image_upload.as_ref().map(ImageUpload::decode).unwrap_or_default()
    }
}

/// Destination for the workspace snapshot uploaded on teardown.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct S3Upload {
    pub bucket: String,
    /// Key prefix under the bucket; empty means the bucket root
    #[serde(skip_serializing_if = "String::is_empty")]
    pub prefix: String,
}

/// Transport-encoded registry credentials for pushing the workload image.
///
/// All four fields are base64-encoded strings as persisted; use
/// [`ImageUpload::decode`] to obtain usable values.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ImageUpload {
    pub registry: String,
    pub repository: String,
    pub username: String,
    pub password: String,
}

impl ImageUpload {
    /// Decode the transport encoding on every field.
    ///
    /// A field that fails to decode (bad base64, or bytes that are not
    /// UTF-8) becomes the empty string; sibling fields are unaffected.
    /// Decoded values are trimmed of leading and trailing whitespace.
    pub fn decode(&self) -> DecodedImageUpload {
        DecodedImageUpload {
            registry: decode_field("registry", &self.registry),
            repository: decode_field("repository", &self.repository),
            username: decode_field("username", &self.username),
            password: decode_field("password", &self.password),
        }
    }
}

/// Registry credentials after transport decoding.
///
/// Never serialized back into the resource; consumers must treat empty
/// fields as "credential unusable".
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DecodedImageUpload {
    pub registry: String,
    pub repository: String,
    pub username: String,
    pub password: String,
}

fn decode_field(field: &'static str, value: &str) -> String {
    let bytes = match STANDARD.decode(value) {
        Ok(bytes) => bytes,
        Err(_) => {
            tracing::warn!(field, "image upload credential is not valid base64");
            return String::new();
        }
    };
    match String::from_utf8(bytes) {
        Ok(s) => s.trim().to_string(),
        Err(_) => {
            tracing::warn!(field, "image upload credential decoded to non-UTF-8 bytes");
            String::new()
        }
    }
}

#[cfg(test)]
#[path = "upload_tests.rs"]
mod tests;
