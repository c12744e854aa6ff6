// SPDX-FileCopyrightText: 2026 TalentFlow Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Error types for the TalentFlow data layer.

use thiserror::Error;

/// The primary error type used across all TalentFlow operations.
///
/// Display strings are the exact messages surfaced to API consumers, so
/// variants that map to request-level failures carry client-facing text
/// rather than internal diagnostics.
#[derive(Debug, Error)]
pub enum TalentError {
    /// A create payload lacked one or more required fields. Every missing
    /// field is listed, not just the first.
    #[error("Missing required fields: {}", fields.join(", "))]
    MissingFields { fields: Vec<String> },

    /// A structurally valid payload violated a field contract
    /// (bad enum token, empty array, negative count, out-of-range index).
    #[error("{0}")]
    Validation(String),

    /// The addressed entity does not exist.
    #[error("{0}")]
    NotFound(String),

    /// Snapshot persistence or restore failed (I/O, serialization).
    #[error("storage error: {source}")]
    Storage {
        source: Box<dyn std::error::Error + Send + Sync>,
    },

    /// Internal or unexpected errors, including the injected reorder fault.
    #[error("{0}")]
    Internal(String),
}

impl TalentError {
    /// Builds a [`TalentError::MissingFields`] from wire-level field names.
    pub fn missing_fields<I, S>(fields: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        TalentError::MissingFields {
            fields: fields.into_iter().map(Into::into).collect(),
        }
    }

    /// Builds a [`TalentError::Validation`] with a client-facing message.
    pub fn validation(message: impl Into<String>) -> Self {
        TalentError::Validation(message.into())
    }

    /// Builds a [`TalentError::NotFound`] with a client-facing message.
    pub fn not_found(message: impl Into<String>) -> Self {
        TalentError::NotFound(message.into())
    }

    /// HTTP-equivalent status code for this error, so an embedding UI can
    /// surface failures the way a real backend would.
    pub fn status(&self) -> u16 {
        match self {
            TalentError::MissingFields { .. } | TalentError::Validation(_) => 400,
            TalentError::NotFound(_) => 404,
            TalentError::Storage { .. } | TalentError::Internal(_) => 500,
        }
    }
}
