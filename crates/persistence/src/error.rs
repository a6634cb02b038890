// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use thiserror::Error;

/// Errors that can occur against a storage slot.
///
/// These never escape the persistence adapter: loading falls back to the
/// default state and saving swallows failures. They exist so slot backends
/// and tests can observe what went wrong.
#[derive(Debug, Error)]
pub enum PersistenceError {
    /// The slot could not be read or written.
    #[error("slot I/O failed: {0}")]
    Io(#[from] std::io::Error),

    /// The payload could not be encoded or decoded.
    #[error("state serialization failed: {0}")]
    Serialization(#[from] serde_json::Error),

    /// Backend-specific failure.
    #[error("{0}")]
    Backend(String),
}
