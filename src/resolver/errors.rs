// Copyright (C) 2026 The Phoneresolver Authors
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
// http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.

use thiserror::Error;

/// The closed set of validation failures reported to the host.
///
/// Every failure a resolution can produce is one of these three kinds; the
/// host turns the kind into a user-facing message (the `Display` texts are
/// the canonical wording). Anything else an engine could do wrong is an
/// integration defect, not a validation outcome.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Error)]
pub enum ErrorKind {
    /// No region in the fallback list could parse the text at all.
    #[error("did not seem to be a phone number")]
    Invalid,
    /// The text parsed, but strict validation was requested and the number
    /// does not match a real, assignable pattern for its numbering plan.
    #[error("is not a strictly valid phone number for its region")]
    StrictFailed,
    /// The text parsed (and passed the strict check, if requested), but a
    /// mobile number was required and this is not one.
    #[error("is not a mobile phone number")]
    NotMobile,
}

/// Failure of a single engine parse attempt.
///
/// The fallback loop discards all but the final region's failure, so at most
/// one of these survives a resolution, and only as a log line: the host
/// always sees [`ErrorKind::Invalid`].
#[derive(Debug, Error)]
pub enum ParseFailure {
    /// The region code handed to the engine is not part of its
    /// numbering-plan data. Counts as a failed attempt for that region so
    /// the fallback can move on, just like a number whose country calling
    /// code is unknown.
    #[error("unsupported region code {0:?}")]
    UnknownRegion(String),
    /// The engine rejected the text outright.
    #[error("{0}")]
    Unparseable(Box<dyn std::error::Error + Send + Sync>),
}

impl ParseFailure {
    pub fn unparseable(err: impl std::error::Error + Send + Sync + 'static) -> Self {
        ParseFailure::Unparseable(Box::new(err))
    }
}

/// Policy violation found by the classifier. Internal; the pipeline maps it
/// onto the public [`ErrorKind`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub(crate) enum CheckFailure {
    #[error("number is not strictly valid")]
    Strict,
    #[error("number is not a mobile number")]
    NotMobile,
}
