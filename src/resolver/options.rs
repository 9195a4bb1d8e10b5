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

use crate::resolver::enums::NumberFormat;

/// Fully resolved configuration for one resolution call.
///
/// The host is expected to have validated and defaulted its raw option bag
/// before building this; the pipeline never second-guesses it. An `Options`
/// value is immutable for the duration of a call and can be reused across
/// any number of calls.
///
/// Region order matters: it is a best-effort disambiguation heuristic for
/// numbers lacking an explicit country calling code, tried first to last.
/// The default list is `["US", "BE"]`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Options {
    regions: Vec<String>,
    strict: bool,
    mobile: bool,
    format: Option<NumberFormat>,
}

impl Default for Options {
    fn default() -> Self {
        Self {
            regions: vec!["US".to_owned(), "BE".to_owned()],
            strict: false,
            mobile: false,
            format: None,
        }
    }
}

impl Options {
    pub fn new() -> Self {
        Self::default()
    }

    /// Replaces the fallback region list. An empty list is allowed and
    /// restricts parsing to numbers with an explicit `+` country calling
    /// code.
    pub fn regions<I, S>(mut self, regions: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.regions = regions.into_iter().map(Into::into).collect();
        self
    }

    /// Shorthand for a single fallback region.
    pub fn region(self, region: impl Into<String>) -> Self {
        let region: String = region.into();
        self.regions(std::iter::once(region))
    }

    /// Requires the number to match a real, assignable numbering-plan
    /// pattern, not merely to parse.
    pub fn strict(mut self, strict: bool) -> Self {
        self.strict = strict;
        self
    }

    /// Requires the number to be classified as mobile (or as ambiguously
    /// fixed-line-or-mobile).
    pub fn mobile(mut self, mobile: bool) -> Self {
        self.mobile = mobile;
        self
    }

    /// Requests conversion of the validated number into the given format.
    /// Without a format the original input is echoed back unchanged.
    pub fn format(mut self, format: NumberFormat) -> Self {
        self.format = Some(format);
        self
    }

    pub fn region_list(&self) -> &[String] {
        &self.regions
    }

    pub fn is_strict(&self) -> bool {
        self.strict
    }

    pub fn is_mobile_required(&self) -> bool {
        self.mobile
    }

    pub fn requested_format(&self) -> Option<NumberFormat> {
        self.format
    }
}
