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

use std::borrow::Cow;

use log::debug;

use crate::interfaces::NumberingPlan;
use crate::resolver::errors::{CheckFailure, ErrorKind};
use crate::resolver::options::Options;
use crate::resolver::{classifier, fallback, formatter};

/// The phone number resolution pipeline.
///
/// Composes the ordered multi-region fallback parse, the strict/mobile
/// policy checks and the output formatting, translating every failure into
/// the closed [`ErrorKind`] taxonomy. This is the entry point a
/// schema-validation host plugs in as its phone number rule.
///
/// A resolver holds nothing but the numbering-plan engine handle, which it
/// only ever reads; resolutions are stateless and independent, so one
/// resolver may serve any number of concurrent calls.
pub struct PhoneNumberResolver<P: NumberingPlan> {
    engine: P,
}

impl<P: NumberingPlan> PhoneNumberResolver<P> {
    /// Creates a resolver over an explicit engine handle.
    pub fn with_engine(engine: P) -> Self {
        Self { engine }
    }

    pub fn engine(&self) -> &P {
        &self.engine
    }

    /// Resolves one raw input text against the given options.
    ///
    /// On success the returned text is the rendered conversion when one was
    /// requested and `conversion_allowed` is set, and the original input
    /// (borrowed) otherwise. On failure exactly one [`ErrorKind`] is
    /// reported:
    ///
    /// - [`ErrorKind::Invalid`] — every region in the fallback list failed
    ///   to parse the text;
    /// - [`ErrorKind::StrictFailed`] — strict validation was requested and
    ///   the parsed number is not assignable in its numbering plan;
    /// - [`ErrorKind::NotMobile`] — a mobile number was required and the
    ///   parsed number is not one.
    pub fn resolve<'a>(
        &self,
        text: &'a str,
        options: &Options,
        conversion_allowed: bool,
    ) -> Result<Cow<'a, str>, ErrorKind> {
        let number = match fallback::parse_with_fallback(&self.engine, text, options.region_list())
        {
            Ok(number) => number,
            Err(failure) => {
                // Only the final region's diagnostic made it this far.
                debug!("no region could parse {:?}: {}", text, failure);
                return Err(ErrorKind::Invalid);
            }
        };

        if let Err(failure) = classifier::check(&self.engine, &number, options) {
            debug!("policy check failed on {:?}: {}", text, failure);
            return Err(match failure {
                CheckFailure::Strict => ErrorKind::StrictFailed,
                CheckFailure::NotMobile => ErrorKind::NotMobile,
            });
        }

        Ok(formatter::render(
            &self.engine,
            &number,
            text,
            options.requested_format(),
            conversion_allowed,
        ))
    }
}
