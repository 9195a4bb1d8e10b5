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

use log::trace;

use crate::interfaces::NumberingPlan;
use crate::resolver::errors::CheckFailure;
use crate::resolver::options::Options;

/// Applies the strict-validity and mobile-type policy to a parsed number.
///
/// The checks are independent and both run when both flags are set, but
/// strict is checked first: when a number fails both policies the single
/// reported failure is the strict one.
pub(crate) fn check<P: NumberingPlan>(
    engine: &P,
    number: &P::Number,
    options: &Options,
) -> Result<(), CheckFailure> {
    if options.is_strict() && !engine.is_valid_number(number) {
        return Err(CheckFailure::Strict);
    }

    if options.is_mobile_required() {
        let kind = engine.classify(number);
        trace!("classified number as {:?}", kind);
        if !kind.is_mobile() {
            return Err(CheckFailure::NotMobile);
        }
    }

    Ok(())
}
