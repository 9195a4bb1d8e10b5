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
use crate::resolver::errors::ParseFailure;

/// Tries the regions in order and returns the first successful parse.
///
/// Region lists are a disambiguation heuristic, not independently meaningful
/// attempts, so earlier failures are discarded and only the final region's
/// failure is surfaced. A number with an explicit leading `+` parses
/// region-independently and simply succeeds on the first region tried.
///
/// An empty region list performs exactly one region-less attempt, which can
/// only succeed for `+`-prefixed input.
pub(crate) fn parse_with_fallback<P: NumberingPlan>(
    engine: &P,
    text: &str,
    regions: &[String],
) -> Result<P::Number, ParseFailure> {
    let Some((last, head)) = regions.split_last() else {
        return engine.parse(text, None);
    };

    for region in head {
        match engine.parse(text, Some(region)) {
            Ok(number) => {
                trace!("parsed {:?} using region {}", text, region);
                return Ok(number);
            }
            Err(failure) => {
                // Not the last region yet; this diagnostic does not survive.
                trace!("region {} failed on {:?}: {}", region, text, failure);
            }
        }
    }
    engine.parse(text, Some(last))
}
