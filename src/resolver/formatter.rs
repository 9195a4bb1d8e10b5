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

use crate::interfaces::NumberingPlan;
use crate::resolver::enums::NumberFormat;

/// Renders the output text for a successfully validated number.
///
/// Formatting is purely an output transform: when conversion is not allowed,
/// or no format was requested, the original input is returned untouched
/// (and borrowed). It never re-validates and cannot fail for a number the
/// engine parsed.
pub(crate) fn render<'a, P: NumberingPlan>(
    engine: &P,
    number: &P::Number,
    original: &'a str,
    format: Option<NumberFormat>,
    conversion_allowed: bool,
) -> Cow<'a, str> {
    match format {
        Some(format) if conversion_allowed => Cow::Owned(engine.render(number, format)),
        _ => Cow::Borrowed(original),
    }
}
