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

use phonenumber::{country, metadata, Mode, PhoneNumber, Type};

use crate::interfaces::NumberingPlan;
use crate::resolver::{NumberFormat, NumberKind, ParseFailure};

/// Production [`NumberingPlan`] implementation backed by the `phonenumber`
/// crate and its compiled-in numbering-plan metadata.
///
/// The metadata database is a process-wide, lazily-initialized, read-only
/// singleton inside the crate; a corrupt database is a build defect and
/// panics there on first use rather than surfacing as a validation outcome.
pub struct PhonenumberEngine;

impl PhonenumberEngine {
    pub fn new() -> Self {
        PhonenumberEngine
    }

    fn region_id(region: &str) -> Result<country::Id, ParseFailure> {
        region
            .parse::<country::Id>()
            .map_err(|_| ParseFailure::UnknownRegion(region.to_owned()))
    }
}

impl Default for PhonenumberEngine {
    fn default() -> Self {
        Self::new()
    }
}

impl NumberingPlan for PhonenumberEngine {
    type Number = PhoneNumber;

    fn parse(&self, text: &str, region: Option<&str>) -> Result<PhoneNumber, ParseFailure> {
        let region_id = match region {
            Some(code) => match Self::region_id(code) {
                Ok(id) => Some(id),
                // A +-prefixed number is region independent and must parse
                // even under a region code the engine has no data for; for
                // anything else the unknown region is the diagnostic.
                Err(unknown) => {
                    return phonenumber::parse(None, text).map_err(|_| unknown);
                }
            },
            None => None,
        };
        phonenumber::parse(region_id, text).map_err(ParseFailure::unparseable)
    }

    fn is_valid_number(&self, number: &PhoneNumber) -> bool {
        phonenumber::is_valid(number)
    }

    fn classify(&self, number: &PhoneNumber) -> NumberKind {
        match number.number_type(&metadata::DATABASE) {
            Type::Mobile => NumberKind::Mobile,
            Type::FixedLine => NumberKind::FixedLine,
            Type::FixedLineOrMobile => NumberKind::FixedLineOrMobile,
            _ => NumberKind::Other,
        }
    }

    fn render(&self, number: &PhoneNumber, format: NumberFormat) -> String {
        let mode = match format {
            NumberFormat::E164 => Mode::E164,
            NumberFormat::International => Mode::International,
            NumberFormat::National => Mode::National,
            NumberFormat::RFC3966 => Mode::Rfc3966,
        };
        phonenumber::format(number).mode(mode).to_string()
    }
}
