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

use strum::{EnumIter, EnumString};

/// Defines the standardized output formats a resolved phone number can be
/// rendered in.
///
/// `International` and `National` align with the ITU-T E.123 recommendation.
/// For example, a Belgian mobile number would be:
/// - **E164**: `+32494322456`
/// - **International**: `+32 494 32 24 56`
/// - **National**: `0494 32 24 56`
/// - **Rfc3966**: `tel:+32-494-32-24-56`
///
/// Hosts configure the format with the lowercase option strings `"e164"`,
/// `"international"`, `"national"` and `"rfc3966"`; `FromStr` accepts
/// exactly those.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, EnumIter, EnumString)]
#[strum(serialize_all = "lowercase")]
pub enum NumberFormat {
    /// International format with no separators, always starting with a `+`
    /// followed by the country calling code. Example: `+32494322456`.
    E164,
    /// Country calling code plus readable separators. Example:
    /// `+32 494 32 24 56`.
    International,
    /// The format used for dialing within the number's own country,
    /// including any national (trunk) prefix. Example: `0494 32 24 56`.
    National,
    /// A `tel:` URI with hyphen separators, for use in web links.
    /// Example: `tel:+32-494-32-24-56`.
    RFC3966,
}

/// Categorizes a parsed number for the mobile policy check.
///
/// The numbering-plan engine distinguishes many more categories; this rule
/// only ever asks "may this be a mobile number", so everything that is
/// neither fixed-line nor mobile collapses into [`NumberKind::Other`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, EnumIter)]
pub enum NumberKind {
    /// A number assigned to wireless service.
    Mobile,
    /// A traditional landline number tied to a geographic location.
    FixedLine,
    /// Used in regions (e.g. the USA) where fixed-line and mobile numbers
    /// cannot be told apart from the digits alone.
    FixedLineOrMobile,
    /// Any other category (toll-free, premium rate, VoIP, pager, ...) or an
    /// undeterminable one.
    Other,
}

impl NumberKind {
    /// Whether this kind satisfies the "mobile" policy. An ambiguous
    /// fixed-line-or-mobile number passes.
    pub fn is_mobile(self) -> bool {
        matches!(self, NumberKind::Mobile | NumberKind::FixedLineOrMobile)
    }
}

#[cfg(test)]
mod tests {
    use std::str::FromStr;

    use strum::IntoEnumIterator;

    use super::{NumberFormat, NumberKind};

    #[test]
    fn format_option_strings() {
        assert_eq!(NumberFormat::from_str("e164"), Ok(NumberFormat::E164));
        assert_eq!(
            NumberFormat::from_str("international"),
            Ok(NumberFormat::International)
        );
        assert_eq!(
            NumberFormat::from_str("national"),
            Ok(NumberFormat::National)
        );
        assert_eq!(NumberFormat::from_str("rfc3966"), Ok(NumberFormat::RFC3966));
        assert!(NumberFormat::from_str("ppp").is_err());
    }

    #[test]
    fn exactly_two_kinds_satisfy_the_mobile_policy() {
        let mobile: Vec<NumberKind> = NumberKind::iter().filter(|kind| kind.is_mobile()).collect();
        assert_eq!(
            mobile,
            vec![NumberKind::Mobile, NumberKind::FixedLineOrMobile]
        );
    }
}
