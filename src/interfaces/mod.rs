use crate::resolver::{NumberFormat, NumberKind, ParseFailure};

/// Numbering-plan API used to isolate the underlying phone number engine
/// and allow different implementations to be swapped in easily.
///
/// The resolution pipeline never inspects a parsed number itself; it only
/// threads the opaque [`NumberingPlan::Number`] token back through the
/// remaining operations of the same engine.
pub trait NumberingPlan {
    /// Opaque parsed-number token, scoped to a single resolution call.
    type Number;

    /// Parses `text` under the given region code, or without any region
    /// when `region` is `None` (only numbers carrying an explicit country
    /// calling code can succeed in that case).
    fn parse(&self, text: &str, region: Option<&str>) -> Result<Self::Number, ParseFailure>;

    /// Returns whether the parsed number matches a real, assignable number
    /// pattern for its numbering plan. Stricter than mere parseability.
    fn is_valid_number(&self, number: &Self::Number) -> bool;

    /// Returns the numbering-plan category of the parsed number.
    fn classify(&self, number: &Self::Number) -> NumberKind;

    /// Renders the parsed number in the requested format. Rendering cannot
    /// fail for a number this same engine parsed successfully.
    fn render(&self, number: &Self::Number, format: NumberFormat) -> String;
}
