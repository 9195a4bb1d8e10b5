//! Pipeline policy tests against a scripted numbering-plan engine.
//!
//! The production engine decides what parses; these tests pin down what the
//! pipeline itself does around any engine: region attempt order, the
//! first-success/last-failure fallback policy, check ordering and the
//! conversion toggle.

use std::cell::RefCell;

use thiserror::Error;

use crate::interfaces::NumberingPlan;
use crate::resolver::fallback;
use crate::tests::init_logs;
use crate::{ErrorKind, NumberFormat, NumberKind, Options, ParseFailure, PhoneNumberResolver};

#[derive(Debug, Error)]
#[error("scripted refusal for region {0:?}")]
struct ScriptedRefusal(Option<String>);

/// Engine whose parse outcome is scripted per region and which records every
/// attempt it sees.
struct ScriptedPlan {
    parses_in: Option<&'static str>,
    valid: bool,
    kind: NumberKind,
    attempts: RefCell<Vec<Option<String>>>,
    render_allowed: bool,
}

impl ScriptedPlan {
    fn parsing_in(region: &'static str) -> Self {
        Self {
            parses_in: Some(region),
            valid: true,
            kind: NumberKind::Mobile,
            attempts: RefCell::new(Vec::new()),
            render_allowed: true,
        }
    }

    fn refusing_everything() -> Self {
        Self {
            parses_in: None,
            valid: true,
            kind: NumberKind::Mobile,
            attempts: RefCell::new(Vec::new()),
            render_allowed: true,
        }
    }

    fn attempts(&self) -> Vec<Option<String>> {
        self.attempts.borrow().clone()
    }
}

impl NumberingPlan for ScriptedPlan {
    type Number = ();

    fn parse(&self, _text: &str, region: Option<&str>) -> Result<(), ParseFailure> {
        self.attempts.borrow_mut().push(region.map(str::to_owned));
        if self.parses_in.is_some() && self.parses_in == region {
            Ok(())
        } else {
            Err(ParseFailure::unparseable(ScriptedRefusal(
                region.map(str::to_owned),
            )))
        }
    }

    fn is_valid_number(&self, _number: &()) -> bool {
        self.valid
    }

    fn classify(&self, _number: &()) -> NumberKind {
        self.kind
    }

    fn render(&self, _number: &(), format: NumberFormat) -> String {
        assert!(
            self.render_allowed,
            "render must not run for this resolution"
        );
        format!("rendered:{:?}", format)
    }
}

#[test]
fn fallback_stops_at_the_first_successful_region() {
    init_logs();
    let resolver = PhoneNumberResolver::with_engine(ScriptedPlan::parsing_in("BE"));
    let options = Options::new().regions(["US", "BE", "TR"]);

    let resolved = resolver.resolve("whatever", &options, true).unwrap();
    assert_eq!(resolved, "whatever");
    // TR was never attempted.
    assert_eq!(
        resolver.engine().attempts(),
        vec![Some("US".to_owned()), Some("BE".to_owned())]
    );
}

#[test]
fn fallback_attempts_every_region_before_failing() {
    init_logs();
    let resolver = PhoneNumberResolver::with_engine(ScriptedPlan::refusing_everything());
    let options = Options::new().regions(["US", "BE", "TR"]);

    assert_eq!(
        resolver.resolve("whatever", &options, true),
        Err(ErrorKind::Invalid)
    );
    assert_eq!(
        resolver.engine().attempts(),
        vec![
            Some("US".to_owned()),
            Some("BE".to_owned()),
            Some("TR".to_owned())
        ]
    );
}

#[test]
fn only_the_last_regions_failure_survives() {
    init_logs();
    let engine = ScriptedPlan::refusing_everything();
    let regions = vec!["US".to_owned(), "BE".to_owned(), "TR".to_owned()];
    let failure = fallback::parse_with_fallback(&engine, "whatever", &regions).unwrap_err();
    assert!(failure.to_string().contains("TR"));
}

#[test]
fn empty_region_list_makes_one_region_less_attempt() {
    init_logs();
    let resolver = PhoneNumberResolver::with_engine(ScriptedPlan::refusing_everything());
    let options = Options::new().regions(Vec::<String>::new());

    assert_eq!(
        resolver.resolve("whatever", &options, true),
        Err(ErrorKind::Invalid)
    );
    assert_eq!(resolver.engine().attempts(), vec![None]);
}

#[test]
fn strict_is_checked_before_mobile() {
    init_logs();
    let mut engine = ScriptedPlan::parsing_in("US");
    engine.valid = false;
    engine.kind = NumberKind::FixedLine;
    let resolver = PhoneNumberResolver::with_engine(engine);

    // Both policies fail; the strict failure is the one reported.
    let options = Options::new().regions(["US"]).strict(true).mobile(true);
    assert_eq!(
        resolver.resolve("whatever", &options, true),
        Err(ErrorKind::StrictFailed)
    );

    // Without strict the same number surfaces the mobile failure.
    let options = Options::new().regions(["US"]).mobile(true);
    assert_eq!(
        resolver.resolve("whatever", &options, true),
        Err(ErrorKind::NotMobile)
    );
}

#[test]
fn ambiguous_fixed_line_or_mobile_passes_the_mobile_policy() {
    init_logs();
    let mut engine = ScriptedPlan::parsing_in("US");
    engine.kind = NumberKind::FixedLineOrMobile;
    let resolver = PhoneNumberResolver::with_engine(engine);

    let options = Options::new().regions(["US"]).mobile(true);
    let resolved = resolver.resolve("whatever", &options, true).unwrap();
    assert_eq!(resolved, "whatever");
}

#[test]
fn rendering_runs_only_when_conversion_is_allowed() {
    init_logs();
    let mut engine = ScriptedPlan::parsing_in("US");
    engine.render_allowed = false;
    let resolver = PhoneNumberResolver::with_engine(engine);

    let options = Options::new().regions(["US"]).format(NumberFormat::E164);
    let resolved = resolver.resolve("whatever", &options, false).unwrap();
    assert_eq!(resolved, "whatever");
}

#[test]
fn rendering_uses_the_requested_format() {
    init_logs();
    let resolver = PhoneNumberResolver::with_engine(ScriptedPlan::parsing_in("US"));

    let options = Options::new()
        .regions(["US"])
        .format(NumberFormat::International);
    let resolved = resolver.resolve("whatever", &options, true).unwrap();
    assert_eq!(resolved, "rendered:International");
}
