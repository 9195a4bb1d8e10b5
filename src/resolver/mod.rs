pub(crate) mod classifier;
pub(crate) mod fallback;
pub(crate) mod formatter;
pub mod enums;
pub mod errors;
pub mod options;
pub mod resolver;

use std::sync::LazyLock;

pub use enums::{NumberFormat, NumberKind};
pub use errors::{ErrorKind, ParseFailure};
pub use options::Options;
pub use resolver::PhoneNumberResolver;

use crate::phonenumber_engine::PhonenumberEngine;

/// Process-wide resolver over the production numbering-plan engine. The
/// engine is read-only after construction, so the shared handle is safe for
/// concurrent use.
pub static PHONE_NUMBER_RESOLVER: LazyLock<PhoneNumberResolver<PhonenumberEngine>> =
    LazyLock::new(|| PhoneNumberResolver::with_engine(PhonenumberEngine::new()));
