mod interfaces;
mod phonenumber_engine;
mod resolver;

pub use interfaces::NumberingPlan;
pub use phonenumber_engine::PhonenumberEngine;
pub use resolver::{
    ErrorKind, NumberFormat, NumberKind, Options, ParseFailure, PhoneNumberResolver,
    PHONE_NUMBER_RESOLVER,
};

#[cfg(test)]
mod tests;
