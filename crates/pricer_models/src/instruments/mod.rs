//! Instrument building blocks.
//!
//! - [`PayoffType`]: vanilla call/put selection and expiration payoff

mod payoff;

pub use payoff::PayoffType;
