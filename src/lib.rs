//! A round-based agent population simulator for modeling disease spread
//!
//! Contagion models the spread of a disease through a fixed population of
//! agents, one discrete round at a time. Each round every agent is paired
//! with a contact drawn from a freshly shuffled ordering of the population
//! (ring topology, the last agent wrapping to the first) and its state is
//! advanced: infection, recovery, quarantine, and in the lethal variant
//! incubation and death.
//!
//! A simulation usually consists of a small set of pieces that work
//! together:
//! * A population factory that lays the agents out on a grid and seeds a
//!   single patient zero.
//! * The round update that shuffles the population, forms ring contacts,
//!   and applies the per-agent state transition in a single mutating pass.
//! * A statistics aggregator that scans a population snapshot and produces
//!   per-round counts, optionally written out as a CSV report.
//!
//! The driving loop is left to the caller: rounds are applied for as long
//! as the caller keeps calling [`transmission::update_population`].
//! Randomness is injected explicitly; seeding the generator from
//! [`random::rng_from_seed`] makes entire runs reproducible.

pub mod error;
pub mod log;
pub mod parameters;
pub mod people;
pub mod prelude;
pub mod random;
pub mod report;
pub mod stats;
pub mod transmission;

pub use crate::error::ContagionError;
pub use crate::log::{debug, error, info, trace, warn};
