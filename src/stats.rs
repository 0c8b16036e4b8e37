//! Aggregate per-round statistics over a population snapshot.

use serde_derive::{Deserialize, Serialize};

use crate::parameters::Parameters;
use crate::people::Person;

/// Per-round aggregate counts. `dead` is populated only in the lethal variant.
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq)]
pub struct StatsRecord {
    pub round: u32,
    pub infected: usize,
    pub in_quarantine: usize,
    pub recovered: usize,
    pub dead: Option<usize>,
}

/// One column of the display schema: a human-readable label and the `StatsRecord` field it binds
/// to. Purely for downstream display binding, no behavior attached.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TrackedStat {
    pub label: &'static str,
    pub field: &'static str,
}

pub const TRACKED_STATS: [TrackedStat; 3] = [
    TrackedStat {
        label: "Total Infected",
        field: "infected",
    },
    TrackedStat {
        label: "In Quarantine",
        field: "in_quarantine",
    },
    TrackedStat {
        label: "Recovered",
        field: "recovered",
    },
];

pub const TRACKED_STATS_LETHAL: [TrackedStat; 4] = [
    TrackedStat {
        label: "Total Infected",
        field: "infected",
    },
    TrackedStat {
        label: "In Quarantine",
        field: "in_quarantine",
    },
    TrackedStat {
        label: "Recovered",
        field: "recovered",
    },
    TrackedStat {
        label: "Dead",
        field: "dead",
    },
];

/// Returns the display schema matching the given configuration.
pub fn tracked_stats(parameters: &Parameters) -> &'static [TrackedStat] {
    if parameters.is_lethal() {
        &TRACKED_STATS_LETHAL
    } else {
        &TRACKED_STATS
    }
}

/// Scans a population snapshot and produces the per-round counts.
///
/// In the lethal variant the `infected` count covers only the pre-symptomatic window
/// (`0 < days_infected < incubation_period`), not every currently infectious agent. This narrower
/// definition is kept deliberately; see the design notes.
pub fn compute_statistics(
    population: &[Person],
    round: u32,
    parameters: &Parameters,
) -> StatsRecord {
    let mut infected = 0;
    let mut in_quarantine = 0;
    let mut recovered = 0;
    let mut dead = 0;
    for person in population {
        let counts_as_infected = match parameters.incubation_period {
            Some(incubation_period) => {
                person.infected
                    && person.days_infected > 0
                    && person.days_infected < incubation_period as i32
            }
            None => person.infected,
        };
        if counts_as_infected {
            infected += 1;
        }
        if person.in_quarantine {
            in_quarantine += 1;
        }
        if person.is_recovered() {
            recovered += 1;
        }
        if person.is_dead() {
            dead += 1;
        }
    }
    StatsRecord {
        round,
        infected,
        in_quarantine,
        recovered,
        dead: parameters.is_lethal().then_some(dead),
    }
}
