//! Convenience re-exports of the crate's public surface.

pub use crate::error::ContagionError;
pub use crate::log::{debug, error, info, trace, warn};
pub use crate::parameters::Parameters;
pub use crate::people::{create_population, Person, DEAD};
pub use crate::random::{rng_from_seed, roll_percent};
pub use crate::report::StatsReport;
pub use crate::stats::{
    compute_statistics, tracked_stats, StatsRecord, TrackedStat, TRACKED_STATS,
    TRACKED_STATS_LETHAL,
};
pub use crate::transmission::{update_individual, update_population};
