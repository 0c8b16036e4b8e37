//! The `Person` record and the population factory.
//!
//! A population is a `Vec<Person>` of fixed size: agents are never added or removed after
//! creation, only their state fields change. Agents are laid out on a square grid whose
//! coordinates are purely cosmetic metadata for display; contact selection never consults them.

use rand::Rng;
use serde_derive::{Deserialize, Serialize};

use crate::error::ContagionError;
use crate::log::{debug, trace};
use crate::parameters::Parameters;
use crate::random::draw_symptom_countdown;

/// Sentinel value of [`Person::days_infected`] marking a dead agent. Death is terminal: a dead
/// agent is never infectious, quarantinable, or susceptible again.
pub const DEAD: i32 = -1;

/// A single member of the simulated population.
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq)]
pub struct Person {
    /// Stable index of the agent, assigned at creation.
    pub id: usize,
    /// Grid position in `[0, 100)`, cosmetic only.
    pub x: f64,
    /// Grid position in `[0, 100)`, cosmetic only.
    pub y: f64,
    /// True while actively carrying the disease.
    pub infected: bool,
    /// `0` = never infected, `> 0` = consecutive infected rounds, [`DEAD`] = dead.
    pub days_infected: i32,
    /// Countdown to symptom onset, drawn at creation and redrawn on infection. Lethal variant
    /// only; symptom gating actually uses `days_infected` against the incubation period.
    pub days_until_symptoms: Option<u32>,
    /// True while quarantined. A quarantined agent neither transmits nor receives infection.
    pub in_quarantine: bool,
    /// Remaining quarantine rounds; meaningful only while `in_quarantine`.
    pub quarantine_time: u32,
}

impl Person {
    pub fn is_dead(&self) -> bool {
        self.days_infected == DEAD
    }

    pub fn is_recovered(&self) -> bool {
        !self.infected && self.days_infected > 0
    }

    /// Recovery lifts quarantine along with the infection.
    pub(crate) fn clear_infection(&mut self) {
        self.infected = false;
        self.days_infected = 0;
        self.in_quarantine = false;
        self.quarantine_time = 0;
    }

    pub(crate) fn die(&mut self) {
        self.infected = false;
        self.days_infected = DEAD;
    }
}

/// Builds the initial population on a square grid and seeds one case.
///
/// The grid side length is `floor(sqrt(size))`; non-perfect squares produce a ragged last row.
/// Every agent starts susceptible except a single patient zero chosen uniformly at random.
///
/// # Errors
///
/// Returns `InvalidSize` when `size` is zero and `InvalidParameter` when the configuration is out
/// of range.
pub fn create_population<R: Rng>(
    size: usize,
    parameters: &Parameters,
    rng: &mut R,
) -> Result<Vec<Person>, ContagionError> {
    parameters.validate()?;
    if size == 0 {
        return Err(ContagionError::InvalidSize(
            "population size must be positive".to_string(),
        ));
    }
    trace!("Creating population of {size}");

    let side = grid_side_length(size);
    let mut population = Vec::with_capacity(size);
    for id in 0..size {
        let days_until_symptoms = parameters
            .incubation_period
            .map(|incubation_period| draw_symptom_countdown(rng, incubation_period));
        population.push(Person {
            id,
            x: 100.0 * ((id % side) as f64) / side as f64,
            y: 100.0 * ((id / side) as f64) / side as f64,
            infected: false,
            days_infected: 0,
            days_until_symptoms,
            in_quarantine: false,
            quarantine_time: 0,
        });
    }

    let patient_zero = rng.random_range(0..size);
    population[patient_zero].infected = true;
    debug!("Patient zero is agent {patient_zero}");

    Ok(population)
}

fn grid_side_length(size: usize) -> usize {
    let side = (size as f64).sqrt().floor() as usize;
    side.max(1)
}
