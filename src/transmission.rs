//! The per-round update: agent state transitions and the round pass over the population.
//!
//! Each round the population is shuffled into a fresh uniform ordering and every agent is paired
//! with its successor in that ordering, the last wrapping around to the first (ring topology).
//! Updates are applied in a single mutating pass: a contact is read at pair-processing time, so an
//! agent updated earlier in the pass is seen in its updated state when it later serves as a
//! contact. Transmission can therefore cascade further than one degree within a single round.
//! This is a deliberate property of the model, not an artifact.

use rand::seq::SliceRandom;
use rand::Rng;

use crate::error::ContagionError;
use crate::log::trace;
use crate::parameters::Parameters;
use crate::people::Person;
use crate::random::{draw_symptom_countdown, roll_percent};

/// Advances one agent by one round given its paired contact.
///
/// Order of operations: disease progression first (death roll in the lethal variant, then
/// recovery and quarantine entry once symptomatic), then the quarantine countdown, then exposure.
/// Quarantine short-circuits exposure using the post-countdown status, so an agent entering
/// quarantine this round is already protected, and one whose countdown just expired still skips
/// exposure this round.
pub fn update_individual<R: Rng>(
    person: &mut Person,
    contact: &Person,
    parameters: &Parameters,
    rng: &mut R,
) {
    if person.infected {
        person.days_infected += 1;
        let died = match parameters.death_chance {
            Some(death_chance) => roll_percent(rng, death_chance),
            None => false,
        };
        if died {
            trace!("Agent {} died", person.id);
            person.die();
            // A death consumes the rest of the progression step.
        } else if symptomatic(person, parameters) {
            if roll_percent(rng, parameters.recovery_chance) {
                trace!("Agent {} recovered", person.id);
                person.clear_infection();
            } else if !person.in_quarantine && roll_percent(rng, parameters.quarantine_chance) {
                trace!("Agent {} entered quarantine", person.id);
                person.in_quarantine = true;
                person.quarantine_time = parameters.quarantine_duration;
            }
        }
    }

    if person.in_quarantine {
        person.quarantine_time = person.quarantine_time.saturating_sub(1);
        if person.quarantine_time == 0 {
            person.in_quarantine = false;
        }
        // No exposure while quarantined, even when the countdown just expired.
        return;
    }

    if contact.infected
        && !contact.in_quarantine
        && !person.is_dead()
        && roll_percent(rng, parameters.infection_chance)
    {
        trace!("Agent {} infected by contact {}", person.id, contact.id);
        person.infected = true;
        person.days_infected = 1;
        if let Some(incubation_period) = parameters.incubation_period {
            person.days_until_symptoms = Some(draw_symptom_countdown(rng, incubation_period));
        }
    }
}

// Symptom onset gates recovery and quarantine in the lethal variant. The base variant has no
// incubation period and is symptomatic from the first infected round.
fn symptomatic(person: &Person, parameters: &Parameters) -> bool {
    match parameters.incubation_period {
        Some(incubation_period) => person.days_infected >= incubation_period as i32,
        None => true,
    }
}

/// Applies one simulation round to the whole population.
///
/// The population is shuffled in place into a fresh uniform ordering, then updated in a single
/// pass with ring-topology pairing: the contact of `population[i]` is
/// `population[(i + 1) % len]`. The population keeps the shuffled order on return.
///
/// # Errors
///
/// Returns `EmptyPopulation` when called with no agents.
pub fn update_population<R: Rng>(
    population: &mut [Person],
    parameters: &Parameters,
    rng: &mut R,
) -> Result<(), ContagionError> {
    if population.is_empty() {
        return Err(ContagionError::EmptyPopulation);
    }
    population.shuffle(rng);

    let len = population.len();
    for i in 0..len {
        // Snapshot the contact as it stands when this pair is processed. For all pairs but the
        // wraparound this is the contact's pre-update state; for the wraparound it is the state
        // `population[0]` reached earlier this pass, which is what lets same-round transmission
        // cascade across the seam of the ring.
        let contact = population[(i + 1) % len];
        update_individual(&mut population[i], &contact, parameters, rng);
    }
    Ok(())
}
