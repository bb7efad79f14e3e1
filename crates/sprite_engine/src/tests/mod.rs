//! Scenario tests spanning several modules

mod director_updates;
mod mutation_during_update;
