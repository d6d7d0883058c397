use crate::prelude::Real;

///////////////////////////////////////////////////////////////////////////////
// Default params for the Sweden 2020 outbreak scenario
///////////////////////////////////////////////////////////////////////////////

pub const POPULATION: Real = 10_000_000.0;
pub const INITIAL_EXPOSED: Real = 50.0;
pub const INITIAL_INFECTED: Real = 100.0;
pub const INITIAL_RECOVERED: Real = 0.0;
pub const INITIAL_DEAD: Real = 0.0;

/// Days before an exposed individual turns infectious.
pub const INCUBATION_TIME: Real = 5.0;
/// Days an individual stays sick.
pub const TIME_SICK: Real = 15.0;
/// Fraction of the sick that die.
pub const DEATH_RATE: Real = 0.01;
/// Contact rate.
pub const BETA: Real = 0.32;

/// Integration horizon in days.
pub const DAYS: Real = 365.0;
/// Step of the evaluation grid in days (2.4 h).
pub const DT: Real = 0.1;

/// Behavioral phases of the outbreak: full contact, onset of restrictions,
/// peak restriction, partial relaxation.
pub const DISTANCING_TIMES: [Real; 15] = [
    0.0, 32.0, 35.0, 45.0, 54.0, 59.0, 60.0, 62.0, 70.0, 130.0, 200.0, 270.0, 300.0, 400.0,
    1000.0,
];
pub const DISTANCING_FACTORS: [Real; 15] = [
    1.0, 1.0, 0.99, 0.95, 0.80, 0.5, 0.20, 0.19, 0.15, 0.14, 0.25, 0.25, 0.25, 0.25, 0.25,
];
