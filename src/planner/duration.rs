//! Duration aggregation
//!
//! Steps with an explicit `duration_min` contribute that many minutes;
//! the rest contribute a fixed per-operation default. The total is
//! rounded once, at the end, to one decimal place.

use super::flow::MappedStep;

/// Default hours per operation kind, used when a step carries no
/// explicit duration.
const DEFAULT_OPERATION_HOURS: &[(&str, f64)] = &[
    ("lithography", 2.0),
    ("etch", 1.0),
    ("deposition", 3.0),
    ("implantation", 2.0),
    ("thermal_oxidation", 3.0),
    ("cmp", 1.5),
    ("metallization", 2.0),
    ("strip", 0.5),
    ("wet_etch", 0.5),
];

/// Hours assumed for operations the table does not know.
const FALLBACK_OPERATION_HOURS: f64 = 1.0;

/// Default duration in hours for an operation kind.
pub fn default_operation_hours(operation: &str) -> f64 {
    DEFAULT_OPERATION_HOURS
        .iter()
        .find(|(op, _)| *op == operation)
        .map(|(_, hours)| *hours)
        .unwrap_or(FALLBACK_OPERATION_HOURS)
}

/// Duration contribution of a single mapped step, in hours.
pub fn step_hours(step: &MappedStep) -> f64 {
    match step.duration_min {
        Some(minutes) => minutes / 60.0,
        None => default_operation_hours(&step.operation),
    }
}

/// Sum the per-step contributions and round to one decimal.
pub fn estimate_total_hours(steps: &[MappedStep]) -> f64 {
    round_to_tenth(steps.iter().map(step_hours).sum())
}

/// Round half away from zero to one decimal place.
pub fn round_to_tenth(hours: f64) -> f64 {
    (hours * 10.0).round() / 10.0
}
