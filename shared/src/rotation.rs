use rand::Rng;

use crate::constants::{
    BLUE_STOP_DEG, MAX_REVOLUTIONS, MIN_REVOLUTIONS, PURPLE_STOP_DEG, STOP_JITTER_DEG,
    YELLOW_STOP_DEG,
};
use crate::shared_roulette_game::Outcome;

/// Where the wheel has to stop for an outcome, measured clockwise from the
/// pointer to the middle of the outcome's sector.
pub fn target_angle(outcome: Outcome) -> f64 {
    match outcome {
        Outcome::Yellow => YELLOW_STOP_DEG,
        Outcome::Purple => PURPLE_STOP_DEG,
        Outcome::Blue => BLUE_STOP_DEG,
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RotationPlan {
    /// Sector angle after jitter.
    pub stop_angle: f64,
    pub revolutions: f64,
    /// Absolute rotation to apply to the wheel transform.
    pub total: f64,
    /// `total` folded back into [0, 360), the start of the next spin.
    pub resting: f64,
}

/// Cosmetic only. The outcome is already decided by the server; this just
/// picks a believable way to land on it.
pub fn plan_rotation<R: Rng + ?Sized>(current: f64, outcome: Outcome, rng: &mut R) -> RotationPlan {
    let stop_angle = target_angle(outcome) + rng.gen_range(-STOP_JITTER_DEG..=STOP_JITTER_DEG);
    let revolutions = rng.gen_range(MIN_REVOLUTIONS..MAX_REVOLUTIONS);
    let total = current + 360.0 * revolutions + (360.0 - stop_angle);

    RotationPlan {
        stop_angle,
        revolutions,
        total,
        resting: total.rem_euclid(360.0),
    }
}
