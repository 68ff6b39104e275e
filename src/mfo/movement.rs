//! Position update: an intensity-scaled random walk toward the flame.

use super::config::MfoConfig;
use super::intensity::{distance, intensity};
use crate::space::Moth;
use rand::Rng;
use rand_distr::StandardNormal;

/// Moves `moth` relative to `flame`.
///
/// Intensity is computed once from the moth-flame distance. Each numeric
/// dimension then moves by `beta * intensity * direction * step` with
/// `direction ~ U[-1, 1]` and `step = gamma * |N(0, 1)|`, drawn in that
/// order per dimension. `max_features` is copied unchanged. The result is
/// not repaired; callers pass it through
/// [`SearchDomain::clamp`](crate::space::SearchDomain::clamp).
pub fn move_moth<R: Rng>(moth: &Moth, flame: &Moth, config: &MfoConfig, rng: &mut R) -> Moth {
    let light = intensity(distance(moth, flame), config.alpha);
    let mut values = moth.numeric();
    for value in &mut values {
        let direction: f64 = rng.random_range(-1.0..=1.0);
        let normal: f64 = rng.sample(StandardNormal);
        let step = config.gamma * normal.abs();
        *value += config.beta * light * direction * step;
    }
    moth.with_numeric(values)
}
