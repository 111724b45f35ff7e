//! Obstacle spawner
//!
//! Draws come from the session's RNG only, so a seed reproduces the exact
//! obstacle sequence.

use rand::Rng;

use super::state::{Obstacle, ObstacleKind};
use crate::tuning::Tuning;

/// Weighted kind draw: collectible with `collectible_chance`, otherwise an
/// even split between rock and ramp.
pub fn roll_kind<R: Rng + ?Sized>(rng: &mut R, collectible_chance: f64) -> ObstacleKind {
    if rng.random::<f64>() < collectible_chance {
        ObstacleKind::Collectible
    } else if rng.random::<f64>() > 0.5 {
        ObstacleKind::Rock
    } else {
        ObstacleKind::Ramp
    }
}

/// Uniform value in `lo..hi` (returns `lo` for an empty range)
fn roll_between<R: Rng + ?Sized>(rng: &mut R, (lo, hi): (f32, f32)) -> f32 {
    lo + rng.random::<f32>() * (hi - lo)
}

/// Build a new obstacle at the right edge of the play field
pub fn roll_obstacle<R: Rng + ?Sized>(rng: &mut R, tuning: &Tuning, id: u32) -> Obstacle {
    let kind = roll_kind(rng, tuning.collectible_chance);
    let (width, height) = match kind {
        ObstacleKind::Collectible => (tuning.collectible_size, tuning.collectible_size),
        ObstacleKind::Rock | ObstacleKind::Ramp => (
            roll_between(rng, tuning.obstacle_width),
            roll_between(rng, tuning.obstacle_height),
        ),
    };

    Obstacle {
        id,
        x: tuning.field_width,
        width,
        height,
        kind,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::consts::*;
    use rand::SeedableRng;
    use rand_pcg::Pcg32;

    #[test]
    fn test_sizes_within_ranges() {
        let tuning = Tuning::default();
        let mut rng = Pcg32::seed_from_u64(2024);
        for id in 0..500 {
            let o = roll_obstacle(&mut rng, &tuning, id);
            assert_eq!(o.x, GAME_WIDTH);
            match o.kind {
                ObstacleKind::Collectible => {
                    assert_eq!(o.width, COLLECTIBLE_SIZE);
                    assert_eq!(o.height, COLLECTIBLE_SIZE);
                }
                _ => {
                    assert!((OBSTACLE_MIN_WIDTH..=OBSTACLE_MAX_WIDTH).contains(&o.width));
                    assert!((OBSTACLE_MIN_HEIGHT..=OBSTACLE_MAX_HEIGHT).contains(&o.height));
                }
            }
        }
    }

    #[test]
    fn test_kind_distribution() {
        let mut rng = Pcg32::seed_from_u64(99);
        let n = 10_000;
        let mut counts = [0u32; 3];
        for _ in 0..n {
            match roll_kind(&mut rng, COLLECTIBLE_CHANCE) {
                ObstacleKind::Rock => counts[0] += 1,
                ObstacleKind::Ramp => counts[1] += 1,
                ObstacleKind::Collectible => counts[2] += 1,
            }
        }
        // ~10% collectibles, the rest split evenly (generous bounds)
        assert!((700..1300).contains(&counts[2]), "collectibles: {}", counts[2]);
        assert!((3900..5100).contains(&counts[0]), "rocks: {}", counts[0]);
        assert!((3900..5100).contains(&counts[1]), "ramps: {}", counts[1]);
    }

    #[test]
    fn test_chance_extremes() {
        let mut rng = Pcg32::seed_from_u64(1);
        for _ in 0..100 {
            assert_ne!(roll_kind(&mut rng, 0.0), ObstacleKind::Collectible);
            assert_eq!(roll_kind(&mut rng, 1.0), ObstacleKind::Collectible);
        }
    }

    #[test]
    fn test_same_seed_same_sequence() {
        let tuning = Tuning::default();
        let mut a = Pcg32::seed_from_u64(77);
        let mut b = Pcg32::seed_from_u64(77);
        for id in 0..50 {
            assert_eq!(roll_obstacle(&mut a, &tuning, id), roll_obstacle(&mut b, &tuning, id));
        }
    }
}
