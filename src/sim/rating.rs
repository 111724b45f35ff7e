//! Game-over rating shown under the final score

/// Message for a final score
pub fn rating_for(score: u64) -> &'static str {
    match score {
        0..=9 => "Keep practicing, rider!",
        10..=24 => "Nice jumping skills!",
        25..=49 => "Excellent performance!",
        50..=99 => "You're getting good at this!",
        _ => "Dirt bike legend!",
    }
}
