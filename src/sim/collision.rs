//! Collision detection between the horse and fences
//!
//! Fences are vertical posts rising from a base 16 units below the ground
//! line, so a tall fence still catches a horse whose jump tops out too low.

use super::horse::Horse;
use super::obstacle::Obstacle;

/// Horizontal extents of the horse and the fence overlap
#[inline]
pub fn overlaps_horizontally(horse: &Horse, obstacle: &Obstacle) -> bool {
    let left = obstacle.x as f32;
    let right = (obstacle.x + obstacle.width) as f32;
    left < horse.x + horse.width && right > horse.x
}

/// The horse's lowest point is below the fence top
#[inline]
pub fn below_fence_top(horse: &Horse, obstacle: &Obstacle) -> bool {
    horse.bottom() > obstacle.top()
}

/// Check a single fence against the horse
pub fn horse_hits(horse: &Horse, obstacle: &Obstacle) -> bool {
    overlaps_horizontally(horse, obstacle) && below_fence_top(horse, obstacle)
}

/// First live fence the horse collides with, if any
pub fn first_hit<'a>(
    horse: &Horse,
    obstacles: impl IntoIterator<Item = &'a Obstacle>,
) -> Option<&'a Obstacle> {
    obstacles.into_iter().find(|o| horse_hits(horse, o))
}

/// True if the horse collides with any live fence
pub fn check_collision<'a>(horse: &Horse, obstacles: impl IntoIterator<Item = &'a Obstacle>) -> bool {
    first_hit(horse, obstacles).is_some()
}
