//! Fences and the stream that spawns, scrolls and retires them

use std::collections::VecDeque;

use rand::{Rng, SeedableRng};
use rand_pcg::Pcg32;
use serde::{Deserialize, Serialize};

use crate::consts::*;

/// Inclusive range of fence heights
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct HeightBand {
    pub min: u32,
    pub max: u32,
}

impl HeightBand {
    /// Band used for fences spawned at the given score.
    /// Widens monotonically as the score grows.
    pub fn for_score(score: u32) -> Self {
        let (min, max) = match score {
            0..10 => (10, 20),
            10..15 => (20, 30),
            15..20 => (20, 40),
            _ => (30, 50),
        };
        Self { min, max }
    }

    pub fn contains(&self, height: u32) -> bool {
        (self.min..=self.max).contains(&height)
    }
}

/// Source of fence heights.
///
/// One call per spawn; the result must lie inside `band`.
pub trait HeightSource {
    fn sample(&mut self, band: HeightBand) -> u32;
}

/// Default height source: uniform draws from a seeded PCG stream
#[derive(Debug, Clone)]
pub struct SeededHeights {
    rng: Pcg32,
}

impl SeededHeights {
    pub fn new(seed: u64) -> Self {
        Self {
            rng: Pcg32::seed_from_u64(seed),
        }
    }
}

impl HeightSource for SeededHeights {
    fn sample(&mut self, band: HeightBand) -> u32 {
        self.rng.random_range(band.min..=band.max)
    }
}

/// Replays a fixed list of heights, clamped into the requested band.
/// Falls back to the band minimum once the list is exhausted.
#[derive(Debug, Clone, Default)]
pub struct ScriptedHeights {
    heights: VecDeque<u32>,
}

impl ScriptedHeights {
    pub fn new(heights: impl IntoIterator<Item = u32>) -> Self {
        Self {
            heights: heights.into_iter().collect(),
        }
    }
}

impl HeightSource for ScriptedHeights {
    fn sample(&mut self, band: HeightBand) -> u32 {
        self.heights
            .pop_front()
            .map(|h| h.clamp(band.min, band.max))
            .unwrap_or(band.min)
    }
}

/// A fence the horse must clear
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Obstacle {
    /// Left edge
    pub x: i32,
    /// Height above the fence base, fixed at spawn
    pub height: u32,
    pub width: i32,
}

impl Obstacle {
    pub fn new(x: i32, height: u32) -> Self {
        Self {
            x,
            height,
            width: FENCE_WIDTH,
        }
    }

    /// Top edge in screen space
    pub fn top(&self) -> f32 {
        (GROUND_Y + FENCE_BASE_OFFSET) - self.height as f32
    }

    /// Right edge has passed the left side of the screen
    pub fn is_off_screen(&self) -> bool {
        self.x + self.width < 0
    }
}

/// Live fences, oldest first
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ObstacleStream {
    live: Vec<Obstacle>,
}

impl ObstacleStream {
    pub fn new() -> Self {
        Self::default()
    }

    /// Spawn a fence if `frame_count` lands on the spawn interval.
    /// The fence height is drawn once, from the band for `score`.
    pub fn maybe_spawn(
        &mut self,
        frame_count: u64,
        score: u32,
        heights: &mut impl HeightSource,
    ) -> Option<&Obstacle> {
        if frame_count == 0 || !frame_count.is_multiple_of(SPAWN_INTERVAL) {
            return None;
        }
        let band = HeightBand::for_score(score);
        let height = heights.sample(band);
        debug_assert!(band.contains(height), "height {height} outside {band:?}");
        log::debug!("Fence spawned at frame {frame_count} (height {height})");
        self.live.push(Obstacle::new(FENCE_SPAWN_X, height));
        self.live.last()
    }

    /// Scroll every fence left by `speed` and retire those that left the
    /// screen. Returns the retired fences in spawn order.
    pub fn advance(&mut self, speed: i32) -> Vec<Obstacle> {
        for obstacle in &mut self.live {
            obstacle.x -= speed;
        }
        let (retired, retained): (Vec<_>, Vec<_>) = std::mem::take(&mut self.live)
            .into_iter()
            .partition(Obstacle::is_off_screen);
        self.live = retained;
        retired
    }

    pub fn push(&mut self, obstacle: Obstacle) {
        self.live.push(obstacle);
    }

    pub fn clear(&mut self) {
        self.live.clear();
    }

    pub fn len(&self) -> usize {
        self.live.len()
    }

    pub fn is_empty(&self) -> bool {
        self.live.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Obstacle> {
        self.live.iter()
    }

    pub fn as_slice(&self) -> &[Obstacle] {
        &self.live
    }
}

impl<'a> IntoIterator for &'a ObstacleStream {
    type Item = &'a Obstacle;
    type IntoIter = std::slice::Iter<'a, Obstacle>;

    fn into_iter(self) -> Self::IntoIter {
        self.live.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_height_bands() {
        assert_eq!(HeightBand::for_score(0), HeightBand { min: 10, max: 20 });
        assert_eq!(HeightBand::for_score(9), HeightBand { min: 10, max: 20 });
        assert_eq!(HeightBand::for_score(10), HeightBand { min: 20, max: 30 });
        assert_eq!(HeightBand::for_score(14), HeightBand { min: 20, max: 30 });
        assert_eq!(HeightBand::for_score(15), HeightBand { min: 20, max: 40 });
        assert_eq!(HeightBand::for_score(19), HeightBand { min: 20, max: 40 });
        assert_eq!(HeightBand::for_score(20), HeightBand { min: 30, max: 50 });
        assert_eq!(HeightBand::for_score(1000), HeightBand { min: 30, max: 50 });
    }

    #[test]
    fn test_seeded_heights_stay_in_band() {
        let mut heights = SeededHeights::new(42);
        for score in [5, 12, 17, 25] {
            let band = HeightBand::for_score(score);
            for _ in 0..200 {
                assert!(band.contains(heights.sample(band)));
            }
        }
    }

    #[test]
    fn test_seeded_heights_are_reproducible() {
        let band = HeightBand::for_score(25);
        let mut a = SeededHeights::new(7);
        let mut b = SeededHeights::new(7);
        for _ in 0..50 {
            assert_eq!(a.sample(band), b.sample(band));
        }
    }

    #[test]
    fn test_scripted_heights_clamp_and_fall_back() {
        let mut heights = ScriptedHeights::new([15, 99]);
        let band = HeightBand::for_score(0);
        assert_eq!(heights.sample(band), 15);
        assert_eq!(heights.sample(band), 20);
        assert_eq!(heights.sample(band), 10);
    }

    #[test]
    fn test_spawn_only_on_interval() {
        let mut stream = ObstacleStream::new();
        let mut heights = ScriptedHeights::new([12, 18]);
        assert!(stream.maybe_spawn(0, 0, &mut heights).is_none());
        assert!(stream.maybe_spawn(79, 0, &mut heights).is_none());

        let spawned = stream.maybe_spawn(80, 0, &mut heights).cloned();
        assert_eq!(spawned, Some(Obstacle::new(FENCE_SPAWN_X, 12)));
        assert!(stream.maybe_spawn(81, 0, &mut heights).is_none());
        assert!(stream.maybe_spawn(160, 0, &mut heights).is_some());
        assert_eq!(stream.len(), 2);
    }

    #[test]
    fn test_retire_exactly_when_right_edge_leaves() {
        let mut stream = ObstacleStream::new();
        stream.push(Obstacle::new(-9, 10));

        // x + width == 0 is still on screen
        assert!(stream.advance(3).is_empty());
        assert_eq!(stream.iter().next().map(|o| o.x), Some(-12));

        let retired = stream.advance(1);
        assert_eq!(retired.len(), 1);
        assert_eq!(retired[0].x, -13);
        assert!(stream.is_empty());
    }

    #[test]
    fn test_retirement_keeps_spawn_order() {
        let mut stream = ObstacleStream::new();
        stream.push(Obstacle::new(-11, 10));
        stream.push(Obstacle::new(-10, 11));
        stream.push(Obstacle::new(50, 12));
        stream.push(Obstacle::new(100, 13));

        let retired = stream.advance(3);
        let retired_heights: Vec<u32> = retired.iter().map(|o| o.height).collect();
        assert_eq!(retired_heights, vec![10, 11]);

        let live: Vec<(i32, u32)> = stream.iter().map(|o| (o.x, o.height)).collect();
        assert_eq!(live, vec![(47, 12), (97, 13)]);
    }

    #[test]
    fn test_fence_top() {
        let fence = Obstacle::new(55, 30);
        assert_eq!(fence.top(), 86.0);
    }
}
