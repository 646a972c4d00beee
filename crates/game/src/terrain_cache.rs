//! Streams terrain chunks around the aircraft.
//!
//! The cache keeps exactly the square window of chunks within
//! `retention_radius` (Chebyshev) of the chunk under the aircraft. Work only
//! happens when the aircraft crosses into a new chunk, so `refresh` is safe
//! to call every tick.

use std::collections::HashMap;

use glam::Vec3;
use procgen::{ChunkKey, TerrainChunk};
use serde::{Deserialize, Serialize};

/// How a world coordinate is turned into a chunk index.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum ChunkRounding {
    /// Truncate toward zero. Chunk 0 covers twice the span of its
    /// neighbours around the origin (`(-span, span)`).
    #[default]
    TowardZero,
    /// Mathematical floor: every chunk index covers exactly one span.
    Floor,
}

impl ChunkRounding {
    /// Index of the chunk containing `coord` on a grid of width `span`.
    pub fn index(self, coord: f32, span: f32) -> i32 {
        let scaled = coord / span;
        match self {
            ChunkRounding::TowardZero => scaled.trunc() as i32,
            ChunkRounding::Floor => scaled.floor() as i32,
        }
    }
}

/// Chunk geometry and retention parameters.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TerrainSettings {
    /// Half-width of a chunk in world units.
    pub chunk_size: u32,
    /// Distance between grid points.
    pub grid_spacing: u32,
    /// Chunks kept on each side of the current chunk.
    pub retention_radius: i32,
    pub rounding: ChunkRounding,
}

impl Default for TerrainSettings {
    fn default() -> Self {
        Self {
            chunk_size: 50,
            grid_spacing: 10,
            retention_radius: 2,
            rounding: ChunkRounding::TowardZero,
        }
    }
}

impl TerrainSettings {
    /// World width of one chunk.
    pub fn chunk_span(&self) -> f32 {
        2.0 * self.chunk_size as f32
    }

    /// Number of chunks in a full window.
    pub fn window_len(&self) -> usize {
        let side = (2 * self.retention_radius + 1) as usize;
        side * side
    }
}

/// What a call to [`TerrainCache::refresh`] did.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RefreshOutcome {
    /// Same chunk as last time; nothing touched.
    Unchanged,
    /// The window moved.
    Moved {
        from: Option<ChunkKey>,
        to: ChunkKey,
        generated: usize,
        evicted: usize,
    },
}

impl RefreshOutcome {
    pub fn moved(&self) -> bool {
        matches!(self, RefreshOutcome::Moved { .. })
    }
}

/// Resident terrain chunks around the aircraft.
#[derive(Debug)]
pub struct TerrainCache {
    resident: HashMap<ChunkKey, TerrainChunk>,
    current: Option<ChunkKey>,
    settings: TerrainSettings,
}

impl TerrainCache {
    pub fn new(settings: TerrainSettings) -> Self {
        Self {
            resident: HashMap::with_capacity(settings.window_len()),
            current: None,
            settings,
        }
    }

    pub fn settings(&self) -> &TerrainSettings {
        &self.settings
    }

    /// Chunk containing a world position.
    pub fn chunk_of(&self, position: Vec3) -> ChunkKey {
        let span = self.settings.chunk_span();
        let rounding = self.settings.rounding;
        ChunkKey::new(rounding.index(position.x, span), rounding.index(position.z, span))
    }

    /// Chunk the window is centred on, `None` before the first refresh.
    pub fn current(&self) -> Option<ChunkKey> {
        self.current
    }

    /// Re-centre the window on the chunk under `position`, generating chunks
    /// that entered it and dropping chunks that left it.
    pub fn refresh(&mut self, position: Vec3) -> RefreshOutcome {
        let center = self.chunk_of(position);
        if self.current == Some(center) {
            return RefreshOutcome::Unchanged;
        }
        let from = self.current.replace(center);
        let radius = self.settings.retention_radius;

        let mut generated = 0;
        for key in center.window(radius) {
            if !self.resident.contains_key(&key) {
                let chunk = TerrainChunk::generate(
                    key,
                    self.settings.chunk_size,
                    self.settings.grid_spacing,
                );
                self.resident.insert(key, chunk);
                generated += 1;
            }
        }

        let before = self.resident.len();
        self.resident
            .retain(|key, _| key.chebyshev_distance(center) <= radius);
        let evicted = before - self.resident.len();

        log::debug!(
            "Terrain window {:?} -> {:?}: {} generated, {} evicted, {} resident",
            from,
            center,
            generated,
            evicted,
            self.resident.len()
        );

        RefreshOutcome::Moved {
            from,
            to: center,
            generated,
            evicted,
        }
    }

    /// Drop every chunk and forget the current key.
    pub fn clear(&mut self) {
        self.resident.clear();
        self.current = None;
    }

    pub fn get(&self, key: ChunkKey) -> Option<&TerrainChunk> {
        self.resident.get(&key)
    }

    pub fn contains(&self, key: ChunkKey) -> bool {
        self.resident.contains_key(&key)
    }

    pub fn len(&self) -> usize {
        self.resident.len()
    }

    pub fn is_empty(&self) -> bool {
        self.resident.is_empty()
    }

    /// Resident chunks in no particular order.
    pub fn iter(&self) -> impl Iterator<Item = (&ChunkKey, &TerrainChunk)> {
        self.resident.iter()
    }

    pub fn chunks(&self) -> impl Iterator<Item = &TerrainChunk> {
        self.resident.values()
    }
}

impl Default for TerrainCache {
    fn default() -> Self {
        Self::new(TerrainSettings::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::{rngs::StdRng, Rng, SeedableRng};
    use std::collections::HashSet;

    fn resident_keys(cache: &TerrainCache) -> HashSet<ChunkKey> {
        cache.iter().map(|(k, _)| *k).collect()
    }

    fn expected_window(center: ChunkKey) -> HashSet<ChunkKey> {
        center.window(2).collect()
    }

    #[test]
    fn first_refresh_fills_window() {
        let mut cache = TerrainCache::default();
        assert_eq!(cache.current(), None);
        let outcome = cache.refresh(Vec3::new(0.0, 10.0, 0.0));
        assert_eq!(
            outcome,
            RefreshOutcome::Moved {
                from: None,
                to: ChunkKey::new(0, 0),
                generated: 25,
                evicted: 0,
            }
        );
        assert_eq!(cache.len(), 25);
        assert_eq!(resident_keys(&cache), expected_window(ChunkKey::new(0, 0)));
    }

    #[test]
    fn refresh_in_same_chunk_is_noop() {
        let mut cache = TerrainCache::default();
        cache.refresh(Vec3::new(10.0, 0.0, 10.0));
        let before = resident_keys(&cache);
        let chunk_before = cache.get(ChunkKey::new(2, -2)).cloned();

        assert_eq!(cache.refresh(Vec3::new(10.0, 0.0, 10.0)), RefreshOutcome::Unchanged);
        assert_eq!(cache.refresh(Vec3::new(90.0, 50.0, 99.0)), RefreshOutcome::Unchanged);
        assert_eq!(resident_keys(&cache), before);
        assert_eq!(cache.get(ChunkKey::new(2, -2)).cloned(), chunk_before);
    }

    #[test]
    fn crossing_boundary_slides_window() {
        let mut cache = TerrainCache::default();
        cache.refresh(Vec3::new(99.0, 10.0, 0.0));
        assert_eq!(cache.current(), Some(ChunkKey::new(0, 0)));

        let outcome = cache.refresh(Vec3::new(101.0, 10.0, 0.0));
        assert_eq!(
            outcome,
            RefreshOutcome::Moved {
                from: Some(ChunkKey::new(0, 0)),
                to: ChunkKey::new(1, 0),
                generated: 5,
                evicted: 5,
            }
        );
        for z in -2..=2 {
            assert!(cache.contains(ChunkKey::new(3, z)));
            assert!(!cache.contains(ChunkKey::new(-2, z)));
        }
        assert_eq!(resident_keys(&cache), expected_window(ChunkKey::new(1, 0)));
    }

    #[test]
    fn teleport_replaces_whole_window() {
        let mut cache = TerrainCache::default();
        cache.refresh(Vec3::ZERO);
        let outcome = cache.refresh(Vec3::new(5000.0, 0.0, -5000.0));
        match outcome {
            RefreshOutcome::Moved { generated, evicted, to, .. } => {
                assert_eq!(to, ChunkKey::new(50, -50));
                assert_eq!(generated, 25);
                assert_eq!(evicted, 25);
            }
            RefreshOutcome::Unchanged => panic!("expected the window to move"),
        }
        assert_eq!(cache.len(), 25);
    }

    #[test]
    fn window_matches_position_everywhere() {
        let mut rng = StdRng::seed_from_u64(0x5eed);
        let mut cache = TerrainCache::default();
        for _ in 0..200 {
            let p = Vec3::new(rng.gen_range(-2000.0..2000.0), 0.0, rng.gen_range(-2000.0..2000.0));
            cache.refresh(p);
            let center = cache.chunk_of(p);
            assert_eq!(cache.current(), Some(center));
            assert_eq!(resident_keys(&cache), expected_window(center));
        }
    }

    #[test]
    fn resident_chunks_are_keyed_correctly() {
        let mut cache = TerrainCache::default();
        cache.refresh(Vec3::new(-350.0, 0.0, 420.0));
        for (key, chunk) in cache.iter() {
            assert_eq!(*key, chunk.key());
        }
    }

    #[test]
    fn rounding_toward_zero_vs_floor() {
        let span = 100.0;
        assert_eq!(ChunkRounding::TowardZero.index(-50.0, span), 0);
        assert_eq!(ChunkRounding::Floor.index(-50.0, span), -1);
        assert_eq!(ChunkRounding::TowardZero.index(150.0, span), 1);
        assert_eq!(ChunkRounding::Floor.index(150.0, span), 1);
        assert_eq!(ChunkRounding::TowardZero.index(-150.0, span), -1);
        assert_eq!(ChunkRounding::Floor.index(-150.0, span), -2);
    }

    #[test]
    fn floor_rounding_cache() {
        let mut cache = TerrainCache::new(TerrainSettings {
            rounding: ChunkRounding::Floor,
            ..Default::default()
        });
        cache.refresh(Vec3::new(-1.0, 0.0, -1.0));
        assert_eq!(cache.current(), Some(ChunkKey::new(-1, -1)));
        assert_eq!(resident_keys(&cache), expected_window(ChunkKey::new(-1, -1)));
    }

    #[test]
    fn custom_radius() {
        let settings = TerrainSettings {
            retention_radius: 1,
            ..Default::default()
        };
        let mut cache = TerrainCache::new(settings);
        cache.refresh(Vec3::ZERO);
        assert_eq!(cache.len(), settings.window_len());
        assert_eq!(cache.len(), 9);
    }

    #[test]
    fn clear_forgets_current() {
        let mut cache = TerrainCache::default();
        cache.refresh(Vec3::ZERO);
        cache.clear();
        assert!(cache.is_empty());
        assert_eq!(cache.current(), None);
        assert!(cache.refresh(Vec3::ZERO).moved());
        assert_eq!(cache.len(), 25);
    }
}
