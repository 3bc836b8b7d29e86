//! Precomputed, read-only entropy pools.
//!
//! Invocations never own RNG state. Each one derives a 64-bit *stream* value
//! from its pixel and sample index and hashes it (plus whatever per-call
//! data it has) into indices of two fixed pools: uniform `u64`s and
//! standard-normal `f32`s. Results depend only on the pools and the inputs,
//! so any execution order gives the same image.

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use rand_distr::StandardNormal;
use thiserror::Error;

/// Reference pool length.
pub const DEFAULT_POOL_LEN: usize = 128;

const SAMPLE_SALT: u64 = 0x5a17_5a17_5a17_5a17;
const GOLDEN_GAMMA: u64 = 0x9e37_79b9_7f4a_7c15;

#[derive(Debug, Error, PartialEq)]
pub enum EntropyError {
    #[error("{0} entropy pool must not be empty")]
    EmptyPool(&'static str),
}

/// SplitMix64 output function.
#[inline]
pub fn mix64(x: u64) -> u64 {
    let mut z = x.wrapping_add(GOLDEN_GAMMA);
    z = (z ^ (z >> 30)).wrapping_mul(0xbf58_476d_1ce4_e5b9);
    z = (z ^ (z >> 27)).wrapping_mul(0x94d0_49bb_1331_11eb);
    z ^ (z >> 31)
}

/// Stream value of one (pixel, sample) invocation.
#[inline]
pub fn stream(world_seed: u64, pixel: usize, sample: u32) -> u64 {
    mix64(world_seed ^ mix64(pixel as u64) ^ mix64((sample as u64).wrapping_add(SAMPLE_SALT)))
}

/// The two read-only pools.
#[derive(Debug, Clone, PartialEq)]
pub struct EntropyPool {
    uniform: Vec<u64>,
    normal: Vec<f32>,
}

impl EntropyPool {
    /// Fill both pools from a seeded RNG.
    pub fn generate(uniform_len: usize, normal_len: usize, seed: u64) -> Result<Self, EntropyError> {
        let mut rng = StdRng::seed_from_u64(seed);
        let uniform = (0..uniform_len).map(|_| rng.gen::<u64>()).collect();
        let normal = (0..normal_len)
            .map(|_| rng.sample::<f32, _>(StandardNormal))
            .collect();

        let pool = Self::from_parts(uniform, normal)?;
        log::debug!(
            "Generated entropy pools: {} uniform, {} normal (seed {:#x})",
            uniform_len,
            normal_len,
            seed
        );
        Ok(pool)
    }

    /// Wrap host-supplied pools.
    pub fn from_parts(uniform: Vec<u64>, normal: Vec<f32>) -> Result<Self, EntropyError> {
        if uniform.is_empty() {
            return Err(EntropyError::EmptyPool("uniform"));
        }
        if normal.is_empty() {
            return Err(EntropyError::EmptyPool("normal"));
        }
        Ok(Self { uniform, normal })
    }

    pub fn uniform_pool(&self) -> &[u64] {
        &self.uniform
    }

    pub fn normal_pool(&self) -> &[f32] {
        &self.normal
    }

    /// Uniform value selected by `key`.
    #[inline]
    pub fn uniform(&self, key: u64) -> u64 {
        self.uniform[(mix64(key) % self.uniform.len() as u64) as usize]
    }

    /// Standard-normal value selected by `key`.
    #[inline]
    pub fn normal(&self, key: u64) -> f32 {
        self.normal[(mix64(key) % self.normal.len() as u64) as usize]
    }

    /// Three normal values at independently hashed indices.
    #[inline]
    pub fn normals3(&self, key: u64) -> [f32; 3] {
        [
            self.normal(key),
            self.normal(key.wrapping_add(GOLDEN_GAMMA)),
            self.normal(key.wrapping_add(GOLDEN_GAMMA.wrapping_mul(2))),
        ]
    }
}

impl Default for EntropyPool {
    fn default() -> Self {
        let mut rng = StdRng::seed_from_u64(0);
        Self {
            uniform: (0..DEFAULT_POOL_LEN).map(|_| rng.gen()).collect(),
            normal: (0..DEFAULT_POOL_LEN)
                .map(|_| rng.sample::<f32, _>(StandardNormal))
                .collect(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_generate_is_deterministic() {
        let a = EntropyPool::generate(128, 128, 7).unwrap();
        let b = EntropyPool::generate(128, 128, 7).unwrap();
        let c = EntropyPool::generate(128, 128, 8).unwrap();

        assert_eq!(a, b);
        assert_ne!(a, c);
        assert_eq!(a.uniform_pool().len(), 128);
        assert_eq!(a.normal_pool().len(), 128);
    }

    #[test]
    fn test_normal_pool_statistics() {
        let pool = EntropyPool::generate(1, 4096, 1).unwrap();
        let n = pool.normal_pool().len() as f32;
        let mean = pool.normal_pool().iter().sum::<f32>() / n;
        let var = pool.normal_pool().iter().map(|x| (x - mean).powi(2)).sum::<f32>() / n;

        assert!(mean.abs() < 0.1, "mean={}", mean);
        assert!((var - 1.0).abs() < 0.15, "var={}", var);
    }

    #[test]
    fn test_empty_pools_rejected() {
        assert_eq!(
            EntropyPool::generate(0, 4, 0).unwrap_err(),
            EntropyError::EmptyPool("uniform")
        );
        assert_eq!(
            EntropyPool::from_parts(vec![1], vec![]).unwrap_err(),
            EntropyError::EmptyPool("normal")
        );
    }

    #[test]
    fn test_lookup_stays_in_pool() {
        let pool = EntropyPool::from_parts(vec![10, 20, 30], vec![0.5]).unwrap();
        for key in 0..100 {
            assert!([10, 20, 30].contains(&pool.uniform(key)));
            assert_eq!(pool.normals3(key), [0.5; 3]);
        }
    }

    #[test]
    fn test_streams_differ() {
        let a = stream(0, 0, 0);
        assert_ne!(a, stream(0, 0, 1));
        assert_ne!(a, stream(0, 1, 0));
        assert_ne!(a, stream(1, 0, 0));
        assert_eq!(a, stream(0, 0, 0));
    }
}
