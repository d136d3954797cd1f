//! Benchmark command
//!
//! Solves a batch of random racks and reports throughput.

use crate::core::{MAX_RACK_LEN, Rack};
use crate::solver::Solver;
use indicatif::{ProgressBar, ProgressStyle};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use std::time::{Duration, Instant};

/// Letter pool racks are drawn from, weighted like an English tile bag
const TILE_BAG: &[u8] =
    b"aaaaaaaaabbccddddeeeeeeeeeeeeffggghhiiiiiiiiijkllllmmnnnnnnooooooooppqrrrrrrssssttttttuuuuvvwwxyyz";

/// Benchmark parameters
#[derive(Debug, Clone, Copy)]
pub struct BenchmarkConfig {
    pub count: usize,
    pub rack_size: usize,
    /// Fixed seed for reproducible racks
    pub seed: Option<u64>,
}

impl Default for BenchmarkConfig {
    fn default() -> Self {
        Self {
            count: 100,
            rack_size: MAX_RACK_LEN,
            seed: None,
        }
    }
}

/// Result of a benchmark run
pub struct BenchmarkResult {
    pub total_racks: usize,
    pub total_matches: usize,
    pub average_matches: f64,
    /// Rack with the most kept matches, and that count
    pub richest_rack: Option<(String, usize)>,
    pub duration: Duration,
    pub racks_per_second: f64,
}

/// Draw a random rack of `size` letters
pub fn random_rack<R: Rng>(rng: &mut R, size: usize) -> String {
    (0..size.clamp(1, MAX_RACK_LEN))
        .map(|_| char::from(TILE_BAG[rng.random_range(0..TILE_BAG.len())]))
        .collect()
}

/// Run the solver over `config.count` random racks
pub fn run_benchmark(solver: &Solver, config: BenchmarkConfig) -> BenchmarkResult {
    let mut rng = config
        .seed
        .map_or_else(StdRng::from_os_rng, StdRng::seed_from_u64);

    let racks: Vec<String> = (0..config.count)
        .map(|_| random_rack(&mut rng, config.rack_size))
        .collect();

    let pb = ProgressBar::new(racks.len() as u64);
    if let Ok(style) = ProgressStyle::with_template(
        "{spinner:.green} [{bar:40.cyan/blue}] {pos}/{len} ({percent}%) | {msg}",
    ) {
        pb.set_style(style.progress_chars("█▓▒░"));
    }

    let mut total_matches = 0;
    let mut richest_rack: Option<(String, usize)> = None;

    let start = Instant::now();

    for letters in &racks {
        let Ok(rack) = Rack::new(letters) else {
            pb.inc(1);
            continue;
        };

        let matches: usize = solver.solve(&rack).values().map(Vec::len).sum();
        total_matches += matches;

        if richest_rack.as_ref().is_none_or(|(_, best)| matches > *best) {
            richest_rack = Some((letters.clone(), matches));
        }

        pb.set_message(letters.clone());
        pb.inc(1);
    }

    pb.finish_with_message("Complete!");

    let duration = start.elapsed();
    let total_racks = racks.len();

    BenchmarkResult {
        total_racks,
        total_matches,
        average_matches: if total_racks > 0 {
            total_matches as f64 / total_racks as f64
        } else {
            0.0
        },
        richest_rack,
        duration,
        racks_per_second: total_racks as f64 / duration.as_secs_f64().max(f64::EPSILON),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::solver::DictionaryRegistry;

    #[test]
    fn random_rack_has_requested_size() {
        let mut rng = StdRng::seed_from_u64(7);
        assert_eq!(random_rack(&mut rng, 5).len(), 5);
        assert_eq!(random_rack(&mut rng, 16).len(), 16);
    }

    #[test]
    fn random_rack_size_is_clamped() {
        let mut rng = StdRng::seed_from_u64(7);
        assert_eq!(random_rack(&mut rng, 0).len(), 1);
        assert_eq!(random_rack(&mut rng, 40).len(), MAX_RACK_LEN);
    }

    #[test]
    fn random_rack_is_valid() {
        let mut rng = StdRng::seed_from_u64(42);
        for _ in 0..50 {
            let letters = random_rack(&mut rng, 12);
            assert!(letters.chars().all(|c| c.is_ascii_lowercase()));
            assert!(Rack::new(&letters).is_ok());
        }
    }

    #[test]
    fn seeded_racks_are_reproducible() {
        let mut a = StdRng::seed_from_u64(99);
        let mut b = StdRng::seed_from_u64(99);
        assert_eq!(random_rack(&mut a, 16), random_rack(&mut b, 16));
    }

    #[test]
    fn benchmark_runs() {
        let (registry, _) = DictionaryRegistry::builtin();
        let solver = Solver::new(&registry);
        let config = BenchmarkConfig {
            count: 10,
            rack_size: 10,
            seed: Some(1),
        };

        let result = run_benchmark(&solver, config);

        assert_eq!(result.total_racks, 10);
        assert!(result.average_matches >= 0.0);
        assert!(result.racks_per_second > 0.0);
        // At most limit words per dictionary per rack
        assert!(result.total_matches <= 10 * registry.len() * 10);
    }

    #[test]
    fn benchmark_richest_rack_matches_total() {
        let mut registry = DictionaryRegistry::new();
        registry.register("words", ["eat", "tea", "ate", "tee"]);
        let solver = Solver::new(&registry);
        let config = BenchmarkConfig {
            count: 20,
            rack_size: 16,
            seed: Some(3),
        };

        let result = run_benchmark(&solver, config);
        if let Some((_, best)) = result.richest_rack {
            assert!(best <= result.total_matches);
            assert!(best <= 4);
        }
    }

    #[test]
    fn benchmark_zero_racks() {
        let registry = DictionaryRegistry::new();
        let solver = Solver::new(&registry);
        let config = BenchmarkConfig {
            count: 0,
            ..BenchmarkConfig::default()
        };

        let result = run_benchmark(&solver, config);
        assert_eq!(result.total_racks, 0);
        assert_eq!(result.total_matches, 0);
        assert!(result.richest_rack.is_none());
    }
}
