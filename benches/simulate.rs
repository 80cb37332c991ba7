// ========================================================================================
//
//                     ONUS SIMULATION ENGINE BENCHMARK
//
// ========================================================================================
//
// Measures trial throughput of the burden simulation across universe sizes
// and per-trial draw counts. The weighted draw is O(log n) in the universe
// size and the severity lookup is O(1), so throughput should be dominated
// by the draw count per trial and degrade only gently with universe size.
//
// ========================================================================================

use criterion::{BenchmarkId, Criterion, Throughput, black_box, criterion_group, criterion_main};

use onus::config::SimulationConfig;
use onus::sampler::WeightedSampler;
use onus::simulate::analyse_with_config;
use onus::site::Site;

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

// --- Benchmark Tuning Parameters ---

/// Universe sizes spanning a small exon up to a large multi-transcript gene.
const UNIVERSE_SIZES: [usize; 3] = [100, 2_000, 20_000];

/// De novo counts per trial, matching the range seen in real cohorts.
const DRAW_COUNTS: [usize; 3] = [2, 4, 8];

/// Trials per measured run. Kept flat (increment == ceiling == initial) so
/// the adaptive loop runs exactly one round and the measurement stays a
/// pure batch cost.
const TRIALS: usize = 100_000;

/// Builds a synthetic gene: positions are sequential, rates and severity
/// scores are drawn from realistic ranges under a fixed seed.
fn setup_universe(sites: usize) -> (WeightedSampler, Vec<f64>) {
    let mut rng = StdRng::seed_from_u64(0xB02D_E21 + sites as u64);
    let mut sampler = WeightedSampler::with_seed(sites as u64);
    let mut severity = Vec::with_capacity(sites);
    for i in 0..sites {
        let alt = ["A", "C", "G", "T"][rng.gen_range(0..4)];
        sampler.add_site(Site::new(1_000 + i as i64, 0, alt), rng.gen_range(1e-10..1e-7));
        severity.push(rng.gen_range(0..=40) as f64);
    }
    (sampler, severity)
}

fn bench_batch_throughput(c: &mut Criterion) {
    let config = SimulationConfig {
        iteration_ceiling: TRIALS,
        iteration_increment: TRIALS,
        ..SimulationConfig::default()
    };

    let mut group = c.benchmark_group("batch_throughput");
    group.throughput(Throughput::Elements(TRIALS as u64));

    for &sites in &UNIVERSE_SIZES {
        for &count in &DRAW_COUNTS {
            group.bench_with_input(
                BenchmarkId::new(format!("sites_{sites}"), count),
                &count,
                |b, &count| {
                    b.iter(|| {
                        let (mut sampler, severity) = setup_universe(sites);
                        // Unreachable observed total forces the full batch
                        // to run before the loop returns at the ceiling.
                        let p = analyse_with_config(
                            &mut sampler,
                            &severity,
                            black_box(f64::MAX),
                            count,
                            TRIALS,
                            &config,
                        )
                        .unwrap();
                        black_box(p)
                    })
                },
            );
        }
    }
    group.finish();
}

criterion_group!(benches, bench_batch_throughput);
criterion_main!(benches);
