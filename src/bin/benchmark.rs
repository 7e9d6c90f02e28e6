//! Performance benchmark comparing the tick strategies

use std::time::Instant;
use bounded_life::{Algorithm, Simulation, SimulationConfig};

fn benchmark(algorithm: Algorithm, size: usize, iterations: u32) -> f64 {
    let config = SimulationConfig::default()
        .with_size(size, size)
        .with_seed(size as u64)
        .with_algorithm(algorithm);
    let mut simulation = match Simulation::new(&config) {
        Ok(simulation) => simulation,
        Err(err) => {
            eprintln!("{size}x{size}: {err}");
            return f64::NAN;
        }
    };

    let start = Instant::now();
    for _ in 0..iterations {
        simulation.tick();
    }
    start.elapsed().as_secs_f64() * 1000.0 / iterations as f64
}

fn main() {
    env_logger::init();
    println!("=== Game of Life Performance Benchmark ===\n");

    let sizes = [100, 200, 500, 1000, 2000];
    let iterations = 20;
    let algorithms = Algorithm::all();

    print!("{:>10}", "Size");
    for algorithm in &algorithms {
        print!(" {:>16}", algorithm.name());
    }
    println!(" {:>10}", "Speedup");
    println!("{:-<72}", "");

    for size in sizes {
        let timings: Vec<f64> = algorithms
            .iter()
            .map(|&algorithm| benchmark(algorithm, size, iterations))
            .collect();
        let serial = timings[0];
        let fastest = timings.iter().copied().fold(f64::INFINITY, f64::min);

        print!("{:>10}", format!("{}x{}", size, size));
        for ms in &timings {
            print!(" {:>14.2}ms", ms);
        }
        println!(" {:>9.1}x", serial / fastest);
    }

    println!("\n=== Throughput at 2000x2000 ===\n");

    let cells = 2000 * 2000;
    for algorithm in algorithms {
        let ms = benchmark(algorithm, 2000, iterations);
        println!(
            "{:<16} {:.2} ms/gen, {:.1}M cells/sec",
            algorithm.name(),
            ms,
            (cells as f64) / (ms / 1000.0) / 1_000_000.0
        );
    }
}
