// Copyright 2025 John Brosnihan
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
//     http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.
//! Headless host for the ragdoll
//!
//! Drives a [`Simulation`] the way a windowing host would: a tick every
//! frame, a reset on a scripted "click", and a recorded frame at the end.
//! Run with `RUST_LOG=debug` to see per-step timings.
//!
//! ```text
//! cargo run --example headless -- --frames 180 --click-at 90 --x 200 --y 120
//! ```

use clap::Parser;
use env_logger::{Builder, Env};
use log::{info, LevelFilter};
use ragdoll_physics::render::DrawCommand;
use ragdoll_physics::simulation::{frame_interval, DEFAULT_FPS};
use ragdoll_physics::{Bounds, HostEvent, Simulation, StepConfig};

/// Headless ragdoll host
#[derive(Parser)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Number of frames to simulate
    #[arg(long, default_value_t = 120)]
    frames: u64,

    /// Frame at which to simulate a mouse click
    #[arg(long)]
    click_at: Option<u64>,

    /// Click x coordinate
    #[arg(long, default_value_t = 200.0)]
    x: f64,

    /// Click y coordinate
    #[arg(long, default_value_t = 100.0)]
    y: f64,

    /// Window width
    #[arg(long, default_value_t = 800.0)]
    width: f64,

    /// Window height
    #[arg(long, default_value_t = 600.0)]
    height: f64,

    /// Sleep between frames to mimic a real-time host
    #[arg(long)]
    realtime: bool,

    /// Enable verbose logging
    #[arg(short, long)]
    verbose: bool,
}

fn init_logging(verbose: bool) {
    let level = if verbose {
        LevelFilter::Debug
    } else {
        LevelFilter::Info
    };
    let env = Env::default().default_filter_or(level.to_string());
    let _ = Builder::from_env(env).try_init();
}

fn main() {
    let args = Args::parse();
    init_logging(args.verbose);

    let config = StepConfig::new().with_bounds(Bounds::new(args.width, args.height));
    let mut sim = match Simulation::new(config) {
        Ok(sim) => sim,
        Err(err) => {
            eprintln!("Invalid configuration: {}", err);
            std::process::exit(2);
        }
    };

    println!("Ragdoll Physics - Headless Host");
    println!("===============================\n");

    let interval = frame_interval(DEFAULT_FPS);
    for frame in 0..args.frames {
        if args.click_at == Some(frame) {
            sim.handle(HostEvent::Reset { x: args.x, y: args.y });
            info!("Click at ({:.0}, {:.0}) on frame {}", args.x, args.y, frame);
        }
        sim.handle(HostEvent::Tick);

        if frame % u64::from(DEFAULT_FPS) == 0 {
            let centroid = sim.ragdoll().centroid();
            println!(
                "  frame {:>4}: centroid ({:>7.2}, {:>7.2}), kinetic energy {:.4}",
                frame,
                centroid.x,
                centroid.y,
                sim.ragdoll().kinetic_energy()
            );
        }

        if args.realtime {
            std::thread::sleep(interval);
        }
    }
    sim.handle(HostEvent::Quit);

    println!("\nFinal frame:");
    let mut frame: Vec<DrawCommand> = Vec::new();
    sim.draw(&mut frame);
    for command in &frame {
        match command {
            DrawCommand::Circle { center, radius, color } => {
                println!("  circle at {:?} r={} rgb{:?}", center, radius, color.as_tuple());
            }
            DrawCommand::Line { from, to, width, .. } => {
                println!("  line {:?} -> {:?} w={}", from, to, width);
            }
        }
    }

    let timing = sim.timing();
    println!(
        "\n{} steps, mean {:?}, max {:?}",
        timing.samples,
        timing.mean(),
        timing.max.unwrap_or_default()
    );
}
