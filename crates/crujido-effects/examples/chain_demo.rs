//! Demonstration of the distortion pipeline inside an effect chain.
//!
//! Builds a stereo sine block, runs it through two chained distortion
//! stages, and prints level statistics before and after.
//!
//! Run with: cargo run --example chain_demo

use crujido_core::{AudioBlock, BlockEffect};
use crujido_effects::{Distortion, DistortionParams, EffectChain};

const SAMPLE_RATE: f32 = 48000.0;
const FRAMES: usize = 4800;

fn rms(samples: &[f32]) -> f32 {
    (samples.iter().map(|x| x * x).sum::<f32>() / samples.len() as f32).sqrt()
}

fn peak(samples: &[f32]) -> f32 {
    samples.iter().map(|x| x.abs()).fold(0.0f32, f32::max)
}

fn main() {
    println!("Crujido Chain Demo");
    println!("==================\n");

    // 440 Hz stereo sine at -6 dBFS, interleaved L R L R ...
    let mut samples: Vec<f32> = (0..FRAMES)
        .flat_map(|i| {
            let t = i as f32 / SAMPLE_RATE;
            let s = (2.0 * std::f32::consts::PI * 440.0 * t).sin() * 0.5;
            [s, s]
        })
        .collect();

    println!("input:  rms {:.4}, peak {:.4}", rms(&samples), peak(&samples));

    // Stage 1: heavy asymmetric clipping
    let mut crunch = Distortion::with_params(DistortionParams {
        drive_db: 24.0,
        threshold: 0.5,
        knee: 0.3,
        bias: 0.15,
        ..DistortionParams::default()
    });

    // Stage 2: gentle symmetric limiter-ish stage, mostly dry
    let mut polish = Distortion::with_params(DistortionParams {
        drive_db: 6.0,
        threshold: 0.9,
        knee: 0.8,
        bias: 0.0,
        mix: 0.4,
        output_db: 0.0,
        ..DistortionParams::default()
    });

    let polish_controls = polish.controller();

    let mut chain = EffectChain::new();
    assert!(chain.push(&mut crunch));
    assert!(chain.push(&mut polish));

    chain.prepare(SAMPLE_RATE, FRAMES, 2);

    let mut block = AudioBlock::new(&mut samples, 2);
    chain.process(&mut block);

    println!("output: rms {:.4}, peak {:.4}", rms(&samples), peak(&samples));

    // Parameter changes land on the next block, no re-prepare needed.
    polish_controls.set(DistortionParams {
        mix: 1.0,
        ..polish_controls.get()
    });
    println!("\npolish stage mix bumped to {:.1} for the next block", 1.0);
}
