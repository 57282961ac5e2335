//! Renders white noise through a designed filter into a WAV file.
//!
//! Usage: `cargo run --example render_wav -- [filter-type] [frequency] [output.wav]`
//!
//! The filter type is one of low-pass, high-pass, band-pass, all-pass, peak,
//! low-shelf or high-shelf. Defaults to a 1 kHz low-pass written to
//! `filtered_noise.wav`.

use anyhow::{Context, Result};
use rand::SeedableRng;
use warble::signals::{Signal, SignalExt, WhiteNoise};
use warble::{FilterSpec, FilterType, RecursiveFilter, design};

const SAMPLE_RATE: u32 = 44100;
const SECONDS: u32 = 3;

fn main() -> Result<()> {
    let mut args = std::env::args().skip(1);
    let filter_type: FilterType = args
        .next()
        .unwrap_or_else(|| "low-pass".to_string())
        .parse()?;
    let frequency: f64 = match args.next() {
        Some(arg) => arg
            .parse()
            .with_context(|| format!("invalid frequency: {}", arg))?,
        None => 1000.0,
    };
    let path = args
        .next()
        .unwrap_or_else(|| "filtered_noise.wav".to_string());

    let spec = FilterSpec::new(frequency, SAMPLE_RATE as f64)
        .with_q(2.0)
        .with_gain_db(12.0)
        .nyquist_checked()?;
    let coefs = design(filter_type, &spec)?;
    let filter = RecursiveFilter::from_coefficients(&coefs)?;

    let noise = WhiteNoise::with_rng(rand::rngs::StdRng::seed_from_u64(42));
    let mut filtered = noise.filtered(filter)?;

    let wav_spec = hound::WavSpec {
        channels: 1,
        sample_rate: SAMPLE_RATE,
        bits_per_sample: 32,
        sample_format: hound::SampleFormat::Float,
    };
    let mut writer = hound::WavWriter::create(&path, wav_spec)
        .with_context(|| format!("failed to create {}", path))?;

    // Keep boosted designs away from clipping
    let headroom = 0.25;
    let mut peak = 0.0_f64;
    for _ in 0..SAMPLE_RATE * SECONDS {
        let sample = filtered.next_sample() * headroom;
        peak = peak.max(sample.abs());
        writer.write_sample(sample as f32)?;
    }
    writer.finalize()?;

    println!(
        "Wrote {}s of {} noise at {} Hz to {} (peak {:.3})",
        SECONDS, filter_type, frequency, path, peak
    );
    Ok(())
}
