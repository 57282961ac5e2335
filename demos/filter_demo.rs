//! Prints the coefficients, impulse response and a few magnitude points for
//! every filter type.

use warble::{FilterSpec, FilterType, RecursiveFilter, design};

fn main() -> anyhow::Result<()> {
    let sample_rate = 48000.0;
    let spec = FilterSpec::new(1000.0, sample_rate)
        .with_q(0.707)
        .with_gain_db(6.0);

    println!("Second-order filter designs (1 kHz, Q 0.707, 6 dB where used)\n");

    for (i, filter_type) in FilterType::ALL.into_iter().enumerate() {
        let coefs = design(filter_type, &spec)?;
        let norm = coefs.normalized()?;

        println!("{}. {}", i + 1, filter_type);
        println!("   feedback:    {:>9.5?}", norm.feedback);
        println!("   feedforward: {:>9.5?}", norm.feedforward);

        let mut filter = RecursiveFilter::from_coefficients(&coefs)?;
        print!("   Impulse:     ");
        for n in 0..8 {
            let x = if n == 0 { 1.0 } else { 0.0 };
            print!("{:.3} ", filter.process(x)?);
        }
        println!();

        print!("   Magnitude:   ");
        for freq in [100.0, 1000.0, 10000.0] {
            print!(
                "{:>5} Hz {:+6.2} dB  ",
                freq,
                coefs.magnitude_db_at(freq, sample_rate)
            );
        }
        println!("\n");
    }

    println!("Filter demonstration complete!");
    Ok(())
}
