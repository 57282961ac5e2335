use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use warble::design::BUTTERWORTH_Q;
use warble::{EngineState, FilterError, FilterSpec, FilterType, RecursiveFilter, design};

const SAMPLE_RATE: f64 = 48000.0;

#[test]
fn test_normalization_is_idempotent() {
    let feedback = [1.707_106_78, 0.0, 0.292_893_22];
    let feedforward = [0.5, 1.0, 0.5];

    let mut filter = RecursiveFilter::new(2).unwrap();
    filter.set_coefficients(&feedback, &feedforward).unwrap();
    let first = (filter.feedback().to_vec(), filter.feedforward().to_vec());

    for _ in 0..100 {
        filter.process(0.3).unwrap();
    }

    filter.set_coefficients(&feedback, &feedforward).unwrap();
    let second = (filter.feedback().to_vec(), filter.feedforward().to_vec());

    assert_eq!(first, second);
    assert_eq!(filter.feedback()[0], 1.0);
    assert!(filter.output_history().all(|y| y == 0.0));
}

#[test]
fn test_rejected_coefficients_keep_prior_state() {
    let coefs = design(FilterType::BandPass, &FilterSpec::new(800.0, SAMPLE_RATE)).unwrap();
    let mut filter = RecursiveFilter::from_coefficients(&coefs).unwrap();
    for n in 0..10 {
        filter.process(n as f64).unwrap();
    }
    let inputs: Vec<f64> = filter.input_history().collect();
    let outputs: Vec<f64> = filter.output_history().collect();
    let feedback = filter.feedback().to_vec();

    assert!(matches!(
        filter.set_coefficients(&[1.0, 2.0], &[1.0, 2.0, 3.0]),
        Err(FilterError::CoefficientShapeMismatch { .. })
    ));
    assert!(matches!(
        filter.set_coefficients(&[0.0, 2.0, 3.0], &[1.0, 2.0, 3.0]),
        Err(FilterError::DegenerateFilter(_))
    ));

    assert_eq!(filter.state(), EngineState::Ready);
    assert_eq!(filter.feedback(), feedback.as_slice());
    assert_eq!(filter.input_history().collect::<Vec<_>>(), inputs);
    assert_eq!(filter.output_history().collect::<Vec<_>>(), outputs);
}

#[test]
fn test_hand_supplied_coefficients() {
    // Two-point moving average
    let mut filter = RecursiveFilter::new(1).unwrap();
    filter.set_coefficients(&[2.0, 0.0], &[1.0, 1.0]).unwrap();

    let mut block = [2.0, 4.0, 6.0, 6.0];
    filter.process_buffer(&mut block).unwrap();
    assert_eq!(block, [1.0, 3.0, 5.0, 6.0]);
}

#[test]
fn test_impulse_response_decays() {
    let qs = [0.1, 0.5, BUTTERWORTH_Q, 2.0, 10.0];
    let frequencies = [1000.0, 5000.0, 15000.0];

    for ty in FilterType::ALL {
        for freq in frequencies {
            for q in qs {
                for gain_db in [-12.0, 6.0] {
                    let spec = FilterSpec::new(freq, SAMPLE_RATE)
                        .with_q(q)
                        .with_gain_db(gain_db);
                    let coefs = design(ty, &spec).unwrap();
                    let mut filter = RecursiveFilter::from_coefficients(&coefs).unwrap();

                    let mut tail = 0.0_f64;
                    for n in 0..10_000 {
                        let x = if n == 0 { 1.0 } else { 0.0 };
                        let y = filter.process(x).unwrap();
                        assert!(y.is_finite(), "{} {:?} produced {}", ty, spec, y);
                        assert!(y.abs() < 100.0, "{} {:?} blew up: {}", ty, spec, y);
                        if n >= 9_000 {
                            tail = tail.max(y.abs());
                        }
                    }
                    assert!(tail < 1e-6, "{} {:?} did not decay: {}", ty, spec, tail);
                }
            }
        }
    }
}

#[test]
fn test_noise_input_stays_bounded() {
    let mut rng = StdRng::seed_from_u64(0x5eed);
    let coefs = design(
        FilterType::LowPass,
        &FilterSpec::new(1000.0, SAMPLE_RATE).with_q(5.0),
    )
    .unwrap();
    let mut filter = RecursiveFilter::from_coefficients(&coefs).unwrap();

    for _ in 0..48_000 {
        let y = filter.process(rng.gen_range(-1.0..=1.0)).unwrap();
        assert!(y.is_finite());
        assert!(y.abs() < 20.0, "Output amplitude too high: {}", y);
    }
}

#[test]
fn test_steady_state_matches_frequency_response() {
    let freq = 3000.0;
    let coefs = design(
        FilterType::Peak,
        &FilterSpec::new(2000.0, SAMPLE_RATE)
            .with_q(1.5)
            .with_gain_db(9.0),
    )
    .unwrap();
    let expected = coefs.magnitude_at(freq, SAMPLE_RATE);

    let mut filter = RecursiveFilter::from_coefficients(&coefs).unwrap();
    let w = std::f64::consts::TAU * freq / SAMPLE_RATE;
    let mut peak = 0.0_f64;
    // 16 samples per period; settle, then measure across whole periods
    for n in 0..9_600 {
        let y = filter.process((w * n as f64).sin()).unwrap();
        if n >= 4_800 {
            peak = peak.max(y.abs());
        }
    }

    assert!(
        (peak - expected).abs() < 0.03 * expected,
        "peak {} vs |H| {}",
        peak,
        expected
    );
}

#[test]
fn test_independent_channels() {
    let coefs = design(FilterType::HighPass, &FilterSpec::new(200.0, SAMPLE_RATE)).unwrap();
    let mut left = RecursiveFilter::from_coefficients(&coefs).unwrap();
    let mut right = left.clone();

    for _ in 0..50 {
        left.process(1.0).unwrap();
    }
    assert!(right.output_history().all(|y| y == 0.0));
    assert_eq!(right.process(1.0), Ok(coefs.normalized().unwrap().feedforward[0]));
}
