use tof_span::{TofCalculator, TofError};

#[test]
fn single_step_cycle_has_a_one_by_one_table() {
    let calc = TofCalculator::new(298.15, &[0.0, 20.0, -5.0], None).unwrap();
    assert_eq!(calc.table().matrix().shape(), (1, 1));
    assert_eq!(calc.tdi().as_tuple(), ("g1", 0.0));
    assert_eq!(calc.tdts().as_tuple(), ("ts1", 20.0));
    assert_eq!(calc.energy_span(), 20.0);
    assert_eq!(calc.ground_tofs()[0].value, 1.0);
    assert_eq!(calc.ts_tofs()[0].value, 1.0);
    let tof = calc.tof();
    assert!(((tof - 0.013584216344654546) / 0.013584216344654546).abs() < 1e-9);
}

#[test]
fn single_state_profile_is_a_cycle_error() {
    let err = TofCalculator::new(298.15, &[1.0], None).unwrap_err();
    assert!(matches!(err, TofError::Cycle(_)));
    assert_eq!(err.code(), "no-transition-states");
}

#[test]
fn even_profiles_are_input_errors() {
    for energies in [vec![], vec![0.0, 1.0], vec![0.0, 1.0, 2.0, 3.0]] {
        let err = TofCalculator::new(298.15, &energies, None).unwrap_err();
        assert!(matches!(err, TofError::Input(_)));
        assert_eq!(err.code(), "even-length");
    }
}

#[test]
fn mismatched_labels_are_input_errors() {
    let labels = vec!["a".to_string(); 5];
    let err = TofCalculator::new(298.15, &[0.0, 1.0, 2.0], Some(labels)).unwrap_err();
    assert_eq!(err.code(), "label-length-mismatch");
    assert_eq!(err.info().context.get("labels").map(String::as_str), Some("5"));
}

#[test]
fn zero_temperature_propagates_non_finite_values() {
    let calc = TofCalculator::new(0.0, &[0.0, 10.0, -2.0], None).unwrap();
    assert!(!calc.tof().is_finite());
}

#[test]
fn endergonic_cycle_runs_backwards() {
    let calc = TofCalculator::new(298.15, &[0.0, 12.0, 3.0], None).unwrap();
    assert!(calc.tof() < 0.0);
}
