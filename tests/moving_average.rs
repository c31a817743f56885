use index_study::{
    stats::{
        mean, moving_average, num_days_big_percent_chg, percent_of_mean, simple_moving_average,
    },
    ErrorKind, SeriesError,
};

#[test]
fn windows_start_at_each_input_index() {
    let averaged = moving_average(&[1.0, 2.0, 3.0, 4.0, 5.0]).unwrap();
    assert_eq!(averaged, vec![2.0, 3.0, 4.0]);
}

#[test]
fn three_values_average_to_their_mean() {
    let series = [17_920.33, 17_837.56, 17_985.19];
    let averaged = moving_average(&series).unwrap();
    assert_eq!(averaged.len(), 1);
    assert_eq!(averaged[0], mean(&series).unwrap());
}

#[test]
fn output_is_two_shorter_than_input() {
    let series: Vec<f64> = (0..70).map(|day| 2_000.0 + day as f64).collect();
    assert_eq!(moving_average(&series).unwrap().len(), 68);
}

#[test]
fn fewer_than_three_values_is_invalid_input() {
    let err = moving_average(&[1.0, 2.0]).unwrap_err();
    assert_eq!(
        err,
        SeriesError::TooShort {
            operation: "simple_moving_average",
            required: 3,
            actual: 2,
        }
    );
    assert_eq!(err.kind(), ErrorKind::InvalidInput);
}

#[test]
fn non_finite_values_are_rejected() {
    let err = moving_average(&[1.0, f64::NAN, 2.0]).unwrap_err();
    assert_eq!(
        err,
        SeriesError::NonFinite {
            operation: "simple_moving_average",
            index: 1,
        }
    );
    assert_eq!(err.kind(), ErrorKind::ArithmeticDegenerate);
}

#[test]
fn window_of_one_is_identity_and_zero_is_rejected() {
    let series = [3.0, 1.0, 4.0, 1.0, 5.0];
    assert_eq!(simple_moving_average(&series, 1).unwrap(), series.to_vec());
    assert_eq!(
        simple_moving_average(&series, 0).unwrap_err(),
        SeriesError::InvalidWindow { window: 0 }
    );
}

#[test]
fn repeated_calls_are_bit_identical() {
    let series = [4_952.25, 4_930.41, 4_963.58, 4_971.36, 4_894.55, 4_958.62];
    let bits = |values: Vec<f64>| values.into_iter().map(f64::to_bits).collect::<Vec<_>>();

    assert_eq!(
        bits(moving_average(&series).unwrap()),
        bits(moving_average(&series).unwrap())
    );
    assert_eq!(
        bits(percent_of_mean(&series).unwrap()),
        bits(percent_of_mean(&series).unwrap())
    );
    assert_eq!(
        num_days_big_percent_chg(&series, 0.4).unwrap(),
        num_days_big_percent_chg(&series, 0.4).unwrap()
    );
}
