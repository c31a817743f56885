use index_study::config::{parse_thresholds, Settings};

#[test]
fn thresholds_parse_from_a_comma_list() {
    let parsed = parse_thresholds(" 0.2, 0.4 ,1.0,").unwrap();
    assert_eq!(parsed, vec![0.2, 0.4, 1.0]);
    assert!(parse_thresholds("0.2,abc").is_err());
}

#[test]
fn defaults_match_the_study_setup() {
    let settings = Settings::default();
    assert_eq!(settings.thresholds, vec![0.2, 0.4, 0.6, 0.8, 1.0]);
    assert_eq!(settings.chart_size(), (1280, 720));
    assert_eq!(settings.reference_date.to_string(), "2016-06-01");
    assert_eq!(
        settings.join_output("big_change_days.csv"),
        std::path::PathBuf::from("./outputs/big_change_days.csv")
    );
}
