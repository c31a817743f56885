use std::path::Path;

use index_study::{
    data::{indices, MarketData, StockIndex},
    DataError,
};
use indexmap::IndexMap;

const SMALL: &str = "\
day,djia,sp500,nasdaq
0, 17789.67, 2099.33, 4952.25
1, 17718.16, 2084.92, 4930.41
2, 17876.42, 2099.68, 4963.58
";

#[test]
fn reads_aligned_columns_in_chart_order() {
    let data = indices::from_reader(SMALL.as_bytes()).unwrap();
    assert_eq!(data.days(), &[0, 1, 2]);
    assert_eq!(data.series(StockIndex::Sp500), &[2099.33, 2084.92, 2099.68]);
    let order: Vec<StockIndex> = data.iter().map(|(index, _)| index).collect();
    assert_eq!(order, StockIndex::ALL.to_vec());
}

#[test]
fn bundled_sample_covers_seventy_days() {
    let path = Path::new(env!("CARGO_MANIFEST_DIR")).join("data/indices.csv");
    let data = indices::load_csv(path).unwrap();
    assert_eq!(data.len(), 70);
    assert_eq!(data.days().first(), Some(&0));
}

#[test]
fn missing_column_is_a_csv_error() {
    let err = indices::from_reader("day,djia,sp500\n0,1,2\n".as_bytes()).unwrap_err();
    assert!(matches!(err, DataError::Csv(_)));
}

#[test]
fn too_few_rows_are_rejected() {
    let two_rows = "day,djia,sp500,nasdaq\n0,1,2,3\n1,1,2,3\n";
    let err = indices::from_reader(two_rows.as_bytes()).unwrap_err();
    assert!(matches!(
        err,
        DataError::TooFewRows {
            required: 3,
            actual: 2
        }
    ));
}

#[test]
fn non_finite_cells_are_rejected() {
    let csv = "day,djia,sp500,nasdaq\n0,1,2,3\n1,1,NaN,3\n2,1,2,3\n";
    let err = indices::from_reader(csv.as_bytes()).unwrap_err();
    assert!(matches!(err, DataError::NonFinite { ref column, row: 1 } if column == "sp500"));
}

#[test]
fn columns_must_match_the_day_axis() {
    let mut series = IndexMap::new();
    series.insert(StockIndex::Djia, vec![1.0, 2.0, 3.0]);
    series.insert(StockIndex::Sp500, vec![1.0, 2.0]);
    series.insert(StockIndex::Nasdaq, vec![1.0, 2.0, 3.0]);
    let err = MarketData::new(vec![0, 1, 2], series).unwrap_err();
    assert!(matches!(
        err,
        DataError::LengthMismatch {
            expected: 3,
            actual: 2,
            ..
        }
    ));
}

#[test]
fn every_index_is_required() {
    let mut series = IndexMap::new();
    series.insert(StockIndex::Djia, vec![1.0, 2.0, 3.0]);
    let err = MarketData::new(vec![0, 1, 2], series).unwrap_err();
    assert!(matches!(err, DataError::MissingSeries(_)));
}
