use chrono::{DateTime, TimeZone, Utc};
use presagio::{holdout_slices, training_slices, yearly_slices, TimePoint, TimeSeries};
use proptest::prelude::*;

fn t(secs: i64) -> DateTime<Utc> {
    DateTime::<Utc>::from_timestamp(secs, 0).unwrap()
}

fn hourly(values: &[f64]) -> TimeSeries {
    let points = values
        .iter()
        .enumerate()
        .map(|(i, &v)| TimePoint::new(t(i as i64 * 3_600), v))
        .collect();
    TimeSeries::new(points).unwrap()
}

fn arb_series() -> impl Strategy<Value = TimeSeries> {
    proptest::collection::vec(-1_000.0f64..1_000.0, 0..120).prop_map(|vals| hourly(&vals))
}

proptest! {
    #[test]
    fn training_drops_exactly_the_tail(
        series_list in proptest::collection::vec(arb_series(), 0..8),
        n in 1usize..40,
    ) {
        let out = training_slices(&series_list, n);
        prop_assert_eq!(out.len(), series_list.len());

        for (orig, trained) in series_list.iter().zip(&out) {
            prop_assert_eq!(trained.len(), orig.len().saturating_sub(n));
            let expect: Vec<f64> = orig.values().take(trained.len()).collect();
            let got: Vec<f64> = trained.values().collect();
            prop_assert_eq!(got, expect);
        }
    }

    #[test]
    fn training_and_holdout_partition_each_series(
        series_list in proptest::collection::vec(arb_series(), 1..8),
        n in 1usize..40,
    ) {
        let training = training_slices(&series_list, n);
        let holdout = holdout_slices(&series_list, n);

        for ((orig, train), hold) in series_list.iter().zip(&training).zip(&holdout) {
            let mut joined: Vec<f64> = train.values().collect();
            joined.extend(hold.values());
            prop_assert_eq!(joined, orig.values().collect::<Vec<_>>());
        }
    }

    #[test]
    fn inputs_survive_untouched(
        series_list in proptest::collection::vec(arb_series(), 0..6),
        n in 0usize..40,
    ) {
        let before = series_list.clone();
        let _ = training_slices(&series_list, n);
        let _ = holdout_slices(&series_list, n);
        prop_assert_eq!(series_list, before);
    }
}

#[test]
fn prediction_length_at_or_beyond_len_yields_empty_training() {
    let series = hourly(&[1.0, 2.0, 3.0]);
    for n in [3, 4, 100] {
        let out = training_slices(std::slice::from_ref(&series), n);
        assert_eq!(out.len(), 1);
        assert!(out[0].is_empty(), "n={n} should clear the series");
    }
}

#[test]
fn zero_prediction_length_keeps_training_whole_and_holdout_empty() {
    let series = hourly(&[1.0, 2.0]);
    assert_eq!(training_slices(std::slice::from_ref(&series), 0)[0].len(), 2);
    assert!(holdout_slices(std::slice::from_ref(&series), 0)[0].is_empty());
}

#[test]
fn holdout_keeps_the_last_points() {
    let series = hourly(&[1.0, 2.0, 3.0, 4.0]);
    let hold = holdout_slices(std::slice::from_ref(&series), 2);
    assert_eq!(hold[0].values().collect::<Vec<_>>(), vec![3.0, 4.0]);
}

#[test]
fn yearly_slices_split_on_calendar_years() {
    let series = TimeSeries::new(vec![
        TimePoint::new(Utc.with_ymd_and_hms(2016, 12, 30, 0, 0, 0).unwrap(), 1.0),
        TimePoint::new(Utc.with_ymd_and_hms(2017, 1, 2, 0, 0, 0).unwrap(), 2.0),
        TimePoint::new(Utc.with_ymd_and_hms(2017, 6, 1, 0, 0, 0).unwrap(), 3.0),
        TimePoint::new(Utc.with_ymd_and_hms(2018, 1, 2, 0, 0, 0).unwrap(), 4.0),
    ])
    .unwrap();

    let slices = yearly_slices(&series, &[2016, 2017, 2019]);
    assert_eq!(slices.len(), 3);
    assert_eq!(slices[0].values().collect::<Vec<_>>(), vec![1.0]);
    assert_eq!(slices[1].values().collect::<Vec<_>>(), vec![2.0, 3.0]);
    assert!(slices[2].is_empty(), "2019 has no observations");
}
