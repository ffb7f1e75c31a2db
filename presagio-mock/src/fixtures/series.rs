use presagio::{TimePoint, TimeSeries};

/// Daily adjusted-close series for a handful of well-known symbols.
pub fn by_symbol(s: &str) -> Option<TimeSeries> {
    match s {
        "AAPL" => Some(build(&[
            ("2023-01-03", 125.07),
            ("2023-01-04", 126.36),
            ("2023-01-05", 125.02),
            ("2023-01-06", 129.62),
            ("2023-01-09", 130.15),
            ("2023-01-10", 130.73),
            ("2023-01-11", 133.49),
            ("2023-01-12", 133.41),
        ])),
        "MSFT" => Some(build(&[
            ("2023-01-03", 239.58),
            ("2023-01-04", 229.10),
            ("2023-01-05", 222.31),
            ("2023-01-06", 224.93),
            ("2023-01-09", 227.12),
            ("2023-01-10", 228.85),
            ("2023-01-11", 235.77),
            ("2023-01-12", 238.51),
        ])),
        "GOOG" => Some(build(&[
            ("2023-01-03", 89.70),
            ("2023-01-04", 88.71),
            ("2023-01-05", 86.77),
            ("2023-01-06", 88.16),
            ("2023-01-09", 88.02),
            ("2023-01-10", 88.42),
            ("2023-01-11", 91.52),
            ("2023-01-12", 91.13),
        ])),
        "TSLA" => Some(build(&[
            ("2023-01-03", 108.10),
            ("2023-01-04", 113.64),
            ("2023-01-05", 110.34),
            ("2023-01-06", 113.06),
            ("2023-01-09", 119.77),
            ("2023-01-10", 118.85),
            ("2023-01-11", 123.22),
            ("2023-01-12", 123.56),
        ])),
        _ => None,
    }
}

fn build(rows: &[(&str, f64)]) -> TimeSeries {
    let points = rows
        .iter()
        .map(|&(date, close)| {
            TimePoint::new(
                chrono::NaiveDate::parse_from_str(date, "%Y-%m-%d")
                    .unwrap()
                    .and_hms_opt(0, 0, 0)
                    .unwrap()
                    .and_utc(),
                close,
            )
        })
        .collect();
    TimeSeries::new(points).unwrap()
}
