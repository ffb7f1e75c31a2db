use presagio::{
    build_request, decode_predictions, holdout_slices, training_slices, Forecaster,
    RequestConfiguration,
};
use presagio_mock::{fixtures, MockForecaster};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    // 1. Load fixture series and split off the stretch we will forecast.
    let symbols = ["AAPL", "MSFT", "GOOG", "TSLA"];
    let complete: Vec<_> = symbols
        .iter()
        .filter_map(|s| fixtures::series::by_symbol(s))
        .collect();

    let prediction_length = 3;
    let training = training_slices(&complete, prediction_length);
    let holdout = holdout_slices(&complete, prediction_length);

    // 2. Build the request payload with the default 0.1/0.5/0.9 levels.
    let request = build_request(&training, &RequestConfiguration::default())?;

    // 3. Hand it to a forecaster. The mock stands in for a hosted endpoint.
    let forecaster = MockForecaster::new(prediction_length);
    let response = forecaster.predict(&request)?;

    // 4. Decode the quantile tables and compare against the held-out points.
    let tables = decode_predictions(&response)?;
    for ((symbol, table), actual) in symbols.iter().zip(&tables).zip(&holdout) {
        println!("{symbol}:");
        for step in 0..table.horizon() {
            let p10 = table.value_at("0.1", step).unwrap_or(f64::NAN);
            let p50 = table.value_at("0.5", step).unwrap_or(f64::NAN);
            let p90 = table.value_at("0.9", step).unwrap_or(f64::NAN);
            let observed = actual.points().get(step).map_or(f64::NAN, |p| p.value);
            println!(
                "  step {step}: p10={p10:.2} p50={p50:.2} p90={p90:.2} observed={observed:.2}"
            );
        }
    }

    Ok(())
}
