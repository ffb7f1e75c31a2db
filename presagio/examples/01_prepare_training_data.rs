use presagio::{training_slices, write_jsonl_file};
use presagio_mock::fixtures;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .init();

    // 1. Load daily close-price series (deterministic fixtures in CI).
    let symbols = ["AAPL", "MSFT", "GOOG", "TSLA"];
    let complete: Vec<_> = symbols
        .iter()
        .filter_map(|s| fixtures::series::by_symbol(s))
        .collect();

    // 2. Drop the last few observations from each series; the model must not
    //    see the stretch it will be asked to forecast.
    let prediction_length = 3;
    let training = training_slices(&complete, prediction_length);

    // 3. Write the training dataset in line-delimited JSON.
    let path = std::env::temp_dir().join("presagio-training.jsonl");
    let bytes = write_jsonl_file(&training, &path)?;

    println!(
        "wrote {} series ({bytes} bytes) to {}",
        training.len(),
        path.display()
    );

    Ok(())
}
