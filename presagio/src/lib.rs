//! presagio
//!
//! Prepares stock-price time series for DeepAR-style forecasting services
//! and decodes what comes back.
//!
//! - `encode`: one series into a request-ready `{start, target}` record.
//! - `dataset`: line-delimited JSON dataset writing.
//! - `window`: training truncation, holdout tails, and per-year slicing.
//! - `request`: batch prediction request assembly.
//! - `response`: quantile forecast decoding.
//! - `service`: the `Forecaster` seam implemented by service clients.
//!
//! Everything is synchronous. Apart from the dataset file writer, every
//! operation is a pure transformation of owned data; nothing here opens a
//! socket. Transport belongs behind the [`Forecaster`] trait, and
//! `presagio-mock` ships a deterministic implementation for tests and
//! examples.
#![warn(missing_docs)]

/// Line-delimited JSON dataset writing.
pub mod dataset;
/// Series-to-record encoding.
pub mod encode;
/// Prediction request assembly.
pub mod request;
/// Quantile forecast decoding.
pub mod response;
/// The forecasting-service seam.
pub mod service;
pub mod types;
/// Training truncation and slicing helpers.
pub mod window;

pub use dataset::{write_jsonl, write_jsonl_file};
pub use encode::encode_series;
pub use request::{build_request, build_request_with_defaults};
pub use response::decode_predictions;
pub use service::Forecaster;
pub use types::*;
pub use window::{holdout_slices, training_slices, yearly_slices};
