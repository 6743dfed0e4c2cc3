use napi::Result as NapiResult;
use napi_derive::napi;

/// Convert any Display error into a napi::Error.
fn to_napi_error(e: impl std::fmt::Display) -> napi::Error {
    napi::Error::from_reason(e.to_string())
}

// ---------------------------------------------------------------------------
// Planning
// ---------------------------------------------------------------------------

/// Estimate the corpus required at retirement. Takes the `CorpusInput`
/// fields as a JSON string and returns the serialized computation envelope.
#[napi]
pub fn estimate_corpus(input_json: String) -> NapiResult<String> {
    let input: retire_core::corpus::CorpusInput =
        serde_json::from_str(&input_json).map_err(to_napi_error)?;
    let output = retire_core::corpus::estimate_corpus(&input).map_err(to_napi_error)?;
    serde_json::to_string(&output).map_err(to_napi_error)
}

/// Simulate a systematic withdrawal plan. Takes the `SwpInput` fields as a
/// JSON string and returns the serialized computation envelope, including
/// the month-by-month balance schedule.
#[napi]
pub fn simulate_withdrawals(input_json: String) -> NapiResult<String> {
    let input: retire_core::swp::SwpInput =
        serde_json::from_str(&input_json).map_err(to_napi_error)?;
    let output = retire_core::swp::simulate_withdrawals(&input).map_err(to_napi_error)?;
    serde_json::to_string(&output).map_err(to_napi_error)
}
