//! Query-parameter DTOs.
//!
//! Typing the fields here is what enforces the input contract: a `number`
//! that does not parse as an integer never reaches a handler, it is
//! rejected by the `Query` extractor with a 400.

use serde::Deserialize;

/// Query parameters for `GET /adder`.
#[derive(Debug, Deserialize)]
pub struct AdderParams {
    pub number: i64,
}

/// Query parameters for `GET /names`.
#[derive(Debug, Deserialize)]
pub struct NamesParams {
    pub first_name: String,
    pub last_name: String,
}
