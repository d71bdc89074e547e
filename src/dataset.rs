//! The Pipeline Creation Diagnostic assessment compiled into the binary.
//!
//! `maturitymap score` falls back to this dataset when no file is given.

use crate::core::Assessment;
use crate::errors::Result;
use crate::io::{parse_assessment, DocumentFormat, LoadOptions};

const DIAGNOSTIC_ASSESSMENT: &str = include_str!("../data/diagnostic_assessment.json");

/// Raw JSON of the embedded assessment
pub fn builtin_source() -> &'static str {
    DIAGNOSTIC_ASSESSMENT
}

/// Parse the embedded assessment under strict loading
pub fn builtin_assessment() -> Result<Assessment> {
    parse_assessment(
        DIAGNOSTIC_ASSESSMENT,
        DocumentFormat::Json,
        LoadOptions::strict(),
    )
}
