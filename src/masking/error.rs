// Copyright 2025
// SPDX-License-Identifier: Apache-2.0
//
// Error type for the masking functions

use thiserror::Error;

/// Raised when a numeric masking parameter does not fit the input.
///
/// Blank input is never an error (it yields `""`); this only covers
/// position arithmetic that would go negative, e.g. asking to hide more
/// characters than the string has.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum MaskError {
    #[error("span of {span} characters does not fit an input of {length}")]
    InvalidArgument { span: usize, length: usize },
}
