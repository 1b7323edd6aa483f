// Copyright 2025
// SPDX-License-Identifier: Apache-2.0
//
// Deterministic string desensitization utilities
//
// Partially masks names, addresses, phone numbers, emails and card/ID
// numbers with `*` before contributor data is surfaced to callers. All
// masking is character-counted (not byte-counted), pure, and total over
// blank input.

pub mod masking;
pub mod query;

pub use masking::config::MaskRule;
pub use masking::error::MaskError;
