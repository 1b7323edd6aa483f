// Copyright 2025
// SPDX-License-Identifier: Apache-2.0
//
// Rule configuration for the masking functions

use serde::{Deserialize, Serialize};

use super::error::MaskError;
use super::rules;

/// A masking policy plus its numeric parameters.
///
/// Deserializes from configuration such as:
///
/// ```json
/// { "rule": "mobile_number", "prefix_visible": 3, "suffix_visible": 4 }
/// ```
///
/// Covers every single-input policy; the two-argument family-name rule
/// ([`rules::mask_chinese_name_family`]) takes a surname/given-name pair
/// and is only available as a direct function call.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(tag = "rule", rename_all = "snake_case")]
pub enum MaskRule {
    ChineseName,
    Address {
        sensitive_size: usize,
    },
    MobileNumber {
        prefix_visible: usize,
        suffix_visible: usize,
    },
    Email,
    LeftIdNum {
        hide_digits: usize,
    },
    RightIdNum {
        hide_digits: usize,
    },
    MiddleIdNum {
        hide_digits: usize,
    },
    /// Everything masked; the conservative default.
    #[default]
    AllDigits,
}

impl MaskRule {
    /// Apply this rule to one input string.
    pub fn apply(&self, input: &str) -> Result<String, MaskError> {
        match *self {
            MaskRule::ChineseName => Ok(rules::mask_chinese_name(input)),
            MaskRule::Address { sensitive_size } => rules::mask_address(input, sensitive_size),
            MaskRule::MobileNumber {
                prefix_visible,
                suffix_visible,
            } => rules::mask_mobile_number(input, prefix_visible, suffix_visible),
            MaskRule::Email => Ok(rules::mask_email(input)),
            MaskRule::LeftIdNum { hide_digits } => rules::mask_left_id_num(input, hide_digits),
            MaskRule::RightIdNum { hide_digits } => rules::mask_right_id_num(input, hide_digits),
            MaskRule::MiddleIdNum { hide_digits } => rules::mask_middle_id_num(input, hide_digits),
            MaskRule::AllDigits => Ok(rules::mask_all_num_digit(input)),
        }
    }

    /// Rule name as it appears in configuration.
    pub fn as_str(&self) -> &'static str {
        match self {
            MaskRule::ChineseName => "chinese_name",
            MaskRule::Address { .. } => "address",
            MaskRule::MobileNumber { .. } => "mobile_number",
            MaskRule::Email => "email",
            MaskRule::LeftIdNum { .. } => "left_id_num",
            MaskRule::RightIdNum { .. } => "right_id_num",
            MaskRule::MiddleIdNum { .. } => "middle_id_num",
            MaskRule::AllDigits => "all_digits",
        }
    }
}
