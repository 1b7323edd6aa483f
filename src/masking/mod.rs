// Copyright 2025
// SPDX-License-Identifier: Apache-2.0
//
// PII masking - deterministic partial redaction of sensitive strings
//
// Every function here is pure and side-effect-free:
// - blank input (empty or whitespace-only) always yields ""
// - positions count characters, never bytes
// - fixed-length policies preserve the input's character length exactly

pub mod config;
pub mod error;
pub mod rules;

pub use rules::{
    mask_address, mask_all_num_digit, mask_chinese_name, mask_chinese_name_family, mask_email,
    mask_left_id_num, mask_middle_id_num, mask_mobile_number, mask_right_id_num,
};
