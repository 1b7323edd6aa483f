// Copyright 2025
// SPDX-License-Identifier: Apache-2.0
//
// The masking rules themselves
//
// Positions count characters, never bytes, so multi-byte input (Chinese
// names, addresses) masks per glyph. Fixed-length rules return output
// with exactly the input's character count; the email rule is the one
// exception (local part collapses to six asterisks).

use super::error::MaskError;

/// Blank per the original contract: empty or whitespace-only.
fn is_blank(s: &str) -> bool {
    s.trim().is_empty()
}

/// [Chinese name] Keep the first character, mask the rest.
///
/// `"李雷"` becomes `"李*"`; a single-character name is returned as-is.
pub fn mask_chinese_name(full_name: &str) -> String {
    if is_blank(full_name) {
        return String::new();
    }

    let len = full_name.chars().count();
    let mut out: String = full_name.chars().take(1).collect();
    out.push_str(&"*".repeat(len - 1));
    out
}

/// [Chinese name] Keep the family name, mask the given name.
///
/// `("欧阳", "娜娜")` becomes `"欧阳****"`. A single-character family
/// name falls back to [`mask_chinese_name`] over the full name, so only
/// the very first character stays visible.
pub fn mask_chinese_name_family(family_name: &str, given_name: &str) -> String {
    if is_blank(family_name) || is_blank(given_name) {
        return String::new();
    }

    if family_name.chars().count() > 1 {
        let mut out = family_name.to_string();
        out.push_str(&"*".repeat(given_name.chars().count()));
        return out;
    }
    mask_chinese_name(&format!("{family_name}{given_name}"))
}

/// [Address] Mask the trailing `sensitive_size` characters.
///
/// The leading `len - sensitive_size` characters stay visible;
/// `sensitive_size` larger than the address is an error.
pub fn mask_address(address: &str, sensitive_size: usize) -> Result<String, MaskError> {
    if is_blank(address) {
        return Ok(String::new());
    }

    let len = address.chars().count();
    let visible = len
        .checked_sub(sensitive_size)
        .ok_or(MaskError::InvalidArgument {
            span: sensitive_size,
            length: len,
        })?;

    let mut out: String = address.chars().take(visible).collect();
    out.push_str(&"*".repeat(sensitive_size));
    Ok(out)
}

/// [Phone] Keep `prefix_visible` leading and `suffix_visible` trailing
/// characters, mask everything in between.
///
/// `("17611116506", 3, 4)` becomes `"176****6506"`. The legacy
/// construction padded the suffix and stripped a literal `"***"` from the
/// front, which only preserves length for a 3-character prefix; the
/// masked middle is computed directly here so any prefix width works.
pub fn mask_mobile_number(
    num: &str,
    prefix_visible: usize,
    suffix_visible: usize,
) -> Result<String, MaskError> {
    if is_blank(num) {
        return Ok(String::new());
    }

    let len = num.chars().count();
    let middle = len
        .checked_sub(prefix_visible)
        .and_then(|rest| rest.checked_sub(suffix_visible))
        .ok_or(MaskError::InvalidArgument {
            span: prefix_visible + suffix_visible,
            length: len,
        })?;

    let mut out: String = num.chars().take(prefix_visible).collect();
    out.push_str(&"*".repeat(middle));
    out.extend(num.chars().skip(len - suffix_visible));
    Ok(out)
}

/// [Email] Replace the local part with exactly six asterisks.
///
/// `"ab@163.com"` becomes `"******@163.com"`. Input without an `@`, or
/// with a local part of 0 or 1 characters, is returned unchanged.
pub fn mask_email(email: &str) -> String {
    if is_blank(email) {
        return String::new();
    }

    match email.char_indices().enumerate().find(|&(_, (_, c))| c == '@') {
        Some((pos, (byte, _))) if pos > 1 => format!("******{}", &email[byte..]),
        _ => email.to_string(),
    }
}

/// [Card/ID] Mask the first `hide_digits` characters, keep the rest.
pub fn mask_left_id_num(card_num: &str, hide_digits: usize) -> Result<String, MaskError> {
    if is_blank(card_num) {
        return Ok(String::new());
    }

    let len = card_num.chars().count();
    len.checked_sub(hide_digits)
        .ok_or(MaskError::InvalidArgument {
            span: hide_digits,
            length: len,
        })?;

    let mut out = "*".repeat(hide_digits);
    out.extend(card_num.chars().skip(hide_digits));
    Ok(out)
}

/// [Card/ID] Keep the first `len - hide_digits` characters, mask the rest.
pub fn mask_right_id_num(card_num: &str, hide_digits: usize) -> Result<String, MaskError> {
    if is_blank(card_num) {
        return Ok(String::new());
    }

    let len = card_num.chars().count();
    let visible = len
        .checked_sub(hide_digits)
        .ok_or(MaskError::InvalidArgument {
            span: hide_digits,
            length: len,
        })?;

    let mut out: String = card_num.chars().take(visible).collect();
    out.push_str(&"*".repeat(hide_digits));
    Ok(out)
}

/// [Card/ID] Mask a centered run of `hide_digits` characters.
///
/// The split favors the prefix: `prefix = (len - hide_digits) >> 1`,
/// bumped by one when `hide_digits` is even. `"6222600123456789"` with 6
/// hidden becomes `"622260******6789"`. The asymmetry is load-bearing
/// for output parity with existing consumers.
pub fn mask_middle_id_num(card_num: &str, hide_digits: usize) -> Result<String, MaskError> {
    if is_blank(card_num) {
        return Ok(String::new());
    }

    let len = card_num.chars().count();
    let invalid = MaskError::InvalidArgument {
        span: hide_digits,
        length: len,
    };

    let mut prefix = len.checked_sub(hide_digits).ok_or(invalid)? >> 1;
    if hide_digits % 2 == 0 {
        prefix += 1;
    }
    let suffix_segment = len - prefix;
    let visible_suffix = suffix_segment.checked_sub(hide_digits).ok_or(invalid)?;

    let mut out: String = card_num.chars().take(prefix).collect();
    out.push_str(&"*".repeat(hide_digits));
    out.extend(card_num.chars().skip(len - visible_suffix));
    Ok(out)
}

/// [Card/ID] Mask every character, one asterisk per character.
pub fn mask_all_num_digit(card_num: &str) -> String {
    if is_blank(card_num) {
        return String::new();
    }

    "*".repeat(card_num.chars().count())
}
