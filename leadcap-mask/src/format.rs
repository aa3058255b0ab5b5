//! The pure masking transforms.
//!
//! `format` derives the display value from a raw value; `to_raw` recovers
//! the canonical value from whatever is currently in the input control.
//! Both are applied on every keystroke, so both must accept arbitrary
//! partial input and must compose idempotently:
//! `format(to_raw(format(x, k), k), k) == format(x, k)`.

use crate::MaskKind;

/// Maximum digits in a Brazilian phone number (DD + 9-digit local).
const PHONE_MAX_DIGITS: usize = 11;

/// Maximum digits in a WhatsApp number (country code + phone).
const WHATSAPP_MAX_DIGITS: usize = 13;

const COUNTRY_PREFIX: &str = "55";

/// Below this many display characters, a WhatsApp field snaps back to the
/// bare country prefix rather than letting the user delete into it.
const WHATSAPP_MIN_DISPLAY_LEN: usize = 4;

/// Formats a raw value for display under the given mask kind.
#[must_use]
pub fn format(raw: &str, kind: MaskKind) -> String {
    match kind {
        MaskKind::Phone => format_phone(&digits(raw, PHONE_MAX_DIGITS)),
        MaskKind::Whatsapp => {
            let canon = canonical_whatsapp_digits(raw);
            format_whatsapp(&canon)
        }
        MaskKind::Email | MaskKind::None => raw.to_string(),
    }
}

/// Recovers the canonical raw value from a display string.
#[must_use]
pub fn to_raw(display: &str, kind: MaskKind) -> String {
    match kind {
        MaskKind::Phone => digits(display, PHONE_MAX_DIGITS),
        MaskKind::Whatsapp => {
            // Deleting into the prefix snaps back to the bare country code.
            if display.chars().count() < WHATSAPP_MIN_DISPLAY_LEN {
                return COUNTRY_PREFIX.to_string();
            }
            canonical_whatsapp_digits(display)
        }
        MaskKind::Email | MaskKind::None => display.to_string(),
    }
}

/// Extracts up to `max` ASCII digits from arbitrary input.
fn digits(input: &str, max: usize) -> String {
    input.chars().filter(char::is_ascii_digit).take(max).collect()
}

/// Digit string guaranteed to start with the country prefix, capped at the
/// WhatsApp maximum.
fn canonical_whatsapp_digits(input: &str) -> String {
    let d = digits(input, WHATSAPP_MAX_DIGITS);
    if d.starts_with(COUNTRY_PREFIX) {
        d
    } else {
        let mut canon = String::from(COUNTRY_PREFIX);
        canon.push_str(&d);
        canon.truncate(WHATSAPP_MAX_DIGITS);
        canon
    }
}

/// Progressive grouping for a local phone number: `(DD) DDDDD-DDDD`.
fn format_phone(d: &str) -> String {
    match d.len() {
        0 => String::new(),
        1..=2 => format!("({d}"),
        3..=7 => format!("({}) {}", &d[..2], &d[2..]),
        _ => format!("({}) {}-{}", &d[..2], &d[2..7], &d[7..]),
    }
}

/// Grouping for a WhatsApp number: the phone grouping offset by the
/// country prefix, `+55 (DD) DDDDD-DDDD`.
fn format_whatsapp(canon: &str) -> String {
    let local = &canon[COUNTRY_PREFIX.len()..];
    if local.is_empty() {
        return format!("+{COUNTRY_PREFIX}");
    }
    format!("+{COUNTRY_PREFIX} {}", format_phone(local))
}
