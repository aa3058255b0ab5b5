//! Mask kinds recognized by form field definitions.

use serde::{Deserialize, Serialize};
use std::fmt;

/// The formatting/normalization strategy applied to a single input.
///
/// Serializes with lowercase tags so form definitions coming from the
/// backend (`"mask": "whatsapp"`) deserialize directly.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MaskKind {
    /// Brazilian phone number, `(DD) DDDDD-DDDD`.
    Phone,
    /// WhatsApp number pinned behind country code 55, `+55 (DD) DDDDD-DDDD`.
    Whatsapp,
    /// Free-form email; no transformation.
    Email,
    /// No mask; raw and display are identical.
    #[default]
    None,
}

impl MaskKind {
    /// Whether this kind constrains the raw value to digits.
    #[must_use]
    pub fn is_numeric(self) -> bool {
        matches!(self, Self::Phone | Self::Whatsapp)
    }
}

impl fmt::Display for MaskKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Phone => "phone",
            Self::Whatsapp => "whatsapp",
            Self::Email => "email",
            Self::None => "none",
        };
        write!(f, "{name}")
    }
}
