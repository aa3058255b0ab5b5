//! A raw/display pair kept in lockstep.

use crate::{format, to_raw, MaskKind};

/// One field's value under a mask, with the invariant
/// `display == format(raw, kind)` restored after every commit.
///
/// This is the surface a form control drives: on each keystroke it hands
/// the full current input text to [`MaskedValue::set_display`], then renders
/// [`MaskedValue::display`] back into the control.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MaskedValue {
    kind: MaskKind,
    raw: String,
    display: String,
}

impl MaskedValue {
    /// Creates an empty value under the given mask.
    #[must_use]
    pub fn new(kind: MaskKind) -> Self {
        let raw = to_raw("", kind);
        let display = format(&raw, kind);
        Self { kind, raw, display }
    }

    /// Creates a value from a canonical raw string.
    #[must_use]
    pub fn from_raw(raw: &str, kind: MaskKind) -> Self {
        let mut value = Self::new(kind);
        value.set_raw(raw);
        value
    }

    /// Commits user-edited display text: normalizes it to raw form, then
    /// re-derives the display.
    pub fn set_display(&mut self, input: &str) {
        self.raw = to_raw(input, self.kind);
        self.display = format(&self.raw, self.kind);
    }

    /// Commits a raw value directly (e.g. loading a stored lead).
    pub fn set_raw(&mut self, raw: &str) {
        self.display = format(raw, self.kind);
        self.raw = to_raw(&self.display, self.kind);
    }

    /// The mask kind in effect.
    #[must_use]
    pub fn kind(&self) -> MaskKind {
        self.kind
    }

    /// Canonical value for business logic and persistence.
    #[must_use]
    pub fn raw(&self) -> &str {
        &self.raw
    }

    /// Formatted value for the input control.
    #[must_use]
    pub fn display(&self) -> &str {
        &self.display
    }

    /// Whether the raw value is empty (for a WhatsApp field, the bare
    /// country prefix counts as empty — the user has typed nothing).
    #[must_use]
    pub fn is_empty(&self) -> bool {
        match self.kind {
            MaskKind::Whatsapp => self.raw == "55",
            _ => self.raw.is_empty(),
        }
    }
}
