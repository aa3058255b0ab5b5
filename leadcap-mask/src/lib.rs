//! Input masking for phone-like form fields.
//!
//! Every field carries two co-dependent representations of one logical
//! value: the *raw* value (digits the business logic needs) and the
//! *display* value (what the user sees and edits). The transforms between
//! them are pure, stateless and total — malformed input never fails, it is
//! normalized.
//!
//! # Transforms
//!
//! - **Phone**: Brazilian landline/mobile grouping, `(DD) DDDDD-DDDD`,
//!   built up progressively as digits accumulate.
//! - **Whatsapp**: like Phone but pinned behind the `55` country code,
//!   `+55 (DD) DDDDD-DDDD`; the prefix is never user-removable.
//! - **Email** / **None**: identity — raw and display coincide.
//!
//! # Example
//!
//! ```
//! use leadcap_mask::{format, to_raw, MaskKind};
//!
//! let display = format("11999998888", MaskKind::Phone);
//! assert_eq!(display, "(11) 99999-8888");
//! assert_eq!(to_raw(&display, MaskKind::Phone), "11999998888");
//! ```

mod format;
mod kind;
mod value;

pub use format::{format, to_raw};
pub use kind::MaskKind;
pub use value::MaskedValue;
