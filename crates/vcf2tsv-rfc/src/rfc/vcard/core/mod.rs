//! vCard core types.
//!
//! - [`VCard`] - Complete vCard representation
//! - [`VCardProperty`] - Individual property with parameters and value
//! - [`VCardParameter`] - Property parameters, including 2.1 singletons
//! - [`VCardValue`] - Property value variants
//! - [`TelCategory`] - Recognized telephone categories in priority order

mod category;
mod parameter;
mod property;
mod structured;
mod value;
mod vcard;

pub use category::TelCategory;
pub use parameter::VCardParameter;
pub(crate) use property::is_quoted_printable;
pub use property::{VCardProperty, names};
pub use structured::StructuredName;
pub use value::VCardValue;
pub use vcard::{Telephone, VCard, VCardVersion};
