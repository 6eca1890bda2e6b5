//! HTML rendering for landing pages.
//!
//! All rendering uses [maud](https://maud.lambda.xyz/) for compile-time HTML
//! generation; dynamic values are escaped unless the content policy says
//! otherwise.

pub mod components;
pub mod content;
pub mod diagnostic;
pub mod page;

pub use page::PageMeta;
