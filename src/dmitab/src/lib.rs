//! # dmitab
//!
//! Hardware inventory library built on dmidecode output.
//!
//! This library provides functionality to:
//! - Parse the free-text report dmidecode prints into structured records
//! - Look up SMBIOS/DMI type codes and category names
//! - Filter a parsed report by category
//! - Locate and run the dmidecode binary, optionally through sudo
//!
//! ## Example
//!
//! ```no_run
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let raw = dmitab::tool::run(true)?;
//! let report = dmitab::parse(&raw)?;
//!
//! for bios in dmitab::filter_by_type(&report, "BIOS") {
//!     println!("{}: {:?}", bios.handle, bios.attributes);
//! }
//! # Ok(())
//! # }
//! ```

pub mod catalog;
pub mod parse;
pub mod record;
pub mod tool;

// Re-export commonly used items
#[doc(inline)]
pub use catalog::{code_for_name, filter_by_type, name_for_code, DmiType, TypeSelector, DMI_TYPES};
#[doc(inline)]
pub use parse::{parse, parse_str, ParseError};
#[doc(inline)]
pub use record::{AttrValue, ParsedReport, Record};
#[doc(inline)]
pub use tool::ToolError;
