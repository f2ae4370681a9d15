//! DMI type catalog
//!
//! Static bidirectional lookup between the SMBIOS numeric type codes 0-42
//! and their canonical category names, plus filtering of a parsed report
//! by type.

use crate::record::{ParsedReport, Record};

/// One catalog entry: numeric DMI type code and its category name
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DmiType {
    pub code: u8,
    pub name: &'static str,
}

/// All standard DMI types, in code order
pub const DMI_TYPES: &[DmiType] = &[
    DmiType { code: 0, name: "BIOS" },
    DmiType { code: 1, name: "System" },
    DmiType { code: 2, name: "Baseboard" },
    DmiType { code: 3, name: "Chassis" },
    DmiType { code: 4, name: "Processor" },
    DmiType { code: 5, name: "Memory Controller" },
    DmiType { code: 6, name: "Memory Module" },
    DmiType { code: 7, name: "Cache" },
    DmiType { code: 8, name: "Port Connector" },
    DmiType { code: 9, name: "System Slots" },
    DmiType { code: 10, name: "On Board Devices" },
    DmiType { code: 11, name: "OEM Strings" },
    DmiType { code: 12, name: "System Configuration Options" },
    DmiType { code: 13, name: "BIOS Language" },
    DmiType { code: 14, name: "Group Associations" },
    DmiType { code: 15, name: "System Event Log" },
    DmiType { code: 16, name: "Physical Memory Array" },
    DmiType { code: 17, name: "Memory Device" },
    DmiType { code: 18, name: "32-bit Memory Error" },
    DmiType { code: 19, name: "Memory Array Mapped Address" },
    DmiType { code: 20, name: "Memory Device Mapped Address" },
    DmiType { code: 21, name: "Built-in Pointing Device" },
    DmiType { code: 22, name: "Portable Battery" },
    DmiType { code: 23, name: "System Reset" },
    DmiType { code: 24, name: "Hardware Security" },
    DmiType { code: 25, name: "System Power Controls" },
    DmiType { code: 26, name: "Voltage Probe" },
    DmiType { code: 27, name: "Cooling Device" },
    DmiType { code: 28, name: "Temperature Probe" },
    DmiType { code: 29, name: "Electrical Current Probe" },
    DmiType { code: 30, name: "Out-of-band Remote Access" },
    DmiType { code: 31, name: "Boot Integrity Services" },
    DmiType { code: 32, name: "System Boot" },
    DmiType { code: 33, name: "64-bit Memory Error" },
    DmiType { code: 34, name: "Management Device" },
    DmiType { code: 35, name: "Management Device Component" },
    DmiType { code: 36, name: "Management Device Threshold Data" },
    DmiType { code: 37, name: "Memory Channel" },
    DmiType { code: 38, name: "IPMI Device" },
    DmiType { code: 39, name: "Power Supply" },
    DmiType { code: 40, name: "Additional Information" },
    DmiType { code: 41, name: "Onboard Devices Extended Information" },
    DmiType { code: 42, name: "Management Controller Host Interface" },
];

/// Get the category name for a type code
pub fn name_for_code(code: u8) -> Option<&'static str> {
    DMI_TYPES.iter().find(|t| t.code == code).map(|t| t.name)
}

/// Get the type code for a category name
pub fn code_for_name(name: &str) -> Option<u8> {
    DMI_TYPES.iter().find(|t| t.name == name).map(|t| t.code)
}

/// Type filter argument: a numeric code or a catalog name
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TypeSelector<'a> {
    Code(u8),
    Name(&'a str),
}

impl TypeSelector<'_> {
    /// Resolve to a numeric code via the catalog. Unknown names resolve to
    /// None.
    pub fn resolve(self) -> Option<u8> {
        match self {
            TypeSelector::Code(code) => Some(code),
            TypeSelector::Name(name) => code_for_name(name),
        }
    }
}

impl From<u8> for TypeSelector<'static> {
    fn from(code: u8) -> Self {
        TypeSelector::Code(code)
    }
}

impl<'a> From<&'a str> for TypeSelector<'a> {
    fn from(name: &'a str) -> Self {
        TypeSelector::Name(name)
    }
}

/// Return the records of one category, in report iteration order.
///
/// A selector naming an unknown category yields an empty vec rather than
/// an error.
pub fn filter_by_type<'a, 'r>(
    report: &'r ParsedReport,
    selector: impl Into<TypeSelector<'a>>,
) -> Vec<&'r Record> {
    let Some(code) = selector.into().resolve() else {
        return Vec::new();
    };
    report.values().filter(|r| r.dmi_type == code).collect()
}
