//! dmidecode report parsing
//!
//! A report is a sequence of handle entries separated by blank lines:
//!
//! ```text
//! Handle 0x0001, DMI type 0, 24 bytes
//! BIOS Information
//! 	Vendor: Acme Corp
//! 	Characteristics:
//! 		PCI is supported
//! 		BIOS is upgradeable
//! ```
//!
//! Line 0 carries the handle, type code, and size. Line 1 is the entry
//! name. Body lines are tab-indented `key: value` pairs; a bare `key:`
//! opens a sub-block whose double-tab-indented lines collect into an
//! ordered list. Entries with fewer than 3 lines are inactive and skipped,
//! as are entries whose first line is not a handle line.

use once_cell::sync::Lazy;
use regex::Regex;
use thiserror::Error;

use crate::record::{AttrValue, ParsedReport, Record};

static HANDLE_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^Handle\s+(.+),\s+DMI\s+type\s+(\d+),\s+(\d+)\s+bytes$")
        .expect("handle regex compiles")
});
static IN_BLOCK_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^\t\t(.+)$").expect("sub-block regex compiles"));
static KEY_VALUE_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^\t(.+):\s+(.+)$").expect("key-value regex compiles"));
static KEY_ONLY_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^\t(.+):$").expect("key-only regex compiles"));

#[derive(Error, Debug)]
pub enum ParseError {
    #[error("no DMI records found in report")]
    NoRecordsFound,
}

/// Body-line scanner state. At most one sub-block is open at a time.
enum BlockState {
    /// Not inside a sub-block
    Top,
    /// Inside the sub-block for `key`. `started` is false until the first
    /// continuation line lands; a sub-block that never gets one leaves no
    /// attribute behind.
    InBlock { key: String, started: bool },
}

/// Parse a raw report buffer. Invalid UTF-8 sequences are replaced rather
/// than rejected.
pub fn parse(buffer: &[u8]) -> Result<ParsedReport, ParseError> {
    parse_str(&String::from_utf8_lossy(buffer))
}

/// Parse an already-decoded report.
///
/// Each blank-line-delimited entry becomes one [`Record`] keyed by its
/// handle. Incomplete entries are skipped; duplicate handles overwrite
/// earlier ones. Fails only when the whole buffer yields zero records.
pub fn parse_str(report: &str) -> Result<ParsedReport, ParseError> {
    let mut records = ParsedReport::new();

    for chunk in report.split("\n\n") {
        if let Some(record) = parse_chunk(chunk) {
            records.insert(record.handle.clone(), record);
        }
    }

    if records.is_empty() {
        return Err(ParseError::NoRecordsFound);
    }
    Ok(records)
}

/// Parse one blank-line-delimited entry, or None if it is not a record.
fn parse_chunk(chunk: &str) -> Option<Record> {
    let lines: Vec<&str> = chunk.lines().collect();

    // Entries with less than 3 lines are incomplete / inactive
    if lines.len() < 3 {
        return None;
    }

    let caps = HANDLE_RE.captures(lines[0])?;
    let handle = caps[1].to_string();
    let dmi_type = caps[2].parse().ok()?;
    let size = caps[3].parse().ok()?;
    let name = lines[1].to_string();

    let mut record = Record {
        handle,
        dmi_type,
        size,
        name,
        attributes: Default::default(),
    };

    let mut state = BlockState::Top;
    for line in &lines[2..] {
        state = scan_body_line(line, state, &mut record);
    }

    Some(record)
}

/// Classify one body line and apply it to the record, returning the next
/// scanner state.
fn scan_body_line(line: &str, state: BlockState, record: &mut Record) -> BlockState {
    if let BlockState::InBlock { key, started } = state {
        if let Some(caps) = IN_BLOCK_RE.captures(line) {
            let item = caps[1].to_string();
            if started {
                if let Some(AttrValue::List(items)) = record.attributes.get_mut(&key) {
                    items.push(item);
                }
            } else {
                record
                    .attributes
                    .insert(key.clone(), AttrValue::List(vec![item]));
            }
            return BlockState::InBlock { key, started: true };
        }
        // The sub-block ended; re-classify this same line below.
    }

    if let Some(caps) = KEY_VALUE_RE.captures(line) {
        record
            .attributes
            .insert(caps[1].to_string(), AttrValue::Scalar(caps[2].to_string()));
        BlockState::Top
    } else if let Some(caps) = KEY_ONLY_RE.captures(line) {
        BlockState::InBlock {
            key: caps[1].to_string(),
            started: false,
        }
    } else {
        BlockState::Top
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const TWO_RECORDS: &str = "Handle 0x0001, DMI type 0, 24 bytes\n\
                               BIOS Information\n\
                               \tVendor: Acme Corp\n\
                               \tVersion: 1.0.0\n\
                               \n\
                               Handle 0x0002, DMI type 1, 27 bytes\n\
                               System Information\n\
                               \tManufacturer: Acme\n\
                               \tUUID:\n\
                               \t\tnot available\n";

    #[test]
    fn test_parse_two_records() {
        let report = parse_str(TWO_RECORDS).unwrap();
        assert_eq!(report.len(), 2);

        let bios = &report["0x0001"];
        assert_eq!(bios.dmi_type, 0);
        assert_eq!(bios.size, 24);
        assert_eq!(bios.name, "BIOS Information");
        assert_eq!(
            bios.attr("Vendor").and_then(AttrValue::as_scalar),
            Some("Acme Corp")
        );
        assert_eq!(
            bios.attr("Version").and_then(AttrValue::as_scalar),
            Some("1.0.0")
        );

        let system = &report["0x0002"];
        assert_eq!(system.dmi_type, 1);
        assert_eq!(
            system.attr("UUID").and_then(AttrValue::as_list),
            Some(&["not available".to_string()][..])
        );
    }

    #[test]
    fn test_parse_bytes_matches_parse_str() {
        let from_bytes = parse(TWO_RECORDS.as_bytes()).unwrap();
        let from_str = parse_str(TWO_RECORDS).unwrap();
        assert_eq!(from_bytes, from_str);
    }

    // Scalar lines are matched against the line currently being scanned.
    // They parse on their own, not only by falling out of a sub-block.
    #[test]
    fn test_scalar_attributes_parse_standalone() {
        let report = parse_str(
            "Handle 0x0010, DMI type 2, 8 bytes\n\
             Base Board Information\n\
             \tProduct Name: X11\n\
             \tSerial Number: 0123456789\n",
        )
        .unwrap();

        let board = &report["0x0010"];
        assert_eq!(board.attributes.len(), 2);
        assert_eq!(
            board.attr("Serial Number").and_then(AttrValue::as_scalar),
            Some("0123456789")
        );
    }

    #[test]
    fn test_sub_block_collects_in_order_then_closes() {
        let report = parse_str(
            "Handle 0x0000, DMI type 0, 26 bytes\n\
             BIOS Information\n\
             \tCharacteristics:\n\
             \t\tPCI is supported\n\
             \t\tBIOS is upgradeable\n\
             \t\tUEFI is supported\n\
             \tBIOS Revision: 5.17\n",
        )
        .unwrap();

        let bios = &report["0x0000"];
        assert_eq!(
            bios.attr("Characteristics").and_then(AttrValue::as_list),
            Some(
                &[
                    "PCI is supported".to_string(),
                    "BIOS is upgradeable".to_string(),
                    "UEFI is supported".to_string(),
                ][..]
            )
        );
        // The line that closed the block still parses as a scalar
        assert_eq!(
            bios.attr("BIOS Revision").and_then(AttrValue::as_scalar),
            Some("5.17")
        );
    }

    #[test]
    fn test_consecutive_sub_blocks() {
        let report = parse_str(
            "Handle 0x0009, DMI type 9, 17 bytes\n\
             System Slot Information\n\
             \tCharacteristics:\n\
             \t\t3.3 V is provided\n\
             \tBus Address:\n\
             \t\t0000:00:1c.0\n",
        )
        .unwrap();

        let slot = &report["0x0009"];
        assert_eq!(
            slot.attr("Characteristics").and_then(AttrValue::as_list),
            Some(&["3.3 V is provided".to_string()][..])
        );
        assert_eq!(
            slot.attr("Bus Address").and_then(AttrValue::as_list),
            Some(&["0000:00:1c.0".to_string()][..])
        );
    }

    #[test]
    fn test_empty_sub_block_leaves_no_attribute() {
        let report = parse_str(
            "Handle 0x0002, DMI type 1, 27 bytes\n\
             System Information\n\
             \tUUID:\n\
             \tFamily: Server\n",
        )
        .unwrap();

        let system = &report["0x0002"];
        assert_eq!(system.attr("UUID"), None);
        assert_eq!(
            system.attr("Family").and_then(AttrValue::as_scalar),
            Some("Server")
        );
    }

    #[test]
    fn test_short_chunks_are_skipped() {
        let report = parse_str(
            "Handle 0x0001, DMI type 126, 4 bytes\n\
             Inactive\n\
             \n\
             Handle 0x0002, DMI type 1, 27 bytes\n\
             System Information\n\
             \tManufacturer: Acme\n",
        )
        .unwrap();

        assert_eq!(report.len(), 1);
        assert!(report.contains_key("0x0002"));
    }

    #[test]
    fn test_non_handle_chunks_are_skipped() {
        let report = parse_str(
            "# dmidecode 3.5\n\
             Getting SMBIOS data from sysfs.\n\
             SMBIOS 3.3.0 present.\n\
             \n\
             Handle 0x0000, DMI type 0, 26 bytes\n\
             BIOS Information\n\
             \tVendor: Acme Corp\n",
        )
        .unwrap();

        assert_eq!(report.len(), 1);
        assert!(report.contains_key("0x0000"));
    }

    #[test]
    fn test_no_records_found() {
        assert!(matches!(parse_str(""), Err(ParseError::NoRecordsFound)));
        assert!(matches!(
            parse_str("# dmidecode 3.5\nScanning /dev/mem.\n"),
            Err(ParseError::NoRecordsFound)
        ));
    }

    // Open question: duplicate handles currently overwrite (last chunk
    // wins); treating them as an error may be preferable.
    #[test]
    fn test_duplicate_handles_overwrite() {
        let report = parse_str(
            "Handle 0x0001, DMI type 0, 24 bytes\n\
             BIOS Information\n\
             \tVendor: First\n\
             \n\
             Handle 0x0001, DMI type 0, 24 bytes\n\
             BIOS Information\n\
             \tVendor: Second\n",
        )
        .unwrap();

        assert_eq!(report.len(), 1);
        assert_eq!(
            report["0x0001"].attr("Vendor").and_then(AttrValue::as_scalar),
            Some("Second")
        );
    }

    #[test]
    fn test_parse_is_idempotent() {
        let first = parse_str(TWO_RECORDS).unwrap();
        let second = parse_str(TWO_RECORDS).unwrap();
        assert_eq!(first, second);
    }

    #[test]
    fn test_later_keys_overwrite_earlier() {
        let report = parse_str(
            "Handle 0x0004, DMI type 4, 48 bytes\n\
             Processor Information\n\
             \tStatus: Populated\n\
             \tStatus: Enabled\n",
        )
        .unwrap();

        assert_eq!(
            report["0x0004"].attr("Status").and_then(AttrValue::as_scalar),
            Some("Enabled")
        );
    }
}
