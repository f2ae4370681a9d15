//! Parse a report and print its records

use std::fs;
use std::path::Path;

use anyhow::{Context, Result};
use dmitab::{filter_by_type, name_for_code, AttrValue, Record, TypeSelector};

pub fn handle(
    input: Option<&Path>,
    sudo: bool,
    type_selector: Option<&str>,
    json: bool,
) -> Result<()> {
    let raw = match input {
        Some(path) => fs::read(path)
            .with_context(|| format!("failed to read report from {}", path.display()))?,
        None => dmitab::tool::run(sudo).context("failed to capture a dmidecode report")?,
    };

    let report = dmitab::parse(&raw)?;

    let records: Vec<&Record> = match type_selector {
        Some(selector) => filter_by_type(&report, parse_selector(selector)),
        None => report.values().collect(),
    };

    if json {
        println!("{}", serde_json::to_string_pretty(&records)?);
        return Ok(());
    }

    if records.is_empty() {
        if let Some(selector) = type_selector {
            eprintln!("No records for type {selector}");
        }
        return Ok(());
    }

    for record in records {
        print_record(record);
    }
    Ok(())
}

/// A selector argument is a numeric code if it parses as one, otherwise a
/// catalog name.
fn parse_selector(selector: &str) -> TypeSelector<'_> {
    match selector.parse::<u8>() {
        Ok(code) => TypeSelector::Code(code),
        Err(_) => TypeSelector::Name(selector),
    }
}

fn print_record(record: &Record) {
    let category = name_for_code(record.dmi_type).unwrap_or("Unknown");
    println!(
        "Handle {}: {} [{}, type {}, {} bytes]",
        record.handle, record.name, category, record.dmi_type, record.size
    );

    for (key, value) in &record.attributes {
        match value {
            AttrValue::Scalar(s) => println!("    {key}: {s}"),
            AttrValue::List(items) => {
                println!("    {key}:");
                for item in items {
                    println!("        {item}");
                }
            }
        }
    }
    println!();
}
