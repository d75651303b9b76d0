//! CSV export and in-place category rewrites for exported files.

use std::path::Path;

use anyhow::{Context, Result, bail};
use csv::StringRecord;
use mallard_core::{Transaction, split_category_label};

const HEADER: [&str; 8] = [
    "Date",
    "Withdrawal/Deposit",
    "Transaction Type",
    "Details",
    "Amount",
    "Balance",
    "Category",
    "Subcategory",
];

/// Write transactions to a CSV file, one row per transaction in document
/// order.
pub fn write_csv(path: &Path, txns: &[Transaction]) -> Result<()> {
    let mut wtr =
        csv::Writer::from_path(path).with_context(|| format!("creating {}", path.display()))?;

    wtr.write_record(HEADER)?;
    for t in txns {
        wtr.write_record([
            t.date.to_string(),
            t.direction.as_str().to_string(),
            t.transaction_type.clone(),
            t.details.clone(),
            format!("{:.2}", t.amount),
            format!("{:.2}", t.balance),
            t.category.clone(),
            t.subcategory.clone(),
        ])?;
    }

    wtr.flush()?;
    Ok(())
}

/// Rewrite one data row's Category/Subcategory columns in a previously
/// exported CSV. `row` is 1-based and counts data rows, not the header.
///
/// The label may carry a `"Main -> Sub"` separator; the classifier is not
/// consulted.
pub fn set_row_category(path: &Path, row: usize, label: &str) -> Result<()> {
    let mut rdr =
        csv::Reader::from_path(path).with_context(|| format!("opening {}", path.display()))?;
    let headers = rdr.headers()?.clone();
    if headers.len() != HEADER.len() {
        bail!(
            "{} has {} columns, expected the {}-column export layout",
            path.display(),
            headers.len(),
            HEADER.len()
        );
    }

    let mut records = Vec::new();
    for record in rdr.records() {
        records.push(record?);
    }

    drop(rdr);

    if row == 0 || row > records.len() {
        bail!("row {} out of range (1..={})", row, records.len());
    }

    let (category, subcategory) = split_category_label(label);
    let mut fields: Vec<String> = records[row - 1].iter().map(str::to_string).collect();
    fields[HEADER.len() - 2] = category;
    fields[HEADER.len() - 1] = subcategory;
    records[row - 1] = StringRecord::from(fields);

    let mut wtr =
        csv::Writer::from_path(path).with_context(|| format!("rewriting {}", path.display()))?;
    wtr.write_record(&headers)?;
    for record in &records {
        wtr.write_record(record)?;
    }
    wtr.flush()?;
    Ok(())
}
