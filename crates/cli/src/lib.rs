//! Driver for the product collection: load parallel arrays, build, report.

pub mod input;

use std::io::Write;

use anyhow::Context;
use serde::Serialize;
use stockroom_core::DomainError;
use stockroom_products::{Product, ProductCollection};

use crate::input::{CatalogInput, OutputFormat};

/// Build the collection from `input` and write the report to `out`.
///
/// An empty catalog is reported as [`DomainError::EmptyCollection`] before
/// anything is written, since the report needs both query results.
pub fn run<W: Write>(
    input: &CatalogInput,
    format: OutputFormat,
    out: &mut W,
) -> anyhow::Result<()> {
    let mut products = ProductCollection::build(&input.names, &input.inventories, &input.prices)
        .context("building product collection")?;
    tracing::info!(
        requested = input.names.len(),
        built = products.len(),
        "loaded products"
    );
    if products.is_empty() {
        return Err(DomainError::empty_collection().into());
    }

    match format {
        OutputFormat::Text => write_text_report(&mut products, out)?,
        OutputFormat::Json => write_json_report(&mut products, out)?,
    }
    out.flush()?;

    let released = products.destroy();
    tracing::info!(released, "released products");
    Ok(())
}

fn write_text_report<W: Write>(
    products: &mut ProductCollection,
    out: &mut W,
) -> anyhow::Result<()> {
    writeln!(out, "== Products ==")?;
    products.write_all(out)?;

    let max_price = products.max_price().ok_or_else(DomainError::empty_collection)?;
    writeln!(out, "== Highest price ==")?;
    writeln!(out, "{max_price}")?;

    let max_investment = products
        .max_investment()
        .ok_or_else(DomainError::empty_collection)?;
    writeln!(out, "== Highest investment ==")?;
    writeln!(out, "{max_investment}")?;

    products.sort_by_inventory();
    writeln!(out, "== Sorted by inventory ==")?;
    products.write_all(out)?;
    Ok(())
}

/// JSON form of the report. Maxima are taken before sorting, as in the text form.
#[derive(Debug, Serialize)]
struct JsonReport<'a> {
    highest_price: Product,
    highest_investment: Product,
    sorted_by_inventory: &'a ProductCollection,
}

fn write_json_report<W: Write>(
    products: &mut ProductCollection,
    out: &mut W,
) -> anyhow::Result<()> {
    let highest_price = products
        .max_price()
        .cloned()
        .ok_or_else(DomainError::empty_collection)?;
    let highest_investment = products
        .max_investment()
        .cloned()
        .ok_or_else(DomainError::empty_collection)?;
    products.sort_by_inventory();

    let report = JsonReport {
        highest_price,
        highest_investment,
        sorted_by_inventory: products,
    };
    serde_json::to_writer_pretty(&mut *out, &report).context("writing JSON report")?;
    writeln!(out)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn input(names: &[&str], inventories: &[i64], prices: &[f64]) -> CatalogInput {
        CatalogInput {
            names: names.iter().map(|n| n.to_string()).collect(),
            inventories: inventories.to_vec(),
            prices: prices.to_vec(),
        }
    }

    #[test]
    fn run_writes_full_report() {
        let input = input(&["A", "B", "C"], &[10, 2, 100], &[5.0, 9.5, 1.0]);
        let mut out = Vec::new();
        run(&input, OutputFormat::Text, &mut out).unwrap();

        let expected = "\
== Products ==
Product: A, Inventory: 10, Price: 5.00
Product: B, Inventory: 2, Price: 9.50
Product: C, Inventory: 100, Price: 1.00
== Highest price ==
Product: B, Inventory: 2, Price: 9.50
== Highest investment ==
Product: C, Inventory: 100, Price: 1.00
== Sorted by inventory ==
Product: B, Inventory: 2, Price: 9.50
Product: A, Inventory: 10, Price: 5.00
Product: C, Inventory: 100, Price: 1.00
";
        assert_eq!(String::from_utf8(out).unwrap(), expected);
    }

    #[test]
    fn run_rejects_empty_catalog() {
        let input = input(&[], &[], &[]);
        for format in [OutputFormat::Text, OutputFormat::Json] {
            let mut out = Vec::new();
            let err = run(&input, format, &mut out).unwrap_err();
            assert_eq!(
                err.downcast_ref::<DomainError>(),
                Some(&DomainError::EmptyCollection)
            );
            assert!(out.is_empty(), "nothing written for {format:?}");
        }
    }

    #[test]
    fn run_rejects_misaligned_catalog() {
        let input = input(&["A", "B"], &[1, 2], &[1.0]);
        let err = run(&input, OutputFormat::Text, &mut Vec::new()).unwrap_err();
        match err.downcast_ref::<DomainError>() {
            Some(DomainError::Validation(_)) => {}
            other => panic!("Expected Validation error, got {other:?}"),
        }
    }

    #[test]
    fn run_writes_json_report() {
        let input = input(&["A", "B", "C"], &[10, 2, 100], &[5.0, 9.5, 1.0]);
        let mut out = Vec::new();
        run(&input, OutputFormat::Json, &mut out).unwrap();

        let text = String::from_utf8(out).unwrap();
        assert!(text.starts_with("{\n  \"highest_price\": {"));
        assert!(text.ends_with("}\n"));

        let report: serde_json::Value = serde_json::from_str(&text).unwrap();
        assert_eq!(
            report,
            serde_json::json!({
                "highest_price": { "name": "B", "inventory": 2, "price": 9.5 },
                "highest_investment": { "name": "C", "inventory": 100, "price": 1.0 },
                "sorted_by_inventory": [
                    { "name": "B", "inventory": 2, "price": 9.5 },
                    { "name": "A", "inventory": 10, "price": 5.0 },
                    { "name": "C", "inventory": 100, "price": 1.0 },
                ],
            })
        );
    }

    #[test]
    fn run_on_sample_catalog_succeeds() {
        let mut out = Vec::new();
        run(&CatalogInput::sample(), OutputFormat::Text, &mut out).unwrap();
        let text = String::from_utf8(out).unwrap();
        assert!(text.starts_with("== Products ==\n"));
        assert!(text.contains("== Sorted by inventory ==\n"));
    }
}
