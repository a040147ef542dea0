use anyhow::Result;
use inv_store::{load_products, LoadOutcome, Product, RejectReason};

const HEADER: &str = "name,price,quantity";

fn load_text(text: &str) -> Result<LoadOutcome> {
    let dir = tempfile::tempdir()?;
    let path = dir.path().join("inventory.csv");
    std::fs::write(&path, text)?;
    Ok(load_products(&path))
}

#[test]
fn negative_price_is_rejected() -> Result<()> {
    let outcome = load_text(&format!("{HEADER}\nwidget,-5,10\n"))?;

    let report = outcome.report().expect("loaded");
    assert_eq!(report.rejects.negative_price, 1);
    assert_eq!(outcome.into_parts(), (Vec::new(), 1));
    Ok(())
}

#[test]
fn non_integer_quantity_is_rejected() -> Result<()> {
    let outcome = load_text(&format!("{HEADER}\nwidget,5,abc\n"))?;

    let report = outcome.report().expect("loaded");
    assert_eq!(report.rejects.bad_quantity, 1);
    assert_eq!(outcome.into_parts(), (Vec::new(), 1));
    Ok(())
}

#[test]
fn negative_quantity_is_rejected() -> Result<()> {
    let outcome = load_text(&format!("{HEADER}\nwidget,5,-3\n"))?;

    assert_eq!(outcome.report().expect("loaded").rejects.negative_quantity, 1);
    assert_eq!(outcome.into_parts(), (Vec::new(), 1));
    Ok(())
}

#[test]
fn mixed_rows_keep_valid_ones_in_file_order() -> Result<()> {
    let outcome = load_text(&format!(
        "{HEADER}\nwidget,2.5,10\nbroken,abc,1\ngadget,1,3\n"
    ))?;

    let report = outcome.report().expect("loaded");
    assert_eq!(report.rows_read, 3);
    assert_eq!(report.rejected_rows.len(), 1);
    assert_eq!(report.rejected_rows[0].line, 3);
    assert_eq!(report.rejected_rows[0].reason, RejectReason::BadPrice);

    let (products, rejected) = outcome.into_parts();
    assert_eq!(rejected, 1);
    assert_eq!(
        products,
        vec![Product::new("widget", 2.5, 10), Product::new("gadget", 1.0, 3)]
    );
    Ok(())
}

#[test]
fn every_reject_reason_is_counted_without_aborting() -> Result<()> {
    let outcome = load_text(&format!(
        "{HEADER}\nshort,1\nbadprice,x,1\nbadqty,1,1.5\nnegprice,-0.01,1\nnegqty,1,-1\nok,0,0\n"
    ))?;

    let report = outcome.report().expect("loaded");
    assert_eq!(report.rejects.missing_field, 1);
    assert_eq!(report.rejects.bad_price, 1);
    assert_eq!(report.rejects.bad_quantity, 1);
    assert_eq!(report.rejects.negative_price, 1);
    assert_eq!(report.rejects.negative_quantity, 1);
    assert_eq!(report.rejected(), 5);
    assert_eq!(report.products, vec![Product::new("ok", 0.0, 0)]);
    assert!(outcome.message().contains("rejected 5"));
    Ok(())
}

#[test]
fn duplicates_are_kept() -> Result<()> {
    let outcome = load_text(&format!("{HEADER}\nwidget,1,1\nwidget,1,1\n"))?;

    let (products, rejected) = outcome.into_parts();
    assert_eq!(products.len(), 2);
    assert_eq!(rejected, 0);
    Ok(())
}

#[test]
fn rejected_row_detail_keeps_quoted_name_intact() -> Result<()> {
    let outcome = load_text(&format!("{HEADER}\n\"bolt, 10mm\",x,1\n"))?;

    let report = outcome.report().expect("loaded");
    assert_eq!(report.rejected_rows.len(), 1);
    assert_eq!(report.rejected_rows[0].raw, "\"bolt, 10mm\",x,1");
    Ok(())
}
