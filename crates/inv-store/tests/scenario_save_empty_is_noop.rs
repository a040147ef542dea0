use inv_store::{save_products, Product, SaveOutcome};

#[test]
fn saving_empty_inventory_writes_no_file() {
    let dir = tempfile::tempdir().expect("tempdir");
    let path = dir.path().join("inventory.csv");

    let outcome = save_products(&path, &[]);

    assert!(matches!(outcome, SaveOutcome::NothingToSave));
    assert!(outcome.error().is_none());
    assert!(!path.exists(), "no file may be created for an empty inventory");
}

#[test]
fn saving_empty_inventory_leaves_existing_file_untouched() {
    let dir = tempfile::tempdir().expect("tempdir");
    let path = dir.path().join("inventory.csv");

    let first = save_products(&path, &[Product::new("widget", 1.0, 1)]);
    assert!(first.is_saved());
    let before = std::fs::read_to_string(&path).expect("read");

    let second = save_products(&path, &[]);

    assert!(matches!(second, SaveOutcome::NothingToSave));
    assert_eq!(std::fs::read_to_string(&path).expect("read"), before);
}
