use anyhow::Result;
use inv_config::{load_layered_yaml_from_strings, StoreSettings};
use inv_store::{InventoryStore, Product};

#[test]
fn configured_store_saves_and_loads_at_configured_path() -> Result<()> {
    let dir = tempfile::tempdir()?;
    let path = dir.path().join("inventory.csv");
    let yaml = format!(
        "store:\n  path: \"{}\"\nload:\n  max_reject_details: 1\n",
        path.display()
    );

    let loaded = load_layered_yaml_from_strings(&[&yaml])?;
    let settings = StoreSettings::from_config_json(&loaded.config_json)?;
    let store = InventoryStore::from_settings(&settings);

    assert_eq!(store.path(), path.as_path());
    assert_eq!(store.options().max_reject_details, 1);

    let inventory = vec![Product::new("widget", 2.5, 10)];
    assert!(store.save(&inventory).is_saved());
    assert_eq!(store.load().into_parts(), (inventory, 0));
    Ok(())
}

#[test]
fn configured_detail_cap_limits_rejected_rows() -> Result<()> {
    let dir = tempfile::tempdir()?;
    let path = dir.path().join("inventory.csv");
    std::fs::write(&path, "name,price,quantity\na,-1,1\nb,x,1\nc,1,y\n")?;

    let store = InventoryStore::new(&path).with_options(inv_store::LoadOptions {
        max_reject_details: 2,
    });

    let outcome = store.load();
    let report = outcome.report().expect("loaded");
    assert_eq!(report.rejected(), 3);
    assert_eq!(report.rejected_rows.len(), 2);
    assert_eq!(report.rejected_rows[0].raw, "a,-1,1");
    Ok(())
}

#[test]
fn absent_detail_cap_falls_back_to_store_default() -> Result<()> {
    let loaded = load_layered_yaml_from_strings(&["store:\n  path: inventory.csv\n"])?;
    let settings = StoreSettings::from_config_json(&loaded.config_json)?;
    assert_eq!(settings.max_reject_details, None);

    let store = InventoryStore::from_settings(&settings);
    assert_eq!(
        store.options().max_reject_details,
        inv_store::DEFAULT_MAX_REJECT_DETAILS
    );
    Ok(())
}
