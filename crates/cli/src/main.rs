use anyhow::Context;

use stockkeep_inventory::{FileStockLog, InventoryConfig, InventoryStore};

fn main() {
    stockkeep_observability::init();

    if let Err(err) = run() {
        tracing::error!("{err:#}");
        eprintln!("error: {err:#}");
        std::process::exit(1);
    }
}

fn run() -> anyhow::Result<()> {
    let config = InventoryConfig::from_env();
    tracing::info!(
        data_path = %config.data_path.display(),
        log_path = %config.log_path.display(),
        "starting stockkeep"
    );

    let log = FileStockLog::open(&config.log_path).context("failed to open stock log")?;
    let mut store = InventoryStore::new().with_log(log);

    store.add("apple", 10.0).context("failed to add apple")?;
    store.add("banana", 3.0).context("failed to add banana")?;
    store.remove("apple", 2.0).context("failed to remove apple")?;

    println!("Apple stock: {:?}", store.get_quantity("apple")?);
    println!(
        "Low items: {:?}",
        store.low_items(config.low_stock_threshold)
    );

    store
        .save(&config.data_path)
        .with_context(|| format!("failed to save {}", config.data_path.display()))?;
    store
        .load(&config.data_path)
        .with_context(|| format!("failed to load {}", config.data_path.display()))?;
    store.print_report();

    Ok(())
}
