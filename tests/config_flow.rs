mod common;

use pennywise_core::{budget_alerts, AlertSeverity, AlertThresholds, Config, ConfigManager};
use tempfile::TempDir;

use common::{at, march_budgets, march_statement};

#[test]
fn persisted_thresholds_drive_alerts() {
    let temp = TempDir::new().expect("create temp dir");
    let manager =
        ConfigManager::with_base_dir(temp.path().to_path_buf()).expect("config manager");

    let mut config = Config::default();
    config.alerts.thresholds = AlertThresholds::new(50.0, 70.0, 120.0).expect("thresholds");
    manager.save(&config).expect("save");

    let loaded = manager.load().expect("load");
    let alerts = budget_alerts(
        &loaded,
        &march_budgets(),
        &march_statement(),
        Some(at(2024, 3, 31)),
    )
    .expect("alerts");

    let bills = alerts.iter().find(|a| a.category == "bills").expect("bills");
    assert_eq!(bills.alert.severity, AlertSeverity::Danger);
    let food = alerts.iter().find(|a| a.category == "food").expect("food");
    assert_eq!(food.alert.severity, AlertSeverity::Danger);
}
