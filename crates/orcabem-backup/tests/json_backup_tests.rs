use chrono::{NaiveDate, TimeZone, Utc};
use orcabem_backup::{
    export_to_path, import_from_path, list_backups, BackupDocument, SnapshotStore,
    BACKUP_FORMAT_VERSION,
};
use orcabem_core::{CoreError, Ledger};
use orcabem_domain::{Goal, Settings, Theme, Transaction, TransactionKind};
use std::fs;
use tempfile::tempdir;

fn sample_state() -> (Ledger, Vec<Goal>, Settings) {
    let ledger = Ledger::with_transactions(vec![
        Transaction::new(
            "Compra no supermercado",
            250.0,
            TransactionKind::Expense,
            "alimentação",
            NaiveDate::from_ymd_opt(2024, 1, 2).unwrap(),
        ),
        Transaction::new(
            "Salário mensal",
            5500.0,
            TransactionKind::Income,
            "salário",
            NaiveDate::from_ymd_opt(2024, 1, 1).unwrap(),
        ),
    ]);
    let mut goal = Goal::new("Viagem de férias", 5000.0, "lazer");
    goal.current_amount = 1500.0;
    (ledger, vec![goal], Settings::default())
}

#[test]
fn export_and_import_roundtrip_preserves_the_document() {
    let dir = tempdir().expect("tempdir");
    let (ledger, goals, settings) = sample_state();
    let exported_at = Utc.with_ymd_and_hms(2024, 1, 31, 12, 0, 0).unwrap();
    let document = BackupDocument::capture(&ledger, &goals, &settings, exported_at);

    let path = export_to_path(&document, dir.path(), "Backup Janeiro 2024").expect("export");
    assert_eq!(
        path.file_name().and_then(|name| name.to_str()),
        Some("Backup_Janeiro_2024_2024-01-31.json")
    );

    let raw = fs::read_to_string(&path).expect("read backup file");
    assert!(raw.contains("\"exportDate\""));
    assert!(raw.contains("\"currentAmount\""));
    assert!(raw.contains(&format!("\"version\": \"{}\"", BACKUP_FORMAT_VERSION)));

    let imported = import_from_path(&path).expect("import");
    assert_eq!(imported, document);
}

#[test]
fn export_rejects_blank_backup_names() {
    let dir = tempdir().expect("tempdir");
    let (ledger, goals, settings) = sample_state();
    let document = BackupDocument::capture(&ledger, &goals, &settings, Utc::now());

    let result = export_to_path(&document, dir.path(), "   ");
    assert!(matches!(result, Err(CoreError::Validation(_))));
}

#[test]
fn import_missing_a_section_leaves_the_ledger_untouched() {
    let (mut ledger, mut goals, mut settings) = sample_state();
    let before = ledger.len();

    let payload = r#"{"transactions": [], "goals": []}"#;
    let result = BackupDocument::from_json(payload);
    match result {
        Err(CoreError::MissingSection(section)) => assert_eq!(section, "settings"),
        other => panic!("expected missing-section failure, got {other:?}"),
    }

    // Nothing to apply, so the live state keeps its shape.
    assert_eq!(ledger.len(), before);

    let full = r#"{
        "transactions": [],
        "goals": [],
        "settings": {"currency": "BRL", "theme": "dark", "notifications": false},
        "exportDate": "2024-01-31T12:00:00Z",
        "version": "1.0.0"
    }"#;
    let document = BackupDocument::from_json(full).expect("parse full document");
    document.apply(&mut ledger, &mut goals, &mut settings);

    assert!(ledger.is_empty());
    assert!(goals.is_empty());
    assert_eq!(settings.theme, Theme::Dark);
    assert!(!settings.notifications);
}

#[test]
fn import_rejects_unparseable_json() {
    let result = BackupDocument::from_json("{not json");
    assert!(matches!(result, Err(CoreError::Serde(_))));
}

#[test]
fn applying_a_document_replaces_transactions_in_order() {
    let (ledger, goals, settings) = sample_state();
    let document = BackupDocument::capture(&ledger, &goals, &settings, Utc::now());

    let mut restored_ledger = Ledger::new();
    let mut restored_goals = Vec::new();
    let mut restored_settings = Settings::default();
    document.apply(&mut restored_ledger, &mut restored_goals, &mut restored_settings);

    assert_eq!(restored_ledger.len(), 2);
    assert_eq!(restored_ledger.recent(1)[0].description, "Compra no supermercado");
    assert_eq!(restored_ledger.total_income(), 5500.0);
    assert_eq!(restored_goals.len(), 1);
}

#[test]
fn snapshot_store_round_trips_and_clears() {
    let dir = tempdir().expect("tempdir");
    let store = SnapshotStore::new(dir.path().join("data")).expect("create store");

    let missing = store.load();
    assert!(matches!(missing, Err(CoreError::Storage(_))));
    assert!(store.last_saved_at().is_none());

    let (ledger, goals, settings) = sample_state();
    let exported_at = Utc.with_ymd_and_hms(2024, 1, 31, 18, 30, 0).unwrap();
    let document = BackupDocument::capture(&ledger, &goals, &settings, exported_at);
    store.save(&document).expect("save snapshot");

    let loaded = store.load().expect("load snapshot");
    assert_eq!(loaded.transactions.len(), 2);
    assert_eq!(store.last_saved_at(), Some(exported_at));

    store.clear().expect("clear snapshot");
    assert!(store.load().is_err());
    // Clearing an already-empty slot is fine.
    store.clear().expect("clear again");
}

#[test]
fn list_backups_returns_newest_first() {
    let dir = tempdir().expect("tempdir");
    let (ledger, goals, settings) = sample_state();

    let exports = [
        ("Backup Dezembro 2023", 2023, 12, 31),
        ("Backup Janeiro 2024", 2024, 1, 30),
    ];
    for (name, year, month, day) in exports {
        let stamp = Utc.with_ymd_and_hms(year, month, day, 9, 0, 0).unwrap();
        let document = BackupDocument::capture(&ledger, &goals, &settings, stamp);
        export_to_path(&document, dir.path(), name).expect("export");
    }
    fs::write(dir.path().join("notes.txt"), "ignored").expect("write decoy");

    let backups = list_backups(dir.path()).expect("list backups");
    assert_eq!(backups.len(), 2);
    assert_eq!(backups[0].name, "Backup_Janeiro_2024_2024-01-30.json");
    assert_eq!(
        backups[0].created_at,
        NaiveDate::from_ymd_opt(2024, 1, 30)
    );
    assert!(backups[0].size_bytes > 0);
    assert_eq!(backups[1].name, "Backup_Dezembro_2023_2023-12-31.json");
}

#[test]
fn list_backups_on_a_missing_directory_is_empty() {
    let dir = tempdir().expect("tempdir");
    let backups = list_backups(&dir.path().join("nowhere")).expect("list");
    assert!(backups.is_empty());
}
