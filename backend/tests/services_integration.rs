//! End-to-end service tests over the SQLite backend: form input coerced to
//! records, business rules, referential blocking, view projection.
#![cfg(feature = "sqlite-repo")]

use std::sync::Arc;

use gympro::db::{RepositoryError, SqliteConfig, SqliteRepository};
use gympro::forms::{client_row, coerce, display_date, LabelIndex, RawForm};
use gympro::models::{EntityKind, Record};
use gympro::services::{GymService, ServiceError};
use tempfile::TempDir;

fn service() -> (GymService, TempDir) {
    let dir = TempDir::new().unwrap();
    let config = SqliteConfig::new(dir.path().join("gimnasio.db"));
    let repo = SqliteRepository::new(config).unwrap();
    (GymService::new(Arc::new(repo)), dir)
}

fn routine_form() -> RawForm {
    let mut form = RawForm::new();
    form.set("name", "Cardio").set("pdf_link", "x.pdf");
    form
}

fn instructor_form() -> RawForm {
    let mut form = RawForm::new();
    form.set("name", "Juan").set("last_name", "Pérez");
    form
}

fn client_form() -> RawForm {
    let mut form = RawForm::new();
    form.set("name", "Ana")
        .set("last_name", "Lopez")
        .set("routine_start_date", "01-01-2024")
        .set("routine_end_date", "01-06-2024")
        .set("instructor_id", "1")
        .set("routine_id", "1")
        .set("routine_cycle", "1");
    form
}

#[test]
fn test_full_submit_path_scenario() {
    let (service, _dir) = service();

    let juan = service
        .add(&coerce(EntityKind::Instructor, &instructor_form()).unwrap())
        .unwrap();
    assert_eq!(juan.id(), Some(1));
    let cardio = service
        .add(&coerce(EntityKind::Routine, &routine_form()).unwrap())
        .unwrap();
    assert_eq!(cardio.id(), Some(1));
    let ana = service
        .add(&coerce(EntityKind::Client, &client_form()).unwrap())
        .unwrap();
    assert_eq!(ana.id(), Some(1));

    // Delete Instructor(1) -> blocked by the client.
    let err = service.delete(&juan).unwrap_err();
    assert!(matches!(
        err,
        ServiceError::Repository(RepositoryError::ReferentialIntegrity { .. })
    ));

    // Delete Client(1) -> succeeds; then Instructor(1) succeeds.
    service.delete(&ana).unwrap();
    service.delete(&juan).unwrap();
}

#[test]
fn test_client_precheck_blocks_insert_before_any_write() {
    let (service, _dir) = service();
    service
        .add(&coerce(EntityKind::Routine, &routine_form()).unwrap())
        .unwrap();

    // instructor 1 does not exist
    let record = coerce(EntityKind::Client, &client_form()).unwrap();
    let err = service.add(&record).unwrap_err();
    assert!(matches!(
        err,
        ServiceError::Repository(RepositoryError::NotFound { .. })
    ));
    assert!(service.get_all(EntityKind::Client).unwrap().is_empty());
}

#[test]
fn test_inverted_date_range_is_a_business_rule_error() {
    let (service, _dir) = service();
    service
        .add(&coerce(EntityKind::Instructor, &instructor_form()).unwrap())
        .unwrap();
    service
        .add(&coerce(EntityKind::Routine, &routine_form()).unwrap())
        .unwrap();

    let mut form = client_form();
    form.set("routine_start_date", "01-06-2024")
        .set("routine_end_date", "01-01-2024");
    let err = service
        .add(&coerce(EntityKind::Client, &form).unwrap())
        .unwrap_err();
    assert!(matches!(err, ServiceError::BusinessRule(_)));
    assert!(service.get_all(EntityKind::Client).unwrap().is_empty());
}

#[test]
fn test_stored_date_renders_back_as_entered() {
    let (service, _dir) = service();
    service
        .add(&coerce(EntityKind::Instructor, &instructor_form()).unwrap())
        .unwrap();
    service
        .add(&coerce(EntityKind::Routine, &routine_form()).unwrap())
        .unwrap();
    service
        .add(&coerce(EntityKind::Client, &client_form()).unwrap())
        .unwrap();

    let loaded = service.get_by_id(EntityKind::Client, 1).unwrap();
    let Record::Client(client) = loaded else {
        panic!("expected a client record");
    };
    assert_eq!(display_date(client.routine_start_date), "01-01-2024");
    assert_eq!(display_date(client.routine_end_date), "01-06-2024");
}

#[test]
fn test_table_view_projection_from_store() {
    let (service, _dir) = service();
    service
        .add(&coerce(EntityKind::Instructor, &instructor_form()).unwrap())
        .unwrap();
    service
        .add(&coerce(EntityKind::Routine, &routine_form()).unwrap())
        .unwrap();
    service
        .add(&coerce(EntityKind::Client, &client_form()).unwrap())
        .unwrap();

    let labels = LabelIndex::new(
        &service.get_all(EntityKind::Instructor).unwrap(),
        &service.get_all(EntityKind::Routine).unwrap(),
    );
    let clients = service.get_all(EntityKind::Client).unwrap();
    let Record::Client(ref client) = clients[0] else {
        panic!("expected a client record");
    };
    let row = client_row(client, &labels);
    assert_eq!(row.full_name, "Ana Lopez");
    assert_eq!(row.routine, "Cardio");
    assert_eq!(row.dates, "01-01-2024 - 01-06-2024");
}

#[test]
fn test_columns_drive_form_and_submission() {
    let (service, _dir) = service();
    // The adapter asks for columns by canonical name before building the form.
    let columns = service.columns_for("client").unwrap();
    let form = client_form();
    for column in columns {
        assert!(form.get(column.name).is_some(), "{} missing", column.name);
    }
}
