use pretty_assertions::assert_eq;

use quern_sql::{Serializer, Statement};

fn serialize(stmt: &Statement) -> String {
    Serializer::new().serialize(stmt)
}

#[test]
fn show_databases_form() {
    assert_eq!(
        serialize(&Statement::show_databases()),
        "SHOW DATABASES FORMAT JSON"
    );
}

#[test]
fn describe_table_quotes_with_single_quotes() {
    assert_eq!(
        serialize(&Statement::describe_table("hits")),
        "DESCRIBE TABLE 'hits' FORMAT JSON"
    );
}

#[test]
fn list_tables_excludes_system_catalog_and_views() {
    assert_eq!(
        serialize(&Statement::list_tables()),
        "SELECT name FROM system.tables WHERE database != 'system' AND engine != 'View' FORMAT JSON"
    );
    assert_eq!(
        serialize(&Statement::list_views()),
        "SELECT name FROM system.tables WHERE database != 'system' AND engine = 'View' FORMAT JSON"
    );
}

#[test]
fn database_and_view_forms() {
    assert_eq!(
        serialize(&Statement::create_database("analytics")),
        "CREATE DATABASE analytics"
    );
    assert_eq!(
        serialize(&Statement::drop_database("analytics")),
        "DROP DATABASE analytics"
    );
    assert_eq!(
        serialize(&Statement::create_view("daily", "SELECT day, count() FROM hits GROUP BY day")),
        "CREATE VIEW daily AS SELECT day, count() FROM hits GROUP BY day"
    );
    assert_eq!(serialize(&Statement::drop_view("daily")), "DROP VIEW daily");
}

#[test]
fn drop_table_forms() {
    assert_eq!(serialize(&Statement::drop_table("hits")), "DROP TABLE hits");
    assert_eq!(
        serialize(&Statement::drop_table_if_exists("hits")),
        "DROP TABLE IF EXISTS hits"
    );
}

#[test]
fn unsupported_ddl_is_a_typed_refusal() {
    let cases = [
        (
            Statement::create_index("hits", "idx_day").unwrap_err(),
            "create-index",
        ),
        (
            Statement::drop_index("hits", "idx_day").unwrap_err(),
            "drop-index",
        ),
        (
            Statement::create_foreign_key("hits", "fk_user").unwrap_err(),
            "foreign-key",
        ),
        (
            Statement::create_unique_constraint("hits", "uq_day").unwrap_err(),
            "unique-constraint",
        ),
        (
            Statement::create_check_constraint("hits", "ck_day").unwrap_err(),
            "check-constraint",
        ),
        (
            Statement::rename_column("hits", "day", "event_day").unwrap_err(),
            "rename-column",
        ),
        (Statement::truncate_table("hits").unwrap_err(), "truncate"),
    ];

    for (err, operation) in cases {
        assert!(err.is_unsupported());
        assert_eq!(err.unsupported_operation(), Some(operation));
    }
}

#[test]
fn irregular_identifiers_are_quoted() {
    assert_eq!(
        serialize(&Statement::drop_table("weird name")),
        "DROP TABLE `weird name`"
    );
}
