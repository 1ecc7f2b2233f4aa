use pretty_assertions::assert_eq;

use quern_core::schema::{Column, ColumnChange, DefaultExpr, RenamedColumn, TableDiff, Type};
use quern_core::stmt::Value;
use quern_sql::{Serializer, Statement};

fn serialize_all(statements: &[Statement]) -> Vec<String> {
    let serializer = Serializer::new();
    statements
        .iter()
        .map(|stmt| serializer.serialize(stmt))
        .collect()
}

#[test]
fn renders_one_statement_per_action() {
    let mut diff = TableDiff::new("events");
    diff.added.push(Column::new(
        "flags",
        Type::Integer {
            bits: 16,
            unsigned: true,
        },
    ));
    diff.changed.push(ColumnChange {
        column: Column::new("payload", Type::FixedString(64)),
        default_only: false,
    });
    diff.dropped.push("legacy".into());

    let statements = Statement::alter_table(&diff).unwrap();
    assert_eq!(
        serialize_all(&statements),
        vec![
            "ALTER TABLE events ADD COLUMN flags UInt16",
            "ALTER TABLE events MODIFY COLUMN payload FixedString(64)",
            "ALTER TABLE events DROP COLUMN legacy",
        ]
    );
}

#[test]
fn rename_is_rejected_before_rendering() {
    let mut diff = TableDiff::new("events");
    diff.renamed.push(RenamedColumn {
        from: "payload".into(),
        to: "body".into(),
    });
    diff.dropped.push("legacy".into());

    let err = Statement::alter_table(&diff).unwrap_err();
    assert!(err.is_unsupported());
    assert_eq!(err.unsupported_operation(), Some("rename-column"));
}

#[test]
fn default_only_change_on_string_column_is_inert() {
    let mut diff = TableDiff::new("events");
    diff.changed.push(ColumnChange {
        column: Column::new("payload", Type::String)
            .with_default(DefaultExpr::Literal(Value::String("n/a".into()))),
        default_only: true,
    });

    let statements = Statement::alter_table(&diff).unwrap();
    assert!(statements.is_empty());
}

#[test]
fn default_only_change_on_numeric_column_still_renders() {
    let mut diff = TableDiff::new("events");
    diff.changed.push(ColumnChange {
        column: Column::new(
            "retries",
            Type::Integer {
                bits: 32,
                unsigned: true,
            },
        )
        .with_default(DefaultExpr::Literal(Value::I64(3))),
        default_only: true,
    });

    let statements = Statement::alter_table(&diff).unwrap();
    assert_eq!(
        serialize_all(&statements),
        vec!["ALTER TABLE events MODIFY COLUMN retries UInt32 DEFAULT 3"]
    );
}

#[test]
fn empty_diff_renders_nothing() {
    let diff = TableDiff::new("events");
    assert!(Statement::alter_table(&diff).unwrap().is_empty());
}
