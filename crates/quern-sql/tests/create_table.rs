use pretty_assertions::assert_eq;

use quern_core::schema::{Column, DefaultExpr, Engine, Table, Type};
use quern_core::stmt::Value;
use quern_sql::{Serializer, Statement};

fn uint32() -> Type {
    Type::Integer {
        bits: 32,
        unsigned: true,
    }
}

fn serialize(stmt: &Statement) -> String {
    Serializer::new().serialize(stmt)
}

fn events_table(engine: Engine) -> Table {
    let mut table = Table::new("t", engine)
        .column(Column::new("id", uint32()))
        .column(Column::new("payload", Type::String));
    table.options.order_by = vec!["id".into()];
    table
}

#[test]
fn merge_table_synthesizes_event_date_column() {
    let table = events_table(Engine::ReplacingMergeTree);

    let stmt = Statement::create_table(&table).unwrap();
    assert_eq!(
        serialize(&stmt),
        "CREATE TABLE t (EventDate Date DEFAULT today(), id UInt32, payload String) \
         ENGINE = ReplacingMergeTree(EventDate, (id), 8192)"
    );
}

#[test]
fn explicit_granularity_changes_only_the_trailing_numeral() {
    let mut table = events_table(Engine::ReplacingMergeTree);
    table.options.index_granularity = Some(4096);

    let stmt = Statement::create_table(&table).unwrap();
    assert_eq!(
        serialize(&stmt),
        "CREATE TABLE t (EventDate Date DEFAULT today(), id UInt32, payload String) \
         ENGINE = ReplacingMergeTree(EventDate, (id), 4096)"
    );
}

#[test]
fn memory_engine_omits_merge_clause() {
    let table = Table::new("t", Engine::Memory)
        .column(Column::new("id", uint32()))
        .column(Column::new("payload", Type::String));

    let stmt = Statement::create_table(&table).unwrap();
    assert_eq!(
        serialize(&stmt),
        "CREATE TABLE t (id UInt32, payload String) ENGINE = Memory"
    );
}

#[test]
fn existing_date_column_is_adopted_in_place() {
    let mut table = Table::new("visits", Engine::MergeTree)
        .column(Column::new("id", uint32()))
        .column(Column::new("day", Type::Date));
    table.options.order_by = vec!["id".into()];

    let stmt = Statement::create_table(&table).unwrap();
    assert_eq!(
        serialize(&stmt),
        "CREATE TABLE visits (id UInt32, day Date) ENGINE = MergeTree(day, (id), 8192)"
    );
}

#[test]
fn ambiguous_date_columns_are_rejected() {
    let mut table = Table::new("t", Engine::MergeTree)
        .column(Column::new("created", Type::Date))
        .column(Column::new("updated", Type::Date))
        .column(Column::new("id", uint32()));
    table.options.order_by = vec!["id".into()];

    let err = Statement::create_table(&table).unwrap_err();
    assert!(err.is_configuration());
}

#[test]
fn explicit_partition_column_wins_over_ambiguity() {
    let mut table = Table::new("t", Engine::MergeTree)
        .column(Column::new("created", Type::Date))
        .column(Column::new("updated", Type::Date))
        .column(Column::new("id", uint32()));
    table.options.order_by = vec!["id".into()];
    table.options.event_date_column = Some("created".into());

    let stmt = Statement::create_table(&table).unwrap();
    assert_eq!(
        serialize(&stmt),
        "CREATE TABLE t (created Date, updated Date, id UInt32) \
         ENGINE = MergeTree(created, (id), 8192)"
    );
}

#[test]
fn explicit_partition_column_is_synthesized_when_missing() {
    let mut table = events_table(Engine::MergeTree);
    table.options.event_date_column = Some("Day".into());

    let stmt = Statement::create_table(&table).unwrap();
    assert_eq!(
        serialize(&stmt),
        "CREATE TABLE t (Day Date DEFAULT today(), id UInt32, payload String) \
         ENGINE = MergeTree(Day, (id), 8192)"
    );
}

#[test]
fn explicit_partition_column_must_be_a_date() {
    let mut table = events_table(Engine::MergeTree);
    table.options.event_date_column = Some("id".into());

    let err = Statement::create_table(&table).unwrap_err();
    assert!(err.is_configuration());
    assert!(err.to_string().contains("must be a Date"));
}

#[test]
fn merge_engine_requires_an_ordering_key() {
    let mut table = events_table(Engine::MergeTree);
    table.options.order_by.clear();

    let err = Statement::create_table(&table).unwrap_err();
    assert!(err.is_configuration());
}

#[test]
fn ordering_key_must_reference_existing_columns() {
    let mut table = events_table(Engine::MergeTree);
    table.options.order_by = vec!["missing".into()];

    let err = Statement::create_table(&table).unwrap_err();
    assert!(err.is_configuration());
}

#[test]
fn replacing_engine_appends_version_column() {
    let mut table = events_table(Engine::ReplacingMergeTree)
        .column(Column::new("version", Type::Integer {
            bits: 64,
            unsigned: true,
        }));
    table.options.version_column = Some("version".into());

    let stmt = Statement::create_table(&table).unwrap();
    assert_eq!(
        serialize(&stmt),
        "CREATE TABLE t (EventDate Date DEFAULT today(), id UInt32, payload String, version UInt64) \
         ENGINE = ReplacingMergeTree(EventDate, (id), 8192, version)"
    );
}

#[test]
fn version_column_of_disallowed_type_is_rejected() {
    let mut table = events_table(Engine::ReplacingMergeTree);
    table.options.version_column = Some("payload".into());

    let err = Statement::create_table(&table).unwrap_err();
    assert!(err.is_configuration());
    assert!(err.to_string().contains("version column"));
}

#[test]
fn version_column_on_other_engines_is_rejected() {
    let mut table = events_table(Engine::MergeTree);
    table.options.version_column = Some("id".into());

    let err = Statement::create_table(&table).unwrap_err();
    assert!(err.is_configuration());
}

#[test]
fn collapsing_engine_requires_a_signed_int8_sign_column() {
    let mut table = events_table(Engine::CollapsingMergeTree).column(Column::new(
        "sign",
        Type::Integer {
            bits: 8,
            unsigned: false,
        },
    ));
    table.options.sign_column = Some("sign".into());

    let stmt = Statement::create_table(&table).unwrap();
    assert_eq!(
        serialize(&stmt),
        "CREATE TABLE t (EventDate Date DEFAULT today(), id UInt32, payload String, sign Int8) \
         ENGINE = CollapsingMergeTree(EventDate, (id), 8192, sign)"
    );

    let mut missing = events_table(Engine::CollapsingMergeTree);
    missing.options.sign_column = None;
    assert!(Statement::create_table(&missing).unwrap_err().is_configuration());

    let mut mistyped = events_table(Engine::CollapsingMergeTree);
    mistyped.options.sign_column = Some("id".into());
    assert!(Statement::create_table(&mistyped).unwrap_err().is_configuration());
}

#[test]
fn nullable_column_is_rejected() {
    let mut column = Column::new("id", uint32());
    column.nullable = true;

    let mut table = Table::new("t", Engine::Memory);
    table.columns.push(column);

    let err = Statement::create_table(&table).unwrap_err();
    assert!(err.is_configuration());
    assert!(err.to_string().contains("nullable"));
}

#[test]
fn defaults_render_by_kind() {
    let table = Table::new("t", Engine::Memory)
        .column(Column::new("n", uint32()).with_default(DefaultExpr::Literal(Value::I64(7))))
        .column(
            Column::new("label", Type::String)
                .with_default(DefaultExpr::Literal(Value::String("none".into()))),
        )
        .column(Column::new("seen", Type::DateTime).with_default(DefaultExpr::Now));

    let stmt = Statement::create_table(&table).unwrap();
    assert_eq!(
        serialize(&stmt),
        "CREATE TABLE t (n UInt32 DEFAULT 7, label String DEFAULT `none`, \
         seen DateTime DEFAULT now()) ENGINE = Memory"
    );
}

#[test]
fn fixed_string_and_array_columns_render_structurally() {
    let table = Table::new("t", Engine::Memory)
        .column(Column::new("code", Type::FixedString(2)))
        .column(Column::new("tags", Type::Array(Box::new(Type::String))));

    let stmt = Statement::create_table(&table).unwrap();
    assert_eq!(
        serialize(&stmt),
        "CREATE TABLE t (code FixedString(2), tags Array(String)) ENGINE = Memory"
    );
}
