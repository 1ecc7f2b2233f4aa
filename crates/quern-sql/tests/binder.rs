use pretty_assertions::assert_eq;

use quern_core::schema::BindKind;
use quern_core::stmt::Value;
use quern_sql::Binder;

#[test]
fn positional_binding_substitutes_in_bind_order() {
    let mut binder = Binder::new("INSERT INTO t (id, payload) VALUES (?, ?)");

    binder.bind(1, 7i64).unwrap();
    binder.bind(2, "v?7").unwrap();
    assert_eq!(
        binder.render(),
        "INSERT INTO t (id, payload) VALUES (7, `v?7`)"
    );

    // Re-binding restarts from the stored template.
    binder.bind(1, 8i64).unwrap();
    binder.bind(2, "v8").unwrap();
    assert_eq!(binder.render(), "INSERT INTO t (id, payload) VALUES (8, `v8`)");
}

#[test]
fn substituted_text_is_scanned_by_later_bindings() {
    // The documented sharp edge: a bound string containing a literal `?` is
    // fair game for the next binding's first-occurrence scan when it was
    // substituted first.
    let mut binder = Binder::new("VALUES (?, ?)");

    binder.bind(2, "v?7").unwrap();
    binder.bind(1, 8i64).unwrap();
    assert_eq!(binder.render(), "VALUES (`v87`, ?)");
}

#[test]
fn named_binding_and_inert_keys() {
    let mut binder = Binder::new("SELECT * FROM hits WHERE day = :day");

    binder.bind("day", "2024-05-01").unwrap();
    binder.bind("unused", 9i64).unwrap();
    assert_eq!(
        binder.render(),
        "SELECT * FROM hits WHERE day = `2024-05-01`"
    );
}

#[test]
fn mixed_key_styles_are_rejected() {
    let mut binder = Binder::new("SELECT ? WHERE x = :x");

    binder.bind(1, 1i64).unwrap();
    let err = binder.bind("x", 2i64).unwrap_err();
    assert!(err.is_binding());
}

#[test]
fn null_binding_always_fails() {
    let mut binder = Binder::new("VALUES (?)");

    let err = binder.bind(1, Value::Null).unwrap_err();
    assert!(err.is_binding());

    let err = binder
        .bind_typed(1, Value::I64(1), BindKind::Null)
        .unwrap_err();
    assert!(err.is_binding());
}

#[test]
fn inferred_literals() {
    let mut binder = Binder::new("VALUES (?, ?, ?, ?)");

    binder.bind(1, true).unwrap();
    binder.bind(2, false).unwrap();
    binder.bind(3, 1.5f64).unwrap();
    binder.bind(4, "it`s").unwrap();
    assert_eq!(binder.render(), "VALUES (1, 0, 1.5, `it``s`)");
}

#[test]
fn explicit_kind_wins_over_inference() {
    let mut binder = Binder::new("VALUES (?, ?)");

    binder.bind_typed(1, "42", BindKind::Integer).unwrap();
    binder.bind_typed(2, 42i64, BindKind::Text).unwrap();
    assert_eq!(binder.render(), "VALUES (42, `42`)");
}

#[test]
fn numeric_arrays_emit_bare_numerals() {
    let mut binder = Binder::new("WHERE id IN ?");

    binder
        .bind(1, vec![Value::I64(1), Value::I64(2), Value::F64(3.5)])
        .unwrap();
    assert_eq!(binder.render(), "WHERE id IN [1, 2, 3.5]");
}

#[test]
fn string_arrays_quote_each_member() {
    let mut binder = Binder::new("WHERE tag IN ?");

    binder
        .bind(1, vec![Value::String("a".into()), Value::String("b".into())])
        .unwrap();
    assert_eq!(binder.render(), "WHERE tag IN [`a`, `b`]");
}

#[test]
fn mixed_arrays_are_rejected_at_bind_time() {
    let mut binder = Binder::new("WHERE id IN ?");

    let err = binder
        .bind(1, vec![Value::I64(1), Value::String("x".into())])
        .unwrap_err();
    assert!(err.is_binding());
}

#[test]
fn rebinding_a_key_overwrites_its_value() {
    let mut binder = Binder::new("VALUES (?)");

    binder.bind(1, 1i64).unwrap();
    binder.bind(1, 2i64).unwrap();
    assert_eq!(binder.render(), "VALUES (2)");
}

#[test]
fn clear_drops_bindings_but_keeps_template() {
    let mut binder = Binder::new("VALUES (?)");

    binder.bind(1, 1i64).unwrap();
    binder.clear();
    assert_eq!(binder.render(), "VALUES (?)");
    assert_eq!(binder.template(), "VALUES (?)");
}
