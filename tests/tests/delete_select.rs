//! Delete and select integration tests.

use stable_tests::prelude::*;

#[test]
fn test_select_all() {
    let (table, _) = plain_table(vec![row! { "pk" => "0" }, row! { "pk" => "1" }]);

    assert_eq!(
        table.select(&row!()).unwrap(),
        vec![row! { "pk" => "0" }, row! { "pk" => "1" }]
    );
    assert_eq!(table.select_any(&row!()).unwrap(), row! { "pk" => "0" });
}

#[test]
fn test_select_one() {
    let (table, _) = plain_table(vec![row! { "pk" => "0" }, row! { "pk" => "1" }]);

    assert_eq!(
        table.select(&row! { "pk" => "1" }).unwrap(),
        vec![row! { "pk" => "1" }]
    );
    assert_eq!(
        table.select_any(&row! { "pk" => "1" }).unwrap(),
        row! { "pk" => "1" }
    );
}

#[test]
fn test_select_by_multiple_conditions() {
    let (table, _) = plain_table(vec![
        row! { "pk" => "0", "f1" => "v0" },
        row! { "pk" => "1", "f1" => "v0" },
    ]);

    assert_eq!(
        table.select(&row! { "pk" => "0", "f1" => "v0" }).unwrap(),
        vec![row! { "pk" => "0", "f1" => "v0" }]
    );
    assert_eq!(table.select(&row! { "f1" => "v0" }).unwrap().len(), 2);
}

#[test]
fn test_select_none() {
    let (table, _) = plain_table(vec![row! { "pk" => "0" }, row! { "pk" => "1" }]);

    assert!(matches!(
        table.select(&row! { "pk" => "2" }),
        Err(TableError::NotFound)
    ));
    assert!(table
        .select_any(&row! { "pk" => "2" })
        .unwrap_err()
        .is_not_found());
}

#[test]
fn test_select_returns_copies() {
    // GIVEN
    let (table, _) = plain_table(vec![row! { "pk" => "0", "a" => "1" }]);

    // WHEN - the caller mutates what it got back
    let mut rows = table.select(&row!()).unwrap();
    rows[0].insert("a".to_string(), "changed".to_string());
    let mut row = table.select_any(&row!()).unwrap();
    row.clear();

    // THEN
    assert_eq!(
        table.select(&row!()).unwrap(),
        vec![row! { "pk" => "0", "a" => "1" }]
    );
}

#[test]
fn test_delete_all() {
    // GIVEN
    let (table, trigger) = plain_table(vec![row! { "pk" => "0" }, row! { "pk" => "1" }]);

    // WHEN
    let affected = table.delete(&row!()).unwrap();

    // THEN - deletes arrive in original row order
    assert_eq!(affected, 2);
    assert_eq!(
        trigger.records(),
        vec![
            TriggerRecord::delete(row! { "pk" => "0" }),
            TriggerRecord::delete(row! { "pk" => "1" }),
        ]
    );
    assert!(table.select(&row!()).unwrap_err().is_not_found());
    assert!(table.is_empty());
}

#[test]
fn test_delete_one() {
    let (table, trigger) = plain_table(vec![row! { "pk" => "0" }, row! { "pk" => "1" }]);

    assert_eq!(table.delete(&row! { "pk" => "0" }).unwrap(), 1);
    assert_eq!(
        trigger.records(),
        vec![TriggerRecord::delete(row! { "pk" => "0" })]
    );
    assert_eq!(table.select(&row!()).unwrap(), vec![row! { "pk" => "1" }]);
}

#[test]
fn test_delete_by_multiple_conditions() {
    let (table, trigger) = plain_table(vec![
        row! { "pk" => "0", "f1" => "v0" },
        row! { "pk" => "1", "f1" => "v0" },
    ]);

    assert_eq!(table.delete(&row! { "pk" => "0", "f1" => "v0" }).unwrap(), 1);
    assert_eq!(
        trigger.records(),
        vec![TriggerRecord::delete(row! { "pk" => "0", "f1" => "v0" })]
    );
    assert_eq!(
        table.select(&row!()).unwrap(),
        vec![row! { "pk" => "1", "f1" => "v0" }]
    );
}

#[test]
fn test_delete_none() {
    let rows = vec![row! { "pk" => "0" }, row! { "pk" => "1" }];
    let (table, trigger) = plain_table(rows.clone());

    assert_eq!(table.delete(&row! { "pk" => "2" }).unwrap(), 0);
    assert!(trigger.records().is_empty());
    assert_eq!(table.select(&row!()).unwrap(), rows);
}

#[test]
fn test_delete_trigger_error() {
    let rows = vec![row! { "pk" => FAILING_KEY }];
    let (table, trigger) = plain_table(rows.clone());

    let err = table.delete(&row! { "pk" => FAILING_KEY }).unwrap_err();

    assert_eq!(err.to_string(), "trigger error");
    assert!(trigger.records().is_empty());
    assert_eq!(table.select(&row!()).unwrap(), rows);
}

#[test]
fn test_delete_then_reinsert_same_key() {
    let (table, trigger) = plain_table(vec![row! { "pk" => "0", "v" => "old" }]);

    table.delete(&row! { "pk" => "0" }).unwrap();
    table.insert(vec![row! { "pk" => "0", "v" => "new" }]).unwrap();

    assert_eq!(
        trigger.operations(),
        vec![Operation::Delete, Operation::Insert]
    );
    assert_eq!(
        table.select_any(&row! { "pk" => "0" }).unwrap(),
        row! { "pk" => "0", "v" => "new" }
    );
}
