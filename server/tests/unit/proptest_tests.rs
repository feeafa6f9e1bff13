//! Property-based tests using proptest

use proptest::prelude::*;

use client_registry_common::types::Client;
use client_registry_common::validation::{validate_client_id, CLIENT_ID_LEN};
use client_registry_server::registry::ClientTable;

fn client_id() -> impl Strategy<Value = String> {
    "[0-9A-Z]{3}"
}

fn name() -> impl Strategy<Value = String> {
    "[a-zA-Z]{2,30}"
}

fn client() -> impl Strategy<Value = Client> {
    (client_id(), name(), name()).prop_map(|(id, first, last)| Client::new(id, first, last))
}

/// 重複IDを除いた初期テーブルを構築
fn table_from(clients: &[Client]) -> ClientTable {
    let mut table = ClientTable::new();
    for client in clients {
        table.create(client.clone());
    }
    table
}

#[derive(Debug, Clone)]
enum Op {
    Create(Client),
    Delete(String),
}

fn op() -> impl Strategy<Value = Op> {
    prop_oneof![
        client().prop_map(Op::Create),
        client_id().prop_map(Op::Delete),
    ]
}

// ---------------------------------------------------------------------------
// ClientTable
// ---------------------------------------------------------------------------

proptest! {
    /// 存在しないIDを作成した後はfindで同じレコードが取れる
    #[test]
    fn create_then_find_returns_equal_record(
        existing in prop::collection::vec(client(), 0..10),
        new in client(),
    ) {
        let mut table = table_from(&existing);
        prop_assume!(!table.contains(&new.id));

        let created = table.create(new.clone());
        prop_assert_eq!(created.as_ref(), Some(&new));
        prop_assert_eq!(table.find(&new.id), Some(&new));
    }

    /// 既存IDの作成は常に拒否される
    #[test]
    fn create_rejects_existing_id(
        existing in prop::collection::vec(client(), 1..10),
        first in name(),
        last in name(),
    ) {
        let mut table = table_from(&existing);
        let id = existing[0].id.clone();
        let before = table.list().to_vec();

        prop_assert!(validate_client_id(&id, |candidate| table.contains(candidate)).is_err());
        prop_assert!(table.create(Client::new(id, first, last)).is_none());
        prop_assert_eq!(table.list(), before.as_slice());
    }

    /// 長さが3以外のIDは常に拒否される
    #[test]
    fn validation_rejects_wrong_length_id(id in "[0-9A-Z]{0,8}") {
        prop_assume!(id.chars().count() != CLIENT_ID_LEN);
        prop_assert!(validate_client_id(&id, |_| false).is_err());
    }

    /// 更新はIDと位置を保ち、他のレコードに影響しない
    #[test]
    fn update_replaces_names_in_place(
        existing in prop::collection::vec(client(), 1..10),
        pick in any::<prop::sample::Index>(),
        first in name(),
        last in name(),
    ) {
        let mut table = table_from(&existing);
        let before = table.list().to_vec();
        let pos = pick.index(before.len());
        let id = before[pos].id.clone();

        let updated = table.update(&id, &first, &last).unwrap();
        prop_assert_eq!(&updated, &Client::new(id.clone(), first, last));

        let after = table.list();
        prop_assert_eq!(after.len(), before.len());
        for (i, (old, new)) in before.iter().zip(after.iter()).enumerate() {
            if i == pos {
                prop_assert_eq!(new, &updated);
            } else {
                prop_assert_eq!(new, old);
            }
        }
    }

    /// 存在しないIDの更新・削除はテーブルを変更しない
    #[test]
    fn missing_id_leaves_table_unchanged(
        existing in prop::collection::vec(client(), 0..10),
        id in client_id(),
    ) {
        let mut table = table_from(&existing);
        prop_assume!(!table.contains(&id));
        let before = table.list().to_vec();

        prop_assert!(table.update(&id, "Ana", "Lopez").is_none());
        prop_assert!(table.delete(&id).is_none());
        prop_assert_eq!(table.list(), before.as_slice());
    }

    /// 削除は対象レコードだけを取り除き、削除前の値を返す
    #[test]
    fn delete_removes_exactly_one_record(
        existing in prop::collection::vec(client(), 1..10),
        pick in any::<prop::sample::Index>(),
    ) {
        let mut table = table_from(&existing);
        let before = table.list().to_vec();
        let pos = pick.index(before.len());
        let target = before[pos].clone();

        let removed = table.delete(&target.id);
        prop_assert_eq!(removed.as_ref(), Some(&target));

        let mut expected = before.clone();
        expected.remove(pos);
        prop_assert_eq!(table.list(), expected.as_slice());
        for client in &expected {
            prop_assert_eq!(table.find(&client.id), Some(client));
        }
    }

    /// 件数 = 成功した作成数 - 成功した削除数
    #[test]
    fn len_tracks_successful_creates_and_deletes(
        ops in prop::collection::vec(op(), 0..40),
    ) {
        let mut table = ClientTable::new();
        let mut created = 0usize;
        let mut deleted = 0usize;

        for op in ops {
            match op {
                Op::Create(client) => {
                    if table.create(client).is_some() {
                        created += 1;
                    }
                }
                Op::Delete(id) => {
                    if table.delete(&id).is_some() {
                        deleted += 1;
                    }
                }
            }
            prop_assert_eq!(table.len(), created - deleted);
        }
    }
}
