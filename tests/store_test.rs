//! Integration tests for the SQLite document store

mod test_utils;

#[cfg(test)]
mod tests {
    use serde_json::json;

    use labbook::store::DocumentStore;

    use crate::test_utils::{TEST_DB, test_store};

    #[tokio::test]
    async fn it_lists_records_ordered_by_id() {
        let (_dir, _config, store) = test_store().await;
        store
            .insert_one(TEST_DB, "presentations", json!({"_id": "b", "title": "second"}))
            .await
            .unwrap();
        store
            .insert_one(TEST_DB, "presentations", json!({"_id": "a", "title": "first"}))
            .await
            .unwrap();

        let records = store.list_all(TEST_DB, "presentations").await.unwrap();
        assert_eq!(records.len(), 2);
        assert_eq!(records[0], json!({"_id": "a", "title": "first"}));
        assert_eq!(records[1]["_id"], json!("b"));
    }

    #[tokio::test]
    async fn it_scopes_records_by_database_and_collection() {
        let (_dir, _config, store) = test_store().await;
        store
            .insert_one(TEST_DB, "presentations", json!({"_id": "a"}))
            .await
            .unwrap();
        store
            .insert_one(TEST_DB, "expenses", json!({"_id": "a"}))
            .await
            .unwrap();
        store
            .insert_one("other", "presentations", json!({"_id": "z"}))
            .await
            .unwrap();

        assert_eq!(store.list_all(TEST_DB, "presentations").await.unwrap().len(), 1);
        assert_eq!(store.list_all(TEST_DB, "expenses").await.unwrap().len(), 1);
        assert!(store.list_all(TEST_DB, "people").await.unwrap().is_empty());
        let other = store.list_all("other", "presentations").await.unwrap();
        assert_eq!(other[0]["_id"], json!("z"));
    }

    #[tokio::test]
    async fn it_rejects_a_second_insert_with_the_same_id() {
        let (_dir, _config, store) = test_store().await;
        store
            .insert_one(TEST_DB, "presentations", json!({"_id": "a"}))
            .await
            .unwrap();
        let result = store
            .insert_one(TEST_DB, "presentations", json!({"_id": "a"}))
            .await;
        assert!(result.is_err());
    }

    #[tokio::test]
    async fn it_rejects_records_without_an_id() {
        let (_dir, _config, store) = test_store().await;
        let result = store
            .insert_one(TEST_DB, "presentations", json!({"title": "no id"}))
            .await;
        assert!(result.is_err());
    }
}
