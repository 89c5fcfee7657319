//! End-to-end coverage for the derive macro and the model-level paginate
//! entry point, driven by an in-memory page source.

use async_trait::async_trait;
use bson::{doc, Document};
use mongo_paginate::{
    FetchOptions, Paginate, PaginateOptions, PaginateResult, PageSource,
};
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use std::sync::Mutex;

#[derive(Debug, Clone, Serialize, Deserialize, Paginate)]
#[paginate(collection = "users")]
struct User {
    name: String,
    age: i32,
}

/// Serves a fixed set of user documents, applying skip/limit server-style and
/// remembering which collection each call targeted.
struct FixtureSource {
    documents: Vec<Document>,
    collections: Mutex<Vec<String>>,
}

impl FixtureSource {
    fn users(count: usize) -> FixtureSource {
        let documents = (0..count)
            .map(|n| doc! { "name": format!("user-{n}"), "age": 20 + n as i32 })
            .collect();
        FixtureSource {
            documents,
            collections: Mutex::new(Vec::new()),
        }
    }
}

#[async_trait]
impl PageSource for FixtureSource {
    async fn count_documents(
        &self,
        collection_name: &str,
        _filter: Document,
    ) -> PaginateResult<u64> {
        self.collections
            .lock()
            .expect("collection log poisoned")
            .push(collection_name.to_string());
        Ok(self.documents.len() as u64)
    }

    async fn fetch_documents<T>(
        &self,
        collection_name: &str,
        _filter: Document,
        options: FetchOptions,
    ) -> PaginateResult<Vec<T>>
    where
        T: DeserializeOwned + Send + Sync,
    {
        self.collections
            .lock()
            .expect("collection log poisoned")
            .push(collection_name.to_string());

        let skip = options.skip.unwrap_or(0) as usize;
        let limit = options.limit.map(|l| l as usize).unwrap_or(usize::MAX);
        self.documents
            .iter()
            .skip(skip)
            .take(limit)
            .map(|document| bson::from_document(document.clone()).map_err(Into::into))
            .collect()
    }
}

#[test]
fn derive_sets_the_collection_name() {
    assert_eq!(User::COLLECTION_NAME, "users");
}

#[tokio::test]
async fn paginate_reads_typed_models_from_the_backing_collection() {
    let source = FixtureSource::users(25);
    let options = PaginateOptions::builder()
        .query(doc! { "age": { "$gte": 21 } })
        .limit(10)
        .page(2)
        .build();

    let page = User::paginate_with_source(&source, options)
        .await
        .expect("paginate should succeed");

    assert_eq!(page.total_docs, 25);
    assert_eq!(page.docs.len(), 10);
    assert_eq!(page.docs[0].name, "user-10");
    assert_eq!(page.docs[0].age, 30);
    assert_eq!(page.total_pages, Some(3));
    assert_eq!(page.prev_page, Some(1));
    assert_eq!(page.next_page, Some(3));

    // Both the count and the fetch hit the collection the derive named.
    let collections = source.collections.lock().expect("collection log poisoned");
    assert_eq!(collections.len(), 2);
    assert!(collections.iter().all(|name| name == "users"));
}

#[tokio::test]
async fn paginated_models_serialize_into_the_plugin_wire_shape() {
    let source = FixtureSource::users(3);
    let options = PaginateOptions::builder().limit(10).build();

    let page = User::paginate_with_source(&source, options)
        .await
        .expect("paginate should succeed");

    let json = serde_json::to_value(&page).expect("page should serialize");
    assert_eq!(json["totalDocs"], 3);
    assert_eq!(json["totalPages"], 1);
    assert_eq!(json["hasNextPage"], false);
    assert_eq!(json["docs"][0]["name"], "user-0");
}
