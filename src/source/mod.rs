pub use self::mongodb::{MongodbPageSource, MongodbPageSourceBuilder};

pub mod mongodb;

use crate::options::{PaginateOptions, Populate};
use crate::PaginateResult;
use async_trait::async_trait;
use bson::Document;
use serde::de::DeserializeOwned;

/// Fetch directives for a single page read, produced from normalized
/// [`PaginateOptions`].
///
/// `skip`/`limit` are `None` when pagination is disabled, in which case the
/// fetch returns every matching document.
#[derive(Debug, Clone, Default)]
pub struct FetchOptions {
    pub select: Option<Document>,
    pub sort: Option<Document>,
    pub populate: Option<Populate>,
    pub skip: Option<u64>,
    pub limit: Option<i64>,
}

impl From<&PaginateOptions> for FetchOptions {
    fn from(options: &PaginateOptions) -> FetchOptions {
        FetchOptions {
            select: options.select.clone(),
            sort: options.sort.clone(),
            populate: options.populate.clone(),
            skip: options.pagination.then(|| options.skip()),
            limit: options.pagination.then_some(options.limit as i64),
        }
    }
}

/// The query capabilities a paginated read needs from its data source:
/// counting matches and fetching a shaped slice of them.
///
/// Implemented by [`MongodbPageSource`] for real collections; tests implement
/// it directly to drive the pagination logic without a database.
#[async_trait]
pub trait PageSource {
    /// Count every document matching the filter, ignoring pagination.
    async fn count_documents(&self, collection_name: &str, filter: Document)
        -> PaginateResult<u64>;

    /// Fetch the documents matching the filter, shaped by the given
    /// directives.
    async fn fetch_documents<T>(
        &self,
        collection_name: &str,
        filter: Document,
        options: FetchOptions,
    ) -> PaginateResult<Vec<T>>
    where
        T: DeserializeOwned + Send + Sync;
}
