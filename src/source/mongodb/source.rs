use crate::source::mongodb::source_builder::MongodbPageSourceBuilder;
use crate::source::{FetchOptions, PageSource};
use crate::PaginateResult;
use async_trait::async_trait;
use bson::{doc, Document};
use futures_util::TryStreamExt;
use mongodb::options::{CountOptions, FindOptions};
use mongodb::Database;
use serde::de::DeserializeOwned;

/// A [`PageSource`] backed by a live `mongodb::Database` handle.
///
/// Plain fetches run through `find` with skip/limit/sort/projection applied as
/// driver options. When a fetch asks for relation expansion, it switches to an
/// aggregation pipeline so the `$lookup` runs server-side against the same
/// filter.
pub struct MongodbPageSource {
    db: Database,
    read_options: FindOptions,
    count_options: Option<CountOptions>,
}

impl MongodbPageSource {
    pub fn builder() -> MongodbPageSourceBuilder {
        MongodbPageSourceBuilder::new()
    }

    /// Wrap a database handle with default driver options.
    pub fn new(db: Database) -> MongodbPageSource {
        MongodbPageSource {
            db,
            read_options: FindOptions::default(),
            count_options: None,
        }
    }

    pub(crate) fn with_options(
        db: Database,
        read_options: FindOptions,
        count_options: Option<CountOptions>,
    ) -> MongodbPageSource {
        MongodbPageSource {
            db,
            read_options,
            count_options,
        }
    }

    fn build_find_options(&self, options: &FetchOptions) -> FindOptions {
        let mut read_options = self.read_options.clone();
        read_options.projection = options.select.clone().or(read_options.projection);
        read_options.sort = options.sort.clone().or(read_options.sort);
        read_options.skip = options.skip;
        read_options.limit = options.limit;
        read_options
    }

    /// Build the aggregation pipeline for a relation-expanded fetch.
    ///
    /// Paging stages run before the `$lookup` so only the page's documents get
    /// expanded; the projection runs last, so a `select` that excludes the
    /// lookup target drops the expanded field like any other.
    fn build_pipeline(filter: Document, options: &FetchOptions) -> Vec<Document> {
        let mut pipeline = vec![doc! { "$match": filter }];

        if let Some(sort) = &options.sort {
            if !sort.is_empty() {
                pipeline.push(doc! { "$sort": sort.clone() });
            }
        }
        if let Some(skip) = options.skip {
            pipeline.push(doc! { "$skip": skip as i64 });
        }
        if let Some(limit) = options.limit {
            pipeline.push(doc! { "$limit": limit });
        }
        if let Some(populate) = &options.populate {
            pipeline.push(doc! {
                "$lookup": {
                    "from": populate.from.as_str(),
                    "localField": populate.local_field.as_str(),
                    "foreignField": populate.foreign_field.as_str(),
                    "as": populate.as_field.as_str(),
                }
            });
        }
        if let Some(select) = &options.select {
            if !select.is_empty() {
                pipeline.push(doc! { "$project": select.clone() });
            }
        }

        pipeline
    }
}

#[async_trait]
impl PageSource for MongodbPageSource {
    async fn count_documents(
        &self,
        collection_name: &str,
        filter: Document,
    ) -> PaginateResult<u64> {
        let total_documents = self
            .db
            .collection::<Document>(collection_name)
            .count_documents(filter)
            .with_options(self.count_options.clone())
            .await?;
        Ok(total_documents)
    }

    async fn fetch_documents<T>(
        &self,
        collection_name: &str,
        filter: Document,
        options: FetchOptions,
    ) -> PaginateResult<Vec<T>>
    where
        T: DeserializeOwned + Send + Sync,
    {
        if options.populate.is_some() {
            let pipeline = Self::build_pipeline(filter, &options);
            let raw: Vec<Document> = self
                .db
                .collection::<Document>(collection_name)
                .aggregate(pipeline)
                .await?
                .try_collect()
                .await?;

            return raw
                .into_iter()
                .map(|document| bson::from_document(document).map_err(Into::into))
                .collect();
        }

        let read_options = self.build_find_options(&options);
        let documents = self
            .db
            .collection::<T>(collection_name)
            .find(filter)
            .with_options(read_options)
            .await?
            .try_collect()
            .await?;
        Ok(documents)
    }
}
