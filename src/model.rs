use std::future::Future;

use crate::options::PaginateOptions;
use crate::page::Paginated;
use crate::source::{MongodbPageSource, PageSource};
use crate::{paginate, PaginateResult};

use mongodb::Database;
use serde::de::DeserializeOwned;

/// Gives a model type a paginated read over its backing collection.
///
/// Implement it by hand, or derive it:
///
/// ```ignore
/// #[derive(Deserialize, Paginate)]
/// #[paginate(collection = "users")]
/// struct User {
///     name: String,
///     email: String,
/// }
///
/// let page = User::paginate(
///     &db,
///     PaginateOptions::builder().limit(25).page(2).build(),
/// )
/// .await?;
/// ```
pub trait Paginate
where
    Self: DeserializeOwned + Send + Sync,
{
    /// Defines the collection name that backs models of this type.
    const COLLECTION_NAME: &'static str;

    /// Read one page of this model's collection.
    ///
    /// The filter's match count and the page fetch run concurrently against
    /// the provided database handle.
    fn paginate(
        db: &Database,
        options: PaginateOptions,
    ) -> impl Future<Output = PaginateResult<Paginated<Self>>> + Send {
        async move {
            let source = MongodbPageSource::new(db.clone());
            paginate::paginate(&source, Self::COLLECTION_NAME, options).await
        }
    }

    /// Like +paginate(db, options)+, but against any [`PageSource`]. Useful
    /// when the source carries tuned driver options, or in tests that swap in
    /// an in-memory source.
    fn paginate_with_source<S>(
        source: &S,
        options: PaginateOptions,
    ) -> impl Future<Output = PaginateResult<Paginated<Self>>> + Send
    where
        S: PageSource + Sync,
    {
        paginate::paginate(source, Self::COLLECTION_NAME, options)
    }
}
