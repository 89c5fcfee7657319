use crate::options::PaginateOptions;
use crate::page::Paginated;
use crate::source::{FetchOptions, PageSource};
use crate::PaginateResult;
use serde::de::DeserializeOwned;

/// Run a paginated read against an explicit data source.
///
/// Issues a count for the full filter and a fetch for the requested page,
/// awaits both concurrently, and folds the results into a [`Paginated`]
/// record. A normalized limit of 0 skips the fetch entirely and returns an
/// empty page.
///
/// Either query failing fails the whole call; no partial result is built.
pub async fn paginate<T, S>(
    source: &S,
    collection_name: &str,
    options: PaginateOptions,
) -> PaginateResult<Paginated<T>>
where
    T: DeserializeOwned + Send + Sync,
    S: PageSource + Sync,
{
    let count_future = source.count_documents(collection_name, options.query.clone());

    let fetch_future = async {
        if options.limit == 0 {
            return Ok(Vec::new());
        }
        source
            .fetch_documents(
                collection_name,
                options.query.clone(),
                FetchOptions::from(&options),
            )
            .await
    };

    // The count and the page fetch have no data dependency on each other.
    let (total_docs, docs) = futures::try_join!(count_future, fetch_future)?;

    Ok(Paginated::assemble(total_docs, docs, &options))
}
