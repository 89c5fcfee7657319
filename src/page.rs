use crate::options::PaginateOptions;
use serde::Serialize;

/// One page of documents plus the metadata describing its position in the
/// full result set.
///
/// Fields serialize in camelCase to match the wire shape produced by the
/// common document-store pagination plugins, so API responses built on top of
/// this type stay drop-in compatible.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Paginated<T> {
    /// Count of every document matching the filter, ignoring pagination.
    pub total_docs: u64,

    /// The normalized page size requested by the caller.
    pub limit: u64,

    /// Total number of pages, floored at 1. `None` when `limit` is 0.
    pub total_pages: Option<u64>,

    /// The requested page. `None` when `limit` is 0.
    pub page: Option<u64>,

    /// One-based index of the first document on this page.
    pub paging_counter: Option<u64>,

    pub has_prev_page: bool,
    pub has_next_page: bool,
    pub prev_page: Option<u64>,
    pub next_page: Option<u64>,

    /// The documents on the requested page.
    pub docs: Vec<T>,
}

impl<T> Paginated<T> {
    /// Combine a count result and a fetched document list into page metadata.
    ///
    /// Pure arithmetic over already-normalized options; the queries have
    /// finished by the time this runs.
    pub(crate) fn assemble(total_docs: u64, docs: Vec<T>, options: &PaginateOptions) -> Paginated<T> {
        let limit = options.limit;
        let page = options.page;

        // A zero limit means no fetch happened. Every pagination field nulls
        // out, whether or not pagination was requested.
        if limit == 0 {
            return Paginated {
                total_docs,
                limit: 0,
                total_pages: None,
                page: None,
                paging_counter: None,
                has_prev_page: false,
                has_next_page: false,
                prev_page: None,
                next_page: None,
                docs,
            };
        }

        let mut paginated = Paginated {
            total_docs,
            limit,
            total_pages: Some(1),
            page: Some(page),
            paging_counter: Some((page - 1) * limit + 1),
            has_prev_page: false,
            has_next_page: false,
            prev_page: None,
            next_page: None,
            docs,
        };

        if options.pagination {
            // An empty collection still reports one (empty) page.
            let total_pages = std::cmp::max(1, total_docs.div_ceil(limit));
            paginated.total_pages = Some(total_pages);

            if page > 1 {
                paginated.has_prev_page = true;
                paginated.prev_page = Some(page - 1);
            }
            if page < total_pages {
                paginated.has_next_page = true;
                paginated.next_page = Some(page + 1);
            }
        }

        paginated
    }
}
