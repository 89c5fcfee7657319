use bson::Document;

/// Relation expansion applied to a paginated fetch.
///
/// Documents from the `from` collection whose `foreign_field` matches the
/// current document's `local_field` are attached under `as_field`, the same
/// shape an aggregation `$lookup` stage produces.
#[derive(Debug, Clone)]
pub struct Populate {
    pub from: String,
    pub local_field: String,
    pub foreign_field: String,
    pub as_field: String,
}

impl Populate {
    pub fn new(
        from: impl Into<String>,
        local_field: impl Into<String>,
        foreign_field: impl Into<String>,
        as_field: impl Into<String>,
    ) -> Populate {
        Populate {
            from: from.into(),
            local_field: local_field.into(),
            foreign_field: foreign_field.into(),
            as_field: as_field.into(),
        }
    }
}

/// The full set of options recognized by a paginate call.
///
/// Values are normalized when the builder runs:
/// - `query` defaults to the empty filter (match all)
/// - `select`, `sort` and `populate` default to disabled
/// - `pagination` defaults to enabled
/// - a missing or non-positive `limit` normalizes to 0, which disables the
///   fetch entirely and nulls out the page metadata
/// - a missing or non-positive `page` normalizes to 1
#[derive(Debug, Clone)]
pub struct PaginateOptions {
    pub(crate) query: Document,
    pub(crate) select: Option<Document>,
    pub(crate) sort: Option<Document>,
    pub(crate) populate: Option<Populate>,
    pub(crate) pagination: bool,
    pub(crate) limit: u64,
    pub(crate) page: u64,
}

impl PaginateOptions {
    pub fn builder() -> PaginateOptionsBuilder {
        PaginateOptionsBuilder::new()
    }

    /// Number of documents skipped before the requested page starts.
    pub(crate) fn skip(&self) -> u64 {
        (self.page - 1) * self.limit
    }
}

impl Default for PaginateOptions {
    fn default() -> Self {
        PaginateOptionsBuilder::new().build()
    }
}

#[derive(Default)]
pub struct PaginateOptionsBuilder {
    query: Option<Document>,
    select: Option<Document>,
    sort: Option<Document>,
    populate: Option<Populate>,
    pagination: Option<bool>,
    limit: Option<i64>,
    page: Option<i64>,
}

impl PaginateOptionsBuilder {
    pub fn new() -> PaginateOptionsBuilder {
        PaginateOptionsBuilder::default()
    }

    pub fn query(mut self, query: impl Into<Document>) -> Self {
        self.query = Some(query.into());
        self
    }

    pub fn select(mut self, select: impl Into<Option<Document>>) -> Self {
        self.select = select.into();
        self
    }

    pub fn sort(mut self, sort: impl Into<Option<Document>>) -> Self {
        self.sort = sort.into();
        self
    }

    pub fn populate(mut self, populate: impl Into<Option<Populate>>) -> Self {
        self.populate = populate.into();
        self
    }

    /// Toggle skip/limit on the underlying fetch. When disabled, the fetch
    /// returns every matching document while the page metadata collapses to a
    /// single page.
    pub fn pagination(mut self, enabled: bool) -> Self {
        self.pagination = Some(enabled);
        self
    }

    pub fn limit(mut self, limit: i64) -> Self {
        self.limit = Some(limit);
        self
    }

    pub fn page(mut self, page: i64) -> Self {
        self.page = Some(page);
        self
    }

    /// Normalize and freeze the options. Out-of-range values are clamped
    /// rather than rejected.
    pub fn build(self) -> PaginateOptions {
        let limit = self.limit.filter(|limit| *limit > 0).unwrap_or(0) as u64;
        let page = self.page.filter(|page| *page > 0).unwrap_or(1) as u64;

        PaginateOptions {
            query: self.query.unwrap_or_default(),
            select: self.select,
            sort: self.sort,
            populate: self.populate,
            pagination: self.pagination.unwrap_or(true),
            limit,
            page,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use bson::doc;

    #[test]
    fn test_builder_defaults() {
        let options = PaginateOptions::default();

        assert_eq!(options.query, Document::new());
        assert!(options.select.is_none());
        assert!(options.sort.is_none());
        assert!(options.populate.is_none());
        assert!(options.pagination);
        assert_eq!(options.limit, 0);
        assert_eq!(options.page, 1);
    }

    #[test]
    fn test_non_positive_limit_normalizes_to_zero() {
        let negative = PaginateOptions::builder().limit(-5).build();
        assert_eq!(negative.limit, 0);

        let zero = PaginateOptions::builder().limit(0).build();
        assert_eq!(zero.limit, 0);
    }

    #[test]
    fn test_non_positive_page_normalizes_to_one() {
        let negative = PaginateOptions::builder().limit(10).page(-3).build();
        assert_eq!(negative.page, 1);

        let zero = PaginateOptions::builder().limit(10).page(0).build();
        assert_eq!(zero.page, 1);
    }

    #[test]
    fn test_skip_offsets_by_whole_pages() {
        let options = PaginateOptions::builder().limit(10).page(3).build();
        assert_eq!(options.skip(), 20);

        let first_page = PaginateOptions::builder().limit(10).build();
        assert_eq!(first_page.skip(), 0);
    }

    #[test]
    fn test_query_passes_through_verbatim() {
        let options = PaginateOptions::builder()
            .query(doc! { "status": "active", "age": { "$gte": 21 } })
            .build();

        assert_eq!(
            options.query,
            doc! { "status": "active", "age": { "$gte": 21 } }
        );
    }
}
