use crate::source::mongodb::MongodbPageSource;
use crate::{PaginateError, PaginateResult};
use mongodb::options::{CountOptions, FindOptions};
use mongodb::Database;

#[derive(Default)]
pub struct MongodbPageSourceBuilder {
    database: Option<Database>,
    read_options: Option<FindOptions>,
    count_options: Option<CountOptions>,
}

impl MongodbPageSourceBuilder {
    pub fn new() -> MongodbPageSourceBuilder {
        MongodbPageSourceBuilder::default()
    }

    pub fn database(mut self, database: Database) -> Self {
        self.database = Some(database);
        self
    }

    /// Base driver options applied to every page fetch. The per-call fetch
    /// directives (projection, sort, skip, limit) override the matching
    /// fields.
    pub fn read_options(mut self, options: impl Into<Option<FindOptions>>) -> Self {
        self.read_options = options.into();
        self
    }

    pub fn count_options(mut self, options: impl Into<Option<CountOptions>>) -> Self {
        self.count_options = options.into();
        self
    }

    pub fn build(self) -> PaginateResult<MongodbPageSource> {
        let database = self.database.ok_or_else(|| {
            PaginateError::Config("No database handle provided for mongodb page source".into())
        })?;

        Ok(MongodbPageSource::with_options(
            database,
            self.read_options.unwrap_or_default(),
            self.count_options,
        ))
    }
}
