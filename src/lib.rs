pub mod error;
pub mod model;
pub mod options;
pub mod page;
pub mod paginate;
pub mod source;

// Reexport the derive(Paginate) macro when users include the crate with
// "derive" in the features list.
#[cfg(feature = "derive")]
pub use mongo_paginate_derive::Paginate;

pub use crate::{
    error::{PaginateError, PaginateResult},
    model::Paginate,
    options::{PaginateOptions, PaginateOptionsBuilder, Populate},
    page::Paginated,
    source::{FetchOptions, MongodbPageSource, MongodbPageSourceBuilder, PageSource},
};
