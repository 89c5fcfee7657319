pub use source::MongodbPageSource;
pub use source_builder::MongodbPageSourceBuilder;

pub mod source;
pub mod source_builder;
