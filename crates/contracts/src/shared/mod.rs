pub mod app_metadata;

pub use app_metadata::AppMetadata;
