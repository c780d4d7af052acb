pub mod export_builder;
pub mod grouping;
pub mod selection;

pub use export_builder::{
    resolve_download_filename, ExportFormat, ExportRequest, ExportRequestBuilder,
};
pub use grouping::{GroupedView, GroupingEngine, TopicGroup, TypeGroup};
pub use selection::{SelectionKey, SelectionSet};
