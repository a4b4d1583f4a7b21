pub mod adapters;
pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

#[cfg(feature = "cli")]
pub use config::CliConfig;

pub use config::settings::{LogOptions, Settings, SinkKind};
pub use core::{
    catalog::{Catalog, TitleQuery},
    demo::CatalogDemo,
    lookup::DelayedLookup,
    property::{get_property, BookField, PropertyValue},
    shelf::Shelf,
};
pub use utils::error::{CatalogError, Result};
