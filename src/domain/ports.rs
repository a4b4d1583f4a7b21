use crate::domain::model::Category;
use crate::utils::error::Result;
use async_trait::async_trait;
use std::time::Duration;

/// Destination for user-visible output lines.
pub trait LogSink: Send + Sync {
    fn log(&self, line: &str);
}

/// Anything that can sit on a shelf.
pub trait ShelfItem {
    fn title(&self) -> &str;
}

#[async_trait]
pub trait CategoryLookup: Send + Sync {
    /// Resolves the titles filed under `category`, failing with `NotFound` when there are none.
    async fn titles_by_category(&self, category: Category) -> Result<Vec<String>>;
}

pub trait ConfigProvider: Send + Sync {
    fn category(&self) -> Category;
    fn lookup_delay(&self) -> Duration;
    fn customer(&self) -> &str;
    fn checkout_ids(&self) -> &[u32];
}
