use crate::core::catalog::Catalog;
use crate::domain::model::Category;
use crate::domain::ports::{CategoryLookup, LogSink};
use crate::utils::error::{CatalogError, Result};
use async_trait::async_trait;
use std::sync::Arc;
use std::time::Duration;
use tokio::task::JoinHandle;

pub const DEFAULT_LOOKUP_DELAY: Duration = Duration::from_millis(2000);

fn search(catalog: &Catalog, category: Category) -> Result<Vec<String>> {
    let titles = catalog.titles_by_category(category);
    if titles.is_empty() {
        Err(CatalogError::not_found("No books found"))
    } else {
        Ok(titles)
    }
}

/// Runs the category search after `delay` and hands the outcome to `callback` exactly once.
pub fn get_books_by_category<F>(
    catalog: Arc<Catalog>,
    category: Category,
    delay: Duration,
    callback: F,
) -> JoinHandle<()>
where
    F: FnOnce(Result<Vec<String>>) + Send + 'static,
{
    tokio::spawn(async move {
        tokio::time::sleep(delay).await;
        tracing::debug!("Delayed lookup for {} fired", category);
        callback(search(&catalog, category));
    })
}

pub async fn get_books_by_category_async(
    catalog: &Catalog,
    category: Category,
    delay: Duration,
) -> Result<Vec<String>> {
    tokio::time::sleep(delay).await;
    search(catalog, category)
}

pub fn log_category_search(result: &Result<Vec<String>>, sink: &dyn LogSink) {
    match result {
        Ok(titles) => sink.log(&format!("{:?}", titles)),
        Err(e) => sink.log(&format!("Error: {}", e)),
    }
}

pub async fn log_search_results<L>(lookup: &L, category: Category, sink: &dyn LogSink) -> Result<()>
where
    L: CategoryLookup + ?Sized,
{
    let titles = lookup.titles_by_category(category).await?;
    sink.log(&format!("Books found: {}", titles.len()));
    Ok(())
}

/// Category lookup that answers after a fixed delay.
#[derive(Debug, Clone)]
pub struct DelayedLookup {
    catalog: Arc<Catalog>,
    delay: Duration,
}

impl DelayedLookup {
    pub fn new(catalog: Arc<Catalog>, delay: Duration) -> Self {
        Self { catalog, delay }
    }
}

#[async_trait]
impl CategoryLookup for DelayedLookup {
    async fn titles_by_category(&self, category: Category) -> Result<Vec<String>> {
        get_books_by_category_async(&self.catalog, category, self.delay).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::sink::MemorySink;

    #[test]
    fn log_category_search_formats_both_outcomes() {
        let sink = MemorySink::new();

        log_category_search(&Ok(vec!["CSS Secrets".to_string()]), &sink);
        log_category_search(&Err(CatalogError::not_found("No books found")), &sink);

        assert_eq!(
            sink.lines(),
            vec!["[\"CSS Secrets\"]", "Error: No books found"]
        );
    }

    #[tokio::test]
    async fn delayed_lookup_reports_count() {
        let lookup = DelayedLookup::new(Arc::new(Catalog::sample()), Duration::from_millis(1));
        let sink = MemorySink::new();

        log_search_results(&lookup, Category::JavaScript, &sink)
            .await
            .unwrap();

        assert_eq!(sink.lines(), vec!["Books found: 3"]);
    }

    #[tokio::test]
    async fn log_search_results_propagates_not_found() {
        let lookup = DelayedLookup::new(Arc::new(Catalog::sample()), Duration::from_millis(1));
        let sink = MemorySink::new();

        let err = log_search_results(&lookup, Category::Angular, &sink)
            .await
            .unwrap_err();

        assert!(matches!(err, CatalogError::NotFound { .. }));
        assert!(sink.lines().is_empty());
    }
}
