use crate::core::catalog::{log_book_titles, log_first_available, print_book, Catalog, TitleQuery};
use crate::core::helpers::{
    book_title_transform, calc_total_pages, create_customer, create_customer_id, purge,
    sample_libraries,
};
use crate::core::lookup::{get_books_by_category, log_category_search, log_search_results};
use crate::core::property::{get_property, BookField};
use crate::core::shelf::Shelf;
use crate::domain::model::{
    Book, Category, DamageLogger, Librarian, Magazine, Reader, UniversityLibrarian,
};
use crate::domain::ports::{CategoryLookup, ConfigProvider, LogSink};
use crate::domain::reference::{Encyclopedia, ReferenceItem};
use crate::utils::error::{CatalogError, Result};
use serde_json::json;
use std::sync::Arc;

/// Drives the demonstration scenarios against a catalog, writing everything to one sink.
pub struct CatalogDemo<L: CategoryLookup, C: ConfigProvider> {
    catalog: Arc<Catalog>,
    lookup: L,
    config: C,
    sink: Arc<dyn LogSink>,
}

impl<L: CategoryLookup, C: ConfigProvider> CatalogDemo<L, C> {
    pub fn new(catalog: Arc<Catalog>, lookup: L, config: C, sink: Arc<dyn LogSink>) -> Self {
        Self {
            catalog,
            lookup,
            config,
            sink,
        }
    }

    pub async fn run(&self) -> Result<()> {
        tracing::debug!("Running catalog demo over {} books", self.catalog.len());

        self.run_queries()?;
        self.run_customers();
        self.run_type_guards()?;
        self.run_records();
        self.run_shelves();
        self.run_async_lookups().await?;

        tracing::debug!("Catalog demo finished");
        Ok(())
    }

    fn run_queries(&self) -> Result<()> {
        let sink = self.sink.as_ref();
        let books = self.catalog.all_books();

        log_first_available(books, sink);

        let titles = self.catalog.titles_by_category(self.config.category());
        log_book_titles(&titles, sink);

        if !self.catalog.is_empty() {
            let index = self.catalog.len().min(3) - 1;
            let (title, author) = self.catalog.author_by_index(index)?;
            sink.log(&format!("Book #{}: {} by {}", index, title, author));
        }

        sink.log(&format!(
            "Total pages: {}",
            calc_total_pages(&sample_libraries())
        ));

        if let Some(book) = self.catalog.book_by_id(1) {
            print_book(book, sink);
        }

        let checked_out = self
            .catalog
            .checkout(self.config.customer(), self.config.checkout_ids(), sink);
        sink.log(&format!("{:?}", checked_out));

        let unavailable = self.catalog.titles(TitleQuery::ByAvailability(false));
        sink.log(&format!("{:?}", unavailable));

        Ok(())
    }

    fn run_customers(&self) {
        let sink = self.sink.as_ref();

        sink.log(&create_customer_id("Ann", 10));

        let id_generator: fn(&str, u32) -> String = create_customer_id;
        sink.log(&id_generator("Jack", 25));

        create_customer("Anton", None, None, sink);
        create_customer("Anton", Some(24), None, sink);
        create_customer("Anton", Some(24), Some("Ryazan"), sink);
    }

    fn run_type_guards(&self) -> Result<()> {
        let sink = self.sink.as_ref();

        sink.log(&book_title_transform(&json!("Hello"))?);

        match book_title_transform(&json!(123)) {
            Err(e @ CatalogError::TypeMismatch { .. }) => sink.log(&format!("Error: {}", e)),
            Err(e) => return Err(e),
            Ok(unexpected) => sink.log(&unexpected),
        }

        Ok(())
    }

    fn run_records(&self) {
        let sink = self.sink.as_ref();

        let my_book = Book::new(
            5,
            "Colors, Backgrounds, and Gradients",
            "Eric A. Meyer",
            true,
            Category::Css,
        )
        .with_pages(200)
        .with_damage_logger(DamageLogger::new("markDamaged", |reason| {
            format!("Damaged: {}", reason)
        }));

        print_book(&my_book, sink);
        if let Some(report) = my_book.report_damage("missing back cover") {
            sink.log(&report);
        }

        let log_damage = DamageLogger::standard();
        sink.log(&log_damage.call("Book was burned"));

        for field in [BookField::Title, BookField::MarkDamaged] {
            if let Some(value) = get_property(&my_book, field) {
                sink.log(&format!("{:?}: {}", field, value));
            }
        }

        let librarian = UniversityLibrarian::new("Jack", "jack@test.com", "The Best Department");
        librarian.assist_customer("Anton", sink);

        let mut reader = Reader::new("Anton");
        if let Some(book) = self.catalog.first_available() {
            reader.take(book.clone());
        }
        sink.log(&format!("{} has {} book(s)", reader.name, reader.books().len()));

        let remaining = purge(self.catalog.all_books());
        sink.log(&format!("Purged inventory keeps {} book(s)", remaining.len()));

        let mut encyclopedia = Encyclopedia::new(1, "WorldPedia", 1900, 10);
        encyclopedia.set_publisher("WorldPedia Press");
        encyclopedia.print_item(sink);
        encyclopedia.print_citation(sink);
    }

    fn run_shelves(&self) {
        let sink = self.sink.as_ref();

        let book_shelf: Shelf<Book> = self.catalog.all_books().iter().cloned().collect();
        if let Some(first) = book_shelf.get_first() {
            sink.log(&first.title);
        }

        let mut magazine_shelf = Shelf::new();
        magazine_shelf.add(Magazine::new("Programming Language Monthly", "Code Mags"));
        magazine_shelf.add(Magazine::new("Literary Fiction Quarterly", "College Press"));
        magazine_shelf.add(Magazine::new("Five Points", "GSU"));

        magazine_shelf.print_titles(sink);
        match magazine_shelf.find("Five Points") {
            Some(magazine) => sink.log(&format!("{} ({})", magazine.title, magazine.publisher)),
            None => sink.log("Magazine not found"),
        }
    }

    async fn run_async_lookups(&self) -> Result<()> {
        let category = self.config.category();
        let delay = self.config.lookup_delay();

        self.sink.log("Before the delayed lookup");
        let callback_sink = Arc::clone(&self.sink);
        let handle = get_books_by_category(
            Arc::clone(&self.catalog),
            category,
            delay,
            move |result| log_category_search(&result, callback_sink.as_ref()),
        );
        self.sink.log("After the delayed lookup was scheduled");
        handle.await?;

        match log_search_results(&self.lookup, category, self.sink.as_ref()).await {
            Err(e @ CatalogError::NotFound { .. }) => {
                self.sink.log(&format!("Error: {}", e));
                Ok(())
            }
            other => other,
        }
    }
}
