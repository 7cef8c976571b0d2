//! The in-memory book store.
//!
//! The store is seeded once at startup and lives for the whole process. Books are never added
//! or removed; mutations only assign to a single field of an existing record.

use crate::errors::StoreError;
use parking_lot::Mutex;
use std::sync::Arc;

/// The representation of a book.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Book {
    /// The person who authored the book.
    pub author: String,
    /// Unique identifier, assigned when seeding.
    pub id: i32,
    /// Number of copies in stock. Only ever incremented.
    pub inventory: i32,
    /// The title of the book.
    pub title: String,
}

impl Book {
    /// Convenience constructor for a book with no copies in stock.
    #[inline]
    #[must_use]
    pub fn new(id: i32, title: impl Into<String>, author: impl Into<String>) -> Self {
        Self {
            author: author.into(),
            id,
            inventory: 0,
            title: title.into(),
        }
    }
}

/// A shared handle to the books. Clones refer to the same records.
#[derive(Debug, Clone, Default)]
#[expect(
    clippy::module_name_repetitions,
    reason = "Re-exported at the crate root next to `Book`."
)]
pub struct BookStore {
    /// The records, in insertion order.
    books: Arc<Mutex<Vec<Book>>>,
}

impl BookStore {
    /// Returns the first book with a matching identifier, if any.
    #[inline]
    #[must_use]
    pub fn get(&self, id: i32) -> Option<Book> {
        self.books.lock().iter().find(|book| book.id == id).cloned()
    }

    /// Adds one copy to the inventory of a book and returns the updated book.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError::NotFound`] if no book has the identifier `id`.
    #[inline]
    pub fn increase_inventory(&self, id: i32) -> Result<Book, StoreError> {
        self.modify(id, |book| book.inventory = book.inventory.saturating_add(1))
    }

    /// Returns a snapshot of every book, in insertion order.
    #[inline]
    #[must_use]
    pub fn list(&self) -> Vec<Book> {
        self.books.lock().clone()
    }

    /// Applies `f` to the book with identifier `id` while holding the lock, so that concurrent
    /// mutations of the same book never interleave.
    fn modify(&self, id: i32, f: impl FnOnce(&mut Book)) -> Result<Book, StoreError> {
        let mut books = self.books.lock();
        let book = books
            .iter_mut()
            .find(|book| book.id == id)
            .ok_or(StoreError::NotFound { id })?;
        f(book);
        let updated = book.clone();
        drop(books);
        Ok(updated)
    }

    /// Creates a store holding the given books, in the given order.
    #[inline]
    #[must_use]
    pub fn new(books: Vec<Book>) -> Self {
        Self {
            books: Arc::new(Mutex::new(books)),
        }
    }

    /// Creates a store holding the two demonstration books.
    #[inline]
    #[must_use]
    pub fn seeded() -> Self {
        Self::new(vec![
            Book::new(0, "Harry Potter and the Sorcerer's stone", "J.K. Rowling"),
            Book::new(1, "Jurassic Park", "Michael Crichton"),
        ])
    }

    /// Replaces the author of a book and returns the updated book.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError::NotFound`] if no book has the identifier `id`.
    #[inline]
    pub fn update_author(&self, id: i32, author: String) -> Result<Book, StoreError> {
        self.modify(id, |book| book.author = author)
    }

    /// Replaces the title of a book and returns the updated book.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError::NotFound`] if no book has the identifier `id`.
    #[inline]
    pub fn update_title(&self, id: i32, title: String) -> Result<Book, StoreError> {
        self.modify(id, |book| book.title = title)
    }
}
