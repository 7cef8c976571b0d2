//! The GraphQL schema and its resolvers.
//!
//! Nullability follows the published SDL: every field other than `Book.id` and the arguments is
//! nullable. For mutations this means a failing resolver reports its error and resolves to `null`,
//! leaving the other fields of `data` intact.

use crate::{
    errors::StoreError,
    store::{Book, BookStore},
};
use async_graphql::{Context, EmptySubscription, Error, Object, Schema, SimpleObject};

/// The executable schema served by the application.
#[expect(
    clippy::module_name_repetitions,
    reason = "Re-exported at the crate root, where `Schema` alone would be ambiguous."
)]
pub type BookSchema = Schema<Query, Mutation, EmptySubscription>;

/// The GraphQL representation of a [`Book`].
#[derive(SimpleObject, Clone, Debug, PartialEq, Eq)]
#[graphql(name = "Book")]
pub struct BookObject {
    /// The person who authored the book.
    pub author: Option<String>,
    /// Unique identifier of the book.
    pub id: i32,
    /// Number of copies in stock.
    pub inventory: Option<i32>,
    /// The title of the book.
    pub title: Option<String>,
}

impl From<Book> for BookObject {
    #[inline]
    fn from(book: Book) -> Self {
        Self {
            author: Some(book.author),
            id: book.id,
            inventory: Some(book.inventory),
            title: Some(book.title),
        }
    }
}

/// Root of the read operations.
#[derive(Debug)]
pub struct Query {
    /// The books being served.
    store: BookStore,
}

#[Object]
impl Query {
    /// The book with the given identifier, or `null` if there is none.
    async fn book(&self, id: i32) -> Option<BookObject> {
        self.store.get(id).map(BookObject::from)
    }

    /// Every book, in insertion order.
    async fn books(&self) -> Option<Vec<Option<BookObject>>> {
        Some(
            self.store
                .list()
                .into_iter()
                .map(|book| Some(book.into()))
                .collect(),
        )
    }
}

/// Root of the write operations. Each one resolves to `null` and reports an error if the
/// identifier is unknown.
#[derive(Debug)]
pub struct Mutation {
    /// The books being served.
    store: BookStore,
}

#[Object]
impl Mutation {
    /// Adds one copy to the inventory of a book.
    #[allow(clippy::unused_async, reason = "Resolvers are driven by the GraphQL executor.")]
    async fn increase_inventory(&self, ctx: &Context<'_>, id: i32) -> Option<BookObject> {
        report(ctx, self.store.increase_inventory(id))
    }

    /// Replaces the author of a book.
    #[allow(clippy::unused_async, reason = "Resolvers are driven by the GraphQL executor.")]
    async fn update_author(
        &self,
        ctx: &Context<'_>,
        id: i32,
        author: String,
    ) -> Option<BookObject> {
        report(ctx, self.store.update_author(id, author))
    }

    /// Replaces the title of a book.
    #[allow(clippy::unused_async, reason = "Resolvers are driven by the GraphQL executor.")]
    async fn update_title(&self, ctx: &Context<'_>, id: i32, title: String) -> Option<BookObject> {
        report(ctx, self.store.update_title(id, title))
    }
}

/// Turns the outcome of a store mutation into a nullable field value. A failure is recorded in
/// the response's `errors`, at the path of the current field, and the field resolves to `null`.
///
/// Returning the error from the resolver instead would drop the field from `data` altogether.
fn report(ctx: &Context<'_>, outcome: Result<Book, StoreError>) -> Option<BookObject> {
    match outcome {
        Ok(book) => Some(book.into()),
        Err(err) => {
            let error = Error::new(err.to_string()).into_server_error(ctx.item.pos);
            ctx.add_error(ctx.set_error_path(error));
            None
        },
    }
}

/// Assembles the schema over `store`.
#[inline]
#[must_use]
pub fn build(store: BookStore) -> BookSchema {
    let query = Query {
        store: store.clone(),
    };
    let mutation = Mutation { store };
    Schema::new(query, mutation, EmptySubscription)
}
