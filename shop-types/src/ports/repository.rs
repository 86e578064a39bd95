//! Repository port trait.
//!
//! This is the primary port in our hexagonal architecture.
//! Adapters (MySQL, SQLite, in-memory mocks) implement this trait.

use crate::domain::{
    Article, Cart, CartLine, CartLineDetail, Collection, Discount, Image, Item, NewCartLine,
    NewReview, NewUser, Review, Topic, User, Variant, WriteResult,
};
use crate::error::RepoError;

/// The storage port for every storefront operation.
///
/// Lookups return `Ok(None)` / an empty `Vec` when nothing matches; deciding
/// whether that is an error is left to the service.
#[async_trait::async_trait]
pub trait StoreRepository: Send + Sync + 'static {
    // ─────────────────────────────────────────────────────────────────────────────
    // Users
    // ─────────────────────────────────────────────────────────────────────────────

    /// Inserts a customer and returns the generated `user_pk`.
    async fn create_user(&self, user: NewUser) -> Result<i64, RepoError>;

    async fn get_user(&self, user_pk: i64) -> Result<Option<User>, RepoError>;

    /// First customer registered with `email`.
    async fn find_user_by_email(&self, email: &str) -> Result<Option<User>, RepoError>;

    // ─────────────────────────────────────────────────────────────────────────────
    // Catalog
    // ─────────────────────────────────────────────────────────────────────────────

    async fn get_item(&self, item_pk: i64) -> Result<Option<Item>, RepoError>;

    async fn list_items(&self) -> Result<Vec<Item>, RepoError>;

    /// Items linked to a collection through `item_to_collection`.
    async fn list_items_in_collection(&self, collection_pk: i64) -> Result<Vec<Item>, RepoError>;

    async fn get_variant(&self, variant_pk: i64) -> Result<Option<Variant>, RepoError>;

    async fn list_variants(&self, item_pk: i64) -> Result<Vec<Variant>, RepoError>;

    /// Images linked to a variant through `image_to_variant`.
    async fn list_variant_images(&self, variant_pk: i64) -> Result<Vec<Image>, RepoError>;

    async fn get_collection(&self, collection_pk: i64) -> Result<Option<Collection>, RepoError>;

    async fn list_collections(&self) -> Result<Vec<Collection>, RepoError>;

    // ─────────────────────────────────────────────────────────────────────────────
    // Content
    // ─────────────────────────────────────────────────────────────────────────────

    async fn get_article(&self, article_pk: i64) -> Result<Option<Article>, RepoError>;

    /// Articles tagged with a topic through `article_to_topic`.
    async fn list_articles_for_topic(&self, topic_pk: i64) -> Result<Vec<Article>, RepoError>;

    async fn list_topics(&self) -> Result<Vec<Topic>, RepoError>;

    // ─────────────────────────────────────────────────────────────────────────────
    // Discounts & reviews
    // ─────────────────────────────────────────────────────────────────────────────

    async fn find_discount(&self, code: &str) -> Result<Option<Discount>, RepoError>;

    /// Reviews linked to an item through `rating_to_item`.
    async fn list_reviews_for_item(&self, item_pk: i64) -> Result<Vec<Review>, RepoError>;

    /// The review `email` left for `item_fk`, if any.
    async fn find_review(&self, email: &str, item_fk: i64) -> Result<Option<Review>, RepoError>;

    /// Inserts the review and its `rating_to_item` link.
    ///
    /// MUST be atomic: either both rows are written or neither is.
    async fn create_review(&self, review: NewReview) -> Result<WriteResult, RepoError>;

    // ─────────────────────────────────────────────────────────────────────────────
    // Carts
    // ─────────────────────────────────────────────────────────────────────────────

    /// Creates an empty, anonymous cart.
    async fn create_cart(&self) -> Result<WriteResult, RepoError>;

    async fn get_cart(&self, cart_pk: i64) -> Result<Option<Cart>, RepoError>;

    /// First cart owned by `user_fk`.
    async fn get_cart_for_user(&self, user_fk: i64) -> Result<Option<Cart>, RepoError>;

    async fn assign_cart_user(&self, cart_pk: i64, user_fk: i64)
    -> Result<WriteResult, RepoError>;

    /// The line holding `item_fk` in `cart_fk`, if any.
    async fn find_cart_line(
        &self,
        cart_fk: i64,
        item_fk: i64,
    ) -> Result<Option<CartLine>, RepoError>;

    async fn add_cart_line(&self, line: NewCartLine) -> Result<WriteResult, RepoError>;

    async fn remove_cart_line(&self, line_pk: i64) -> Result<WriteResult, RepoError>;

    /// Lines of a cart joined with their item and variant.
    async fn list_cart_lines(&self, cart_fk: i64) -> Result<Vec<CartLineDetail>, RepoError>;

    async fn set_cart_line_variant(
        &self,
        line_pk: i64,
        variant_fk: i64,
    ) -> Result<WriteResult, RepoError>;

    async fn set_cart_line_amount(
        &self,
        line_pk: i64,
        amount: i64,
    ) -> Result<WriteResult, RepoError>;
}
