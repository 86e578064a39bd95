//! Storefront Application Service
//!
//! Validates request bodies and orchestrates the repository and payment ports.
//! Contains NO infrastructure logic - pure business orchestration.

use chrono::Utc;

use shop_types::domain::review::{MAX_RATING, MIN_RATING};
use shop_types::{
    AddCartItemRequest, AddReviewRequest, AddUserRequest, AddUserResponse, AppError, Article,
    AssignCartUserRequest, Cart, CartLineDetail, CheckoutOrder, CheckoutRequest, CheckoutSession,
    Collection, Discount, DiscountCodeRequest, GetUserRequest, IdRequest, Image, Item,
    NewCartLine, NewReview, NewUser, PaymentGateway, Review, StoreRepository, Topic,
    UpdateCartAmountRequest, UpdateCartVariantRequest, User, Variant, WriteResult, required,
};

/// Application service for the storefront.
///
/// Generic over the storage adapter `R` and the payment adapter `P`, both
/// injected at compile time so tests can swap in in-memory doubles.
pub struct ShopService<R: StoreRepository, P: PaymentGateway> {
    repo: R,
    payments: P,
}

/// Turns an empty listing into `NotFound(message)`.
fn non_empty<T>(rows: Vec<T>, message: &str) -> Result<Vec<T>, AppError> {
    if rows.is_empty() {
        Err(AppError::NotFound(message.to_string()))
    } else {
        Ok(rows)
    }
}

fn found<T>(row: Option<T>, message: &str) -> Result<T, AppError> {
    row.ok_or_else(|| AppError::NotFound(message.to_string()))
}

impl<R: StoreRepository, P: PaymentGateway> ShopService<R, P> {
    /// Creates a new service over the given adapters.
    pub fn new(repo: R, payments: P) -> Self {
        Self { repo, payments }
    }

    /// Returns a reference to the underlying repository.
    pub fn repo(&self) -> &R {
        &self.repo
    }

    /// Returns a reference to the payment adapter.
    pub fn payments(&self) -> &P {
        &self.payments
    }

    // ─────────────────────────────────────────────────────────────────────────────
    // Users & discounts
    // ─────────────────────────────────────────────────────────────────────────────

    /// Registers a customer. Every field is optional.
    pub async fn add_user(&self, req: AddUserRequest) -> Result<AddUserResponse, AppError> {
        let user_pk = self
            .repo
            .create_user(NewUser {
                name: req.name,
                surname: req.surname,
                phone: req.phone,
                email: req.email,
                state: req.state,
                country: req.country,
                postcode: req.postcode,
                address: req.address,
            })
            .await?;

        tracing::info!(user_pk, "User registered");
        Ok(AddUserResponse {
            status: "ok".to_string(),
            inserted_id: user_pk,
        })
    }

    pub async fn get_user(&self, req: GetUserRequest) -> Result<User, AppError> {
        let user_pk = required(req.user_id, "Missing userId")?;
        found(self.repo.get_user(user_pk).await?, "User not found")
    }

    /// Looks up a discount code; inactive codes are reported as not found.
    pub async fn check_discount(&self, req: DiscountCodeRequest) -> Result<Discount, AppError> {
        let code = required(req.code, "Missing code")?;
        let discount = found(self.repo.find_discount(&code).await?, "Code not found")?;

        if !discount.is_active {
            return Err(AppError::NotFound(
                "Code is not active at this time".into(),
            ));
        }
        Ok(discount)
    }

    // ─────────────────────────────────────────────────────────────────────────────
    // Reviews
    // ─────────────────────────────────────────────────────────────────────────────

    pub async fn list_reviews(&self, req: IdRequest) -> Result<Vec<Review>, AppError> {
        let item_pk = required(req.id, "Missing item id")?;
        non_empty(
            self.repo.list_reviews_for_item(item_pk).await?,
            "No reviews found for this item",
        )
    }

    /// Stores a review.
    ///
    /// Only customers whose record carries the `sale` flag may review, and
    /// only once per item.
    pub async fn add_review(&self, req: AddReviewRequest) -> Result<WriteResult, AppError> {
        let name = required(req.name, "Missing name")?;
        let email = required(req.email, "Missing email")?;
        let rating = required(req.rating, "Missing rating")?;
        let description = required(req.des, "Missing description")?;
        let item_fk = required(req.item_fk, "Missing item_fk")?;

        if !(MIN_RATING..=MAX_RATING).contains(&rating) {
            return Err(AppError::BadRequest(format!(
                "Rating must be between {} and {}",
                MIN_RATING, MAX_RATING
            )));
        }

        let user = found(
            self.repo.find_user_by_email(&email).await?,
            "Please use the email you purchased the product with.",
        )?;
        if !user.sale {
            return Err(AppError::Conflict(
                "You need to purchase the product before adding a review.".into(),
            ));
        }

        if self.repo.find_review(&email, item_fk).await?.is_some() {
            return Err(AppError::Conflict(
                "You have already submitted a review for this item".into(),
            ));
        }

        let result = self
            .repo
            .create_review(NewReview {
                name,
                email,
                rating,
                description,
                item_fk,
                date: Utc::now().naive_utc(),
            })
            .await?;

        tracing::info!(item_fk, rating_pk = ?result.insert_id, "Review stored");
        Ok(result)
    }

    // ─────────────────────────────────────────────────────────────────────────────
    // Content
    // ─────────────────────────────────────────────────────────────────────────────

    pub async fn get_article(&self, req: IdRequest) -> Result<Article, AppError> {
        let article_pk = required(req.id, "Missing article id")?;
        found(self.repo.get_article(article_pk).await?, "Article not found")
    }

    pub async fn list_articles_for_topic(&self, req: IdRequest) -> Result<Vec<Article>, AppError> {
        let topic_pk = required(req.id, "Missing topic id")?;
        non_empty(
            self.repo.list_articles_for_topic(topic_pk).await?,
            "No articles found for this topic",
        )
    }

    pub async fn list_topics(&self) -> Result<Vec<Topic>, AppError> {
        non_empty(self.repo.list_topics().await?, "No topics found")
    }

    // ─────────────────────────────────────────────────────────────────────────────
    // Catalog
    // ─────────────────────────────────────────────────────────────────────────────

    pub async fn get_collection(&self, req: IdRequest) -> Result<Collection, AppError> {
        let collection_pk = required(req.id, "Missing id")?;
        found(
            self.repo.get_collection(collection_pk).await?,
            "Collection not found",
        )
    }

    pub async fn list_collections(&self) -> Result<Vec<Collection>, AppError> {
        non_empty(self.repo.list_collections().await?, "No collections found")
    }

    pub async fn get_item(&self, req: IdRequest) -> Result<Item, AppError> {
        let item_pk = required(req.id, "Missing id")?;
        found(self.repo.get_item(item_pk).await?, "Item not found")
    }

    pub async fn list_items(&self) -> Result<Vec<Item>, AppError> {
        non_empty(self.repo.list_items().await?, "No items found")
    }

    pub async fn list_items_in_collection(&self, req: IdRequest) -> Result<Vec<Item>, AppError> {
        let collection_pk = required(req.id, "Missing id")?;
        non_empty(
            self.repo.list_items_in_collection(collection_pk).await?,
            "No items found in this collection",
        )
    }

    pub async fn get_variant(&self, req: IdRequest) -> Result<Variant, AppError> {
        let variant_pk = required(req.id, "Missing id")?;
        found(self.repo.get_variant(variant_pk).await?, "Variant not found")
    }

    /// Variants of an item; an item without variants yields an empty list.
    pub async fn list_variants(&self, req: IdRequest) -> Result<Vec<Variant>, AppError> {
        let item_pk = required(req.id, "Missing id")?;
        Ok(self.repo.list_variants(item_pk).await?)
    }

    pub async fn list_variant_images(&self, req: IdRequest) -> Result<Vec<Image>, AppError> {
        let variant_pk = required(req.id, "Missing id")?;
        Ok(self.repo.list_variant_images(variant_pk).await?)
    }

    // ─────────────────────────────────────────────────────────────────────────────
    // Carts
    // ─────────────────────────────────────────────────────────────────────────────

    pub async fn get_cart_for_user(&self, req: IdRequest) -> Result<Cart, AppError> {
        let user_fk = required(req.id, "Missing id")?;
        found(
            self.repo.get_cart_for_user(user_fk).await?,
            "Cart not found",
        )
    }

    pub async fn get_cart(&self, req: IdRequest) -> Result<Cart, AppError> {
        let cart_pk = required(req.id, "Missing id")?;
        found(self.repo.get_cart(cart_pk).await?, "Cart not found")
    }

    /// Opens an anonymous cart stamped with the current time.
    pub async fn create_cart(&self) -> Result<WriteResult, AppError> {
        let result = self.repo.create_cart().await?;
        tracing::info!(cart_pk = ?result.insert_id, "Cart created");
        Ok(result)
    }

    pub async fn assign_cart_user(&self, req: AssignCartUserRequest) -> Result<WriteResult, AppError> {
        let cart_pk = required(req.id, "Missing id")?;
        let user_fk = required(req.user_fk, "Missing user fk")?;
        Ok(self.repo.assign_cart_user(cart_pk, user_fk).await?)
    }

    /// Adds an item to a cart. An item appears at most once per cart.
    pub async fn add_cart_item(&self, req: AddCartItemRequest) -> Result<WriteResult, AppError> {
        let cart_fk = required(req.id, "Missing id")?;
        let item_fk = required(req.item_fk, "Missing item fk")?;
        let amount = required(req.quantity, "Missing quantity")?;
        let variant_fk = required(req.variant, "Missing variant")?;

        if amount < 0 {
            return Err(AppError::BadRequest("Quantity must be positive".into()));
        }

        if self.repo.find_cart_line(cart_fk, item_fk).await?.is_some() {
            return Err(AppError::Conflict("Item already in cart".into()));
        }

        Ok(self
            .repo
            .add_cart_line(NewCartLine {
                cart_fk,
                item_fk,
                variant_fk,
                amount,
            })
            .await?)
    }

    pub async fn remove_cart_item(&self, req: IdRequest) -> Result<WriteResult, AppError> {
        let line_pk = required(req.id, "Missing id")?;
        Ok(self.repo.remove_cart_line(line_pk).await?)
    }

    /// Lines of a cart joined with their item and variant; may be empty.
    pub async fn list_cart_items(&self, req: IdRequest) -> Result<Vec<CartLineDetail>, AppError> {
        let cart_fk = required(req.id, "Missing id")?;
        Ok(self.repo.list_cart_lines(cart_fk).await?)
    }

    pub async fn update_cart_variant(
        &self,
        req: UpdateCartVariantRequest,
    ) -> Result<WriteResult, AppError> {
        let line_pk = required(req.id, "Missing id")?;
        let variant_fk = required(req.variant, "Missing variant")?;
        Ok(self.repo.set_cart_line_variant(line_pk, variant_fk).await?)
    }

    pub async fn update_cart_amount(
        &self,
        req: UpdateCartAmountRequest,
    ) -> Result<WriteResult, AppError> {
        let line_pk = required(req.id, "Missing id")?;
        let amount = required(req.amount, "Missing amount")?;

        if amount < 0 {
            return Err(AppError::BadRequest("Amount must be positive".into()));
        }

        Ok(self.repo.set_cart_line_amount(line_pk, amount).await?)
    }

    // ─────────────────────────────────────────────────────────────────────────────
    // Checkout
    // ─────────────────────────────────────────────────────────────────────────────

    /// Creates a hosted checkout session for `price` (currency units).
    pub async fn create_checkout_session(
        &self,
        req: CheckoutRequest,
    ) -> Result<CheckoutSession, AppError> {
        let price = required(req.price, "Missing price or orderId")?;
        let order_id = required(req.order_id, "Missing price or orderId")?;

        // Sub-cent prices round to zero minor units and are refused here too.
        let order = CheckoutOrder::from_price(order_id, price);
        if !price.is_finite() || order.amount_minor <= 0 {
            return Err(AppError::BadRequest("Price must be a positive amount".into()));
        }
        let session = self.payments.create_checkout_session(&order).await?;

        tracing::info!(order_id = %order.order_id, session_id = %session.id, "Checkout session created");
        Ok(session)
    }
}
