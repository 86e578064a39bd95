//! OpenAPI document for the storefront API.

#![allow(dead_code)] // Path functions are only used by utoipa for documentation generation

use shop_types::domain::{
    Article, Cart, CartLineDetail, Collection, Discount, Image, Item, Review, Topic, User,
    Variant, WriteResult,
};
use shop_types::dto::{
    AddCartItemRequest, AddReviewRequest, AddUserRequest, AddUserResponse,
    AssignCartUserRequest, CheckoutRequest, CheckoutResponse, DiscountCodeRequest,
    GetUserRequest, IdRequest, UpdateCartAmountRequest, UpdateCartVariantRequest,
};
use utoipa::OpenApi;

// Dummy functions to generate path documentation
// These are not the actual handlers, just for OpenAPI path generation

/// Health check endpoint
#[utoipa::path(
    get,
    path = "/health",
    tag = "health",
    responses(
        (status = 200, description = "Service is healthy", body = inline(serde_json::Value), example = json!({"status": "healthy"}))
    )
)]
async fn health() {}

// ─────────────────────────────────────────────────────────────────────────────
// Checkout
// ─────────────────────────────────────────────────────────────────────────────

/// Redirect the browser to a hosted checkout page
#[utoipa::path(
    get,
    path = "/buy",
    tag = "checkout",
    params(
        ("price" = f64, Query, description = "Order total in currency units"),
        ("orderId" = String, Query, description = "Client order reference")
    ),
    responses(
        (status = 302, description = "Redirect to the checkout session URL"),
        (status = 400, description = "Missing price or orderId", body = String),
        (status = 500, description = "Payment processor error", body = String)
    )
)]
async fn buy() {}

/// Create a hosted checkout session
#[utoipa::path(
    post,
    path = "/api/create-checkout-session",
    tag = "checkout",
    request_body = CheckoutRequest,
    responses(
        (status = 200, description = "Checkout session created", body = CheckoutResponse),
        (status = 400, description = "Missing price or orderId"),
        (status = 500, description = "Payment processor error")
    )
)]
async fn create_checkout_session() {}

// ─────────────────────────────────────────────────────────────────────────────
// Users, discounts & reviews
// ─────────────────────────────────────────────────────────────────────────────

/// Register a customer
#[utoipa::path(
    post,
    path = "/api/add_user",
    tag = "users",
    request_body = AddUserRequest,
    responses(
        (status = 200, description = "Customer stored", body = AddUserResponse),
        (status = 404, description = "Database error")
    )
)]
async fn add_user() {}

/// Get a customer by id
#[utoipa::path(
    post,
    path = "/api/get/user",
    tag = "users",
    request_body = GetUserRequest,
    responses(
        (status = 200, description = "Customer", body = User),
        (status = 400, description = "Missing userId"),
        (status = 404, description = "User not found")
    )
)]
async fn get_user() {}

/// Check a discount code
#[utoipa::path(
    post,
    path = "/api/check/discount",
    tag = "discounts",
    request_body = DiscountCodeRequest,
    responses(
        (status = 200, description = "Active discount", body = Discount),
        (status = 400, description = "Missing code"),
        (status = 404, description = "Code not found or not active")
    )
)]
async fn check_discount() {}

/// List the reviews of an item
#[utoipa::path(
    post,
    path = "/api/get/ratings",
    tag = "reviews",
    request_body = IdRequest,
    responses(
        (status = 200, description = "Reviews of the item", body = Vec<Review>),
        (status = 400, description = "Missing item id"),
        (status = 404, description = "No reviews")
    )
)]
async fn get_ratings() {}

/// Submit a review (customers with a completed purchase only)
#[utoipa::path(
    post,
    path = "/api/set/add_review",
    tag = "reviews",
    request_body = AddReviewRequest,
    responses(
        (status = 200, description = "Review stored", body = WriteResult),
        (status = 400, description = "Missing or invalid field"),
        (status = 404, description = "Unknown email, no purchase, or already reviewed")
    )
)]
async fn add_review() {}

// ─────────────────────────────────────────────────────────────────────────────
// Content
// ─────────────────────────────────────────────────────────────────────────────

/// Get an article by id
#[utoipa::path(
    post,
    path = "/api/get/article",
    tag = "content",
    request_body = IdRequest,
    responses(
        (status = 200, description = "Article", body = Article),
        (status = 404, description = "Article not found")
    )
)]
async fn get_article() {}

/// List the articles tagged with a topic
#[utoipa::path(
    post,
    path = "/api/get/article_topic",
    tag = "content",
    request_body = IdRequest,
    responses(
        (status = 200, description = "Articles", body = Vec<Article>),
        (status = 404, description = "No articles for the topic")
    )
)]
async fn get_article_topic() {}

/// List all topics
#[utoipa::path(
    post,
    path = "/api/get/topics",
    tag = "content",
    responses(
        (status = 200, description = "Topics", body = Vec<Topic>),
        (status = 404, description = "No topics")
    )
)]
async fn get_topics() {}

// ─────────────────────────────────────────────────────────────────────────────
// Catalog
// ─────────────────────────────────────────────────────────────────────────────

/// Get a collection by id
#[utoipa::path(
    post,
    path = "/api/get/collection",
    tag = "catalog",
    request_body = IdRequest,
    responses(
        (status = 200, description = "Collection", body = Collection),
        (status = 404, description = "Collection not found")
    )
)]
async fn get_collection() {}

/// List all collections
#[utoipa::path(
    post,
    path = "/api/get/collections",
    tag = "catalog",
    responses(
        (status = 200, description = "Collections", body = Vec<Collection>),
        (status = 404, description = "No collections")
    )
)]
async fn get_collections() {}

/// Get an item by id
#[utoipa::path(
    post,
    path = "/api/get/item",
    tag = "catalog",
    request_body = IdRequest,
    responses(
        (status = 200, description = "Item", body = Item),
        (status = 404, description = "Item not found")
    )
)]
async fn get_item() {}

/// List all items
#[utoipa::path(
    post,
    path = "/api/get/items",
    tag = "catalog",
    responses(
        (status = 200, description = "Items", body = Vec<Item>),
        (status = 404, description = "No items")
    )
)]
async fn get_items() {}

/// List the items of a collection
#[utoipa::path(
    post,
    path = "/api/get/items_collection",
    tag = "catalog",
    request_body = IdRequest,
    responses(
        (status = 200, description = "Items", body = Vec<Item>),
        (status = 404, description = "No items in the collection")
    )
)]
async fn get_items_collection() {}

/// Get a variant by id
#[utoipa::path(
    post,
    path = "/api/get/variant",
    tag = "catalog",
    request_body = IdRequest,
    responses(
        (status = 200, description = "Variant", body = Variant),
        (status = 404, description = "Variant not found")
    )
)]
async fn get_variant() {}

/// List the variants of an item
#[utoipa::path(
    post,
    path = "/api/get/variants",
    tag = "catalog",
    request_body = IdRequest,
    responses(
        (status = 200, description = "Variants, possibly empty", body = Vec<Variant>)
    )
)]
async fn get_variants() {}

/// List the images of a variant
#[utoipa::path(
    post,
    path = "/api/get/variant_image",
    tag = "catalog",
    request_body = IdRequest,
    responses(
        (status = 200, description = "Images, possibly empty", body = Vec<Image>)
    )
)]
async fn get_variant_image() {}

// ─────────────────────────────────────────────────────────────────────────────
// Carts
// ─────────────────────────────────────────────────────────────────────────────

/// Get the cart owned by a user
#[utoipa::path(
    post,
    path = "/api/get/cart_user",
    tag = "carts",
    request_body = IdRequest,
    responses(
        (status = 200, description = "Cart", body = Cart),
        (status = 404, description = "Cart not found")
    )
)]
async fn get_cart_user() {}

/// Get a cart by id
#[utoipa::path(
    post,
    path = "/api/get/cart",
    tag = "carts",
    request_body = IdRequest,
    responses(
        (status = 200, description = "Cart", body = Cart),
        (status = 404, description = "Cart not found")
    )
)]
async fn get_cart() {}

/// Open an anonymous cart
#[utoipa::path(
    post,
    path = "/api/add/cart",
    tag = "carts",
    responses(
        (status = 200, description = "Cart created", body = WriteResult)
    )
)]
async fn add_cart() {}

/// Assign a cart to a user
#[utoipa::path(
    post,
    path = "/api/add/cart_user",
    tag = "carts",
    request_body = AssignCartUserRequest,
    responses(
        (status = 200, description = "Cart updated", body = WriteResult)
    )
)]
async fn add_cart_user() {}

/// Put an item into a cart
#[utoipa::path(
    post,
    path = "/api/add/cart_item",
    tag = "carts",
    request_body = AddCartItemRequest,
    responses(
        (status = 200, description = "Line added", body = WriteResult),
        (status = 404, description = "Item already in cart")
    )
)]
async fn add_cart_item() {}

/// Remove a cart line
#[utoipa::path(
    post,
    path = "/api/rm/cart_item",
    tag = "carts",
    request_body = IdRequest,
    responses(
        (status = 200, description = "Line removed", body = WriteResult)
    )
)]
async fn rm_cart_item() {}

/// List the lines of a cart with item and variant details
#[utoipa::path(
    post,
    path = "/api/get/cart_items",
    tag = "carts",
    request_body = IdRequest,
    responses(
        (status = 200, description = "Cart lines, possibly empty", body = Vec<CartLineDetail>)
    )
)]
async fn get_cart_items() {}

/// Change the variant of a cart line
#[utoipa::path(
    post,
    path = "/api/update/cart_variant",
    tag = "carts",
    request_body = UpdateCartVariantRequest,
    responses(
        (status = 200, description = "Line updated", body = WriteResult)
    )
)]
async fn update_cart_variant() {}

/// Change the amount of a cart line
#[utoipa::path(
    post,
    path = "/api/update/cart_amount",
    tag = "carts",
    request_body = UpdateCartAmountRequest,
    responses(
        (status = 200, description = "Line updated", body = WriteResult)
    )
)]
async fn update_cart_amount() {}

/// OpenAPI documentation for the storefront API.
#[derive(OpenApi)]
#[openapi(
    info(
        title = "Storefront API",
        version = "1.0.0",
        description = "Catalog, cart, review and checkout endpoints of the storefront backend.\n\nRequest ids may be sent as JSON numbers or numeric strings. Missing fields answer `400 {\"status\": 0, \"message\": ...}`; lookups that match nothing answer `404 {\"message\": ...}`.",
    ),
    paths(
        health,
        buy,
        create_checkout_session,
        add_user,
        get_user,
        check_discount,
        get_ratings,
        add_review,
        get_article,
        get_article_topic,
        get_topics,
        get_collection,
        get_collections,
        get_item,
        get_items,
        get_items_collection,
        get_variant,
        get_variants,
        get_variant_image,
        get_cart_user,
        get_cart,
        add_cart,
        add_cart_user,
        add_cart_item,
        rm_cart_item,
        get_cart_items,
        update_cart_variant,
        update_cart_amount,
    ),
    components(
        schemas(
            IdRequest,
            GetUserRequest,
            DiscountCodeRequest,
            AddUserRequest,
            AddUserResponse,
            AddReviewRequest,
            AddCartItemRequest,
            AssignCartUserRequest,
            UpdateCartVariantRequest,
            UpdateCartAmountRequest,
            CheckoutRequest,
            CheckoutResponse,
            User,
            Item,
            Variant,
            Image,
            Collection,
            Cart,
            CartLineDetail,
            Review,
            Article,
            Topic,
            Discount,
            WriteResult,
        )
    ),
    tags(
        (name = "health", description = "Health check endpoints"),
        (name = "checkout", description = "Hosted checkout sessions"),
        (name = "users", description = "Customer records"),
        (name = "discounts", description = "Discount codes"),
        (name = "reviews", description = "Item reviews"),
        (name = "content", description = "Articles and topics"),
        (name = "catalog", description = "Items, variants and collections"),
        (name = "carts", description = "Shopping carts and their lines"),
    )
)]
pub struct ApiDoc;
