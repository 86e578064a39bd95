//! # Shop Types
//!
//! Domain rows, request DTOs and port traits for the storefront backend.
//! Nothing in here performs IO; adapters live in `shop-repo` and
//! `shop-stripe`.
//!
//! ## Architecture
//!
//! - `domain/` - Persisted rows (items, carts, reviews, ...) and checkout values
//! - `ports/` - Traits the storage and payment adapters implement
//! - `dto/` - Request and response bodies of the HTTP API
//! - `error/` - Repository, payment and application errors

pub mod domain;
pub mod dto;
pub mod error;
pub mod ports;

// Re-export commonly used types
pub use domain::{
    Article, Cart, CartLine, CartLineDetail, CheckoutOrder, CheckoutSession, Collection, Discount,
    Image, Item, NewCartLine, NewReview, NewUser, Review, Topic, User, Variant, WriteResult,
};
pub use dto::*;
pub use error::{AppError, PaymentError, RepoError};
pub use ports::{PaymentGateway, StoreRepository};
