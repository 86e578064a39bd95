//! # Shop Hex
//!
//! Application service layer and HTTP adapter for the storefront backend.
//!
//! ## Architecture
//!
//! - `service` - Application service (validation and orchestration)
//! - `inbound/` - HTTP adapter (Axum server)
//! - `openapi` - OpenAPI document served at `/api-docs/openapi.json`
//!
//! The service is generic over `R: StoreRepository` and `P: PaymentGateway`,
//! allowing different adapters to be injected.

pub mod inbound;
pub mod openapi;
pub mod service;

#[cfg(test)]
mod service_tests;

pub use service::ShopService;
