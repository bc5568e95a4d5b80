//! One module per backend REST resource, each contributing its own
//! `impl Api` block with the typed operations for that resource.
//!
//! Financial resources (quotations, consultations, sales) are soft-deleted
//! through a status PATCH; catalog resources (doctors, users, products,
//! services, specialties) use a physical DELETE.

mod auth;
mod cash;
mod consultations;
mod doctors;
mod products;
mod quotations;
mod reports;
mod sales;
mod services;
mod specialties;
mod users;
