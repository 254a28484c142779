//! Core library for AuraIO onboarding.
//!
//! Contains the lead intake schema and its normalization rules, the intake
//! service that forwards validated leads to the store, the lead form value
//! object used by the presentation layer, and the static marketing content
//! shown on the landing page. This crate depends on `auraio-storage` for the
//! [`LeadStore`](auraio_storage::LeadStore) trait and knows nothing about
//! HTTP.

pub mod content;
pub mod error;
pub mod form;
pub mod intake;
pub mod lead;
