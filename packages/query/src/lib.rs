#![cfg_attr(feature = "fail-on-warnings", deny(warnings))]
#![warn(clippy::all, clippy::pedantic, clippy::nursery, clippy::cargo)]
#![allow(clippy::multiple_crate_versions, clippy::cargo_common_metadata)]

//! Free-text address query interpreter.
//!
//! Turns a partially-typed address such as `"45/15 breaker street main
//! beach"` into a backend-neutral query plan, and reconciles the hits
//! coming back from the two retrieval paths.
//!
//! # Architecture
//!
//! - [`street_types`]: the immutable street-type dictionary and its
//!   deterministic substring matcher.
//! - [`tokenizer`]: splits a raw query into flat number, street number,
//!   street name, street type and suburb.
//! - [`plan`]: maps the populated slots to one of a fixed set of match
//!   strategies, producing a [`plan::QueryPlan`] and a [`plan::SortSpec`].
//! - [`merge`]: de-duplicates and ranks structured and suggest hits.
//! - [`backend`]: the capability contract a search backend implements.
//!
//! Tokenizing and planning are total functions: no input string is ever
//! rejected. Only backend dispatch can fail.
//!
//! # Usage
//!
//! ```rust
//! use std::sync::Arc;
//!
//! use address_lookup_query::plan::{self, QueryPlan};
//! use address_lookup_query::street_types::StreetTypeDictionary;
//! use address_lookup_query::tokenizer::AddressTokenizer;
//!
//! let tokenizer = AddressTokenizer::new(Arc::new(StreetTypeDictionary::default()));
//! let tokens = tokenizer.tokenize("11 oyster cove promenade helensvale");
//! assert_eq!(tokens.street_type, "promenade");
//!
//! let (query, _sort) = plan::build(&tokens);
//! assert!(matches!(query, QueryPlan::And(ref clauses) if clauses.len() == 4));
//! ```

pub mod backend;
pub mod merge;
pub mod plan;
pub mod street_types;
pub mod tokenizer;

pub use address_lookup_models::{AddressHit, HitOrigin, ParsedAddressTokens};
pub use backend::{BackendError, SearchBackend};
