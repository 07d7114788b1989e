//! Pure domain logic: entities, identifiers, errors, configuration,
//! referential validation, and update-merge rules.

pub mod config;
pub mod entities;
pub mod errors;
pub mod ids;
pub mod merge;
pub mod validation;
