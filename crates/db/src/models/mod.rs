//! Domain model structs and DTOs.
//!
//! Each submodule contains:
//! - A `FromRow` + `Serialize` entity struct matching the canonical row
//! - A translation row type implementing `Translated`
//! - A graph struct carrying JSON-aggregated translations/relations
//! - A flat, locale-resolved view struct plus its `project` method
//! - `Deserialize` create/update DTOs for the admin surface

pub mod education;
pub mod experience;
pub mod post;
pub mod project;
pub mod skill;
pub mod taxonomy;
pub mod testimonial;
