//! Rendering for the status site's three surfaces.
//!
//! - [`page`] generates the HTML page with maud (compile-time templates,
//!   automatic escaping of venue names and URLs)
//! - [`card`] composes the 1200×630 social preview image as an in-memory
//!   SVG and rasterizes it to PNG with resvg
//!
//! Both consume `dtcle_core::Severity` for every tier-dependent token, so
//! the surfaces cannot drift apart.

pub mod card;
pub mod page;
