//! mmpgen: generate EPOC S60 build-project files for ScummVM application
//! variants.
//!
//! Each application UID yields one file-group (resource script, localisation
//! file, registration file, MMP project descriptor) named by the variant's
//! 1-based index, plus an entry in the shared `bld.inf` component index.

pub mod error;
pub mod generator;
pub mod render;
pub mod templates;

pub use error::AppError;
pub use generator::generate;
pub use render::VariantContext;
pub use templates::ProjectTemplate;
