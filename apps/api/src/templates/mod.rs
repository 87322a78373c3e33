// Template Catalog: the static palettes a portfolio can be rendered with.

pub mod catalog;
pub mod handlers;
pub mod models;

pub use catalog::TemplateCatalog;
