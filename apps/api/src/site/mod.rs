// Site Generator: PortfolioRecord + Template → standalone HTML document or ZIP bundle.
// Pure and stateless. No storage or network access happens below this module's
// handlers; the clock is the only injected dependency.

pub mod archive;
pub mod assembler;
pub mod clock;
pub mod download;
pub mod handlers;
pub mod markup;
pub mod sections;
pub mod styles;

use thiserror::Error;

pub use archive::build_archive;
pub use assembler::render_html;
pub use clock::{Clock, SystemClock};
pub use download::{portfolio_filename, ExportFormat};

#[derive(Debug, Error)]
pub enum GenerationError {
    /// The record violates a precondition the types cannot express.
    #[error("Invalid field '{field}': {reason}")]
    InvalidField { field: String, reason: String },

    #[error("Archive error: {0}")]
    Archive(#[from] zip::result::ZipError),

    #[error("I/O error while packaging: {0}")]
    Io(#[from] std::io::Error),
}
