pub mod assistant;
pub mod enhance;
pub mod extract;
pub mod narrative;
pub mod processor;
pub mod qualify;
pub mod worksheet;

pub use crate::domain::model::{ExtractedInfo, PovWorksheet, QualificationResult, TechStack};
pub use crate::domain::ports::{CompetitiveIntel, ImplementationCatalog};
pub use crate::utils::error::Result;
pub use processor::PovProcessor;
