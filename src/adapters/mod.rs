pub mod competitive;
pub mod resources;

pub use competitive::StaticCompetitiveIntel;
pub use resources::StaticImplementationCatalog;
