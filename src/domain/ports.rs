use crate::domain::model::{CompetitiveReport, ImplementationGuides, TechStack};
use crate::utils::error::Result;
use async_trait::async_trait;

/// Competitor-lookup service keyed by detected competitor names.
#[async_trait]
pub trait CompetitiveIntel: Send + Sync {
    async fn competitive_advantages(&self, competitors: &[String]) -> Result<CompetitiveReport>;
}

/// Setup-documentation lookup keyed by detected tech-stack values.
#[async_trait]
pub trait ImplementationCatalog: Send + Sync {
    async fn implementation_guides(&self, stack: &TechStack) -> Result<ImplementationGuides>;
}
