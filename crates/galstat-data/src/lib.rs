pub mod catalog;
pub mod pipeline;
pub mod synthetic;

pub use catalog::{CatalogSchema, GalaxyRecord, Morphology, Population};
pub use pipeline::{
    AnalysisConfig, AnalysisPipeline, AnalysisReport, PopulationTrend, RedshiftCorrelation,
    TypeComparison,
};
pub use synthetic::{generate_synthetic_galaxies, write_catalog_csv};
