pub mod constants;
pub mod cosmology;
pub mod derive;
pub mod error;
pub mod stats;

pub use cosmology::{AngularDiameterDistance, FlatLambdaCdm};
pub use derive::{
    linear_stellar_mass, linear_stellar_masses, physical_radius_kpc, stellar_surface_density,
    surface_densities, RadiusMode,
};
pub use error::{AnalysisError, AnalysisResult};
pub use stats::{
    mean, spearman_rank_correlation, standard_error, summarize, two_sample_t_test,
    CorrelationResult, SummaryStatistic, TTestKind, TTestResult,
};

#[cfg(test)]
mod tests;
