//! Analysis pipeline: derives metric vectors, aggregates, compares
//!
//! Four analyses over a spiral/elliptical population pair. The pipeline owns
//! the configuration (radius unit convention, t-test kind) and the cosmology
//! model; the populations arrive as arguments, so there is no run-wide
//! mutable state. Spiral is always processed before elliptical so output
//! ordering is reproducible.

use crate::catalog::Population;
use galstat_core::cosmology::{AngularDiameterDistance, FlatLambdaCdm};
use galstat_core::derive::{
    linear_stellar_masses, physical_radius_kpc, surface_densities, RadiusMode,
};
use galstat_core::error::AnalysisResult;
use galstat_core::stats::{
    spearman_rank_correlation, summarize, two_sample_t_test, CorrelationResult, SummaryStatistic,
    TTestKind, TTestResult,
};

/// Pipeline configuration
#[derive(Clone, Copy, Debug)]
pub struct AnalysisConfig {
    pub radius_mode: RadiusMode,
    pub t_test: TTestKind,
}

impl Default for AnalysisConfig {
    fn default() -> Self {
        Self {
            radius_mode: RadiusMode::Angular,
            t_test: TTestKind::Student,
        }
    }
}

/// One metric compared across the two morphological types
#[derive(Clone, Debug)]
pub struct TypeComparison {
    pub metric: &'static str,
    pub unit: &'static str,
    pub spiral: SummaryStatistic,
    pub elliptical: SummaryStatistic,
    pub test: TTestResult,
}

/// Per-population surface density against redshift
#[derive(Clone, Debug)]
pub struct PopulationTrend {
    pub redshifts: Vec<f64>,
    pub densities: Vec<f64>,
    pub correlation: CorrelationResult,
}

/// Surface density vs redshift, both populations
#[derive(Clone, Debug)]
pub struct RedshiftCorrelation {
    pub unit: &'static str,
    pub spiral: PopulationTrend,
    pub elliptical: PopulationTrend,
}

/// All four analyses of one run
#[derive(Clone, Debug)]
pub struct AnalysisReport {
    pub surface_density: TypeComparison,
    pub mass: TypeComparison,
    pub radius: TypeComparison,
    pub density_redshift: RedshiftCorrelation,
}

/// Main analysis pipeline
pub struct AnalysisPipeline<M: AngularDiameterDistance> {
    config: AnalysisConfig,
    model: M,
}

impl AnalysisPipeline<FlatLambdaCdm> {
    pub fn with_defaults() -> Self {
        Self::new(AnalysisConfig::default(), FlatLambdaCdm::reference())
    }
}

impl<M: AngularDiameterDistance> AnalysisPipeline<M> {
    pub fn new(config: AnalysisConfig, model: M) -> Self {
        Self { config, model }
    }

    pub fn config(&self) -> AnalysisConfig {
        self.config
    }

    /// Radius vector in the configured unit
    fn radii(&self, population: &Population) -> AnalysisResult<Vec<f64>> {
        match self.config.radius_mode {
            RadiusMode::Angular => Ok(population.radii_arcsec()),
            RadiusMode::Physical => population
                .iter()
                .map(|r| physical_radius_kpc(r.redshift, r.radius_arcsec, &self.model))
                .collect(),
        }
    }

    fn radius_unit(&self) -> &'static str {
        match self.config.radius_mode {
            RadiusMode::Angular => "arcsec",
            RadiusMode::Physical => "kpc",
        }
    }

    fn density_unit(&self) -> &'static str {
        match self.config.radius_mode {
            RadiusMode::Angular => "M_sun/arcsec^2",
            RadiusMode::Physical => "M_sun/kpc^2",
        }
    }

    /// Surface density vector for one population in the configured unit
    fn densities(&self, population: &Population) -> AnalysisResult<Vec<f64>> {
        let masses = linear_stellar_masses(&population.log_masses());
        surface_densities(&masses, &self.radii(population)?)
    }

    fn compare(
        &self,
        metric: &'static str,
        unit: &'static str,
        spiral: Vec<f64>,
        elliptical: Vec<f64>,
    ) -> AnalysisResult<TypeComparison> {
        let spiral_summary = summarize(&spiral)?;
        let elliptical_summary = summarize(&elliptical)?;
        let test = two_sample_t_test(&spiral, &elliptical, self.config.t_test)?;

        tracing::info!(
            "{metric}: spiral mean {:.6e}, elliptical mean {:.6e}, p = {:.4e}",
            spiral_summary.mean,
            elliptical_summary.mean,
            test.p_value
        );

        Ok(TypeComparison {
            metric,
            unit,
            spiral: spiral_summary,
            elliptical: elliptical_summary,
            test,
        })
    }

    /// Mean stellar surface density per type, with a two-sample t-test
    pub fn surface_density_by_type(
        &self,
        spiral: &Population,
        elliptical: &Population,
    ) -> AnalysisResult<TypeComparison> {
        self.compare(
            "stellar surface density",
            self.density_unit(),
            self.densities(spiral)?,
            self.densities(elliptical)?,
        )
    }

    /// Mean stellar mass per type (solar masses), with a two-sample t-test
    pub fn mass_by_type(
        &self,
        spiral: &Population,
        elliptical: &Population,
    ) -> AnalysisResult<TypeComparison> {
        self.compare(
            "stellar mass",
            "M_sun",
            linear_stellar_masses(&spiral.log_masses()),
            linear_stellar_masses(&elliptical.log_masses()),
        )
    }

    /// Mean radius per type in the configured unit, with a two-sample t-test
    pub fn radius_by_type(
        &self,
        spiral: &Population,
        elliptical: &Population,
    ) -> AnalysisResult<TypeComparison> {
        self.compare(
            "radius",
            self.radius_unit(),
            self.radii(spiral)?,
            self.radii(elliptical)?,
        )
    }

    /// Surface density against redshift, Spearman correlation per population
    pub fn density_vs_redshift(
        &self,
        spiral: &Population,
        elliptical: &Population,
    ) -> AnalysisResult<RedshiftCorrelation> {
        Ok(RedshiftCorrelation {
            unit: self.density_unit(),
            spiral: self.trend(spiral)?,
            elliptical: self.trend(elliptical)?,
        })
    }

    fn trend(&self, population: &Population) -> AnalysisResult<PopulationTrend> {
        let densities = self.densities(population)?;
        let redshifts = population.redshifts();
        let correlation = spearman_rank_correlation(&densities, &redshifts)?;

        tracing::info!(
            "density vs redshift ({}): rho = {:.4}, p = {:.4e}",
            population.morphology().name(),
            correlation.coefficient,
            correlation.p_value
        );

        Ok(PopulationTrend {
            redshifts,
            densities,
            correlation,
        })
    }

    /// Run all four analyses in fixed order
    pub fn run_all(
        &self,
        spiral: &Population,
        elliptical: &Population,
    ) -> AnalysisResult<AnalysisReport> {
        Ok(AnalysisReport {
            surface_density: self.surface_density_by_type(spiral, elliptical)?,
            mass: self.mass_by_type(spiral, elliptical)?,
            radius: self.radius_by_type(spiral, elliptical)?,
            density_redshift: self.density_vs_redshift(spiral, elliptical)?,
        })
    }
}
