//! Physical derivation: raw catalog fields -> physical quantities
//!
//! Every function here is a pure elementwise map over catalog columns. The
//! only external dependency is the cosmological distance model, taken as a
//! trait object argument so callers choose (or stub) the cosmology.

use crate::constants::{ARCSEC_PER_RADIAN, KPC_PER_MPC};
use crate::cosmology::AngularDiameterDistance;
use crate::error::{AnalysisError, AnalysisResult};
use serde::{Deserialize, Serialize};

/// Unit convention for the radius entering the surface density
///
/// The default is angular (arcseconds): surface densities compare the two
/// populations in catalog units without touching the cosmology. Physical
/// mode converts each radius to kiloparsecs first. The same mode must be
/// applied to both populations of a compared pair.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum RadiusMode {
    Angular,
    Physical,
}

impl Default for RadiusMode {
    fn default() -> Self {
        RadiusMode::Angular
    }
}

/// Linear stellar mass in solar masses from log-scale (dex) mass
///
/// Defined for all reals; `10^0 = 1` solar mass.
pub fn linear_stellar_mass(log_mass_dex: f64) -> f64 {
    10.0_f64.powf(log_mass_dex)
}

/// Elementwise [`linear_stellar_mass`] over a dex column
pub fn linear_stellar_masses(log_mass_dex: &[f64]) -> Vec<f64> {
    log_mass_dex.iter().copied().map(linear_stellar_mass).collect()
}

/// Physical radius in kpc from redshift and angular radius in arcseconds
///
/// `r_kpc = D_A(z) [Mpc] * (theta / 206264.8062471) * 1000`. The distance
/// model rejects negative redshift.
pub fn physical_radius_kpc(
    redshift: f64,
    angular_radius_arcsec: f64,
    model: &dyn AngularDiameterDistance,
) -> AnalysisResult<f64> {
    let d_a_mpc = model.angular_diameter_distance(redshift)?;
    Ok(d_a_mpc * (angular_radius_arcsec / ARCSEC_PER_RADIAN) * KPC_PER_MPC)
}

/// Stellar surface density `mass / (pi * radius^2)`
///
/// Radius unit (arcsec or kpc) is the caller's choice via [`RadiusMode`];
/// the output unit follows it. Zero radius is rejected rather than producing
/// an infinite density.
pub fn stellar_surface_density(mass_solar: f64, radius: f64) -> AnalysisResult<f64> {
    if radius == 0.0 {
        return Err(AnalysisError::InvalidDomain {
            quantity: "stellar surface density",
            detail: "radius is zero".to_string(),
        });
    }
    Ok(mass_solar / (std::f64::consts::PI * radius * radius))
}

/// Elementwise [`stellar_surface_density`] over paired mass/radius columns
pub fn surface_densities(masses: &[f64], radii: &[f64]) -> AnalysisResult<Vec<f64>> {
    if masses.len() != radii.len() {
        return Err(AnalysisError::InvalidDomain {
            quantity: "stellar surface density",
            detail: format!(
                "mass and radius columns differ in length: {} vs {}",
                masses.len(),
                radii.len()
            ),
        });
    }
    masses
        .iter()
        .zip(radii)
        .map(|(&m, &r)| stellar_surface_density(m, r))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::f64::consts::PI;

    /// Distance model returning a fixed D_A regardless of redshift
    struct FixedDistance(f64);

    impl AngularDiameterDistance for FixedDistance {
        fn angular_diameter_distance(&self, redshift: f64) -> AnalysisResult<f64> {
            if redshift < 0.0 {
                return Err(AnalysisError::InvalidDomain {
                    quantity: "angular diameter distance",
                    detail: format!("negative redshift {redshift}"),
                });
            }
            Ok(self.0)
        }
    }

    #[test]
    fn dex_zero_is_one_solar_mass() {
        assert_eq!(linear_stellar_mass(0.0), 1.0);
    }

    #[test]
    fn linear_mass_is_monotone() {
        let dex = [-2.0, 0.0, 5.0, 10.0, 11.5];
        let masses = linear_stellar_masses(&dex);
        for pair in masses.windows(2) {
            assert!(pair[1] > pair[0]);
        }
    }

    #[test]
    fn physical_radius_from_fixed_distance() {
        // 1 arcsec at D_A = 1 Mpc is 1000/206264.8... kpc
        let model = FixedDistance(1.0);
        let r = physical_radius_kpc(0.1, 1.0, &model).unwrap();
        let expected = 1000.0 / ARCSEC_PER_RADIAN;
        assert!((r - expected).abs() < 1e-12);
    }

    #[test]
    fn physical_radius_rejects_negative_redshift() {
        let model = FixedDistance(1.0);
        assert!(physical_radius_kpc(-0.5, 1.0, &model).is_err());
    }

    #[test]
    fn surface_density_formula() {
        let masses = [1.0e10, 2.5e10, 4.0e9];
        let radii = [2.0, 3.5, 0.8];
        let densities = surface_densities(&masses, &radii).unwrap();
        for i in 0..masses.len() {
            let expected = masses[i] / (PI * radii[i] * radii[i]);
            assert_eq!(densities[i], expected);
        }
    }

    #[test]
    fn surface_density_rejects_zero_radius() {
        assert!(stellar_surface_density(1.0e10, 0.0).is_err());
    }

    #[test]
    fn surface_density_rejects_length_mismatch() {
        assert!(surface_densities(&[1.0, 2.0], &[1.0]).is_err());
    }

    #[test]
    fn reference_scenario_dex_10_and_11() {
        // dex [10, 11] with radii [2, 2] arcsec
        let masses = linear_stellar_masses(&[10.0, 11.0]);
        assert_eq!(masses, vec![1.0e10, 1.0e11]);

        let densities = surface_densities(&masses, &[2.0, 2.0]).unwrap();
        assert!((densities[0] - 1.0e10 / (4.0 * PI)).abs() < 1e-3);
        assert!((densities[1] - 1.0e11 / (4.0 * PI)).abs() < 1e-2);

        let mean = crate::stats::mean(&densities).unwrap();
        assert!((mean - 1.375e10 / PI).abs() / mean < 1e-12);
    }
}
