//! Cosmological distance model
//!
//! The pipeline only needs one quantity from cosmology: the angular diameter
//! distance at a given redshift, used to turn angular sizes into physical
//! sizes. The lookup sits behind a trait so the derivation and statistics
//! code can be tested with a stub model.

use crate::constants::{C_KM_S, H0_KM_S_MPC, OMEGA_M};
use crate::error::{AnalysisError, AnalysisResult};

/// Redshift -> angular diameter distance in megaparsecs
pub trait AngularDiameterDistance {
    /// Fails with `InvalidDomain` for negative (non-physical) redshift.
    fn angular_diameter_distance(&self, redshift: f64) -> AnalysisResult<f64>;
}

/// Flat Lambda-CDM cosmology with fixed parameters
///
/// Dark energy density is `1 - omega_m` (flatness), so the comoving distance
/// is `(c / H0) * integral(dz' / E(z'))` with
/// `E(z) = sqrt(omega_m (1+z)^3 + (1 - omega_m))`, and the angular diameter
/// distance is `D_C / (1 + z)`.
#[derive(Clone, Copy, Debug)]
pub struct FlatLambdaCdm {
    /// Hubble constant in km/s/Mpc
    pub h0: f64,
    /// Matter density parameter
    pub omega_m: f64,
}

impl FlatLambdaCdm {
    pub fn new(h0: f64, omega_m: f64) -> Self {
        Self { h0, omega_m }
    }

    /// Reference parameters used across the analysis (H0 = 70, Om = 0.3)
    pub fn reference() -> Self {
        Self::new(H0_KM_S_MPC, OMEGA_M)
    }

    /// Hubble distance c / H0 in Mpc
    pub fn hubble_distance_mpc(&self) -> f64 {
        C_KM_S / self.h0
    }

    fn inv_e(&self, z: f64) -> f64 {
        let omega_lambda = 1.0 - self.omega_m;
        1.0 / (self.omega_m * (1.0 + z).powi(3) + omega_lambda).sqrt()
    }

    /// Line-of-sight comoving distance in Mpc (Simpson's rule over 1/E)
    pub fn comoving_distance_mpc(&self, redshift: f64) -> AnalysisResult<f64> {
        if redshift < 0.0 {
            return Err(AnalysisError::InvalidDomain {
                quantity: "comoving distance",
                detail: format!("negative redshift {redshift}"),
            });
        }
        if redshift == 0.0 {
            return Ok(0.0);
        }

        // 1/E is smooth; 1024 panels keep the quadrature error far below
        // the percent-level accuracy of the catalog quantities.
        const N: usize = 1024;
        let h = redshift / N as f64;
        let mut sum = self.inv_e(0.0) + self.inv_e(redshift);
        for i in 1..N {
            let z = i as f64 * h;
            let w = if i % 2 == 0 { 2.0 } else { 4.0 };
            sum += w * self.inv_e(z);
        }
        Ok(self.hubble_distance_mpc() * sum * h / 3.0)
    }
}

impl AngularDiameterDistance for FlatLambdaCdm {
    fn angular_diameter_distance(&self, redshift: f64) -> AnalysisResult<f64> {
        let d_c = self.comoving_distance_mpc(redshift)?;
        Ok(d_c / (1.0 + redshift))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn zero_redshift_is_zero_distance() {
        let cosmo = FlatLambdaCdm::reference();
        assert_eq!(cosmo.angular_diameter_distance(0.0).unwrap(), 0.0);
    }

    #[test]
    fn negative_redshift_rejected() {
        let cosmo = FlatLambdaCdm::reference();
        assert!(cosmo.angular_diameter_distance(-0.1).is_err());
    }

    #[test]
    fn low_redshift_matches_hubble_law() {
        // For z << 1, D_C ~ z * c/H0 (4282.7 Mpc at z=1 scale).
        let cosmo = FlatLambdaCdm::reference();
        let z = 0.001;
        let d = cosmo.comoving_distance_mpc(z).unwrap();
        let expected = z * cosmo.hubble_distance_mpc();
        assert!((d - expected).abs() / expected < 1e-3, "got {d}, expected ~{expected}");
    }

    #[test]
    fn reference_distance_at_z_0_1() {
        // FlatLambdaCDM(H0=70, Om0=0.3) gives D_A(0.1) ~ 380.4 Mpc
        // (D_C ~ 418.5 Mpc divided by 1.1); loose tolerance for quadrature.
        let cosmo = FlatLambdaCdm::reference();
        let d = cosmo.angular_diameter_distance(0.1).unwrap();
        assert!((d - 380.4).abs() < 1.0, "got {d}");
    }

    #[test]
    fn comoving_distance_monotone_in_redshift() {
        let cosmo = FlatLambdaCdm::reference();
        let mut prev = 0.0;
        for i in 1..=10 {
            let d = cosmo.comoving_distance_mpc(0.05 * i as f64).unwrap();
            assert!(d > prev);
            prev = d;
        }
    }
}
