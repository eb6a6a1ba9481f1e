/// Arcseconds per radian
pub const ARCSEC_PER_RADIAN: f64 = 206_264.806_247_1;

/// Kiloparsecs per megaparsec
pub const KPC_PER_MPC: f64 = 1000.0;

/// Speed of light in km/s
pub const C_KM_S: f64 = 299_792.458;

/// Reference Hubble constant in km/s/Mpc
pub const H0_KM_S_MPC: f64 = 70.0;

/// Reference matter density parameter (flat model, dark energy = 1 - matter)
pub const OMEGA_M: f64 = 0.3;
