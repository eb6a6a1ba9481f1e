use crate::cosmology::*;
use crate::derive::*;
use crate::stats::*;

// End-to-end chain: dex masses -> densities -> summary -> comparison,
// the exact path the analysis pipeline takes for one population pair.

#[test]
fn test_derive_then_summarize_chain() {
    let spiral_dex = [10.0, 10.2, 10.4, 10.6, 10.8];
    let spiral_radius = [2.0, 2.5, 3.0, 3.5, 4.0];
    let elliptical_dex = [10.5, 10.7, 10.9, 11.1, 11.3];
    let elliptical_radius = [1.0, 1.2, 1.4, 1.6, 1.8];

    let spiral_density =
        surface_densities(&linear_stellar_masses(&spiral_dex), &spiral_radius).unwrap();
    let elliptical_density =
        surface_densities(&linear_stellar_masses(&elliptical_dex), &elliptical_radius).unwrap();

    let spiral_summary = summarize(&spiral_density).unwrap();
    let elliptical_summary = summarize(&elliptical_density).unwrap();

    assert_eq!(spiral_summary.count, 5);
    assert_eq!(elliptical_summary.count, 5);
    // Ellipticals are denser here: more mass in smaller radii.
    assert!(elliptical_summary.mean > spiral_summary.mean);

    let test = two_sample_t_test(&spiral_density, &elliptical_density, TTestKind::Student).unwrap();
    assert!(test.statistic < 0.0);
    assert!(test.p_value < 0.05);
}

#[test]
fn test_physical_mode_rescales_but_preserves_ordering() {
    let cosmo = FlatLambdaCdm::reference();
    let redshifts = [0.05, 0.10, 0.15];
    let radii_arcsec = [2.0, 2.0, 2.0];

    let radii_kpc: Vec<f64> = redshifts
        .iter()
        .zip(&radii_arcsec)
        .map(|(&z, &theta)| physical_radius_kpc(z, theta, &cosmo).unwrap())
        .collect();

    // Same angular size is physically larger at higher redshift
    // (monotone D_A in this range).
    assert!(radii_kpc[0] < radii_kpc[1]);
    assert!(radii_kpc[1] < radii_kpc[2]);

    // A fixed angular radius at z ~ 0.1 spans a few kpc, not pc or Mpc.
    for r in &radii_kpc {
        assert!(*r > 0.1 && *r < 100.0, "radius {r} kpc out of expected range");
    }
}

#[test]
fn test_density_redshift_correlation_detects_trend() {
    // Densities engineered to rise monotonically with redshift.
    let redshifts: Vec<f64> = (0..30).map(|i| 0.02 + 0.01 * i as f64).collect();
    let densities: Vec<f64> = redshifts.iter().map(|z| 1.0e9 * (1.0 + z * 10.0)).collect();

    let corr = spearman_rank_correlation(&densities, &redshifts).unwrap();
    assert!((corr.coefficient - 1.0).abs() < 1e-12);
    assert!(corr.p_value < 1e-12);
}
