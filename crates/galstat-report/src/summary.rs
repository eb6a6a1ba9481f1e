//! Formatted console summaries
//!
//! Fixed textual layout per analysis; values print with 10 significant
//! digits so runs are comparable across machines.

use galstat_data::{RedshiftCorrelation, TypeComparison};

/// Render a value with 10 significant digits
pub fn format_significant(value: f64) -> String {
    format!("{value:.9e}")
}

/// Print one population-pair comparison in the fixed layout
pub fn print_type_comparison(comparison: &TypeComparison) {
    println!("=== Mean {} by type ({}) ===", comparison.metric, comparison.unit);
    println!("{:<12} {:>8} {:>18} {:>18}", "population", "n", "mean", "std err");
    for (name, summary) in [
        ("spiral", comparison.spiral),
        ("elliptical", comparison.elliptical),
    ] {
        println!(
            "{:<12} {:>8} {:>18} {:>18}",
            name,
            summary.count,
            format_significant(summary.mean),
            format_significant(summary.standard_error),
        );
    }
    println!(
        "t-test: t = {}, p = {} (dof = {:.1})",
        format_significant(comparison.test.statistic),
        format_significant(comparison.test.p_value),
        comparison.test.degrees_of_freedom,
    );
    println!();
}

/// Print the density-vs-redshift correlations in the fixed layout
pub fn print_redshift_correlation(correlation: &RedshiftCorrelation) {
    println!("=== Surface density vs redshift ({}) ===", correlation.unit);
    println!("{:<12} {:>8} {:>18} {:>18}", "population", "n", "rho", "p");
    for (name, trend) in [
        ("spiral", &correlation.spiral),
        ("elliptical", &correlation.elliptical),
    ] {
        println!(
            "{:<12} {:>8} {:>18} {:>18}",
            name,
            trend.redshifts.len(),
            format_significant(trend.correlation.coefficient),
            format_significant(trend.correlation.p_value),
        );
    }
    println!();
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn format_has_ten_significant_digits() {
        assert_eq!(format_significant(1.0), "1.000000000e0");
        assert_eq!(format_significant(1.375e10), "1.375000000e10");
        assert_eq!(format_significant(-0.707106781186), "-7.071067812e-1");
    }

    #[test]
    fn format_is_stable_for_small_p_values() {
        let s = format_significant(3.2e-12);
        assert_eq!(s, "3.200000000e-12");
    }
}
