use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use galstat_core::derive::RadiusMode;
use galstat_core::stats::TTestKind;
use galstat_data::{
    generate_synthetic_galaxies, write_catalog_csv, AnalysisConfig, AnalysisPipeline,
    CatalogSchema, Morphology, Population,
};
use std::path::{Path, PathBuf};

#[derive(Parser)]
#[command(name = "galstat")]
#[command(about = "Galaxy population statistics from sky-survey catalogs")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Run all four analyses over a spiral/elliptical catalog pair
    Analyze {
        /// Spiral catalog CSV
        #[arg(long)]
        spiral: PathBuf,

        /// Elliptical catalog CSV
        #[arg(long)]
        elliptical: PathBuf,

        /// Output directory for chart PNGs
        #[arg(short, long, default_value = "plots")]
        output: PathBuf,

        /// Radius unit for the surface density: angular, physical
        #[arg(long, default_value = "angular")]
        radius_mode: String,

        /// Use Welch's t-test instead of the pooled-variance default
        #[arg(long, default_value_t = false)]
        welch: bool,
    },

    /// Generate a synthetic spiral/elliptical catalog pair
    GenerateSynthetic {
        /// Galaxies per catalog
        #[arg(short, long, default_value = "10000")]
        count: usize,

        /// Output directory for the two CSV files
        #[arg(short, long, default_value = "data")]
        output: PathBuf,

        #[arg(long, default_value = "42")]
        seed: u64,
    },
}

fn main() -> Result<()> {
    tracing_subscriber::fmt::init();

    let cli = Cli::parse();
    match cli.command {
        Commands::Analyze {
            spiral,
            elliptical,
            output,
            radius_mode,
            welch,
        } => {
            let radius_mode = match radius_mode.as_str() {
                "angular" => RadiusMode::Angular,
                "physical" => RadiusMode::Physical,
                _ => anyhow::bail!(
                    "Unknown radius mode '{}'. Use: angular, physical",
                    radius_mode
                ),
            };
            let config = AnalysisConfig {
                radius_mode,
                t_test: if welch {
                    TTestKind::Welch
                } else {
                    TTestKind::Student
                },
            };
            analyze(&spiral, &elliptical, &output, config)
        }

        Commands::GenerateSynthetic {
            count,
            output,
            seed,
        } => {
            std::fs::create_dir_all(&output)?;

            let spiral_path = output.join("spiral_synthetic.csv");
            let spiral = generate_synthetic_galaxies(count, seed, Morphology::Spiral);
            write_catalog_csv(&spiral_path, &spiral, &CatalogSchema::spiral())?;

            let elliptical_path = output.join("elliptical_synthetic.csv");
            let elliptical =
                generate_synthetic_galaxies(count, seed + 1, Morphology::Elliptical);
            write_catalog_csv(&elliptical_path, &elliptical, &CatalogSchema::elliptical())?;

            println!(
                "Generated {} galaxies per type -> {}, {}",
                count,
                spiral_path.display(),
                elliptical_path.display()
            );
            Ok(())
        }
    }
}

fn analyze(
    spiral_path: &Path,
    elliptical_path: &Path,
    output: &Path,
    config: AnalysisConfig,
) -> Result<()> {
    std::fs::create_dir_all(output)?;

    // Spiral before elliptical: fixed ordering for reproducible output.
    let spiral = Population::load_csv(spiral_path, Morphology::Spiral, &CatalogSchema::spiral())
        .with_context(|| format!("loading spiral catalog {}", spiral_path.display()))?;
    let elliptical = Population::load_csv(
        elliptical_path,
        Morphology::Elliptical,
        &CatalogSchema::elliptical(),
    )
    .with_context(|| format!("loading elliptical catalog {}", elliptical_path.display()))?;

    let pipeline = AnalysisPipeline::new(config, galstat_core::FlatLambdaCdm::reference());
    let report = pipeline.run_all(&spiral, &elliptical)?;

    galstat_report::print_type_comparison(&report.surface_density);
    galstat_report::print_type_comparison(&report.mass);
    galstat_report::print_type_comparison(&report.radius);
    galstat_report::print_redshift_correlation(&report.density_redshift);

    let charts: [(&str, &galstat_data::TypeComparison); 3] = [
        ("surface_density_by_type.png", &report.surface_density),
        ("mass_by_type.png", &report.mass),
        ("radius_by_type.png", &report.radius),
    ];
    for (file_name, comparison) in charts {
        let path = output.join(file_name);
        galstat_report::render_type_comparison(&path, comparison)
            .map_err(|e| anyhow::anyhow!("rendering {}: {e}", path.display()))?;
    }

    let scatter_path = output.join("density_vs_redshift.png");
    galstat_report::render_redshift_scatter(&scatter_path, &report.density_redshift)
        .map_err(|e| anyhow::anyhow!("rendering {}: {e}", scatter_path.display()))?;

    println!("Charts written to {}", output.display());
    Ok(())
}
