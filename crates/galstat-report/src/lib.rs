pub mod charts;
pub mod summary;

pub use charts::{render_redshift_scatter, render_type_comparison};
pub use summary::{
    format_significant, print_redshift_correlation, print_type_comparison,
};
