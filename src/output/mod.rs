mod report;
mod styling;
mod tables;

pub use report::{print_check_report, render_check_report};
pub use styling::{dim, magenta_bold};

/// Prints the gadk banner to stderr.
///
/// Stdout is reserved for workflows streamed by `sync --print`.
pub fn print_banner() {
    eprintln!(
        r"
{} {}
  {}
",
        magenta_bold("⚙ gadk"),
        dim(env!("CARGO_PKG_VERSION")),
        dim("GitHub Actions Development Kit")
    );
}
