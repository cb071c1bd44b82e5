use clap::Parser;
use std::path::PathBuf;
use zetascan_core::{shortest_decimal, ScanRange, ZetaResult, DEFAULT_MAX_ITER, DEFAULT_SCAN};

#[derive(Parser, Debug)]
#[command(
    author,
    version,
    about = "Locate zeros of the Riemann zeta function on the critical line",
    allow_negative_numbers = true
)]
pub struct Args {
    /// Start of the scan range (requires t_end)
    #[arg(requires = "t_end")]
    pub t_start: Option<String>,

    /// End of the scan range
    pub t_end: Option<String>,

    /// Grid spacing [default: 0.01]
    pub step: Option<String>,

    /// |Z| accepted as a zero during bisection [default: 1e-14]
    pub tol: Option<String>,

    /// Zero list output, one fixed-point t per line
    #[arg(long, default_value = "zeros.txt")]
    pub zeros_out: PathBuf,

    /// Sampled curve output (CSV with header t,Zt)
    #[arg(long, default_value = "zeta_plot.csv")]
    pub curve_out: PathBuf,

    /// Also write a JSON scan summary to this path
    #[arg(long)]
    pub summary: Option<PathBuf>,

    /// Bisection iteration budget per bracket
    #[arg(long, default_value_t = DEFAULT_MAX_ITER)]
    pub max_iter: usize,

    /// Sum the Riemann–Siegel terms on one thread (bit-reproducible)
    #[arg(long)]
    pub sequential: bool,
}

impl Args {
    /// The scan range these arguments describe. Not yet validated.
    pub fn range(&self) -> ZetaResult<ScanRange> {
        let default_start = shortest_decimal(DEFAULT_SCAN.start);
        let default_end = shortest_decimal(DEFAULT_SCAN.end);
        ScanRange::from_strings(
            self.t_start.as_deref().unwrap_or(&default_start),
            self.t_end.as_deref().unwrap_or(&default_end),
            self.step.as_deref(),
            self.tol.as_deref(),
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(args: &[&str]) -> Args {
        Args::try_parse_from(std::iter::once("zetascan").chain(args.iter().copied())).unwrap()
    }

    #[test]
    fn no_arguments_give_default_scan() {
        let args = parse(&[]);
        assert_eq!(args.range().unwrap(), ScanRange::default());
        assert_eq!(args.zeros_out, PathBuf::from("zeros.txt"));
        assert_eq!(args.curve_out, PathBuf::from("zeta_plot.csv"));
        assert_eq!(args.max_iter, 100);
        assert!(!args.sequential);
    }

    #[test]
    fn positional_range_overrides_defaults() {
        let range = parse(&["20", "40"]).range().unwrap();
        assert_eq!(range.start, 20.0);
        assert_eq!(range.end, 40.0);
        assert_eq!(range.step, 0.01);
        assert_eq!(range.tol, 1e-14);
    }

    #[test]
    fn all_four_positionals() {
        let range = parse(&["14", "30", "0.05", "1e-10"]).range().unwrap();
        assert_eq!(range.step, 0.05);
        assert_eq!(range.tol, 1e-10);
    }

    #[test]
    fn start_without_end_is_rejected() {
        assert!(Args::try_parse_from(["zetascan", "14"]).is_err());
    }

    #[test]
    fn negative_step_parses_then_fails_validation() {
        let range = parse(&["14", "30", "-0.01"]).range().unwrap();
        assert!(range.validate().is_err());
    }

    #[test]
    fn output_flags() {
        let args = parse(&[
            "--zeros-out",
            "z.txt",
            "--curve-out",
            "c.csv",
            "--summary",
            "s.json",
            "--max-iter",
            "60",
            "--sequential",
        ]);
        assert_eq!(args.zeros_out, PathBuf::from("z.txt"));
        assert_eq!(args.curve_out, PathBuf::from("c.csv"));
        assert_eq!(args.summary, Some(PathBuf::from("s.json")));
        assert_eq!(args.max_iter, 60);
        assert!(args.sequential);
    }

    #[test]
    fn non_numeric_argument_is_a_parse_error() {
        assert!(parse(&["abc", "30"]).range().is_err());
    }
}
