//! Command-line Arguments

use clap::Parser;
use exn::OptionExt;
use fxscan_extract::models::ArtworkId;
use std::path::PathBuf;

use crate::error::{ErrorKind, Result};

/// Resolve fxhash generative tokens into a CSV of metadata, IPFS links and
/// detected code libraries.
#[derive(Parser, Debug, Clone, PartialEq, Eq)]
#[command(name = "fxscan", version)]
pub struct Args {
    /// First token ID to resolve (inclusive).
    #[arg(long, default_value_t = 30661)]
    pub start: u64,
    /// Last token ID to resolve (inclusive).
    #[arg(long, default_value_t = 31300)]
    pub end: u64,
    /// CSV file to write; overwritten if it exists.
    #[arg(short, long, default_value = "fxhash_data_auto_generated.csv")]
    pub output: PathBuf,
    /// Configuration file (TOML, YAML or JSON).
    #[arg(short, long)]
    pub config: Option<PathBuf>,
    /// Number of tokens resolved at once; overrides the configuration.
    #[arg(long)]
    pub concurrency: Option<usize>,
    /// Log per-stage decisions.
    #[arg(short, long)]
    pub verbose: bool,
}
impl Args {
    /// The validated, inclusive range of token IDs, produced lazily.
    pub fn ids(&self) -> Result<impl Iterator<Item = ArtworkId> + use<>> {
        if self.start > self.end {
            exn::bail!(ErrorKind::InvalidRange(format!(
                "start ({}) is after end ({})",
                self.start, self.end
            )));
        }
        let first = ArtworkId::new(self.start).ok_or_raise(|| ErrorKind::InvalidRange("IDs start at 1".to_string()))?;
        // Every ID after a non-zero start is non-zero too.
        Ok((first.get()..=self.end).filter_map(ArtworkId::new))
    }

    pub fn log_filter(&self) -> &'static str {
        if self.verbose { "debug" } else { "info" }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    fn parse(args: &[&str]) -> Args {
        Args::try_parse_from(std::iter::once("fxscan").chain(args.iter().copied())).unwrap()
    }

    #[test]
    fn test_defaults() {
        let args = parse(&[]);
        assert_eq!(args.start, 30661);
        assert_eq!(args.end, 31300);
        assert_eq!(args.output, PathBuf::from("fxhash_data_auto_generated.csv"));
        assert_eq!(args.concurrency, None);
        assert_eq!(args.log_filter(), "info");
    }

    #[rstest]
    #[case(&["--start", "5", "--end", "5"], 1)]
    #[case(&["--start", "1", "--end", "10"], 10)]
    fn test_range(#[case] flags: &[&str], #[case] expected: usize) {
        let ids: Vec<_> = parse(flags).ids().unwrap().collect();
        assert_eq!(ids.len(), expected);
        assert_eq!(ids.first().map(|id| id.get()), Some(parse(flags).start));
    }

    #[rstest]
    #[case(&["--start", "10", "--end", "9"])]
    #[case(&["--start", "0", "--end", "3"])]
    fn test_invalid_range(#[case] flags: &[&str]) {
        let err = parse(flags).ids().err().unwrap();
        assert!(matches!(&*err, ErrorKind::InvalidRange(_)));
    }

    #[test]
    fn test_full_u64_range_is_lazy() {
        let args = parse(&["--start", "1", "--end", "18446744073709551615"]);
        let ids: Vec<_> = args.ids().unwrap().take(3).map(ArtworkId::get).collect();
        assert_eq!(ids, [1, 2, 3]);
    }

    #[test]
    fn test_range_ends_at_u64_max() {
        let args = parse(&["--start", "18446744073709551614", "--end", "18446744073709551615"]);
        let ids: Vec<_> = args.ids().unwrap().map(ArtworkId::get).collect();
        assert_eq!(ids, [u64::MAX - 1, u64::MAX]);
    }

    #[test]
    fn test_flags() {
        let args = parse(&["-v", "--concurrency", "4", "-o", "out.csv", "-c", "fxscan.toml"]);
        assert!(args.verbose);
        assert_eq!(args.log_filter(), "debug");
        assert_eq!(args.concurrency, Some(4));
        assert_eq!(args.output, PathBuf::from("out.csv"));
        assert_eq!(args.config, Some(PathBuf::from("fxscan.toml")));
    }
}
