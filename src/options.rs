//! Configuration options for reconcile.
//!
//! This module provides the `ResolverOptions` struct and builder, used both
//! by library callers to configure a [`Resolver`](crate::Resolver) and by the
//! `reconcile` binary as its command line definition.

use derive_builder::Builder;

use crate::MAX_SIMILARITY;

/// reconcile - match free text against a controlled vocabulary
///
/// Each query is compared with every entry of the vocabulary and the closest
/// entry is printed. Queries are read line by line from stdin unless given
/// with --query.
#[derive(Builder, Debug, Clone, Default, PartialEq, Eq)]
#[builder(build_fn(name = "final_build", validate = "Self::validate"))]
#[builder(default)]
#[cfg_attr(feature = "cli", derive(clap::Parser))]
#[cfg_attr(
    feature = "cli",
    command(name = "reconcile", args_override_self = true, verbatim_doc_comment, version, about)
)]
pub struct ResolverOptions {
    //  --- Input ---
    /// File holding the vocabulary, one candidate per line
    ///
    /// Blank lines are skipped, duplicates are kept in order.
    #[cfg_attr(feature = "cli", arg(short, long, help_heading = "Input"))]
    pub vocabulary: Option<String>,

    /// Query to reconcile, may be repeated
    ///
    /// When no query is given, queries are read from stdin, one per line
    #[cfg_attr(feature = "cli", arg(short, long, help_heading = "Input"))]
    pub query: Vec<String>,

    //  --- Matching ---
    /// Minimum similarity (0-100) for a match to be accepted
    ///
    /// Queries whose best candidate scores lower are reported without a match
    #[cfg_attr(
        feature = "cli",
        arg(short, long, value_parser = clap::value_parser!(u8).range(0..=100), help_heading = "Matching")
    )]
    pub threshold: Option<u8>,

    /// Print the N best ranked candidates instead of the single best match
    #[cfg_attr(
        feature = "cli",
        arg(
            short = 'n',
            long,
            value_parser = clap::builder::RangedU64ValueParser::<usize>::new().range(1..),
            help_heading = "Matching"
        )
    )]
    pub limit: Option<usize>,

    /// Score candidates on all available cores
    ///
    /// Results are the same as in sequential mode, ties still go to the
    /// candidate listed first
    #[cfg_attr(feature = "cli", arg(long, help_heading = "Matching"))]
    pub parallel: bool,

    //  --- Output ---
    /// Print the similarity after each match
    #[cfg_attr(feature = "cli", arg(long, help_heading = "Output"))]
    pub print_score: bool,

    /// Print the query before each match
    #[cfg_attr(feature = "cli", arg(long, help_heading = "Output"))]
    pub print_query: bool,

    /// Print output delimited by ASCII NUL characters instead of newlines
    #[cfg_attr(feature = "cli", arg(long, help_heading = "Output"))]
    pub print0: bool,
}

impl ResolverOptionsBuilder {
    /// Builds the ResolverOptions from the builder
    pub fn build(&mut self) -> Result<ResolverOptions, ResolverOptionsBuilderError> {
        self.final_build()
    }

    fn validate(&self) -> Result<(), String> {
        if let Some(Some(threshold)) = self.threshold
            && threshold > MAX_SIMILARITY
        {
            return Err(format!("threshold must be between 0 and {MAX_SIMILARITY}, got {threshold}"));
        }
        if let Some(Some(0)) = self.limit {
            return Err(String::from("limit must be at least 1"));
        }
        Ok(())
    }
}

impl ResolverOptions {
    /// Line terminator used when printing results
    pub fn output_ending(&self) -> &'static str {
        if self.print0 { "\0" } else { "\n" }
    }
}
