#[macro_use]
extern crate log;

use std::env;
use std::io::{self, BufRead, BufWriter, Write};

use clap::Parser;
use color_eyre::eyre::{OptionExt, Result, WrapErr};
use reconcile::prelude::*;

//------------------------------------------------------------------------------
fn main() {
    env_logger::builder().format_timestamp_nanos().init();
    if let Err(err) = color_eyre::install() {
        error!("could not install error reporter: {err}");
    }

    match real_main() {
        Ok(exit_code) => std::process::exit(exit_code),
        Err(err) => {
            // if downstream pipe is closed, exit silently
            if let Some(io_err) = err.downcast_ref::<io::Error>()
                && io_err.kind() == io::ErrorKind::BrokenPipe
            {
                std::process::exit(0)
            }
            eprintln!("{err:?}");
            std::process::exit(2)
        }
    }
}

fn parse_args() -> ResolverOptions {
    let mut args = Vec::new();

    args.push(env::args().next().unwrap_or_else(|| String::from("reconcile")));
    args.extend(
        env::var("RECONCILE_DEFAULT_OPTIONS")
            .ok()
            .and_then(|val| shlex::split(&val))
            .unwrap_or_default(),
    );
    args.extend(env::args().skip(1));

    ResolverOptions::parse_from(args)
}

fn real_main() -> Result<i32> {
    let opts = parse_args();

    let vocabulary = opts.vocabulary.as_deref().ok_or_eyre("no vocabulary given, use --vocabulary")?;
    let candidates = read_candidates_from_file(vocabulary)?;
    debug!("{} candidates loaded from {vocabulary}", candidates.len());

    let resolver = Resolver::from_options(&opts);
    let stdout = io::stdout();
    let mut out = BufWriter::new(stdout.lock());

    let mut num_unmatched = 0;
    if opts.query.is_empty() {
        for line in io::stdin().lock().lines() {
            let query = line.wrap_err("could not read query from stdin")?;
            if !reconcile_query(&mut out, &opts, &resolver, &query, &candidates)? {
                num_unmatched += 1;
            }
            // answer each line before the next one arrives
            out.flush()?;
        }
    } else {
        for query in &opts.query {
            if !reconcile_query(&mut out, &opts, &resolver, query, &candidates)? {
                num_unmatched += 1;
            }
        }
    }

    out.flush()?;

    Ok(if num_unmatched == 0 { 0 } else { 1 })
}

/// Print the result(s) for one query, returns whether anything matched
fn reconcile_query<W: Write>(
    out: &mut W,
    opts: &ResolverOptions,
    resolver: &Resolver,
    query: &str,
    candidates: &[String],
) -> io::Result<bool> {
    if opts.limit.is_some() {
        let ranked = resolver.rank(query, candidates);
        for entry in &ranked {
            print_line(out, opts, query, &entry.candidate, entry.similarity)?;
        }
        return Ok(!ranked.is_empty());
    }

    match resolver.resolve(query, candidates) {
        Some(result) => {
            print_line(out, opts, query, &result.matched, result.similarity)?;
            Ok(true)
        }
        None => {
            print_line(out, opts, query, "", 0)?;
            Ok(false)
        }
    }
}

fn print_line<W: Write>(out: &mut W, opts: &ResolverOptions, query: &str, matched: &str, score: u8) -> io::Result<()> {
    if opts.print_query {
        write!(out, "{query}\t")?;
    }
    write!(out, "{matched}")?;
    if opts.print_score {
        write!(out, "\t{score}")?;
    }
    write!(out, "{}", opts.output_ending())
}
