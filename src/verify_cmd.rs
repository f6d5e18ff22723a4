//! Verify command: check every enumeration method against known results
//! and the optimized method against direct evaluation across the domain.

use anyhow::{Result, bail};
use tracing::{debug, info, info_span};

use yuletide_calendar::{MAX_YEAR, MIN_YEAR, YearRange};
use yuletide_finder::{Method, compute, find_direct, find_optimized_with_report};

use crate::cli::VerifyArgs;

/// Ranges with independently known answers.
const KNOWN: &[(i64, i64, &[u16])] = &[
    (
        2000,
        2100,
        &[
            2005, 2011, 2016, 2022, 2033, 2039, 2044, 2050, 2061, 2067, 2072, 2078, 2089, 2095,
        ],
    ),
    (1970, 2017, &[1977, 1983, 1988, 1994, 2005, 2011, 2016]),
    (
        2008,
        2121,
        &[
            2011, 2016, 2022, 2033, 2039, 2044, 2050, 2061, 2067, 2072, 2078, 2089, 2095, 2101,
            2107, 2112, 2118,
        ],
    ),
    (2021, 2021, &[]),
];

const METHODS: [Method; 3] = [Method::Direct, Method::Optimized, Method::Lazy];

/// Run the accuracy checks.
pub fn run(args: VerifyArgs) -> Result<()> {
    let _cmd = info_span!("verify").entered();
    println!("Running accuracy tests...");

    let mut failures = 0usize;
    for &(start, end, expected) in KNOWN {
        let range = YearRange::from_bounds(start, end)?;
        for method in METHODS {
            let got: Vec<u16> = compute(range, method).iter().map(|y| y.get()).collect();
            if got == expected {
                println!("PASS {range} ({method})");
            } else {
                failures += 1;
                println!("FAIL {range} ({method})");
                println!("  expected: {expected:?}");
                println!("  got:      {got:?}");
            }
        }
    }

    let blocks = domain_blocks(args.block)?;
    let mut evaluations = 0usize;
    for block in &blocks {
        let (optimized, report) = find_optimized_with_report(*block);
        evaluations += report.evaluations;
        if optimized != find_direct(*block) || compute(*block, Method::Lazy) != optimized {
            failures += 1;
            println!("FAIL {block}: methods disagree");
        } else {
            debug!(block = %block, count = optimized.len(), "block agrees");
        }
    }
    info!(
        blocks = blocks.len(),
        evaluations, "domain comparison complete"
    );
    println!(
        "Compared methods over {} blocks of {} years",
        blocks.len(),
        args.block
    );

    if failures > 0 {
        bail!("{failures} accuracy check(s) failed");
    }
    println!("All tests passed.");
    Ok(())
}

/// Splits the whole domain into consecutive blocks of `size` years.
fn domain_blocks(size: u16) -> Result<Vec<YearRange>> {
    if size == 0 {
        bail!("block size must be at least 1");
    }
    let mut blocks = Vec::new();
    let mut start = MIN_YEAR;
    loop {
        let end = start.saturating_add(size - 1).min(MAX_YEAR);
        blocks.push(YearRange::from_bounds(i64::from(start), i64::from(end))?);
        if end == MAX_YEAR {
            break;
        }
        start = end + 1;
    }
    Ok(blocks)
}
