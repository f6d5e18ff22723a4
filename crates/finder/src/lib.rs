//! Enumerate the years whose December 25 falls on a Sunday.
//!
//! Three interchangeable methods produce the same [`OccurrenceList`]:
//!
//! | Method | Strategy | Evaluations |
//! |--------|----------|-------------|
//! | [`Method::Direct`] | weekday rule for every year | one per year |
//! | [`Method::Optimized`] | 28-year signature, verified | about one per six years |
//! | [`Method::Lazy`] | iterator, one year per step | one per year |
//!
//! # Quick start
//!
//! ```
//! use yuletide_finder::{Finder, FinderConfig, Method};
//!
//! let mut finder = Finder::new(FinderConfig::new().with_method(Method::Optimized));
//! let occ = finder.find_years(2000, 2030).unwrap();
//! assert_eq!(occ.len(), 4);
//! ```
//!
//! # Architecture
//!
//! ```text
//! Finder::find_years()
//!   ├─ YearRange::from_bounds()   (validation)
//!   ├─ RangeCache::get()          (cache.rs)
//!   └─ compute()
//!        ├─ find_direct()         (direct.rs)
//!        ├─ find_optimized()      (cycle.rs)
//!        └─ SundayChristmases     (lazy.rs)
//! ```

pub mod cache;
pub mod config;
pub mod cycle;
pub mod error;
pub mod finder;
pub mod occurrence;

pub(crate) mod direct;
pub(crate) mod lazy;

pub use cache::RangeCache;
pub use config::{FinderConfig, Method};
pub use cycle::{
    CYCLE_YEARS, CycleReport, common_centuries, find_optimized, find_optimized_with_report,
    is_stable, stable_stretches,
};
pub use direct::find_direct;
pub use error::FinderError;
pub use finder::{Finder, compute};
pub use lazy::SundayChristmases;
pub use occurrence::OccurrenceList;
