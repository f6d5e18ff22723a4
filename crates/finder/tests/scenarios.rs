//! Known Sunday-Christmas lists, checked for every method.

use yuletide_calendar::{CalendarError, Year, YearRange};
use yuletide_finder::{Finder, FinderConfig, FinderError, Method, compute};

const METHODS: [Method; 3] = [Method::Direct, Method::Optimized, Method::Lazy];

fn years_for(start: i64, end: i64, method: Method) -> Vec<u16> {
    let range = YearRange::from_bounds(start, end).unwrap();
    compute(range, method).iter().map(Year::get).collect()
}

#[test]
fn twenty_first_century() {
    let expected = vec![
        2005, 2011, 2016, 2022, 2033, 2039, 2044, 2050, 2061, 2067, 2072, 2078, 2089, 2095,
    ];
    for method in METHODS {
        assert_eq!(years_for(2000, 2100, method), expected, "{method}");
    }
}

#[test]
fn seventies_to_twenty_seventeen() {
    let expected = vec![1977, 1983, 1988, 1994, 2005, 2011, 2016];
    for method in METHODS {
        assert_eq!(years_for(1970, 2017, method), expected, "{method}");
    }
}

#[test]
fn crossing_twenty_one_hundred() {
    let expected = vec![
        2011, 2016, 2022, 2033, 2039, 2044, 2050, 2061, 2067, 2072, 2078, 2089, 2095, 2101, 2107,
        2112, 2118,
    ];
    for method in METHODS {
        assert_eq!(years_for(2008, 2121, method), expected, "{method}");
    }
}

#[test]
fn degenerate_range_is_empty_not_error() {
    for method in METHODS {
        let mut finder = Finder::new(FinderConfig::new().with_method(method));
        let occ = finder.find_years(2021, 2021).unwrap();
        assert!(occ.is_empty(), "{method}");
        assert_eq!(occ.range().len(), 1);
    }
}

#[test]
fn reversed_range_is_rejected() {
    for method in METHODS {
        let mut finder = Finder::new(FinderConfig::new().with_method(method));
        assert_eq!(
            finder.find_years(2030, 2000).unwrap_err(),
            FinderError::Calendar(CalendarError::InvalidRange {
                start: 2030,
                end: 2000
            })
        );
    }
}

#[test]
fn out_of_domain_is_rejected() {
    let mut finder = Finder::default();
    assert!(matches!(
        finder.find_years(-10, 5),
        Err(FinderError::Calendar(CalendarError::OutOfDomain { year: -10 }))
    ));
    assert!(matches!(
        finder.find_years(9999, 12_000),
        Err(FinderError::Calendar(CalendarError::OutOfDomain { year: 12_000 }))
    ));
}

#[test]
fn nothing_is_cached_on_error() {
    let mut finder = Finder::default();
    let _ = finder.find_years(2030, 2000);
    assert!(finder.cache().unwrap().is_empty());
}
