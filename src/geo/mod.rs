//! Static geography reference data: delivery regions (wilayas) with their
//! home-delivery and pickup-desk fees, and the communes of each region.
//!
//! The tables are read-only at order time. An order caches the fee looked up
//! here when its region is selected, so later edits to this table never
//! retroactively change historical orders.

mod cities;
mod regions;

use crate::error::{AppError, AppResult};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RegionEntry {
    pub code: &'static str,
    pub name: &'static str,
    pub name_ar: &'static str,
    pub home_fee: i64,
    pub desk_fee: i64,
}

/// The two delivery fees of a region, as cached on an order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RegionFees {
    pub home: i64,
    pub desk: i64,
}

impl RegionFees {
    pub fn for_mode(&self, home_delivery: bool) -> i64 {
        if home_delivery { self.home } else { self.desk }
    }
}

pub fn all_regions() -> &'static [RegionEntry] {
    regions::REGIONS
}

pub fn region(code: &str) -> Option<&'static RegionEntry> {
    regions::REGIONS.iter().find(|r| r.code == code)
}

pub fn fees_for_region(code: &str) -> AppResult<RegionFees> {
    region(code)
        .map(|r| RegionFees {
            home: r.home_fee,
            desk: r.desk_fee,
        })
        .ok_or_else(|| AppError::NotFound(format!("Unknown region code: {code}")))
}

pub fn cities_of_region(code: &str) -> AppResult<&'static [&'static str]> {
    cities::CITIES
        .iter()
        .find(|(c, _)| *c == code)
        .map(|(_, list)| *list)
        .ok_or_else(|| AppError::NotFound(format!("Unknown region code: {code}")))
}

pub fn city_belongs_to(code: &str, city: &str) -> bool {
    cities_of_region(code)
        .map(|list| list.iter().any(|c| *c == city))
        .unwrap_or(false)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_every_region_has_cities() {
        for r in all_regions() {
            let cities = cities_of_region(r.code).unwrap();
            assert!(!cities.is_empty(), "region {} has no cities", r.code);
        }
    }

    #[test]
    fn test_fees_lookup() {
        let fees = fees_for_region("16").unwrap();
        assert_eq!(fees.home, 300);
        assert_eq!(fees.desk, 150);
        assert_eq!(fees.for_mode(true), 300);
        assert_eq!(fees.for_mode(false), 150);
    }

    #[test]
    fn test_unknown_region_is_not_found() {
        assert!(matches!(fees_for_region("99"), Err(AppError::NotFound(_))));
        assert!(matches!(cities_of_region(""), Err(AppError::NotFound(_))));
    }

    #[test]
    fn test_city_membership() {
        assert!(city_belongs_to("16", "Bab El Oued"));
        assert!(!city_belongs_to("16", "Maghnia"));
        assert!(city_belongs_to("13", "Maghnia"));
        assert!(!city_belongs_to("99", "Bab El Oued"));
    }

    #[test]
    fn test_codes_are_unique_and_sorted() {
        let codes: Vec<_> = all_regions().iter().map(|r| r.code).collect();
        let mut deduped = codes.clone();
        deduped.dedup();
        assert_eq!(codes, deduped);
        let mut sorted = codes.clone();
        sorted.sort();
        assert_eq!(codes, sorted);
    }
}
