//! This is the documentation for the **coordgen** package, a generator for sets of 2D and 3D
//! coordinate points, e.g. for survey or sampling layouts.
//!
//! Points are generated on a regular grid or uniformly at random within per-axis bounds
//! ([`point_distributions`]), shown and edited as a table ([`table`]), plotted as scatter plot
//! ([`plottable`]) and exported into CSV or tab-delimited files ([`export`]).
#![allow(clippy::module_name_repetitions)]

pub mod config;
pub mod console;
pub mod error;
pub mod export;
pub mod plottable;
pub mod point;
pub mod point_distributions;
pub mod shell;
pub mod table;
pub mod utils;

/// Return the version information of the currently built coordgen executable.
#[must_use]
pub fn get_version() -> String {
    env!("CARGO_PKG_VERSION").to_owned()
}

#[cfg(test)]
mod test {
    use super::*;
    #[test]
    fn get_ver() {
        let version = get_version();
        assert_eq!(version.split('.').count(), 3);
        assert!(version.split('.').all(|n| n.parse::<u32>().is_ok()));
    }
}
