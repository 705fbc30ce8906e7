//! City list parsing
//!
//! The input format is whitespace separated: a city count `n`, then `n` city
//! names, then `n` `lat lon` pairs in the same order as the names.

use std::io::Read;

use log::debug;
use serde::{Deserialize, Serialize};

use crate::core::error::{Error, Result};
use crate::geo::Location;

/// A named city
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct City {
    pub name: String,
    pub location: Location,
}

/// Parse a city list from `reader`.
///
/// Fails with [`Error::TooFewCities`] when fewer than two cities are declared
/// (a missing or unparsable count declares none), and with
/// [`Error::InvalidInput`] when a name or coordinate is missing or malformed.
pub fn parse_cities<R: Read>(mut reader: R) -> Result<Vec<City>> {
    let mut text = String::new();
    reader.read_to_string(&mut text)?;
    parse_cities_str(&text)
}

pub fn parse_cities_str(text: &str) -> Result<Vec<City>> {
    let mut tokens = text.split_whitespace();

    // A missing, non-numeric or negative count declares no cities
    let n = tokens
        .next()
        .and_then(|token| token.parse::<i64>().ok())
        .unwrap_or(0);
    if n < 2 {
        return Err(Error::TooFewCities(n.max(0) as usize));
    }
    let n = usize::try_from(n)
        .map_err(|_| Error::InvalidInput(format!("city count {n} does not fit in memory")))?;

    // Grow with the tokens actually present, not the declared count
    let mut names = Vec::new();
    for i in 0..n {
        let name = tokens
            .next()
            .ok_or_else(|| Error::InvalidInput(format!("missing name for city {i}")))?;
        names.push(name.to_string());
    }

    let mut cities = Vec::with_capacity(names.len());
    for (i, name) in names.into_iter().enumerate() {
        let lat = next_coordinate(&mut tokens, i, "latitude")?;
        let lon = next_coordinate(&mut tokens, i, "longitude")?;
        cities.push(City {
            name,
            location: Location::new(lat, lon),
        });
    }

    debug!("Parsed {} cities", cities.len());
    Ok(cities)
}

fn next_coordinate<'a, I>(tokens: &mut I, city: usize, what: &str) -> Result<f64>
where
    I: Iterator<Item = &'a str>,
{
    let token = tokens
        .next()
        .ok_or_else(|| Error::InvalidInput(format!("missing {what} for city {city}")))?;
    token.parse::<f64>().map_err(|_| {
        Error::InvalidInput(format!("{what} '{token}' for city {city} is not a number"))
    })
}
