//! Result formatting for the command-line interface

use serde::Serialize;

use greedy_tsp::{City, Tour};

use crate::cli::method::Method;

/// Machine-readable report for one method
#[derive(Debug, Serialize)]
pub struct MethodReport<'a> {
    pub method: &'static str,
    pub total_distance: f64,
    pub tour: Vec<&'a str>,
    pub order: &'a [usize],
}

impl<'a> MethodReport<'a> {
    pub fn new(method: Method, tour: &'a Tour, cities: &'a [City]) -> Self {
        Self {
            method: method.flag(),
            total_distance: tour.total_distance,
            tour: tour.order.iter().map(|&i| cities[i].name.as_str()).collect(),
            order: &tour.order,
        }
    }
}

/// `label:   distance NAME NAME ...` with the label left-justified in 16
/// columns and the distance right-justified in 10 with 2 decimals
pub fn format_line(method: Method, tour: &Tour, cities: &[City]) -> String {
    let mut line = format!("{:<16}:{:>10.2}", method.flag(), tour.total_distance);
    for &i in &tour.order {
        line.push(' ');
        line.push_str(&cities[i].name);
    }
    line
}

pub fn format_json(method: Method, tour: &Tour, cities: &[City]) -> serde_json::Result<String> {
    serde_json::to_string(&MethodReport::new(method, tour, cities))
}
