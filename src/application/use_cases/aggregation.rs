// ============================================================
// AGGREGATION
// ============================================================
// Pure, order-insensitive computations over the laptop collection.
// Inputs are read-only; every call allocates fresh output.

use std::cmp::Ordering;
use std::collections::HashMap;

use crate::domain::aggregates::{AggregatedData, DashboardStats};
use crate::domain::laptop::Laptop;
use crate::shared::number_format::compact_number;

/// Mean price per company, rounded to whole rupees, sorted by descending
/// mean. The sort is stable, so companies with equal means keep first-seen
/// order.
pub fn average_price_by_company(data: &[Laptop]) -> Vec<AggregatedData> {
    if data.is_empty() {
        return Vec::new();
    }

    // First-seen bucket order matters for tie handling, so group into a vec
    // with a side index instead of iterating a hash map.
    let mut buckets: Vec<(String, f64, usize)> = Vec::new();
    let mut index: HashMap<&str, usize> = HashMap::new();

    for laptop in data {
        match index.get(laptop.company.as_str()) {
            Some(&i) => {
                buckets[i].1 += laptop.price;
                buckets[i].2 += 1;
            }
            None => {
                index.insert(laptop.company.as_str(), buckets.len());
                buckets.push((laptop.company.clone(), laptop.price, 1));
            }
        }
    }

    let mut result: Vec<AggregatedData> = buckets
        .into_iter()
        .map(|(company, sum, count)| {
            AggregatedData::with_count(company, (sum / count as f64).round(), count)
        })
        .collect();

    result.sort_by(|a, b| b.value.partial_cmp(&a.value).unwrap_or(Ordering::Equal));
    result
}

/// Unit counts per RAM size, ascending by the numeric RAM value. Missing or
/// zero RAM is its own "0GB" bucket.
pub fn ram_distribution(data: &[Laptop]) -> Vec<AggregatedData> {
    if data.is_empty() {
        return Vec::new();
    }

    let mut buckets: Vec<(f64, usize)> = Vec::new();

    for laptop in data {
        match buckets.iter_mut().find(|(ram, _)| *ram == laptop.ram) {
            Some(bucket) => bucket.1 += 1,
            None => buckets.push((laptop.ram, 1)),
        }
    }

    buckets.sort_by(|a, b| a.0.partial_cmp(&b.0).unwrap_or(Ordering::Equal));

    buckets
        .into_iter()
        .map(|(ram, count)| {
            AggregatedData::new(format!("{}GB", compact_number(ram)), count as f64)
        })
        .collect()
}

/// Headline dashboard numbers. Ties on brand frequency keep the earlier-seen
/// company; ties on price keep the first record in original order.
pub fn dashboard_stats(data: &[Laptop]) -> DashboardStats {
    if data.is_empty() {
        return DashboardStats::empty();
    }

    let total_laptops = data.len();
    let avg_price = data.iter().map(|l| l.price).sum::<f64>() / total_laptops as f64;

    let mut counts: Vec<(&str, usize)> = Vec::new();
    let mut index: HashMap<&str, usize> = HashMap::new();
    for laptop in data {
        match index.get(laptop.company.as_str()) {
            Some(&i) => counts[i].1 += 1,
            None => {
                index.insert(laptop.company.as_str(), counts.len());
                counts.push((laptop.company.as_str(), 1));
            }
        }
    }

    let mut most_popular = counts[0];
    for candidate in &counts[1..] {
        if candidate.1 > most_popular.1 {
            most_popular = *candidate;
        }
    }

    let mut most_expensive = &data[0];
    for laptop in &data[1..] {
        if laptop.price > most_expensive.price {
            most_expensive = laptop;
        }
    }

    DashboardStats {
        total_laptops,
        avg_price,
        most_popular_brand: most_popular.0.to_string(),
        most_expensive: Some(most_expensive.clone()),
    }
}
