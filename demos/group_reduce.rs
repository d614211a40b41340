//! Group records by a key and reduce each group to a value.
//!
//! Run with: `cargo run --example group_reduce`

use anyhow::Result;
use grouper::keys::by_field;
use grouper::{GroupOrder, Grouper, GrouperConfig};
use serde::Serialize;

#[derive(Clone, Debug, Serialize)]
struct Sale {
    region: String,
    product: String,
    amount: u64,
}

fn sale(region: &str, product: &str, amount: u64) -> Sale {
    Sale {
        region: region.to_string(),
        product: product.to_string(),
        amount,
    }
}

fn main() -> Result<()> {
    let sales = vec![
        sale("emea", "widget", 120),
        sale("apac", "gadget", 80),
        sale("emea", "gadget", 45),
        sale("amer", "widget", 300),
        sale("apac", "widget", 60),
    ];

    let mut g = Grouper::new(&sales)?;

    // Two steps: keep the index lists around for several reductions.
    let indices = g.group_by(|s: &Sale| s.region.clone());
    println!("Regions (first seen): {:?}", g.groups());

    let totals = g.reduce(&indices, |group| group.iter().map(|s| s.amount).sum::<u64>());
    let largest = g.reduce(&indices, |group| group.into_iter().max_by_key(|s| s.amount));
    for region in g.groups() {
        println!("  {region}: total {} largest {:?}", totals[region], largest[region]);
    }

    // One step, keyed by field name, groups reported alphabetically.
    let mut sorted = Grouper::new(&sales)?.with_config(GrouperConfig::default().with_order(GroupOrder::Sorted));
    let counts = sorted.group_reduce(by_field("product"), |group| group.len());
    println!("\nProducts (sorted): {:?}", sorted.groups());
    for product in sorted.groups() {
        println!("  {product}: {} sales", counts[product]);
    }

    Ok(())
}
