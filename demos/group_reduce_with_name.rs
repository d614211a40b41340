//! Reduce groups together with their names, collecting results on the side.
//!
//! Run with: `cargo run --example group_reduce_with_name`

use anyhow::Result;
use grouper::Grouper;
use grouper::testing::{Person, sample_people};
use std::collections::BTreeMap;

fn main() -> Result<()> {
    let people = sample_people();
    let refs: Vec<&Person> = people.iter().collect();

    let mut g = Grouper::new(&refs)?;
    let mut report: BTreeMap<String, (usize, u32)> = BTreeMap::new();
    g.group_reduce_with_name(
        |p: &&Person| p.name.clone(),
        |group, name| {
            let total = group.iter().map(|p| p.age).sum();
            report.insert(name.to_string(), (group.len(), total));
        },
    );

    for (name, (members, total)) in &report {
        println!("{name}: {members} members, total age {total}");
    }
    Ok(())
}
