use grouper::Grouper;
use grouper::testing::*;
use std::collections::HashMap;

fn total_age(group: Vec<Person>) -> u32 {
    group.iter().map(|p| p.age).sum()
}

#[test]
fn reduce_sums_ages_per_group() -> anyhow::Result<()> {
    let people = sample_people();
    let mut g = Grouper::new(&people)?;
    let indices = g.group_by(|p: &Person| p.name.clone());
    let totals = g.reduce(&indices, total_age);

    assert_results_equal(&totals, &[("foo", 3), ("bar", 8)]);
    assert_eq!(g.groups(), ["foo", "bar"]);
    Ok(())
}

#[test]
fn reduce_keys_match_groups() -> anyhow::Result<()> {
    let people = scored_people(1_000, 13);
    let mut g = Grouper::new(&people)?;
    let indices = g.group_by(|p: &Person| p.name.clone());
    let sizes = g.reduce(&indices, |group| group.len());

    assert_eq!(sizes.len(), g.groups().len());
    for (name, list) in g.groups().iter().zip(&indices) {
        assert_eq!(sizes[name], list.len());
    }
    Ok(())
}

#[test]
fn reducer_sees_subset_in_original_order() -> anyhow::Result<()> {
    let people = scored_people(60, 4);
    let mut g = Grouper::new(&people)?;
    let ages = g.group_reduce(
        |p: &Person| p.name.clone(),
        |group| group.into_iter().map(|p| p.age).collect::<Vec<_>>(),
    );
    for list in ages.values() {
        assert!(list.windows(2).all(|w| w[0] < w[1]), "{list:?}");
    }
    Ok(())
}

#[test]
fn reduce_can_return_records() -> anyhow::Result<()> {
    let people = sample_people();
    let mut g = Grouper::new(&people)?;
    let youngest = g.group_reduce(
        |p: &Person| p.name.clone(),
        |group| group.into_iter().min_by_key(|p| p.age),
    );
    assert_results_equal(
        &youngest,
        &[
            ("foo", Some(Person::new("foo", 1))),
            ("bar", Some(Person::new("bar", 3))),
        ],
    );
    Ok(())
}

#[test]
fn reduce_over_references_copies_references() -> anyhow::Result<()> {
    let people = sample_people();
    let refs: Vec<&Person> = people.iter().collect();
    let mut g = Grouper::new(&refs)?;
    let firsts = g.group_reduce(|p: &&Person| p.name.clone(), |group| group[0]);

    assert!(std::ptr::eq(firsts["foo"], &people[0]));
    assert!(std::ptr::eq(firsts["bar"], &people[1]));
    Ok(())
}

#[test]
fn reduce_with_name_visits_groups_in_order() -> anyhow::Result<()> {
    let people = sample_people();
    let mut g = Grouper::new(&people)?;
    let mut visited = Vec::new();
    let mut totals: HashMap<String, u32> = HashMap::new();
    g.group_reduce_with_name(
        |p: &Person| p.name.clone(),
        |group, name| {
            visited.push(name.to_string());
            totals.insert(name.to_string(), total_age(group));
        },
    );

    assert_eq!(visited, ["foo", "bar"]);
    assert_results_equal(&totals, &[("foo", 3), ("bar", 8)]);
    Ok(())
}

#[test]
fn reduce_with_name_after_explicit_group_by() -> anyhow::Result<()> {
    let people = scored_people(40, 5);
    let mut g = Grouper::new(&people)?;
    let indices = g.group_by(|p: &Person| p.name.clone());

    let mut seen = 0;
    g.reduce_with_name(&indices, |group, name| {
        assert!(group.iter().all(|p| p.name == name));
        seen += group.len();
    });
    assert_eq!(seen, people.len());
    Ok(())
}

#[test]
fn reduce_groups_takes_explicit_names() -> anyhow::Result<()> {
    let people = sample_people();
    let g = Grouper::new(&people)?;
    let names = vec!["bar".to_string(), "foo".to_string()];
    let indices = vec![vec![1, 2], vec![0, 3]];

    let totals = g.reduce_groups(&names, &indices, total_age);
    assert_results_equal(&totals, &[("foo", 3), ("bar", 8)]);
    assert!(g.groups().is_empty());
    Ok(())
}

#[test]
fn reduce_before_group_by_is_empty() -> anyhow::Result<()> {
    let people = sample_people();
    let g = Grouper::new(&people)?;
    let totals = g.reduce(&[vec![0, 1]], total_age);
    assert!(totals.is_empty());
    Ok(())
}

#[test]
fn subset_copies_listed_positions() -> anyhow::Result<()> {
    let people = sample_people();
    let g = Grouper::new(&people)?;
    assert_collections_equal(
        &g.subset(&[3, 0]),
        &[Person::new("foo", 2), Person::new("foo", 1)],
    );
    assert!(g.subset(&[]).is_empty());
    Ok(())
}

#[test]
#[should_panic]
fn subset_panics_on_foreign_positions() {
    let people = sample_people();
    let g = Grouper::new(&people).unwrap();
    let _ = g.subset(&[10]);
}
