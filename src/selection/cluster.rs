use std::collections::HashMap;
use std::fmt::Debug;
use std::hash::Hash;

use tracing::debug;

use crate::errors::{Result, SelectionError};
use crate::installment::InstallmentOption;
use crate::types::ClusterField;

/// options sharing one key, in input order
struct Cluster<'a, K> {
    key: K,
    options: Vec<&'a InstallmentOption>,
}

/// pick the largest cluster of options grouped by `cluster_by`, sorted by count
///
/// When several clusters share the largest size, the one holding the option
/// with the most installments wins. The returned options are ordered by
/// ascending number of installments, equal counts keeping input order.
pub fn pick_by_cluster<'a>(
    options: &'a [InstallmentOption],
    cluster_by: ClusterField,
) -> Result<Vec<&'a InstallmentOption>> {
    // resolve every key first so a missing field fails before grouping
    let keyed = options
        .iter()
        .map(|option| cluster_by.key_of(option).map(|key| (key, option)))
        .collect::<Result<Vec<_>>>()?;

    pick_largest(keyed)
}

/// same as `pick_by_cluster` with a caller supplied key
pub fn pick_by_cluster_with<'a, K, F>(
    options: &'a [InstallmentOption],
    key: F,
) -> Result<Vec<&'a InstallmentOption>>
where
    K: Eq + Hash + Clone + Debug,
    F: Fn(&InstallmentOption) -> K,
{
    pick_largest(options.iter().map(|option| (key(option), option)))
}

fn pick_largest<'a, K>(
    keyed: impl IntoIterator<Item = (K, &'a InstallmentOption)>,
) -> Result<Vec<&'a InstallmentOption>>
where
    K: Eq + Hash + Clone + Debug,
{
    let clusters = cluster(keyed);
    let mut picked = pick_max_option_count(clusters)?.options;

    // stable, equal counts keep their relative order
    picked.sort_by_key(|option| option.number_of_installments);

    Ok(picked)
}

/// group by key, clusters in first-seen order
fn cluster<'a, K>(keyed: impl IntoIterator<Item = (K, &'a InstallmentOption)>) -> Vec<Cluster<'a, K>>
where
    K: Eq + Hash + Clone,
{
    let mut clusters: Vec<Cluster<'a, K>> = Vec::new();
    let mut index: HashMap<K, usize> = HashMap::new();

    for (key, option) in keyed {
        match index.get(&key) {
            Some(&position) => clusters[position].options.push(option),
            None => {
                index.insert(key.clone(), clusters.len());
                clusters.push(Cluster {
                    key,
                    options: vec![option],
                });
            }
        }
    }

    clusters
}

/// largest cluster, ties broken by the biggest number of installments
fn pick_max_option_count<K: Debug>(clusters: Vec<Cluster<'_, K>>) -> Result<Cluster<'_, K>> {
    let max_size = clusters
        .iter()
        .map(|cluster| cluster.options.len())
        .max()
        .ok_or(SelectionError::EmptyOptions)?;

    let mut candidates: Vec<Cluster<'_, K>> = clusters
        .into_iter()
        .filter(|cluster| cluster.options.len() == max_size)
        .collect();

    if candidates.len() == 1 {
        return candidates.pop().ok_or(SelectionError::EmptyOptions);
    }

    // every cluster holds at least one option
    let mut biggest = candidates[0].options[0].number_of_installments;
    let mut winner = 0;

    for (position, candidate) in candidates.iter().enumerate() {
        for option in &candidate.options {
            if option.number_of_installments > biggest {
                biggest = option.number_of_installments;
                winner = position;
            }
        }
    }

    let picked = candidates.swap_remove(winner);

    debug!(
        key = ?picked.key,
        size = max_size,
        tied = candidates.len() + 1,
        installments = biggest,
        "broke cluster size tie by max installments"
    );

    Ok(picked)
}
