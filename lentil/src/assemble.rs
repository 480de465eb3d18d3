use crate::error::{LentilError, Result};
use crate::sample_loader::SampleVector;

use log::{info, warn};
use nalgebra::DMatrix;
use std::collections::hash_map::Entry;
use std::collections::{BTreeSet, HashMap, HashSet};

/// A bin-pair missing from a sample carries no contact signal
pub const ABSENT_CONTACT: f64 = 0.0;

/// What to do when the same bin-pair shows up twice in one sample
#[derive(clap::ValueEnum, Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum DuplicatePolicy {
    /// refuse the sample
    #[default]
    Error,
    /// add up the values
    Sum,
    /// keep the value seen last in the file
    Last,
}

/// Dense `key x sample` matrix
#[derive(Debug, Clone, PartialEq)]
pub struct AssembledMatrix {
    /// canonical bin-pair keys in sorted order
    pub keys: Vec<Box<str>>,
    /// sample names in input order
    pub samples: Vec<Box<str>>,
    pub mat: DMatrix<f64>,
}

impl AssembledMatrix {
    pub fn num_keys(&self) -> usize {
        self.keys.len()
    }

    pub fn num_samples(&self) -> usize {
        self.samples.len()
    }

    /// Value of a bin-pair in a sample by their names
    pub fn get(&self, key: &str, sample: &str) -> Option<f64> {
        let i = self.keys.binary_search_by(|k| (**k).cmp(key)).ok()?;
        let j = self.samples.iter().position(|s| &**s == sample)?;
        Some(self.mat[(i, j)])
    }
}

///
/// Full outer join of sample vectors on their bin-pair keys. A key
/// absent from a sample is filled with [`ABSENT_CONTACT`].
///
/// * `samples` - sample vectors; their order is the column order
/// * `policy` - how repeated keys within one sample are combined
///
pub fn assemble_samples(
    samples: &[SampleVector],
    policy: DuplicatePolicy,
) -> Result<AssembledMatrix> {
    if samples.is_empty() {
        return Err(LentilError::Config("no samples to assemble".into()));
    }

    let mut seen: HashSet<&str> = HashSet::with_capacity(samples.len());
    for s in samples {
        if !seen.insert(s.name.as_ref()) {
            return Err(LentilError::Config(format!(
                "duplicate sample name: {}",
                s.name
            )));
        }
    }

    let collapsed = samples
        .iter()
        .map(|s| collapse_duplicates(s, policy))
        .collect::<Result<Vec<_>>>()?;

    let keys: Vec<Box<str>> = collapsed
        .iter()
        .flat_map(|kv| kv.keys().copied())
        .collect::<BTreeSet<&str>>()
        .into_iter()
        .map(Box::from)
        .collect();

    let key_to_row: HashMap<&str, usize> = keys
        .iter()
        .enumerate()
        .map(|(i, k)| (k.as_ref(), i))
        .collect();

    let mut mat = DMatrix::<f64>::from_element(keys.len(), samples.len(), ABSENT_CONTACT);

    for (j, kv) in collapsed.iter().enumerate() {
        if kv.is_empty() {
            warn!("sample {} has no contacts", samples[j].name);
        }
        for (&k, &v) in kv.iter() {
            mat[(key_to_row[k], j)] = v;
        }
    }

    info!(
        "assembled {} bin-pairs x {} samples",
        keys.len(),
        samples.len()
    );

    Ok(AssembledMatrix {
        samples: samples.iter().map(|s| s.name.clone()).collect(),
        keys,
        mat,
    })
}

fn collapse_duplicates(
    sample: &SampleVector,
    policy: DuplicatePolicy,
) -> Result<HashMap<&str, f64>> {
    let mut ret: HashMap<&str, f64> = HashMap::with_capacity(sample.len());
    let mut ndup = 0_usize;

    for (k, v) in sample.entries.iter() {
        match ret.entry(k.as_ref()) {
            Entry::Vacant(e) => {
                e.insert(*v);
            }
            Entry::Occupied(mut e) => {
                ndup += 1;
                match policy {
                    DuplicatePolicy::Error => {
                        return Err(LentilError::Parse(format!(
                            "bin-pair {} appears more than once in sample {}",
                            k, sample.name
                        )));
                    }
                    DuplicatePolicy::Sum => *e.get_mut() += *v,
                    DuplicatePolicy::Last => *e.get_mut() = *v,
                }
            }
        }
    }

    if ndup > 0 {
        warn!(
            "sample {}: {} repeated bin-pairs combined by {:?}",
            sample.name, ndup, policy
        );
    }
    Ok(ret)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample(name: &str, entries: Vec<(&str, f64)>) -> SampleVector {
        SampleVector::from_entries(name, entries)
    }

    #[test]
    fn empty_input_is_config_error() {
        let err = assemble_samples(&[], DuplicatePolicy::default()).unwrap_err();
        assert!(err.is_config());
    }

    #[test]
    fn duplicate_names_are_config_error() {
        let a = sample("A", vec![("k1", 1.0)]);
        let b = sample("A", vec![("k2", 1.0)]);
        let err = assemble_samples(&[a, b], DuplicatePolicy::default()).unwrap_err();
        assert!(err.is_config());
    }

    #[test]
    fn duplicate_key_policies() -> Result<()> {
        let s = sample("A", vec![("k1", 1.0), ("k2", 2.0), ("k1", 4.0)]);

        let err = assemble_samples(&[s.clone()], DuplicatePolicy::Error).unwrap_err();
        assert!(err.is_parse());

        let summed = assemble_samples(&[s.clone()], DuplicatePolicy::Sum)?;
        assert_eq!(summed.get("k1", "A"), Some(5.0));

        let last = assemble_samples(&[s], DuplicatePolicy::Last)?;
        assert_eq!(last.get("k1", "A"), Some(4.0));
        assert_eq!(last.num_keys(), 2);
        Ok(())
    }

    #[test]
    fn rows_sorted_columns_in_input_order() -> Result<()> {
        let b = sample("B", vec![("k3", 3.0), ("k1", 1.0)]);
        let a = sample("A", vec![("k2", 2.0)]);
        let m = assemble_samples(&[b, a], DuplicatePolicy::Error)?;

        let keys: Vec<&str> = m.keys.iter().map(|k| k.as_ref()).collect();
        assert_eq!(keys, vec!["k1", "k2", "k3"]);
        let names: Vec<&str> = m.samples.iter().map(|k| k.as_ref()).collect();
        assert_eq!(names, vec!["B", "A"]);

        assert_eq!(m.get("k2", "B"), Some(ABSENT_CONTACT));
        assert_eq!(m.get("k3", "B"), Some(3.0));
        assert_eq!(m.get("k4", "B"), None);
        Ok(())
    }
}
