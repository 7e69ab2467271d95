//! VMC bundles: entities grouped by kind and keyed by their identifiers.
//!
//! Keys are computed from content, so two entities of the same kind with
//! identical content collapse into one entry (the later one wins, which is
//! harmless since they are equal).

use std::collections::{BTreeMap, BTreeSet};

use chrono::{DateTime, Utc};
use log::{debug, warn};
use serde::{Deserialize, Serialize};

use crate::config::{BundleConfig, ReferencePolicy};
use crate::errors::{VmcError, VmcResult};
use crate::identifier::{EntityKind, Identifiable};
use crate::models::{Allele, Genotype, Haplotype, Location};

/// Meta version used when none is configured.
pub const DEFAULT_VERSION: &str = "0";

/// Bundle provenance. Not content-addressed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Meta {
    pub generated_at: DateTime<Utc>,
    pub version: String,
}

impl Meta {
    pub fn new(generated_at: DateTime<Utc>, version: impl Into<String>) -> Self {
        Self {
            generated_at,
            version: version.into(),
        }
    }

    /// Stamped with the current time and the default version.
    pub fn now() -> Self {
        Self::new(Utc::now(), DEFAULT_VERSION)
    }
}

impl Default for Meta {
    fn default() -> Self {
        Self::now()
    }
}

/// A child identifier that names no entity in the bundle.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord)]
pub struct DanglingReference {
    /// Identifier of the entity holding the reference.
    pub from: String,
    /// Kind the reference should resolve to.
    pub kind: EntityKind,
    pub missing: String,
}

#[cfg(feature = "parallel")]
fn keyed<E>(entities: Vec<E>) -> BTreeMap<String, E>
where
    E: Identifiable + Send,
{
    use rayon::prelude::*;

    let pairs: Vec<(String, E)> = entities.into_par_iter().map(|e| (e.id(), e)).collect();
    pairs.into_iter().collect()
}

#[cfg(not(feature = "parallel"))]
fn keyed<E: Identifiable>(entities: Vec<E>) -> BTreeMap<String, E> {
    let mut writer = crate::identifier::DigestWriter::new();
    entities
        .into_iter()
        .map(|e| (writer.identifier(&e), e))
        .collect()
}

fn keyed_logged<E>(entities: Vec<E>) -> BTreeMap<String, E>
where
    E: Identifiable + Send,
{
    let supplied = entities.len();
    let map = keyed(entities);
    if map.len() < supplied {
        debug!(
            "Collapsed {} duplicate {} entities",
            supplied - map.len(),
            E::KIND
        );
    }
    map
}

fn check_keys<E: Identifiable>(map: &BTreeMap<String, E>) -> VmcResult<()> {
    for (key, entity) in map {
        crate::serialize::verify_id(entity, Some(key))?;
    }
    Ok(())
}

/// An exportable collection of VMC entities plus provenance.
///
/// Serializes as `meta, locations, alleles, haplotypes, genotypes`, each map
/// ordered by identifier.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "BundleRecord")]
pub struct VmcBundle {
    meta: Meta,
    locations: BTreeMap<String, Location>,
    alleles: BTreeMap<String, Allele>,
    haplotypes: BTreeMap<String, Haplotype>,
    genotypes: BTreeMap<String, Genotype>,
}

#[derive(Deserialize)]
#[serde(deny_unknown_fields)]
struct BundleRecord {
    meta: Meta,
    #[serde(default)]
    locations: BTreeMap<String, Location>,
    #[serde(default)]
    alleles: BTreeMap<String, Allele>,
    #[serde(default)]
    haplotypes: BTreeMap<String, Haplotype>,
    #[serde(default)]
    genotypes: BTreeMap<String, Genotype>,
}

impl TryFrom<BundleRecord> for VmcBundle {
    type Error = VmcError;

    fn try_from(record: BundleRecord) -> VmcResult<Self> {
        check_keys(&record.locations)?;
        check_keys(&record.alleles)?;
        check_keys(&record.haplotypes)?;
        check_keys(&record.genotypes)?;
        Ok(VmcBundle {
            meta: record.meta,
            locations: record.locations,
            alleles: record.alleles,
            haplotypes: record.haplotypes,
            genotypes: record.genotypes,
        })
    }
}

impl VmcBundle {
    pub fn new(
        meta: Meta,
        locations: impl IntoIterator<Item = Location>,
        alleles: impl IntoIterator<Item = Allele>,
        haplotypes: impl IntoIterator<Item = Haplotype>,
        genotypes: impl IntoIterator<Item = Genotype>,
    ) -> Self {
        let bundle = VmcBundle {
            meta,
            locations: keyed_logged(locations.into_iter().collect()),
            alleles: keyed_logged(alleles.into_iter().collect()),
            haplotypes: keyed_logged(haplotypes.into_iter().collect()),
            genotypes: keyed_logged(genotypes.into_iter().collect()),
        };
        debug!(
            "Built bundle with {} locations, {} alleles, {} haplotypes, {} genotypes",
            bundle.locations.len(),
            bundle.alleles.len(),
            bundle.haplotypes.len(),
            bundle.genotypes.len()
        );
        bundle
    }

    pub fn builder() -> BundleBuilder {
        BundleBuilder::new()
    }

    pub fn meta(&self) -> &Meta {
        &self.meta
    }

    pub fn locations(&self) -> &BTreeMap<String, Location> {
        &self.locations
    }

    pub fn alleles(&self) -> &BTreeMap<String, Allele> {
        &self.alleles
    }

    pub fn haplotypes(&self) -> &BTreeMap<String, Haplotype> {
        &self.haplotypes
    }

    pub fn genotypes(&self) -> &BTreeMap<String, Genotype> {
        &self.genotypes
    }

    /// Total number of entities across all four maps.
    pub fn len(&self) -> usize {
        self.locations.len() + self.alleles.len() + self.haplotypes.len() + self.genotypes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Child identifiers that do not resolve to an entity in this bundle.
    ///
    /// Location sequence ids come from an external registry and are never
    /// reported.
    pub fn dangling_references(&self) -> Vec<DanglingReference> {
        let mut dangling = BTreeSet::new();

        for (id, allele) in &self.alleles {
            if !self.locations.contains_key(&allele.location_id) {
                dangling.insert(DanglingReference {
                    from: id.clone(),
                    kind: EntityKind::Location,
                    missing: allele.location_id.clone(),
                });
            }
        }
        for (id, haplotype) in &self.haplotypes {
            for allele_id in haplotype.allele_ids() {
                if !self.alleles.contains_key(allele_id) {
                    dangling.insert(DanglingReference {
                        from: id.clone(),
                        kind: EntityKind::Allele,
                        missing: allele_id.clone(),
                    });
                }
            }
        }
        for (id, genotype) in &self.genotypes {
            for haplotype_id in &genotype.haplotype_ids {
                if !self.haplotypes.contains_key(haplotype_id) {
                    dangling.insert(DanglingReference {
                        from: id.clone(),
                        kind: EntityKind::Haplotype,
                        missing: haplotype_id.clone(),
                    });
                }
            }
        }

        dangling.into_iter().collect()
    }

    pub fn to_json(&self) -> VmcResult<String> {
        Ok(serde_json::to_string(self)?)
    }

    pub fn to_json_pretty(&self) -> VmcResult<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Load a bundle, checking every map key against its entity's identifier.
    pub fn from_json(json: &str) -> VmcResult<Self> {
        Ok(serde_json::from_str(json)?)
    }
}

/// Builder for a [`VmcBundle`].
///
/// ```rust
/// use vmc_core::{Allele, BundleBuilder, Identifiable, Interval, Location};
///
/// let location = Location::new(
///     Interval::new(44908683, 44908684),
///     "VMC:GS_IIB53T8CNeJJdUqzn9V_JnRtQadwWCbl",
/// );
/// let allele = Allele::new(location.id(), "C");
///
/// let bundle = BundleBuilder::new()
///     .with_locations([location])
///     .with_alleles([allele])
///     .finish()
///     .unwrap();
/// assert_eq!(bundle.len(), 2);
/// ```
#[derive(Debug, Default)]
pub struct BundleBuilder {
    config: BundleConfig,
    meta: Option<Meta>,
    locations: Vec<Location>,
    alleles: Vec<Allele>,
    haplotypes: Vec<Haplotype>,
    genotypes: Vec<Genotype>,
}

impl BundleBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_config(mut self, config: BundleConfig) -> Self {
        self.config = config;
        self
    }

    /// Use this meta instead of the one derived from the config.
    pub fn with_meta(mut self, meta: Meta) -> Self {
        self.meta = Some(meta);
        self
    }

    pub fn with_locations(mut self, locations: impl IntoIterator<Item = Location>) -> Self {
        self.locations.extend(locations);
        self
    }

    pub fn with_alleles(mut self, alleles: impl IntoIterator<Item = Allele>) -> Self {
        self.alleles.extend(alleles);
        self
    }

    pub fn with_haplotypes(mut self, haplotypes: impl IntoIterator<Item = Haplotype>) -> Self {
        self.haplotypes.extend(haplotypes);
        self
    }

    pub fn with_genotypes(mut self, genotypes: impl IntoIterator<Item = Genotype>) -> Self {
        self.genotypes.extend(genotypes);
        self
    }

    /// Build the bundle and apply the configured [`ReferencePolicy`].
    pub fn finish(self) -> VmcResult<VmcBundle> {
        let meta = self.meta.unwrap_or_else(|| self.config.meta());
        let bundle = VmcBundle::new(
            meta,
            self.locations,
            self.alleles,
            self.haplotypes,
            self.genotypes,
        );

        if self.config.references == ReferencePolicy::Allow {
            return Ok(bundle);
        }
        let dangling = bundle.dangling_references();
        if dangling.is_empty() {
            return Ok(bundle);
        }
        match self.config.references {
            ReferencePolicy::Deny => Err(VmcError::DanglingReferences(dangling)),
            _ => {
                for reference in &dangling {
                    warn!(
                        "{} references missing {} {}",
                        reference.from, reference.kind, reference.missing
                    );
                }
                Ok(bundle)
            }
        }
    }
}
