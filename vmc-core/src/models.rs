//! VMC data models.
//!
//! Immutable value types for the variation graph. A parent holds the
//! *identifiers* of its children, never the children themselves, so every
//! entity can be digested and serialized on its own.
//!
//! Field content is a caller contract: accessions, sequence ids and states must
//! be ASCII, and intervals must satisfy `start <= end`. Nothing here rewrites
//! input, since any silent fix would change the derived identifier.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::errors::{VmcError, VmcResult};

/// A `<namespace, accession>` pair that refers to an object.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Identifier {
    pub namespace: String,
    pub accession: String,
}

impl Identifier {
    pub fn new(namespace: impl Into<String>, accession: impl Into<String>) -> Self {
        Self {
            namespace: namespace.into(),
            accession: accession.into(),
        }
    }
}

impl fmt::Display for Identifier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.namespace, self.accession)
    }
}

impl FromStr for Identifier {
    type Err = VmcError;

    /// Split `namespace:accession` at the first colon.
    fn from_str(s: &str) -> VmcResult<Self> {
        match s.split_once(':') {
            Some((namespace, accession)) if !namespace.is_empty() && !accession.is_empty() => {
                Ok(Identifier::new(namespace, accession))
            }
            _ => Err(VmcError::MalformedIdentifier(s.to_string())),
        }
    }
}

/// A `[start, end)` position pair in interbase (0-based, half-open) coordinates.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct Interval {
    pub start: u64,
    pub end: u64,
}

impl Interval {
    pub fn new(start: u64, end: u64) -> Self {
        Self { start, end }
    }
}

/// An Interval on a Sequence.
///
/// `sequence_id` is an opaque reference (normally `VMC:GS_...`) issued by an
/// external sequence registry.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Deserialize)]
#[serde(try_from = "crate::serialize::LocationRecord")]
pub struct Location {
    pub interval: Interval,
    pub sequence_id: String,
}

impl Location {
    pub fn new(interval: Interval, sequence_id: impl Into<String>) -> Self {
        Self {
            interval,
            sequence_id: sequence_id.into(),
        }
    }
}

/// A contiguous change at a Location. An empty `state` is a deletion.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Deserialize)]
#[serde(try_from = "crate::serialize::AlleleRecord")]
pub struct Allele {
    pub location_id: String,
    pub state: String,
}

impl Allele {
    pub fn new(location_id: impl Into<String>, state: impl Into<String>) -> Self {
        Self {
            location_id: location_id.into(),
            state: state.into(),
        }
    }
}

/// Declares whether the listed child identifiers of a haplotype or genotype are
/// known to be exhaustive.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum Completeness {
    Unknown,
    Partial,
    Complete,
}

impl Completeness {
    pub fn as_str(&self) -> &'static str {
        match self {
            Completeness::Unknown => "UNKNOWN",
            Completeness::Partial => "PARTIAL",
            Completeness::Complete => "COMPLETE",
        }
    }
}

impl fmt::Display for Completeness {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Completeness {
    type Err = VmcError;

    fn from_str(s: &str) -> VmcResult<Self> {
        match s {
            "UNKNOWN" => Ok(Completeness::Unknown),
            "PARTIAL" => Ok(Completeness::Partial),
            "COMPLETE" => Ok(Completeness::Complete),
            _ => Err(VmcError::UnknownCompleteness(s.to_string())),
        }
    }
}

/// A set of zero or more Alleles on a single instance of a Sequence.
///
/// Allele identifiers are sorted once, here, so the identifier does not depend on
/// the order they were supplied in. The fields are private to keep that true.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Deserialize)]
#[serde(try_from = "crate::serialize::HaplotypeRecord")]
pub struct Haplotype {
    completeness: Completeness,
    allele_ids: Vec<String>,
}

impl Haplotype {
    pub fn new<I, S>(completeness: Completeness, allele_ids: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let mut allele_ids: Vec<String> = allele_ids.into_iter().map(Into::into).collect();
        allele_ids.sort();
        Self {
            completeness,
            allele_ids,
        }
    }

    pub fn completeness(&self) -> Completeness {
        self.completeness
    }

    /// Allele identifiers in lexicographic order.
    pub fn allele_ids(&self) -> &[String] {
        &self.allele_ids
    }
}

/// A list of Haplotypes.
///
/// Unlike [`Haplotype`], the order of `haplotype_ids` is kept as supplied and is
/// part of the genotype's identity.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Deserialize)]
#[serde(try_from = "crate::serialize::GenotypeRecord")]
pub struct Genotype {
    pub completeness: Completeness,
    pub haplotype_ids: Vec<String>,
}

impl Genotype {
    pub fn new<I, S>(completeness: Completeness, haplotype_ids: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            completeness,
            haplotype_ids: haplotype_ids.into_iter().map(Into::into).collect(),
        }
    }
}
