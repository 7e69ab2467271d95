//! Structured (JSON) form of the VMC entities.
//!
//! Every entity serializes with its computed `id` first, then its content
//! fields in declared order:
//!
//! - Location: `id, interval{start,end}, sequence_id`
//! - Allele: `id, location_id, state`
//! - Haplotype: `id, completeness, allele_ids` (sorted)
//! - Genotype: `id, completeness, haplotype_ids` (as supplied)
//!
//! On the way back in, `id` is optional. When it is present it has to match the
//! identifier recomputed from the content.

use serde::ser::SerializeStruct;
use serde::{Deserialize, Serialize, Serializer};

use crate::errors::{VmcError, VmcResult};
use crate::identifier::Identifiable;
use crate::models::{Allele, Completeness, Genotype, Haplotype, Interval, Location};

impl Serialize for Location {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut state = serializer.serialize_struct("Location", 3)?;
        state.serialize_field("id", &self.id())?;
        state.serialize_field("interval", &self.interval)?;
        state.serialize_field("sequence_id", &self.sequence_id)?;
        state.end()
    }
}

impl Serialize for Allele {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut state = serializer.serialize_struct("Allele", 3)?;
        state.serialize_field("id", &self.id())?;
        state.serialize_field("location_id", &self.location_id)?;
        state.serialize_field("state", &self.state)?;
        state.end()
    }
}

impl Serialize for Haplotype {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut state = serializer.serialize_struct("Haplotype", 3)?;
        state.serialize_field("id", &self.id())?;
        state.serialize_field("completeness", &self.completeness())?;
        state.serialize_field("allele_ids", self.allele_ids())?;
        state.end()
    }
}

impl Serialize for Genotype {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut state = serializer.serialize_struct("Genotype", 3)?;
        state.serialize_field("id", &self.id())?;
        state.serialize_field("completeness", &self.completeness)?;
        state.serialize_field("haplotype_ids", &self.haplotype_ids)?;
        state.end()
    }
}

/// Check a claimed identifier against the one derived from content.
pub(crate) fn verify_id<E: Identifiable>(entity: &E, claimed: Option<&str>) -> VmcResult<()> {
    if let Some(found) = claimed {
        let expected = entity.id();
        if expected != found {
            return Err(VmcError::IdentifierMismatch {
                expected,
                found: found.to_string(),
            });
        }
    }
    Ok(())
}

#[derive(Deserialize)]
#[serde(deny_unknown_fields)]
pub(crate) struct LocationRecord {
    #[serde(default)]
    id: Option<String>,
    interval: Interval,
    sequence_id: String,
}

impl TryFrom<LocationRecord> for Location {
    type Error = VmcError;

    fn try_from(record: LocationRecord) -> VmcResult<Self> {
        let location = Location::new(record.interval, record.sequence_id);
        verify_id(&location, record.id.as_deref())?;
        Ok(location)
    }
}

#[derive(Deserialize)]
#[serde(deny_unknown_fields)]
pub(crate) struct AlleleRecord {
    #[serde(default)]
    id: Option<String>,
    location_id: String,
    state: String,
}

impl TryFrom<AlleleRecord> for Allele {
    type Error = VmcError;

    fn try_from(record: AlleleRecord) -> VmcResult<Self> {
        let allele = Allele::new(record.location_id, record.state);
        verify_id(&allele, record.id.as_deref())?;
        Ok(allele)
    }
}

#[derive(Deserialize)]
#[serde(deny_unknown_fields)]
pub(crate) struct HaplotypeRecord {
    #[serde(default)]
    id: Option<String>,
    completeness: Completeness,
    allele_ids: Vec<String>,
}

impl TryFrom<HaplotypeRecord> for Haplotype {
    type Error = VmcError;

    fn try_from(record: HaplotypeRecord) -> VmcResult<Self> {
        let haplotype = Haplotype::new(record.completeness, record.allele_ids);
        verify_id(&haplotype, record.id.as_deref())?;
        Ok(haplotype)
    }
}

#[derive(Deserialize)]
#[serde(deny_unknown_fields)]
pub(crate) struct GenotypeRecord {
    #[serde(default)]
    id: Option<String>,
    completeness: Completeness,
    haplotype_ids: Vec<String>,
}

impl TryFrom<GenotypeRecord> for Genotype {
    type Error = VmcError;

    fn try_from(record: GenotypeRecord) -> VmcResult<Self> {
        let genotype = Genotype::new(record.completeness, record.haplotype_ids);
        verify_id(&genotype, record.id.as_deref())?;
        Ok(genotype)
    }
}
