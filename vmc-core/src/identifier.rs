//! VMC identifier derivation.
//!
//! An identifier is `<namespace>:<prefix>_<sha512t24u(canonical form)>`, e.g.
//! `VMC:GL_9Jht-lguk_jnBvG-wLJbjmBw5v_v7rQo`. Identifiers are computed from
//! content on demand and never stored on the entity.
//!
//! [`DigestWriter`] keeps one scratch buffer for the canonical bytes, so
//! identifying a large batch of entities does not allocate a canonical string
//! per entity. [`identifier_for`] is the one-shot form.

use std::fmt;
use std::str::FromStr;

use vmc_digest::{DIGEST_BYTES, ENCODED_DIGEST_LEN, decode_sha512t24u, sha512t24u};

use crate::canonical::Canonical;
use crate::errors::{VmcError, VmcResult};
use crate::models::{Allele, Genotype, Haplotype, Identifier, Location};

/// Namespace of every identifier this crate derives.
pub const VMC_NAMESPACE: &str = "VMC";

/// The kinds of object a VMC identifier can name, keyed by accession prefix.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum EntityKind {
    /// `GS`: issued by an external sequence registry, never derived here.
    Sequence,
    Location,
    Allele,
    Haplotype,
    Genotype,
}

impl EntityKind {
    pub fn prefix(&self) -> &'static str {
        match self {
            EntityKind::Sequence => "GS",
            EntityKind::Location => "GL",
            EntityKind::Allele => "GA",
            EntityKind::Haplotype => "GH",
            EntityKind::Genotype => "GG",
        }
    }

    pub fn from_prefix(prefix: &str) -> Option<Self> {
        match prefix {
            "GS" => Some(EntityKind::Sequence),
            "GL" => Some(EntityKind::Location),
            "GA" => Some(EntityKind::Allele),
            "GH" => Some(EntityKind::Haplotype),
            "GG" => Some(EntityKind::Genotype),
            _ => None,
        }
    }
}

impl fmt::Display for EntityKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            EntityKind::Sequence => "Sequence",
            EntityKind::Location => "Location",
            EntityKind::Allele => "Allele",
            EntityKind::Haplotype => "Haplotype",
            EntityKind::Genotype => "Genotype",
        };
        f.write_str(name)
    }
}

/// An entity whose identifier is derived from its canonical form.
pub trait Identifiable: Canonical {
    const KIND: EntityKind;

    /// The content-derived identifier, recomputed on every call.
    fn id(&self) -> String {
        identifier_for(self)
    }
}

impl Identifiable for Location {
    const KIND: EntityKind = EntityKind::Location;
}

impl Identifiable for Allele {
    const KIND: EntityKind = EntityKind::Allele;
}

impl Identifiable for Haplotype {
    const KIND: EntityKind = EntityKind::Haplotype;
}

impl Identifiable for Genotype {
    const KIND: EntityKind = EntityKind::Genotype;
}

/// Compute the VMC identifier of `entity`.
pub fn identifier_for<E: Identifiable + ?Sized>(entity: &E) -> String {
    DigestWriter::new().identifier(entity)
}

fn format_identifier(kind: EntityKind, digest: &str) -> String {
    let mut id = String::with_capacity(VMC_NAMESPACE.len() + 4 + ENCODED_DIGEST_LEN);
    id.push_str(VMC_NAMESPACE);
    id.push(':');
    id.push_str(kind.prefix());
    id.push('_');
    id.push_str(digest);
    id
}

/// Reusable digest writer that avoids a canonical-string allocation per call.
pub struct DigestWriter {
    buf: String,
}

impl DigestWriter {
    pub fn new() -> Self {
        Self {
            buf: String::with_capacity(512),
        }
    }

    /// sha512t24u digest of any canonical value, without namespace or prefix.
    pub fn digest<C: Canonical + ?Sized>(&mut self, value: &C) -> String {
        self.buf.clear();
        value.write_canonical(&mut self.buf);
        debug_assert!(
            self.buf.is_ascii(),
            "canonical form must be ASCII: {}",
            self.buf
        );
        sha512t24u(self.buf.as_bytes())
    }

    /// Full `VMC:<prefix>_<digest>` identifier for an entity.
    pub fn identifier<E: Identifiable + ?Sized>(&mut self, entity: &E) -> String {
        let digest = self.digest(entity);
        format_identifier(E::KIND, &digest)
    }
}

impl Default for DigestWriter {
    fn default() -> Self {
        Self::new()
    }
}

/// A parsed VMC identifier: namespace, kind, and the decoded digest.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct VmcId {
    pub namespace: String,
    pub kind: EntityKind,
    pub digest: String,
    pub digest_bytes: [u8; DIGEST_BYTES],
}

impl VmcId {
    /// Parse `namespace:<prefix>_<digest>`, checking that the digest decodes to
    /// exactly 24 bytes.
    pub fn parse(id: &str) -> VmcResult<Self> {
        let identifier: Identifier = id.parse()?;
        let (prefix, digest) = identifier
            .accession
            .split_once('_')
            .ok_or_else(|| VmcError::MalformedIdentifier(id.to_string()))?;
        let kind = EntityKind::from_prefix(prefix)
            .ok_or_else(|| VmcError::UnknownPrefix(prefix.to_string()))?;
        let digest_bytes = decode_sha512t24u(digest)?;

        Ok(VmcId {
            namespace: identifier.namespace.clone(),
            kind,
            digest: digest.to_string(),
            digest_bytes,
        })
    }
}

impl FromStr for VmcId {
    type Err = VmcError;

    fn from_str(s: &str) -> VmcResult<Self> {
        VmcId::parse(s)
    }
}

impl fmt::Display for VmcId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}_{}", self.namespace, self.kind.prefix(), self.digest)
    }
}
