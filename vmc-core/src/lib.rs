//! # Content-derived VMC identifiers
//!
//! This crate computes identifiers for genomic variation entities
//! (locations, alleles, haplotypes, genotypes) from their content, and groups
//! entities into exportable bundles. It provides:
//!
//! - The entity models (`Location`, `Allele`, `Haplotype`, `Genotype`, ...)
//! - Canonical VMC serialization of each entity
//! - Identifier derivation: `VMC:<prefix>_<sha512t24u(canonical form)>`
//! - JSON export/import with identifiers checked against content
//! - `VmcBundle` aggregation and its TOML configuration
//!
//! Entities are built bottom-up from child *identifiers*:
//!
//! ```rust
//! use vmc_core::{Allele, Completeness, Haplotype, Identifiable, Interval, Location};
//!
//! let location = Location::new(
//!     Interval::new(44908683, 44908684),
//!     "VMC:GS_IIB53T8CNeJJdUqzn9V_JnRtQadwWCbl",
//! );
//! assert_eq!(location.id(), "VMC:GL_9Jht-lguk_jnBvG-wLJbjmBw5v_v7rQo");
//!
//! let allele = Allele::new(location.id(), "C");
//! let haplotype = Haplotype::new(Completeness::Complete, [allele.id()]);
//! assert!(haplotype.id().starts_with("VMC:GH_"));
//! ```

pub mod bundle;
pub mod canonical;
pub mod config;
pub mod errors;
pub mod identifier;
pub mod models;
pub mod serialize;

pub use bundle::{BundleBuilder, DanglingReference, Meta, VmcBundle};
pub use canonical::Canonical;
pub use config::{BundleConfig, ReferencePolicy};
pub use errors::{VmcError, VmcResult};
pub use identifier::{
    DigestWriter, EntityKind, Identifiable, VMC_NAMESPACE, VmcId, identifier_for,
};
pub use models::{Allele, Completeness, Genotype, Haplotype, Identifier, Interval, Location};
