//! Canonical VMC serialization.
//!
//! Each entity renders to a single deterministic string that is used only as
//! digest input:
//!
//! ```text
//! <Interval:START:END>
//! <Location:<Identifier:SEQ_ID>:<Interval:START:END>>
//! <Allele:<Identifier:LOC_ID>:STATE>
//! <Haplotype:COMPLETENESS:[<Identifier:ID>;...]>
//! <Genotype:COMPLETENESS:[<Identifier:ID>;...]>
//! ```
//!
//! Child references are written as `<Identifier:...>` and never expanded, so a
//! digest depends only on an entity's direct content. Haplotype lists come out
//! sorted (they are sorted at construction); Genotype lists keep the caller's
//! order. Both rules feed into every identifier and must not be unified.

use crate::models::{Allele, Genotype, Haplotype, Identifier, Interval, Location};

/// Rendering into the canonical VMC text form.
pub trait Canonical {
    /// Append the canonical form to `out`.
    fn write_canonical(&self, out: &mut String);

    fn canonical_form(&self) -> String {
        let mut out = String::with_capacity(128);
        self.write_canonical(&mut out);
        out
    }
}

fn write_u64(out: &mut String, value: u64) {
    out.push_str(itoa::Buffer::new().format(value));
}

fn write_identifier_ref(out: &mut String, id: &str) {
    out.push_str("<Identifier:");
    out.push_str(id);
    out.push('>');
}

fn write_identifier_list(out: &mut String, ids: &[String]) {
    out.push('[');
    for (i, id) in ids.iter().enumerate() {
        if i > 0 {
            out.push(';');
        }
        write_identifier_ref(out, id);
    }
    out.push(']');
}

impl Canonical for Identifier {
    fn write_canonical(&self, out: &mut String) {
        out.push_str("<Identifier:");
        out.push_str(&self.namespace);
        out.push(':');
        out.push_str(&self.accession);
        out.push('>');
    }
}

impl Canonical for Interval {
    fn write_canonical(&self, out: &mut String) {
        out.push_str("<Interval:");
        write_u64(out, self.start);
        out.push(':');
        write_u64(out, self.end);
        out.push('>');
    }
}

impl Canonical for Location {
    fn write_canonical(&self, out: &mut String) {
        out.push_str("<Location:");
        write_identifier_ref(out, &self.sequence_id);
        out.push(':');
        self.interval.write_canonical(out);
        out.push('>');
    }
}

impl Canonical for Allele {
    fn write_canonical(&self, out: &mut String) {
        out.push_str("<Allele:");
        write_identifier_ref(out, &self.location_id);
        out.push(':');
        out.push_str(&self.state);
        out.push('>');
    }
}

impl Canonical for Haplotype {
    fn write_canonical(&self, out: &mut String) {
        out.push_str("<Haplotype:");
        out.push_str(self.completeness().as_str());
        out.push(':');
        write_identifier_list(out, self.allele_ids());
        out.push('>');
    }
}

impl Canonical for Genotype {
    fn write_canonical(&self, out: &mut String) {
        out.push_str("<Genotype:");
        out.push_str(self.completeness.as_str());
        out.push(':');
        write_identifier_list(out, &self.haplotype_ids);
        out.push('>');
    }
}
