//! VMC identifier compliance tests.
//!
//! Vectors are the APOE rs429358/rs7412 alleles and epsilon haplotypes on
//! GRCh38 chr19 (NC_000019.10), built bottom-up.

use pretty_assertions::{assert_eq, assert_ne};
use rstest::rstest;

use vmc_core::{
    Allele, Canonical, Completeness, EntityKind, Genotype, Haplotype, Identifiable, Interval,
    Location, VmcId,
};

const CHR19: &str = "VMC:GS_IIB53T8CNeJJdUqzn9V_JnRtQadwWCbl";

const RS429358_LOCATION: &str = "VMC:GL_9Jht-lguk_jnBvG-wLJbjmBw5v_v7rQo";
const RS7412_LOCATION: &str = "VMC:GL_LStELzYmlIQP3Zan9FhibgiFGAgSM7CI";

const RS429358_T: &str = "VMC:GA_xXBYkzzu1AH0HRbLeFESvllmAKUNN1MF";
const RS429358_C: &str = "VMC:GA_8vT5C3XyPLVz4_AXCI5P-J0gobxoGdxY";
const RS7412_T: &str = "VMC:GA_FABxPGRP7dT3sKot_91vXQrPvzfNYCbX";
const RS7412_C: &str = "VMC:GA_Bdf7gntpo-snoQdY356RrpCuyrrzYynA";

const EPSILON_2: &str = "VMC:GH_exlsvXjQFFhoMxc5IKUvdgOnMAbZ2oBh";
const EPSILON_3: &str = "VMC:GH_SF_ZVWlwehopjxKDIF__paB1Q2DwjB4B";
const EPSILON_4: &str = "VMC:GH_d3UvMyD-ArHLi-ZucGWxURhfeALz7arO";

fn rs429358() -> Location {
    Location::new(Interval::new(44908683, 44908684), CHR19)
}

fn rs7412() -> Location {
    Location::new(Interval::new(44908821, 44908822), CHR19)
}

// ============================================================================
// Canonical forms
// ============================================================================

#[test]
fn test_interval_canonical_form() {
    assert_eq!(
        Interval::new(44908683, 44908684).canonical_form(),
        "<Interval:44908683:44908684>"
    );
}

#[test]
fn test_location_canonical_form() {
    assert_eq!(
        rs429358().canonical_form(),
        "<Location:<Identifier:VMC:GS_IIB53T8CNeJJdUqzn9V_JnRtQadwWCbl>:<Interval:44908683:44908684>>"
    );
}

#[test]
fn test_location_digest_matches_canonical_form() {
    let location = rs429358();
    assert_eq!(
        vmc_digest::sha512t24u(location.canonical_form()),
        "9Jht-lguk_jnBvG-wLJbjmBw5v_v7rQo"
    );
}

// ============================================================================
// Identifiers
// ============================================================================

#[rstest]
#[case(rs429358(), RS429358_LOCATION)]
#[case(rs7412(), RS7412_LOCATION)]
fn test_location_identifiers(#[case] location: Location, #[case] expected: &str) {
    assert_eq!(location.id(), expected);
}

#[rstest]
#[case(RS429358_LOCATION, "T", RS429358_T)]
#[case(RS429358_LOCATION, "C", RS429358_C)]
#[case(RS7412_LOCATION, "T", RS7412_T)]
#[case(RS7412_LOCATION, "C", RS7412_C)]
fn test_allele_identifiers(#[case] location_id: &str, #[case] state: &str, #[case] expected: &str) {
    assert_eq!(Allele::new(location_id, state).id(), expected);
}

#[test]
fn test_alleles_chain_from_computed_location() {
    let allele = Allele::new(rs429358().id(), "C");
    assert_eq!(allele.id(), RS429358_C);
}

#[rstest]
#[case(&[RS7412_T, RS429358_T], EPSILON_2)]
#[case(&[RS7412_C, RS429358_T], EPSILON_3)]
#[case(&[RS7412_C, RS429358_C], EPSILON_4)]
fn test_haplotype_identifiers(#[case] allele_ids: &[&str], #[case] expected: &str) {
    let haplotype = Haplotype::new(Completeness::Complete, allele_ids.iter().copied());
    assert_eq!(haplotype.id(), expected);
}

#[test]
fn test_epsilon4_canonical_form() {
    let haplotype = Haplotype::new(Completeness::Complete, [RS7412_C, RS429358_C]);
    assert_eq!(
        haplotype.canonical_form(),
        "<Haplotype:COMPLETE:[<Identifier:VMC:GA_8vT5C3XyPLVz4_AXCI5P-J0gobxoGdxY>;<Identifier:VMC:GA_Bdf7gntpo-snoQdY356RrpCuyrrzYynA>]>"
    );
}

#[test]
fn test_haplotype_order_independent() {
    let forward = Haplotype::new(Completeness::Complete, [RS429358_C, RS7412_C]);
    let reverse = Haplotype::new(Completeness::Complete, [RS7412_C, RS429358_C]);
    assert_eq!(forward.canonical_form(), reverse.canonical_form());
    assert_eq!(forward.id(), reverse.id());
    assert_eq!(forward.id(), EPSILON_4);
}

#[test]
fn test_genotype_homozygous_canonical_form() {
    let genotype = Genotype::new(Completeness::Complete, [EPSILON_4, EPSILON_4]);
    assert_eq!(
        genotype.canonical_form(),
        "<Genotype:COMPLETE:[<Identifier:VMC:GH_d3UvMyD-ArHLi-ZucGWxURhfeALz7arO>;<Identifier:VMC:GH_d3UvMyD-ArHLi-ZucGWxURhfeALz7arO>]>"
    );
    assert_eq!(genotype.id(), "VMC:GG_xKLc-PCmarZcccep6paE2C4W-vNd5nB0");
}

#[test]
fn test_genotype_order_sensitive() {
    let e2e3 = Genotype::new(Completeness::Complete, [EPSILON_2, EPSILON_3]);
    let e3e2 = Genotype::new(Completeness::Complete, [EPSILON_3, EPSILON_2]);
    assert_ne!(e2e3.canonical_form(), e3e2.canonical_form());
    assert_eq!(e2e3.id(), "VMC:GG_WGW4k7qN03MSy84fMuby7Otdhn2aGaBS");
    assert_eq!(e3e2.id(), "VMC:GG_ISiZFONyC1HHaBxi2kBklfDQEdb5CRRe");
}

// ============================================================================
// Determinism and content sensitivity
// ============================================================================

#[test]
fn test_identifiers_are_deterministic() {
    let genotype = Genotype::new(Completeness::Partial, [EPSILON_2]);
    assert_eq!(genotype.id(), genotype.id());
    assert_eq!(genotype.id(), genotype.clone().id());
}

#[test]
fn test_location_content_sensitivity() {
    let base = rs429358();
    let moved_start = Location::new(Interval::new(44908682, 44908684), CHR19);
    let moved_end = Location::new(Interval::new(44908683, 44908685), CHR19);
    let other_sequence = Location::new(
        Interval::new(44908683, 44908684),
        "VMC:GS_F-LrLMe1SRpfUZHkQmvkVKFEGaoDeHul",
    );
    assert_ne!(base.id(), moved_start.id());
    assert_ne!(base.id(), moved_end.id());
    assert_ne!(base.id(), other_sequence.id());
}

#[test]
fn test_allele_content_sensitivity() {
    let base = Allele::new(RS429358_LOCATION, "C");
    assert_ne!(base.id(), Allele::new(RS429358_LOCATION, "CC").id());
    assert_ne!(base.id(), Allele::new(RS429358_LOCATION, "").id());
    assert_ne!(base.id(), Allele::new(RS7412_LOCATION, "C").id());
}

#[test]
fn test_completeness_changes_identifier() {
    let complete = Haplotype::new(Completeness::Complete, [RS7412_C, RS429358_C]);
    let partial = Haplotype::new(Completeness::Partial, [RS7412_C, RS429358_C]);
    let unknown = Haplotype::new(Completeness::Unknown, [RS7412_C, RS429358_C]);
    assert_ne!(complete.id(), partial.id());
    assert_ne!(partial.id(), unknown.id());

    let genotype = Genotype::new(Completeness::Complete, [EPSILON_4]);
    let partial_genotype = Genotype::new(Completeness::Partial, [EPSILON_4]);
    assert_ne!(genotype.id(), partial_genotype.id());
}

#[test]
fn test_haplotype_and_genotype_never_share_identifiers() {
    let haplotype = Haplotype::new(Completeness::Complete, [EPSILON_4]);
    let genotype = Genotype::new(Completeness::Complete, [EPSILON_4]);
    assert_ne!(haplotype.id(), genotype.id());
}

// ============================================================================
// Digest round trip
// ============================================================================

#[rstest]
#[case(RS429358_LOCATION, EntityKind::Location)]
#[case(RS7412_C, EntityKind::Allele)]
#[case(EPSILON_3, EntityKind::Haplotype)]
#[case("VMC:GG_xKLc-PCmarZcccep6paE2C4W-vNd5nB0", EntityKind::Genotype)]
fn test_identifier_suffix_decodes_to_24_bytes(#[case] id: &str, #[case] kind: EntityKind) {
    let parsed = VmcId::parse(id).unwrap();
    assert_eq!(parsed.kind, kind);
    assert_eq!(parsed.digest_bytes.len(), vmc_digest::DIGEST_BYTES);
}

#[test]
fn test_every_generated_identifier_decodes() {
    let mut ids = Vec::new();
    for start in [0u64, 1, 100, 44908683] {
        let location = Location::new(Interval::new(start, start + 1), CHR19);
        for state in ["", "A", "C", "GT"] {
            ids.push(Allele::new(location.id(), state).id());
        }
        ids.push(location.id());
    }
    for id in &ids {
        let parsed = VmcId::parse(id).unwrap();
        assert_eq!(parsed.digest_bytes.len(), 24);
        assert_eq!(&parsed.to_string(), id);
    }
}
