//! Build the APOE epsilon haplotype/genotype bundle and print it as JSON.
//!
//! Usage:
//!   cargo run --example apoe_bundle -- [bundle.toml]

use std::path::Path;
use std::time::Instant;

use vmc_core::{
    Allele, BundleBuilder, BundleConfig, Completeness, Genotype, Haplotype, Identifiable,
    Interval, Location,
};

/// GRCh38 chr19 (NC_000019.10), as issued by the sequence registry.
const CHR19: &str = "VMC:GS_IIB53T8CNeJJdUqzn9V_JnRtQadwWCbl";

fn main() -> anyhow::Result<()> {
    let args: Vec<String> = std::env::args().collect();
    let config = match args.get(1) {
        Some(path) => BundleConfig::try_from(Path::new(path))?,
        None => BundleConfig::default(),
    };

    let t0 = Instant::now();

    let rs429358 = Location::new(Interval::new(44908683, 44908684), CHR19);
    let rs7412 = Location::new(Interval::new(44908821, 44908822), CHR19);

    let rs429358_t = Allele::new(rs429358.id(), "T");
    let rs429358_c = Allele::new(rs429358.id(), "C");
    let rs7412_t = Allele::new(rs7412.id(), "T");
    let rs7412_c = Allele::new(rs7412.id(), "C");

    let e1 = Haplotype::new(Completeness::Complete, [rs7412_t.id(), rs429358_c.id()]);
    let e2 = Haplotype::new(Completeness::Complete, [rs7412_t.id(), rs429358_t.id()]);
    let e3 = Haplotype::new(Completeness::Complete, [rs7412_c.id(), rs429358_t.id()]);
    let e4 = Haplotype::new(Completeness::Complete, [rs7412_c.id(), rs429358_c.id()]);

    let genotypes = [
        Genotype::new(Completeness::Complete, [e2.id(), e3.id()]),
        Genotype::new(Completeness::Complete, [e3.id(), e2.id()]),
        Genotype::new(Completeness::Complete, [e4.id(), e4.id()]),
    ];

    let bundle = BundleBuilder::new()
        .with_config(config)
        .with_locations([rs429358, rs7412])
        .with_alleles([rs429358_t, rs429358_c, rs7412_t, rs7412_c])
        .with_haplotypes([e1, e2, e3, e4])
        .with_genotypes(genotypes)
        .finish()?;

    eprintln!(
        "Identified {} entities in {:.3}ms",
        bundle.len(),
        t0.elapsed().as_secs_f64() * 1000.0
    );
    println!("{}", bundle.to_json_pretty()?);
    Ok(())
}
