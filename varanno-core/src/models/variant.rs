use std::fmt::{self, Display};

use serde::{Deserialize, Serialize};

use crate::links::{dbsnp_url, ensembl_url};

///
/// A single user-supplied variant call, as produced by the upstream parsers.
///
/// The genotype is a two-letter allele pair over {A,C,G,T}, or `"--"` when
/// the call was missing or unreadable. Variants are never mutated after
/// construction; annotation produces new values.
///
#[derive(Eq, PartialEq, Hash, Debug, Clone, Serialize, Deserialize)]
pub struct Variant {
    pub rsid: String,
    pub chrom: String,
    pub pos: u64,
    pub genotype: String,
}

impl Variant {
    pub fn new(rsid: &str, chrom: &str, pos: u64, genotype: &str) -> Self {
        Variant {
            rsid: rsid.to_string(),
            chrom: chrom.to_string(),
            pos,
            genotype: genotype.to_string(),
        }
    }
}

impl Display for Variant {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} {}:{} {}",
            self.rsid, self.chrom, self.pos, self.genotype
        )
    }
}

/// Derived reference-site URLs for one variant. Pure string templates,
/// constructible for any rsid without network access.
#[derive(Eq, PartialEq, Debug, Clone, Serialize, Deserialize)]
pub struct VariantLinks {
    pub dbsnp: String,
    pub ensembl: String,
}

/// A [Variant] plus its derived reference links. Recomputed per request,
/// never persisted.
#[derive(Eq, PartialEq, Debug, Clone, Serialize, Deserialize)]
pub struct AnnotatedVariant {
    pub rsid: String,
    pub chrom: String,
    pub pos: u64,
    pub genotype: String,
    pub links: VariantLinks,
}

impl From<&Variant> for AnnotatedVariant {
    fn from(variant: &Variant) -> Self {
        AnnotatedVariant {
            rsid: variant.rsid.clone(),
            chrom: variant.chrom.clone(),
            pos: variant.pos,
            genotype: variant.genotype.clone(),
            links: VariantLinks {
                dbsnp: dbsnp_url(&variant.rsid),
                ensembl: ensembl_url(&variant.chrom, variant.pos, &variant.rsid),
            },
        }
    }
}
