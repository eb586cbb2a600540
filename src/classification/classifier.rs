use crate::core::record::OverlapRecord;
use crate::core::types::CategoryLabel;

/// Transcript biotypes that mark a pseudogene
pub const PSEUDOGENE_BIOTYPES: [&str; 8] = [
    "processed_pseudogene",
    "unprocessed_pseudogene",
    "translated_unprocessed_pseudogene",
    "translated_processed_pseudogene",
    "transcribed_processed_pseudogene",
    "transcribed_unprocessed_pseudogene",
    "unitary_pseudogene",
    "polymorphic_pseudogene",
];

/// Substrings of a transcript biotype that mark an ambiguous ORF
pub const AMBIGUOUS_BIOTYPE_MARKERS: [&str; 4] = [
    "non_stop_decay",
    "nonsense_mediated_decay",
    "ambiguous_orf",
    "protein_coding_CDS_not_defined",
];

/// Substring of a transcript biotype that marks a retained intron
pub const RETAINED_INTRON_MARKER: &str = "retained_intron";

/// Gene biotypes counted as noncoding
pub const NONCODING_GENE_BIOTYPES: [&str; 5] = [
    "lncRNA",
    "lincRNA",
    "antisense",
    "sense_intronic",
    "sense_overlapping",
];

/// Decide the category implied by a single overlap.
///
/// The reference feature type is checked first (UTRs, CDS, retrotransposed),
/// then the transcript biotype (pseudogene, ambiguous, retained intron), then
/// the gene biotype (noncoding). A plain exon that matched none of those is
/// `eORF`; anything else is `UA`.
#[must_use]
pub fn classify(record: &OverlapRecord) -> CategoryLabel {
    classify_fields(
        &record.reference_feature_type,
        record.transcript_biotype(),
        record.gene_biotype(),
    )
}

/// [`classify`] over the three fields the decision depends on
#[must_use]
pub fn classify_fields(
    reference_feature_type: &str,
    transcript_biotype: &str,
    gene_biotype: &str,
) -> CategoryLabel {
    match reference_feature_type {
        "three_prime_utr" => return CategoryLabel::Downstream,
        "five_prime_utr" => return CategoryLabel::Upstream,
        "CDS" => return CategoryLabel::Overlapping,
        "retrotransposed" => return CategoryLabel::Pseudogene,
        _ => {}
    }

    if PSEUDOGENE_BIOTYPES.iter().any(|&b| b == transcript_biotype) {
        CategoryLabel::Pseudogene
    } else if AMBIGUOUS_BIOTYPE_MARKERS
        .iter()
        .any(|marker| transcript_biotype.contains(marker))
    {
        CategoryLabel::Ambiguous
    } else if transcript_biotype.contains(RETAINED_INTRON_MARKER) {
        CategoryLabel::RetainedIntron
    } else if NONCODING_GENE_BIOTYPES.iter().any(|&b| b == gene_biotype) {
        CategoryLabel::LncRna
    } else if reference_feature_type == "exon" {
        CategoryLabel::Exonic
    } else {
        CategoryLabel::Unannotated
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::parsing::attributes::parse_attributes;

    #[test]
    fn test_feature_type_rules() {
        assert_eq!(
            classify_fields("three_prime_utr", "protein_coding", "protein_coding"),
            CategoryLabel::Downstream
        );
        assert_eq!(
            classify_fields("five_prime_utr", "protein_coding", "protein_coding"),
            CategoryLabel::Upstream
        );
        assert_eq!(
            classify_fields("CDS", "protein_coding", "protein_coding"),
            CategoryLabel::Overlapping
        );
        assert_eq!(
            classify_fields("retrotransposed", "Unknown", "Unnamed"),
            CategoryLabel::Pseudogene
        );
    }

    #[test]
    fn test_feature_type_wins_over_biotype() {
        // A UTR of a retained-intron transcript is still a UTR
        assert_eq!(
            classify_fields("five_prime_utr", "retained_intron", "lncRNA"),
            CategoryLabel::Upstream
        );
        assert_eq!(
            classify_fields("CDS", "processed_pseudogene", "lncRNA"),
            CategoryLabel::Overlapping
        );
    }

    #[test]
    fn test_pseudogene_requires_exact_biotype() {
        for biotype in PSEUDOGENE_BIOTYPES {
            assert_eq!(
                classify_fields("exon", biotype, "protein_coding"),
                CategoryLabel::Pseudogene
            );
        }
        // "pseudogene" alone is not in the set, nor is a superstring
        assert_eq!(
            classify_fields("exon", "pseudogene", "protein_coding"),
            CategoryLabel::Exonic
        );
        assert_eq!(
            classify_fields("exon", "processed_pseudogene_like", "protein_coding"),
            CategoryLabel::Exonic
        );
    }

    #[test]
    fn test_ambiguous_is_substring_match() {
        for biotype in [
            "nonsense_mediated_decay",
            "non_stop_decay",
            "ambiguous_orf",
            "protein_coding_CDS_not_defined",
            "TR_nonsense_mediated_decay_variant",
        ] {
            assert_eq!(
                classify_fields("exon", biotype, "protein_coding"),
                CategoryLabel::Ambiguous,
                "{biotype}"
            );
        }
    }

    #[test]
    fn test_biotype_rule_order() {
        // Pseudogene before ambiguous before retained intron before noncoding
        assert_eq!(
            classify_fields("exon", "retained_intron_nonsense_mediated_decay", "lncRNA"),
            CategoryLabel::Ambiguous
        );
        assert_eq!(
            classify_fields("exon", "retained_intron", "lncRNA"),
            CategoryLabel::RetainedIntron
        );
        assert_eq!(
            classify_fields("exon", "lncRNA", "lincRNA"),
            CategoryLabel::LncRna
        );
    }

    #[test]
    fn test_noncoding_gene_biotypes() {
        for biotype in NONCODING_GENE_BIOTYPES {
            assert_eq!(
                classify_fields("transcript", "Unknown", biotype),
                CategoryLabel::LncRna
            );
        }
    }

    #[test]
    fn test_fallbacks() {
        assert_eq!(
            classify_fields("exon", "protein_coding", "protein_coding"),
            CategoryLabel::Exonic
        );
        assert_eq!(
            classify_fields("gene", "protein_coding", "protein_coding"),
            CategoryLabel::Unannotated
        );
        assert_eq!(
            classify_fields("start_codon", "Unknown", "Unnamed"),
            CategoryLabel::Unannotated
        );
    }

    #[test]
    fn test_classify_retained_intron_record() {
        let record = OverlapRecord::new(
            "CDS",
            parse_attributes(r#"gene_id "G2";"#),
            "exon",
            parse_attributes(r#"gene_name "GAPDH"; transcript_biotype "retained_intron_transcript";"#),
        );
        assert_eq!(classify(&record), CategoryLabel::RetainedIntron);
    }
}
