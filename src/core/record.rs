use crate::core::types::CategoryLabel;
use crate::parsing::attributes::Attributes;

/// Placeholder used when the query side carries no `gene_id`
pub const UNKNOWN_GENE_ID: &str = "Unknown";
/// Placeholder used when the reference side carries no `gene_name`
pub const UNNAMED_GENE: &str = "Unnamed";
/// Placeholder used when the reference side carries no `gene_biotype`
pub const UNNAMED_BIOTYPE: &str = "Unnamed";
/// Placeholder used when the reference side carries no `transcript_biotype`
pub const UNKNOWN_BIOTYPE: &str = "Unknown";
/// Reference feature type assumed when the column is missing
pub const DEFAULT_REFERENCE_FEATURE: &str = "exon";

/// One joined row of the strand-matched overlap stream
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OverlapRecord {
    /// Feature type of the smORF side (column 2)
    pub query_feature_type: String,

    /// Attributes of the smORF side (column 8)
    pub query_attributes: Attributes,

    /// Feature type of the reference side (column 11)
    pub reference_feature_type: String,

    /// Attributes of the reference side (column 17)
    pub reference_attributes: Attributes,
}

impl OverlapRecord {
    pub fn new(
        query_feature_type: impl Into<String>,
        query_attributes: Attributes,
        reference_feature_type: impl Into<String>,
        reference_attributes: Attributes,
    ) -> Self {
        Self {
            query_feature_type: query_feature_type.into(),
            query_attributes,
            reference_feature_type: reference_feature_type.into(),
            reference_attributes,
        }
    }

    #[must_use]
    pub fn gene_id(&self) -> &str {
        lookup(&self.query_attributes, "gene_id", UNKNOWN_GENE_ID)
    }

    #[must_use]
    pub fn gene_name(&self) -> &str {
        lookup(&self.reference_attributes, "gene_name", UNNAMED_GENE)
    }

    #[must_use]
    pub fn gene_biotype(&self) -> &str {
        lookup(&self.reference_attributes, "gene_biotype", UNNAMED_BIOTYPE)
    }

    #[must_use]
    pub fn transcript_biotype(&self) -> &str {
        lookup(
            &self.reference_attributes,
            "transcript_biotype",
            UNKNOWN_BIOTYPE,
        )
    }
}

/// One row of the complement stream: a smORF with no qualifying overlap
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NonOverlapRecord {
    pub gene_id: String,
}

impl NonOverlapRecord {
    pub fn from_attributes(attributes: &Attributes) -> Self {
        Self {
            gene_id: lookup(attributes, "gene_id", UNKNOWN_GENE_ID).to_string(),
        }
    }
}

/// Final category for a locus together with the gene name that won it
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CategoryAssignment {
    pub category: CategoryLabel,
    pub gene_name: String,
}

impl CategoryAssignment {
    pub fn new(category: CategoryLabel, gene_name: impl Into<String>) -> Self {
        Self {
            category,
            gene_name: gene_name.into(),
        }
    }

    /// Assignment for a locus that never overlapped a reference feature
    #[must_use]
    pub fn intergenic() -> Self {
        Self::new(CategoryLabel::Intergenic, "Intergenic")
    }
}

impl Default for CategoryAssignment {
    fn default() -> Self {
        Self::new(CategoryLabel::Unannotated, UNKNOWN_GENE_ID)
    }
}

fn lookup<'a>(attributes: &'a Attributes, key: &str, default: &'a str) -> &'a str {
    attributes.get(key).map_or(default, String::as_str)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::parsing::attributes::parse_attributes;

    #[test]
    fn test_overlap_record_derived_fields() {
        let record = OverlapRecord::new(
            "CDS",
            parse_attributes(r#"gene_id "SMORF1"; transcript_id "T1";"#),
            "exon",
            parse_attributes(
                r#"gene_id "ENSG1"; gene_name "ACTB"; gene_biotype "protein_coding"; transcript_biotype "retained_intron";"#,
            ),
        );

        assert_eq!(record.gene_id(), "SMORF1");
        assert_eq!(record.gene_name(), "ACTB");
        assert_eq!(record.gene_biotype(), "protein_coding");
        assert_eq!(record.transcript_biotype(), "retained_intron");
    }

    #[test]
    fn test_overlap_record_placeholders() {
        let record = OverlapRecord::new("CDS", Attributes::new(), "exon", Attributes::new());

        assert_eq!(record.gene_id(), "Unknown");
        assert_eq!(record.gene_name(), "Unnamed");
        assert_eq!(record.gene_biotype(), "Unnamed");
        assert_eq!(record.transcript_biotype(), "Unknown");
    }

    #[test]
    fn test_default_assignment() {
        let assignment = CategoryAssignment::default();
        assert_eq!(assignment.category, CategoryLabel::Unannotated);
        assert_eq!(assignment.gene_name, "Unknown");
    }
}
