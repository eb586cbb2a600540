use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Functional category assigned to a smORF locus
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum CategoryLabel {
    /// Overlaps a 5' UTR
    #[serde(rename = "uORF")]
    Upstream,
    /// Overlaps a 3' UTR
    #[serde(rename = "dORF")]
    Downstream,
    /// Overlaps a reference CDS
    #[serde(rename = "oORF")]
    Overlapping,
    /// Both a 5' UTR and a reference CDS
    #[serde(rename = "uoORF")]
    UpstreamOverlapping,
    /// Both a 3' UTR and a reference CDS
    #[serde(rename = "doORF")]
    DownstreamOverlapping,
    /// Both a 5' UTR and a 3' UTR
    #[serde(rename = "udORF")]
    UpstreamDownstream,
    /// Pseudogene or retrotransposed feature
    #[serde(rename = "psORF")]
    Pseudogene,
    /// Decay or ambiguous-CDS transcript
    #[serde(rename = "aORF")]
    Ambiguous,
    /// Retained-intron transcript
    #[serde(rename = "riORF")]
    RetainedIntron,
    /// Noncoding gene biotype
    #[serde(rename = "lncRNA")]
    LncRna,
    /// Exon with no more specific classification
    #[serde(rename = "eORF")]
    Exonic,
    /// No rule matched
    #[serde(rename = "UA")]
    Unannotated,
    /// No reference overlap at all
    #[serde(rename = "Intergenic")]
    Intergenic,
}

/// Tie-break order, most specific first. Labels not listed have no rank.
pub const CATEGORY_PRIORITY_ORDER: [CategoryLabel; 10] = [
    CategoryLabel::Pseudogene,
    CategoryLabel::UpstreamOverlapping,
    CategoryLabel::DownstreamOverlapping,
    CategoryLabel::Overlapping,
    CategoryLabel::Downstream,
    CategoryLabel::Upstream,
    CategoryLabel::LncRna,
    CategoryLabel::RetainedIntron,
    CategoryLabel::Ambiguous,
    CategoryLabel::Exonic,
];

impl CategoryLabel {
    /// Every label, in declaration order
    pub const ALL: [CategoryLabel; 13] = [
        Self::Upstream,
        Self::Downstream,
        Self::Overlapping,
        Self::UpstreamOverlapping,
        Self::DownstreamOverlapping,
        Self::UpstreamDownstream,
        Self::Pseudogene,
        Self::Ambiguous,
        Self::RetainedIntron,
        Self::LncRna,
        Self::Exonic,
        Self::Unannotated,
        Self::Intergenic,
    ];

    /// Canonical short name, as written to annotation tables
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Upstream => "uORF",
            Self::Downstream => "dORF",
            Self::Overlapping => "oORF",
            Self::UpstreamOverlapping => "uoORF",
            Self::DownstreamOverlapping => "doORF",
            Self::UpstreamDownstream => "udORF",
            Self::Pseudogene => "psORF",
            Self::Ambiguous => "aORF",
            Self::RetainedIntron => "riORF",
            Self::LncRna => "lncRNA",
            Self::Exonic => "eORF",
            Self::Unannotated => "UA",
            Self::Intergenic => "Intergenic",
        }
    }

    /// Index in [`CATEGORY_PRIORITY_ORDER`], or `None` for unranked labels
    #[must_use]
    pub fn rank(self) -> Option<usize> {
        CATEGORY_PRIORITY_ORDER.iter().position(|&c| c == self)
    }

    /// True when `self` strictly outranks `other`.
    ///
    /// An unranked label never outranks anything, and any ranked label
    /// outranks an unranked one.
    #[must_use]
    pub fn outranks(self, other: Self) -> bool {
        match (self.rank(), other.rank()) {
            (Some(a), Some(b)) => a < b,
            (Some(_), None) => true,
            (None, _) => false,
        }
    }
}

impl std::fmt::Display for CategoryLabel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("Unknown category label: '{0}'")]
pub struct UnknownCategory(pub String);

impl std::str::FromStr for CategoryLabel {
    type Err = UnknownCategory;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .iter()
            .copied()
            .find(|c| c.as_str() == s)
            .ok_or_else(|| UnknownCategory(s.to_string()))
    }
}
