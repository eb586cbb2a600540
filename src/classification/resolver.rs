use indexmap::map::Entry;
use indexmap::IndexMap;
use tracing::debug;

use crate::core::record::CategoryAssignment;
use crate::core::types::CategoryLabel;

/// Final `gene_id -> (category, gene_name)` assignments, in first-insertion order
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct GeneCategoryTable {
    entries: IndexMap<String, CategoryAssignment>,
}

impl GeneCategoryTable {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    #[must_use]
    pub fn contains(&self, gene_id: &str) -> bool {
        self.entries.contains_key(gene_id)
    }

    #[must_use]
    pub fn get(&self, gene_id: &str) -> Option<&CategoryAssignment> {
        self.entries.get(gene_id)
    }

    /// Category for `gene_id`, `UA` if the locus was never seen
    #[must_use]
    pub fn category(&self, gene_id: &str) -> CategoryLabel {
        self.get(gene_id)
            .map_or(CategoryLabel::Unannotated, |a| a.category)
    }

    /// Set an entry, replacing any previous assignment in place
    pub fn insert(&mut self, gene_id: impl Into<String>, assignment: CategoryAssignment) {
        self.entries.insert(gene_id.into(), assignment);
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &CategoryAssignment)> {
        self.entries.iter().map(|(id, a)| (id.as_str(), a))
    }
}

/// What [`ConflictResolver::apply`] did with an incoming category
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Resolution {
    /// First evidence for this locus
    Inserted,
    /// Two base categories merged into a combined one
    Combined(CategoryLabel),
    /// Incoming category outranked the stored one
    Replaced,
    /// Stored category kept
    Kept,
}

/// Merges successive per-overlap categories into one category per locus.
///
/// Only the incoming category is compared against the currently stored one,
/// so with several hits on the same locus the result can depend on the
/// order the overlaps arrive in.
#[derive(Debug, Default)]
pub struct ConflictResolver {
    table: GeneCategoryTable,
}

impl ConflictResolver {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn table(&self) -> &GeneCategoryTable {
        &self.table
    }

    /// Give up ownership of the table once the overlap stream is exhausted
    #[must_use]
    pub fn into_table(self) -> GeneCategoryTable {
        self.table
    }

    /// Fold one overlap's category into the assignment for `gene_id`.
    ///
    /// Special pairs combine first (`uORF`+`oORF` -> `uoORF`, `dORF`+`oORF` ->
    /// `doORF`, `uORF`+`dORF` -> `udORF`); otherwise the incoming category
    /// replaces the stored one only if it strictly outranks it.
    pub fn apply(&mut self, gene_id: &str, gene_name: &str, category: CategoryLabel) -> Resolution {
        let slot = match self.table.entries.entry(gene_id.to_string()) {
            Entry::Vacant(vacant) => {
                vacant.insert(CategoryAssignment::new(category, gene_name));
                return Resolution::Inserted;
            }
            Entry::Occupied(occupied) => occupied.into_mut(),
        };

        let existing = slot.category;
        let resolution = if let Some(combined) = combine(existing, category) {
            *slot = CategoryAssignment::new(combined, gene_name);
            Resolution::Combined(combined)
        } else if category.outranks(existing) {
            *slot = CategoryAssignment::new(category, gene_name);
            Resolution::Replaced
        } else {
            Resolution::Kept
        };

        if resolution != Resolution::Kept {
            debug!("{gene_id}: {existing} + {category} -> {}", slot.category);
        }
        resolution
    }
}

/// Combined category for the unordered special pairs, if `{a, b}` is one
#[must_use]
pub fn combine(a: CategoryLabel, b: CategoryLabel) -> Option<CategoryLabel> {
    use CategoryLabel::{Downstream, Overlapping, Upstream};

    match (a, b) {
        (Upstream, Overlapping) | (Overlapping, Upstream) => {
            Some(CategoryLabel::UpstreamOverlapping)
        }
        (Downstream, Overlapping) | (Overlapping, Downstream) => {
            Some(CategoryLabel::DownstreamOverlapping)
        }
        (Upstream, Downstream) | (Downstream, Upstream) => Some(CategoryLabel::UpstreamDownstream),
        _ => None,
    }
}

/// Give a locus with no reference overlap the `Intergenic` category.
///
/// Existing entries are never touched. Returns whether an entry was added.
pub fn assign_intergenic(table: &mut GeneCategoryTable, gene_id: &str) -> bool {
    if table.contains(gene_id) {
        return false;
    }
    table.insert(gene_id, CategoryAssignment::intergenic());
    true
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::types::CATEGORY_PRIORITY_ORDER;
    use CategoryLabel::*;

    fn resolve(hits: &[(&str, CategoryLabel)]) -> GeneCategoryTable {
        let mut resolver = ConflictResolver::new();
        for (i, (gene_id, category)) in hits.iter().enumerate() {
            resolver.apply(gene_id, &format!("name{i}"), *category);
        }
        resolver.into_table()
    }

    #[test]
    fn test_first_hit_inserted() {
        let mut resolver = ConflictResolver::new();
        assert_eq!(resolver.apply("G1", "ACTB", Exonic), Resolution::Inserted);
        let assignment = resolver.table().get("G1").unwrap();
        assert_eq!(assignment, &CategoryAssignment::new(Exonic, "ACTB"));
    }

    #[test]
    fn test_special_pairs_symmetric() {
        for (a, b, expected) in [
            (Upstream, Overlapping, UpstreamOverlapping),
            (Downstream, Overlapping, DownstreamOverlapping),
            (Upstream, Downstream, UpstreamDownstream),
        ] {
            assert_eq!(resolve(&[("G", a), ("G", b)]).category("G"), expected);
            assert_eq!(resolve(&[("G", b), ("G", a)]).category("G"), expected);
        }
    }

    #[test]
    fn test_combined_takes_incoming_name() {
        let mut resolver = ConflictResolver::new();
        resolver.apply("G1", "UTR_GENE", Upstream);
        assert_eq!(
            resolver.apply("G1", "CDS_GENE", Overlapping),
            Resolution::Combined(UpstreamOverlapping)
        );
        assert_eq!(resolver.table().get("G1").unwrap().gene_name, "CDS_GENE");
    }

    #[test]
    fn test_priority_monotonic_for_ranked_labels() {
        // Every pair from the order that is not a special pair: lower index wins
        for (i, &winner) in CATEGORY_PRIORITY_ORDER.iter().enumerate() {
            for &loser in &CATEGORY_PRIORITY_ORDER[i + 1..] {
                if combine(winner, loser).is_some() {
                    continue;
                }
                assert_eq!(resolve(&[("G", winner), ("G", loser)]).category("G"), winner);
                assert_eq!(resolve(&[("G", loser), ("G", winner)]).category("G"), winner);
            }
        }
    }

    #[test]
    fn test_replacement_carries_winning_name() {
        let mut resolver = ConflictResolver::new();
        resolver.apply("G1", "EXON_GENE", Exonic);
        assert_eq!(resolver.apply("G1", "PSEUDO", Pseudogene), Resolution::Replaced);
        assert_eq!(resolver.apply("G1", "LATER", Exonic), Resolution::Kept);

        let assignment = resolver.table().get("G1").unwrap();
        assert_eq!(assignment, &CategoryAssignment::new(Pseudogene, "PSEUDO"));
    }

    #[test]
    fn test_unranked_labels() {
        // Ranked beats unranked in either order
        assert_eq!(resolve(&[("G", Unannotated), ("G", Exonic)]).category("G"), Exonic);
        assert_eq!(resolve(&[("G", Exonic), ("G", Unannotated)]).category("G"), Exonic);

        // udORF has no rank, so any ranked label replaces it
        let table = resolve(&[("G", Upstream), ("G", Downstream), ("G", Exonic)]);
        assert_eq!(table.category("G"), Exonic);

        // Two unranked labels never replace each other
        let table = resolve(&[("G", Upstream), ("G", Downstream), ("G", Unannotated)]);
        assert_eq!(table.category("G"), UpstreamDownstream);
    }

    #[test]
    fn test_combined_label_is_order_sensitive() {
        // uORF, oORF -> uoORF; a later dORF does not pair with uoORF and ranks lower
        let table = resolve(&[("G", Upstream), ("G", Overlapping), ("G", Downstream)]);
        assert_eq!(table.category("G"), UpstreamOverlapping);

        // dORF, uORF -> udORF (unranked); a later oORF then replaces it outright
        let table = resolve(&[("G", Downstream), ("G", Upstream), ("G", Overlapping)]);
        assert_eq!(table.category("G"), Overlapping);
    }

    #[test]
    fn test_same_category_kept() {
        let mut resolver = ConflictResolver::new();
        resolver.apply("G1", "FIRST", Upstream);
        assert_eq!(resolver.apply("G1", "SECOND", Upstream), Resolution::Kept);
        assert_eq!(resolver.table().get("G1").unwrap().gene_name, "FIRST");
    }

    #[test]
    fn test_table_preserves_first_insertion_order() {
        let table = resolve(&[
            ("B", Exonic),
            ("A", Exonic),
            ("B", Pseudogene),
            ("C", Upstream),
        ]);
        let ids: Vec<&str> = table.iter().map(|(id, _)| id).collect();
        assert_eq!(ids, vec!["B", "A", "C"]);
    }

    #[test]
    fn test_assign_intergenic() {
        let mut table = resolve(&[("G1", Exonic)]);

        assert!(!assign_intergenic(&mut table, "G1"));
        assert!(assign_intergenic(&mut table, "G3"));
        assert!(!assign_intergenic(&mut table, "G3"));

        assert_eq!(table.category("G1"), Exonic);
        assert_eq!(table.get("G3"), Some(&CategoryAssignment::intergenic()));
        assert_eq!(table.len(), 2);
    }

    #[test]
    fn test_unseen_locus_defaults_to_unannotated() {
        let table = GeneCategoryTable::new();
        assert_eq!(table.category("missing"), Unannotated);
        assert!(table.is_empty());
    }
}
