// Longest first, then lexicographic. Duplicates are removed.
//
// Two different affixes with the same length can never both match the front
// (or the end) of the same string, so the tie-break only fixes the iteration
// order. It never changes which affix is picked.
pub(crate) fn sort_affixes(mut affixes: Vec<String>) -> Vec<String> {
    affixes.sort_by(
        |a, b| b.chars().count().cmp(&a.chars().count()).then_with(|| a.cmp(b))
    );
    affixes.dedup();
    affixes
}
