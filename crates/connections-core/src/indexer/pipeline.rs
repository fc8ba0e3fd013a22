//! Construction of the company indices relevant to one resolution call.

use indexmap::{IndexMap, IndexSet};
use tracing::debug;

use crate::indexer::company::CompanyIndex;
use crate::models::People;

/// Company indices keyed by company name.
pub type CompanyIndices<'a> = IndexMap<&'a str, CompanyIndex<'a>>;

/// Index every experience in `people` whose company is in `companies`.
///
/// Experiences at any other company are never indexed, so the cost is bounded
/// by the companies shared with the target rather than by the whole dataset.
pub fn build_company_indices<'a>(
    people: &'a People,
    companies: &IndexSet<&str>,
) -> CompanyIndices<'a> {
    let mut indices: CompanyIndices<'a> = IndexMap::with_capacity(companies.len());
    let mut indexed = 0usize;

    for person in people.values() {
        for experience in person.experiences() {
            let company = experience.company();
            if !companies.contains(company) {
                continue;
            }
            indices
                .entry(company)
                .or_insert_with(|| CompanyIndex::new(company))
                .add(experience);
            indexed += 1;
        }
    }

    debug!(
        "Indexed {} experiences across {} companies",
        indexed,
        indices.len()
    );
    indices
}
