//! Authored narrative content for the built-in banks.

mod life_season;
mod spiritual_gifts;

use flock_core::models::result::Narrative;

use crate::narrative::NarrativeTable;

pub(crate) fn builtin() -> NarrativeTable {
    let mut table = NarrativeTable::new();
    spiritual_gifts::install(&mut table);
    life_season::install(&mut table);
    table
}

fn narrative(
    summary: &str,
    strengths: &[&str],
    growth_areas: &[&str],
    recommendations: &[&str],
    references: &[&str],
    next_steps: &[&str],
) -> Narrative {
    Narrative {
        summary: summary.to_string(),
        strengths: owned(strengths),
        growth_areas: owned(growth_areas),
        recommendations: owned(recommendations),
        references: owned(references),
        next_steps: owned(next_steps),
    }
}

fn owned(items: &[&str]) -> Vec<String> {
    items.iter().map(|s| s.to_string()).collect()
}
