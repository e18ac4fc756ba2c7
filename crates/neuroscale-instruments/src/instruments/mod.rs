pub mod berg;
pub mod cdr;
pub mod gcs;
pub mod hama;
pub mod hamd;
pub mod mmse;
pub mod moca;
pub mod mrs;
pub mod nihss;
pub mod tinetti;
pub mod updrs;

use crate::scoring::{Item, ScoreRange, Section};

/// Build a section whose items are listed as `(id, name, max)` with a
/// minimum of 0 and whole-point steps.
fn section(
    id: &str,
    name: &str,
    items: &[(&str, &str, f64)],
    description: Option<&str>,
) -> Section {
    Section {
        id: id.to_string(),
        name: name.to_string(),
        items: items
            .iter()
            .map(|(id, name, max)| Item::new(id, name, ScoreRange::whole(0.0, *max)))
            .collect(),
        description: description.map(str::to_string),
    }
}
