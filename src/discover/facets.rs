use serde::Serialize;

/// One selectable value of a facet.
#[derive(Debug, Clone, Serialize)]
pub struct FacetOption {
    pub value: String,
    pub label: String,
}

/// A single-select filter control. Selection state lives in the page URL,
/// not here; this is just the data the control renders from.
#[derive(Debug, Clone, Serialize)]
pub struct Facet {
    pub id: String,
    pub title: String,
    pub options: Vec<FacetOption>,
}

/// Production-decade buckets, newest first.
pub fn year_facet() -> Facet {
    let options = (1980i16..=2020)
        .step_by(10)
        .rev()
        .map(|decade| FacetOption {
            value: format!("{}-{}", decade, decade + 9),
            label: format!("{} - {}", decade, decade + 9),
        })
        .collect();

    Facet {
        id: "year".to_string(),
        title: "Par années de production".to_string(),
        options,
    }
}

pub fn sort_facet() -> Facet {
    Facet {
        id: "sort".to_string(),
        title: "Trier par".to_string(),
        options: vec![FacetOption {
            value: "rating".to_string(),
            label: "Note spectateurs".to_string(),
        }],
    }
}
