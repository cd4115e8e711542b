use crate::model::Area;
use serde::Serialize;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum PestEvidence {
    Droppings,
    DeadAnimal,
}

/// One sentence of pest evidence found in an area.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PestStatement {
    pub kind: PestEvidence,
    pub area_name: String,
    pub location: String,
    pub statement: String,
}

/// Pest infestation answers folded across all areas.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PestSummary {
    pub statements: Vec<PestStatement>,
    /// Every selected infestation type, unique, first-seen order.
    pub infestation_types: Vec<String>,
    pub pest_infestation: bool,
    pub mouse_infestation: bool,
    /// Non-mouse infestation types, comma-joined.
    pub pest_type: String,
    /// "on {location}" from the first area naming a droppings location.
    pub pest_location: String,
}

pub fn summarize(areas: &[Area]) -> PestSummary {
    let mut summary = PestSummary::default();
    let mut other_types: Vec<String> = Vec::new();

    for area in areas {
        let s = &area.survey;
        let area_name = area.name();

        if !s.infestation_type_select.is_empty() {
            let sources = s.infestation_type_select.join(", ");
            let location = s.droppings_location.or("unknown location");
            for kind in &s.infestation_type_select {
                super::insert_unique(&mut summary.infestation_types, kind);
                if kind != "Mouse" {
                    super::insert_unique(&mut other_types, kind);
                }
            }
            summary.statements.push(PestStatement {
                kind: PestEvidence::Droppings,
                area_name: area_name.to_string(),
                location: location.to_string(),
                statement: format!(
                    "An area of {sources} dropping accumulation was identified on {location} in the {area_name}."
                ),
            });
        }

        for animal in &s.dead_animals {
            let Some(animal_type) = animal.animal_name.trimmed().and(animal.animal_name.as_deref())
            else {
                continue;
            };
            let location = animal.animal_location.or("unknown location");
            summary.statements.push(PestStatement {
                kind: PestEvidence::DeadAnimal,
                area_name: area_name.to_string(),
                location: location.to_string(),
                statement: format!(
                    "{animal_type} was identified on/near {location} in the {area_name}."
                ),
            });
        }

        if summary.pest_location.is_empty() {
            if let Some(place) = s.droppings_location.trimmed() {
                summary.pest_location = format!("on {place}");
            }
        }
    }

    summary.pest_infestation = areas
        .iter()
        .any(|a| a.survey.pest_infestation_observed.is_yes());
    summary.mouse_infestation = summary.infestation_types.iter().any(|t| t == "Mouse");
    summary.pest_type = other_types.join(", ");
    tracing::debug!(statements = summary.statements.len(), "pest evidence collected");
    summary
}

impl PestSummary {
    pub fn has_evidence(&self) -> bool {
        !self.statements.is_empty()
    }
}
