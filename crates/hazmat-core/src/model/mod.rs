pub mod answer;
pub mod area;
pub mod material;
pub mod records;

pub use answer::{Answer, Entries};
pub use area::{Area, AreaSurvey};
pub use material::{
    AsbestosMaterial, DeadAnimal, Hazard, LeadMaterial, MaterialBase, MaterialObservation,
    MercuryMaterial, MouldMaterial, OdsEquipment, PcbEquipment, SilicaMaterial,
};
pub use records::{CustomerRecord, Drawing, Person, ProjectRecord, ReportInput, ReportRecord};
