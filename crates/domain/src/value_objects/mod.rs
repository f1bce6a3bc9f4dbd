//! Value objects shared by both forms.

mod deletion_reasons;
mod experience;

pub use deletion_reasons::{ReasonCatalog, SelectedReasons};
pub use experience::ExperienceYears;
