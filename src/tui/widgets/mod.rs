// Widget rendering modules, one per dashboard zone.

pub mod breakdown;
pub mod help_bar;
pub mod questionnaire;
pub mod scores;
pub mod status_bar;
pub mod summary;
