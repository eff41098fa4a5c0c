pub mod instant_edit;
pub mod status;
pub mod templates;
pub mod uploads;
