pub mod chat_container;
pub mod chat_input;
pub mod diagnosis_panel;
pub mod navbar;
pub mod parikshan;
pub mod sathi;
pub mod upload_area;
