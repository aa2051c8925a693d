pub mod document_form;
pub mod handlers;
pub mod header;
pub mod manual_form;
pub mod mode_tabs;
pub mod pages;
pub mod results;
pub mod utils;
