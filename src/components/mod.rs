//! UI Components
//!
//! Leptos components for the side list and the detail pane.

mod beer_list;
mod beer_detail;
mod description_editor;
mod review_form;
mod review_list;
mod flow_status;

pub use beer_list::BeerList;
pub use beer_detail::BeerDetail;
pub use description_editor::DescriptionEditor;
pub use review_form::ReviewForm;
pub use review_list::ReviewList;
pub use flow_status::FlowStatusLine;
