pub mod metric_card;
pub mod pro_preview;
pub mod result_report;
pub mod score_badge;
pub mod service_status;
pub mod site_nav;
