pub mod analytics_handler;
pub mod report_handler;

pub use analytics_handler::{__path_get_analytics, get_analytics};
pub use report_handler::{
    __path_get_reports_by_location, __path_list_reports, __path_submit_report,
    get_reports_by_location, list_reports, submit_report,
};
