//! Report export. Renders generation results into downloadable documents.

pub mod docx_writer;

pub use docx_writer::{export_report, render_report, REPORT_FILE_NAME};
