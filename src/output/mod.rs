mod record;
mod report;

pub use record::{load_records, write_record, AnalysisRecord};
pub use report::render_markdown;
