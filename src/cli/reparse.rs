use crate::cli::{OutputFormat, ReparseArgs};
use crate::config::Config;
use crate::output::{load_records, render_markdown};
use crate::parser::ReportParser;
use std::path::Path;
use tracing::{info, warn};

pub fn execute(args: ReparseArgs, config_path: &Path) -> anyhow::Result<()> {
    let config = Config::load_or_default(config_path)?;
    config.validate()?;

    let dir = args.dir.unwrap_or_else(|| config.record_dir.clone());
    let records = load_records(&dir)?;
    info!("Re-parsing {} records from {:?}", records.len(), dir);

    let parser = ReportParser::new(config.parser);
    let mut results = Vec::with_capacity(records.len());

    for record in &records {
        let result = parser.parse(&record.raw_text);
        if result.health_score != record.health_score {
            warn!(
                "Record {} score changed on re-parse: {} -> {}",
                record.id, record.health_score, result.health_score
            );
        }
        results.push(result);
    }

    match args.format {
        OutputFormat::Json => println!("{}", serde_json::to_string_pretty(&results)?),
        OutputFormat::Markdown => {
            for (record, result) in records.iter().zip(&results) {
                println!("<!-- {} {} {} -->", record.user_id, record.created_at, record.id);
                println!("{}", render_markdown(result));
            }
        }
    }

    Ok(())
}
