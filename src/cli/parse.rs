use crate::cli::{OutputFormat, ParseArgs};
use crate::config::Config;
use crate::error::InputError;
use crate::output::{render_markdown, write_record, AnalysisRecord};
use crate::parser::{AnalysisResult, Language, ReportParser};
use std::io::Read;
use std::path::Path;
use tracing::{info, warn};

pub fn execute(args: ParseArgs, config_path: &Path) -> anyhow::Result<()> {
    let config = Config::load_or_default(config_path)?;
    config.validate()?;

    let declared = args
        .lang
        .as_deref()
        .map(|tag| {
            tag.parse::<Language>()
                .map_err(|_| InputError::UnknownLanguage(tag.to_string()))
        })
        .transpose()?;

    let text = read_report(args.file.as_deref())?;

    let parser = ReportParser::new(config.parser.clone());
    let result = parser.parse_with_language(&text, declared);

    info!(
        "Parsed report: score {}, {} recommendations, failed={}",
        result.health_score,
        result.recommendations.len(),
        result.analysis_failed
    );

    if !result.analysis_failed && result.is_empty() {
        warn!("No recognizable sections in report");
    }

    if let Some(record_dir) = &args.record_dir {
        let record = AnalysisRecord::new(&args.user, args.images.clone(), &result);
        let path = write_record(record_dir, &record)?;
        info!("Stored analysis record at {:?}", path);
    }

    print_result(&result, args.format)?;

    if args.strict && (result.analysis_failed || result.is_blank()) {
        warn!("Analysis unavailable");
        std::process::exit(1);
    }

    Ok(())
}

pub fn print_result(result: &AnalysisResult, format: OutputFormat) -> anyhow::Result<()> {
    match format {
        OutputFormat::Json => println!("{}", serde_json::to_string_pretty(result)?),
        OutputFormat::Markdown => print!("{}", render_markdown(result)),
    }
    Ok(())
}

fn read_report(file: Option<&Path>) -> Result<String, InputError> {
    match file {
        Some(path) if path != Path::new("-") => {
            std::fs::read_to_string(path).map_err(|source| InputError::ReadFile {
                path: path.to_path_buf(),
                source,
            })
        }
        _ => {
            let mut text = String::new();
            std::io::stdin()
                .read_to_string(&mut text)
                .map_err(InputError::Stdin)?;
            Ok(text)
        }
    }
}
