use crate::cli::{SchemaArgs, SchemaTarget};
use crate::config::Config;
use crate::output::AnalysisRecord;
use crate::parser::AnalysisResult;
use schemars::schema_for;

pub fn execute(args: SchemaArgs) -> anyhow::Result<()> {
    let schema = match args.target {
        SchemaTarget::Result => schema_for!(AnalysisResult),
        SchemaTarget::Record => schema_for!(AnalysisRecord),
        SchemaTarget::Config => schema_for!(Config),
    };
    let json = serde_json::to_string_pretty(&schema)?;
    println!("{}", json);
    Ok(())
}
