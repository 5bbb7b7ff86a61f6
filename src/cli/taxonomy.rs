use crate::cli::TaxonomyArgs;
use crate::taxonomy::colors;

pub fn execute(args: TaxonomyArgs) -> anyhow::Result<()> {
    if let Some(phrase) = args.lookup {
        match colors::lookup(&phrase) {
            Some(entry) if args.json => println!("{}", serde_json::to_string_pretty(entry)?),
            Some(entry) => println!(
                "{}\t{}\t{}",
                entry.canonical_name, entry.hex, entry.reference_note
            ),
            None => anyhow::bail!("No taxonomy entry for '{}'", phrase),
        }
        return Ok(());
    }

    if args.json {
        let entries: Vec<_> = colors::entries().collect();
        println!("{}", serde_json::to_string_pretty(&entries)?);
        return Ok(());
    }

    println!("| Color | Hex | Also known as |");
    println!("|-------|-----|---------------|");
    for entry in colors::entries() {
        println!(
            "| {} | `{}` | {} |",
            entry.canonical_name,
            entry.hex,
            colors::aliases(entry.canonical_name).join(", ")
        );
    }
    Ok(())
}
