use crate::cli::IconArgs;
use crate::taxonomy::{resolve_icon, IconGlyph};

pub fn execute(args: IconArgs) -> anyhow::Result<()> {
    for hint in &args.hints {
        let glyph = resolve_icon(hint);
        let kind = match glyph {
            IconGlyph::Emoji(_) => "emoji",
            IconGlyph::Named(_) => "icon",
        };
        println!("{}\t{}\t{}", hint, kind, glyph);
    }
    Ok(())
}
