use crate::parser::AnalysisResult;

/// Render a parsed analysis as a markdown report
pub fn render_markdown(result: &AnalysisResult) -> String {
    let mut content = String::new();

    content.push_str("# Hair Analysis\n\n");

    if result.analysis_failed {
        content.push_str("⚠️ *Analysis unavailable. Please try again with a clearer photo.*\n");
        return content;
    }

    // Metadata table
    content.push_str("| Metric | Value |\n");
    content.push_str("|--------|-------|\n");
    content.push_str(&format!(
        "| Health Score | {} {}% |\n",
        score_badge(result.health_score),
        result.health_score
    ));
    content.push_str(&format!("| Language | {} |\n", result.language));
    if let Some(color) = &result.color_analysis {
        content.push_str(&format!("| Color | {} |\n", color.detected_color_label));
        if let Some(hex) = &color.color_hex {
            content.push_str(&format!("| Hex | `{}` |\n", hex));
        }
    }
    content.push_str("\n---\n\n");

    content.push_str("## Scalp\n\n");
    match &result.scalp_summary {
        Some(summary) => content.push_str(&format!("{}\n\n", summary)),
        None => content.push_str("*No scalp summary*\n\n"),
    }

    if let Some(color) = &result.color_analysis {
        content.push_str("## Color\n\n");
        content.push_str(&format!("{}\n\n", color.summary));
        if let Some(note) = &color.color_reference_note {
            content.push_str(&format!("**Reference:** {}\n\n", note));
        }
    }

    content.push_str("## Recommendations\n\n");
    if result.recommendations.is_empty() {
        content.push_str("*No recommendations*\n");
    } else {
        for item in &result.recommendations {
            content.push_str(&format!("- [{}] {}\n", item.icon(), item.text));
        }
    }

    content
}

fn score_badge(score: u8) -> &'static str {
    match score {
        80..=100 => "🟢",
        50..=79 => "🟡",
        _ => "🔴",
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::parser::parse_report;

    #[test]
    fn test_render_full_report() {
        let result = parse_report(
            "Global Hair State Score: 88%\n**Scalp Analysis:** Balanced and well hydrated scalp.\n**Color Analysis:** Your hair color is auburn.\n**Recommendations:**\n- Use a mask weekly IconHint: mask\n",
        );
        let md = render_markdown(&result);
        assert!(md.contains("| Health Score | 🟢 88% |"));
        assert!(md.contains("| Color | Auburn |"));
        assert!(md.contains("Balanced and well hydrated scalp."));
        assert!(md.contains("- [jar] Use a mask weekly"));
    }

    #[test]
    fn test_render_failed() {
        let result = parse_report("No data");
        let md = render_markdown(&result);
        assert!(md.contains("Analysis unavailable"));
        assert!(!md.contains("Health Score"));
    }

    #[test]
    fn test_render_empty_sections() {
        let md = render_markdown(&parse_report("just text"));
        assert!(md.contains("| Health Score | 🟡 75% |"));
        assert!(md.contains("*No scalp summary*"));
        assert!(md.contains("*No recommendations*"));
    }
}
