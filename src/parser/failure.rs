use crate::taxonomy::normalize_key;
use once_cell::sync::Lazy;
use std::collections::HashSet;

/// Whole-report messages meaning the model produced no analysis
const FAILURE_PHRASES: &[&str] = &[
    // English
    "unable to analyze",
    "unable to analyse",
    "unable to analyze the image",
    "unable to analyze the images",
    "unable to analyze this image",
    "i am unable to analyze this image",
    "i'm unable to analyze this image",
    "i cannot analyze this image",
    "i can't analyze this image",
    "analysis failed",
    "analysis unavailable",
    "no data",
    "no data available",
    "no hair detected",
    "no hair detected in the image",
    // French
    "impossible d'analyser",
    "impossible d'analyser l'image",
    "analyse impossible",
    "analyse échouée",
    "échec de l'analyse",
    "aucune donnée",
    "aucune donnée disponible",
    // Arabic
    "تعذر التحليل",
    "تعذر تحليل الصورة",
    "لا يمكن التحليل",
    "لا يمكن تحليل الصورة",
    "غير قادر على تحليل الصورة",
    "فشل التحليل",
    "لا توجد بيانات",
    "لا توجد بيانات متاحة",
    "لم يتم العثور على شعر في الصورة",
];

static FAILURE_SET: Lazy<HashSet<String>> =
    Lazy::new(|| FAILURE_PHRASES.iter().map(|p| normalize(p)).collect());

/// Lowercase, collapse whitespace, unify apostrophes and drop trailing sentence punctuation
pub fn normalize(text: &str) -> String {
    let key = normalize_key(&text.replace(['’', '‘', 'ʼ'], "'"));
    key.trim_end_matches(['.', '!', '。', '۔'])
        .trim_end()
        .to_string()
}

/// True only when the entire normalized report is one of the known failure phrases
pub fn is_failure_report(text: &str) -> bool {
    FAILURE_SET.contains(&normalize(text))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_exact_match_detects_failure() {
        assert!(is_failure_report("Unable to analyze"));
        assert!(is_failure_report("  UNABLE   to\nanalyze.  "));
        assert!(is_failure_report("I’m unable to analyze this image."));
        assert!(is_failure_report("Aucune donnée"));
        assert!(is_failure_report("تعذر التحليل"));
    }

    #[test]
    fn test_substring_is_not_failure() {
        let report = "**Scalp Analysis:** We were unable to analyze the crown area, but the rest looks healthy.";
        assert!(!is_failure_report(report));
        assert!(!is_failure_report("no data available for the nape; score 80%"));
    }

    #[test]
    fn test_empty_is_not_failure() {
        assert!(!is_failure_report(""));
        assert!(!is_failure_report("   \n "));
    }
}
