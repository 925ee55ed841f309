//! Refinement response parsing

/// Split a refiner's response into its analysis and the improved answer.
///
/// Refiners are asked to respond as `ANALYSIS:` followed by
/// `IMPROVED RESPONSE:`. When both markers are present the two parts are
/// returned separately; otherwise the whole response is treated as the
/// improved answer and the analysis is `None`.
///
/// # Examples
///
/// ```
/// use panel_domain::parse_refinement;
///
/// let (analysis, text) =
///     parse_refinement("ANALYSIS:\ntoo wordy\n\nIMPROVED RESPONSE:\nParis.");
/// assert_eq!(analysis.as_deref(), Some("too wordy"));
/// assert_eq!(text, "Paris.");
///
/// let (analysis, text) = parse_refinement("Paris.");
/// assert_eq!(analysis, None);
/// assert_eq!(text, "Paris.");
/// ```
pub fn parse_refinement(response: &str) -> (Option<String>, String) {
    if let Some((head, tail)) = response.split_once("IMPROVED RESPONSE:")
        && head.contains("ANALYSIS:")
    {
        let analysis = head.replace("ANALYSIS:", "").trim().to_string();
        let improved = tail.trim();
        // A bare marker with nothing after it falls back to the whole text.
        let improved = if improved.is_empty() {
            response.trim()
        } else {
            improved
        };
        return (
            (!analysis.is_empty()).then_some(analysis),
            improved.to_string(),
        );
    }
    (None, response.trim().to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parses_well_formed_response() {
        let response = "ANALYSIS:\nDrop the history lesson.\n\nIMPROVED RESPONSE:\nParis.";
        let (analysis, text) = parse_refinement(response);
        assert_eq!(analysis.as_deref(), Some("Drop the history lesson."));
        assert_eq!(text, "Paris.");
    }

    #[test]
    fn test_response_without_markers_is_all_answer() {
        let (analysis, text) = parse_refinement("  Paris is the capital.  ");
        assert_eq!(analysis, None);
        assert_eq!(text, "Paris is the capital.");
    }

    #[test]
    fn test_improved_marker_without_analysis_is_all_answer() {
        let (analysis, text) = parse_refinement("IMPROVED RESPONSE:\nParis.");
        assert_eq!(analysis, None);
        assert_eq!(text, "IMPROVED RESPONSE:\nParis.");
    }

    #[test]
    fn test_empty_improved_section_falls_back_to_whole_text() {
        let response = "ANALYSIS:\nnothing to cut\n\nIMPROVED RESPONSE:";
        let (analysis, text) = parse_refinement(response);
        assert_eq!(analysis.as_deref(), Some("nothing to cut"));
        assert_eq!(text, response.trim());
    }

    #[test]
    fn test_empty_analysis_section_is_none() {
        let (analysis, text) = parse_refinement("ANALYSIS:\nIMPROVED RESPONSE:\nParis.");
        assert_eq!(analysis, None);
        assert_eq!(text, "Paris.");
    }
}
