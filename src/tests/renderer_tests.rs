#[cfg(test)]
mod tests {
    use indexmap::IndexMap;
    use serde_json::json;

    use crate::logging::LogContext;
    use crate::matcher::StatementMatcher;
    use crate::models::formal::{FormalStatement, ProofStatus};
    use crate::models::prose::{ProseStatement, StatementKind};
    use crate::models::report::Report;
    use crate::pipeline::assemble_report;
    use crate::renderers::{CsvRenderer, HtmlRenderer, JsonRenderer, MarkdownRenderer};
    use crate::traits::ReportRenderer;

    fn sample_report() -> Report {
        let mut prose = IndexMap::new();
        for (id, kind, text) in [
            (
                "theorem_1",
                StatementKind::Theorem,
                "Theorem 1. Safety holds for all byzantine validators.",
            ),
            (
                "theorem_2",
                StatementKind::Theorem,
                "Theorem 2. The protocol makes progress after stabilization.",
            ),
        ] {
            prose.insert(
                id.to_string(),
                ProseStatement {
                    id: id.to_string(),
                    kind,
                    title: id.to_string(),
                    statement_text: text.to_string(),
                    section: "unknown".to_string(),
                    page: None,
                    dependencies: Vec::new(),
                },
            );
        }

        let mut formal = IndexMap::new();
        formal.insert(
            "Consensus_Safety".to_string(),
            FormalStatement {
                id: "Consensus_Safety".to_string(),
                name: "Safety".to_string(),
                statement_text: "Safety == TypeOK /\\ NoByzantineMajority".to_string(),
                proof_status: ProofStatus::Complete,
                module: "Consensus".to_string(),
                line: 10,
                dependencies: Vec::new(),
                proof_obligations: Vec::new(),
            },
        );

        let log = LogContext::disabled();
        let mappings = StatementMatcher::new().correlate(&prose, &formal, &log);
        assemble_report(&prose, &formal, mappings)
    }

    #[test]
    fn statistics_are_computed_once_at_assembly() {
        let report = sample_report();

        assert_eq!(report.mapped_theorems(), 1);
        assert_eq!(report.statistics["mapped_theorems"], json!(1));
        assert_eq!(report.statistics["coverage_percent"], json!(50.0));
        assert_eq!(report.statistics["proofs_complete"], json!(1));
        assert_eq!(report.cross_references["theorem_1"], vec!["Consensus_Safety"]);
    }

    #[test]
    fn json_and_csv_agree_on_every_mapping() {
        let report = sample_report();
        let json_view = JsonRenderer.render(&report).unwrap();
        let csv_view = CsvRenderer.render(&report).unwrap();

        let parsed: Report = serde_json::from_str(&json_view).unwrap();
        let mut reader = csv::Reader::from_reader(csv_view.as_bytes());
        let rows: Vec<csv::StringRecord> =
            reader.records().map(|r| r.unwrap()).collect();

        for mapping in &parsed.mappings {
            let matching: Vec<_> = rows
                .iter()
                .filter(|row| {
                    &row[0] == mapping.whitepaper_id.as_str()
                        && &row[1] == mapping.tla_id.as_str()
                })
                .collect();
            assert_eq!(matching.len(), 1);
            let row = matching[0];
            assert_eq!(&row[2], mapping.confidence.to_string().as_str());
            assert_eq!(&row[4], mapping.verification.tlaps_status.as_str());
        }
        assert_eq!(rows.len(), parsed.mappings.len());
    }

    #[test]
    fn csv_columns_follow_fixed_order() {
        let report = sample_report();
        let csv_view = CsvRenderer.render(&report).unwrap();

        let mut reader = csv::Reader::from_reader(csv_view.as_bytes());
        let headers = reader.headers().unwrap().clone();
        assert_eq!(
            headers,
            csv::StringRecord::from(vec![
                "whitepaper_id",
                "tla_id",
                "confidence",
                "mapping_type",
                "tlaps_status",
                "tlc_status",
                "stateright_status",
                "tla_file",
                "line_range",
            ])
        );

        let row = reader.records().next().unwrap().unwrap();
        assert_eq!(&row[0], "theorem_1");
        assert_eq!(&row[1], "Consensus_Safety");
        assert_eq!(&row[2], "0.7");
        assert_eq!(&row[3], "keyword_based");
        assert_eq!(&row[4], "complete");
        assert_eq!(&row[5], "unknown");
        assert_eq!(&row[6], "unknown");
        assert_eq!(&row[7], "Consensus.tla");
        assert_eq!(&row[8], "10-15");
    }

    #[test]
    fn markdown_summarizes_and_omits_unused_backends() {
        let report = sample_report();
        let md = MarkdownRenderer.render(&report).unwrap();

        assert!(md.contains("- Whitepaper statements: 2"));
        assert!(md.contains("- Mapping candidates: 1"));
        assert!(md.contains("- Coverage: 50.0%"));
        assert!(md.contains("| theorem_1 | Consensus_Safety | 0.7 | keyword_based | complete |"));
        assert!(!md.contains("tlc"));
        assert!(!md.contains("stateright"));
    }

    #[test]
    fn coverage_is_zero_without_whitepaper_statements() {
        let report = assemble_report(&IndexMap::new(), &IndexMap::new(), Vec::new());

        assert_eq!(report.coverage_percent(), 0.0);
        let md = MarkdownRenderer.render(&report).unwrap();
        assert!(md.contains("- Coverage: 0.0%"));
    }

    #[test]
    fn html_carries_summary_and_mapping_rows() {
        let report = sample_report();
        let html = HtmlRenderer.render(&report).unwrap();

        assert!(html.contains("2 whitepaper statements"));
        assert!(html.contains("50.0% coverage"));
        assert!(html.contains("<td>theorem_1</td>"));
        assert!(html.contains("<td>Consensus_Safety</td>"));
        assert!(html.contains("<td>0.7</td>"));
        assert!(html.contains("<td>complete</td>"));
        assert!(html.contains("<td>Consensus.tla</td>"));
    }
}
