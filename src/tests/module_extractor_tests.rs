#[cfg(test)]
mod tests {
    use std::fs;

    use tempfile::tempdir;

    use crate::extractors::ModuleExtractor;
    use crate::logging::LogContext;
    use crate::models::formal::ProofStatus;

    fn extractor() -> ModuleExtractor {
        ModuleExtractor::new("tla")
    }

    #[test]
    fn bodies_never_bleed_across_declarations() {
        let text = "THEOREM Foo == X /\\ Y\nTHEOREM Bar == Z\n";

        let statements = extractor().extract_module(text, "Spec");

        assert_eq!(statements.len(), 2);
        assert_eq!(statements[0].id, "Spec_Foo");
        assert_eq!(statements[0].statement_text, "Foo == X /\\ Y");
        assert!(!statements[0].statement_text.contains("Bar"));
        assert_eq!(statements[1].statement_text, "Bar == Z");
    }

    #[test]
    fn proof_status_is_file_scoped() {
        // Only Foo carries a proof, but the completion markers promote
        // every declaration in the file.
        let text = "THEOREM Foo == X\nPROOF\n<1>1. QED\nTHEOREM Bar == Y\n";

        let statements = extractor().extract_module(text, "Spec");

        assert_eq!(statements.len(), 2);
        assert!(statements
            .iter()
            .all(|s| s.proof_status == ProofStatus::Complete));
    }

    #[test]
    fn proof_without_completion_marker_is_incomplete() {
        let text = "THEOREM Foo == X\nPROOF\n<1>1. OBVIOUS\n";

        let statements = extractor().extract_module(text, "Spec");

        assert_eq!(statements[0].proof_status, ProofStatus::Incomplete);
    }

    #[test]
    fn no_proof_markers_means_unknown() {
        let text = "THEOREM Foo == X\n";

        let statements = extractor().extract_module(text, "Spec");

        assert_eq!(statements[0].proof_status, ProofStatus::Unknown);
    }

    #[test]
    fn line_numbers_are_one_based() {
        let text = "---- MODULE Spec ----\nVARIABLE x\n\nTHEOREM Foo == x = 0\n";

        let statements = extractor().extract_module(text, "Spec");

        assert_eq!(statements[0].line, 4);
    }

    #[test]
    fn body_stops_at_module_end_marker() {
        let text = "THEOREM Foo == x = 0\n====\nStray text after the module.\n";

        let statements = extractor().extract_module(text, "Spec");

        assert_eq!(statements[0].statement_text, "Foo == x = 0");
    }

    #[test]
    fn discovers_modules_recursively_and_filters_extension() {
        let dir = tempdir().unwrap();
        let specs = dir.path().join("specs");
        let proofs = dir.path().join("proofs");
        fs::create_dir_all(specs.join("safety")).unwrap();
        fs::create_dir_all(&proofs).unwrap();
        fs::write(
            specs.join("safety/Consensus.tla"),
            "THEOREM Agreement == x = y\n",
        )
        .unwrap();
        fs::write(proofs.join("Liveness.tla"), "THEOREM Progress == P ~> Q\n").unwrap();
        fs::write(specs.join("README.md"), "THEOREM NotAModule == TRUE\n").unwrap();

        let log = LogContext::disabled();
        let statements =
            extractor().extract_dirs(&[specs.as_path(), proofs.as_path()], &log);

        assert_eq!(statements.len(), 2);
        assert!(statements.contains_key("Consensus_Agreement"));
        assert!(statements.contains_key("Liveness_Progress"));
    }

    #[test]
    fn name_collision_last_write_wins() {
        let dir = tempdir().unwrap();
        let specs = dir.path().join("specs");
        fs::create_dir_all(&specs).unwrap();
        fs::write(
            specs.join("M.tla"),
            "THEOREM Shared == X\nLEMMA Shared == Y\n",
        )
        .unwrap();

        let log = LogContext::disabled();
        let statements = extractor().extract_dirs(&[specs.as_path()], &log);

        assert_eq!(statements.len(), 1);
        assert_eq!(statements["M_Shared"].statement_text, "Shared == Y");
    }

    #[test]
    fn unreadable_file_is_skipped() {
        let dir = tempdir().unwrap();
        let specs = dir.path().join("specs");
        fs::create_dir_all(&specs).unwrap();
        // Invalid UTF-8 makes the read fail; the file is skipped.
        fs::write(specs.join("Broken.tla"), [0xff, 0xfe, 0xfd]).unwrap();
        fs::write(specs.join("Good.tla"), "THEOREM Foo == x = 0\n").unwrap();

        let log = LogContext::disabled();
        let statements = extractor().extract_dirs(&[specs.as_path()], &log);

        assert_eq!(statements.len(), 1);
        assert!(statements.contains_key("Good_Foo"));
    }
}
