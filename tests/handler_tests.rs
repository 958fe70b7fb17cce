//! Primer handling pipeline tests
//!
//! Tests for counting, indexing and pairing seed sequence files end to end.

use std::io::Write;
use std::sync::Arc;

use magphi::commands::PairReport;
use magphi::config::KeyCollisionPolicy;
use magphi::{handle_primers, Config, MagphiError, PrimerPair, EXIT_INPUT_FILE_ERROR};
use tempfile::NamedTempFile;

fn fasta(content: &str) -> NamedTempFile {
    let mut file = NamedTempFile::new().expect("create temp file");
    file.write_all(content.as_bytes()).expect("write temp file");
    file
}

const GENES: &str = "\
>geneX_F
ACGTACGTAC
>geneX_R
TTGACCAGTA
>geneY_F
GGGCCCAAAT
GGA
>geneY_R
CATCATCATC
";

// =============================================================================
// Successful Runs
// =============================================================================

mod success_tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_gene_file() {
        let file = fasta(GENES);
        let (pairs, records) = handle_primers(file.path(), &Config::default()).unwrap();

        assert_eq!(pairs.len(), 2);
        assert!(pairs
            .get("geneY")
            .unwrap()
            .same_members(&PrimerPair::new("geneY_R", "geneY_F")));
        assert_eq!(
            records.names().collect::<Vec<_>>(),
            vec!["geneX_F", "geneX_R", "geneY_F", "geneY_R"]
        );
        assert_eq!(
            records.get("geneY_F").unwrap(),
            &["GGGCCCAAAT".to_string(), "GGA".to_string()]
        );
    }

    #[test]
    fn test_header_marker_not_at_line_start() {
        let file = fasta("seq>locusA_fwd\nACGT\n  >locusA_rev\nTGCA\n");
        let (pairs, records) = handle_primers(file.path(), &Config::default()).unwrap();
        assert!(records.contains("locusA_fwd"));
        assert!(records.contains("locusA_rev"));
        assert!(pairs.contains_key("locusA"));
    }

    #[test]
    fn test_crlf_file() {
        let file = fasta(">a_F\r\nACGT\r\n>a_R\r\nTGCA\r\n");
        let (pairs, _) = handle_primers(file.path(), &Config::default()).unwrap();
        assert_eq!(pairs.get("a").unwrap(), &PrimerPair::new("a_F", "a_R"));
    }

    #[test]
    fn test_custom_header_marker() {
        let file = fasta("@p1_F\nACGT\n@p1_R\nTGCA\n");
        let config = Config {
            header_marker: '@',
            ..Default::default()
        };
        let (pairs, _) = handle_primers(file.path(), &config).unwrap();
        assert!(pairs.contains_key("p1"));
    }

    #[test]
    fn test_empty_file_yields_no_pairs() {
        let file = fasta("");
        let (pairs, records) = handle_primers(file.path(), &Config::default()).unwrap();
        assert!(pairs.is_empty());
        assert!(records.is_empty());
    }

    #[test]
    fn test_results_shared_across_threads() {
        let file = fasta(GENES);
        let (pairs, records) = handle_primers(file.path(), &Config::default()).unwrap();
        let shared = Arc::new((pairs, records));

        std::thread::scope(|scope| {
            for key in ["geneX", "geneY"] {
                let shared = Arc::clone(&shared);
                scope.spawn(move || {
                    let (pairs, records) = &*shared;
                    let pair = pairs.get(key).unwrap();
                    for name in pair.members() {
                        assert!(records.sequence(name).is_some());
                    }
                });
            }
        });
    }

    #[test]
    fn test_json_report() {
        let file = fasta(GENES);
        let (pairs, records) = handle_primers(file.path(), &Config::default()).unwrap();
        let report = PairReport {
            pairs: &pairs,
            records: &records,
        };
        let json = serde_json::to_value(&report).unwrap();

        assert_eq!(json["pairs"]["geneX"]["first"], "geneX_F");
        assert_eq!(json["pairs"]["geneX"]["second"], "geneX_R");
        assert_eq!(json["records"]["geneY_F"][1], "GGA");
    }
}

// =============================================================================
// Input File Errors
// =============================================================================

mod error_tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_odd_count() {
        let file = fasta(">a_F\nAC\n>a_R\nGT\n>b_F\nCC\n");
        let err = handle_primers(file.path(), &Config::default()).unwrap_err();
        assert!(matches!(err, MagphiError::OddRecordCount { count: 3, .. }));
        assert_eq!(err.exit_code(), EXIT_INPUT_FILE_ERROR);
    }

    #[test]
    fn test_duplicate_name() {
        let file = fasta(">a_F\nAC\n>a_R\nGT\n>a_F\nCC\n>b_R\nGG\n");
        let err = handle_primers(file.path(), &Config::default()).unwrap_err();
        match &err {
            MagphiError::DuplicateRecordName { name, .. } => assert_eq!(name, "a_F"),
            other => panic!("unexpected error: {other}"),
        }
        assert_eq!(err.exit_code(), EXIT_INPUT_FILE_ERROR);
    }

    #[test]
    fn test_pairing_exhausted() {
        let file = fasta(">a1\nAC\n>a2\nGT\n>a3\nCC\n>a4\nGG\n");
        let config = Config {
            max_pairing_rounds: 40,
            ..Default::default()
        };
        let err = handle_primers(file.path(), &config).unwrap_err();
        assert!(matches!(err, MagphiError::PairingExhausted { rounds: 40, .. }));
        assert_eq!(err.exit_code(), EXIT_INPUT_FILE_ERROR);
    }

    #[test]
    fn test_strict_pair_names() {
        let file = fasta(">k_1\nAC\n>k_2\nGT\n>k1\nCC\n>k2\nGG\n");
        let config = Config {
            key_collision: KeyCollisionPolicy::Error,
            ..Default::default()
        };
        let err = handle_primers(file.path(), &config).unwrap_err();
        assert!(matches!(err, MagphiError::DuplicatePairKey { .. }));

        let (pairs, records) = handle_primers(file.path(), &Config::default()).unwrap();
        assert_eq!(pairs.len(), 1);
        assert_eq!(records.len(), 4);
    }

    #[test]
    fn test_content_before_header() {
        let file = fasta("ACGT\n>a\n>b\n");
        let err = handle_primers(file.path(), &Config::default()).unwrap_err();
        assert!(matches!(err, MagphiError::ContentBeforeHeader { line: 1, .. }));
    }

    #[test]
    fn test_missing_file() {
        let dir = tempfile::tempdir().unwrap();
        let err = handle_primers(dir.path().join("nope.fa"), &Config::default()).unwrap_err();
        assert!(matches!(err, MagphiError::Read { .. }));
        assert_eq!(err.exit_code(), EXIT_INPUT_FILE_ERROR);
    }
}
