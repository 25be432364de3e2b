//! Tests for the lease-contract command-line surface

use std::io::Write;
use std::path::PathBuf;

use clap::Parser;
use interface_cli::{
    check_value, parse_contract, render_contract, run, validation_report, CheckKind, Cli,
    CliConfig, CliError, Command, OutputFormat,
};
use test_utils::ContractDataBuilder;

const SAMPLE_JSON: &str = r#"{
    "parties": [
        { "role": "landlord", "fullName": "Ana García", "docNumber": "12345678Z" },
        { "role": "tenant", "fullName": "Luis Martín", "docNumber": "X1234567L" }
    ],
    "property": {
        "location": "Sevilla",
        "date": "2024-03-15",
        "address": "Calle Sierpes 5",
        "catastralRef": "1234567TG3413S0001AB"
    },
    "financials": {
        "monthlyRent": 1250,
        "paymentMethod": "direct_debit",
        "bankAccount": "ES91 2100 0418 4502 0005 1332"
    },
    "options": { "rentUpdate": "no_update", "pets": "allowed" }
}"#;

fn contract_file(contents: &str) -> tempfile::NamedTempFile {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    file.write_all(contents.as_bytes()).unwrap();
    file
}

mod arguments {
    use super::*;

    #[test]
    fn test_render_flags() {
        let cli = Cli::try_parse_from([
            "lease-contract",
            "render",
            "contract.json",
            "--format",
            "json",
            "--skip-validation",
        ])
        .unwrap();

        match cli.command {
            Command::Render(args) => {
                assert_eq!(args.file, PathBuf::from("contract.json"));
                assert_eq!(args.format, Some(OutputFormat::Json));
                assert!(args.skip_validation);
            }
            other => panic!("Expected render, got {:?}", other),
        }
    }

    #[test]
    fn test_check_kinds() {
        let cli = Cli::try_parse_from(["lease-contract", "check", "iban", "ES00"]).unwrap();
        assert!(matches!(
            cli.command,
            Command::Check { kind: CheckKind::Iban, .. }
        ));
        assert!(Cli::try_parse_from(["lease-contract", "check", "passport", "X"]).is_err());
    }
}

mod parsing {
    use super::*;

    #[test]
    fn test_sample_uses_wire_names() {
        let data = parse_contract(SAMPLE_JSON).unwrap();
        assert_eq!(data.parties.len(), 2);
        assert_eq!(data.tenants()[0].full_name, "Luis Martín");
        assert_eq!(data.financials.annual_rent().unwrap().format_es(), "15.000,00");
        assert_eq!(data.property.max_occupancy, 2);
    }

    #[test]
    fn test_malformed_json() {
        assert!(parse_contract("{ not json").is_err());
    }
}

mod commands {
    use super::*;

    #[test]
    fn test_render_text() {
        let data = parse_contract(SAMPLE_JSON).unwrap();
        let text = render_contract(&data, OutputFormat::Text, false).unwrap();
        assert!(text.starts_with("CONTRATO DE ARRENDAMIENTO DE VIVIENDA"));
        assert!(text.contains("En Sevilla, a 15 de marzo de 2024."));
        assert!(text.contains("domiciliación bancaria"));
        assert!(text.contains("La renta no se actualizará"));
        assert!(text.contains("DÉCIMA.- JURISDICCIÓN."));
    }

    #[test]
    fn test_render_json_blocks() {
        let data = ContractDataBuilder::new().with_guarantor().build();
        let json = render_contract(&data, OutputFormat::Json, false).unwrap();
        let blocks: Vec<serde_json::Value> = serde_json::from_str(&json).unwrap();
        assert_eq!(blocks.len(), 14);
        assert_eq!(blocks[0]["title"], "REUNIDOS");
        assert_eq!(blocks[12]["title"], "UNDÉCIMA.- JURISDICCIÓN.");
    }

    #[test]
    fn test_render_refuses_invalid_contract_unless_skipped() {
        let data = ContractDataBuilder::empty().build();
        assert!(matches!(
            render_contract(&data, OutputFormat::Text, false),
            Err(CliError::Lease(_))
        ));
        assert!(render_contract(&data, OutputFormat::Text, true).is_ok());
    }

    #[test]
    fn test_validation_report() {
        let valid = validation_report(&ContractDataBuilder::new().build());
        assert!(valid.success);
        assert_eq!(valid.output, "valid");

        let invalid = validation_report(&ContractDataBuilder::new().with_bank_account("ES00").build());
        assert!(!invalid.success);
        assert_eq!(invalid.output, "bankAccount: IBAN inválido");
    }

    #[test]
    fn test_check_value() {
        assert!(check_value(CheckKind::Id, "12345678Z").success);
        assert!(!check_value(CheckKind::Id, "12345678A").success);
        assert_eq!(check_value(CheckKind::Phone, "612 345 678").output, "valid");
        assert_eq!(check_value(CheckKind::Email, "nope").output, "invalid");
    }

    #[test]
    fn test_run_reads_file_and_uses_configured_format() {
        let file = contract_file(SAMPLE_JSON);
        let path = file.path().to_str().unwrap();
        let cli = Cli::try_parse_from(["lease-contract", "render", path]).unwrap();
        let config = CliConfig {
            output_format: OutputFormat::Json,
            ..CliConfig::default()
        };

        let outcome = run(cli, &config).unwrap();

        assert!(outcome.success);
        assert!(outcome.output.trim_start().starts_with('['));
    }

    #[test]
    fn test_run_reports_missing_file() {
        let cli = Cli::try_parse_from(["lease-contract", "validate", "/nonexistent/contract.json"]).unwrap();
        assert!(matches!(
            run(cli, &CliConfig::default()),
            Err(CliError::Read { .. })
        ));
    }
}
