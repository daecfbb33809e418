use oui_data_application::use_cases::{FetchEntriesUseCase, GenerateDatasetUseCase};
use oui_data_domain::DomainError;
use oui_data_infrastructure::{FileDatasetLoader, JsonFileDatasetWriter, LocalCsvFeed};
use std::io::Write;
use std::sync::Arc;

const REGISTRY_CSV: &str = "Registry,Assignment,Organization Name,Organization Address\n\
MA-L,B827EB,Raspberry Pi Foundation,Mitchell Wood House Caldecote GB CB23 7NU\n\
MA-L,00000C,Cisco Systems Inc,170 West Tasman Drive San Jose CA US 95134\n\
MA-L,000C29,\"VMware, Inc.\",3401 Hillview Avenue PALO ALTO CA US 94304\n";

#[tokio::test]
async fn test_generated_dataset_is_readable_by_loader() {
    let mut csv = tempfile::NamedTempFile::new().unwrap();
    csv.write_all(REGISTRY_CSV.as_bytes()).unwrap();
    csv.flush().unwrap();

    let resources = tempfile::tempdir().unwrap();
    let output = resources.path().join("oui.json");

    let generate = GenerateDatasetUseCase::new(
        Arc::new(LocalCsvFeed::new(csv.path())),
        Arc::new(JsonFileDatasetWriter::new(&output)),
    );
    let report = generate.execute().await.unwrap();
    assert_eq!(report.entries, 3);
    assert_eq!(report.destination, output.display().to_string());

    let entries = FetchEntriesUseCase::new(Arc::new(FileDatasetLoader::new(resources.path())))
        .execute()
        .await
        .unwrap();

    let ids: Vec<&str> = entries.iter().map(|e| e.id.as_str()).collect();
    assert_eq!(ids, vec!["00000C", "000C29", "B827EB"]);
    assert_eq!(entries[1].organization(), "VMware, Inc.");
    assert_eq!(
        entries[2].company_info,
        "Raspberry Pi Foundation\nMitchell Wood House Caldecote GB CB23 7NU"
    );
}

#[tokio::test]
async fn test_failed_generation_keeps_previous_dataset() {
    let resources = tempfile::tempdir().unwrap();
    let output = resources.path().join("oui.json");
    std::fs::write(&output, r#"{"AABBCC": "Vendor One"}"#).unwrap();

    let generate = GenerateDatasetUseCase::new(
        Arc::new(LocalCsvFeed::new(resources.path().join("missing.csv"))),
        Arc::new(JsonFileDatasetWriter::new(&output)),
    );

    assert!(matches!(
        generate.execute().await,
        Err(DomainError::FeedError(_))
    ));
    assert_eq!(
        std::fs::read_to_string(&output).unwrap(),
        r#"{"AABBCC": "Vendor One"}"#
    );
}
