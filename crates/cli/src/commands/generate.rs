use crate::di;
use oui_data_domain::Config;
use std::process::ExitCode;

pub async fn run(config: &Config, input: Option<String>) -> anyhow::Result<ExitCode> {
    let generator = di::build_generator(config, input)?;
    let report = generator.execute().await?;

    println!(
        "Generated {} OUI entries at {}",
        report.entries, report.destination
    );
    Ok(ExitCode::SUCCESS)
}
