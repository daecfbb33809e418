use crate::di::LookupUseCases;
use oui_data_domain::{Config, OuiEntry};
use std::process::ExitCode;

pub async fn run(config: &Config, oui: &str) -> anyhow::Result<ExitCode> {
    OuiEntry::validate_id(oui)?;

    let use_cases = LookupUseCases::new(config);
    match use_cases.fetch_mapping.lookup(oui).await? {
        Some(company_info) => {
            println!("{}", company_info);
            Ok(ExitCode::SUCCESS)
        }
        None => {
            eprintln!("{}: not found", oui);
            Ok(ExitCode::FAILURE)
        }
    }
}
