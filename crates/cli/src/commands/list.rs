use crate::di::LookupUseCases;
use oui_data_domain::Config;
use std::io::{self, BufWriter, Write};
use std::process::ExitCode;

pub async fn run(config: &Config, json: bool) -> anyhow::Result<ExitCode> {
    let use_cases = LookupUseCases::new(config);
    let entries = use_cases.fetch_entries.execute().await?;

    let stdout = io::stdout();
    let mut out = BufWriter::new(stdout.lock());

    if json {
        serde_json::to_writer_pretty(&mut out, &entries)?;
        writeln!(out)?;
    } else {
        for entry in &entries {
            writeln!(out, "{}\t{}", entry.id, entry.organization())?;
        }
    }

    out.flush()?;
    Ok(ExitCode::SUCCESS)
}
