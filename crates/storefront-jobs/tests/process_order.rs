use std::process::Command;

use storefront_test_support::fixtures::{ConfigFixture, job_runner_document};

fn process_order(config: &std::path::Path) -> std::io::Result<std::process::Output> {
    Command::new(env!("CARGO_BIN_EXE_process-order"))
        .arg("--config")
        .arg(config)
        .arg("--log-format")
        .arg("json")
        .env_remove("STOREFRONT_JOBS_CONFIG")
        .output()
}

#[test]
fn missing_web_jobs_connection_exits_ten() -> anyhow::Result<()> {
    let fixture = ConfigFixture::new()?;
    let config = fixture.write_json("config.json", &job_runner_document(" ", "Server=db"))?;

    let output = process_order(&config)?;

    assert_eq!(output.status.code(), Some(10));
    let stdout = String::from_utf8(output.stdout)?;
    assert_eq!(
        stdout.trim_end(),
        "The configuration value for Azure Web Jobs Connection String is missing."
    );
    Ok(())
}

#[test]
fn complete_configuration_exits_zero() -> anyhow::Result<()> {
    let fixture = ConfigFixture::new()?;
    let config = fixture.write_json(
        "config.json",
        &job_runner_document("UseDevelopmentStorage=true", "Server=db"),
    )?;

    let output = process_order(&config)?;

    assert_eq!(output.status.code(), Some(0));
    assert!(output.stdout.is_empty());
    Ok(())
}

#[test]
fn unreadable_configuration_exits_one() -> anyhow::Result<()> {
    let fixture = ConfigFixture::new()?;

    let output = process_order(&fixture.path().join("absent.json"))?;

    assert_eq!(output.status.code(), Some(1));
    Ok(())
}
