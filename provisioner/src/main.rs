use aegis_keys::catalog::{self, DeploymentTarget};
use aegis_keys::KeyRecord;
use anyhow::Context;
use clap::Parser;
use std::fs;
use std::path::{Path, PathBuf};

const DEFAULT_OUTPUT: &str = concat!(env!("CARGO_MANIFEST_DIR"), "/../keys/src/variant.rs");

/// Selects which deployment target's keys are compiled into libaegis_keys.
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Client id of the deployment target, e.g. MY_BANK_ANDROID
    #[arg(short, long, required_unless_present = "list")]
    target: Option<String>,

    /// Registration key; required when the catalog has none for the target
    #[arg(short, long, env = "AEGIS_REGISTRATION_KEY", hide_env_values = true)]
    registration_key: Option<String>,

    /// Variant file to write; defaults to the keys crate in this workspace
    #[arg(short, long, default_value = DEFAULT_OUTPUT)]
    output: PathBuf,

    /// List known deployment targets and exit
    #[arg(short, long)]
    list: bool,
}

fn main() -> anyhow::Result<()> {
    let args = Args::parse();

    if args.list {
        for target in catalog::TARGETS {
            println!("{}", describe(target));
        }
        return Ok(());
    }

    let client_id = args.target.as_deref().unwrap_or_default();
    let record = resolve(client_id, args.registration_key.as_deref())?;
    write_variant(&args.output, &record)?;

    println!(
        "Provisioned {} ({}) -> {}",
        record.client_id,
        record.fingerprint(),
        args.output.display()
    );
    Ok(())
}

fn describe(target: &DeploymentTarget) -> String {
    match target.record() {
        Some(record) => format!("{:<24} {}", target.client_id, record.fingerprint()),
        None => format!("{:<24} (key supplied at provisioning)", target.client_id),
    }
}

/// Picks the key for `client_id`, preferring an explicit override.
fn resolve<'a>(client_id: &'a str, key_override: Option<&'a str>) -> anyhow::Result<KeyRecord<'a>> {
    let known = catalog::lookup(client_id).and_then(|target| target.registration_key);
    let registration_key = match (key_override, known) {
        (Some(key), _) => key,
        (None, Some(key)) => key,
        (None, None) if catalog::lookup(client_id).is_some() => {
            anyhow::bail!("No registration key on record for {client_id}; pass --registration-key")
        }
        (None, None) => {
            anyhow::bail!("Unknown target {client_id}; pass --registration-key to provision a new one")
        }
    };

    let record = KeyRecord::new(registration_key, client_id);
    record
        .validate()
        .with_context(|| format!("Invalid key record for {client_id}"))?;
    Ok(record)
}

fn render_variant(record: &KeyRecord) -> String {
    format!(
        "// Generated by aegis-provisioner for {client_id}. Do not edit.\n\
         \n\
         use crate::record::KeyRecord;\n\
         \n\
         pub const ACTIVE: KeyRecord<'static> = KeyRecord::new(\n    {key:?},\n    {client_id:?},\n);\n",
        client_id = record.client_id,
        key = record.registration_key,
    )
}

fn write_variant(path: &Path, record: &KeyRecord) -> anyhow::Result<()> {
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent)
            .with_context(|| format!("Failed to create {}", parent.display()))?;
    }
    fs::write(path, render_variant(record))
        .with_context(|| format!("Failed to write {}", path.display()))
}
