mod args;
use crate::args::{Args, Commands, GenerateArgs};

use clap::Parser;
use log::info;
use sharpapi_hr_job_description::{
    api::ApiClientError,
    config::{keys, Config, ConfigError, NAMESPACE},
    hr_job_description::HrJobDescriptionClient,
    parameters::JobDescriptionParameters,
    registrar::{self, Publication, RunContext},
};
use thiserror::Error;
use toml::{Table, Value};
use url::Url;

#[derive(Debug, Error)]
pub enum CliError {
    #[error(transparent)]
    Api(#[from] ApiClientError),

    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error(transparent)]
    Serialize(#[from] serde_json::Error),
}

fn main() -> anyhow::Result<()> {
    env_logger::init();

    let Args { command } = Args::parse();

    match command {
        Commands::Generate(args) => {
            if let Some(status_url) = generate(args)? {
                println!("{status_url}");
            }
        }
        Commands::PublishConfig(args) => {
            match registrar::boot(RunContext::Console, &args.dir, args.force)? {
                Publication::Written(path) => println!("Published {}", path.display()),
                Publication::AlreadyPresent(path) => println!(
                    "{} already exists, use --force to overwrite it",
                    path.display()
                ),
                Publication::Skipped => (),
            }
        }
    }
    Ok(())
}

fn generate(args: GenerateArgs) -> Result<Option<String>, CliError> {
    let params = JobDescriptionParameters::from(args.job);

    if args.dry_run {
        println!("{}", serde_json::to_string_pretty(&params)?);
        println!("Nothing sent, drop --dry-run to dispatch the job");
        return Ok(None);
    }

    let file = args.config.as_deref().map(Config::load_store).transpose()?;
    let store = layered_store(args.api_key, args.base_url, file, registrar::env_lookup)?;

    let config = Config::from_store(&store)?;
    info!("Using {config:?}");

    let client = HrJobDescriptionClient::new(&config)?;
    Ok(Some(client.generate_job_description(&params)?))
}

/// Flags win over the config file, which wins over `SHARP_API_*` values
/// from `lookup`, which win over the package defaults.
fn layered_store<F>(
    api_key: Option<String>,
    base_url: Option<Url>,
    file: Option<Table>,
    lookup: F,
) -> Result<Table, ConfigError>
where
    F: Fn(&str) -> Option<String>,
{
    let mut flags = Table::new();
    if let Some(api_key) = api_key {
        flags.insert(keys::API_KEY.to_owned(), Value::String(api_key));
    }
    if let Some(base_url) = base_url {
        flags.insert(keys::BASE_URL.to_owned(), Value::String(base_url.into()));
    }

    let mut store = Table::new();
    store.insert(NAMESPACE.to_owned(), Value::Table(flags));

    if let Some(file) = file {
        registrar::merge_defaults(&mut store, namespace_section(file)?)?;
    }
    registrar::merge_defaults(&mut store, registrar::package_defaults_with(lookup)?)?;

    Ok(store)
}

fn namespace_section(mut store: Table) -> Result<Table, ConfigError> {
    match store.remove(NAMESPACE) {
        None => Ok(Table::new()),
        Some(Value::Table(section)) => Ok(section),
        Some(_) => Err(ConfigError::InvalidValue {
            key: NAMESPACE,
            expected: "a table",
        }),
    }
}
