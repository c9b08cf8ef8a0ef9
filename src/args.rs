use std::path::PathBuf;

use sharpapi_hr_job_description::{config::parse_base_url, parameters::JobDescriptionParameters};
use url::Url;

fn position_name_value_parser(name: &str) -> Result<String, String> {
    let trimmed = name.trim();
    if trimmed.is_empty() {
        return Err("Job position name cannot be empty".to_string());
    }

    Ok(trimmed.to_string())
}

fn base_url_value_parser(raw: &str) -> Result<Url, String> {
    parse_base_url(raw).map_err(|err| err.to_string())
}

#[derive(clap::Parser)]
#[command(name = "sharpapi-job-description")]
#[command(author = "SharpAPI")]
#[command(version)]
#[command(about = "Generate job descriptions with SharpAPI")]
#[command(long_about = "
A command-line client for SharpAPI's AI-powered job description generator.

Generation is asynchronous: the generate command dispatches a job and prints
the status URL to poll for the result. The API key is read from
SHARP_API_KEY, from the [sharpapi-hr-job-description] table of a config
file, or from --api-key.

Examples:
  # Dispatch a job description job
  sharpapi-job-description generate --name \"Senior Backend Engineer\" \\
    --company-name \"ACME LTD\" --required-skills Rust,PostgreSQL

  # Preview the request body without sending it
  sharpapi-job-description generate --name \"Nurse\" --remote false --dry-run

  # Copy the default config file into ./config
  sharpapi-job-description publish-config --dir config
")]
pub struct Args {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(clap::Subcommand)]
pub enum Commands {
    /// Dispatch a job description generation job
    ///
    /// Sends the job parameters to SharpAPI and prints the status URL of
    /// the job it created. Only --name is required.
    Generate(GenerateArgs),

    /// Copy the default configuration file into a project
    ///
    /// An existing file is left untouched unless --force is given.
    PublishConfig(PublishArgs),
}

#[derive(clap::Args)]
pub struct GenerateArgs {
    /// TOML config file with a [sharpapi-hr-job-description] table
    #[arg(long, value_name = "FILE", value_hint = clap::ValueHint::FilePath)]
    pub config: Option<PathBuf>,

    /// SharpAPI key, overrides the config file and SHARP_API_KEY
    #[arg(long, value_name = "KEY")]
    pub api_key: Option<String>,

    /// SharpAPI base URL
    #[arg(
        long,
        value_name = "URL",
        value_hint = clap::ValueHint::Url,
        value_parser = base_url_value_parser
    )]
    pub base_url: Option<Url>,

    /// Print the request body instead of sending it
    #[arg(long, default_value_t = false)]
    pub dry_run: bool,

    #[command(flatten)]
    pub job: JobArgs,
}

#[derive(clap::Args)]
pub struct JobArgs {
    /// Job position title
    #[arg(long, value_name = "TITLE", value_parser = position_name_value_parser)]
    pub name: String,

    #[arg(long)]
    pub company_name: Option<String>,

    /// e.g. "5 years"
    #[arg(long)]
    pub minimum_work_experience: Option<String>,

    /// e.g. "Bachelor Degree"
    #[arg(long)]
    pub minimum_education: Option<String>,

    /// e.g. "full time"
    #[arg(long)]
    pub employment_type: Option<String>,

    /// Comma separated list
    #[arg(long, value_delimiter = ',')]
    pub required_skills: Vec<String>,

    /// Comma separated list
    #[arg(long, value_delimiter = ',')]
    pub optional_skills: Vec<String>,

    #[arg(long)]
    pub country: Option<String>,

    #[arg(long, value_name = "BOOL")]
    pub remote: Option<bool>,

    #[arg(long, value_name = "BOOL")]
    pub visa_sponsored: Option<bool>,

    /// e.g. "Professional", "Friendly"
    #[arg(long)]
    pub voice_tone: Option<String>,

    /// Extra instructions for the generator
    #[arg(long)]
    pub context: Option<String>,

    /// Output language, defaults to English
    #[arg(long)]
    pub language: Option<String>,
}

impl From<JobArgs> for JobDescriptionParameters {
    fn from(args: JobArgs) -> Self {
        Self {
            name: args.name,
            company_name: args.company_name,
            minimum_work_experience: args.minimum_work_experience,
            minimum_education: args.minimum_education,
            employment_type: args.employment_type,
            required_skills: args.required_skills,
            optional_skills: args.optional_skills,
            country: args.country,
            remote: args.remote,
            visa_sponsored: args.visa_sponsored,
            voice_tone: args.voice_tone,
            context: args.context,
            language: args.language,
        }
    }
}

#[derive(clap::Args)]
pub struct PublishArgs {
    /// Directory to publish the config file into
    #[arg(
        long,
        value_name = "DIR",
        value_hint = clap::ValueHint::DirPath,
        default_value = "config"
    )]
    pub dir: PathBuf,

    /// Overwrite an existing config file
    #[arg(long, default_value_t = false)]
    pub force: bool,
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::Parser;

    #[test]
    fn test_generate_args_map_to_parameters() {
        let args = Args::try_parse_from([
            "sharpapi-job-description",
            "generate",
            "--name",
            " Senior Backend Engineer ",
            "--required-skills",
            "Rust,PostgreSQL",
            "--remote",
            "true",
        ])
        .unwrap();

        let Commands::Generate(generate) = args.command else {
            panic!("Expected generate command");
        };
        let params = JobDescriptionParameters::from(generate.job);

        assert_eq!(params.name, "Senior Backend Engineer");
        assert_eq!(params.required_skills, vec!["Rust", "PostgreSQL"]);
        assert_eq!(params.remote, Some(true));
        assert!(params.company_name.is_none());
    }

    #[test]
    fn test_empty_name_rejected() {
        let result = Args::try_parse_from(["sharpapi-job-description", "generate", "--name", " "]);
        assert!(result.is_err());
    }

    #[test]
    fn test_bad_base_url_rejected() {
        let result = Args::try_parse_from([
            "sharpapi-job-description",
            "generate",
            "--name",
            "Chef",
            "--base-url",
            "sharpapi.com",
        ]);
        assert!(result.is_err());
    }

    #[test]
    fn test_publish_defaults() {
        let args = Args::try_parse_from(["sharpapi-job-description", "publish-config"]).unwrap();
        let Commands::PublishConfig(publish) = args.command else {
            panic!("Expected publish-config command");
        };

        assert_eq!(publish.dir, PathBuf::from("config"));
        assert!(!publish.force);
    }
}
