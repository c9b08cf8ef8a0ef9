//! # SharpAPI HR Job Description
//!
//! A Rust client for SharpAPI's AI-powered job description generator.
//! Generation runs asynchronously on SharpAPI: the client dispatches a job
//! and returns the status URL to poll for the finished description.
//!
//! ## Features
//!
//! - **Configuration**: defaults, TOML host config and `SHARP_API_*`
//!   environment variables merged without clobbering host values
//! - **Config publishing**: copy the default config file into your project
//! - **Typed parameters**: only the job position name is required
//! - **Error Handling**: configuration and transport failures kept apart,
//!   with actionable suggestions
//!
//! ## Example Usage
//!
//! ```rust,no_run
//! use sharpapi_hr_job_description::{
//!     config::Config,
//!     hr_job_description::HrJobDescriptionClient,
//!     parameters::JobDescriptionParameters,
//!     registrar,
//! };
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! // Populate the configuration store at bootstrap
//! let mut store = toml::Table::new();
//! registrar::register(&mut store)?;
//!
//! let client = HrJobDescriptionClient::new(&Config::from_store(&store)?)?;
//!
//! let params = JobDescriptionParameters::new("Senior Backend Engineer")
//!     .with_company_name("ACME LTD")
//!     .with_required_skills(["Rust", "PostgreSQL"]);
//! let status_url = client.generate_job_description(&params)?;
//! println!("Poll {status_url} for the result");
//! # Ok(())
//! # }
//! ```

/// Generic SharpAPI transport and its error types
pub mod api;

/// Client configuration and host config store access
pub mod config;

/// Request failure details with actionable suggestions
pub mod errors;

/// The job description endpoint client
pub mod hr_job_description;

/// Job description request parameters
pub mod parameters;

/// Default registration and config file publishing
pub mod registrar;
