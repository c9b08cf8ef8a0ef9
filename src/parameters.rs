use serde::{Deserialize, Serialize};

/// Description of the job position to generate text for.
///
/// Only `name` is required. Unset fields are left out of the request body
/// entirely, so SharpAPI applies its own defaults for them.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct JobDescriptionParameters {
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub company_name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub minimum_work_experience: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub minimum_education: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub employment_type: Option<String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub required_skills: Vec<String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub optional_skills: Vec<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub country: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub remote: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub visa_sponsored: Option<bool>,
    /// Tone of the generated text, e.g. "Professional" or "Friendly".
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub voice_tone: Option<String>,
    /// Free-form extra instructions.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub context: Option<String>,
    /// Output language, SharpAPI defaults to English.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub language: Option<String>,
}

impl JobDescriptionParameters {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ..Default::default()
        }
    }

    #[must_use]
    pub fn with_company_name(mut self, company_name: impl Into<String>) -> Self {
        self.company_name = Some(company_name.into());
        self
    }

    #[must_use]
    pub fn with_minimum_work_experience(mut self, experience: impl Into<String>) -> Self {
        self.minimum_work_experience = Some(experience.into());
        self
    }

    #[must_use]
    pub fn with_minimum_education(mut self, education: impl Into<String>) -> Self {
        self.minimum_education = Some(education.into());
        self
    }

    #[must_use]
    pub fn with_employment_type(mut self, employment_type: impl Into<String>) -> Self {
        self.employment_type = Some(employment_type.into());
        self
    }

    #[must_use]
    pub fn with_required_skills<I, S>(mut self, skills: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.required_skills = skills.into_iter().map(Into::into).collect();
        self
    }

    #[must_use]
    pub fn with_optional_skills<I, S>(mut self, skills: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.optional_skills = skills.into_iter().map(Into::into).collect();
        self
    }

    #[must_use]
    pub fn with_country(mut self, country: impl Into<String>) -> Self {
        self.country = Some(country.into());
        self
    }

    #[must_use]
    pub const fn with_remote(mut self, remote: bool) -> Self {
        self.remote = Some(remote);
        self
    }

    #[must_use]
    pub const fn with_visa_sponsored(mut self, visa_sponsored: bool) -> Self {
        self.visa_sponsored = Some(visa_sponsored);
        self
    }

    #[must_use]
    pub fn with_voice_tone(mut self, voice_tone: impl Into<String>) -> Self {
        self.voice_tone = Some(voice_tone.into());
        self
    }

    #[must_use]
    pub fn with_context(mut self, context: impl Into<String>) -> Self {
        self.context = Some(context.into());
        self
    }

    #[must_use]
    pub fn with_language(mut self, language: impl Into<String>) -> Self {
        self.language = Some(language.into());
        self
    }
}
