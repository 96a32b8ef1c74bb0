//! Deployment host map and environment selection.
//!
//! The suites run against a deployed instance of the contact-management
//! application. Which instance is chosen by the `CONTACT_ENV` environment
//! variable (`test`, `dev` or `prod`, defaulting to `test`).

use std::fmt;
use std::str::FromStr;

use crate::error::HarnessError;

/// Environment variable selecting the deployment to test against.
pub const ENV_VAR: &str = "CONTACT_ENV";

/// A named deployment environment.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DeployEnv {
    /// The testing environment.
    Test,
    /// The development environment.
    Dev,
    /// The production environment.
    Prod,
}

impl DeployEnv {
    /// Base URL of the deployment, with a trailing slash.
    ///
    /// # Errors
    ///
    /// Returns a configuration error for environments that have no deployed
    /// instance configured.
    pub fn base_url(self) -> Result<&'static str, HarnessError> {
        match self {
            Self::Test => Ok("https://thinking-tester-contact-list.herokuapp.com/"),
            Self::Dev | Self::Prod => Err(HarnessError::config(format!(
                "no base URL configured for environment '{self}'"
            ))),
        }
    }
}

impl fmt::Display for DeployEnv {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Test => "test",
            Self::Dev => "dev",
            Self::Prod => "prod",
        };
        f.write_str(name)
    }
}

impl FromStr for DeployEnv {
    type Err = HarnessError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "test" => Ok(Self::Test),
            "dev" => Ok(Self::Dev),
            "prod" => Ok(Self::Prod),
            other => Err(HarnessError::config(format!(
                "unknown environment '{other}', expected test, dev or prod"
            ))),
        }
    }
}

/// Resolve the base URL for the environment named by [`ENV_VAR`].
///
/// Falls back to the `test` environment when the variable is unset.
///
/// # Errors
///
/// Returns a configuration error when the variable names an unknown
/// environment or one without a configured deployment.
pub fn base_url_from_env() -> Result<String, HarnessError> {
    let name = std::env::var(ENV_VAR).unwrap_or_else(|_| "test".to_string());
    let env = DeployEnv::from_str(&name)?;
    Ok(env.base_url()?.to_string())
}
