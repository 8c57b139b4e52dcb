use std::{fs, time::Duration};

use ureq::Agent;

use crate::{prelude::*, sources::LoadError};

/// Read the source into a string, be it an `http(s)` URL or a file path.
#[instrument(skip_all, fields(location = location))]
pub fn fetch(location: &str) -> Result<String, LoadError> {
    let unavailable = |reason: String| LoadError::Unavailable {
        location: location.to_string(),
        reason,
    };
    if location.starts_with("http://") || location.starts_with("https://") {
        let agent: Agent = Agent::config_builder()
            .timeout_global(Some(Duration::from_secs(10)))
            .build()
            .into();
        let mut response = agent
            .get(location)
            .call()
            .map_err(|error| unavailable(error.to_string()))?;
        response
            .body_mut()
            .read_to_string()
            .map_err(|error| unavailable(error.to_string()))
    } else {
        fs::read_to_string(location).map_err(|error| unavailable(error.to_string()))
    }
}
