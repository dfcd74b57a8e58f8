//! Stock variable table for a headless frontend `.env` file.

use std::rc::Rc;

use indexmap::IndexMap;
use serde_json::Value;

use crate::profile::BackendProfile;
use crate::registry::source::Setting;
use crate::registry::spec::{OutputMode, VariableSpec};
use crate::registry::VariableRegistry;

/// Hidden while the variable sits on its default, visible once overridden.
fn hide_if_default(name: &'static str) -> Setting<OutputMode> {
    Setting::computed(move |registry: &VariableRegistry| {
        Ok(if registry.is_using_default_value(name) {
            OutputMode::Hidden
        } else {
            OutputMode::Visible
        })
    })
}

/// Required exactly when the variable no longer sits on its default.
fn require_if_not_default(name: &'static str) -> Setting<bool> {
    Setting::computed(move |registry: &VariableRegistry| {
        Ok(!registry.is_using_default_value(name))
    })
}

/// The stock variable set, resolved against `profile`.
///
/// Attributes that depend on other variables are computed lazily through
/// the registry, so registration order does not constrain the dependency
/// structure.
pub fn default_variables(profile: Rc<dyn BackendProfile>) -> IndexMap<String, VariableSpec> {
    let mut specs = IndexMap::new();

    specs.insert(
        "NODE_TLS_REJECT_UNAUTHORIZED".to_string(),
        VariableSpec::builder("Enable TLS certificate checks when the frontend is served over https")
            .default_value("0")
            .required(true)
            .output_mode(OutputMode::Visible)
            .value_fn(|registry| {
                let frontend_url = registry.get_value("NEXT_PUBLIC_FRONTEND_URL");
                let flag = if frontend_url.starts_with("https://") {
                    "1"
                } else {
                    "0"
                };
                Ok(Some(Value::from(flag)))
            })
            .build(),
    );

    specs.insert(
        "NEXT_PUBLIC_FRONTEND_URL".to_string(),
        VariableSpec::builder("The URL of the headless frontend")
            .default_value("http://localhost:3000")
            .required(true)
            .output_mode(OutputMode::Visible)
            .build(),
    );

    let home_profile = Rc::clone(&profile);
    specs.insert(
        "NEXT_PUBLIC_WP_HOME_URL".to_string(),
        VariableSpec::builder("The public URL of the backend site")
            .required(true)
            .output_mode(OutputMode::Visible)
            .value_fn(move |_| Ok(home_profile.home_url().map(Value::from)))
            .build(),
    );

    let site_profile = Rc::clone(&profile);
    specs.insert(
        "WP_SITE_URL".to_string(),
        VariableSpec::builder("The backend address, when it differs from the home URL")
            .required_fn(|registry| {
                Ok(registry.get_value("WP_SITE_URL")
                    != registry.get_value("NEXT_PUBLIC_WP_HOME_URL"))
            })
            .output_mode_fn(|registry| {
                Ok(
                    if registry.get_value("WP_SITE_URL")
                        == registry.get_value("NEXT_PUBLIC_WP_HOME_URL")
                    {
                        OutputMode::Hidden
                    } else {
                        OutputMode::Visible
                    },
                )
            })
            .value_fn(move |_| Ok(site_profile.site_url().map(Value::from)))
            .build(),
    );

    let graphql_profile = Rc::clone(&profile);
    specs.insert(
        "GRAPHQL_ENDPOINT".to_string(),
        VariableSpec::builder("Relative path of the GraphQL endpoint")
            .default_value("index.php?graphql")
            .required(true)
            .output_mode(OutputMode::Visible)
            .value_fn(move |_| {
                graphql_profile
                    .graphql_endpoint()
                    .map(|endpoint| Some(Value::from(endpoint)))
            })
            .build(),
    );

    let rest_profile = Rc::clone(&profile);
    specs.insert(
        "REST_URL_PREFIX".to_string(),
        VariableSpec::builder("Prefix of the backend REST API")
            .default_value("/wp-json")
            .required_setting(require_if_not_default("REST_URL_PREFIX"))
            .output_mode_setting(hide_if_default("REST_URL_PREFIX"))
            .value_fn(move |_| Ok(rest_profile.rest_url_prefix().map(Value::from)))
            .build(),
    );

    let uploads_profile = Rc::clone(&profile);
    specs.insert(
        "WP_UPLOADS_DIRECTORY".to_string(),
        VariableSpec::builder("Relative path of the uploads directory")
            .default_value("/wp-content/uploads")
            .required_setting(require_if_not_default("WP_UPLOADS_DIRECTORY"))
            .output_mode_setting(hide_if_default("WP_UPLOADS_DIRECTORY"))
            .value_fn(move |_| Ok(uploads_profile.uploads_directory().map(Value::from)))
            .build(),
    );

    specs.insert(
        "CORS_PROXY_PREFIX".to_string(),
        VariableSpec::builder("Uncomment to route media requests through the frontend proxy")
            .default_value("/proxy")
            .required(false)
            .output_mode(OutputMode::Commented)
            // Disabled by default: no live value, the default shows as the
            // commented suggestion.
            .value("")
            .build(),
    );

    specs.insert(
        "INTROSPECTION_TOKEN".to_string(),
        VariableSpec::builder("Token used for authenticating GraphQL introspection queries")
            .required(true)
            .output_mode(OutputMode::Visible)
            .value_fn(move |_| {
                profile
                    .introspection_token()
                    .map(|token| Some(Value::from(token)))
            })
            .build(),
    );

    specs
}
