use std::fs;
use std::path::Path;
use std::rc::Rc;

use anyhow::{bail, Context, Result};
use tracing::debug;

use envlink_core::{EnvGenerator, RegistryBuilder, StaticProfile, VariableOverrides, VariableRegistry};

pub fn generate_command(
    profile_path: &Path,
    overrides_path: Option<&Path>,
    output: Option<&Path>,
    force: bool,
) -> Result<()> {
    let registry = build_registry(profile_path, overrides_path)?;
    let generator = EnvGenerator::new(registry);
    let contents = generator
        .generate()?
        .context("no variables registered, nothing to generate")?;

    match output {
        Some(path) => {
            if path.exists() && !force {
                bail!(
                    "{} already exists, pass --force to overwrite",
                    path.display()
                );
            }
            fs::write(path, format!("{contents}\n"))
                .with_context(|| format!("Failed to write {}", path.display()))?;
            println!("Wrote {}", path.display());
        }
        None => println!("{contents}"),
    }
    Ok(())
}

pub(crate) fn build_registry(
    profile_path: &Path,
    overrides_path: Option<&Path>,
) -> Result<VariableRegistry> {
    debug!("Loading profile: {:?}", profile_path);
    let profile = StaticProfile::load_from_file(profile_path)
        .with_context(|| format!("Failed to load profile {}", profile_path.display()))?;

    let mut builder = RegistryBuilder::with_defaults(Rc::new(profile));
    if let Some(path) = overrides_path {
        debug!("Loading overrides: {:?}", path);
        let overrides = VariableOverrides::load_from_file(path)
            .with_context(|| format!("Failed to load overrides {}", path.display()))?;
        builder = builder.merge(&overrides);
    }
    Ok(builder.build())
}
