use super::{CliError, Result};
use adventure_core::Catalog;
use std::path::{Path, PathBuf};

/// Where the CLI takes its catalog from
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CatalogSource {
    Builtin,
    File(PathBuf),
}

impl CatalogSource {
    pub fn from_option(path: Option<PathBuf>) -> Self {
        path.map_or(CatalogSource::Builtin, CatalogSource::File)
    }

    pub fn load(&self) -> Result<Catalog> {
        match self {
            CatalogSource::Builtin => Ok(Catalog::builtin().clone()),
            CatalogSource::File(path) => load_file(path),
        }
    }
}

fn load_file(path: &Path) -> Result<Catalog> {
    if !path.exists() {
        return Err(CliError::catalog_not_found(path.to_path_buf()));
    }

    let json = std::fs::read_to_string(path).map_err(|source| CliError::CatalogRead {
        path: path.to_path_buf(),
        source,
    })?;

    let catalog = Catalog::from_json(&json)?;
    tracing::info!(
        "Loaded catalog from {} ({} categories, {} activities)",
        path.display(),
        catalog.category_count(),
        catalog.template_count()
    );
    Ok(catalog)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn temp_file(name: &str, contents: &str) -> PathBuf {
        let path = std::env::temp_dir().join(format!(
            "adventure-cli-{}-{}.json",
            std::process::id(),
            name
        ));
        std::fs::write(&path, contents).unwrap();
        path
    }

    #[test]
    fn test_builtin_source() {
        let catalog = CatalogSource::from_option(None).load().unwrap();
        assert_eq!(&catalog, Catalog::builtin());
    }

    #[test]
    fn test_missing_file() {
        let source = CatalogSource::File(PathBuf::from("/definitely/not/here.json"));
        assert!(matches!(
            source.load(),
            Err(CliError::CatalogFileNotFound { .. })
        ));
    }

    #[test]
    fn test_load_file() {
        let path = temp_file(
            "valid",
            r#"{"Active": [{"name": "Climbing Gym", "description": "Climb.", "address_template": "Boulder Hall, {location}"}]}"#,
        );

        let catalog = CatalogSource::File(path.clone()).load().unwrap();
        std::fs::remove_file(path).ok();

        assert_eq!(catalog.template_count(), 1);
    }

    #[test]
    fn test_invalid_file() {
        let path = temp_file("empty", "{}");

        let result = CatalogSource::File(path.clone()).load();
        std::fs::remove_file(path).ok();

        assert!(matches!(result, Err(CliError::Catalog(_))));
    }
}
