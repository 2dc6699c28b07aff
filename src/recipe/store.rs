//! Recipe store
//!
//! A read-only keyed table mapping process-type identifiers to recipes.
//! Built once per invocation, either from the embedded table or from a
//! caller-supplied JSON file, then only ever queried.

use std::collections::HashMap;
use std::fs;
use std::path::Path;

use log::debug;

use super::model::Recipe;
use crate::error::{FabError, Result};

/// Recipe table shipped with the binary.
const BUILTIN_RECIPES: &str = include_str!("recipes.json");

/// Read-only mapping from process-type identifier to recipe.
#[derive(Debug)]
pub struct RecipeStore {
    recipes: HashMap<String, Recipe>,
}

impl RecipeStore {
    /// Load the embedded recipe table.
    pub fn builtin() -> Result<Self> {
        Self::from_json_str(BUILTIN_RECIPES)
    }

    /// Load a recipe table from a JSON file.
    ///
    /// The only check performed on the file itself is that it exists;
    /// anything unparseable surfaces as a serialization error.
    ///
    /// # Errors
    /// * `FileNotFound` - If the path does not exist
    /// * `Serialization` - If the contents are not a valid recipe table
    pub fn from_path(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Err(FabError::FileNotFound {
                path: path.display().to_string(),
                source: None,
            });
        }

        let contents = fs::read_to_string(path)?;
        debug!("Loaded recipe table from {}", path.display());
        Self::from_json_str(&contents)
    }

    /// Parse a recipe table from a JSON string.
    pub fn from_json_str(json: &str) -> Result<Self> {
        let recipes: HashMap<String, Recipe> = serde_json::from_str(json)?;
        Ok(Self { recipes })
    }

    /// Look up the recipe for a process type.
    ///
    /// # Errors
    /// * `UnknownProcessType` - If the identifier is not a key in the table
    pub fn lookup(&self, process_type: &str) -> Result<&Recipe> {
        self.recipes
            .get(process_type)
            .ok_or_else(|| FabError::UnknownProcessType {
                process_type: process_type.to_string(),
            })
    }

    /// Check if a process type is in the table.
    pub fn contains(&self, process_type: &str) -> bool {
        self.recipes.contains_key(process_type)
    }

    /// List all process-type identifiers, sorted.
    pub fn process_types(&self) -> Vec<&str> {
        let mut types: Vec<&str> = self.recipes.keys().map(|s| s.as_str()).collect();
        types.sort_unstable();
        types
    }

    /// Number of recipes in the table.
    pub fn len(&self) -> usize {
        self.recipes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.recipes.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[test]
    fn test_builtin_table() {
        let store = RecipeStore::builtin().unwrap();

        assert!(store.contains("cmos_standard"));
        assert!(store.contains("mems_cantilever"));
        assert!(store.contains("mems_pressure_sensor"));
        assert!(store.contains("photonics_waveguide"));
        assert_eq!(store.len(), 4);
    }

    #[test]
    fn test_lookup_known_type() {
        let store = RecipeStore::builtin().unwrap();
        let recipe = store.lookup("cmos_standard").unwrap();

        assert_eq!(recipe.name, "Standard CMOS Process");
        assert_eq!(recipe.technology_node.as_deref(), Some("180nm"));
        assert_eq!(recipe.steps.len(), 18);
        // Step order is table order
        assert_eq!(recipe.steps[0].step, 1);
        assert_eq!(recipe.steps[0].operation, "thermal_oxidation");
        assert_eq!(recipe.steps[17].operation, "strip");
    }

    #[test]
    fn test_lookup_unknown_type_fails() {
        let store = RecipeStore::builtin().unwrap();
        let err = store.lookup("nonexistent_type").unwrap_err();

        assert_eq!(err.error_code(), "UNKNOWN_PROCESS_TYPE");
        assert!(err.to_string().contains("nonexistent_type"));
    }

    #[test]
    fn test_process_types_sorted() {
        let store = RecipeStore::builtin().unwrap();
        let types = store.process_types();

        assert_eq!(
            types,
            vec![
                "cmos_standard",
                "mems_cantilever",
                "mems_pressure_sensor",
                "photonics_waveguide"
            ]
        );
    }

    #[test]
    fn test_from_path_missing_file() {
        let err = RecipeStore::from_path(Path::new("/nonexistent/recipes.json")).unwrap_err();
        assert_eq!(err.error_code(), "FILE_NOT_FOUND");
    }

    #[test]
    fn test_from_path_custom_table() {
        let mut file = NamedTempFile::new().unwrap();
        write!(
            file,
            r#"{{"tiny": {{"name": "Tiny Process", "steps": [
                {{"step": 1, "operation": "etch", "description": "Etch something"}}
            ]}}}}"#
        )
        .unwrap();

        let store = RecipeStore::from_path(file.path()).unwrap();
        assert_eq!(store.len(), 1);
        let recipe = store.lookup("tiny").unwrap();
        assert_eq!(recipe.name, "Tiny Process");
        assert_eq!(recipe.technology_node, None);
    }

    #[test]
    fn test_from_path_invalid_json() {
        let mut file = NamedTempFile::new().unwrap();
        write!(file, "not json at all").unwrap();

        let err = RecipeStore::from_path(file.path()).unwrap_err();
        assert_eq!(err.error_code(), "SERIALIZATION_ERROR");
    }
}
