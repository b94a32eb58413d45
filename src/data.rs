use serde::{Deserialize, Serialize};

use crate::error::{Result, ScaffoldError};

const SEVEN_ONE: &str = include_str!("../templates/seven_one.json");

/// Name of the aggregator written at the destination root.
pub const MAIN_FILE: &str = "main.scss";

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct Folder {
    pub name: String,
    pub files: Vec<String>,
}

/// The full 7/1 layout. Loaded once at startup and only read afterwards.
#[derive(Serialize, Deserialize, Debug)]
pub struct Template {
    pub folders: Vec<Folder>,
}

/// Template restricted to the chosen folders, in selection order.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct Structure {
    pub folders: Vec<Folder>,
}

impl Template {
    pub fn load() -> Result<Template> {
        let template: Template = serde_json::from_str(SEVEN_ONE)?;
        Ok(template)
    }

    pub fn names(&self) -> Vec<String> {
        self.folders.iter().map(|folder| folder.name.clone()).collect()
    }

    pub fn get(&self, name: &str) -> Option<&Folder> {
        self.folders.iter().find(|folder| folder.name == name)
    }

    pub fn select(&self, names: &[String]) -> Result<Structure> {
        let mut structure = Structure::default();

        for name in names {
            let folder = self
                .get(name)
                .ok_or_else(|| ScaffoldError::UnknownFolder(name.clone()))?;
            if structure.folders.iter().all(|f| f.name != folder.name) {
                structure.folders.push(folder.clone());
            }
        }

        Ok(structure)
    }
}

impl Structure {
    /// One `@import` per folder, newline separated, no trailing newline.
    pub fn imports(&self) -> String {
        self.folders
            .iter()
            .map(|folder| format!("@import '{}/*';", folder.name))
            .collect::<Vec<_>>()
            .join("\n")
    }
}
