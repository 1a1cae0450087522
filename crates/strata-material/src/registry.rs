//! Name-to-plugin registry for material models.
//!
//! The host populates a [`ModelRegistry`] explicitly at startup, declares
//! every registered model's parameters, reads its parameter file, and
//! then builds the model selected by `Material model/Model name`.
//!
//! ```
//! use strata_material::ModelRegistry;
//! use strata_params::ParameterHandler;
//!
//! let registry = ModelRegistry::new();
//! let mut prm = ParameterHandler::new();
//! registry.declare_parameters(&mut prm).unwrap();
//! assert!(registry.create_selected(&mut prm).is_err());
//! ```

use std::fmt;

use indexmap::IndexMap;
use strata_core::{ConfigError, ParameterError, RegistryError};
use strata_params::{ParameterHandler, Pattern};

use crate::model::{MaterialModel, MaterialModelPlugin};

/// Section holding the model selector and every model's subsection.
pub const MATERIAL_MODEL_SECTION: &str = "Material model";

/// Entry in [`MATERIAL_MODEL_SECTION`] naming the model to build.
pub const MODEL_NAME_ENTRY: &str = "Model name";

const UNSPECIFIED: &str = "unspecified";

type DeclareFn = fn(&mut ParameterHandler) -> Result<(), ParameterError>;
type CreateFn = fn(&mut ParameterHandler) -> Result<Box<dyn MaterialModel>, ConfigError>;

/// Factory access to one registered model.
#[derive(Clone, Copy)]
pub struct ModelEntry {
    name: &'static str,
    description: &'static str,
    declare: DeclareFn,
    create: CreateFn,
}

impl ModelEntry {
    /// The entry for plugin type `M`.
    pub fn of<M: MaterialModelPlugin>() -> Self {
        Self {
            name: M::NAME,
            description: M::DESCRIPTION,
            declare: M::declare_parameters,
            create: create_boxed::<M>,
        }
    }

    /// Registry identifier.
    pub fn name(&self) -> &'static str {
        self.name
    }

    /// Human-readable description.
    pub fn description(&self) -> &'static str {
        self.description
    }

    /// Declare the model's parameter entries.
    pub fn declare_parameters(&self, prm: &mut ParameterHandler) -> Result<(), ParameterError> {
        (self.declare)(prm)
    }

    /// Configure a new model from parsed parameters.
    pub fn create(&self, prm: &mut ParameterHandler) -> Result<Box<dyn MaterialModel>, ConfigError> {
        (self.create)(prm)
    }
}

impl fmt::Debug for ModelEntry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ModelEntry")
            .field("name", &self.name)
            .field("description", &self.description)
            .finish_non_exhaustive()
    }
}

fn create_boxed<M: MaterialModelPlugin>(
    prm: &mut ParameterHandler,
) -> Result<Box<dyn MaterialModel>, ConfigError> {
    Ok(Box::new(M::parse_parameters(prm)?))
}

/// Insertion-ordered map from model names to [`ModelEntry`]s.
#[derive(Debug, Default)]
pub struct ModelRegistry {
    entries: IndexMap<&'static str, ModelEntry>,
}

impl ModelRegistry {
    /// An empty registry.
    pub fn new() -> Self {
        Self::default()
    }

    /// Register plugin type `M` under [`MaterialModelPlugin::NAME`].
    ///
    /// # Errors
    ///
    /// See [`register_entry`](Self::register_entry).
    pub fn register<M: MaterialModelPlugin>(&mut self) -> Result<(), RegistryError> {
        self.register_entry(ModelEntry::of::<M>())
    }

    /// Register a prebuilt entry.
    ///
    /// # Errors
    ///
    /// - [`RegistryError::ReservedName`] if the name is the selector's
    ///   default, `"unspecified"`.
    /// - [`RegistryError::DuplicateModel`] if the name is taken.
    pub fn register_entry(&mut self, entry: ModelEntry) -> Result<(), RegistryError> {
        if entry.name == UNSPECIFIED {
            return Err(RegistryError::ReservedName {
                name: entry.name.to_string(),
            });
        }
        if self.entries.contains_key(entry.name) {
            return Err(RegistryError::DuplicateModel {
                name: entry.name.to_string(),
            });
        }
        log::debug!("strata-material: registered material model '{}'", entry.name);
        self.entries.insert(entry.name, entry);
        Ok(())
    }

    /// Look up an entry by name.
    pub fn get(&self, name: &str) -> Option<&ModelEntry> {
        self.entries.get(name)
    }

    /// Whether a model is registered under `name`.
    pub fn contains(&self, name: &str) -> bool {
        self.entries.contains_key(name)
    }

    /// Registered names in registration order.
    pub fn names(&self) -> impl Iterator<Item = &'static str> + '_ {
        self.entries.keys().copied()
    }

    /// Number of registered models.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether no model is registered.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Declare the `Model name` selector and every registered model's
    /// parameters. Call with the cursor at the root.
    ///
    /// # Errors
    ///
    /// [`RegistryError::Parameter`] if any declaration fails (for example
    /// because the registry's parameters were already declared).
    pub fn declare_parameters(&self, prm: &mut ParameterHandler) -> Result<(), RegistryError> {
        let options = std::iter::once(UNSPECIFIED).chain(self.names());
        let documentation = self
            .entries
            .values()
            .map(|e| format!("`{}': {}", e.name, e.description))
            .collect::<Vec<_>>()
            .join("\n\n");

        prm.enter_subsection(MATERIAL_MODEL_SECTION);
        let declared = prm.declare_entry(
            MODEL_NAME_ENTRY,
            UNSPECIFIED,
            Pattern::selection(options),
            &format!("The material model to use. Available models:\n\n{documentation}"),
        );
        prm.leave_subsection()?;
        declared?;

        for entry in self.entries.values() {
            entry.declare_parameters(prm)?;
        }
        Ok(())
    }

    /// Configure the model registered under `name`.
    ///
    /// # Errors
    ///
    /// - [`RegistryError::UnknownModel`] if nothing is registered as `name`.
    /// - [`RegistryError::Config`] if the model rejects its parameters.
    pub fn create(
        &self,
        name: &str,
        prm: &mut ParameterHandler,
    ) -> Result<Box<dyn MaterialModel>, RegistryError> {
        let entry = self.get(name).ok_or_else(|| RegistryError::UnknownModel {
            name: name.to_string(),
        })?;
        entry.create(prm).map_err(|reason| RegistryError::Config {
            model: name.to_string(),
            reason,
        })
    }

    /// Configure the model named by `Material model/Model name`.
    ///
    /// # Errors
    ///
    /// - [`RegistryError::Parameter`] if the selector was never declared.
    /// - [`RegistryError::UnknownModel`] if no model was selected.
    /// - [`RegistryError::Config`] if the model rejects its parameters.
    pub fn create_selected(
        &self,
        prm: &mut ParameterHandler,
    ) -> Result<Box<dyn MaterialModel>, RegistryError> {
        prm.enter_subsection(MATERIAL_MODEL_SECTION);
        let selected = prm.get(MODEL_NAME_ENTRY).map(str::to_string);
        prm.leave_subsection()?;
        let name = selected?;
        self.create(&name, prm)
    }
}
