//! Parameter descriptors - named world-state variables.

use serde::{Deserialize, Serialize};

use crate::identity::{ContentItem, EntityId};

/// Whether a parameter holds a boolean flag or a numeric value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum ParameterType {
    Flag,
    #[default]
    Value,
}

/// A world-state variable cards and events can reference.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ParameterDescriptor {
    pub id: EntityId,
    pub name: String,
    #[serde(rename = "type")]
    pub parameter_type: ParameterType,
    /// System parameters are seeded by the editor and must not be deleted
    /// through the editing surface.
    #[serde(default)]
    pub system_parameter: bool,
}

impl ParameterDescriptor {
    /// Create a numeric parameter with a slug id derived from its name.
    pub fn value(name: impl Into<String>) -> Self {
        let name = name.into();
        Self {
            id: EntityId::slug(&name),
            name,
            parameter_type: ParameterType::Value,
            system_parameter: false,
        }
    }

    /// Create a boolean parameter with a slug id derived from its name.
    pub fn flag(name: impl Into<String>) -> Self {
        let name = name.into();
        Self {
            id: EntityId::slug(&name),
            name,
            parameter_type: ParameterType::Flag,
            system_parameter: false,
        }
    }

    /// Mark this parameter as editor-managed.
    pub fn system(mut self) -> Self {
        self.system_parameter = true;
        self
    }
}

/// A parameter record minus its id.
#[derive(Debug, Clone, Default)]
pub struct ParameterDraft {
    pub name: String,
    pub parameter_type: ParameterType,
    pub system_parameter: bool,
}

impl ParameterDraft {
    pub fn new(name: impl Into<String>, parameter_type: ParameterType) -> Self {
        Self {
            name: name.into(),
            parameter_type,
            system_parameter: false,
        }
    }
}

/// Partial parameter record for shallow-merge updates.
#[derive(Debug, Clone, Default)]
pub struct ParameterPatch {
    pub name: Option<String>,
    pub parameter_type: Option<ParameterType>,
    pub system_parameter: Option<bool>,
}

impl ContentItem for ParameterDescriptor {
    const ID_PREFIX: &'static str = "parameter";
    const STORAGE_KEY: &'static str = "parameters";

    type Draft = ParameterDraft;
    type Patch = ParameterPatch;

    fn id(&self) -> &EntityId {
        &self.id
    }

    fn from_draft(id: EntityId, draft: ParameterDraft) -> Self {
        Self {
            id,
            name: draft.name,
            parameter_type: draft.parameter_type,
            system_parameter: draft.system_parameter,
        }
    }

    fn merge(&mut self, patch: ParameterPatch) {
        if let Some(name) = patch.name {
            self.name = name;
        }
        if let Some(parameter_type) = patch.parameter_type {
            self.parameter_type = parameter_type;
        }
        if let Some(system_parameter) = patch.system_parameter {
            self.system_parameter = system_parameter;
        }
    }
}
