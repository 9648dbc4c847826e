use std::fmt::{Display, Formatter};

use serde_derive::{Deserialize, Serialize};

/// Machine size offered by a provider, as listed by the instance catalog.
#[derive(Serialize, Deserialize, Clone, Debug, Default, PartialEq)]
pub struct InstanceSpec {
    /// identifier to use as master or worker size
    pub size: String,
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub cpu: Option<u32>,
    /// in GiB
    #[serde(default)]
    pub memory: Option<f64>,
    #[serde(default)]
    pub storage: Option<String>,
}

impl Display for InstanceSpec {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.size)?;
        if !self.name.is_empty() && self.name != self.size {
            write!(f, " - {}", self.name)?;
        }

        let mut attributes = Vec::with_capacity(3);
        if let Some(cpu) = self.cpu {
            attributes.push(format!("{} vCPU", cpu));
        }
        if let Some(memory) = self.memory {
            attributes.push(format!("{} GiB", memory));
        }
        if let Some(storage) = &self.storage {
            attributes.push(storage.to_string());
        }

        match attributes.is_empty() {
            true => Ok(()),
            false => write!(f, " ({})", attributes.join(", ")),
        }
    }
}
