use std::collections::BTreeMap;

use crate::basic_types::ComponentId;
use crate::basic_types::ComponentSet;
use crate::model::ConstraintModel;

/// A (partial) assignment to the fault flags of the components of a circuit.
///
/// `true` means the component is assumed faulty, `false` that it is assumed healthy.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FaultAssignment {
    flags: BTreeMap<ComponentId, bool>,
}

impl FaultAssignment {
    /// Assumes exactly the components of `healthy` to be healthy; every other component of the
    /// model is forced to be faulty.
    pub fn healthy_subset(model: &ConstraintModel, healthy: &ComponentSet) -> Self {
        FaultAssignment {
            flags: model
                .component_ids()
                .map(|id| (id.clone(), !healthy.contains(id)))
                .collect(),
        }
    }

    pub fn set_healthy(&mut self, component: ComponentId) {
        let _ = self.flags.insert(component, false);
    }

    pub fn set_faulty(&mut self, component: ComponentId) {
        let _ = self.flags.insert(component, true);
    }

    /// Returns `Some(true)` if the component is assumed faulty, `Some(false)` if it is assumed
    /// healthy and `None` if its fault flag is unconstrained.
    pub fn is_faulty(&self, component: &ComponentId) -> Option<bool> {
        self.flags.get(component).copied()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&ComponentId, bool)> + '_ {
        self.flags.iter().map(|(component, &faulty)| (component, faulty))
    }

    pub fn is_empty(&self) -> bool {
        self.flags.is_empty()
    }
}
