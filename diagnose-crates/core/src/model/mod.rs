//! The structural description of a combinational circuit together with its observations.
//!
//! A [`ConstraintModel`] is an ordered collection of [`Component`]s. Every component is a
//! two-input gate whose inputs are [`Signal`]s: either a circuit input or the output of another
//! component. Observations assign boolean values to signals. The model is created once (usually
//! by the circuit loader) and is only read afterwards.
mod gate;

use std::fmt::Display;
use std::fmt::Formatter;

use fnv::FnvHashMap;
pub use gate::GateKind;
use log::warn;

use crate::basic_types::ComponentId;
use crate::basic_types::ComponentSet;

/// A wire of the circuit.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Signal {
    /// A primary input of the circuit, identified by its name (e.g. `IN1(X1)`).
    Input(String),
    /// The output of the given component.
    Output(ComponentId),
}

impl Signal {
    pub fn input(name: impl Into<String>) -> Self {
        Signal::Input(name.into())
    }

    pub fn output(component: impl Into<ComponentId>) -> Self {
        Signal::Output(component.into())
    }
}

impl Display for Signal {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Signal::Input(name) => write!(f, "{name}"),
            Signal::Output(component) => write!(f, "OUT({component})"),
        }
    }
}

/// A gate of the circuit.
///
/// Besides its inputs, every component implicitly owns two boolean variables: its output
/// ([`Component::output`]) and its fault flag. When the fault flag is true, the output is not
/// constrained by the gate's behaviour.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Component {
    id: ComponentId,
    kind: GateKind,
    inputs: [Signal; 2],
}

impl Component {
    pub fn new(id: impl Into<ComponentId>, kind: GateKind, inputs: [Signal; 2]) -> Self {
        Component {
            id: id.into(),
            kind,
            inputs,
        }
    }

    pub fn id(&self) -> &ComponentId {
        &self.id
    }

    pub fn kind(&self) -> GateKind {
        self.kind
    }

    pub fn inputs(&self) -> &[Signal; 2] {
        &self.inputs
    }

    pub fn output(&self) -> Signal {
        Signal::Output(self.id.clone())
    }
}

/// An observed value of a signal.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Observation {
    pub signal: Signal,
    pub value: bool,
}

impl Observation {
    pub fn new(signal: Signal, value: bool) -> Self {
        Observation { signal, value }
    }
}

/// The fault-aware behavioural theory of a circuit: for every component, either its fault flag
/// holds or its output equals its gate function applied to its inputs.
#[derive(Debug, Clone, Default)]
pub struct ConstraintModel {
    components: Vec<Component>,
    positions: FnvHashMap<ComponentId, usize>,
}

impl ConstraintModel {
    /// Creates a model from components in circuit order.
    ///
    /// The model is assumed to be structurally valid; if an identifier occurs twice, the first
    /// occurrence is kept.
    pub fn new(components: impl IntoIterator<Item = Component>) -> Self {
        let mut model = ConstraintModel::default();

        for component in components {
            if model.positions.contains_key(component.id()) {
                warn!("Ignoring duplicate component {}", component.id());
                continue;
            }
            let _ = model
                .positions
                .insert(component.id().clone(), model.components.len());
            model.components.push(component);
        }

        model
    }

    pub fn components(&self) -> &[Component] {
        &self.components
    }

    pub fn component(&self, id: &ComponentId) -> Option<&Component> {
        self.positions.get(id).map(|&index| &self.components[index])
    }

    pub fn contains(&self, id: &ComponentId) -> bool {
        self.positions.contains_key(id)
    }

    /// The identifiers of all components, in circuit order.
    pub fn component_ids(&self) -> impl Iterator<Item = &ComponentId> + '_ {
        self.components.iter().map(Component::id)
    }

    pub fn all_components(&self) -> ComponentSet {
        self.component_ids().cloned().collect()
    }

    pub fn len(&self) -> usize {
        self.components.len()
    }

    pub fn is_empty(&self) -> bool {
        self.components.is_empty()
    }
}
