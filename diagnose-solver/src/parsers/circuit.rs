//! This module provides a parser for the textual circuit format. A circuit file consists of four
//! sections, each closed by an `END` marker:
//!
//! ```text
//! COMPONENTS:
//! XORG(X1)
//! ANDG(A1)
//! ORG(O1)
//! ENDCOMPONENTS
//! BEHAVIOUR:
//! IN1(O1)=OUT(X1)
//! IN2(O1)=OUT(A1)
//! ENDBEHAVIOUR
//! OBSERVATIONS:
//! IN1(X1)=1
//! ENDOBSERVATIONS
//! OUTOBSERVATIONS:
//! OUT(O1)=0
//! ENDOUTOBSERVATIONS
//! ```
//!
//! Every component input is either wired to the output of another component (`=OUT(..)`) or
//! assigned a constant (`=0` or `=1`). A constant input becomes an observed circuit input named
//! after the port, e.g. `IN1(X1)`. Each component needs exactly one `IN1` and one `IN2` line, which
//! may appear in either the `BEHAVIOUR` or the `OBSERVATIONS` section.
use std::path::Path;

use diagnose_core::model::Component;
use diagnose_core::model::ConstraintModel;
use diagnose_core::model::GateKind;
use diagnose_core::model::Observation;
use diagnose_core::model::Signal;
use diagnose_core::ComponentId;
use log::debug;
use regex::Regex;
use thiserror::Error;

/// A parsed circuit: its structure and everything that was observed about it.
#[derive(Debug, Clone)]
pub struct Circuit {
    pub model: ConstraintModel,
    pub observations: Vec<Observation>,
}

#[derive(Debug, Error)]
pub enum CircuitParseError {
    #[error("failed to read circuit file")]
    Io(#[from] std::io::Error),

    #[error("missing {0} section")]
    MissingSection(&'static str),

    #[error("'{0}' is not a gate kind, expected ANDG, ORG or XORG")]
    UnknownGate(String),

    #[error("'{0}' is malformed")]
    MalformedLine(String),

    #[error("'{0}' is not a boolean value, expected 0 or 1")]
    InvalidValue(String),

    #[error("component {0} is declared more than once")]
    DuplicateComponent(String),

    #[error("'{line}' refers to unknown component {component}")]
    UnknownComponent { line: String, component: String },

    #[error("invalid component connections:\n{}", .0.join("\n"))]
    InvalidConnections(Vec<String>),

    #[error("failed to compile line pattern")]
    Pattern(#[from] regex::Error),
}

/// Reads and parses the circuit file at `path`.
pub fn read_circuit(path: impl AsRef<Path>) -> Result<Circuit, CircuitParseError> {
    let source = std::fs::read_to_string(path)?;
    parse_circuit(&source)
}

/// Parses a circuit from its textual description.
pub fn parse_circuit(source: &str) -> Result<Circuit, CircuitParseError> {
    let patterns = LinePatterns::new()?;

    let components_section = section(source, "COMPONENTS")?;
    let behaviour_section = section(source, "BEHAVIOUR")?;
    let observations_section = section(source, "OBSERVATIONS")?;
    let out_observations_section = section(source, "OUTOBSERVATIONS")?;

    let mut declared: Vec<Declaration> = Vec::new();
    for line in lines(components_section) {
        let captures = patterns
            .gate
            .captures(line)
            .ok_or_else(|| CircuitParseError::MalformedLine(line.to_owned()))?;

        let kind = match &captures[1] {
            "ANDG" => GateKind::And,
            "ORG" => GateKind::Or,
            "XORG" => GateKind::Xor,
            other => return Err(CircuitParseError::UnknownGate(other.to_owned())),
        };
        let id = ComponentId::new(&captures[2]);
        if declared.iter().any(|declaration| declaration.id == id) {
            return Err(CircuitParseError::DuplicateComponent(id.to_string()));
        }

        declared.push(Declaration {
            id,
            kind,
            ports: [Vec::new(), Vec::new()],
        });
    }

    let mut observations = Vec::new();

    for line in lines(behaviour_section).chain(lines(observations_section)) {
        let captures = patterns
            .input
            .captures(line)
            .ok_or_else(|| CircuitParseError::MalformedLine(line.to_owned()))?;
        let port = &captures[1];
        let component = &captures[2];
        let value = &captures[3];

        let signal = if let Some(source) = patterns.output.captures(value) {
            let source = ComponentId::new(&source[1]);
            if !declared.iter().any(|declaration| declaration.id == source) {
                return Err(CircuitParseError::UnknownComponent {
                    line: line.to_owned(),
                    component: source.to_string(),
                });
            }
            Signal::Output(source)
        } else {
            let signal = Signal::input(format!("IN{port}({component})"));
            observations.push(Observation::new(signal.clone(), parse_value(value)?));
            signal
        };

        let declaration = declared
            .iter_mut()
            .find(|declaration| declaration.id.as_str() == component)
            .ok_or_else(|| CircuitParseError::UnknownComponent {
                line: line.to_owned(),
                component: component.to_owned(),
            })?;
        let index = if port == "1" { 0 } else { 1 };
        declaration.ports[index].push(signal);
    }

    for line in lines(out_observations_section) {
        let captures = patterns
            .out_observation
            .captures(line)
            .ok_or_else(|| CircuitParseError::MalformedLine(line.to_owned()))?;
        let component = ComponentId::new(&captures[1]);
        if !declared.iter().any(|declaration| declaration.id == component) {
            return Err(CircuitParseError::UnknownComponent {
                line: line.to_owned(),
                component: component.to_string(),
            });
        }

        observations.push(Observation::new(
            Signal::Output(component),
            parse_value(&captures[2])?,
        ));
    }

    let mut components = Vec::with_capacity(declared.len());
    let mut connection_errors = Vec::new();
    for Declaration { id, kind, ports } in declared {
        let [first, second] = ports;
        match (first.as_slice(), second.as_slice()) {
            ([first], [second]) => {
                components.push(Component::new(id, kind, [first.clone(), second.clone()]))
            }
            _ => connection_errors.push(format!(
                "{id} has {} IN1 and {} IN2 connections, expected exactly one of each",
                first.len(),
                second.len()
            )),
        }
    }
    if !connection_errors.is_empty() {
        return Err(CircuitParseError::InvalidConnections(connection_errors));
    }

    debug!(
        "Parsed circuit with {} components and {} observations",
        components.len(),
        observations.len()
    );

    Ok(Circuit {
        model: ConstraintModel::new(components),
        observations,
    })
}

/// A component as declared in the `COMPONENTS` section, together with the signals connected to
/// its two input ports.
struct Declaration {
    id: ComponentId,
    kind: GateKind,
    ports: [Vec<Signal>; 2],
}

struct LinePatterns {
    /// `XORG(X1)`
    gate: Regex,
    /// `IN1(X2)=OUT(X1)` or `IN1(X1)=1`
    input: Regex,
    /// The `OUT(X1)` right-hand side of an input line.
    output: Regex,
    /// `OUT(X2)=1`
    out_observation: Regex,
}

impl LinePatterns {
    fn new() -> Result<Self, regex::Error> {
        Ok(LinePatterns {
            gate: Regex::new(r"^(\w+)\(([^()\s]+)\)$")?,
            input: Regex::new(r"^IN([12])\(([^()\s]+)\)\s*=\s*(\S+)$")?,
            output: Regex::new(r"^OUT\(([^()\s]+)\)$")?,
            out_observation: Regex::new(r"^OUT\(([^()\s]+)\)\s*=\s*(\S+)$")?,
        })
    }
}

/// Returns the body of the section called `name`.
fn section<'source>(
    source: &'source str,
    name: &'static str,
) -> Result<&'source str, CircuitParseError> {
    // The word boundaries keep `OBSERVATIONS` from matching inside `OUTOBSERVATIONS`.
    let pattern = Regex::new(&format!(r"(?s)\b{name}:(.*?)\bEND{name}\b"))?;

    pattern
        .captures(source)
        .and_then(|captures| captures.get(1))
        .map(|body| body.as_str())
        .ok_or(CircuitParseError::MissingSection(name))
}

fn lines(section: &str) -> impl Iterator<Item = &str> {
    section.lines().map(str::trim).filter(|line| !line.is_empty())
}

fn parse_value(value: &str) -> Result<bool, CircuitParseError> {
    match value {
        "0" => Ok(false),
        "1" => Ok(true),
        _ => Err(CircuitParseError::InvalidValue(value.to_owned())),
    }
}
