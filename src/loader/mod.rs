//! Loading automata from JSON model descriptions.
//!
//! A model document looks like:
//!
//! ```json
//! {
//!   "name": "parity",
//!   "description": "even number of 1s",
//!   "alphabet": "01",
//!   "states": [
//!     { "name": "S0", "initial": true, "final": true,
//!       "recognitionMessage": "even number of 1s",
//!       "transitions": [ { "symbol": "1", "destination": "S1" } ] },
//!     { "name": "S1", "initial": false, "final": false,
//!       "recognitionMessage": "",
//!       "transitions": [ { "symbol": "1", "destination": "S0" } ] }
//!   ]
//! }
//! ```
//!
//! Loading is all-or-nothing. States are registered first, then a second
//! pass attaches transitions, resolving each destination by state name.
//! The first defect found aborts the load and nothing of the partial
//! automaton survives.

pub mod error;

pub use error::{LoadError, ModelDefect};

use crate::automaton::Automaton;
use crate::core::{State, StateId, Target};
use serde_json::{Map, Value};
use std::fs::File;
use std::io::Read;
use std::path::Path;
use std::str::FromStr;
use tracing::{info, warn};

type Object = Map<String, Value>;

/// Load an automaton from a JSON document.
///
/// # Example
///
/// ```rust
/// use dfakit::loader;
///
/// let dfa = loader::parse(r#"{
///     "name": "ones", "description": "", "alphabet": "1",
///     "states": [{ "name": "S0", "initial": true, "final": true,
///                  "recognitionMessage": "", "transitions": [] }]
/// }"#).unwrap();
///
/// assert_eq!(dfa.state_count(), 1);
/// ```
pub fn parse(document: &str) -> Result<Automaton, LoadError> {
    let value: Value = serde_json::from_str(document)?;
    match build(&value) {
        Ok(automaton) => {
            info!(
                automaton = %automaton.name(),
                states = automaton.state_count(),
                "loaded automaton model"
            );
            Ok(automaton)
        }
        Err(defect) => {
            warn!(diagnostic = %defect, "rejected automaton model");
            Err(defect.into())
        }
    }
}

/// Load an automaton from any reader yielding a JSON document.
pub fn from_reader<R: Read>(mut reader: R) -> Result<Automaton, LoadError> {
    let mut document = String::new();
    reader.read_to_string(&mut document)?;
    parse(&document)
}

/// Load an automaton from a JSON file.
pub fn from_path(path: impl AsRef<Path>) -> Result<Automaton, LoadError> {
    from_reader(File::open(path)?)
}

impl FromStr for Automaton {
    type Err = LoadError;

    fn from_str(document: &str) -> Result<Self, Self::Err> {
        parse(document)
    }
}

impl Automaton {
    pub fn from_json_str(document: &str) -> Result<Self, LoadError> {
        parse(document)
    }
}

fn build(document: &Value) -> Result<Automaton, ModelDefect> {
    let root = document.as_object().ok_or(ModelDefect::NotAnObject)?;
    let mut automaton = header(root)?;

    let entries = root
        .get("states")
        .ok_or(ModelDefect::MissingStates)?
        .as_array()
        .ok_or(ModelDefect::WrongStatesType)?;

    let mut registered: Vec<(StateId, &Object)> = Vec::with_capacity(entries.len());
    for entry in entries {
        let fields = entry.as_object().ok_or(ModelDefect::WrongStateType)?;
        let id = automaton.add_state(declared_state(fields)?);
        registered.push((id, fields));
    }

    for (id, fields) in registered {
        let transitions = fields
            .get("transitions")
            .ok_or(ModelDefect::MissingTransitions)?
            .as_array()
            .ok_or(ModelDefect::WrongTransitionsType)?;
        for entry in transitions {
            let (symbol, destination) = declared_transition(entry)?;
            let target = automaton.find_state(destination).ok_or_else(|| {
                ModelDefect::UnknownDestination {
                    destination: destination.to_string(),
                }
            })?;
            if let Some(state) = automaton.state_mut(id) {
                state.add_transition(symbol, Target::State(target));
            }
        }
    }

    Ok(automaton)
}

fn header(root: &Object) -> Result<Automaton, ModelDefect> {
    let (Some(name), Some(description), Some(alphabet)) = (
        root.get("name"),
        root.get("description"),
        root.get("alphabet"),
    ) else {
        return Err(ModelDefect::MissingHeaderKeys);
    };
    match (name.as_str(), description.as_str(), alphabet.as_str()) {
        (Some(name), Some(description), Some(alphabet)) => {
            Ok(Automaton::new(name, description, alphabet))
        }
        _ => Err(ModelDefect::WrongHeaderTypes),
    }
}

fn declared_state(fields: &Object) -> Result<State, ModelDefect> {
    let (Some(name), Some(initial), Some(accepting), Some(message)) = (
        fields.get("name"),
        fields.get("initial"),
        fields.get("final"),
        fields.get("recognitionMessage"),
    ) else {
        return Err(ModelDefect::MissingStateKeys);
    };
    match (
        name.as_str(),
        initial.as_bool(),
        accepting.as_bool(),
        message.as_str(),
    ) {
        (Some(name), Some(initial), Some(accepting), Some(message)) => Ok(State::new(name)
            .with_initial(initial)
            .with_final(accepting)
            .with_message(message)),
        _ => Err(ModelDefect::WrongStateKeyTypes),
    }
}

fn declared_transition(entry: &Value) -> Result<(&str, &str), ModelDefect> {
    let fields = entry.as_object().ok_or(ModelDefect::WrongTransitionType)?;
    let (Some(symbol), Some(destination)) = (fields.get("symbol"), fields.get("destination"))
    else {
        return Err(ModelDefect::MissingTransitionKeys);
    };
    match (symbol.as_str(), destination.as_str()) {
        (Some(symbol), Some(destination)) => Ok((symbol, destination)),
        _ => Err(ModelDefect::WrongTransitionKeyTypes),
    }
}
