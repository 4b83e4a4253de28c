//! Model loading errors.

use thiserror::Error;

/// Specific reason a model description was refused.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum ModelDefect {
    #[error("DFA value declared using wrong type, only one model is allowed")]
    NotAnObject,

    #[error("DFA name, description or alphabet keys missing")]
    MissingHeaderKeys,

    #[error("DFA name, description or alphabet values declared using wrong type")]
    WrongHeaderTypes,

    #[error("DFA states key missing")]
    MissingStates,

    #[error("DFA states value declared using wrong type")]
    WrongStatesType,

    #[error("State value declared using wrong type")]
    WrongStateType,

    #[error("State name, initial, final or recognitionMessage keys missing")]
    MissingStateKeys,

    #[error("State name, initial, final or recognitionMessage values declared using wrong type")]
    WrongStateKeyTypes,

    #[error("State transitions key missing")]
    MissingTransitions,

    #[error("State transitions value declared using wrong type")]
    WrongTransitionsType,

    #[error("Transition value declared using wrong type")]
    WrongTransitionType,

    #[error("Transition symbol or destination keys missing")]
    MissingTransitionKeys,

    #[error("Transition symbol or destination values declared using wrong type")]
    WrongTransitionKeyTypes,

    #[error("Transition destination '{destination}' does not match any declared state")]
    UnknownDestination { destination: String },
}

/// Errors that can occur while loading a model.
#[derive(Debug, Error)]
pub enum LoadError {
    /// The document parsed but does not describe an automaton
    #[error("Invalid JSON model: {0}")]
    InvalidModel(#[from] ModelDefect),

    /// The document is not well-formed JSON
    #[error("Invalid JSON model: {0}")]
    Syntax(#[from] serde_json::Error),

    #[error("Failed to read model: {0}")]
    Io(#[from] std::io::Error),
}
