//! Error handling types

use thiserror::Error;

/// Result type alias for operations that can fail
pub type Result<T> = std::result::Result<T, Error>;

/// Main error type for the wiring engine
#[derive(Error, Debug)]
pub enum Error {
    /// A by-name binding references a name the creation routine does not declare
    #[error("Component '{component}': unknown parameter name '{name}' (known: {known:?})")]
    UnknownParameterName {
        /// Key of the component being assembled
        component: String,
        /// The name that was bound
        name: String,
        /// Parameter names declared by the routine
        known: Vec<String>,
    },

    /// A by-index binding falls outside `[0, arity)`
    #[error("Component '{component}': parameter index {index} out of range for arity {arity}")]
    IndexOutOfRange {
        /// Key of the component being assembled
        component: String,
        /// The index that was bound
        index: usize,
        /// Number of parameters declared by the routine
        arity: usize,
    },

    /// A by-name binding exists but the routine's parameter names are still unknown
    #[error(
        "Component '{component}': parameter '{name}' bound by name but the routine's parameter names are not available"
    )]
    UnresolvedParameterNames {
        /// Key of the component being assembled
        component: String,
        /// The first name that could not be mapped
        name: String,
    },

    /// Collaborator failure tagged with the slot it was resolving
    #[error("Component '{component}', parameter {parameter}: {source}")]
    Parameter {
        /// Key of the component being assembled
        component: String,
        /// Display form of the slot identity (`#1` or `'timeout'`)
        parameter: String,
        /// The collaborator error, unmodified
        #[source]
        source: Box<Error>,
    },

    /// A reference names a component the resolver does not know
    #[error("Reference not found: {identifier}")]
    ReferenceNotFound {
        /// The referenced component key
        identifier: String,
    },

    /// Text could not be converted to the required type
    #[error("Cannot convert '{text}' to {required_type}: {message}")]
    Conversion {
        /// The literal text
        text: String,
        /// The requested target type
        required_type: String,
        /// Converter diagnostic
        message: String,
    },

    /// A deferred collection builder failed
    #[error("Collection build error: {message}")]
    CollectionBuild {
        /// Description of the failure
        message: String,
    },

    /// I/O operation error (simple form)
    #[error("I/O error: {source}")]
    IoSimple {
        /// The underlying I/O error
        #[from]
        source: std::io::Error,
    },

    /// I/O operation error (with context)
    #[error("I/O error: {message}")]
    Io {
        /// Description of the I/O error
        message: String,
        /// Optional source error
        #[source]
        source: Option<Box<dyn std::error::Error + Send + Sync>>,
    },

    /// Configuration-related error
    #[error("Configuration error: {message}")]
    Configuration {
        /// Description of the configuration error
        message: String,
        /// Optional source error
        #[source]
        source: Option<Box<dyn std::error::Error + Send + Sync>>,
    },

    /// Infrastructure operation error
    #[error("Infrastructure error: {message}")]
    Infrastructure {
        /// Description of the infrastructure error
        message: String,
        /// Optional source error
        #[source]
        source: Option<Box<dyn std::error::Error + Send + Sync>>,
    },

    /// Generic string-based error
    #[error("String error: {0}")]
    String(String),

    /// Internal system error
    #[error("Internal error: {message}")]
    Internal {
        /// Description of the internal error
        message: String,
    },
}

// Binder error creation methods
impl Error {
    /// Create an unknown parameter name error
    pub fn unknown_parameter_name<C: Into<String>, N: Into<String>>(
        component: C,
        name: N,
        known: &[String],
    ) -> Self {
        Self::UnknownParameterName {
            component: component.into(),
            name: name.into(),
            known: known.to_vec(),
        }
    }

    /// Create an index out of range error
    pub fn index_out_of_range<C: Into<String>>(component: C, index: usize, arity: usize) -> Self {
        Self::IndexOutOfRange {
            component: component.into(),
            index,
            arity,
        }
    }

    /// Create an unresolved parameter names error
    pub fn unresolved_parameter_names<C: Into<String>, N: Into<String>>(
        component: C,
        name: N,
    ) -> Self {
        Self::UnresolvedParameterNames {
            component: component.into(),
            name: name.into(),
        }
    }

    /// Tag a collaborator error with the slot being resolved
    pub fn for_parameter<C: Into<String>, P: Into<String>>(
        self,
        component: C,
        parameter: P,
    ) -> Self {
        Self::Parameter {
            component: component.into(),
            parameter: parameter.into(),
            source: Box::new(self),
        }
    }

    /// Strip slot tagging and return the collaborator error
    pub fn root_cause(&self) -> &Error {
        match self {
            Self::Parameter { source, .. } => source.root_cause(),
            other => other,
        }
    }
}

// Collaborator error creation methods
impl Error {
    /// Create a reference not found error
    pub fn reference_not_found<S: Into<String>>(identifier: S) -> Self {
        Self::ReferenceNotFound {
            identifier: identifier.into(),
        }
    }

    /// Create a conversion error
    pub fn conversion<T: Into<String>, R: Into<String>, M: Into<String>>(
        text: T,
        required_type: R,
        message: M,
    ) -> Self {
        Self::Conversion {
            text: text.into(),
            required_type: required_type.into(),
            message: message.into(),
        }
    }

    /// Create a collection build error
    pub fn collection_build<S: Into<String>>(message: S) -> Self {
        Self::CollectionBuild {
            message: message.into(),
        }
    }
}

// Ambient error creation methods
impl Error {
    /// Create an I/O error
    pub fn io<S: Into<String>>(message: S) -> Self {
        Self::Io {
            message: message.into(),
            source: None,
        }
    }

    /// Create a configuration error
    pub fn config<S: Into<String>>(message: S) -> Self {
        Self::Configuration {
            message: message.into(),
            source: None,
        }
    }

    /// Create a configuration error with source
    pub fn config_with_source<S: Into<String>, E: std::error::Error + Send + Sync + 'static>(
        message: S,
        source: E,
    ) -> Self {
        Self::Configuration {
            message: message.into(),
            source: Some(Box::new(source)),
        }
    }

    /// Create an infrastructure error
    pub fn infrastructure<S: Into<String>>(message: S) -> Self {
        Self::Infrastructure {
            message: message.into(),
            source: None,
        }
    }

    /// Create an internal error
    pub fn internal<S: Into<String>>(message: S) -> Self {
        Self::Internal {
            message: message.into(),
        }
    }
}

impl From<&str> for Error {
    fn from(s: &str) -> Self {
        Self::String(s.to_string())
    }
}

impl From<String> for Error {
    fn from(s: String) -> Self {
        Self::String(s)
    }
}
