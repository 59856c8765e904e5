//! Engine errors.
//!
//! Every error carries the component and hook that produced it; the
//! original cause stays reachable through `source()`.

use std::fmt;
use std::io;

use thiserror::Error;

/// Error type returned by component hooks and quit callbacks.
pub type BoxError = Box<dyn std::error::Error + Send + Sync + 'static>;

/// Result type returned by component hooks.
pub type HookResult<T> = std::result::Result<T, BoxError>;

/// Result type returned by the engine.
pub type Result<T> = std::result::Result<T, Error>;

/// The component lifecycle hook that failed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Hook {
    Mount,
    Dismount,
    Draw,
    HandleKey,
}

impl fmt::Display for Hook {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Hook::Mount => "mount",
            Hook::Dismount => "dismount",
            Hook::Draw => "draw",
            Hook::HandleKey => "handle_key",
        })
    }
}

#[derive(Error, Debug)]
pub enum Error {
    /// A draw produced neither a region nor children.
    #[error("`{component}` drew neither a region nor children")]
    DrawResultInvalid { component: &'static str },

    #[error("{hook} hook failed for `{component}`")]
    HookFailure {
        component: &'static str,
        hook: Hook,
        #[source]
        source: BoxError,
    },

    #[error("failed to initialize terminal backend")]
    BackendInitFailure(#[source] io::Error),

    #[error("quit callback failed")]
    QuitCallbackFailure(#[source] BoxError),

    /// Props handed to an instance of a different props type.
    #[error("`{component}` expects props of type `{expected}`")]
    WrongPropertyType {
        component: &'static str,
        expected: &'static str,
    },

    #[error("terminal backend I/O failed")]
    Backend(#[source] io::Error),

    /// `draw` was called before a root element was installed.
    #[error("screen has no root element; call `init` first")]
    NotInitialized,

    /// A node id that no longer refers to a live node.
    #[error("node {0} is not part of the retained tree")]
    StaleNode(crate::engine::NodeId),
}

impl Error {
    pub(crate) fn hook(component: &'static str, hook: Hook, source: BoxError) -> Self {
        Error::HookFailure {
            component,
            hook,
            source,
        }
    }

    /// The hook that failed, if this is a hook failure.
    pub fn failed_hook(&self) -> Option<Hook> {
        match self {
            Error::HookFailure { hook, .. } => Some(*hook),
            _ => None,
        }
    }
}
