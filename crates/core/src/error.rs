//! Error type shared by resolution and emission.

use std::io;
use std::path::PathBuf;

use thiserror::Error as ThisError;

/// Errors raised while resolving a type graph or writing model artifacts.
///
/// Every variant is fatal for the run.
#[derive(Debug, ThisError)]
pub enum Error {
    /// A type with no declared name was reached where a model name is needed.
    #[error("unable to reflect a type with no name (walk: {path})")]
    UnnamedType {
        /// Walk path from the seed, ending at the unnamed type.
        path: String,
    },

    /// A seed or resolved root is not a struct.
    #[error("type {ty} has kind {kind} and cannot become a model")]
    NotAStruct {
        /// Source type spelling.
        ty: String,
        /// Its kind.
        kind: String,
    },

    /// The type mapper has no rule for this kind.
    #[error("cannot convert type {ty} of kind {kind}")]
    UnsupportedKind {
        /// Source type spelling.
        ty: String,
        /// Its kind.
        kind: String,
    },

    /// An embedded field does not resolve to a struct model, or can never
    /// settle because it embeds itself through a cycle.
    #[error(
        "failed to reflect ultimate type ({ty}) for embedded member ({field}) on type ({owner})"
    )]
    EmbeddedUnresolved {
        /// Struct declaring the embedded field.
        owner: String,
        /// Name of the embedded field.
        field: String,
        /// Embedded type with pointers stripped.
        ty: String,
    },

    /// A `rest` struct tag does not follow the tag grammar.
    #[error("invalid rest tag `{tag}` on {owner}.{field}: {reason}")]
    InvalidTag {
        /// Struct declaring the field.
        owner: String,
        /// Field carrying the tag.
        field: String,
        /// Raw `rest` tag value.
        tag: String,
        /// What is wrong with it.
        reason: String,
    },

    /// Two distinct source types resolved to the same final name.
    #[error("model name {name} is produced by both {first} and {second}")]
    DuplicateModelName {
        /// The shared final name.
        name: String,
        /// Source type that claimed the name first.
        first: String,
        /// Source type that claimed it second.
        second: String,
    },

    /// An artifact file already exists at the target path.
    #[error("refusing to overwrite {} while writing model {name} ({source_type})", existing.display())]
    ArtifactCollision {
        /// Model being written.
        name: String,
        /// Its source type spelling.
        source_type: String,
        /// The file that is in the way.
        existing: PathBuf,
    },

    /// Filesystem or output failure.
    #[error("{context}: {source}")]
    Io {
        /// What was being done.
        context: String,
        /// Underlying error.
        #[source]
        source: io::Error,
    },

    /// The target directory does not exist.
    #[error("target directory {} does not exist or is not a directory", path.display())]
    TargetDirMissing {
        /// Path given on the command line.
        path: PathBuf,
    },

    /// An overrides entry names a type the schema does not declare.
    #[error("unknown source type {name}")]
    UnknownType {
        /// Qualified `package.Name` spelling.
        name: String,
    },

    /// The overrides file cannot be read or parsed.
    #[error("invalid overrides file {}: {message}", path.display())]
    Config {
        /// Path of the overrides file.
        path: PathBuf,
        /// Parser or reader message.
        message: String,
    },
}

impl Error {
    pub(crate) fn io(context: impl Into<String>, source: io::Error) -> Self {
        Self::Io {
            context: context.into(),
            source,
        }
    }
}

/// Result alias defaulting to [`Error`].
pub type Result<T, E = Error> = std::result::Result<T, E>;
