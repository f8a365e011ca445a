//! Writes rendered models to the target directory.
//!
//! Each model becomes `<Name><suffix>`. Content goes to a temp file in the
//! target directory first and is renamed into place without clobbering, so a
//! failed run never leaves a half-written artifact behind.

use std::fs;
use std::io::{self, BufWriter, Write};
use std::path::{Path, PathBuf};

use tempfile::NamedTempFile;
use tracing::{debug, info, warn};

use crate::error::{Error, Result};
use crate::model::Model;
use crate::registry::ModelSet;
use crate::render::{Emit, ModelFile};

/// Suffix shared by every generated artifact.
pub const GENERATED_SUFFIX: &str = ".Generated.cs";
/// Namespace the generated classes live in.
pub const DEFAULT_NAMESPACE: &str = "Docker.DotNet.Models";

const TEMP_PREFIX: &str = "ser";

/// Writes model artifacts into one target directory.
#[derive(Debug, Clone)]
pub struct Emitter {
    dir: PathBuf,
    namespace: String,
    suffix: String,
}

impl Emitter {
    /// Target `dir`, which must already exist.
    pub fn open(dir: impl Into<PathBuf>, namespace: impl Into<String>) -> Result<Self> {
        let dir = dir.into();
        if !dir.is_dir() {
            return Err(Error::TargetDirMissing { path: dir });
        }
        Ok(Self {
            dir,
            namespace: namespace.into(),
            suffix: GENERATED_SUFFIX.to_string(),
        })
    }

    /// Use `suffix` instead of [`GENERATED_SUFFIX`] for artifact names.
    pub fn with_suffix(mut self, suffix: impl Into<String>) -> Self {
        self.suffix = suffix.into();
        self
    }

    /// The target directory.
    pub fn dir(&self) -> &Path {
        &self.dir
    }

    /// Path of the artifact for model `name`.
    pub fn artifact_path(&self, name: &str) -> PathBuf {
        self.dir.join(format!("{name}{}", self.suffix))
    }

    /// Delete every generated artifact left by a previous run. Returns the
    /// number of files removed.
    pub fn clean(&self) -> Result<usize> {
        let entries = fs::read_dir(&self.dir).map_err(|err| {
            Error::io(format!("failed to read {}", self.dir.display()), err)
        })?;

        let mut removed = 0;
        for entry in entries {
            let entry = entry.map_err(|err| {
                Error::io(format!("failed to read {}", self.dir.display()), err)
            })?;
            let path = entry.path();
            let generated = path
                .file_name()
                .and_then(|name| name.to_str())
                .is_some_and(|name| name.ends_with(&self.suffix));
            if !generated || !path.is_file() {
                continue;
            }

            fs::remove_file(&path).map_err(|err| {
                Error::io(format!("failed to remove {}", path.display()), err)
            })?;
            debug!(path = %path.display(), "removed stale artifact");
            removed += 1;
        }
        Ok(removed)
    }

    /// Write one artifact per model. Fails before writing anything if two
    /// models share a name.
    pub fn emit(&self, models: &ModelSet) -> Result<Vec<PathBuf>> {
        models.check_unique_names()?;

        let mut written = Vec::with_capacity(models.len());
        for model in models {
            written.push(self.write_model(model)?);
        }
        info!(count = written.len(), dir = %self.dir.display(), "wrote models");
        Ok(written)
    }

    fn write_model(&self, model: &Model) -> Result<PathBuf> {
        let path = self.artifact_path(&model.name);
        let collision = || Error::ArtifactCollision {
            name: model.name.clone(),
            source_type: model.source_name.clone(),
            existing: path.clone(),
        };
        if path.exists() {
            return Err(collision());
        }

        let content = ModelFile::new(model, &self.namespace).emit();
        let mut tmp = tempfile::Builder::new()
            .prefix(TEMP_PREFIX)
            .tempfile_in(&self.dir)
            .map_err(|err| Error::io(format!("failed to create temp file for {}", model.name), err))?;

        let written = {
            let mut writer = BufWriter::new(tmp.as_file_mut());
            writer
                .write_all(content.as_bytes())
                .and_then(|()| writer.flush())
        };
        if let Err(err) = written {
            discard(tmp);
            return Err(Error::io(format!("failed to write {}", path.display()), err));
        }

        match tmp.persist_noclobber(&path) {
            Ok(_) => {
                debug!(path = %path.display(), source = %model.source_name, "wrote model");
                Ok(path)
            }
            Err(err) => {
                discard(err.file);
                if err.error.kind() == io::ErrorKind::AlreadyExists {
                    Err(collision())
                } else {
                    Err(Error::io(format!("failed to rename into {}", path.display()), err.error))
                }
            }
        }
    }
}

/// Remove a temp file on a failure path, reporting a leftover instead of
/// masking the original error.
fn discard(tmp: NamedTempFile) -> bool {
    let path = tmp.path().to_path_buf();
    match tmp.close() {
        Ok(()) => true,
        Err(err) => {
            warn!(path = %path.display(), error = %err, "failed to remove temp file");
            false
        }
    }
}
