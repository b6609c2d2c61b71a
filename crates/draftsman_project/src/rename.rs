//! Whole-form rename across a designer file and its companions.

use crate::companion::{code_behind_path, form_name, manifest_path};
use crate::errors::{ProjectError, ProjectResult};
use draftsman_forms::serialization::surgery::{
    rename_class, rename_code_behind, rename_manifest_reference,
};
use std::fs;
use std::path::{Path, PathBuf};

/// Outcome of a form rename: the paths the form now lives at.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenamedForm {
    pub designer_path: PathBuf,
    pub code_behind_path: Option<PathBuf>,
}

/// Rename a form end to end: rewrite class references in the designer
/// file, the behavior file and the manifest, then move both source files
/// to their new names. Content edits happen before any file moves so a
/// rename that fails midway leaves consistent text behind. Missing
/// companions are skipped.
pub fn rename_form(designer_path: &Path, new_name: &str) -> ProjectResult<RenamedForm> {
    let old_name = form_name(designer_path)
        .ok_or_else(|| ProjectError::NotDesignerFile(designer_path.to_path_buf()))?;
    if old_name == new_name {
        return Ok(RenamedForm {
            designer_path: designer_path.to_path_buf(),
            code_behind_path: code_behind_path(designer_path).filter(|p| p.exists()),
        });
    }

    let designer_text = fs::read_to_string(designer_path)?;
    fs::write(designer_path, rename_class(&designer_text, &old_name, new_name))?;

    let code_behind = code_behind_path(designer_path).filter(|p| p.exists());
    if let Some(ref path) = code_behind {
        let text = fs::read_to_string(path)?;
        fs::write(path, rename_code_behind(&text, &old_name, new_name))?;
    }

    if let Some(manifest) = manifest_path(designer_path).filter(|p| p.exists()) {
        let text = fs::read_to_string(&manifest)?;
        fs::write(&manifest, rename_manifest_reference(&text, &old_name, new_name))?;
    } else {
        tracing::debug!(form = %old_name, "no manifest beside designer file, skipping");
    }

    let new_designer = designer_path.with_file_name(format!("{new_name}.Designer.cs"));
    fs::rename(designer_path, &new_designer)?;

    let new_code_behind = match code_behind {
        Some(old) => {
            let new = old.with_file_name(format!("{new_name}.cs"));
            fs::rename(&old, &new)?;
            Some(new)
        }
        None => None,
    };

    Ok(RenamedForm {
        designer_path: new_designer,
        code_behind_path: new_code_behind,
    })
}
