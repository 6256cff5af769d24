//! Batch generation of per-variant project files.

use std::fs::{self, File};
use std::io::Write;
use std::path::Path;

use crate::error::AppError;
use crate::render::{Renderer, VariantContext};
use crate::templates::{COMPONENT_INDEX_FILE, COMPONENT_INDEX_HEADER, ProjectTemplate};

/// Generate the project file-group for every UID in `uids`, in order, into
/// `dest`.
///
/// Creates/truncates the component index file, writes its header, then per
/// variant renders and writes the four project files and appends the `.mmp`
/// filename to the index. Output fully overwrites any prior run. The first
/// failure aborts the run; files already written are left in place.
///
/// `dest` is not pre-checked: a missing or unwritable directory surfaces as
/// the corresponding I/O failure.
pub fn generate<S: AsRef<str>>(uids: &[S], dest: &Path) -> Result<(), AppError> {
    let renderer = Renderer::new()?;

    // One handle for the whole batch: truncate once, then append per variant,
    // released on completion or error.
    let mut index_file = File::create(dest.join(COMPONENT_INDEX_FILE))?;
    writeln!(index_file, "{COMPONENT_INDEX_HEADER}")?;

    for (position, uid) in uids.iter().enumerate() {
        let ctx = VariantContext::new(position + 1, uid.as_ref())?;

        // Render all four files before writing any, so a render failure
        // leaves no partial variant on disk.
        let mut rendered = Vec::with_capacity(ProjectTemplate::ALL.len());
        for template in ProjectTemplate::ALL {
            rendered.push((template.file_name(ctx.index), renderer.render(template, &ctx)?));
        }

        for (file_name, content) in rendered {
            fs::write(dest.join(file_name), content)?;
        }

        writeln!(index_file, "{}", ProjectTemplate::ProjectDescriptor.file_name(ctx.index))?;
    }

    Ok(())
}
