//! Embedded project-file templates for EPOC S60 variant generation.
//!
//! Template text is carried verbatim from the Symbian builder; only the
//! substitution slots use named placeholders (`index`, `uid`) instead of
//! positional ones, so a value/slot mismatch fails at render time rather
//! than producing a silently shuffled file.

/// Name of the shared component index file listing every variant's `.mmp`.
pub const COMPONENT_INDEX_FILE: &str = "bld.inf";

/// Literal header line written at the top of the component index file.
pub const COMPONENT_INDEX_HEADER: &str = "PRJ_MMPFILES";

/// Static platform descriptor block. Carried as constant data with no
/// substitution slots; the generate run does not emit it.
pub static PLATFORM_DESCRIPTOR: &str = include_str!("templates/platform_descriptor.inf");

/// The four per-variant templates, in the order they are rendered and written.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ProjectTemplate {
    /// `ScummVM{i}.rss` — menu/resource script.
    ResourceScript,
    /// `ScummVM{i}_loc.rss` — localisable caption and icon info.
    Localisation,
    /// `ScummVM{i}_reg.rss` — application registration, embeds the UID.
    Registration,
    /// `ScummVM{i}.mmp` — MMP makefile-project descriptor.
    ProjectDescriptor,
}

impl ProjectTemplate {
    pub const ALL: [ProjectTemplate; 4] = [
        ProjectTemplate::ResourceScript,
        ProjectTemplate::Localisation,
        ProjectTemplate::Registration,
        ProjectTemplate::ProjectDescriptor,
    ];

    /// Name under which the template is registered with the engine.
    pub fn template_name(self) -> &'static str {
        match self {
            ProjectTemplate::ResourceScript => "resource_script",
            ProjectTemplate::Localisation => "localisation",
            ProjectTemplate::Registration => "registration",
            ProjectTemplate::ProjectDescriptor => "project_descriptor",
        }
    }

    /// Embedded template source.
    pub fn source(self) -> &'static str {
        match self {
            ProjectTemplate::ResourceScript => {
                include_str!("templates/resource_script.rss.j2")
            }
            ProjectTemplate::Localisation => include_str!("templates/localisation.rss.j2"),
            ProjectTemplate::Registration => include_str!("templates/registration.rss.j2"),
            ProjectTemplate::ProjectDescriptor => {
                include_str!("templates/project_descriptor.mmp.j2")
            }
        }
    }

    /// Output file name for the variant with the given 1-based index.
    pub fn file_name(self, index: usize) -> String {
        match self {
            ProjectTemplate::ResourceScript => format!("ScummVM{index}.rss"),
            ProjectTemplate::Localisation => format!("ScummVM{index}_loc.rss"),
            ProjectTemplate::Registration => format!("ScummVM{index}_reg.rss"),
            ProjectTemplate::ProjectDescriptor => format!("ScummVM{index}.mmp"),
        }
    }
}
