use std::fs::read_to_string;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::error::{AnnotateError, AnnotateResult};

pub const DEFAULT_CONTAINER_RUNTIME: &str = "singularity";
pub const DEFAULT_TOOL: &str = "vep";
pub const DEFAULT_FORKS: u32 = 4;

/// Flags passed to the annotation tool when the config names none.
pub const DEFAULT_ANNOTATION_ARGS: [&str; 17] = [
    "-e",
    "-q",
    "--check_existing",
    "--check_ref",
    "--symbol",
    "--polyphen",
    "--sift",
    "--merged",
    "--use_transcript_ref",
    "--hgvs",
    "--hgvsg",
    "--variant_class",
    "--canonical",
    "--force",
    "--offline",
    "--no_stats",
    "--cache",
];

fn default_container_runtime() -> String {
    DEFAULT_CONTAINER_RUNTIME.to_string()
}

fn default_tool() -> String {
    DEFAULT_TOOL.to_string()
}

fn default_forks() -> u32 {
    DEFAULT_FORKS
}

fn default_annotation_args() -> Vec<String> {
    DEFAULT_ANNOTATION_ARGS.iter().map(|s| s.to_string()).collect()
}

///
/// Settings for the external annotation tool, read from a TOML file.
///
/// ```toml
/// fasta_dir = "~/vepDBs/homo_sapiens/Homo_sapiens.GRCh38.dna.primary_assembly.fa"
/// allele_db = "~/vepDBs/homo_sapiens_vep_98_GRCh38"
/// annotation_tool_image = "~/pdx-liftover-vep_release98.3.simg"
/// ```
///
#[derive(Deserialize, Serialize, Debug, PartialEq, Clone)]
pub struct AnnotationConfig {
    /// Reference genome FASTA.
    #[serde(alias = "fastaDir")]
    pub fasta_dir: PathBuf,

    /// Offline annotation cache directory.
    #[serde(alias = "alleleDB")]
    pub allele_db: PathBuf,

    /// Container image holding the annotation tool.
    #[serde(alias = "annotationToolImage")]
    pub annotation_tool_image: PathBuf,

    /// Program that runs the image; empty runs `tool` directly.
    #[serde(default = "default_container_runtime")]
    pub container_runtime: String,

    #[serde(default = "default_tool")]
    pub tool: String,

    #[serde(default = "default_forks")]
    pub forks: u32,

    #[serde(default)]
    pub timeout_secs: Option<u64>,

    #[serde(default = "default_annotation_args", alias = "annotationArgs")]
    pub annotation_args: Vec<String>,
}

impl AnnotationConfig {
    pub fn from_toml_str(contents: &str) -> AnnotateResult<Self> {
        let config: AnnotationConfig = toml::from_str(contents)?;
        Ok(config.expand_paths())
    }

    ///
    /// Expand a leading `~` in every configured path.
    ///
    fn expand_paths(self) -> Self {
        fn expand(path: PathBuf) -> PathBuf {
            PathBuf::from(shellexpand::tilde(&path.to_string_lossy()).into_owned())
        }

        AnnotationConfig {
            fasta_dir: expand(self.fasta_dir),
            allele_db: expand(self.allele_db),
            annotation_tool_image: expand(self.annotation_tool_image),
            ..self
        }
    }

    ///
    /// Check that every configured path exists.
    ///
    /// This is a precondition of any annotation run and is checked before any
    /// rows are processed or the tool is launched.
    ///
    pub fn validate(&self) -> AnnotateResult<()> {
        let required = [
            ("fasta_dir", &self.fasta_dir),
            ("allele_db", &self.allele_db),
            ("annotation_tool_image", &self.annotation_tool_image),
        ];

        for (setting, path) in required {
            if !path.exists() {
                return Err(AnnotateError::ConfigurationMissing {
                    setting,
                    path: path.clone(),
                });
            }
        }

        Ok(())
    }
}

impl TryFrom<&Path> for AnnotationConfig {
    type Error = AnnotateError;

    fn try_from(path: &Path) -> Result<Self, Self::Error> {
        let toml_str = read_to_string(path)?;
        AnnotationConfig::from_toml_str(&toml_str)
    }
}
