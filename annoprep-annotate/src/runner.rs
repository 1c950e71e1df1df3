use std::fs::{File, OpenOptions};
use std::io::{BufRead, BufReader};
use std::path::{Path, PathBuf};
use std::process::{Child, Command, ExitStatus, Stdio};
use std::thread::sleep;
use std::time::{Duration, Instant};

use log::{debug, info};

use annoprep_core::OutputFormat;
use annoprep_io::{append_suffix, output_path};

use crate::config::AnnotationConfig;
use crate::error::{AnnotateError, AnnotateResult};

pub const ANNOTATION_SUFFIX: &str = "ANN";
pub const WARNINGS_SUFFIX: &str = "vepWarnings";

const POLL_INTERVAL: Duration = Duration::from_millis(50);

///
/// One invocation of the annotation tool over a prepared file.
///
#[derive(Debug, Clone, PartialEq)]
pub struct AnnotationJob {
    pub input: PathBuf,
    pub format: OutputFormat,
    pub output: PathBuf,
    pub warnings: PathBuf,
}

impl AnnotationJob {
    pub fn for_prepared(prepared: &Path, format: OutputFormat) -> Self {
        AnnotationJob {
            input: prepared.to_path_buf(),
            format,
            output: append_suffix(prepared, ANNOTATION_SUFFIX),
            warnings: append_suffix(prepared, WARNINGS_SUFFIX),
        }
    }
}

///
/// Assemble the tool invocation as an argument list.
///
/// No shell is involved, so paths containing spaces or metacharacters are
/// passed through untouched.
///
pub fn build_command(config: &AnnotationConfig, job: &AnnotationJob) -> Command {
    let mut command = if config.container_runtime.is_empty() {
        Command::new(&config.tool)
    } else {
        let mut command = Command::new(&config.container_runtime);
        command
            .arg("exec")
            .arg(&config.annotation_tool_image)
            .arg(&config.tool);
        command
    };

    command
        .args(&config.annotation_args)
        .arg("--fork")
        .arg(config.forks.to_string())
        .arg("--format")
        .arg(job.format.suffix())
        .arg("--warning_file")
        .arg(&job.warnings)
        .arg("--dir_cache")
        .arg(&config.allele_db)
        .arg("--fasta")
        .arg(&config.fasta_dir)
        .arg("-i")
        .arg(&job.input)
        .arg("-o")
        .arg(&job.output);

    command
}

fn wait_with_timeout(child: &mut Child, timeout: Option<Duration>) -> AnnotateResult<ExitStatus> {
    let Some(timeout) = timeout else {
        return Ok(child.wait()?);
    };

    let started = Instant::now();
    loop {
        if let Some(status) = child.try_wait()? {
            return Ok(status);
        }
        if started.elapsed() >= timeout {
            // the child may exit between try_wait and kill
            let _ = child.kill();
            child.wait()?;
            return Err(AnnotateError::TimedOut(timeout.as_secs()));
        }
        sleep(POLL_INTERVAL);
    }
}

///
/// Run the annotation tool for a single job and wait for it.
///
/// The child's stdout and stderr are appended to `tool_log` when given,
/// otherwise they are inherited from this process.
///
/// # Arguments
/// - config: validated annotation settings
/// - job: the prepared file and its result paths
/// - tool_log: file that collects the tool's own output
///
/// # Returns
/// - path to the annotation results file
///
pub fn run_job(
    config: &AnnotationConfig,
    job: &AnnotationJob,
    tool_log: Option<&Path>,
) -> AnnotateResult<PathBuf> {
    let mut command = build_command(config, job);

    if let Some(log_path) = tool_log {
        let log_file = OpenOptions::new().create(true).append(true).open(log_path)?;
        command
            .stdout(Stdio::from(log_file.try_clone()?))
            .stderr(Stdio::from(log_file));
    }

    info!("Running annotation: {:?}", command);

    let mut child = command.spawn().map_err(|source| AnnotateError::Spawn {
        program: command.get_program().to_string_lossy().into_owned(),
        source,
    })?;

    let status = wait_with_timeout(&mut child, config.timeout_secs.map(Duration::from_secs))?;
    if !status.success() {
        return Err(AnnotateError::ToolFailed(status));
    }

    if !job.output.exists() {
        return Err(AnnotateError::MissingOutput(job.output.clone()));
    }

    debug!("Annotation results written to {:?}", job.output);
    Ok(job.output.clone())
}

/// True when the prepared file holds at least one record below its header.
fn has_records(path: &Path) -> AnnotateResult<bool> {
    let reader = BufReader::new(File::open(path)?);
    let mut lines = reader.lines();
    lines.next().transpose()?;
    Ok(lines.next().transpose()?.is_some())
}

///
/// Annotate the prepared outputs of `input` for the requested formats.
///
/// The configuration is validated before anything is launched. Prepared
/// files without records are skipped.
///
pub fn annotate_prepared(
    config: &AnnotationConfig,
    input: &Path,
    formats: &[OutputFormat],
    tool_log: Option<&Path>,
) -> AnnotateResult<Vec<PathBuf>> {
    config.validate()?;

    let mut results = Vec::new();
    for &format in formats {
        let prepared = output_path(input, format);
        if !prepared.exists() {
            return Err(AnnotateError::MissingPrepared(prepared));
        }
        if !has_records(&prepared)? {
            info!("{:?} has no records, skipping annotation", prepared);
            continue;
        }

        let job = AnnotationJob::for_prepared(&prepared, format);
        results.push(run_job(config, &job, tool_log)?);
    }

    Ok(results)
}
