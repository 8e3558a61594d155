//! Directory conversion command.

use std::collections::HashSet;
use std::path::{Path, PathBuf};
use std::time::Instant;

use anyhow::{Context, Result};
use rayon::prelude::*;
use svg2jsx_core::{check_syntax, to_component_name};
use svg2jsx_svg::{Conversion, Pipeline, SvgSource};
use walkdir::WalkDir;

use crate::config::Settings;

/// One file to convert.
#[derive(Debug, Clone)]
struct Job {
    path: PathBuf,
    component_name: String,
}

/// Outcome of a batch run.
#[derive(Debug, Default)]
pub struct BatchReport {
    pub converted: Vec<String>,
    pub failed: usize,
}

/// Run the batch command.
pub async fn run(
    dir: PathBuf,
    output: PathBuf,
    index: bool,
    check: bool,
    settings: &Settings,
) -> Result<BatchReport> {
    if !dir.is_dir() {
        anyhow::bail!("Directory not found: {}", dir.display());
    }

    let start = Instant::now();
    let jobs = plan_jobs(discover_svgs(&dir));
    if jobs.is_empty() {
        tracing::warn!("No .svg files found in {}", dir.display());
        return Ok(BatchReport::default());
    }

    tracing::info!("Converting {} files from {}", jobs.len(), dir.display());

    let pipeline = settings.pipeline();
    let batch_settings = settings.clone();
    let total = jobs.len();
    let results = tokio::task::spawn_blocking(move || {
        convert_all(&pipeline, &jobs, &batch_settings, check)
    })
    .await
    .context("Conversion worker panicked")?;

    tokio::fs::create_dir_all(&output)
        .await
        .with_context(|| format!("Failed to create {}", output.display()))?;

    let mut report = BatchReport::default();
    for (job, result) in results {
        match result {
            Ok(conversion) => {
                let file = output.join(format!(
                    "{}.{}",
                    conversion.component_name,
                    conversion.format.extension()
                ));
                tokio::fs::write(&file, &conversion.source)
                    .await
                    .with_context(|| format!("Failed to write {}", file.display()))?;
                tracing::debug!("{} -> {}", job.path.display(), file.display());
                report.converted.push(conversion.component_name);
            }
            Err(e) => {
                tracing::warn!("Failed to convert {}: {:#}", job.path.display(), e);
                report.failed += 1;
            }
        }
    }

    if index && !report.converted.is_empty() {
        let file = output.join(format!("index.{}", settings.format.index_extension()));
        tokio::fs::write(&file, index_module(&report.converted))
            .await
            .with_context(|| format!("Failed to write {}", file.display()))?;
    }

    tracing::info!(
        "Converted {} of {} files in {}ms",
        report.converted.len(),
        total,
        start.elapsed().as_millis()
    );
    tracing::info!("Output: {}", output.display());

    if report.converted.is_empty() {
        anyhow::bail!("All {} conversions failed", report.failed);
    }

    Ok(report)
}

/// Find all `.svg` files under `dir`, sorted for stable naming.
fn discover_svgs(dir: &Path) -> Vec<PathBuf> {
    let mut files: Vec<PathBuf> = WalkDir::new(dir)
        .follow_links(true)
        .into_iter()
        .filter_map(|entry| match entry {
            Ok(entry) => Some(entry),
            Err(e) => {
                tracing::warn!("Skipping unreadable entry: {}", e);
                None
            }
        })
        .filter(|e| e.file_type().is_file())
        .map(|e| e.into_path())
        .filter(|p| {
            p.extension()
                .and_then(|e| e.to_str())
                .is_some_and(|e| e.eq_ignore_ascii_case("svg"))
        })
        .collect();

    files.sort();
    files
}

/// Pair each file with a unique component name.
///
/// Files whose names collide get numeric suffixes in discovery order:
/// `Icon`, `Icon2`, `Icon3`. A suffix never reuses a name already taken,
/// including one derived directly from another file.
fn plan_jobs(files: Vec<PathBuf>) -> Vec<Job> {
    let mut taken: HashSet<String> = HashSet::new();

    files
        .into_iter()
        .map(|path| {
            let stem = path.file_stem().and_then(|s| s.to_str()).unwrap_or("");
            let base = to_component_name(stem);

            let mut component_name = base.clone();
            let mut suffix = 2;
            while taken.contains(&component_name) {
                component_name = format!("{}{}", base, suffix);
                suffix += 1;
            }
            taken.insert(component_name.clone());

            Job {
                path,
                component_name,
            }
        })
        .collect()
}

fn convert_all(
    pipeline: &Pipeline,
    jobs: &[Job],
    settings: &Settings,
    check: bool,
) -> Vec<(Job, Result<Conversion>)> {
    jobs.par_iter()
        .map(|job| {
            let result = convert_one(pipeline, job, settings, check);
            (job.clone(), result)
        })
        .collect()
}

fn convert_one(
    pipeline: &Pipeline,
    job: &Job,
    settings: &Settings,
    check: bool,
) -> Result<Conversion> {
    let source = SvgSource::External(job.path.display().to_string());
    let conversion = pipeline.run(&source, &settings.options(job.component_name.as_str()))?;

    if check {
        check_syntax(&conversion.source, conversion.format)?;
    }

    Ok(conversion)
}

/// Module re-exporting every generated component.
fn index_module(names: &[String]) -> String {
    let mut names: Vec<&String> = names.iter().collect();
    names.sort();

    names
        .into_iter()
        .map(|name| format!("export {{ {name} }} from \"./{name}\";\n"))
        .collect()
}
