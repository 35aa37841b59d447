use std::io::{BufRead, Write};

use filespec::{ClassifyTracer, FilterSpec, MatchFlags, MatchResult, PatternKind};
use serde::Serialize;
use settings::RepoSettings;

use crate::args::{HELP_TEXT, ParsedArgs};
use crate::error::CliError;
use crate::logging::init_logging;

const CLI_TARGET: &str = "vcfilter::cli";

/// One line of `--json` output.
#[derive(Serialize)]
struct Classification<'a> {
    path: &'a str,
    result: MatchResult,
    /// Same answer as `match_path` for this path.
    accepted: bool,
}

pub(crate) fn execute<In, Out>(
    parsed: ParsedArgs,
    input: &mut In,
    stdout: &mut Out,
) -> Result<(), CliError>
where
    In: BufRead,
    Out: Write,
{
    if parsed.show_help {
        stdout.write_all(HELP_TEXT.as_bytes())?;
        return Ok(());
    }

    if parsed.show_version {
        writeln!(stdout, "vcfilter {}", env!("CARGO_PKG_VERSION"))?;
        return Ok(());
    }

    init_logging(parsed.verbosity);

    let spec = build_spec(&parsed)?;
    let paths = if parsed.paths.is_empty() {
        read_paths(input)?
    } else {
        parsed.paths
    };

    let mut tracer = ClassifyTracer::new();
    for path in &paths {
        let result = spec.should_include(path, MatchFlags::NONE);
        tracer.record(result);

        if parsed.accepted_only && !result.is_accepted() {
            continue;
        }

        if parsed.json {
            serde_json::to_writer(
                &mut *stdout,
                &Classification {
                    path,
                    result,
                    accepted: result.is_accepted(),
                },
            )?;
            writeln!(stdout)?;
        } else if parsed.accepted_only {
            writeln!(stdout, "{path}")?;
        } else {
            writeln!(stdout, "{result}\t{path}")?;
        }
    }

    stdout.flush()?;
    tracer.summary();
    Ok(())
}

/// Builds the filter spec described by the command line.
///
/// Patterns are added kind by kind: inline patterns first, then pattern
/// files, then settings-file ignores.
pub(crate) fn build_spec(parsed: &ParsedArgs) -> Result<FilterSpec<'static>, CliError> {
    let flags = parsed.match_flags;
    let mut spec = FilterSpec::new();

    for (kind, inline, files) in [
        (PatternKind::Include, &parsed.includes, &parsed.include_from),
        (PatternKind::Exclude, &parsed.excludes, &parsed.exclude_from),
        (PatternKind::Ignore, &parsed.ignores, &parsed.ignore_from),
    ] {
        spec.add_patterns(kind, inline, flags);
        for file in files {
            spec.add_patterns_from_file(kind, file, flags)?;
        }
    }

    if let (Some(path), Some(repo)) = (&parsed.settings, &parsed.repo) {
        let settings = RepoSettings::from_file(path)?;
        spec.load_ignores_from_config(&settings, repo, flags)?;
    }

    spec.set_flags(parsed.spec_flags);

    tracing::info!(
        target: CLI_TARGET,
        includes = spec.count(PatternKind::Include.into()),
        excludes = spec.count(PatternKind::Exclude.into()),
        ignores = spec.count(PatternKind::Ignore.into()),
        flags = ?spec.flags(),
        "spec_ready"
    );

    Ok(spec)
}

/// Reads one path per line, skipping empty lines.
fn read_paths<R: BufRead>(input: &mut R) -> Result<Vec<String>, CliError> {
    let mut paths = Vec::new();
    for line in input.lines() {
        let line = line.map_err(CliError::Input)?;
        let path = line.trim_end_matches('\r');
        if !path.is_empty() {
            paths.push(path.to_owned());
        }
    }
    Ok(paths)
}
