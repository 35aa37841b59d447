use std::ffi::OsString;
use std::path::PathBuf;

use clap::{Arg, ArgAction, Command, builder::OsStringValueParser};
use filespec::{MatchFlags, SpecFlags};

/// Deterministic help text describing the command-line surface.
pub(crate) const HELP_TEXT: &str = concat!(
    "vcfilter ",
    env!("CARGO_PKG_VERSION"),
    "\n",
    "\n",
    "Usage: vcfilter [OPTIONS] [PATH...]\n",
    "\n",
    "Classifies repository-relative paths as included, excluded, ignored,\n",
    "implied or maybe. Paths are read from standard input, one per line,\n",
    "when none are given on the command line.\n",
    "\n",
    "Patterns:\n",
    "  -i, --include PATTERN     Add an include pattern.\n",
    "  -x, --exclude PATTERN     Add an exclude pattern.\n",
    "      --ignore PATTERN      Add an ignore pattern.\n",
    "      --include-from FILE   Read include patterns from FILE.\n",
    "      --exclude-from FILE   Read exclude patterns from FILE.\n",
    "      --ignore-from FILE    Read ignore patterns from FILE.\n",
    "      --settings FILE       Read ignore patterns from a settings file.\n",
    "      --repo NAME           Repository section to use with --settings.\n",
    "\n",
    "Matching:\n",
    "      --anywhere            Let patterns match at any directory depth.\n",
    "      --recursive           Let patterns match everything below a folder.\n",
    "      --trailing-slash      Ignore one trailing separator on paths.\n",
    "      --repo-root           Treat a leading '@' component as the root.\n",
    "      --no-includes         Disable include patterns.\n",
    "      --no-excludes         Disable exclude patterns.\n",
    "      --no-ignores          Disable ignore patterns.\n",
    "\n",
    "Output:\n",
    "      --accepted-only       Print only paths that should be processed.\n",
    "      --json                Print one JSON object per path.\n",
    "  -v, --verbose             Increase diagnostic output (repeatable).\n",
    "  -h, --help                Show this help message and exit.\n",
    "  -V, --version             Output version information and exit.\n",
);

/// Parsed command produced by [`parse_args`].
///
/// **Warning**: This type is exposed via `cli::test_utils` for integration
/// tests only. Its fields may change without notice.
#[derive(Debug, Default)]
pub struct ParsedArgs {
    /// `--help` was given.
    pub show_help: bool,
    /// `--version` was given.
    pub show_version: bool,
    /// Number of `-v` occurrences.
    pub verbosity: u8,
    /// `--include` patterns in command-line order.
    pub includes: Vec<String>,
    /// `--exclude` patterns in command-line order.
    pub excludes: Vec<String>,
    /// `--ignore` patterns in command-line order.
    pub ignores: Vec<String>,
    /// `--include-from` files.
    pub include_from: Vec<PathBuf>,
    /// `--exclude-from` files.
    pub exclude_from: Vec<PathBuf>,
    /// `--ignore-from` files.
    pub ignore_from: Vec<PathBuf>,
    /// `--settings` file.
    pub settings: Option<PathBuf>,
    /// `--repo` section name.
    pub repo: Option<String>,
    /// Flags attached to every added pattern.
    pub match_flags: MatchFlags,
    /// Global disable flags.
    pub spec_flags: SpecFlags,
    /// `--accepted-only` was given.
    pub accepted_only: bool,
    /// `--json` was given.
    pub json: bool,
    /// Paths to classify.
    pub paths: Vec<String>,
}

/// Builds the `clap` command used for parsing.
fn clap_command() -> Command {
    let command = Command::new("vcfilter")
        .disable_help_flag(true)
        .disable_version_flag(true)
        .arg_required_else_help(false)
        .arg(
            Arg::new("help")
                .long("help")
                .short('h')
                .help("Show this help message and exit.")
                .action(ArgAction::SetTrue),
        )
        .arg(
            Arg::new("version")
                .long("version")
                .short('V')
                .help("Output version information and exit.")
                .action(ArgAction::SetTrue),
        )
        .arg(
            Arg::new("verbose")
                .long("verbose")
                .short('v')
                .help("Increase diagnostic output.")
                .action(ArgAction::Count),
        )
        .arg(pattern_arg("include", Some('i'), "Add an include pattern."))
        .arg(pattern_arg("exclude", Some('x'), "Add an exclude pattern."))
        .arg(pattern_arg("ignore", None, "Add an ignore pattern."))
        .arg(file_arg("include-from", "Read include patterns from FILE."))
        .arg(file_arg("exclude-from", "Read exclude patterns from FILE."))
        .arg(file_arg("ignore-from", "Read ignore patterns from FILE."))
        .arg(
            Arg::new("settings")
                .long("settings")
                .value_name("FILE")
                .help("Read ignore patterns from a settings file.")
                .value_parser(OsStringValueParser::new())
                .requires("repo")
                .action(ArgAction::Set),
        )
        .arg(
            Arg::new("repo")
                .long("repo")
                .value_name("NAME")
                .help("Repository section to use with --settings.")
                .value_parser(OsStringValueParser::new())
                .requires("settings")
                .action(ArgAction::Set),
        )
        .arg(
            Arg::new("paths")
                .value_name("PATH")
                .num_args(0..)
                .value_parser(OsStringValueParser::new())
                .action(ArgAction::Append),
        );

    [
        ("anywhere", "Let patterns match at any directory depth."),
        ("recursive", "Let patterns match everything below a folder."),
        ("trailing-slash", "Ignore one trailing separator on paths."),
        ("repo-root", "Treat a leading '@' component as the root."),
        ("no-includes", "Disable include patterns."),
        ("no-excludes", "Disable exclude patterns."),
        ("no-ignores", "Disable ignore patterns."),
        ("accepted-only", "Print only paths that should be processed."),
        ("json", "Print one JSON object per path."),
    ]
    .into_iter()
    .fold(command, |command, (name, help)| {
        command.arg(
            Arg::new(name)
                .long(name)
                .help(help)
                .action(ArgAction::SetTrue),
        )
    })
}

fn pattern_arg(name: &'static str, short: Option<char>, help: &'static str) -> Arg {
    let arg = Arg::new(name)
        .long(name)
        .value_name("PATTERN")
        .help(help)
        .value_parser(OsStringValueParser::new())
        .allow_hyphen_values(true)
        .action(ArgAction::Append);
    match short {
        Some(short) => arg.short(short),
        None => arg,
    }
}

fn file_arg(name: &'static str, help: &'static str) -> Arg {
    Arg::new(name)
        .long(name)
        .value_name("FILE")
        .help(help)
        .value_parser(OsStringValueParser::new())
        .action(ArgAction::Append)
}

/// Parses command-line arguments into a [`ParsedArgs`] structure.
///
/// The first element is the program name. An empty iterator is accepted.
pub fn parse_args<I, S>(arguments: I) -> Result<ParsedArgs, clap::Error>
where
    I: IntoIterator<Item = S>,
    S: Into<OsString>,
{
    let mut args: Vec<OsString> = arguments.into_iter().map(Into::into).collect();

    if args.is_empty() {
        args.push(OsString::from("vcfilter"));
    }

    let mut matches = clap_command().try_get_matches_from(args)?;

    let mut match_flags = MatchFlags::NONE;
    for (name, flag) in [
        ("anywhere", MatchFlags::MATCH_ANYWHERE),
        ("recursive", MatchFlags::MATCH_FOLDERS_RECURSIVELY),
        ("trailing-slash", MatchFlags::MATCH_TRAILING_SLASH),
        ("repo-root", MatchFlags::MATCH_REPO_ROOT),
    ] {
        if matches.get_flag(name) {
            match_flags.insert(flag);
        }
    }

    let mut spec_flags = SpecFlags::NONE;
    for (name, flag) in [
        ("no-includes", SpecFlags::NO_INCLUDES),
        ("no-excludes", SpecFlags::NO_EXCLUDES),
        ("no-ignores", SpecFlags::NO_IGNORES),
    ] {
        if matches.get_flag(name) {
            spec_flags |= flag;
        }
    }

    Ok(ParsedArgs {
        show_help: matches.get_flag("help"),
        show_version: matches.get_flag("version"),
        verbosity: matches.get_count("verbose"),
        includes: remove_strings(&mut matches, "include"),
        excludes: remove_strings(&mut matches, "exclude"),
        ignores: remove_strings(&mut matches, "ignore"),
        include_from: remove_paths(&mut matches, "include-from"),
        exclude_from: remove_paths(&mut matches, "exclude-from"),
        ignore_from: remove_paths(&mut matches, "ignore-from"),
        settings: matches
            .remove_one::<OsString>("settings")
            .map(PathBuf::from),
        repo: matches
            .remove_one::<OsString>("repo")
            .map(os_string_to_text),
        match_flags,
        spec_flags,
        accepted_only: matches.get_flag("accepted-only"),
        json: matches.get_flag("json"),
        paths: remove_strings(&mut matches, "paths"),
    })
}

fn remove_strings(matches: &mut clap::ArgMatches, id: &str) -> Vec<String> {
    matches
        .remove_many::<OsString>(id)
        .map(|values| values.map(os_string_to_text).collect())
        .unwrap_or_default()
}

fn remove_paths(matches: &mut clap::ArgMatches, id: &str) -> Vec<PathBuf> {
    matches
        .remove_many::<OsString>(id)
        .map(|values| values.map(PathBuf::from).collect())
        .unwrap_or_default()
}

fn os_string_to_text(value: OsString) -> String {
    match value.into_string() {
        Ok(text) => text,
        Err(value) => value.to_string_lossy().into_owned(),
    }
}
