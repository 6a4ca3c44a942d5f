use std::ffi::OsString;
use std::io::Write;
use std::path::{Path, PathBuf};
use std::process::ExitCode;

use clap::{Arg, ArgAction, ArgMatches, Command, builder::PathBufValueParser};
use logging::{Level, PathError};

/// Exit status reported when the requested root path is rejected.
const ROOT_REJECTED: u8 = 2;

/// Builds the `clap` command used for parsing.
fn clap_command() -> Command {
    Command::new("pathlog")
        .about("Print a leveled log line tagged with the caller's root-relative path.")
        .arg(
            Arg::new("root")
                .long("root")
                .value_name("DIR")
                .help("Render caller paths relative to DIR (default: working directory).")
                .value_parser(PathBufValueParser::new())
                .action(ArgAction::Set),
        )
        .arg(
            Arg::new("color")
                .long("color")
                .help("Color the level tag with ANSI escapes.")
                .action(ArgAction::SetTrue),
        )
        .arg(
            Arg::new("debug")
                .long("debug")
                .help("Emit debug records.")
                .action(ArgAction::SetTrue),
        )
        .arg(
            Arg::new("level")
                .long("level")
                .short('l')
                .value_name("LEVEL")
                .help("Level of the record: debug, info, warn or error.")
                .value_parser(|value: &str| value.parse::<Level>())
                .default_value("info")
                .action(ArgAction::Set),
        )
        .arg(
            Arg::new("message")
                .value_name("MESSAGE")
                .help("Words of the message, joined with single spaces.")
                .required(true)
                .num_args(1..)
                .action(ArgAction::Append),
        )
}

/// Parses `args`, applies them to the default logger and writes one record.
///
/// Help and version output go to `stdout`; usage errors and rejected root
/// paths are reported on `stderr`. The record itself is written by the
/// default logger to the process streams.
#[must_use]
pub fn run_with<I, Out, Err>(args: I, stdout: &mut Out, stderr: &mut Err) -> ExitCode
where
    I: IntoIterator,
    I::Item: Into<OsString> + Clone,
    Out: Write,
    Err: Write,
{
    let matches = match clap_command().try_get_matches_from(args) {
        Ok(matches) => matches,
        Err(error) => {
            let rendered = error.render().to_string();
            let target: &mut dyn Write = if error.use_stderr() { stderr } else { stdout };
            let _ = target.write_all(rendered.as_bytes());
            return ExitCode::from(u8::try_from(error.exit_code()).unwrap_or(1));
        }
    };

    if let Err(error) = apply(&matches) {
        let _ = writeln!(stderr, "pathlog: {error}");
        return ExitCode::from(ROOT_REJECTED);
    }

    let level = matches
        .get_one::<Level>("level")
        .copied()
        .unwrap_or(Level::Info);
    let message = matches
        .get_many::<String>("message")
        .map(|words| words.map(String::as_str).collect::<Vec<_>>().join(" "))
        .unwrap_or_default();

    logging::log(level, &message);
    ExitCode::SUCCESS
}

fn apply(matches: &ArgMatches) -> Result<(), PathError> {
    if let Some(root) = matches.get_one::<PathBuf>("root") {
        logging::set_root_path(absolutize(root))?;
    }
    logging::set_colored_log(matches.get_flag("color"));
    logging::set_log_debug_level(matches.get_flag("debug"));
    Ok(())
}

fn absolutize(path: &Path) -> PathBuf {
    std::path::absolute(path).unwrap_or_else(|_| path.to_path_buf())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn command_is_well_formed() {
        clap_command().debug_assert();
    }

    #[test]
    fn help_goes_to_stdout() {
        let mut stdout = Vec::new();
        let mut stderr = Vec::new();
        let exit = run_with(["pathlog", "--help"], &mut stdout, &mut stderr);

        assert_eq!(exit, ExitCode::SUCCESS);
        let text = String::from_utf8(stdout).expect("utf-8");
        assert!(text.contains("Usage:"));
        assert!(stderr.is_empty());
    }

    #[test]
    fn missing_message_is_a_usage_error() {
        let mut stdout = Vec::new();
        let mut stderr = Vec::new();
        let exit = run_with(["pathlog"], &mut stdout, &mut stderr);

        assert_ne!(exit, ExitCode::SUCCESS);
        assert!(stdout.is_empty());
        assert!(!stderr.is_empty());
    }

    #[test]
    fn unknown_level_is_rejected() {
        let mut stdout = Vec::new();
        let mut stderr = Vec::new();
        let exit = run_with(
            ["pathlog", "--level", "loud", "hello"],
            &mut stdout,
            &mut stderr,
        );

        assert_ne!(exit, ExitCode::SUCCESS);
        let text = String::from_utf8(stderr).expect("utf-8");
        assert!(text.contains("loud"));
    }

    #[test]
    fn relative_paths_are_made_absolute() {
        assert!(absolutize(Path::new("some/dir")).is_absolute());
    }
}
