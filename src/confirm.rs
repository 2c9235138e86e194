//! Confirmation prompt shown before anything is deleted

use console::{style, Term};
use indicatif::{ProgressBar, ProgressDrawTarget, ProgressStyle};
use std::io::{self, BufRead, Write};
use std::path::Path;
use std::thread;
use std::time::Duration;

const BANNER_STEPS: u64 = 25;

/// Short cosmetic "preparing" bar. Drawn only on an interactive stdout.
pub fn play_banner(frame_delay: Duration) {
    if !Term::stdout().is_term() {
        return;
    }

    let bar = ProgressBar::with_draw_target(Some(BANNER_STEPS), ProgressDrawTarget::stdout());
    if let Ok(bar_style) = ProgressStyle::with_template("{prefix:.red} {bar:25.yellow} {msg:.red}") {
        bar.set_style(bar_style.progress_chars("~~ "));
    }
    bar.set_prefix("preparing|");
    bar.set_message("#==>");
    for _ in 0..BANNER_STEPS {
        thread::sleep(frame_delay);
        bar.inc(1);
    }
    bar.finish_and_clear();
    println!("{}", style("READY.").red());
}

/// Show the selected remote and local root, then ask for confirmation unless
/// `force` is set.
///
/// Reads at most one line from `input`. Only an answer starting with `y` or
/// `Y` proceeds; anything else, including end of input, aborts.
pub fn confirm<R, W>(
    remote: &str,
    root: &Path,
    force: bool,
    input: &mut R,
    out: &mut W,
) -> io::Result<bool>
where
    R: BufRead,
    W: Write,
{
    writeln!(out, "{}\t{}", style("Remote source:").red(), remote)?;
    writeln!(out, "{}\t{}", style("Local target:").red(), root.display())?;

    if force {
        return Ok(true);
    }

    writeln!(out, "{}", style("Warning: this will completely overwrite the local copy.").yellow())?;
    write!(out, "{}", style("Continue recloning local repo? [yN] ").yellow())?;
    out.flush()?;

    let mut answer = String::new();
    input.read_line(&mut answer)?;

    if is_affirmative(&answer) {
        Ok(true)
    } else {
        writeln!(out, "{}", style("Reclone aborted.").green())?;
        Ok(false)
    }
}

pub fn is_affirmative(answer: &str) -> bool {
    answer.trim().to_lowercase().starts_with('y')
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    fn run(answer: &str, force: bool) -> (bool, String) {
        let mut input = Cursor::new(answer.as_bytes().to_vec());
        let mut out = Vec::new();
        let proceed =
            confirm("https://a/x.git", Path::new("/work/x"), force, &mut input, &mut out)
                .expect("confirm");
        (proceed, String::from_utf8(out).expect("utf8"))
    }

    #[test]
    fn yes_answers_proceed() {
        for answer in ["y\n", "Y\n", "yes\n", "  Yep  \n"] {
            let (proceed, output) = run(answer, false);
            assert!(proceed, "answer {answer:?} should proceed");
            assert!(output.contains("[yN]"));
            assert!(!output.contains("Reclone aborted."));
        }
    }

    #[test]
    fn other_answers_abort() {
        for answer in ["no\n", "\n", "", "maybe\n", " n y\n"] {
            let (proceed, output) = run(answer, false);
            assert!(!proceed, "answer {answer:?} should abort");
            assert!(output.contains("Reclone aborted."));
        }
    }

    #[test]
    fn force_skips_prompt_and_never_reads_input() {
        let mut input = Cursor::new(b"no\n".to_vec());
        let mut out = Vec::new();
        let proceed = confirm("https://a/x.git", Path::new("/work/x"), true, &mut input, &mut out)
            .expect("confirm");

        assert!(proceed);
        assert_eq!(input.position(), 0, "input must not be consumed");
        let output = String::from_utf8(out).expect("utf8");
        assert!(output.contains("https://a/x.git"));
        assert!(output.contains("/work/x"));
        assert!(!output.contains("[yN]"));
    }
}
