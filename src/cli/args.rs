use clap::Parser;
use serde::Serialize;
use std::path::PathBuf;

#[derive(Debug, Parser, Serialize)]
#[command(
    author,
    version,
    about = "Evaluate object x viewpoint classifier scores at cell, object, and global level",
    long_about = None
)]
pub struct Args {
    #[arg(
        long,
        short = 'c',
        help = "Class labels: a file with one label per line, or a directory of class folders"
    )]
    pub classes: PathBuf,
    #[arg(
        long,
        short = 's',
        help = "JSON Lines of {\"id\", \"label\"?, \"scores\"} records"
    )]
    pub scores: PathBuf,
    #[arg(
        long,
        short = 'o',
        default_value = "results",
        help = "Directory under which a timestamped run directory is created"
    )]
    pub output: PathBuf,
    #[arg(long, help = "Refuse class labels without a direction suffix")]
    pub strict: bool,
    #[arg(long, help = "Evaluate on all cores; skips the per-sample report")]
    pub parallel: bool,
    #[arg(long, help = "Also write the summary as JSON")]
    pub json: bool,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_minimal_invocation() {
        let args = Args::try_parse_from(["evaluate", "-c", "classes.txt", "-s", "val.jsonl"]).unwrap();
        assert_eq!(args.classes, PathBuf::from("classes.txt"));
        assert_eq!(args.output, PathBuf::from("results"));
        assert!(!args.strict && !args.parallel && !args.json);
    }

    #[test]
    fn scores_are_required() {
        assert!(Args::try_parse_from(["evaluate", "--classes", "classes.txt"]).is_err());
    }
}
