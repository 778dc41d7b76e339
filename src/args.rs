//! Command-line parsing.
//!
//! The interface is a single positional folder, so there is nothing for an
//! argument parsing library to do beyond counting.

use std::{ffi::OsString, path::PathBuf};

pub const USAGE: &str = "Use scale_icon.py [folder]";

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Invocation {
    /// Wrong number of arguments: print [USAGE] and do nothing else
    Usage,
    Run(PathBuf),
}

/// Expects `args` to start with argv[0], the path to our binary.
pub fn parse_args(args: Vec<OsString>) -> Invocation {
    let mut iter = args.into_iter().skip(1);
    match (iter.next(), iter.next()) {
        (Some(folder), None) => Invocation::Run(PathBuf::from(folder)),
        _ => Invocation::Usage,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn os_args(args: &[&str]) -> Vec<OsString> {
        args.iter().map(OsString::from).collect()
    }

    #[test]
    fn single_folder_runs() {
        assert_eq!(
            parse_args(os_args(&["scale_icon", "icons"])),
            Invocation::Run(PathBuf::from("icons"))
        );
    }

    #[test]
    fn folder_that_looks_like_a_flag_is_still_a_folder() {
        assert_eq!(
            parse_args(os_args(&["scale_icon", "--help"])),
            Invocation::Run(PathBuf::from("--help"))
        );
    }

    #[test]
    fn wrong_argument_count_is_usage() {
        assert_eq!(parse_args(os_args(&[])), Invocation::Usage);
        assert_eq!(parse_args(os_args(&["scale_icon"])), Invocation::Usage);
        assert_eq!(
            parse_args(os_args(&["scale_icon", "a", "b"])),
            Invocation::Usage
        );
    }

    #[cfg(target_family = "unix")]
    #[test]
    fn non_utf8_folder_is_accepted() {
        use std::os::unix::ffi::OsStringExt;
        let folder = OsString::from_vec(vec![0x64, 0xff, 0x72]); // "d\xFFr"
        assert_eq!(
            parse_args(vec![OsString::from("scale_icon"), folder.clone()]),
            Invocation::Run(PathBuf::from(folder))
        );
    }
}
