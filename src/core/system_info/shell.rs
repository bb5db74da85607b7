use crate::core::system_info::types::{ProbeResult, NOT_AVAILABLE};
use crate::platform::Platform;
use log::debug;
use std::env;
use std::ffi::OsString;
use std::path::PathBuf;

/// Path of the first preferred shell found on `PATH`, then the platform extras
pub fn collect(preferences: &[String], platform: Platform) -> String {
    let candidates: Vec<&str> = preferences
        .iter()
        .map(String::as_str)
        .chain(platform.extra_shells().iter().copied())
        .collect();

    let shell = locate(candidates.iter().copied(), env::var_os("PATH"));
    if !shell.is_found() {
        debug!("none of {:?} found on PATH", candidates);
    }
    shell.unwrap_or(NOT_AVAILABLE)
}

/// First candidate resolvable within `search_path`
pub fn locate<'a, I>(candidates: I, search_path: Option<OsString>) -> ProbeResult
where
    I: IntoIterator<Item = &'a str>,
{
    let cwd = env::current_dir().unwrap_or_else(|_| PathBuf::from("."));
    candidates
        .into_iter()
        .find_map(|name| which::which_in(name, search_path.as_ref(), &cwd).ok())
        .map(|path| path.display().to_string())
        .into()
}
