//! WSL host-environment path rewrite.

/// Environment variable naming the WSL distribution.
///
/// Present when the dev server runs inside WSL on a Windows host; its presence
/// changes workspace-root formatting only.
pub const WSL_DISTRO_ENV: &str = "WSL_DISTRO_NAME";

/// Rewrite a Linux workspace root into the `\\wsl.localhost` UNC form the
/// Windows-side browser resolves.
///
/// Pure string transform: forward slashes become backslashes and the UNC
/// prefix is prepended. The result is never checked against the filesystem.
pub fn unc_root(distro: &str, root: &str) -> String {
    let trimmed = root.trim_start_matches('/');
    let mut unc = format!(r"\\wsl.localhost\{distro}");
    if !trimmed.is_empty() {
        unc.push('\\');
        unc.push_str(&trimmed.replace('/', "\\"));
    }
    unc
}
