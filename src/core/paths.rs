use crate::error::{Error, Result};
use std::env;
use std::path::PathBuf;

/// Base config directory (~/.config/blog-deploy/, %APPDATA%\blog-deploy on Windows)
pub fn blog_deploy() -> Result<PathBuf> {
    #[cfg(windows)]
    {
        let appdata = env::var("APPDATA").map_err(|_| {
            Error::internal_unexpected(
                "APPDATA environment variable not set on Windows".to_string(),
            )
        })?;
        Ok(PathBuf::from(appdata).join("blog-deploy"))
    }

    #[cfg(not(windows))]
    {
        let home = env::var("HOME").map_err(|_| {
            Error::internal_unexpected(
                "HOME environment variable not set on Unix-like system".to_string(),
            )
        })?;
        Ok(PathBuf::from(home).join(".config").join("blog-deploy"))
    }
}

/// Global blog-deploy.json config file path
pub fn blog_deploy_json() -> Result<PathBuf> {
    Ok(blog_deploy()?.join("blog-deploy.json"))
}
