use crate::{
    constants::APP_FILE_EXTENSION,
    error::{Error, Result},
};
use regex::Regex;

const APP_NAME_PATTERN: &str = r"^[A-Za-z_][A-Za-z0-9_]*(::[A-Za-z_][A-Za-z0-9_]*)*$";

/// Checks that `name` is a `::`-separated module name such as `My::App`.
pub fn validate_app_name(name: &str) -> Result<()> {
    let pattern = Regex::new(APP_NAME_PATTERN).map_err(anyhow::Error::from)?;
    if pattern.is_match(name) {
        Ok(())
    } else {
        Err(Error::InvalidAppNameError { name: name.to_string() })
    }
}

/// `My::App` -> `My/App`
pub fn app_file_stem(name: &str) -> String {
    name.split("::").collect::<Vec<_>>().join("/")
}

/// `My::App` -> `My/App.pm`
pub fn app_file_path(name: &str) -> String {
    format!("{}.{}", app_file_stem(name), APP_FILE_EXTENSION)
}

/// `My::App` -> `My-App`
pub fn clean_name(name: &str) -> String {
    name.replace("::", "-")
}

/// Shebang line placed in generated scripts.
pub fn perl_interpreter() -> String {
    if cfg!(windows) {
        "#!perl".to_string()
    } else {
        "#!/usr/bin/env perl".to_string()
    }
}
