mod data;

use std::env;

use tempfile::TempDir;

/// RAII guard for environment variables - automatically restores on drop
pub(crate) struct EnvGuard {
    key: &'static str,
    original: Option<String>,
}

impl EnvGuard {
    pub(crate) fn set(key: &'static str, value: &str) -> Self {
        unsafe {
            let original = env::var(key).ok();
            env::set_var(key, value);
            Self { key, original }
        }
    }

    pub(crate) fn remove(key: &'static str) -> Self {
        unsafe {
            let original = env::var(key).ok();
            env::remove_var(key);
            Self { key, original }
        }
    }
}

impl Drop for EnvGuard {
    fn drop(&mut self) {
        unsafe {
            match &self.original {
                Some(val) => env::set_var(self.key, val),
                None => env::remove_var(self.key),
            }
        }
    }
}

/// Temp config directory with TS_CONFIG_DIR pointing at it. A stray PORT
/// from the host environment is hidden for the duration.
pub(crate) struct ConfigDir {
    pub(crate) temp: TempDir,
    _dir: EnvGuard,
    _port: EnvGuard,
}

impl ConfigDir {
    pub(crate) fn write_toml(&self, contents: &str) {
        std::fs::write(self.temp.path().join(crate::CONFIG_FILE_NAME), contents).unwrap();
    }
}

pub(crate) fn setup_config_dir() -> ConfigDir {
    let temp = TempDir::new().unwrap();
    let dir = EnvGuard::set(crate::CONFIG_DIR_ENV, temp.path().to_str().unwrap());
    let port = EnvGuard::remove("PORT");
    ConfigDir {
        temp,
        _dir: dir,
        _port: port,
    }
}
