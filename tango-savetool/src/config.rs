use std::io::Read;

#[derive(serde::Serialize, serde::Deserialize, Clone, Copy, Debug, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum Language {
    En,
    Ja,
}

impl From<Language> for tango_saveedit::rom::Language {
    fn from(language: Language) -> Self {
        match language {
            Language::En => tango_saveedit::rom::Language::En,
            Language::Ja => tango_saveedit::rom::Language::Ja,
        }
    }
}

#[derive(serde::Serialize, serde::Deserialize, Clone, Copy, Debug, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum RebuildOutput {
    Dump,
    Raw,
}

#[derive(serde::Serialize, serde::Deserialize, Clone, Debug, PartialEq, Eq)]
#[serde(default)]
pub struct Config {
    pub roms_path: Option<std::path::PathBuf>,
    pub saves_path: Option<std::path::PathBuf>,
    /// Unset follows the region of the ROM.
    pub language: Option<Language>,
    pub rebuild_output: RebuildOutput,
}

impl Default for Config {
    fn default() -> Self {
        let data_dir = directories_next::UserDirs::new()
            .and_then(|user_dirs| user_dirs.document_dir().map(|dir| dir.join(DATA_DIR_NAME)));
        Self {
            roms_path: data_dir.as_ref().map(|dir| dir.join("roms")),
            saves_path: data_dir.as_ref().map(|dir| dir.join("saves")),
            language: None,
            rebuild_output: RebuildOutput::Dump,
        }
    }
}

const DATA_DIR_NAME: &str = "Tango";

pub fn get_project_dirs() -> Option<directories_next::ProjectDirs> {
    directories_next::ProjectDirs::from("com.tangobattle", "", "Tango")
}

fn get_config_path() -> Result<std::path::PathBuf, anyhow::Error> {
    Ok(get_project_dirs()
        .ok_or_else(|| anyhow::anyhow!("could not get tango project directory"))?
        .config_dir()
        .join("savetool.json"))
}

impl Config {
    /// Reads the config at `path`, or the default location. Missing or unparseable files give the defaults.
    pub fn load_or_default(path: Option<&std::path::Path>) -> Result<Self, anyhow::Error> {
        let config_path = match path {
            Some(path) => path.to_path_buf(),
            None => get_config_path()?,
        };
        match std::fs::File::open(&config_path) {
            Ok(mut file) => {
                let mut contents = String::new();
                file.read_to_string(&mut contents)?;
                match serde_json::from_str(&contents) {
                    Ok(config) => Ok(config),
                    Err(err) => {
                        log::error!("error loading config {}, using defaults: {}", config_path.display(), err);
                        Ok(Self::default())
                    }
                }
            }
            Err(ref e) if e.kind() == std::io::ErrorKind::NotFound => Ok(Self::default()),
            Err(e) => Err(e.into()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_config_is_default() {
        let dir = tempfile::tempdir().unwrap();
        let config = Config::load_or_default(Some(&dir.path().join("missing.json"))).unwrap();
        assert_eq!(config, Config::default());
    }

    #[test]
    fn test_bad_config_is_default() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.json");
        std::fs::write(&path, "{ not json").unwrap();
        assert_eq!(Config::load_or_default(Some(&path)).unwrap(), Config::default());
    }

    #[test]
    fn test_partial_config() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.json");
        std::fs::write(&path, r#"{"roms_path": "/tmp/roms", "language": "ja", "rebuild_output": "raw"}"#).unwrap();
        let config = Config::load_or_default(Some(&path)).unwrap();
        assert_eq!(config.roms_path, Some(std::path::PathBuf::from("/tmp/roms")));
        assert_eq!(config.saves_path, Config::default().saves_path);
        assert_eq!(config.language, Some(Language::Ja));
        assert_eq!(config.rebuild_output, RebuildOutput::Raw);
    }
}
