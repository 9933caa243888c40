//! 用户设置，存放于配置目录下的 config.toml

use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

use crate::models::Category;

pub const APP_DIR_NAME: &str = "dortmund-places";

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    /// 自定义地点文件，缺省使用内置数据
    pub places_file: Option<PathBuf>,
    pub start_category: Category,
    /// 终端宽度不小于该值时使用列表+详情布局
    pub wide_layout_min_width: u16,
    pub log_filter: String,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            places_file: None,
            start_category: Category::Park,
            wide_layout_min_width: 100,
            log_filter: "info".to_string(),
        }
    }
}

/// 设置的来源，日志初始化之后由调用方记录
#[derive(Debug, Clone, PartialEq)]
pub enum SettingsSource {
    File,
    Missing,
    /// 文件存在但解析失败，附带错误信息
    Malformed(String),
}

impl Settings {
    /// 读取设置；文件缺失或无法解析时返回默认值
    ///
    /// 这里不写日志：设置决定日志过滤级别，读取时订阅者还未安装。
    pub fn load(path: &Path) -> (Self, SettingsSource) {
        match fs::read_to_string(path) {
            Ok(s) => match toml::from_str(&s) {
                Ok(settings) => (settings, SettingsSource::File),
                Err(e) => (Self::default(), SettingsSource::Malformed(e.to_string())),
            },
            Err(_) => (Self::default(), SettingsSource::Missing),
        }
    }
}

/// 默认设置文件路径 (~/.config/dortmund-places/config.toml)
pub fn default_settings_path() -> PathBuf {
    dirs::config_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join(APP_DIR_NAME)
        .join("config.toml")
}

/// 日志目录 (~/.local/share/dortmund-places/logs)
pub fn log_dir() -> PathBuf {
    dirs::data_local_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join(APP_DIR_NAME)
        .join("logs")
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn test_missing_file_gives_defaults() {
        let dir = tempdir().unwrap();
        let (settings, source) = Settings::load(&dir.path().join("config.toml"));
        assert_eq!(settings, Settings::default());
        assert_eq!(source, SettingsSource::Missing);
    }

    #[test]
    fn test_partial_file_keeps_other_defaults() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("config.toml");
        fs::write(&path, "start_category = \"museum\"\nwide_layout_min_width = 80\n").unwrap();

        let (settings, source) = Settings::load(&path);
        assert_eq!(source, SettingsSource::File);
        assert_eq!(settings.start_category, Category::Museum);
        assert_eq!(settings.wide_layout_min_width, 80);
        assert_eq!(settings.places_file, None);
        assert_eq!(settings.log_filter, "info");
    }

    #[test]
    fn test_malformed_file_gives_defaults() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("config.toml");
        fs::write(&path, "wide_layout_min_width = \"wide\"").unwrap();

        let (settings, source) = Settings::load(&path);
        assert_eq!(settings, Settings::default());
        // 错误原因交给调用方，在日志就绪后再记录
        match source {
            SettingsSource::Malformed(reason) => assert!(!reason.is_empty()),
            other => panic!("expected malformed source, got {other:?}"),
        }
    }
}
