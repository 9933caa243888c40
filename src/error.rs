use thiserror::Error;

/// 应用边缘（终端、地点文件、配置文件）的错误类型
#[derive(Error, Debug)]
pub enum AppError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("failed to parse TOML: {0}")]
    Parse(#[from] toml::de::Error),

    #[error("failed to write TOML: {0}")]
    Serialize(#[from] toml::ser::Error),

    /// 地点文件存在但没有任何地点
    #[error("places file `{0}` contains no places")]
    EmptyPlaces(String),

    /// 同一个 id 出现多次，列表按 id 定位焦点
    #[error("duplicate place id `{0}`")]
    DuplicateId(String),
}

pub type Result<T> = std::result::Result<T, AppError>;
