use martini_cnt::engine::config::TubeConfig;
use std::path::PathBuf;

pub struct AppConfig {
    pub output_dir: PathBuf,
    pub tube: TubeConfig,
}
