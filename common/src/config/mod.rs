//! Settings storage: a content provider reads and writes raw text, a
//! serializer maps it to a typed config, and `ConfigManager` validates and caches.

mod config_content_provider;
mod config_manager;
mod config_serializer;
mod validate;

pub use config_content_provider::{ConfigContentProvider, FileContentConfigProvider};
pub use config_manager::ConfigManager;
pub use config_serializer::{ConfigSerializer, YamlConfigSerializer};
pub use validate::Validate;
