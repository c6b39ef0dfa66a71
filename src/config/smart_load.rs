use figment::Figment;
use figment::providers::{Format, Json, Toml, Yaml};
use std::path::Path;

/// Read a config file in the format named by its extension, TOML otherwise.
/// The result is itself a provider, ready for `Figment::merge`.
pub fn auto<P: AsRef<Path>>(path: P) -> Figment {
    let path = path.as_ref();
    let extension = path
        .extension()
        .and_then(|ext| ext.to_str())
        .map(str::to_ascii_lowercase)
        .unwrap_or_default();

    match extension.as_str() {
        "json" => Figment::from(Json::file(path)),
        "yaml" | "yml" => Figment::from(Yaml::file(path)),
        "toml" => Figment::from(Toml::file(path)),
        other => {
            tracing::debug!("Unknown config extension '{}', reading {} as TOML", other, path.display());
            Figment::from(Toml::file(path))
        }
    }
}
