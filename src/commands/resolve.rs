use std::path::PathBuf;

use anyhow::Result;
use slugmap::{Config, DataDirIndexSource, EntityKind, SlugResolver};

use crate::ui::json;

pub fn cmd_resolve(
    config: &Config,
    query: &str,
    kind: EntityKind,
    data_dir: Option<PathBuf>,
    prebuilt: bool,
    json: bool,
) -> Result<()> {
    let source = DataDirIndexSource::new(super::data_dir(config, data_dir))
        .prefer_prebuilt(prebuilt || config.resolver.prefer_prebuilt);
    let resolver = SlugResolver::new(source);

    let resolution = resolver.resolve_detailed(kind, query);
    tracing::debug!(
        "resolved {:?} as {} -> {} (matched: {})",
        query,
        kind.display_name(),
        resolution.slug,
        resolution.matched
    );

    if json {
        let mut event = json::to_value(&resolution);
        if let Some(map) = event.as_object_mut() {
            map.insert("event".to_string(), "resolve".into());
            map.insert("kind".to_string(), json::to_value(&kind));
        }
        let _ = json::emit(event);
    } else {
        println!("{}", resolution.slug);
    }
    Ok(())
}
