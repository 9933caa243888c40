use std::collections::HashSet;
use std::fs;
use std::path::Path;

use tracing::{debug, info};

use crate::error::{AppError, Result};
use crate::models::{Category, Place, PlacesData};

/// 内置的多特蒙德地点数据
pub fn local_places() -> Vec<Place> {
    vec![
        Place::new(
            "westfalenpark",
            "Westfalenpark",
            "A large city park with the Florian TV tower, a rose garden with thousands of varieties and open lawns for summer concerts.",
            Category::Park,
        ),
        Place::new(
            "rombergpark",
            "Botanischer Garten Rombergpark",
            "Botanical garden in an old manor park in the south of the city, with an arboretum, greenhouses and quiet ponds.",
            Category::Park,
        ),
        Place::new(
            "fredenbaumpark",
            "Fredenbaumpark",
            "Wooded park in the north with a lake, rowing boats and the Big Tipi adventure playground.",
            Category::Park,
        ),
        Place::new(
            "fussballmuseum",
            "Deutsches Fußballmuseum",
            "The national football museum opposite the main station, covering the history of German football from its beginnings to today.",
            Category::Museum,
        ),
        Place::new(
            "dortmunder-u",
            "Dortmunder U",
            "Former brewery tower turned centre for art and creativity, home of the Museum Ostwall and its modern art collection.",
            Category::Museum,
        ),
        Place::new(
            "zeche-zollern",
            "Zeche Zollern",
            "Historic colliery with Art Nouveau machine hall, part of the industrial heritage museum of the region.",
            Category::Museum,
        ),
        Place::new(
            "hoevels",
            "Hövels Hausbrauerei",
            "Brewpub near the city wall serving its own beer and regional Westphalian dishes.",
            Category::Restaurant,
        ),
        Place::new(
            "wenkers",
            "Wenkers am Markt",
            "Traditional brewery inn at the old market square with a large beer garden.",
            Category::Restaurant,
        ),
        Place::new(
            "thier-galerie",
            "Thier-Galerie",
            "Shopping centre on the Westenhellweg with around 160 shops on several floors.",
            Category::ShoppingCenter,
        ),
        Place::new(
            "westenhellweg",
            "Westenhellweg",
            "One of the busiest shopping streets in Germany, running through the pedestrian zone of the city centre.",
            Category::ShoppingCenter,
        ),
    ]
}

/// 默认选中的地点
pub fn default_place() -> Place {
    local_places()
        .into_iter()
        .next()
        .unwrap_or_else(|| Place::new("", "", "", Category::Park))
}

/// 从TOML文件加载地点
pub fn load_places(path: &Path) -> Result<Vec<Place>> {
    let content = fs::read_to_string(path)?;
    let data: PlacesData = toml::from_str(&content)?;

    if data.places.is_empty() {
        return Err(AppError::EmptyPlaces(path.display().to_string()));
    }

    let mut seen = HashSet::new();
    if let Some(dup) = data.places.iter().find(|p| !seen.insert(p.id.as_str())) {
        return Err(AppError::DuplicateId(dup.id.clone()));
    }

    info!(path = %path.display(), count = data.places.len(), "places loaded");
    Ok(data.places)
}

/// 保存地点到TOML文件
pub fn save_places(places: &[Place], path: &Path) -> Result<()> {
    let data = PlacesData {
        places: places.to_vec(),
    };
    let content = toml::to_string_pretty(&data)?;

    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            fs::create_dir_all(parent)?;
        }
    }
    fs::write(path, content)?;

    debug!(path = %path.display(), count = places.len(), "places written");
    Ok(())
}
