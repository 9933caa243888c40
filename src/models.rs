use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::fmt;
use uuid::Uuid;

/// 地点分类（分组键）
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum Category {
    #[default]
    Park,
    Museum,
    Restaurant,
    ShoppingCenter,
}

impl Category {
    /// 显示与切换顺序
    pub const ALL: [Category; 4] = [
        Category::Park,
        Category::Museum,
        Category::Restaurant,
        Category::ShoppingCenter,
    ];

    pub fn label(self) -> &'static str {
        match self {
            Category::Park => "Parks",
            Category::Museum => "Museums",
            Category::Restaurant => "Restaurants",
            Category::ShoppingCenter => "Shopping",
        }
    }

    pub fn next(self) -> Self {
        let i = Self::ALL.iter().position(|c| *c == self).unwrap_or(0);
        Self::ALL[(i + 1) % Self::ALL.len()]
    }

    pub fn prev(self) -> Self {
        let i = Self::ALL.iter().position(|c| *c == self).unwrap_or(0);
        Self::ALL[(i + Self::ALL.len() - 1) % Self::ALL.len()]
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

fn new_place_id() -> String {
    Uuid::new_v4().to_string()
}

/// 地点
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Place {
    #[serde(default = "new_place_id")]
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub details: String,
    #[serde(default)]
    pub category: Category,
}

impl Place {
    pub fn new(id: impl Into<String>, name: impl Into<String>, details: impl Into<String>, category: Category) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            details: details.into(),
            category,
        }
    }
}

/// TOML文件结构
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct PlacesData {
    #[serde(default)]
    pub places: Vec<Place>,
}

/// 按分类分组，组内保持输入顺序
pub fn group_by_category(places: &[Place]) -> HashMap<Category, Vec<Place>> {
    let mut categories: HashMap<Category, Vec<Place>> = HashMap::new();
    for place in places {
        categories
            .entry(place.category)
            .or_default()
            .push(place.clone());
    }
    categories
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_group_keeps_order() {
        let places = vec![
            Place::new("1", "A", "", Category::Park),
            Place::new("2", "B", "", Category::Museum),
            Place::new("3", "C", "", Category::Park),
        ];
        let grouped = group_by_category(&places);

        let parks: Vec<&str> = grouped[&Category::Park].iter().map(|p| p.id.as_str()).collect();
        assert_eq!(parks, vec!["1", "3"]);
        assert_eq!(grouped[&Category::Museum].len(), 1);
        assert!(!grouped.contains_key(&Category::Restaurant));
    }

    #[test]
    fn test_category_cycle() {
        assert_eq!(Category::Park.next(), Category::Museum);
        assert_eq!(Category::ShoppingCenter.next(), Category::Park);
        assert_eq!(Category::Park.prev(), Category::ShoppingCenter);
        for c in Category::ALL {
            assert_eq!(c.next().prev(), c);
        }
    }

    #[test]
    fn test_missing_id_gets_generated() {
        let data: PlacesData = toml::from_str(
            r#"
            [[places]]
            name = "Westfalenpark"
            category = "park"
            "#,
        )
        .unwrap();
        let place = &data.places[0];
        assert!(!place.id.is_empty());
        assert_eq!(place.details, "");
        assert_eq!(place.category, Category::Park);
    }

    #[test]
    fn test_category_snake_case() {
        let data: PlacesData = toml::from_str(
            r#"
            [[places]]
            id = "x"
            name = "Thier-Galerie"
            category = "shopping_center"
            "#,
        )
        .unwrap();
        assert_eq!(data.places[0].category, Category::ShoppingCenter);
    }
}
