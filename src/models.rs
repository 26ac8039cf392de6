use chrono::{DateTime, Local};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::error::{AtlasError, Result};
use crate::slider::{CATEGORY_COUNT, Category, SelectedRange};

/// 尺寸类别的显示名称，顺序与滑块类别一致
pub const SIZE_CATEGORIES: [&str; CATEGORY_COUNT] = ["< 10 cm", "10-20 cm", "20-35 cm", "35-60 cm"];

/// 羽毛类型（按解剖部位）
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FeatherKind {
    Primary,   // 初级飞羽 P
    Secondary, // 次级飞羽 S
    Rectrix,   // 尾羽 R
}

impl FeatherKind {
    pub fn code(self) -> char {
        match self {
            FeatherKind::Primary => 'P',
            FeatherKind::Secondary => 'S',
            FeatherKind::Rectrix => 'R',
        }
    }
}

fn new_id() -> String {
    Uuid::new_v4().to_string()
}

/// 图鉴中的一根羽毛
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Feather {
    #[serde(default = "new_id")]
    pub id: String,
    pub name: String,
    pub kind: FeatherKind,
    pub number: u32,
    /// 尺寸类别 (0..=3)
    pub size: usize,
    #[serde(default)]
    pub colour: String,
    #[serde(default)]
    pub motif: String,
    #[serde(default)]
    pub image: Option<String>,
}

impl Feather {
    pub fn new(name: &str, kind: FeatherKind, number: u32, size: usize) -> Self {
        Self {
            id: new_id(),
            name: name.to_string(),
            kind,
            number,
            size,
            colour: String::new(),
            motif: String::new(),
            image: None,
        }
    }

    /// 如 "P7"
    pub fn code(&self) -> String {
        format!("{}{}", self.kind.code(), self.number)
    }

    pub fn size_label(&self) -> &'static str {
        SIZE_CATEGORIES.get(self.size).copied().unwrap_or("?")
    }

    pub fn category(&self) -> Option<Category> {
        Category::new(self.size)
    }
}

/// TOML 文件结构
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CatalogData {
    pub meta: CatalogMeta,
    #[serde(default)]
    pub feathers: Vec<Feather>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CatalogMeta {
    pub version: String,
    #[serde(default)]
    pub updated_at: Option<DateTime<Local>>,
}

impl Default for CatalogMeta {
    fn default() -> Self {
        Self {
            version: "1.0".to_string(),
            updated_at: None,
        }
    }
}

/// 运行时图鉴
#[derive(Debug, Clone, Default)]
pub struct Catalog {
    pub meta: CatalogMeta,
    pub feathers: Vec<Feather>,
}

impl Catalog {
    pub fn from_data(data: CatalogData) -> Result<Self> {
        if let Some(bad) = data.feathers.iter().find(|f| f.size >= CATEGORY_COUNT) {
            return Err(AtlasError::Validation(format!(
                "羽毛 '{}' 的尺寸类别 {} 超出范围 (0..={})",
                bad.name,
                bad.size,
                CATEGORY_COUNT - 1
            )));
        }

        Ok(Self {
            meta: data.meta,
            feathers: data.feathers,
        })
    }

    pub fn to_data(&self) -> CatalogData {
        CatalogData {
            meta: CatalogMeta {
                version: self.meta.version.clone(),
                updated_at: Some(Local::now()),
            },
            feathers: self.feathers.clone(),
        }
    }

    /// 尺寸类别落在区间内的羽毛下标，保持文件顺序
    pub fn visible(&self, range: SelectedRange) -> Vec<usize> {
        self.feathers
            .iter()
            .enumerate()
            .filter(|(_, f)| f.category().is_some_and(|c| range.contains_category(c)))
            .map(|(i, _)| i)
            .collect()
    }

    /// 内置示例图鉴
    pub fn sample() -> Self {
        let entries: [(&str, FeatherKind, u32, usize, &str, &str); 10] = [
            ("Mésange charbonnière", FeatherKind::Rectrix, 1, 0, "gris-bleu", "uni"),
            ("Rouge-gorge familier", FeatherKind::Primary, 5, 0, "brun", "uni"),
            ("Merle noir", FeatherKind::Primary, 7, 1, "noir", "uni"),
            ("Pic épeiche", FeatherKind::Primary, 6, 1, "noir et blanc", "taches"),
            ("Geai des chênes", FeatherKind::Secondary, 3, 1, "bleu", "barres"),
            ("Pigeon ramier", FeatherKind::Primary, 8, 2, "gris", "liseré"),
            ("Faucon crécerelle", FeatherKind::Rectrix, 4, 2, "roux", "barres"),
            ("Chouette hulotte", FeatherKind::Secondary, 2, 2, "brun", "barres"),
            ("Buse variable", FeatherKind::Primary, 9, 3, "brun", "barres"),
            ("Héron cendré", FeatherKind::Primary, 10, 3, "gris", "uni"),
        ];

        let feathers = entries
            .into_iter()
            .map(|(name, kind, number, size, colour, motif)| {
                let mut feather = Feather::new(name, kind, number, size);
                feather.colour = colour.to_string();
                feather.motif = motif.to_string();
                feather
            })
            .collect();

        Self {
            meta: CatalogMeta::default(),
            feathers,
        }
    }
}
