//! 弹窗状态
//!
//! 每个弹窗只有可见与否；同一时间最多显示一个

use crate::models::Feather;

/// 弹窗内容
#[derive(Debug, Clone, PartialEq)]
pub enum ModalKind {
    /// 羽毛花纹指南
    MotifGuide,
    /// 羽毛类别说明
    CategoryGuide,
    /// 颜色深浅指南
    ColourGuide,
    /// 单根羽毛的图片
    FeatherImage {
        title: String,
        image: Option<String>,
        caption: String,
    },
}

impl ModalKind {
    pub fn for_feather(feather: &Feather) -> Self {
        ModalKind::FeatherImage {
            title: format!("{} ({})", feather.name, feather.code()),
            image: feather.image.clone(),
            caption: format!(
                "尺寸: {}  颜色: {}  花纹: {}",
                feather.size_label(),
                or_none(&feather.colour),
                or_none(&feather.motif)
            ),
        }
    }

    pub fn title(&self) -> &str {
        match self {
            ModalKind::MotifGuide => "花纹指南",
            ModalKind::CategoryGuide => "羽毛类别",
            ModalKind::ColourGuide => "颜色深浅指南",
            ModalKind::FeatherImage { title, .. } => title,
        }
    }

    /// 弹窗正文
    pub fn body(&self) -> Vec<String> {
        match self {
            ModalKind::MotifGuide => vec![
                "图片: assets/images/exemple motif.jpg".to_string(),
                String::new(),
                "uni: 纯色  taches: 斑点  barres: 横纹  liseré: 镶边".to_string(),
            ],
            ModalKind::CategoryGuide => vec![
                "图鉴中的羽毛按着生的解剖部位分为 3 类。".to_string(),
                "初级飞羽 (P) 附着在指骨与掌骨上，次级飞羽 (S) 着生于尺骨。".to_string(),
                "尾羽 (R) 长在尾脂腺附近，构成尾部。".to_string(),
                "每一类中的羽毛依次编号。".to_string(),
            ],
            ModalKind::ColourGuide => vec!["图片: assets/images/nuance.jpg".to_string()],
            ModalKind::FeatherImage { image, caption, .. } => vec![
                format!("图片: {}", image.as_deref().unwrap_or("(无)")),
                String::new(),
                caption.clone(),
            ],
        }
    }
}

fn or_none(value: &str) -> &str {
    if value.is_empty() { "(无)" } else { value }
}

/// 当前弹窗，None 表示隐藏
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Modal {
    open: Option<ModalKind>,
}

impl Modal {
    /// 打开弹窗，替换已打开的弹窗
    pub fn show(&mut self, kind: ModalKind) {
        self.open = Some(kind);
    }

    /// 关闭弹窗，返回之前是否可见
    pub fn hide(&mut self) -> bool {
        self.open.take().is_some()
    }

    pub fn is_open(&self) -> bool {
        self.open.is_some()
    }

    pub fn current(&self) -> Option<&ModalKind> {
        self.open.as_ref()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::FeatherKind;

    #[test]
    fn test_show_replaces_and_hide_closes() {
        let mut modal = Modal::default();
        assert!(!modal.is_open());
        assert!(!modal.hide());

        modal.show(ModalKind::MotifGuide);
        modal.show(ModalKind::ColourGuide);
        assert_eq!(modal.current(), Some(&ModalKind::ColourGuide));

        assert!(modal.hide());
        assert!(!modal.is_open());
    }

    #[test]
    fn test_feather_image_content() {
        let mut feather = crate::models::Feather::new("Merle noir", FeatherKind::Primary, 7, 1);
        feather.colour = "noir".to_string();
        let kind = ModalKind::for_feather(&feather);

        assert_eq!(kind.title(), "Merle noir (P7)");
        let body = kind.body();
        assert_eq!(body[0], "图片: (无)");
        assert!(body[2].contains("10-20 cm"));
        assert!(body[2].contains("花纹: (无)"));
    }
}
