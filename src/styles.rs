//! Class names used by the pages, as declared in `assets/main.css`.

/// Logical style slots a page fills.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StyleName {
    Body,
    Title,
    Description,
    Footer,
}

impl StyleName {
    #[cfg(test)]
    pub const ALL: [StyleName; 4] = [Self::Body, Self::Title, Self::Description, Self::Footer];
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageStyles {
    pub body: &'static str,
    pub title: &'static str,
    pub description: &'static str,
    pub footer: &'static str,
}

impl PageStyles {
    pub const fn class(&self, name: StyleName) -> &'static str {
        match name {
            StyleName::Body => self.body,
            StyleName::Title => self.title,
            StyleName::Description => self.description,
            StyleName::Footer => self.footer,
        }
    }
}

pub const FORBIDDEN: PageStyles = PageStyles {
    body: "forbidden-body",
    title: "forbidden-title",
    description: "forbidden-description",
    footer: "forbidden-footer",
};

pub const HOME: PageStyles = PageStyles {
    body: "home-body",
    title: "home-title",
    description: "home-description",
    footer: "home-footer",
};
