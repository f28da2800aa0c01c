//! # Template Selector
//!
//! Lists the templates available for one document type, with a synthesized
//! blank template first, and turns the chosen one into a document.

use crate::{instantiate, Catalog, DocumentTemplate, TemplateCategory};
use folio_model::{Document, DocumentType, IdGenerator};
use tracing::debug;

pub struct TemplateSelector<'a> {
    document_type: DocumentType,
    blank: DocumentTemplate,
    templates: Vec<&'a DocumentTemplate>,
    category: Option<TemplateCategory>,
    selected: Option<String>,
}

impl<'a> TemplateSelector<'a> {
    pub fn for_type(catalog: &'a Catalog, document_type: DocumentType) -> Self {
        Self {
            document_type,
            blank: DocumentTemplate::blank(document_type),
            templates: catalog.for_type(document_type).collect(),
            category: None,
            selected: None,
        }
    }

    pub fn document_type(&self) -> DocumentType {
        self.document_type
    }

    /// Categories offered as filters, blank first
    pub fn categories(&self) -> Vec<TemplateCategory> {
        let mut categories = vec![self.blank.category];
        for template in &self.templates {
            if !categories.contains(&template.category) {
                categories.push(template.category);
            }
        }
        categories
    }

    pub fn category(&self) -> Option<TemplateCategory> {
        self.category
    }

    /// Filter by category (`None` shows everything). A selection that is
    /// filtered out is dropped.
    pub fn set_category(&mut self, category: Option<TemplateCategory>) {
        self.category = category;
        if let Some(id) = &self.selected {
            if !self.visible().iter().any(|t| &t.id == id) {
                self.selected = None;
            }
        }
    }

    /// Templates currently listed, blank first
    pub fn visible(&self) -> Vec<&DocumentTemplate> {
        std::iter::once(&self.blank)
            .chain(self.templates.iter().copied())
            .filter(|t| self.category.map_or(true, |c| t.category == c))
            .collect()
    }

    /// Highlight a template. Ids that are not listed are ignored.
    pub fn select(&mut self, id: &str) -> bool {
        if self.visible().iter().any(|t| t.id == id) {
            self.selected = Some(id.to_string());
            true
        } else {
            debug!(template_id = %id, "Ignoring selection of unlisted template");
            false
        }
    }

    pub fn selected(&self) -> Option<&DocumentTemplate> {
        let id = self.selected.as_deref()?;
        self.visible().into_iter().find(|t| t.id == id)
    }

    /// Instantiate the highlighted template
    pub fn confirm(&self, ids: &mut dyn IdGenerator) -> Option<Document> {
        self.selected().map(|template| instantiate(template, ids))
    }

    /// Select and confirm in one step
    pub fn double_click(&mut self, id: &str, ids: &mut dyn IdGenerator) -> Option<Document> {
        if self.select(id) {
            self.confirm(ids)
        } else {
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use folio_model::SequentialIds;

    #[test]
    fn test_blank_is_listed_first() {
        let selector = TemplateSelector::for_type(Catalog::bundled(), DocumentType::Presentation);
        let ids: Vec<_> = selector.visible().iter().map(|t| t.id.as_str()).collect();
        assert_eq!(ids, vec!["blank-presentation", "brand-presentation", "product-pitch"]);
    }

    #[test]
    fn test_category_filter() {
        let mut selector = TemplateSelector::for_type(Catalog::bundled(), DocumentType::Presentation);
        selector.set_category(Some(TemplateCategory::Marketing));

        let ids: Vec<_> = selector.visible().iter().map(|t| t.id.as_str()).collect();
        assert_eq!(ids, vec!["brand-presentation"]);
        assert_eq!(
            selector.categories(),
            vec![TemplateCategory::Blank, TemplateCategory::Marketing, TemplateCategory::Business]
        );
    }

    #[test]
    fn test_filter_drops_hidden_selection() {
        let mut selector = TemplateSelector::for_type(Catalog::bundled(), DocumentType::Presentation);
        assert!(selector.select("product-pitch"));

        selector.set_category(Some(TemplateCategory::Marketing));
        assert!(selector.selected().is_none());
    }

    #[test]
    fn test_select_unlisted_is_ignored() {
        let mut selector = TemplateSelector::for_type(Catalog::bundled(), DocumentType::Whitepaper);
        assert!(!selector.select("product-pitch"));
        assert!(selector.confirm(&mut SequentialIds::from_seed("x")).is_none());
    }

    #[test]
    fn test_double_click_instantiates() {
        let mut selector = TemplateSelector::for_type(Catalog::bundled(), DocumentType::CaseStudy);
        let doc = selector
            .double_click("blank-case-study", &mut SequentialIds::from_seed("x"))
            .unwrap();

        assert_eq!(doc.document_type, DocumentType::CaseStudy);
        assert_eq!(doc.pages.len(), 1);
        assert_eq!(doc.pages[0].blocks.len(), 1);
    }
}
