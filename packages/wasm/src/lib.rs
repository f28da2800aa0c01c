//! JSON-in/JSON-out bindings for a browser UI.
//!
//! Every exported function takes and returns JSON strings. The work is done
//! by the plain `*_json` functions so it can be tested off the wasm target.

use folio_editor::{resolve_background, OpOutcome, PageOp};
use folio_linter::{lint_catalog, LintOptions};
use folio_model::{Background, BlockCategory, BlockTemplate, DocumentType, Page, Registry, SequentialIds};
use folio_templates::{Catalog, TemplateCategory, TemplateSelector};
use serde::Serialize;
use wasm_bindgen::prelude::*;

#[wasm_bindgen(start)]
pub fn init() {
    console_error_panic_hook::set_once();
}

#[derive(Serialize)]
struct RegistryGroup {
    category: BlockCategory,
    templates: Vec<&'static BlockTemplate>,
}

#[derive(Serialize)]
struct OperationResult {
    page: Page,
    outcome: OpOutcome,
}

fn to_json<T: Serialize>(value: &T) -> Result<String, String> {
    serde_json::to_string(value).map_err(|e| format!("Serialization error: {}", e))
}

fn parse<T: serde::de::DeserializeOwned>(json: &str, what: &str) -> Result<T, String> {
    serde_json::from_str(json).map_err(|e| format!("Invalid {}: {}", what, e))
}

fn js_error(message: String) -> JsValue {
    JsValue::from_str(&message)
}

pub fn block_registry_json() -> Result<String, String> {
    let groups = Registry::grouped()
        .into_iter()
        .map(|(category, templates)| RegistryGroup { category, templates })
        .collect::<Vec<_>>();
    to_json(&groups)
}

pub fn list_templates_json(document_type: &str, category: Option<String>) -> Result<String, String> {
    let document_type = document_type.parse::<DocumentType>()?;
    let category = category.map(|c| c.parse::<TemplateCategory>()).transpose()?;

    let mut selector = TemplateSelector::for_type(Catalog::bundled(), document_type);
    selector.set_category(category);
    to_json(&selector.visible())
}

pub fn instantiate_template_json(template_id: &str, id_seed: &str) -> Result<String, String> {
    let template = Catalog::bundled().resolve(template_id).map_err(|e| e.to_string())?;
    let document = folio_templates::instantiate(&template, &mut SequentialIds::from_seed(id_seed));
    to_json(&document)
}

pub fn apply_operation_json(page_json: &str, op_json: &str, id_seed: &str) -> Result<String, String> {
    let mut page: Page = parse(page_json, "page")?;
    let op: PageOp = parse(op_json, "operation")?;

    let outcome = op
        .apply(&mut page, &mut SequentialIds::from_seed(id_seed))
        .map_err(|e| e.to_string())?;
    to_json(&OperationResult { page, outcome })
}

pub fn resolve_background_json(background_json: &str) -> Result<String, String> {
    let background: Background = parse(background_json, "background")?;
    to_json(&resolve_background(&background))
}

pub fn lint_catalog_json(catalog_json: &str) -> Result<String, String> {
    let catalog = Catalog::from_json(catalog_json).map_err(|e| e.to_string())?;
    to_json(&lint_catalog(&catalog, LintOptions::default()))
}

/// Block templates grouped by category, for the add-block menu
#[wasm_bindgen(js_name = blockRegistry)]
pub fn block_registry() -> Result<String, JsValue> {
    block_registry_json().map_err(js_error)
}

/// Templates for a document type, blank first, optionally filtered by category
#[wasm_bindgen(js_name = listTemplates)]
pub fn list_templates(document_type: &str, category: Option<String>) -> Result<String, JsValue> {
    list_templates_json(document_type, category).map_err(js_error)
}

/// Instantiate a template. Ids are `<idSeed>-<n>`; pass a fresh seed per call.
#[wasm_bindgen(js_name = instantiateTemplate)]
pub fn instantiate_template(template_id: &str, id_seed: &str) -> Result<String, JsValue> {
    instantiate_template_json(template_id, id_seed).map_err(js_error)
}

/// Apply a page operation; returns `{ page, outcome }`
#[wasm_bindgen(js_name = applyOperation)]
pub fn apply_operation(page_json: &str, op_json: &str, id_seed: &str) -> Result<String, JsValue> {
    apply_operation_json(page_json, op_json, id_seed).map_err(js_error)
}

#[wasm_bindgen(js_name = resolveBackground)]
pub fn resolve_background_js(background_json: &str) -> Result<String, JsValue> {
    resolve_background_json(background_json).map_err(js_error)
}

#[wasm_bindgen(js_name = lintCatalog)]
pub fn lint_catalog_js(catalog_json: &str) -> Result<String, JsValue> {
    lint_catalog_json(catalog_json).map_err(js_error)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::{json, Value};

    fn value(json: &str) -> Value {
        serde_json::from_str(json).unwrap()
    }

    #[test]
    fn test_block_registry_groups() {
        let groups = value(&block_registry_json().unwrap());
        assert_eq!(groups.as_array().unwrap().len(), 4);
        assert_eq!(groups[0]["category"], "Text");
        assert_eq!(groups[0]["templates"][0]["type"], "heading");
        assert_eq!(groups[0]["templates"][0]["defaultContent"]["text"], "Heading");
    }

    #[test]
    fn test_registry_default_seeds_an_operation() {
        let groups = value(&block_registry_json().unwrap());
        let stat_card = groups
            .as_array()
            .unwrap()
            .iter()
            .flat_map(|g| g["templates"].as_array().unwrap())
            .find(|t| t["type"] == "stat-card")
            .unwrap()
            .clone();

        let kind = stat_card["type"].clone();
        let content = stat_card["defaultContent"].clone();

        let page = json!({ "id": "p", "name": "Page", "blocks": [] }).to_string();
        let op = json!({
            "op": "add-block",
            "seed": { "type": kind, "content": content }
        })
        .to_string();

        let result = value(&apply_operation_json(&page, &op, "reg").unwrap());
        assert_eq!(result["page"]["blocks"][0]["content"]["label"], "Label");
        assert_eq!(result["page"]["blocks"][0]["type"], "stat-card");
    }

    #[test]
    fn test_list_templates_blank_first() {
        let templates = value(&list_templates_json("case-study", None).unwrap());
        assert_eq!(templates[0]["id"], "blank-case-study");

        assert!(list_templates_json("novel", None).is_err());
        assert!(list_templates_json("case-study", Some("fiction".to_string())).is_err());
    }

    #[test]
    fn test_instantiate_uses_seed() {
        let document = value(&instantiate_template_json("blank-proposal", "ui").unwrap());
        assert_eq!(document["id"], "ui-1");
        assert_eq!(document["pages"][0]["blocks"][0]["type"], "heading");

        assert!(instantiate_template_json("missing", "ui").is_err());
    }

    #[test]
    fn test_apply_operation() {
        let page = json!({ "id": "p", "name": "Page", "blocks": [] }).to_string();
        let op = json!({
            "op": "add-block",
            "seed": { "type": "stat-card", "content": { "value": "0", "label": "Label" } }
        })
        .to_string();

        let result = value(&apply_operation_json(&page, &op, "op").unwrap());
        assert_eq!(result["outcome"]["created"], "op-1");
        assert_eq!(result["page"]["blocks"][0]["content"]["label"], "Label");

        assert!(apply_operation_json(&page, "{}", "op").is_err());
    }

    #[test]
    fn test_resolve_background() {
        let resolved = value(&resolve_background_json(r##"{ "type": "gradient", "from": "#000", "to": "#fff" }"##).unwrap());
        assert_eq!(resolved["fill"]["css"], "linear-gradient(135deg, #000, #fff)");
        assert_eq!(resolved["scrim"], "none");
    }

    #[test]
    fn test_lint_bundled_catalog() {
        let json = Catalog::bundled().to_json().unwrap();
        let diagnostics = value(&lint_catalog_json(&json).unwrap());
        assert!(diagnostics.as_array().unwrap().is_empty());
    }
}
