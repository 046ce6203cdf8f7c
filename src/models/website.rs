//! Website, page and content block models for attendee landing sites.

use serde::{Deserialize, Serialize};

use super::{require, Entity, EntityKind, Id, Validate};
use crate::errors::{ClientError, ClientResult};

/// An attendee-facing website for a retreat.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Website {
    pub id: Id,
    #[serde(default)]
    pub name: String,
    pub retreat_id: Id,
    /// Pages in navigation order
    #[serde(default)]
    pub page_ids: Vec<Id>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub logo_image_id: Option<Id>,
}

impl Entity for Website {
    const KIND: EntityKind = EntityKind::Website;

    fn id(&self) -> Id {
        self.id
    }
}

/// A page on a website.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Page {
    pub id: Id,
    #[serde(default)]
    pub name: String,
    pub website_id: Id,
    /// Blocks in render order
    #[serde(default)]
    pub block_ids: Vec<Id>,
}

impl Entity for Page {
    const KIND: EntityKind = EntityKind::Page;

    fn id(&self) -> Id {
        self.id
    }
}

/// One collapsible section of an accordion block.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AccordionItem {
    pub header: String,
    /// Rich-text body as produced by the editor
    #[serde(default)]
    pub body: serde_json::Value,
}

/// Content of an accordion block.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct AccordionContent {
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub items: Vec<AccordionItem>,
}

/// Block payload, discriminated by the backend's `type` field.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", content = "content")]
pub enum BlockContent {
    /// Free-form rich text; the editor document is kept opaque
    #[serde(rename = "WYSIWYG")]
    Wysiwyg(serde_json::Value),
    #[serde(rename = "ACCORDION")]
    Accordion(AccordionContent),
}

impl BlockContent {
    pub fn type_name(&self) -> &'static str {
        match self {
            BlockContent::Wysiwyg(_) => "WYSIWYG",
            BlockContent::Accordion(_) => "ACCORDION",
        }
    }
}

/// A content block on a page.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Block {
    pub id: Id,
    pub page_id: Id,
    #[serde(flatten)]
    pub content: BlockContent,
}

impl Entity for Block {
    const KIND: EntityKind = EntityKind::Block;

    fn id(&self) -> Id {
        self.id
    }
}

/// Request body for creating a website.
#[derive(Debug, Clone, Serialize)]
pub struct NewWebsite {
    pub retreat_id: Id,
    pub name: String,
}

impl Validate for NewWebsite {
    fn validate(&self) -> ClientResult<()> {
        require("name", &self.name)
    }
}

/// Request body for adding a page to a website.
#[derive(Debug, Clone, Serialize)]
pub struct NewPage {
    pub website_id: Id,
    pub name: String,
}

impl Validate for NewPage {
    fn validate(&self) -> ClientResult<()> {
        require("name", &self.name)
    }
}

/// Request body for adding a block to a page.
#[derive(Debug, Clone, Serialize)]
pub struct NewBlock {
    pub page_id: Id,
    #[serde(flatten)]
    pub content: BlockContent,
}

impl Validate for NewBlock {
    fn validate(&self) -> ClientResult<()> {
        validate_content(&self.content)
    }
}

fn validate_content(content: &BlockContent) -> ClientResult<()> {
    if let BlockContent::Accordion(accordion) = content {
        if accordion.items.iter().any(|item| item.header.trim().is_empty()) {
            return Err(ClientError::Validation(
                "accordion items need a header".to_string(),
            ));
        }
    }
    Ok(())
}

/// PATCH body for a website.
#[derive(Debug, Clone, Default, Serialize)]
pub struct WebsiteUpdate {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub page_ids: Option<Vec<Id>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub logo_image_id: Option<Id>,
}

impl Validate for WebsiteUpdate {}

/// PATCH body for a page.
#[derive(Debug, Clone, Default, Serialize)]
pub struct PageUpdate {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub block_ids: Option<Vec<Id>>,
}

impl Validate for PageUpdate {}

/// PATCH body for a block; content is replaced whole.
#[derive(Debug, Clone, Serialize)]
pub struct BlockUpdate {
    #[serde(flatten)]
    pub content: BlockContent,
}

impl Validate for BlockUpdate {
    fn validate(&self) -> ClientResult<()> {
        validate_content(&self.content)
    }
}
