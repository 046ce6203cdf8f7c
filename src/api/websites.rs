//! Landing-site actions: websites, their pages and the pages' content blocks.

use crate::errors::{ClientError, ClientResult};
use crate::models::{
    Block, BlockUpdate, Id, NewBlock, NewPage, NewWebsite, Page, PageUpdate, Website,
    WebsiteUpdate,
};
use crate::store::{ActionMeta, Relation};
use crate::Dashboard;

impl Dashboard {
    /// GET /v1.0/websites/:id
    pub async fn fetch_website(&self, id: Id) -> ClientResult<Website> {
        self.fetch(id).await
    }

    /// POST /v1.0/websites
    pub async fn create_website(&self, request: &NewWebsite) -> ClientResult<Website> {
        self.create(request, ActionMeta::default()).await
    }

    /// PATCH /v1.0/websites/:id
    pub async fn update_website(&self, id: Id, changes: &WebsiteUpdate) -> ClientResult<Website> {
        self.update(id, changes).await
    }

    /// DELETE /v1.0/websites/:id
    pub async fn delete_website(&self, id: Id) -> ClientResult<()> {
        self.delete::<Website>(id).await
    }

    /// Persist a new page order for a website.
    pub async fn reorder_pages(&self, website_id: Id, page_ids: Vec<Id>) -> ClientResult<Website> {
        self.check_reorder(Relation::WebsitePages, website_id, &page_ids)
            .await?;
        let changes = WebsiteUpdate {
            page_ids: Some(page_ids),
            ..Default::default()
        };
        self.update(website_id, &changes).await
    }

    /// GET /v1.0/pages/:id
    pub async fn fetch_page(&self, id: Id) -> ClientResult<Page> {
        self.fetch(id).await
    }

    /// POST /v1.0/pages - appended to the website's page list if the website is cached.
    pub async fn create_page(&self, request: &NewPage) -> ClientResult<Page> {
        self.create(request, ActionMeta::parent(request.website_id))
            .await
    }

    /// PATCH /v1.0/pages/:id
    pub async fn update_page(&self, id: Id, changes: &PageUpdate) -> ClientResult<Page> {
        self.update(id, changes).await
    }

    /// DELETE /v1.0/pages/:id
    pub async fn delete_page(&self, id: Id) -> ClientResult<()> {
        self.delete::<Page>(id).await
    }

    /// Persist a new block order for a page.
    pub async fn reorder_blocks(&self, page_id: Id, block_ids: Vec<Id>) -> ClientResult<Page> {
        self.check_reorder(Relation::PageBlocks, page_id, &block_ids)
            .await?;
        let changes = PageUpdate {
            block_ids: Some(block_ids),
            ..Default::default()
        };
        self.update(page_id, &changes).await
    }

    /// GET /v1.0/blocks/:id
    pub async fn fetch_block(&self, id: Id) -> ClientResult<Block> {
        self.fetch(id).await
    }

    /// POST /v1.0/blocks - appended to the page's block list if the page is cached.
    pub async fn create_block(&self, request: &NewBlock) -> ClientResult<Block> {
        self.create(request, ActionMeta::parent(request.page_id))
            .await
    }

    /// PATCH /v1.0/blocks/:id
    pub async fn update_block(&self, id: Id, changes: &BlockUpdate) -> ClientResult<Block> {
        self.update(id, changes).await
    }

    /// DELETE /v1.0/blocks/:id
    pub async fn delete_block(&self, id: Id) -> ClientResult<()> {
        self.delete::<Block>(id).await
    }

    /// A reorder must be a permutation of the cached list. Uncached parents are not checked.
    async fn check_reorder(&self, relation: Relation, parent_id: Id, order: &[Id]) -> ClientResult<()> {
        let store = self.store.read().await;
        let Some(current) = store.children(relation, parent_id) else {
            return Ok(());
        };

        let mut expected = current.to_vec();
        let mut proposed = order.to_vec();
        expected.sort_unstable();
        proposed.sort_unstable();

        if expected != proposed {
            return Err(ClientError::Validation(format!(
                "new order for {} {} must contain exactly its current {}s",
                relation.parent_kind(),
                parent_id,
                relation.child_kind()
            )));
        }
        Ok(())
    }
}
