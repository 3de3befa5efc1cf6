use sea_orm::DatabaseConnection;

use crate::{
    model::{
        api::PageResponse,
        hierarchy::{BlockDto, BlockPayload, BlockQuery},
    },
    server::{
        data::{block::BlockRepository, populate::NameLookup, query::PageRequest},
        error::Error,
        model::auth::AuthUser,
        service::ancestry::{AncestryChain, AncestryValidator},
        util::{
            db::{ensure_deleted, on_foreign_key_violation},
            validate::required_name,
        },
    },
};

pub struct BlockService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> BlockService<'a> {
    /// Creates a new instance of [`BlockService`]
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    pub async fn list(&self, query: BlockQuery) -> Result<PageResponse<BlockDto>, Error> {
        let page = PageRequest::new(query.page, query.limit)?;
        let page = BlockRepository::new(self.db).list(&query, page).await?;

        let items = self.populate(&page.items).await?;

        Ok(page.with_items(items).into_response())
    }

    pub async fn get(&self, id: i32) -> Result<BlockDto, Error> {
        let block = BlockRepository::new(self.db)
            .find_by_id(id)
            .await?
            .ok_or(Error::NotFound("Block"))?;

        self.populate_one(block).await
    }

    /// Creates a block after checking its assembly exists
    pub async fn create(&self, user: &AuthUser, payload: BlockPayload) -> Result<BlockDto, Error> {
        let name = required_name(payload.name)?;

        AncestryValidator::new(self.db)
            .validate(&AncestryChain {
                assembly: payload.assembly_id,
                ..Default::default()
            })
            .await?;

        let block = entity::block::Model {
            id: 0,
            name,
            assembly_id: payload.assembly_id,
            created_by: Some(user.id),
            updated_by: Some(user.id),
            created_at: Default::default(),
            updated_at: Default::default(),
        };

        let block = BlockRepository::new(self.db).create(block).await?;

        tracing::info!(block_id = block.id, user_id = user.id, "Created block");

        self.populate_one(block).await
    }

    /// Applies the provided fields of `payload`, absent fields keep their stored value
    pub async fn update(
        &self,
        user: &AuthUser,
        id: i32,
        payload: BlockPayload,
    ) -> Result<BlockDto, Error> {
        let repo = BlockRepository::new(self.db);
        let mut block = repo.find_by_id(id).await?.ok_or(Error::NotFound("Block"))?;

        if payload.name.is_some() {
            block.name = required_name(payload.name)?;
        }
        if payload.assembly_id.is_some() {
            block.assembly_id = payload.assembly_id;
        }

        AncestryValidator::new(self.db)
            .validate(&AncestryChain {
                assembly: block.assembly_id,
                ..Default::default()
            })
            .await?;

        block.updated_by = Some(user.id);
        let block = repo.update(block).await?;

        self.populate_one(block).await
    }

    pub async fn delete(&self, id: i32) -> Result<(), Error> {
        let result = BlockRepository::new(self.db)
            .delete(id)
            .await
            .map_err(|err| on_foreign_key_violation(err, "Block"))?;

        ensure_deleted(result, "Block")
    }

    async fn populate(&self, blocks: &[entity::block::Model]) -> Result<Vec<BlockDto>, Error> {
        let (users, parents) = tokio::try_join!(
            NameLookup::users(
                self.db,
                blocks.iter().flat_map(|r| [r.created_by, r.updated_by]),
            ),
            NameLookup::assemblies(self.db, blocks.iter().map(|r| r.assembly_id)),
        )?;

        Ok(blocks
            .iter()
            .map(|r| BlockDto {
                id: r.id,
                name: r.name.clone(),
                assembly: parents.get(r.assembly_id),
                audit: users.audit(r.created_by, r.updated_by, r.created_at, r.updated_at),
            })
            .collect())
    }

    async fn populate_one(&self, block: entity::block::Model) -> Result<BlockDto, Error> {
        self.populate(std::slice::from_ref(&block))
            .await?
            .pop()
            .ok_or_else(|| Error::InternalError(format!("Failed to populate block {}", block.id)))
    }
}
