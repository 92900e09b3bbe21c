use std::collections::HashMap;

use anyhow::Context as _;
use sea_orm::{
    ActiveModelTrait, ActiveValue::Set, ColumnTrait, DatabaseConnection, EntityTrait,
    IntoActiveModel as _, JoinType, ModelTrait, QueryFilter, QueryOrder, QuerySelect,
    RelationTrait, TransactionTrait,
};
use uuid::Uuid;

use ladle_recipe_schema::{
    auth_tokens, ingredients, recipe_ingredients, recipe_tags, recipes, tags, users,
};

use crate::domain::repository::{
    IngredientRepository, RecipeRepository, TagRepository, TokenRepository, UserRepository,
};
use crate::domain::types::{
    AuthToken, Ingredient, NewRecipe, Recipe, RecipeChanges, RecipeDetail, RecipeFilter, Tag, User,
};
use crate::error::RecipeServiceError;

fn dedup_ids(ids: &[i32]) -> Vec<i32> {
    let mut ids = ids.to_vec();
    ids.sort_unstable();
    ids.dedup();
    ids
}

// ── User repository ──────────────────────────────────────────────────────────

#[derive(Clone)]
pub struct DbUserRepository {
    pub db: DatabaseConnection,
}

impl UserRepository for DbUserRepository {
    async fn find_by_id(&self, id: Uuid) -> Result<Option<User>, RecipeServiceError> {
        let model = users::Entity::find_by_id(id)
            .one(&self.db)
            .await
            .context("find user by id")?;
        Ok(model.map(user_from_model))
    }

    async fn find_by_email(&self, email: &str) -> Result<Option<User>, RecipeServiceError> {
        let model = users::Entity::find()
            .filter(users::Column::Email.eq(email))
            .one(&self.db)
            .await
            .context("find user by email")?;
        Ok(model.map(user_from_model))
    }

    async fn create(&self, user: &User) -> Result<(), RecipeServiceError> {
        users::ActiveModel {
            id: Set(user.id),
            email: Set(user.email.clone()),
            password_hash: Set(user.password_hash.clone()),
            is_staff: Set(user.is_staff),
            is_superuser: Set(user.is_superuser),
            created_at: Set(user.created_at),
            updated_at: Set(user.updated_at),
        }
        .insert(&self.db)
        .await
        .context("create user")?;
        Ok(())
    }
}

fn user_from_model(model: users::Model) -> User {
    User {
        id: model.id,
        email: model.email,
        password_hash: model.password_hash,
        is_staff: model.is_staff,
        is_superuser: model.is_superuser,
        created_at: model.created_at,
        updated_at: model.updated_at,
    }
}

// ── Token repository ─────────────────────────────────────────────────────────

#[derive(Clone)]
pub struct DbTokenRepository {
    pub db: DatabaseConnection,
}

impl TokenRepository for DbTokenRepository {
    async fn find_by_user(&self, user_id: Uuid) -> Result<Option<AuthToken>, RecipeServiceError> {
        let model = auth_tokens::Entity::find()
            .filter(auth_tokens::Column::UserId.eq(user_id))
            .one(&self.db)
            .await
            .context("find token by user")?;
        Ok(model.map(|m| AuthToken {
            key: m.key,
            user_id: m.user_id,
            created_at: m.created_at,
        }))
    }

    async fn find_user_by_key(&self, key: &str) -> Result<Option<User>, RecipeServiceError> {
        let result = auth_tokens::Entity::find_by_id(key.to_owned())
            .find_also_related(users::Entity)
            .one(&self.db)
            .await
            .context("find user by token key")?;
        Ok(result.and_then(|(_, user)| user).map(user_from_model))
    }

    async fn create(&self, token: &AuthToken) -> Result<(), RecipeServiceError> {
        auth_tokens::ActiveModel {
            key: Set(token.key.clone()),
            user_id: Set(token.user_id),
            created_at: Set(token.created_at),
        }
        .insert(&self.db)
        .await
        .context("create token")?;
        Ok(())
    }
}

// ── Tag repository ───────────────────────────────────────────────────────────

#[derive(Clone)]
pub struct DbTagRepository {
    pub db: DatabaseConnection,
}

impl TagRepository for DbTagRepository {
    async fn list(&self, user_id: Uuid) -> Result<Vec<Tag>, RecipeServiceError> {
        let models = tags::Entity::find()
            .filter(tags::Column::UserId.eq(user_id))
            .order_by_desc(tags::Column::Name)
            .all(&self.db)
            .await
            .context("list tags")?;
        Ok(models.into_iter().map(tag_from_model).collect())
    }

    async fn list_by_ids(
        &self,
        user_id: Uuid,
        ids: &[i32],
    ) -> Result<Vec<Tag>, RecipeServiceError> {
        if ids.is_empty() {
            return Ok(vec![]);
        }
        let models = tags::Entity::find()
            .filter(tags::Column::UserId.eq(user_id))
            .filter(tags::Column::Id.is_in(ids.iter().copied()))
            .all(&self.db)
            .await
            .context("list tags by ids")?;
        Ok(models.into_iter().map(tag_from_model).collect())
    }

    async fn create(&self, user_id: Uuid, name: &str) -> Result<Tag, RecipeServiceError> {
        let model = tags::ActiveModel {
            user_id: Set(user_id),
            name: Set(name.to_owned()),
            ..Default::default()
        }
        .insert(&self.db)
        .await
        .context("create tag")?;
        Ok(tag_from_model(model))
    }
}

fn tag_from_model(model: tags::Model) -> Tag {
    Tag {
        id: model.id,
        user_id: model.user_id,
        name: model.name,
    }
}

// ── Ingredient repository ────────────────────────────────────────────────────

#[derive(Clone)]
pub struct DbIngredientRepository {
    pub db: DatabaseConnection,
}

impl IngredientRepository for DbIngredientRepository {
    async fn list(&self, user_id: Uuid) -> Result<Vec<Ingredient>, RecipeServiceError> {
        let models = ingredients::Entity::find()
            .filter(ingredients::Column::UserId.eq(user_id))
            .order_by_desc(ingredients::Column::Name)
            .all(&self.db)
            .await
            .context("list ingredients")?;
        Ok(models.into_iter().map(ingredient_from_model).collect())
    }

    async fn list_by_ids(
        &self,
        user_id: Uuid,
        ids: &[i32],
    ) -> Result<Vec<Ingredient>, RecipeServiceError> {
        if ids.is_empty() {
            return Ok(vec![]);
        }
        let models = ingredients::Entity::find()
            .filter(ingredients::Column::UserId.eq(user_id))
            .filter(ingredients::Column::Id.is_in(ids.iter().copied()))
            .all(&self.db)
            .await
            .context("list ingredients by ids")?;
        Ok(models.into_iter().map(ingredient_from_model).collect())
    }

    async fn create(&self, user_id: Uuid, name: &str) -> Result<Ingredient, RecipeServiceError> {
        let model = ingredients::ActiveModel {
            user_id: Set(user_id),
            name: Set(name.to_owned()),
            ..Default::default()
        }
        .insert(&self.db)
        .await
        .context("create ingredient")?;
        Ok(ingredient_from_model(model))
    }
}

fn ingredient_from_model(model: ingredients::Model) -> Ingredient {
    Ingredient {
        id: model.id,
        user_id: model.user_id,
        name: model.name,
    }
}

// ── Recipe repository ────────────────────────────────────────────────────────

#[derive(Clone)]
pub struct DbRecipeRepository {
    pub db: DatabaseConnection,
}

impl RecipeRepository for DbRecipeRepository {
    async fn list(
        &self,
        user_id: Uuid,
        filter: &RecipeFilter,
    ) -> Result<Vec<Recipe>, RecipeServiceError> {
        let mut query = recipes::Entity::find().filter(recipes::Column::UserId.eq(user_id));
        if !filter.tag_ids.is_empty() {
            query = query
                .join(JoinType::InnerJoin, recipes::Relation::RecipeTags.def())
                .filter(recipe_tags::Column::TagId.is_in(filter.tag_ids.iter().copied()))
                .distinct();
        }
        if !filter.ingredient_ids.is_empty() {
            query = query
                .join(JoinType::InnerJoin, recipes::Relation::RecipeIngredients.def())
                .filter(
                    recipe_ingredients::Column::IngredientId
                        .is_in(filter.ingredient_ids.iter().copied()),
                )
                .distinct();
        }
        let models = query
            .order_by_desc(recipes::Column::Id)
            .all(&self.db)
            .await
            .context("list recipes")?;

        let recipe_ids: Vec<i32> = models.iter().map(|m| m.id).collect();
        let (mut tag_links, mut ingredient_links) = self.load_links(&recipe_ids).await?;

        Ok(models
            .into_iter()
            .map(|m| {
                let tag_ids = tag_links.remove(&m.id).unwrap_or_default();
                let ingredient_ids = ingredient_links.remove(&m.id).unwrap_or_default();
                recipe_from_model(m, tag_ids, ingredient_ids)
            })
            .collect())
    }

    async fn get(
        &self,
        user_id: Uuid,
        id: i32,
    ) -> Result<Option<RecipeDetail>, RecipeServiceError> {
        let model = recipes::Entity::find_by_id(id)
            .filter(recipes::Column::UserId.eq(user_id))
            .one(&self.db)
            .await
            .context("get recipe")?;
        let Some(model) = model else {
            return Ok(None);
        };

        let tags = model
            .find_related(tags::Entity)
            .all(&self.db)
            .await
            .context("load recipe tags")?;
        let ingredients = model
            .find_related(ingredients::Entity)
            .all(&self.db)
            .await
            .context("load recipe ingredients")?;

        let tag_ids = tags.iter().map(|t| t.id).collect();
        let ingredient_ids = ingredients.iter().map(|i| i.id).collect();
        Ok(Some(RecipeDetail {
            recipe: recipe_from_model(model, tag_ids, ingredient_ids),
            tags: tags.into_iter().map(tag_from_model).collect(),
            ingredients: ingredients.into_iter().map(ingredient_from_model).collect(),
        }))
    }

    async fn create(&self, new: &NewRecipe) -> Result<Recipe, RecipeServiceError> {
        let tag_ids = dedup_ids(&new.tag_ids);
        let ingredient_ids = dedup_ids(&new.ingredient_ids);

        let txn = self.db.begin().await.context("begin create recipe")?;
        let model = recipes::ActiveModel {
            user_id: Set(new.user_id),
            title: Set(new.title.clone()),
            time_minutes: Set(new.time_minutes),
            price: Set(new.price),
            description: Set(new.description.clone()),
            link: Set(new.link.clone()),
            image: Set(None),
            ..Default::default()
        }
        .insert(&txn)
        .await
        .context("insert recipe")?;

        if !tag_ids.is_empty() {
            recipe_tags::Entity::insert_many(tag_ids.iter().map(|&tag_id| {
                recipe_tags::ActiveModel {
                    recipe_id: Set(model.id),
                    tag_id: Set(tag_id),
                }
            }))
            .exec(&txn)
            .await
            .context("link recipe tags")?;
        }
        if !ingredient_ids.is_empty() {
            recipe_ingredients::Entity::insert_many(ingredient_ids.iter().map(|&ingredient_id| {
                recipe_ingredients::ActiveModel {
                    recipe_id: Set(model.id),
                    ingredient_id: Set(ingredient_id),
                }
            }))
            .exec(&txn)
            .await
            .context("link recipe ingredients")?;
        }
        txn.commit().await.context("commit create recipe")?;

        Ok(recipe_from_model(model, tag_ids, ingredient_ids))
    }

    async fn update(
        &self,
        user_id: Uuid,
        id: i32,
        changes: &RecipeChanges,
    ) -> Result<bool, RecipeServiceError> {
        let txn = self.db.begin().await.context("begin update recipe")?;

        let model = recipes::Entity::find_by_id(id)
            .filter(recipes::Column::UserId.eq(user_id))
            .one(&txn)
            .await
            .context("find recipe for update")?;
        let Some(model) = model else {
            return Ok(false);
        };

        let has_scalar_change = changes.title.is_some()
            || changes.time_minutes.is_some()
            || changes.price.is_some()
            || changes.description.is_some()
            || changes.link.is_some();
        if has_scalar_change {
            let mut am = model.into_active_model();
            if let Some(ref title) = changes.title {
                am.title = Set(title.clone());
            }
            if let Some(minutes) = changes.time_minutes {
                am.time_minutes = Set(minutes);
            }
            if let Some(price) = changes.price {
                am.price = Set(price);
            }
            if let Some(ref description) = changes.description {
                am.description = Set(Some(description.clone()));
            }
            if let Some(ref link) = changes.link {
                am.link = Set(Some(link.clone()));
            }
            am.update(&txn).await.context("update recipe")?;
        }

        if let Some(ref ids) = changes.tag_ids {
            recipe_tags::Entity::delete_many()
                .filter(recipe_tags::Column::RecipeId.eq(id))
                .exec(&txn)
                .await
                .context("clear recipe tags")?;
            let ids = dedup_ids(ids);
            if !ids.is_empty() {
                recipe_tags::Entity::insert_many(ids.iter().map(|&tag_id| {
                    recipe_tags::ActiveModel {
                        recipe_id: Set(id),
                        tag_id: Set(tag_id),
                    }
                }))
                .exec(&txn)
                .await
                .context("relink recipe tags")?;
            }
        }
        if let Some(ref ids) = changes.ingredient_ids {
            recipe_ingredients::Entity::delete_many()
                .filter(recipe_ingredients::Column::RecipeId.eq(id))
                .exec(&txn)
                .await
                .context("clear recipe ingredients")?;
            let ids = dedup_ids(ids);
            if !ids.is_empty() {
                recipe_ingredients::Entity::insert_many(ids.iter().map(|&ingredient_id| {
                    recipe_ingredients::ActiveModel {
                        recipe_id: Set(id),
                        ingredient_id: Set(ingredient_id),
                    }
                }))
                .exec(&txn)
                .await
                .context("relink recipe ingredients")?;
            }
        }

        txn.commit().await.context("commit update recipe")?;
        Ok(true)
    }

    async fn set_image(
        &self,
        user_id: Uuid,
        id: i32,
        path: &str,
    ) -> Result<bool, RecipeServiceError> {
        let model = recipes::Entity::find_by_id(id)
            .filter(recipes::Column::UserId.eq(user_id))
            .one(&self.db)
            .await
            .context("find recipe for image")?;
        let Some(model) = model else {
            return Ok(false);
        };
        let mut am = model.into_active_model();
        am.image = Set(Some(path.to_owned()));
        am.update(&self.db).await.context("set recipe image")?;
        Ok(true)
    }
}

impl DbRecipeRepository {
    /// Load tag/ingredient id links for a batch of recipes in two queries.
    async fn load_links(
        &self,
        recipe_ids: &[i32],
    ) -> Result<(HashMap<i32, Vec<i32>>, HashMap<i32, Vec<i32>>), RecipeServiceError> {
        let mut tag_links: HashMap<i32, Vec<i32>> = HashMap::new();
        let mut ingredient_links: HashMap<i32, Vec<i32>> = HashMap::new();
        if recipe_ids.is_empty() {
            return Ok((tag_links, ingredient_links));
        }

        let tag_rows = recipe_tags::Entity::find()
            .filter(recipe_tags::Column::RecipeId.is_in(recipe_ids.iter().copied()))
            .all(&self.db)
            .await
            .context("load recipe tag links")?;
        for row in tag_rows {
            tag_links.entry(row.recipe_id).or_default().push(row.tag_id);
        }

        let ingredient_rows = recipe_ingredients::Entity::find()
            .filter(recipe_ingredients::Column::RecipeId.is_in(recipe_ids.iter().copied()))
            .all(&self.db)
            .await
            .context("load recipe ingredient links")?;
        for row in ingredient_rows {
            ingredient_links
                .entry(row.recipe_id)
                .or_default()
                .push(row.ingredient_id);
        }

        Ok((tag_links, ingredient_links))
    }
}

fn recipe_from_model(model: recipes::Model, tag_ids: Vec<i32>, ingredient_ids: Vec<i32>) -> Recipe {
    Recipe {
        id: model.id,
        user_id: model.user_id,
        title: model.title,
        time_minutes: model.time_minutes,
        price: model.price,
        description: model.description,
        link: model.link,
        image: model.image,
        tag_ids,
        ingredient_ids,
    }
}
