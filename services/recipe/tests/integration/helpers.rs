use std::sync::{Arc, Mutex};

use chrono::Utc;
use uuid::Uuid;

use ladle_recipe::domain::repository::{
    IngredientRepository, RecipeRepository, TagRepository, TokenRepository, UserRepository,
};
use ladle_recipe::domain::types::{
    AuthToken, Ingredient, NewRecipe, Recipe, RecipeChanges, RecipeDetail, RecipeFilter, Tag, User,
};
use ladle_recipe::error::RecipeServiceError;

pub const TEST_PASSWORD: &str = "testpass123";

/// Hash with a low cost so test fixtures stay fast.
pub fn test_user(email: &str) -> User {
    let now = Utc::now();
    User {
        id: Uuid::now_v7(),
        email: email.to_owned(),
        password_hash: bcrypt::hash(TEST_PASSWORD, 4).unwrap(),
        is_staff: false,
        is_superuser: false,
        created_at: now,
        updated_at: now,
    }
}

// ── MockUserRepo ─────────────────────────────────────────────────────────────

#[derive(Default)]
pub struct MockUserRepo {
    pub users: Arc<Mutex<Vec<User>>>,
}

impl MockUserRepo {
    pub fn new(users: Vec<User>) -> Self {
        Self {
            users: Arc::new(Mutex::new(users)),
        }
    }
}

impl UserRepository for MockUserRepo {
    async fn find_by_id(&self, id: Uuid) -> Result<Option<User>, RecipeServiceError> {
        Ok(self.users.lock().unwrap().iter().find(|u| u.id == id).cloned())
    }

    async fn find_by_email(&self, email: &str) -> Result<Option<User>, RecipeServiceError> {
        Ok(self
            .users
            .lock()
            .unwrap()
            .iter()
            .find(|u| u.email == email)
            .cloned())
    }

    async fn create(&self, user: &User) -> Result<(), RecipeServiceError> {
        self.users.lock().unwrap().push(user.clone());
        Ok(())
    }
}

// ── MockTokenRepo ────────────────────────────────────────────────────────────

#[derive(Default)]
pub struct MockTokenRepo {
    pub tokens: Arc<Mutex<Vec<AuthToken>>>,
    pub users: Arc<Mutex<Vec<User>>>,
}

impl TokenRepository for MockTokenRepo {
    async fn find_by_user(&self, user_id: Uuid) -> Result<Option<AuthToken>, RecipeServiceError> {
        Ok(self
            .tokens
            .lock()
            .unwrap()
            .iter()
            .find(|t| t.user_id == user_id)
            .cloned())
    }

    async fn find_user_by_key(&self, key: &str) -> Result<Option<User>, RecipeServiceError> {
        let user_id = self
            .tokens
            .lock()
            .unwrap()
            .iter()
            .find(|t| t.key == key)
            .map(|t| t.user_id);
        let Some(user_id) = user_id else {
            return Ok(None);
        };
        Ok(self.users.lock().unwrap().iter().find(|u| u.id == user_id).cloned())
    }

    async fn create(&self, token: &AuthToken) -> Result<(), RecipeServiceError> {
        self.tokens.lock().unwrap().push(token.clone());
        Ok(())
    }
}

// ── MockTagRepo ──────────────────────────────────────────────────────────────

#[derive(Default)]
pub struct MockTagRepo {
    pub tags: Arc<Mutex<Vec<Tag>>>,
}

impl MockTagRepo {
    pub fn new(tags: Vec<Tag>) -> Self {
        Self {
            tags: Arc::new(Mutex::new(tags)),
        }
    }
}

impl TagRepository for MockTagRepo {
    async fn list(&self, user_id: Uuid) -> Result<Vec<Tag>, RecipeServiceError> {
        let mut tags: Vec<Tag> = self
            .tags
            .lock()
            .unwrap()
            .iter()
            .filter(|t| t.user_id == user_id)
            .cloned()
            .collect();
        tags.sort_by(|a, b| b.name.cmp(&a.name));
        Ok(tags)
    }

    async fn list_by_ids(
        &self,
        user_id: Uuid,
        ids: &[i32],
    ) -> Result<Vec<Tag>, RecipeServiceError> {
        Ok(self
            .tags
            .lock()
            .unwrap()
            .iter()
            .filter(|t| t.user_id == user_id && ids.contains(&t.id))
            .cloned()
            .collect())
    }

    async fn create(&self, user_id: Uuid, name: &str) -> Result<Tag, RecipeServiceError> {
        let mut tags = self.tags.lock().unwrap();
        let tag = Tag {
            id: tags.len() as i32 + 1,
            user_id,
            name: name.to_owned(),
        };
        tags.push(tag.clone());
        Ok(tag)
    }
}

// ── MockIngredientRepo ───────────────────────────────────────────────────────

#[derive(Default)]
pub struct MockIngredientRepo {
    pub ingredients: Arc<Mutex<Vec<Ingredient>>>,
}

impl MockIngredientRepo {
    pub fn new(ingredients: Vec<Ingredient>) -> Self {
        Self {
            ingredients: Arc::new(Mutex::new(ingredients)),
        }
    }
}

impl IngredientRepository for MockIngredientRepo {
    async fn list(&self, user_id: Uuid) -> Result<Vec<Ingredient>, RecipeServiceError> {
        let mut items: Vec<Ingredient> = self
            .ingredients
            .lock()
            .unwrap()
            .iter()
            .filter(|i| i.user_id == user_id)
            .cloned()
            .collect();
        items.sort_by(|a, b| b.name.cmp(&a.name));
        Ok(items)
    }

    async fn list_by_ids(
        &self,
        user_id: Uuid,
        ids: &[i32],
    ) -> Result<Vec<Ingredient>, RecipeServiceError> {
        Ok(self
            .ingredients
            .lock()
            .unwrap()
            .iter()
            .filter(|i| i.user_id == user_id && ids.contains(&i.id))
            .cloned()
            .collect())
    }

    async fn create(&self, user_id: Uuid, name: &str) -> Result<Ingredient, RecipeServiceError> {
        let mut ingredients = self.ingredients.lock().unwrap();
        let ingredient = Ingredient {
            id: ingredients.len() as i32 + 1,
            user_id,
            name: name.to_owned(),
        };
        ingredients.push(ingredient.clone());
        Ok(ingredient)
    }
}

// ── MockRecipeRepo ───────────────────────────────────────────────────────────

#[derive(Default)]
pub struct MockRecipeRepo {
    pub recipes: Arc<Mutex<Vec<Recipe>>>,
    pub tags: Arc<Mutex<Vec<Tag>>>,
    pub ingredients: Arc<Mutex<Vec<Ingredient>>>,
}

impl RecipeRepository for MockRecipeRepo {
    async fn list(
        &self,
        user_id: Uuid,
        filter: &RecipeFilter,
    ) -> Result<Vec<Recipe>, RecipeServiceError> {
        let mut recipes: Vec<Recipe> = self
            .recipes
            .lock()
            .unwrap()
            .iter()
            .filter(|r| r.user_id == user_id)
            .filter(|r| {
                filter.tag_ids.is_empty() || r.tag_ids.iter().any(|id| filter.tag_ids.contains(id))
            })
            .filter(|r| {
                filter.ingredient_ids.is_empty()
                    || r.ingredient_ids
                        .iter()
                        .any(|id| filter.ingredient_ids.contains(id))
            })
            .cloned()
            .collect();
        recipes.sort_by(|a, b| b.id.cmp(&a.id));
        Ok(recipes)
    }

    async fn get(
        &self,
        user_id: Uuid,
        id: i32,
    ) -> Result<Option<RecipeDetail>, RecipeServiceError> {
        let recipe = self
            .recipes
            .lock()
            .unwrap()
            .iter()
            .find(|r| r.user_id == user_id && r.id == id)
            .cloned();
        let Some(recipe) = recipe else {
            return Ok(None);
        };
        let tags = self
            .tags
            .lock()
            .unwrap()
            .iter()
            .filter(|t| recipe.tag_ids.contains(&t.id))
            .cloned()
            .collect();
        let ingredients = self
            .ingredients
            .lock()
            .unwrap()
            .iter()
            .filter(|i| recipe.ingredient_ids.contains(&i.id))
            .cloned()
            .collect();
        Ok(Some(RecipeDetail {
            recipe,
            tags,
            ingredients,
        }))
    }

    async fn create(&self, new: &NewRecipe) -> Result<Recipe, RecipeServiceError> {
        let mut recipes = self.recipes.lock().unwrap();
        let recipe = Recipe {
            id: recipes.len() as i32 + 1,
            user_id: new.user_id,
            title: new.title.clone(),
            time_minutes: new.time_minutes,
            price: new.price,
            description: new.description.clone(),
            link: new.link.clone(),
            image: None,
            tag_ids: new.tag_ids.clone(),
            ingredient_ids: new.ingredient_ids.clone(),
        };
        recipes.push(recipe.clone());
        Ok(recipe)
    }

    async fn update(
        &self,
        user_id: Uuid,
        id: i32,
        changes: &RecipeChanges,
    ) -> Result<bool, RecipeServiceError> {
        let mut recipes = self.recipes.lock().unwrap();
        let Some(recipe) = recipes
            .iter_mut()
            .find(|r| r.user_id == user_id && r.id == id)
        else {
            return Ok(false);
        };
        if let Some(ref title) = changes.title {
            recipe.title = title.clone();
        }
        if let Some(minutes) = changes.time_minutes {
            recipe.time_minutes = minutes;
        }
        if let Some(price) = changes.price {
            recipe.price = price;
        }
        if let Some(ref description) = changes.description {
            recipe.description = Some(description.clone());
        }
        if let Some(ref link) = changes.link {
            recipe.link = Some(link.clone());
        }
        if let Some(ref ids) = changes.tag_ids {
            recipe.tag_ids = ids.clone();
        }
        if let Some(ref ids) = changes.ingredient_ids {
            recipe.ingredient_ids = ids.clone();
        }
        Ok(true)
    }

    async fn set_image(
        &self,
        user_id: Uuid,
        id: i32,
        path: &str,
    ) -> Result<bool, RecipeServiceError> {
        let mut recipes = self.recipes.lock().unwrap();
        match recipes
            .iter_mut()
            .find(|r| r.user_id == user_id && r.id == id)
        {
            Some(recipe) => {
                recipe.image = Some(path.to_owned());
                Ok(true)
            }
            None => Ok(false),
        }
    }
}
